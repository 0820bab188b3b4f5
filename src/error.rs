//! Error types shared by every layer of the display stack

use core::fmt;

/// Why a rectangle was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsReason {
    Negative,
    Empty,
    Overshoot,
    PayloadLength,
}

/// A coordinate or extent that does not fit on the screen.
///
/// The operation that produced it did not touch the framebuffer or the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundsError {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub reason: BoundsReason,
}

impl BoundsError {
    pub const fn new(x: i32, y: i32, width: i32, height: i32, reason: BoundsReason) -> Self {
        Self {
            x,
            y,
            width,
            height,
            reason,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    /// The bus refused or aborted a transfer
    Bus,
    /// The D/C line could not be driven
    ModeLine,
    /// `drain_and_check` ran out of its poll budget
    Timeout,
    /// More descriptors than one batch may carry
    BatchTooLarge,
    /// An argument block longer than a descriptor can hold
    ArgumentOverflow,
}

impl TransportError {
    /// Transient bus conditions; the same batch may be submitted again.
    pub const fn is_retryable(self) -> bool {
        matches!(
            self,
            TransportError::Bus | TransportError::ModeLine | TransportError::Timeout
        )
    }
}

/// One of the framebuffer halves could not be reserved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationError {
    pub bytes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    UnknownFontSize(u16),
    InvalidDimensions { width: usize, height: usize },
    DimensionMismatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    Bounds(BoundsError),
    Transport(TransportError),
    Allocation(AllocationError),
    Config(ConfigError),
    /// Reset or backlight pin failure
    Gpio,
    /// Drawing was requested before the panel finished its init sequence
    NotReady,
}

impl Error {
    pub const fn is_bounds(&self) -> bool {
        matches!(self, Error::Bounds(_))
    }
}

impl From<BoundsError> for Error {
    fn from(err: BoundsError) -> Self {
        Error::Bounds(err)
    }
}

impl From<TransportError> for Error {
    fn from(err: TransportError) -> Self {
        Error::Transport(err)
    }
}

impl From<AllocationError> for Error {
    fn from(err: AllocationError) -> Self {
        Error::Allocation(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Config(err)
    }
}

impl fmt::Display for BoundsReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundsReason::Negative => write!(f, "negative"),
            BoundsReason::Empty => write!(f, "empty"),
            BoundsReason::Overshoot => write!(f, "overshoot"),
            BoundsReason::PayloadLength => write!(f, "payload length"),
        }
    }
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bad region ({}) x={} y={} w={} h={}",
            self.reason, self.x, self.y, self.width, self.height
        )
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Bus => write!(f, "bus transfer failed"),
            TransportError::ModeLine => write!(f, "D/C line failed"),
            TransportError::Timeout => write!(f, "transfer did not complete in time"),
            TransportError::BatchTooLarge => write!(f, "batch exceeds queue depth"),
            TransportError::ArgumentOverflow => write!(f, "argument block too long"),
        }
    }
}

impl fmt::Display for AllocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to reserve {} bytes of pixel memory", self.bytes)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownFontSize(points) => write!(f, "unsupported font size {}", points),
            ConfigError::InvalidDimensions { width, height } => {
                write!(f, "invalid screen size {}x{}", width, height)
            }
            ConfigError::DimensionMismatch => {
                write!(f, "framebuffer and panel sizes differ")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Bounds(err) => write!(f, "{}", err),
            Error::Transport(err) => write!(f, "{}", err),
            Error::Allocation(err) => write!(f, "{}", err),
            Error::Config(err) => write!(f, "{}", err),
            Error::Gpio => write!(f, "control pin failed"),
            Error::NotReady => write!(f, "panel not initialized"),
        }
    }
}
