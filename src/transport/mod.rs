//! # Transfer Pipeline
//!
//! Everything the panel receives is a sequence of transfers, each one either
//! a command byte or data (arguments / pixels). The panel tells them apart
//! only by the level of its D/C ("mode") line, so a transport must drive that
//! line to the transfer's [`Mode`] right before the transfer's first bit.
//!
//! ## Modules
//!
//! - `pipeline`: `Pipeline` and the `InFlight` batch guard
//! - `spi`: transport over an `embedded_hal` SPI bus plus a D/C pin
//! - `capture`: in-memory transport that records the wire traffic

pub mod capture;
pub mod pipeline;
pub mod spi;

use core::fmt;

use crate::error::TransportError;
use crate::framebuffer::Framebuffer;

pub use capture::{CaptureTransport, RegionWrite, WireEvent};
pub use pipeline::{InFlight, Pipeline, BATCH_CAPACITY};
pub use spi::SpiTransport;

/// Level of the D/C line: low for commands, high for everything else
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Command,
    Data,
}

impl Mode {
    pub const fn dc_high(self) -> bool {
        matches!(self, Mode::Data)
    }
}

pub const ARG_CAPACITY: usize = 16;

/// Argument bytes that travel inside the descriptor itself
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ArgBlock {
    bytes: [u8; ARG_CAPACITY],
    len: u8,
}

impl ArgBlock {
    pub fn new(args: &[u8]) -> Option<Self> {
        if args.len() > ARG_CAPACITY {
            return None;
        }
        let mut bytes = [0u8; ARG_CAPACITY];
        bytes[..args.len()].copy_from_slice(args);
        Some(Self {
            bytes,
            len: args.len() as u8,
        })
    }

    /// Start/end pair of an address window, big-endian.
    pub const fn window(start: u16, end_inclusive: u16) -> Self {
        let s = start.to_be_bytes();
        let e = end_inclusive.to_be_bytes();
        let mut bytes = [0u8; ARG_CAPACITY];
        bytes[0] = s[0];
        bytes[1] = s[1];
        bytes[2] = e[0];
        bytes[3] = e[1];
        Self { bytes, len: 4 }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Debug for ArgBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArgBlock({:02X?})", self.as_slice())
    }
}

/// Where a pixel payload is read from while it is on the wire
#[derive(Debug, Clone, Copy)]
pub enum PixelSource<'a> {
    /// Packed rows with no stride, e.g. a line buffer
    Contiguous(&'a [u16]),
    /// A rectangle of screen memory, read row by row across the half split
    Framebuffer {
        fb: &'a Framebuffer,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

impl<'a> PixelSource<'a> {
    pub fn len(&self) -> usize {
        match self {
            PixelSource::Contiguous(pixels) => pixels.len(),
            PixelSource::Framebuffer { width, height, .. } => width * height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn rows(&self) -> Rows<'a> {
        Rows {
            source: *self,
            next: 0,
        }
    }
}

/// Row slices of a [`PixelSource`], top to bottom
#[derive(Debug)]
pub struct Rows<'a> {
    source: PixelSource<'a>,
    next: usize,
}

impl<'a> Iterator for Rows<'a> {
    type Item = &'a [u16];

    fn next(&mut self) -> Option<&'a [u16]> {
        match self.source {
            PixelSource::Contiguous(pixels) => {
                if self.next > 0 {
                    return None;
                }
                self.next = 1;
                Some(pixels)
            }
            PixelSource::Framebuffer {
                fb,
                x,
                y,
                width,
                height,
            } => {
                if self.next >= height {
                    return None;
                }
                let row = fb.row(y + self.next)?;
                self.next += 1;
                row.get(x..x + width)
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Payload<'a> {
    Command(u8),
    Args(ArgBlock),
    Pixels(PixelSource<'a>),
}

/// One transfer descriptor, tagged with the D/C level it needs
#[derive(Debug, Clone, Copy)]
pub struct Transfer<'a> {
    pub mode: Mode,
    pub payload: Payload<'a>,
}

impl Transfer<'static> {
    pub const fn command(opcode: u8) -> Self {
        Self {
            mode: Mode::Command,
            payload: Payload::Command(opcode),
        }
    }

    pub fn args(args: &[u8]) -> Result<Self, TransportError> {
        let block = ArgBlock::new(args).ok_or(TransportError::ArgumentOverflow)?;
        Ok(Self::arg_block(block))
    }

    pub const fn arg_block(block: ArgBlock) -> Self {
        Self {
            mode: Mode::Data,
            payload: Payload::Args(block),
        }
    }
}

impl<'a> Transfer<'a> {
    pub const fn pixels(source: PixelSource<'a>) -> Self {
        Self {
            mode: Mode::Data,
            payload: Payload::Pixels(source),
        }
    }

    /// Length on the wire, in bits
    pub fn bit_len(&self) -> usize {
        match &self.payload {
            Payload::Command(_) => 8,
            Payload::Args(block) => block.len() * 8,
            Payload::Pixels(source) => source.len() * 16,
        }
    }
}

/// A queued, possibly DMA-driven link to the panel.
///
/// `start` queues a whole batch; the transfers must go out strictly in slice
/// order, each preceded by setting the D/C line to its `mode`. Pixel sources
/// stay borrowed by the owning [`Pipeline`] until `poll_complete` has
/// reported the batch done, so an implementation may keep reading them after
/// `start` returns.
pub trait Transport {
    type Error: fmt::Debug + Into<TransportError>;

    fn start(&mut self, batch: &[Transfer<'_>]) -> Result<(), Self::Error>;

    /// `Ok(true)` once every transfer of the started batch has finished.
    /// The first failure of the batch is reported here.
    fn poll_complete(&mut self) -> Result<bool, Self::Error>;

    /// Clock in `buf.len()` bytes with the D/C line high
    fn read(&mut self, buf: &mut [u8]) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::framebuffer::Dimensions;

    #[test]
    fn window_args_are_big_endian() {
        let block = ArgBlock::window(0x0102, 0x013F);
        assert_eq!(block.as_slice(), &[0x01, 0x02, 0x01, 0x3F]);
    }

    #[test]
    fn arg_block_rejects_overlong_input() {
        assert!(ArgBlock::new(&[0u8; 17]).is_none());
        assert_eq!(
            Transfer::args(&[0u8; 17]).unwrap_err(),
            TransportError::ArgumentOverflow
        );
        assert_eq!(ArgBlock::new(&[1, 2, 3]).unwrap().len(), 3);
    }

    #[test]
    fn framebuffer_source_reads_rows_across_the_split() {
        let mut fb = Framebuffer::alloc(Dimensions::QVGA).unwrap();
        fb.fill_span(10, 119, 3, Color(0x1111));
        fb.fill_span(10, 120, 3, Color(0x2222));

        let source = PixelSource::Framebuffer {
            fb: &fb,
            x: 10,
            y: 119,
            width: 3,
            height: 2,
        };
        let rows: alloc::vec::Vec<&[u16]> = source.rows().collect();
        assert_eq!(rows, [&[0x1111u16; 3][..], &[0x2222u16; 3][..]]);
        assert_eq!(source.len(), 6);
        assert_eq!(Transfer::pixels(source).bit_len(), 96);
    }
}
