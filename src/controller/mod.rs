//! # Display Controller
//!
//! Bring-up and addressing for ILI9341 / ST7789V panels.
//!
//! ## Modules
//!
//! - `init_tables`: power-on command tables for both controllers
//!
//! ## Bring-up
//!
//! `Uninitialized -> Reset -> Detecting -> Initializing -> Ready`
//!
//! Reset is pulsed low, then the panel ID is read. An all-zero reply means an
//! ILI9341, anything else an ST7789V, unless the configuration forces one.
//! The matching table is played entry by entry and the backlight (active low)
//! is switched on. Any failure parks the controller in `Failed`.

pub mod init_tables;

use core::convert::Infallible;
use core::fmt;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};

use crate::block::BlockWriter;
use crate::config::PanelConfig;
use crate::error::{BoundsError, BoundsReason, Error};
use crate::framebuffer::Dimensions;
use crate::transport::{ArgBlock, Pipeline, Transfer, Transport};

use self::init_tables::{table_for, InitCommand};

/// Read display identification
pub const READ_ID: u8 = 0x04;
/// Column address set
pub const CASET: u8 = 0x2A;
/// Page (row) address set
pub const PASET: u8 = 0x2B;
/// Memory write
pub const RAMWR: u8 = 0x2C;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelVariant {
    Ili9341,
    St7789,
}

impl PanelVariant {
    pub const fn from_id(id: u32) -> Self {
        if id == 0 {
            PanelVariant::Ili9341
        } else {
            PanelVariant::St7789
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PanelVariant::Ili9341 => "ILI9341",
            PanelVariant::St7789 => "ST7789V",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VendorSelect {
    #[default]
    Auto,
    Force(PanelVariant),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Uninitialized,
    Reset,
    Detecting,
    Initializing,
    Ready,
    Failed(Error),
}

impl fmt::Display for ControllerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerState::Uninitialized => write!(f, "uninitialized"),
            ControllerState::Reset => write!(f, "reset"),
            ControllerState::Detecting => write!(f, "detecting"),
            ControllerState::Initializing => write!(f, "initializing"),
            ControllerState::Ready => write!(f, "ready"),
            ControllerState::Failed(err) => write!(f, "failed: {}", err),
        }
    }
}

/// Stand-in for a pin the board does not wire up
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPin;

impl digital::ErrorType for NoPin {
    type Error = Infallible;
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}

/// Column window over `[x0, x1)`
pub fn column_window(x0: u16, x1: u16) -> [Transfer<'static>; 2] {
    [
        Transfer::command(CASET),
        Transfer::arg_block(ArgBlock::window(x0, x1.saturating_sub(1))),
    ]
}

/// Row window over `[y0, y1)`
pub fn row_window(y0: u16, y1: u16) -> [Transfer<'static>; 2] {
    [
        Transfer::command(PASET),
        Transfer::arg_block(ArgBlock::window(y0, y1.saturating_sub(1))),
    ]
}

pub struct DisplayController<T: Transport, RST, BL = NoPin> {
    pipeline: Pipeline<T>,
    reset: RST,
    backlight: BL,
    state: ControllerState,
    variant: Option<PanelVariant>,
    panel_id: Option<u32>,
    config: PanelConfig,
}

impl<T, RST, BL> DisplayController<T, RST, BL>
where
    T: Transport,
    RST: OutputPin,
    BL: OutputPin,
{
    pub fn new(transport: T, reset: RST, backlight: BL, config: PanelConfig) -> Self {
        Self {
            pipeline: Pipeline::new(transport).with_spin_limit(config.drain_spin_limit),
            reset,
            backlight,
            state: ControllerState::Uninitialized,
            variant: None,
            panel_id: None,
            config,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == ControllerState::Ready
    }

    /// Controller the init table was chosen for
    pub fn variant(&self) -> Option<PanelVariant> {
        self.variant
    }

    /// Raw reply of the last ID read
    pub fn panel_id(&self) -> Option<u32> {
        self.panel_id
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn dimensions(&self) -> Dimensions {
        self.config.dimensions
    }

    pub fn set_drain_limit(&mut self, polls: Option<u32>) {
        self.config.drain_spin_limit = polls;
        self.pipeline.set_spin_limit(polls);
    }

    pub fn transport(&self) -> &T {
        self.pipeline.transport()
    }

    pub fn transport_mut(&mut self) -> &mut T {
        self.pipeline.transport_mut()
    }

    /// Run the whole bring-up sequence. Safe to call again after a failure.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<PanelVariant, Error> {
        match self.bring_up(delay) {
            Ok(variant) => {
                self.enter(ControllerState::Ready);
                Ok(variant)
            }
            Err(err) => {
                log::error!("panel init failed: {}", err);
                self.enter(ControllerState::Failed(err));
                Err(err)
            }
        }
    }

    fn bring_up<D: DelayNs>(&mut self, delay: &mut D) -> Result<PanelVariant, Error> {
        self.enter(ControllerState::Reset);
        self.reset.set_low().map_err(|_| Error::Gpio)?;
        delay.delay_ms(self.config.reset_hold_ms);
        self.reset.set_high().map_err(|_| Error::Gpio)?;
        delay.delay_ms(self.config.reset_hold_ms);

        self.enter(ControllerState::Detecting);
        let id = self.read_id()?;
        let detected = PanelVariant::from_id(id);
        let variant = match self.config.vendor {
            VendorSelect::Auto => detected,
            VendorSelect::Force(forced) => forced,
        };
        log::debug!(
            "panel id {:06X}: detected {}, initializing {}",
            id,
            detected.name(),
            variant.name()
        );

        self.enter(ControllerState::Initializing);
        self.play_table(table_for(variant), delay)?;

        self.backlight.set_low().map_err(|_| Error::Gpio)?;
        self.variant = Some(variant);
        Ok(variant)
    }

    /// Issue the read-ID command and clock in the 24-bit reply.
    pub fn read_id(&mut self) -> Result<u32, Error> {
        self.pipeline
            .submit(Transfer::command(READ_ID))?
            .drain_and_check()?;
        let mut reply = [0u8; 4];
        self.pipeline.read(&mut reply[..3])?;
        let id = u32::from_le_bytes(reply);
        self.panel_id = Some(id);
        Ok(id)
    }

    fn play_table<D: DelayNs>(
        &mut self,
        table: &[InitCommand],
        delay: &mut D,
    ) -> Result<(), Error> {
        for entry in table.iter().take_while(|entry| !entry.is_end()) {
            let args = entry.args();
            if args.is_empty() {
                self.pipeline
                    .submit(Transfer::command(entry.command))?
                    .drain_and_check()?;
            } else {
                let batch = [Transfer::command(entry.command), Transfer::args(args)?];
                self.pipeline.submit_many(&batch)?.drain_and_check()?;
            }
            if entry.wants_delay() {
                delay.delay_ms(self.config.command_delay_ms);
            }
        }
        Ok(())
    }

    /// Backlight is active low.
    pub fn set_backlight(&mut self, on: bool) -> Result<(), Error> {
        let level = if on {
            self.backlight.set_low()
        } else {
            self.backlight.set_high()
        };
        level.map_err(|_| Error::Gpio)
    }

    /// Address columns `[x0, x1)` for the next memory write.
    pub fn set_column_window(&mut self, x0: u16, x1: u16) -> Result<(), Error> {
        self.ensure_ready()?;
        check_span(x0, x1, self.config.dimensions.width, |start, len| {
            BoundsError::new(start, 0, len, 1, BoundsReason::Overshoot)
        })?;
        self.pipeline
            .submit_many(&column_window(x0, x1))?
            .drain_and_check()?;
        Ok(())
    }

    /// Address rows `[y0, y1)` for the next memory write.
    pub fn set_row_window(&mut self, y0: u16, y1: u16) -> Result<(), Error> {
        self.ensure_ready()?;
        check_span(y0, y1, self.config.dimensions.height, |start, len| {
            BoundsError::new(0, start, 1, len, BoundsReason::Overshoot)
        })?;
        self.pipeline
            .submit_many(&row_window(y0, y1))?
            .drain_and_check()?;
        Ok(())
    }

    pub fn begin_memory_write(&mut self) -> Result<(), Error> {
        self.ensure_ready()?;
        self.pipeline
            .submit(Transfer::command(RAMWR))?
            .drain_and_check()?;
        Ok(())
    }

    /// Region writer over this controller's pipeline. Only once `Ready`.
    pub fn block_writer(&mut self) -> Result<BlockWriter<'_, T>, Error> {
        self.ensure_ready()?;
        Ok(BlockWriter::new(&mut self.pipeline, self.config.dimensions))
    }

    fn ensure_ready(&self) -> Result<(), Error> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(Error::NotReady)
        }
    }

    fn enter(&mut self, state: ControllerState) {
        log::debug!("panel: {} -> {}", self.state, state);
        self.state = state;
    }
}

fn check_span(
    start: u16,
    end: u16,
    extent: usize,
    bad: impl Fn(i32, i32) -> BoundsError,
) -> Result<(), BoundsError> {
    let len = i32::from(end) - i32::from(start);
    if len <= 0 {
        let mut err = bad(i32::from(start), len);
        err.reason = BoundsReason::Empty;
        return Err(err);
    }
    if usize::from(end) > extent {
        return Err(bad(i32::from(start), len));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::testing::{MockDelay, MockPin, PinEvent};
    use crate::transport::{CaptureTransport, WireEvent};

    fn controller(
        config: PanelConfig,
    ) -> (
        DisplayController<CaptureTransport, MockPin, MockPin>,
        CaptureTransport,
        MockPin,
        MockPin,
    ) {
        let capture = CaptureTransport::new();
        let reset = MockPin::default();
        let backlight = MockPin::default();
        let ctrl = DisplayController::new(capture.clone(), reset.clone(), backlight.clone(), config);
        (ctrl, capture, reset, backlight)
    }

    #[test]
    fn zero_id_selects_ili9341() {
        let (mut ctrl, capture, reset, backlight) = controller(PanelConfig::wrover_kit());
        let mut delay = MockDelay::default();

        assert_eq!(ctrl.init(&mut delay), Ok(PanelVariant::Ili9341));
        assert_eq!(ctrl.state(), ControllerState::Ready);
        assert_eq!(ctrl.panel_id(), Some(0));

        assert_eq!(reset.events(), [PinEvent::Low, PinEvent::High]);
        assert_eq!(backlight.events(), [PinEvent::Low]);
        // two reset holds, then sleep-out and display-on
        assert_eq!(delay.calls, [100, 100, 100, 100]);

        let commands = capture.commands();
        assert_eq!(commands.len(), 1 + 24);
        assert_eq!(&commands[..3], &[READ_ID, 0xCF, 0xED]);
        assert_eq!(&commands[commands.len() - 2..], &[0x11, 0x29]);
        assert!(capture.mode_lines_consistent());
    }

    #[test]
    fn nonzero_id_selects_st7789() {
        let (mut ctrl, capture, _, _) = controller(PanelConfig::wrover_kit());
        capture.set_id_reply([0x85, 0x85, 0x52]);

        assert_eq!(ctrl.init(&mut MockDelay::default()), Ok(PanelVariant::St7789));
        assert_eq!(ctrl.panel_id(), Some(0x0052_8585));

        let events = capture.events();
        assert!(events.contains(&WireEvent::Read(3)));
        assert_eq!(capture.commands().len(), 1 + 15);
        // 0xD0 carries a single argument byte
        let power = events
            .iter()
            .position(|event| *event == WireEvent::Command(0xD0))
            .unwrap();
        assert_eq!(events[power + 2], WireEvent::Data(alloc::vec![0xA4]));
    }

    #[test]
    fn forced_vendor_overrides_detection() {
        let config = PanelConfig {
            vendor: VendorSelect::Force(PanelVariant::St7789),
            ..PanelConfig::wrover_kit()
        };
        let (mut ctrl, capture, _, _) = controller(config);

        assert_eq!(ctrl.init(&mut MockDelay::default()), Ok(PanelVariant::St7789));
        assert_eq!(ctrl.panel_id(), Some(0));
        assert_eq!(capture.commands()[1], 0x36);
    }

    #[test]
    fn transport_failure_is_reported_not_fatal() {
        let (mut ctrl, capture, _, backlight) = controller(PanelConfig::wrover_kit());
        capture.fail_next(TransportError::Bus);

        let err = ctrl.init(&mut MockDelay::default()).unwrap_err();
        assert_eq!(err, Error::Transport(TransportError::Bus));
        assert_eq!(ctrl.state(), ControllerState::Failed(err));
        assert!(backlight.events().is_empty());

        // A second attempt on a healthy bus succeeds
        assert!(ctrl.init(&mut MockDelay::default()).is_ok());
        assert!(ctrl.is_ready());
    }

    #[test]
    fn reset_pin_failure_maps_to_gpio() {
        let (mut ctrl, capture, reset, _) = controller(PanelConfig::wrover_kit());
        reset.fail();

        assert_eq!(ctrl.init(&mut MockDelay::default()), Err(Error::Gpio));
        assert!(capture.events().is_empty());
    }

    #[test]
    fn addressing_requires_ready() {
        let (mut ctrl, _, _, _) = controller(PanelConfig::wrover_kit());
        assert_eq!(ctrl.set_column_window(0, 10), Err(Error::NotReady));
        assert_eq!(ctrl.begin_memory_write(), Err(Error::NotReady));
        assert!(ctrl.block_writer().is_err());
    }

    #[test]
    fn windows_are_sent_end_inclusive() {
        let (mut ctrl, capture, _, _) = controller(PanelConfig::wrover_kit());
        ctrl.init(&mut MockDelay::default()).unwrap();
        capture.clear();

        ctrl.set_column_window(10, 60).unwrap();
        ctrl.set_row_window(200, 240).unwrap();
        ctrl.begin_memory_write().unwrap();

        let events = capture.events();
        assert_eq!(events[1], WireEvent::Command(CASET));
        assert_eq!(events[3], WireEvent::Data(alloc::vec![0x00, 10, 0x00, 59]));
        assert_eq!(events[5], WireEvent::Command(PASET));
        assert_eq!(events[7], WireEvent::Data(alloc::vec![0x00, 200, 0x00, 239]));
        assert_eq!(events[9], WireEvent::Command(RAMWR));
    }

    #[test]
    fn windows_outside_the_panel_are_rejected() {
        let (mut ctrl, capture, _, _) = controller(PanelConfig::wrover_kit());
        ctrl.init(&mut MockDelay::default()).unwrap();
        capture.clear();

        let err = ctrl.set_column_window(300, 321).unwrap_err();
        assert!(err.is_bounds());
        let err = ctrl.set_row_window(5, 5).unwrap_err();
        assert_eq!(
            err,
            Error::Bounds(BoundsError::new(0, 5, 1, 0, BoundsReason::Empty))
        );
        assert!(capture.events().is_empty());
    }
}
