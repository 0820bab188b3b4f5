#![allow(dead_code)]

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

use tft_display::transport::CaptureTransport;
use tft_display::{Config, Display, PanelVariant};

/// Output pin that remembers every level it was driven to (`true` = high)
#[derive(Debug, Clone, Default)]
pub struct Pin {
    levels: Rc<RefCell<Vec<bool>>>,
}

impl Pin {
    pub fn levels(&self) -> Vec<bool> {
        self.levels.borrow().clone()
    }
}

impl ErrorType for Pin {
    type Error = Infallible;
}

impl OutputPin for Pin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.levels.borrow_mut().push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.levels.borrow_mut().push(true);
        Ok(())
    }
}

/// Adds up requested delays instead of sleeping
#[derive(Debug, Default)]
pub struct Delay {
    pub total_ms: u32,
}

impl DelayNs for Delay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ms += ns / 1_000_000;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.total_ms += ms;
    }
}

pub type TestDisplay = Display<CaptureTransport, Pin, Pin>;

pub struct Bench {
    pub display: TestDisplay,
    pub wire: CaptureTransport,
    pub reset: Pin,
    pub backlight: Pin,
    pub delay: Delay,
}

impl Bench {
    pub fn new(config: Config) -> Self {
        let wire = CaptureTransport::new();
        let reset = Pin::default();
        let backlight = Pin::default();
        let display = Display::setup(wire.clone(), reset.clone(), backlight.clone(), config)
            .expect("screen memory");
        Self {
            display,
            wire,
            reset,
            backlight,
            delay: Delay::default(),
        }
    }

    pub fn init(&mut self) -> PanelVariant {
        self.display.display_init(&mut self.delay).expect("panel init")
    }

    /// Initialized 320x240 panel with the init traffic already discarded
    pub fn ready() -> Self {
        let mut bench = Self::new(Config::wrover_kit());
        bench.init();
        bench.wire.clear();
        bench
    }

    pub fn pixel(&self, x: usize, y: usize) -> u16 {
        self.display
            .framebuffer()
            .pixel(x, y)
            .expect("pixel on screen")
            .raw()
    }
}
