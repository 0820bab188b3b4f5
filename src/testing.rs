//! Bus, pin and delay doubles for unit tests
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::{self, SpiBus};

use crate::block::BlockWriter;
use crate::config::RenderConfig;
use crate::framebuffer::{Dimensions, Framebuffer};
use crate::raster::Canvas;
use crate::status::ErrorLatch;
use crate::transport::{CaptureTransport, Pipeline};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

impl digital::Error for MockError {
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}

impl spi::Error for MockError {
    fn kind(&self) -> spi::ErrorKind {
        spi::ErrorKind::Other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinEvent {
    Low,
    High,
}

#[derive(Debug, Default)]
struct PinState {
    events: Vec<PinEvent>,
    failing: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MockPin {
    state: Rc<RefCell<PinState>>,
}

impl MockPin {
    pub fn events(&self) -> Vec<PinEvent> {
        self.state.borrow().events.clone()
    }

    pub fn fail(&self) {
        self.state.borrow_mut().failing = true;
    }

    fn drive(&mut self, level: PinEvent) -> Result<(), MockError> {
        let mut state = self.state.borrow_mut();
        if state.failing {
            return Err(MockError);
        }
        state.events.push(level);
        Ok(())
    }
}

impl digital::ErrorType for MockPin {
    type Error = MockError;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), MockError> {
        self.drive(PinEvent::Low)
    }

    fn set_high(&mut self) -> Result<(), MockError> {
        self.drive(PinEvent::High)
    }
}

#[derive(Debug, Default)]
struct SpiState {
    written: Vec<u8>,
    failing: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MockSpi {
    state: Rc<RefCell<SpiState>>,
}

impl MockSpi {
    pub fn written(&self) -> Vec<u8> {
        self.state.borrow().written.clone()
    }

    pub fn fail_writes(&self) {
        self.state.borrow_mut().failing = true;
    }
}

impl spi::ErrorType for MockSpi {
    type Error = MockError;
}

impl SpiBus<u8> for MockSpi {
    fn read(&mut self, words: &mut [u8]) -> Result<(), MockError> {
        words.fill(0);
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), MockError> {
        let mut state = self.state.borrow_mut();
        if state.failing {
            return Err(MockError);
        }
        state.written.extend_from_slice(words);
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), MockError> {
        self.write(write)?;
        read.fill(0);
        Ok(())
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), MockError> {
        self.write(words)?;
        words.fill(0);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), MockError> {
        Ok(())
    }
}

/// Records requested delays instead of sleeping
#[derive(Debug, Default)]
pub struct MockDelay {
    pub total_ms: u32,
    pub calls: Vec<u32>,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ms = self.total_ms.saturating_add(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.calls.push(ms);
        self.total_ms = self.total_ms.saturating_add(ms);
    }
}

/// Screen memory, a capture pipeline and a latch, ready to hand out canvases
pub struct Rig {
    pub fb: Framebuffer,
    pub pipeline: Pipeline<CaptureTransport>,
    pub capture: CaptureTransport,
    pub latch: ErrorLatch,
    pub render: RenderConfig,
}

impl Rig {
    pub fn new(render: RenderConfig) -> Self {
        let capture = CaptureTransport::new();
        Self {
            fb: Framebuffer::alloc(Dimensions::QVGA).expect("host heap"),
            pipeline: Pipeline::new(capture.clone()),
            capture,
            latch: ErrorLatch::new(),
            render,
        }
    }

    pub fn buffered() -> Self {
        Self::new(RenderConfig::buffered())
    }

    pub fn immediate() -> Self {
        Self::new(RenderConfig::immediate())
    }

    pub fn canvas(&mut self) -> Canvas<'_, CaptureTransport> {
        let writer = BlockWriter::new(&mut self.pipeline, self.fb.dimensions());
        Canvas::new(&mut self.fb, writer, self.render, &mut self.latch)
    }
}
