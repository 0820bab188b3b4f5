//! In-memory transport
//!
//! Records every mode-line change and every byte that would have gone out on
//! the bus. Clones share one log, so a test can keep a handle while the
//! display owns the transport.
use alloc::sync::Arc;
use alloc::vec::Vec;

use spin::Mutex;

use crate::controller::{CASET, PASET, RAMWR};
use crate::error::TransportError;

use super::{Mode, Payload, Transfer, Transport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireEvent {
    ModeLine(Mode),
    Command(u8),
    Data(Vec<u8>),
    Pixels(Vec<u16>),
    Read(usize),
}

/// One decoded column/row/memory-write sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionWrite {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    pub pixels: Vec<u16>,
}

#[derive(Debug, Default)]
struct Capture {
    events: Vec<WireEvent>,
    batch_sizes: Vec<usize>,
    id_reply: [u8; 3],
    fail_next: Option<TransportError>,
    pending_error: Option<TransportError>,
    latency: u32,
    pending_polls: u32,
}

#[derive(Debug, Clone, Default)]
pub struct CaptureTransport {
    inner: Arc<Mutex<Capture>>,
}

impl CaptureTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes returned by the next ID reads. All zero by default.
    pub fn set_id_reply(&self, reply: [u8; 3]) {
        self.inner.lock().id_reply = reply;
    }

    /// Make the next batch fail; the failure is reported when it is drained.
    pub fn fail_next(&self, err: TransportError) {
        self.inner.lock().fail_next = Some(err);
    }

    /// Number of completion polls that report "busy" after each start
    pub fn set_latency(&self, polls: u32) {
        self.inner.lock().latency = polls;
    }

    pub fn pending_polls(&self) -> u32 {
        self.inner.lock().pending_polls
    }

    pub fn events(&self) -> Vec<WireEvent> {
        self.inner.lock().events.clone()
    }

    pub fn batch_sizes(&self) -> Vec<usize> {
        self.inner.lock().batch_sizes.clone()
    }

    pub fn commands(&self) -> Vec<u8> {
        self.inner
            .lock()
            .events
            .iter()
            .filter_map(|event| match event {
                WireEvent::Command(op) => Some(*op),
                _ => None,
            })
            .collect()
    }

    /// True when every command byte went out with the mode line low and
    /// every data or pixel transfer with it high.
    pub fn mode_lines_consistent(&self) -> bool {
        let capture = self.inner.lock();
        let mut level = None;
        capture.events.iter().all(|event| match event {
            WireEvent::ModeLine(mode) => {
                level = Some(*mode);
                true
            }
            WireEvent::Command(_) => level == Some(Mode::Command),
            WireEvent::Data(_) | WireEvent::Pixels(_) | WireEvent::Read(_) => {
                level == Some(Mode::Data)
            }
        })
    }

    /// Decode the recorded traffic into region writes, skipping anything that
    /// is not a complete window + memory-write sequence.
    pub fn regions(&self) -> Vec<RegionWrite> {
        let capture = self.inner.lock();
        let wire: Vec<&WireEvent> = capture
            .events
            .iter()
            .filter(|event| !matches!(event, WireEvent::ModeLine(_)))
            .collect();

        let mut regions = Vec::new();
        let mut i = 0;
        while i + 6 <= wire.len() {
            match &wire[i..i + 6] {
                [WireEvent::Command(CASET), WireEvent::Data(cols), WireEvent::Command(PASET), WireEvent::Data(rows), WireEvent::Command(RAMWR), WireEvent::Pixels(pixels)]
                    if cols.len() == 4 && rows.len() == 4 =>
                {
                    let (x0, x1) = window_bounds(cols);
                    let (y0, y1) = window_bounds(rows);
                    regions.push(RegionWrite {
                        x: x0,
                        y: y0,
                        width: x1.wrapping_sub(x0).wrapping_add(1),
                        height: y1.wrapping_sub(y0).wrapping_add(1),
                        pixels: pixels.clone(),
                    });
                    i += 6;
                }
                _ => i += 1,
            }
        }
        regions
    }

    /// Forget everything recorded so far; replies and failures stay armed.
    pub fn clear(&self) {
        let mut capture = self.inner.lock();
        capture.events.clear();
        capture.batch_sizes.clear();
    }
}

fn window_bounds(args: &[u8]) -> (u16, u16) {
    (
        u16::from_be_bytes([args[0], args[1]]),
        u16::from_be_bytes([args[2], args[3]]),
    )
}

impl Transport for CaptureTransport {
    type Error = TransportError;

    fn start(&mut self, batch: &[Transfer<'_>]) -> Result<(), TransportError> {
        let mut capture = self.inner.lock();
        capture.pending_polls = capture.latency;
        if let Some(err) = capture.fail_next.take() {
            capture.pending_error = Some(err);
            return Ok(());
        }

        capture.batch_sizes.push(batch.len());
        for transfer in batch {
            capture.events.push(WireEvent::ModeLine(transfer.mode));
            let event = match &transfer.payload {
                Payload::Command(op) => WireEvent::Command(*op),
                Payload::Args(block) => WireEvent::Data(block.as_slice().to_vec()),
                Payload::Pixels(source) => {
                    let mut pixels = Vec::with_capacity(source.len());
                    for row in source.rows() {
                        pixels.extend_from_slice(row);
                    }
                    WireEvent::Pixels(pixels)
                }
            };
            capture.events.push(event);
        }
        Ok(())
    }

    fn poll_complete(&mut self) -> Result<bool, TransportError> {
        let mut capture = self.inner.lock();
        if capture.pending_polls > 0 {
            capture.pending_polls -= 1;
            return Ok(false);
        }
        match capture.pending_error.take() {
            Some(err) => Err(err),
            None => Ok(true),
        }
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<(), TransportError> {
        let mut capture = self.inner.lock();
        capture.events.push(WireEvent::ModeLine(Mode::Data));
        capture.events.push(WireEvent::Read(buf.len()));
        let reply = capture.id_reply;
        for (i, byte) in buf.iter_mut().enumerate() {
            *byte = reply.get(i).copied().unwrap_or(0);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{ArgBlock, PixelSource, Pipeline};

    #[test]
    fn decodes_region_writes() {
        let capture = CaptureTransport::new();
        let mut pipeline = Pipeline::new(capture.clone());
        let pixels = [0xAAAAu16; 6];

        let batch = [
            Transfer::command(CASET),
            Transfer::arg_block(ArgBlock::window(10, 12)),
            Transfer::command(PASET),
            Transfer::arg_block(ArgBlock::window(200, 201)),
            Transfer::command(RAMWR),
            Transfer::pixels(PixelSource::Contiguous(&pixels)),
        ];
        pipeline.submit_many(&batch).unwrap().drain_and_check().unwrap();

        let regions = capture.regions();
        assert_eq!(regions.len(), 1);
        assert_eq!((regions[0].x, regions[0].y), (10, 200));
        assert_eq!((regions[0].width, regions[0].height), (3, 2));
        assert_eq!(regions[0].pixels.len(), 6);
        assert!(capture.mode_lines_consistent());
    }

    #[test]
    fn read_returns_the_armed_reply() {
        let mut capture = CaptureTransport::new();
        capture.set_id_reply([0x85, 0x85, 0x52]);
        let mut buf = [0u8; 4];
        capture.read(&mut buf).unwrap();
        assert_eq!(buf, [0x85, 0x85, 0x52, 0x00]);
    }
}
