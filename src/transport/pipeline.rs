//! Batch submission and the in-flight guard
use crate::error::TransportError;

use super::{Transfer, Transport};

/// Descriptors one batch may carry: a full region write is six.
pub const BATCH_CAPACITY: usize = 6;

/// Owns the transport and serializes batches onto it.
///
/// Only one batch is ever outstanding: `submit_many` hands out an
/// [`InFlight`] that mutably borrows the pipeline, so the next batch cannot be
/// started until the previous one has been drained.
pub struct Pipeline<T: Transport> {
    transport: T,
    spin_limit: Option<u32>,
}

impl<T: Transport> Pipeline<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            spin_limit: None,
        }
    }

    /// Give up on a batch after `polls` unsuccessful completion polls.
    pub fn with_spin_limit(mut self, polls: Option<u32>) -> Self {
        self.spin_limit = polls;
        self
    }

    pub fn set_spin_limit(&mut self, polls: Option<u32>) {
        self.spin_limit = polls;
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_inner(self) -> T {
        self.transport
    }

    pub fn submit<'a>(&'a mut self, transfer: Transfer<'a>) -> Result<InFlight<'a, T>, TransportError> {
        self.submit_many(&[transfer])
    }

    /// Queue `batch` in order. Every pixel source in it stays borrowed until
    /// the returned guard is drained.
    pub fn submit_many<'a>(
        &'a mut self,
        batch: &[Transfer<'a>],
    ) -> Result<InFlight<'a, T>, TransportError> {
        if batch.len() > BATCH_CAPACITY {
            log::error!(
                "batch of {} descriptors exceeds queue depth {}",
                batch.len(),
                BATCH_CAPACITY
            );
            return Err(TransportError::BatchTooLarge);
        }

        log::trace!(
            "submit {} descriptors, {} bits",
            batch.len(),
            batch.iter().map(Transfer::bit_len).sum::<usize>()
        );

        if let Err(err) = self.transport.start(batch) {
            let err: TransportError = err.into();
            log::error!("failed to queue batch: {}", err);
            // Part of the batch may already be on the wire
            if let Err(drain) = self.wait_idle() {
                log::error!("drain after failed submit: {}", drain);
            }
            return Err(err);
        }

        Ok(InFlight {
            pipeline: self,
            drained: false,
        })
    }

    /// Blocking read with the D/C line high, used for the panel ID.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<(), TransportError> {
        self.transport.read(buf).map_err(Into::into)
    }

    fn wait_idle(&mut self) -> Result<(), TransportError> {
        let mut polls: u32 = 0;
        loop {
            if self.transport.poll_complete().map_err(Into::<TransportError>::into)? {
                return Ok(());
            }
            polls = polls.saturating_add(1);
            if let Some(limit) = self.spin_limit {
                if polls >= limit {
                    return Err(TransportError::Timeout);
                }
            }
            core::hint::spin_loop();
        }
    }
}

/// A submitted batch that has not been drained yet.
///
/// Holding the guard keeps both the pipeline and every buffer referenced by the
/// batch borrowed. There is no cancellation: dropping the guard waits for the
/// batch like [`InFlight::drain_and_check`] does, but can only log a failure.
#[must_use = "the batch must be drained before its buffers are touched again"]
pub struct InFlight<'a, T: Transport> {
    pipeline: &'a mut Pipeline<T>,
    drained: bool,
}

impl<'a, T: Transport> InFlight<'a, T> {
    /// Block until the batch is done and report its first failure.
    ///
    /// After a `Timeout` the transport may still be clocking the batch out;
    /// reset it before submitting again.
    pub fn drain_and_check(mut self) -> Result<(), TransportError> {
        self.drained = true;
        let result = self.pipeline.wait_idle();
        if let Err(err) = result {
            log::error!("batch failed: {}", err);
        }
        result
    }
}

impl<T: Transport> Drop for InFlight<'_, T> {
    fn drop(&mut self) {
        if self.drained {
            return;
        }
        if let Err(err) = self.pipeline.wait_idle() {
            log::error!("undrained batch failed: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{CaptureTransport, Mode, PixelSource, WireEvent};

    #[test]
    fn batch_goes_out_in_submission_order() {
        let capture = CaptureTransport::new();
        let mut pipeline = Pipeline::new(capture.clone());
        let pixels = [0xF800u16, 0x07E0];

        let batch = [
            Transfer::command(0x2C),
            Transfer::pixels(PixelSource::Contiguous(&pixels)),
        ];
        pipeline.submit_many(&batch).unwrap().drain_and_check().unwrap();

        assert_eq!(
            capture.events(),
            [
                WireEvent::ModeLine(Mode::Command),
                WireEvent::Command(0x2C),
                WireEvent::ModeLine(Mode::Data),
                WireEvent::Pixels(alloc::vec![0xF800, 0x07E0]),
            ]
        );
        assert_eq!(capture.batch_sizes(), [2]);
    }

    #[test]
    fn rejects_oversized_batch_without_touching_the_wire() {
        let capture = CaptureTransport::new();
        let mut pipeline = Pipeline::new(capture.clone());
        let batch = [Transfer::command(0x00); BATCH_CAPACITY + 1];

        assert_eq!(
            pipeline.submit_many(&batch).err(),
            Some(TransportError::BatchTooLarge)
        );
        assert!(capture.events().is_empty());
    }

    #[test]
    fn drain_surfaces_transport_failure() {
        let capture = CaptureTransport::new();
        let mut pipeline = Pipeline::new(capture.clone());

        capture.fail_next(TransportError::Bus);
        let result = pipeline
            .submit(Transfer::command(0x29))
            .unwrap()
            .drain_and_check();
        assert_eq!(result, Err(TransportError::Bus));
        assert!(TransportError::Bus.is_retryable());

        // The same batch goes through once the bus recovers
        pipeline
            .submit(Transfer::command(0x29))
            .unwrap()
            .drain_and_check()
            .unwrap();
        assert_eq!(capture.commands(), [0x29]);
    }

    #[test]
    fn bounded_drain_times_out() {
        let capture = CaptureTransport::new();
        capture.set_latency(10);
        let mut pipeline = Pipeline::new(capture.clone()).with_spin_limit(Some(3));

        let result = pipeline
            .submit(Transfer::command(0x11))
            .unwrap()
            .drain_and_check();
        assert_eq!(result, Err(TransportError::Timeout));

        pipeline.set_spin_limit(None);
        pipeline
            .submit(Transfer::command(0x11))
            .unwrap()
            .drain_and_check()
            .unwrap();
    }

    #[test]
    fn dropped_guard_still_drains() {
        let capture = CaptureTransport::new();
        capture.set_latency(4);
        let mut pipeline = Pipeline::new(capture.clone());

        drop(pipeline.submit(Transfer::command(0x13)).unwrap());
        assert_eq!(capture.pending_polls(), 0);
    }
}
