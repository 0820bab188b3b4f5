//! Screen block writer
//!
//! Turns a validated rectangle plus its pixels into the six-descriptor batch
//! the panel expects: column window, row window, memory write, payload.
use crate::controller::{column_window, row_window, RAMWR};
use crate::error::{BoundsError, BoundsReason, Error};
use crate::framebuffer::{Dimensions, Framebuffer};
use crate::transport::{InFlight, Pipeline, PixelSource, Transfer, Transport, BATCH_CAPACITY};

/// A rectangle of the screen and the pixels to put there
#[derive(Debug, Clone, Copy)]
pub struct Region<'a> {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub pixels: PixelSource<'a>,
}

impl<'a> Region<'a> {
    pub fn new(x: i32, y: i32, width: i32, height: i32, pixels: PixelSource<'a>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            pixels,
        }
    }

    /// Pixels packed row after row in `pixels`
    pub fn from_slice(x: i32, y: i32, width: i32, height: i32, pixels: &'a [u16]) -> Self {
        Self::new(x, y, width, height, PixelSource::Contiguous(pixels))
    }

    /// The same rectangle of screen memory
    pub fn from_framebuffer(
        fb: &'a Framebuffer,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<Self, BoundsError> {
        check_area(x, y, width, height, fb.dimensions())?;
        Ok(Self::new(
            x,
            y,
            width,
            height,
            PixelSource::Framebuffer {
                fb,
                x: x as usize,
                y: y as usize,
                width: width as usize,
                height: height as usize,
            },
        ))
    }

    pub fn validate(&self, screen: Dimensions) -> Result<(), BoundsError> {
        check_area(self.x, self.y, self.width, self.height, screen)?;
        let expected = self.width as usize * self.height as usize;
        if self.pixels.len() != expected {
            return Err(BoundsError::new(
                self.x,
                self.y,
                self.width,
                self.height,
                BoundsReason::PayloadLength,
            ));
        }
        Ok(())
    }
}

/// Reject negative, empty, and off-screen rectangles.
pub fn check_area(
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    screen: Dimensions,
) -> Result<(), BoundsError> {
    let reject = |reason| Err(BoundsError::new(x, y, width, height, reason));
    if x < 0 || y < 0 || width < 0 || height < 0 {
        return reject(BoundsReason::Negative);
    }
    if width == 0 || height == 0 {
        return reject(BoundsReason::Empty);
    }
    if i64::from(x) + i64::from(width) > screen.width as i64
        || i64::from(y) + i64::from(height) > screen.height as i64
    {
        return reject(BoundsReason::Overshoot);
    }
    Ok(())
}

/// Writes regions through a borrowed pipeline.
pub struct BlockWriter<'p, T: Transport> {
    pipeline: &'p mut Pipeline<T>,
    screen: Dimensions,
}

impl<'p, T: Transport> BlockWriter<'p, T> {
    pub fn new(pipeline: &'p mut Pipeline<T>, screen: Dimensions) -> Self {
        Self { pipeline, screen }
    }

    pub fn screen(&self) -> Dimensions {
        self.screen
    }

    /// The descriptors for an already validated region.
    pub fn batch<'a>(region: &Region<'a>) -> [Transfer<'a>; BATCH_CAPACITY] {
        let x0 = region.x as u16;
        let y0 = region.y as u16;
        let [caset, cols] = column_window(x0, x0 + region.width as u16);
        let [paset, rows] = row_window(y0, y0 + region.height as u16);
        [
            caset,
            cols,
            paset,
            rows,
            Transfer::command(RAMWR),
            Transfer::pixels(region.pixels),
        ]
    }

    /// Validate and queue `region`. Nothing reaches the wire or memory when
    /// the region is rejected.
    ///
    /// The pixels stay borrowed until the returned batch is drained:
    ///
    /// ```compile_fail
    /// # use tft_display::block::{BlockWriter, Region};
    /// # use tft_display::color::Color;
    /// # use tft_display::framebuffer::{Dimensions, Framebuffer};
    /// # use tft_display::transport::{CaptureTransport, Pipeline};
    /// let mut fb = Framebuffer::alloc(Dimensions::QVGA).unwrap();
    /// let mut pipeline = Pipeline::new(CaptureTransport::new());
    /// let mut writer = BlockWriter::new(&mut pipeline, Dimensions::QVGA);
    ///
    /// let region = Region::from_framebuffer(&fb, 0, 0, 10, 1).unwrap();
    /// let batch = writer.write_region(region).unwrap();
    /// fb.fill(Color::RED);
    /// batch.drain_and_check().unwrap();
    /// ```
    pub fn write_region<'a>(&'a mut self, region: Region<'a>) -> Result<InFlight<'a, T>, Error> {
        region.validate(self.screen)?;
        let batch = Self::batch(&region);
        Ok(self.pipeline.submit_many(&batch)?)
    }

    /// `write_region` followed by `drain_and_check`
    pub fn write_and_wait(&mut self, region: Region<'_>) -> Result<(), Error> {
        self.write_region(region)?.drain_and_check()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::controller::{CASET, PASET};
    use crate::transport::{CaptureTransport, Payload};

    fn bounds_reason(region: Region<'_>) -> BoundsReason {
        region.validate(Dimensions::QVGA).unwrap_err().reason
    }

    #[test]
    fn validation_rules() {
        let px = [0u16; 4];
        assert_eq!(
            bounds_reason(Region::from_slice(-1, 0, 2, 2, &px)),
            BoundsReason::Negative
        );
        assert_eq!(
            bounds_reason(Region::from_slice(0, 0, 0, 2, &px)),
            BoundsReason::Empty
        );
        assert_eq!(
            bounds_reason(Region::from_slice(319, 0, 2, 2, &px)),
            BoundsReason::Overshoot
        );
        assert_eq!(
            bounds_reason(Region::from_slice(0, 239, 2, 2, &px)),
            BoundsReason::Overshoot
        );
        assert_eq!(
            bounds_reason(Region::from_slice(0, 0, 3, 2, &px)),
            BoundsReason::PayloadLength
        );
        assert!(Region::from_slice(318, 238, 2, 2, &px)
            .validate(Dimensions::QVGA)
            .is_ok());
    }

    #[test]
    fn batch_is_six_descriptors_in_protocol_order() {
        let px = [0u16; 6];
        let batch = BlockWriter::<CaptureTransport>::batch(&Region::from_slice(4, 7, 3, 2, &px));

        assert!(matches!(batch[0].payload, Payload::Command(CASET)));
        assert!(matches!(batch[2].payload, Payload::Command(PASET)));
        assert!(matches!(batch[4].payload, Payload::Command(RAMWR)));
        match (&batch[1].payload, &batch[3].payload) {
            (Payload::Args(cols), Payload::Args(rows)) => {
                assert_eq!(cols.as_slice(), &[0, 4, 0, 6]);
                assert_eq!(rows.as_slice(), &[0, 7, 0, 8]);
            }
            other => panic!("unexpected args {:?}", other),
        }
        assert_eq!(batch[5].bit_len(), 6 * 16);
    }

    #[test]
    fn rejected_region_never_reaches_the_wire() {
        let capture = CaptureTransport::new();
        let mut pipeline = Pipeline::new(capture.clone());
        let mut writer = BlockWriter::new(&mut pipeline, Dimensions::QVGA);
        let px = [0u16; 100];

        let err = writer
            .write_and_wait(Region::from_slice(300, 0, 50, 2, &px))
            .unwrap_err();
        assert!(err.is_bounds());
        assert!(capture.events().is_empty());
    }

    #[test]
    fn framebuffer_region_spans_the_half_split() {
        let capture = CaptureTransport::new();
        let mut pipeline = Pipeline::new(capture.clone());
        let mut fb = Framebuffer::alloc(Dimensions::QVGA).unwrap();
        fb.fill_span(0, 119, 2, Color(0x0101));
        fb.fill_span(0, 120, 2, Color(0x0202));

        let mut writer = BlockWriter::new(&mut pipeline, Dimensions::QVGA);
        let region = Region::from_framebuffer(&fb, 0, 119, 2, 2).unwrap();
        writer.write_and_wait(region).unwrap();

        let regions = capture.regions();
        assert_eq!(regions.len(), 1);
        assert_eq!((regions[0].x, regions[0].y), (0, 119));
        assert_eq!((regions[0].width, regions[0].height), (2, 2));
        assert_eq!(regions[0].pixels, [0x0101, 0x0101, 0x0202, 0x0202]);
        assert_eq!(capture.batch_sizes(), [BATCH_CAPACITY]);
    }

    #[test]
    fn framebuffer_region_is_checked_up_front() {
        let fb = Framebuffer::alloc(Dimensions::QVGA).unwrap();
        assert!(Region::from_framebuffer(&fb, 0, 230, 4, 20).is_err());
    }
}
