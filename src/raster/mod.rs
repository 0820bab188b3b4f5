//! # Rasterizer
//!
//! Draws into screen memory and mirrors what changed to the panel.
//!
//! ## Modules
//!
//! - `fixed`: 16.16 fixed-point slope type
//! - `line`: lines and rectangle outlines
//!
//! Every operation either completes or leaves both screen memory and the
//! panel untouched: arguments are checked before the first pixel is written.
//! Failures are also latched so a caller can inspect them after a batch of
//! draws.

pub mod fixed;
pub mod line;

use crate::block::{check_area, BlockWriter, Region};
use crate::color::Color;
use crate::config::RenderConfig;
use crate::error::Error;
use crate::framebuffer::{Dimensions, Framebuffer};
use crate::status::ErrorLatch;
use crate::transport::Transport;

pub use fixed::Fixed16;

/// Rows per region when a whole half is pushed out
pub const CLEAR_BAND_ROWS: usize = 4;

/// Drawing context: screen memory, a region writer and the error latch,
/// borrowed together for the duration of a draw.
pub struct Canvas<'c, T: Transport> {
    fb: &'c mut Framebuffer,
    writer: BlockWriter<'c, T>,
    render: RenderConfig,
    latch: &'c mut ErrorLatch,
}

impl<'c, T: Transport> Canvas<'c, T> {
    pub fn new(
        fb: &'c mut Framebuffer,
        writer: BlockWriter<'c, T>,
        render: RenderConfig,
        latch: &'c mut ErrorLatch,
    ) -> Self {
        Self {
            fb,
            writer,
            render,
            latch,
        }
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        self.fb
    }

    /// Screen memory without mirroring; push changes with [`Canvas::flush`].
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer {
        self.fb
    }

    pub fn dimensions(&self) -> Dimensions {
        self.fb.dimensions()
    }

    pub fn render(&self) -> RenderConfig {
        self.render
    }

    pub fn latch(&self) -> &ErrorLatch {
        self.latch
    }

    pub(crate) fn latch_mut(&mut self) -> &mut ErrorLatch {
        self.latch
    }

    /// Latch and log a failed operation, then hand the result back.
    pub(crate) fn record<V>(&mut self, result: Result<V, Error>) -> Result<V, Error> {
        if let Err(err) = &result {
            self.latch.raise(*err);
            match err {
                Error::Bounds(bounds) => log::warn!("draw dropped: {}", bounds),
                other => log::error!("draw failed: {}", other),
            }
        }
        result
    }

    /// Push a rectangle of screen memory to the panel.
    pub(crate) fn mirror(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<(), Error> {
        let region = Region::from_framebuffer(self.fb, x, y, width, height)?;
        self.writer.write_and_wait(region)
    }

    /// Fill screen memory and push it out in bands of [`CLEAR_BAND_ROWS`]
    /// rows, one half after the other.
    pub fn clear_screen(&mut self, color: Color) -> Result<(), Error> {
        self.fb.fill(color);
        let result = self.mirror_bands();
        self.record(result)
    }

    fn mirror_bands(&mut self) -> Result<(), Error> {
        let dims = self.fb.dimensions();
        let width = dims.width as i32;
        let split = dims.half_rows();
        for base in [0, split] {
            let mut row = 0;
            while row < split {
                let rows = CLEAR_BAND_ROWS.min(split - row);
                self.mirror(0, (base + row) as i32, width, rows as i32)?;
                row += rows;
            }
        }
        Ok(())
    }

    /// Paint `[x, x+w) x [y, y+h)`, mirroring it one row at a time.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) -> Result<(), Error> {
        let result = self.fill_rect_inner(x, y, w, h, color);
        self.record(result)
    }

    fn fill_rect_inner(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) -> Result<(), Error> {
        check_area(x, y, w, h, self.fb.dimensions())?;
        for row in y..y + h {
            self.fb.fill_span(x as usize, row as usize, w as usize, color);
        }
        for row in y..y + h {
            self.mirror(x, row, w, 1)?;
        }
        Ok(())
    }

    /// Push `[x, x+w) x [y, y+h)` of screen memory as a single region, e.g.
    /// after drawing into the framebuffer with `embedded-graphics`.
    pub fn flush(&mut self, x: i32, y: i32, w: i32, h: i32) -> Result<(), Error> {
        let result = self.mirror(x, y, w, h);
        self.record(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BoundsError, BoundsReason};
    use crate::framebuffer::Half;
    use crate::testing::Rig;

    #[test]
    fn clear_screen_fills_both_halves_in_bands() {
        let mut rig = Rig::buffered();
        rig.canvas().clear_screen(Color(0x0000)).unwrap();

        assert!(rig.fb.half(Half::Top).iter().all(|&px| px == 0x0000));
        assert!(rig.fb.half(Half::Bottom).iter().all(|&px| px == 0x0000));

        let regions = rig.capture.regions();
        assert_eq!(regions.len(), 60);
        assert!(regions.iter().all(|r| r.width == 320 && r.height == 4));
        assert_eq!(regions[29].y, 116);
        assert_eq!(regions[30].y, 120);
        assert_eq!(regions[59].y, 236);
    }

    #[test]
    fn fill_rect_touches_only_the_rectangle() {
        let mut rig = Rig::buffered();
        rig.fb.fill(Color(0x1111));
        rig.canvas().fill_rect(10, 10, 50, 20, Color(0xF800)).unwrap();

        assert_eq!(rig.fb.pixel(30, 15), Some(Color(0xF800)));
        assert_eq!(rig.fb.pixel(10, 10), Some(Color(0xF800)));
        assert_eq!(rig.fb.pixel(59, 29), Some(Color(0xF800)));
        assert_eq!(rig.fb.pixel(5, 5), Some(Color(0x1111)));
        assert_eq!(rig.fb.pixel(60, 15), Some(Color(0x1111)));
        assert_eq!(rig.fb.pixel(30, 30), Some(Color(0x1111)));

        let regions = rig.capture.regions();
        assert_eq!(regions.len(), 20);
        assert!(regions.iter().all(|r| r.x == 10 && r.width == 50 && r.height == 1));
        assert!(regions[0].pixels.iter().all(|&px| px == 0xF800));
    }

    #[test]
    fn fill_rect_rejects_overshoot_without_side_effects() {
        let mut rig = Rig::buffered();
        let err = rig.canvas().fill_rect(300, 0, 21, 5, Color(0xFFFF)).unwrap_err();

        assert_eq!(
            err,
            Error::Bounds(BoundsError::new(300, 0, 21, 5, BoundsReason::Overshoot))
        );
        assert!(rig.fb.half(Half::Top).iter().all(|&px| px == 0));
        assert!(rig.capture.events().is_empty());
        assert!(rig.latch.is_raised());
        assert_eq!(rig.latch.message(), "bad region (overshoot) x=300 y=0 w=21 h=5");
    }

    #[test]
    fn fill_rect_across_the_split() {
        let mut rig = Rig::buffered();
        rig.canvas().fill_rect(0, 118, 2, 4, Color(0x07E0)).unwrap();
        assert_eq!(rig.fb.row_slice(Half::Top, 118).unwrap()[1], 0x07E0);
        assert_eq!(rig.fb.row_slice(Half::Bottom, 1).unwrap()[0], 0x07E0);
        assert_eq!(rig.fb.row_slice(Half::Bottom, 2).unwrap()[0], 0);
    }

    #[test]
    fn flush_sends_one_multi_row_region() {
        let mut rig = Rig::buffered();
        rig.fb.fill_span(3, 4, 5, Color(0xABCD));
        rig.canvas().flush(3, 4, 5, 2).unwrap();

        let regions = rig.capture.regions();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].pixels.len(), 10);
        assert_eq!(&regions[0].pixels[..5], &[0xABCD; 5]);
    }
}
