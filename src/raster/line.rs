//! Lines and rectangle outlines
//!
//! End points are exclusive. Horizontal and vertical lines are spans;
//! anything else is stepped one pixel at a time along its major axis, with the
//! minor axis following a [`Fixed16`] slope. Every sample becomes a
//! `thick x thick` block.
use crate::color::Color;
use crate::error::{BoundsError, BoundsReason, Error};
use crate::transport::Transport;

use super::{Canvas, Fixed16};

impl<T: Transport> Canvas<'_, T> {
    pub fn draw_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        thick: i32,
        color: Color,
    ) -> Result<(), Error> {
        let result = self.line(x0, y0, x1, y1, thick, color);
        self.record(result)
    }

    /// Four edges: top, right, bottom, left. The right and bottom edges run
    /// `thick` past the far corner so the outline closes.
    pub fn draw_frame(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        thick: i32,
        color: Color,
    ) -> Result<(), Error> {
        let result = self.frame(x, y, w, h, thick, color);
        self.record(result)
    }

    fn frame(&mut self, x: i32, y: i32, w: i32, h: i32, thick: i32, color: Color) -> Result<(), Error> {
        let dims = self.dimensions();
        let (width, height) = (dims.width as i64, dims.height as i64);
        if w <= 0 || h <= 0 {
            return Err(BoundsError::new(x, y, w, h, BoundsReason::Empty).into());
        }
        if x < 0 || y < 0 {
            return Err(BoundsError::new(x, y, w, h, BoundsReason::Negative).into());
        }
        if thick <= 0 {
            return Err(BoundsError::new(x, y, w, h, BoundsReason::Empty).into());
        }
        // The far edges start at x + w / y + h and run thick past the corner;
        // each must still clear the screen by its own thickness.
        let reach = 2 * i64::from(thick);
        if i64::from(x) + i64::from(w) + reach >= width
            || i64::from(y) + i64::from(h) + reach >= height
        {
            return Err(BoundsError::new(x, y, w, h, BoundsReason::Overshoot).into());
        }

        let edges = [
            (x, y, x + w, y),
            (x + w, y, x + w, y + h + thick),
            (x, y + h, x + w + thick, y + h),
            (x, y, x, y + h),
        ];
        let mut first = Ok(());
        for (ex0, ey0, ex1, ey1) in edges {
            let drawn = self.line(ex0, ey0, ex1, ey1, thick, color);
            if first.is_ok() {
                first = drawn;
            }
        }
        first
    }

    fn line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        thick: i32,
        color: Color,
    ) -> Result<(), Error> {
        self.check_line(x0, y0, x1, y1, thick)?;

        if y0 == y1 {
            let (xs, xe) = (x0.min(x1), x0.max(x1));
            if xs == xe {
                return Ok(());
            }
            for k in 0..thick {
                self.fb
                    .fill_span(xs as usize, (y0 + k) as usize, (xe - xs) as usize, color);
            }
            for k in 0..thick {
                self.mirror(xs, y0 + k, xe - xs, 1)?;
            }
        } else if x0 == x1 {
            let (ys, ye) = (y0.min(y1), y0.max(y1));
            for row in ys..ye {
                self.fb
                    .fill_span(x0 as usize, row as usize, thick as usize, color);
                self.mirror(x0, row, thick, 1)?;
            }
        } else {
            self.diagonal(x0, y0, x1, y1, thick, color)?;
        }
        Ok(())
    }

    fn diagonal(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        thick: i32,
        color: Color,
    ) -> Result<(), Error> {
        let row_major = (y1 - y0).abs() > (x1 - x0).abs();
        // Step forward along the major axis
        let forward = if row_major { y0 <= y1 } else { x0 <= x1 };
        let (x0, y0, x1, y1) = if forward {
            (x0, y0, x1, y1)
        } else {
            (x1, y1, x0, y0)
        };
        let (dx, dy) = (x1 - x0, y1 - y0);
        let (steps, slope) = if row_major {
            (dy, Fixed16::ratio(dx, dy))
        } else {
            (dx, Fixed16::ratio(dy, dx))
        };
        let slope =
            slope.ok_or_else(|| BoundsError::new(x0, y0, dx, dy, BoundsReason::Overshoot))?;

        for i in 0..steps {
            let (x, y) = if row_major {
                (x0 + slope.scale(i), y0 + i)
            } else {
                (x0 + i, y0 + slope.scale(i))
            };
            self.plot_block(x, y, thick, color);
            self.mirror(x, y, thick, thick)?;
        }
        Ok(())
    }

    fn plot_block(&mut self, x: i32, y: i32, size: i32, color: Color) {
        for row in y..y + size {
            self.fb
                .fill_span(x as usize, row as usize, size as usize, color);
        }
    }

    /// Both end points, pushed out by the thickness, must stay strictly
    /// inside the screen.
    fn check_line(&self, x0: i32, y0: i32, x1: i32, y1: i32, thick: i32) -> Result<(), BoundsError> {
        let dims = self.dimensions();
        let reject = |reason| {
            Err(BoundsError::new(
                x0,
                y0,
                x1.saturating_sub(x0),
                y1.saturating_sub(y0),
                reason,
            ))
        };
        if x0 < 0 || y0 < 0 || x1 < 0 || y1 < 0 {
            return reject(BoundsReason::Negative);
        }
        if thick <= 0 {
            return reject(BoundsReason::Empty);
        }
        let past = |v: i32, extent: usize| i64::from(v) + i64::from(thick) >= extent as i64;
        if past(x0, dims.width)
            || past(x1, dims.width)
            || past(y0, dims.height)
            || past(y1, dims.height)
        {
            return reject(BoundsReason::Overshoot);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Half;
    use crate::testing::Rig;

    const WHITE: Color = Color(0xFFFF);

    fn lit(rig: &Rig, x: usize, y: usize) -> bool {
        rig.fb.pixel(x, y) == Some(WHITE)
    }

    fn lit_count(rig: &Rig) -> usize {
        [Half::Top, Half::Bottom]
            .iter()
            .map(|&half| rig.fb.half(half).iter().filter(|&&px| px == WHITE.0).count())
            .sum()
    }

    #[test]
    fn horizontal_end_is_exclusive() {
        let mut rig = Rig::buffered();
        rig.canvas().draw_line(0, 0, 100, 0, 1, WHITE).unwrap();

        assert!((0..100).all(|x| lit(&rig, x, 0)));
        assert!(!lit(&rig, 100, 0));
        assert_eq!(lit_count(&rig), 100);
        assert_eq!(rig.capture.regions().len(), 1);
    }

    #[test]
    fn horizontal_direction_does_not_matter() {
        let mut forward = Rig::buffered();
        let mut backward = Rig::buffered();
        forward.canvas().draw_line(20, 50, 90, 50, 3, WHITE).unwrap();
        backward.canvas().draw_line(90, 50, 20, 50, 3, WHITE).unwrap();

        for half in [Half::Top, Half::Bottom] {
            assert_eq!(forward.fb.half(half), backward.fb.half(half));
        }
        assert_eq!(lit_count(&forward), 70 * 3);
        assert_eq!(forward.capture.regions().len(), 3);
    }

    #[test]
    fn vertical_line_mirrors_one_row_at_a_time() {
        let mut rig = Rig::buffered();
        rig.canvas().draw_line(5, 20, 5, 10, 3, WHITE).unwrap();

        assert!(lit(&rig, 5, 10) && lit(&rig, 7, 19));
        assert!(!lit(&rig, 8, 10) && !lit(&rig, 5, 20));
        let regions = rig.capture.regions();
        assert_eq!(regions.len(), 10);
        assert!(regions.iter().all(|r| r.width == 3 && r.height == 1));
    }

    #[test]
    fn row_major_diagonal_follows_fixed_point_slope() {
        let mut rig = Rig::buffered();
        rig.canvas().draw_line(10, 10, 13, 20, 1, WHITE).unwrap();

        let expected_x = [10, 10, 10, 10, 11, 11, 11, 12, 12, 12];
        for (i, x) in expected_x.iter().enumerate() {
            assert!(lit(&rig, *x, 10 + i), "row {}", 10 + i);
        }
        assert_eq!(lit_count(&rig), 10);
        assert!(!lit(&rig, 13, 20));
    }

    #[test]
    fn column_major_diagonal_floors_negative_slope() {
        let mut rig = Rig::buffered();
        rig.canvas().draw_line(40, 50, 50, 45, 1, WHITE).unwrap();

        let expected_y = [50, 49, 49, 48, 48, 47, 47, 46, 46, 45];
        for (i, y) in expected_y.iter().enumerate() {
            assert!(lit(&rig, 40 + i, *y), "column {}", 40 + i);
        }
        assert_eq!(lit_count(&rig), 10);
    }

    #[test]
    fn reversed_diagonal_is_normalized() {
        let mut forward = Rig::buffered();
        let mut backward = Rig::buffered();
        forward.canvas().draw_line(10, 10, 13, 20, 1, WHITE).unwrap();
        backward.canvas().draw_line(13, 20, 10, 10, 1, WHITE).unwrap();

        for half in [Half::Top, Half::Bottom] {
            assert_eq!(forward.fb.half(half), backward.fb.half(half));
        }
    }

    #[test]
    fn thick_diagonal_writes_square_blocks() {
        let mut rig = Rig::buffered();
        rig.canvas().draw_line(100, 100, 104, 110, 2, WHITE).unwrap();

        let regions = rig.capture.regions();
        assert_eq!(regions.len(), 10);
        assert!(regions.iter().all(|r| r.width == 2 && r.height == 2));
        assert!(regions.iter().all(|r| r.pixels.len() == 4));
    }

    #[test]
    fn rejects_lines_touching_the_far_edge() {
        let mut rig = Rig::buffered();
        let mut canvas = rig.canvas();

        let err = canvas.draw_line(0, 0, 319, 0, 1, WHITE).unwrap_err();
        assert!(err.is_bounds());
        assert!(canvas.draw_line(0, 230, 0, 238, 2, WHITE).is_err());
        assert!(canvas.draw_line(-1, 0, 10, 0, 1, WHITE).is_err());
        assert!(canvas.draw_line(0, 0, 10, 0, 0, WHITE).is_err());
        assert!(canvas.draw_line(0, 0, 318, 0, 1, WHITE).is_ok());
        drop(canvas);

        assert_eq!(rig.latch.count(), 4);
    }

    #[test]
    fn frame_closes_its_corners() {
        let mut rig = Rig::buffered();
        rig.canvas().draw_frame(10, 10, 20, 10, 2, WHITE).unwrap();

        // Top and left edges
        assert!(lit(&rig, 10, 10) && lit(&rig, 29, 11));
        assert!(lit(&rig, 11, 19));
        // Right edge runs to y + h + thick
        assert!(lit(&rig, 31, 21) && !lit(&rig, 31, 22));
        // Bottom edge runs to x + w + thick
        assert!(lit(&rig, 31, 20) && !lit(&rig, 32, 20));
        // Inside stays clear
        assert!(!lit(&rig, 15, 15));
    }

    #[test]
    fn frame_against_the_far_edges_is_all_or_nothing() {
        let mut rig = Rig::buffered();
        let err = rig.canvas().draw_frame(0, 0, 318, 100, 1, WHITE).unwrap_err();
        assert_eq!(
            err,
            Error::Bounds(BoundsError::new(0, 0, 318, 100, BoundsReason::Overshoot))
        );
        assert!(rig.canvas().draw_frame(0, 100, 50, 138, 1, WHITE).is_err());
        assert_eq!(lit_count(&rig), 0);
        assert!(rig.capture.events().is_empty());

        // One pixel further in, every edge fits
        rig.canvas().draw_frame(0, 0, 317, 100, 1, WHITE).unwrap();
        rig.canvas().draw_frame(0, 100, 50, 137, 1, WHITE).unwrap();
        assert!(lit(&rig, 317, 0) && lit(&rig, 317, 100));
        assert!(lit(&rig, 50, 237) && !lit(&rig, 51, 237));
    }

    #[test]
    fn huge_arguments_are_rejected_not_overflowed() {
        let mut rig = Rig::buffered();
        let mut canvas = rig.canvas();
        let err = canvas.draw_frame(10, 10, 20, 10, i32::MAX, WHITE).unwrap_err();
        assert!(err.is_bounds());
        assert!(canvas.draw_frame(10, 10, i32::MAX, 10, 1, WHITE).is_err());
        assert!(canvas
            .draw_line(i32::MIN, 0, i32::MAX, 0, 1, WHITE)
            .is_err());
        assert!(canvas.draw_line(0, 0, 10, 10, i32::MAX, WHITE).is_err());
        drop(canvas);

        assert_eq!(lit_count(&rig), 0);
        assert!(rig.capture.events().is_empty());
    }

    #[test]
    fn frame_rejects_empty_rectangle() {
        let mut rig = Rig::buffered();
        assert!(rig.canvas().draw_frame(10, 10, 0, 5, 1, WHITE).is_err());
        assert!(rig.capture.events().is_empty());
    }
}
