//! Glyph and string drawing on a [`Canvas`]
use crate::color::Color;
use crate::raster::Canvas;
use crate::transport::Transport;

use super::font::{glyph_extent, printable, substitute, FontSize};

impl<T: Transport> Canvas<'_, T> {
    /// Draw one glyph with its top-left corner at `(x, y)` and return the
    /// unscaled advance, `width + gap`.
    ///
    /// Each source row first gets a background line as wide as the glyph
    /// cell, then one pixel (or a 2x2 block at double scale) per set bit.
    /// Pixels that fall off the screen are skipped and latched. Without
    /// double buffering every change is mirrored as soon as it is made.
    pub fn draw_glyph(&mut self, code: u8, size: FontSize, x: i32, y: i32, color: Color) -> i32 {
        let Some(glyph) = size.table().glyph(printable(code)) else {
            return 0;
        };
        let scale = size.scale();
        let width = i32::from(glyph.width);
        let cell = width * scale + size.gap();
        let background = self.render().background;

        let mut py = y;
        for row in 0..usize::from(glyph.height) {
            for dy in 0..scale {
                self.background_line(x, py.saturating_add(dy), cell, background);
            }
            for (k, &bits) in glyph.row(row).iter().enumerate() {
                if bits == 0 {
                    continue;
                }
                let base = x.saturating_add(k as i32 * 8 * scale);
                for bit in 0..8 {
                    if bits & (0x80 >> bit) == 0 {
                        continue;
                    }
                    let px = base.saturating_add(bit * scale);
                    for dy in 0..scale {
                        for dx in 0..scale {
                            self.plot(px.saturating_add(dx), py.saturating_add(dy), color);
                        }
                    }
                }
            }
            py = py.saturating_add(scale);
        }
        width + size.gap()
    }

    /// Draw `text` left to right from `(x, y)` and return the x just past
    /// the last glyph.
    ///
    /// The latch is reset first and reported once at the end, so a string
    /// running off the screen produces a single message. With double
    /// buffering the covered rows are pushed out once the whole string is in
    /// screen memory.
    pub fn draw_string(&mut self, text: &str, size: FontSize, x: i32, y: i32, color: Color) -> i32 {
        self.latch_mut().clear();

        let mut pos = x;
        for ch in text.chars() {
            let code = substitute(ch);
            self.draw_glyph(code, size, pos, y, color);
            pos = pos.saturating_add(glyph_extent(code, size).0);
        }

        if self.render().double_buffer {
            self.flush_text(x, y, pos, size.line_height());
        }

        if self.latch().is_raised() {
            log::warn!("text at {},{}: {}", x, y, self.latch());
        }
        pos
    }

    fn flush_text(&mut self, x0: i32, y: i32, x1: i32, height: i32) {
        let dims = self.dimensions();
        let xs = x0.max(0);
        let xe = x1.min(dims.width as i32);
        if xe <= xs {
            return;
        }
        for row in y.max(0)..y.saturating_add(height).min(dims.height as i32) {
            let result = self.mirror(xs, row, xe - xs, 1);
            // Failures are latched by `record`; keep flushing the other rows
            let _ = self.record(result);
        }
    }

    /// Background behind one glyph row. Dropped when its start is off the
    /// screen, clipped at the right edge.
    fn background_line(&mut self, x: i32, y: i32, len: i32, color: Color) {
        let dims = self.dimensions();
        if len <= 0 || !dims.contains(x, y) {
            return;
        }
        let len = len.min(dims.width as i32 - x);
        self.framebuffer_mut()
            .fill_span(x as usize, y as usize, len as usize, color);
        if !self.render().double_buffer {
            let result = self.mirror(x, y, len, 1);
            let _ = self.record(result);
        }
    }

    fn plot(&mut self, x: i32, y: i32, color: Color) {
        if let Err(err) = self.framebuffer_mut().set_pixel(x, y, color) {
            // Latched quietly; `draw_string` reports once
            self.latch_mut().raise(err.into());
            return;
        }
        if !self.render().double_buffer {
            let result = self.mirror(x, y, 1, 1);
            let _ = self.record(result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::testing::Rig;

    const WHITE: Color = Color(0xFFFF);

    #[test]
    fn string_end_is_sum_of_advances() {
        let mut rig = Rig::buffered();
        let end = rig.canvas().draw_string("AB", FontSize::Size16, 20, 30, WHITE);
        // 'A' and 'B' are 7 px wide, plus the 1 px gap of the 16 face
        assert_eq!(end, 20 + 8 + 8);
        assert!(!rig.latch.is_raised());
    }

    #[test]
    fn glyph_bits_land_in_screen_memory() {
        let mut rig = Rig::buffered();
        rig.fb.fill(Color(0x1234));
        let advance = rig.canvas().draw_glyph(b'A', FontSize::Size16, 0, 0, WHITE);
        assert_eq!(advance, 8);

        // Third row of 'A' is 0x10: a single pixel in column 3
        assert_eq!(rig.fb.pixel(3, 2), Some(WHITE));
        assert_eq!(rig.fb.pixel(2, 2), Some(Color::BLACK));
        // Background covers width + gap, nothing beyond
        assert_eq!(rig.fb.pixel(7, 0), Some(Color::BLACK));
        assert_eq!(rig.fb.pixel(8, 0), Some(Color(0x1234)));
        // Buffered glyphs are not mirrored on their own
        assert!(rig.capture.events().is_empty());
    }

    #[test]
    fn immediate_mode_mirrors_every_change() {
        let mut rig = Rig::immediate();
        rig.canvas().draw_glyph(b'A', FontSize::Size16, 0, 0, WHITE);

        let regions = rig.capture.regions();
        let rows = regions.iter().filter(|r| r.width == 8).count();
        let pixels = regions.iter().filter(|r| r.width == 1).count();
        assert_eq!(rows, 16);
        assert_eq!(pixels, 39);
    }

    #[test]
    fn doubled_glyph_plots_two_by_two_blocks() {
        let mut rig = Rig::buffered();
        let advance = rig.canvas().draw_glyph(b'|', FontSize::Size128, 10, 10, WHITE);
        let width = i32::from(FontSize::Size64.table().glyph(b'|').unwrap().width);
        assert_eq!(advance, width - 3);

        let lit: usize = [crate::framebuffer::Half::Top, crate::framebuffer::Half::Bottom]
            .iter()
            .map(|&half| rig.fb.half(half).iter().filter(|&&px| px == WHITE.0).count())
            .sum();
        let glyph = FontSize::Size64.table().glyph(b'|').unwrap();
        let bits: u32 = glyph.bitmap.iter().map(|b| b.count_ones()).sum();
        assert_eq!(lit, bits as usize * 4);
    }

    #[test]
    fn buffered_string_flushes_one_region_per_row() {
        let mut rig = Rig::buffered();
        let end = rig.canvas().draw_string("Hi", FontSize::Size32, 5, 40, WHITE);

        let regions = rig.capture.regions();
        assert_eq!(regions.len(), 26);
        assert!(regions
            .iter()
            .all(|r| r.x == 5 && i32::from(r.width) == end - 5 && r.height == 1));
        assert_eq!(regions[0].y, 40);
        assert_eq!(regions[25].y, 65);
    }

    #[test]
    fn string_off_the_edge_latches_once_and_keeps_going() {
        let mut rig = Rig::buffered();
        let end = rig.canvas().draw_string("WWW", FontSize::Size64, 280, 0, WHITE);

        let (w, _) = glyph_extent(b'W', FontSize::Size64);
        assert_eq!(end, 280 + 3 * w);
        assert!(rig.latch.is_raised());
        assert!(rig.latch.count() > 1);
        assert!(matches!(rig.latch.first(), Some(Error::Bounds(_))));
        // On-screen part was drawn and flushed, clipped to the screen
        assert!(rig.capture.regions().iter().all(|r| r.x == 280 && r.width == 40));
    }

    #[test]
    fn text_far_off_screen_is_latched_not_overflowed() {
        let mut rig = Rig::buffered();
        let end = rig
            .canvas()
            .draw_string("A", FontSize::Size16, i32::MAX - 2, 0, WHITE);
        assert_eq!(end, i32::MAX);
        assert!(matches!(rig.latch.first(), Some(Error::Bounds(_))));

        rig.canvas()
            .draw_string("AB", FontSize::Size128, 0, i32::MAX - 10, WHITE);
        rig.canvas().draw_glyph(b'W', FontSize::Size128, i32::MAX, i32::MAX, WHITE);
        assert!(rig.latch.is_raised());
        assert!(rig.capture.events().is_empty());
        for half in [crate::framebuffer::Half::Top, crate::framebuffer::Half::Bottom] {
            assert!(rig.fb.half(half).iter().all(|&px| px == 0));
        }
    }

    #[test]
    fn new_string_clears_the_latch() {
        let mut rig = Rig::buffered();
        rig.canvas().draw_string("W", FontSize::Size64, 310, 0, WHITE);
        assert!(rig.latch.is_raised());
        rig.canvas().draw_string("ok", FontSize::Size16, 0, 0, WHITE);
        assert!(!rig.latch.is_raised());
    }

    #[test]
    fn underscore_and_controls_are_substituted() {
        let mut a = Rig::buffered();
        let mut b = Rig::buffered();
        let end_a = a.canvas().draw_string("a_\t", FontSize::Size16, 0, 0, WHITE);
        let end_b = b.canvas().draw_string("a-~", FontSize::Size16, 0, 0, WHITE);
        assert_eq!(end_a, end_b);
        for half in [crate::framebuffer::Half::Top, crate::framebuffer::Half::Bottom] {
            assert_eq!(a.fb.half(half), b.fb.half(half));
        }
    }
}
