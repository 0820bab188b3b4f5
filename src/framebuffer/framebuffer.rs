//! Split framebuffer with an embedded-graphics draw target
use alloc::vec::Vec;
use core::convert::Infallible;
use core::fmt;

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::Rgb565,
    Pixel,
};

use crate::color::Color;
use crate::error::{AllocationError, BoundsError, BoundsReason, ConfigError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub const QVGA: Dimensions = Dimensions {
        width: 320,
        height: 240,
    };

    /// Both halves hold the same number of rows, so the height must be even.
    pub const fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        if width == 0
            || height == 0
            || height % 2 != 0
            || width > u16::MAX as usize
            || height > u16::MAX as usize
        {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub const fn half_rows(&self) -> usize {
        self.height / 2
    }

    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    Top,
    Bottom,
}

pub struct Framebuffer {
    dims: Dimensions,
    top: Vec<u16>,
    bottom: Vec<u16>,
}

impl Framebuffer {
    /// Reserve both halves. Call this before anything else grabs the heap.
    pub fn alloc(dims: Dimensions) -> Result<Self, AllocationError> {
        let len = dims.width * dims.half_rows();
        let top = alloc_pixels(len)?;
        let bottom = alloc_pixels(len)?;
        log::debug!(
            "screen memory reserved: 2 x {} bytes for {}x{}",
            len * 2,
            dims.width,
            dims.height
        );
        Ok(Self { dims, top, bottom })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn width(&self) -> usize {
        self.dims.width
    }

    pub fn height(&self) -> usize {
        self.dims.height
    }

    /// Which half holds logical row `y`, and the row index inside it
    pub fn locate(&self, y: usize) -> Option<(Half, usize)> {
        let split = self.dims.half_rows();
        if y < split {
            Some((Half::Top, y))
        } else if y < self.dims.height {
            Some((Half::Bottom, y - split))
        } else {
            None
        }
    }

    pub fn half(&self, half: Half) -> &[u16] {
        match half {
            Half::Top => &self.top,
            Half::Bottom => &self.bottom,
        }
    }

    /// One row of one half, ready to be handed to the transport as payload
    pub fn row_slice(&self, half: Half, row: usize) -> Option<&[u16]> {
        let width = self.dims.width;
        let start = row.checked_mul(width)?;
        self.half(half).get(start..start + width)
    }

    /// Logical row `y`
    pub fn row(&self, y: usize) -> Option<&[u16]> {
        let (half, row) = self.locate(y)?;
        self.row_slice(half, row)
    }

    pub fn row_mut(&mut self, y: usize) -> Option<&mut [u16]> {
        let (half, row) = self.locate(y)?;
        let width = self.dims.width;
        let start = row * width;
        let storage = match half {
            Half::Top => &mut self.top,
            Half::Bottom => &mut self.bottom,
        };
        storage.get_mut(start..start + width)
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        self.row(y)?.get(x).copied().map(Color)
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), BoundsError> {
        if x < 0 || y < 0 {
            return Err(BoundsError::new(x, y, 1, 1, BoundsReason::Negative));
        }
        let slot = self
            .row_mut(y as usize)
            .and_then(|row| row.get_mut(x as usize));
        match slot {
            Some(px) => {
                *px = color.0;
                Ok(())
            }
            None => Err(BoundsError::new(x, y, 1, 1, BoundsReason::Overshoot)),
        }
    }

    /// Paint `len` pixels of row `y` starting at `x`, clipped at the right edge.
    pub fn fill_span(&mut self, x: usize, y: usize, len: usize, color: Color) {
        let width = self.dims.width;
        if let Some(row) = self.row_mut(y) {
            let end = x.saturating_add(len).min(width);
            if x < end {
                row[x..end].fill(color.0);
            }
        }
    }

    pub fn fill(&mut self, color: Color) {
        self.top.fill(color.0);
        self.bottom.fill(color.0);
    }
}

impl fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Framebuffer")
            .field("width", &self.dims.width)
            .field("height", &self.dims.height)
            .finish_non_exhaustive()
    }
}

pub(crate) fn alloc_pixels(len: usize) -> Result<Vec<u16>, AllocationError> {
    let mut half = Vec::new();
    if half.try_reserve_exact(len).is_err() {
        log::error!("failed memory allocation for {} pixels", len);
        return Err(AllocationError { bytes: len * 2 });
    }
    half.resize(len, 0);
    Ok(half)
}

// Implement DrawTarget for embedded-graphics. Only screen memory is touched;
// the owner pushes the result to the panel with a region flush.
impl DrawTarget for Framebuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            // Off-screen pixels are clipped, as embedded-graphics expects
            let _ = self.set_pixel(x, y, color.into());
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.into());
        Ok(())
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(self.dims.width as u32, self.dims.height as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::{
        prelude::{Drawable, Point, Primitive, Size},
        primitives::{PrimitiveStyle, Rectangle},
    };

    fn screen() -> Framebuffer {
        Framebuffer::alloc(Dimensions::QVGA).expect("host heap")
    }

    #[test]
    fn rows_split_across_halves() {
        let fb = screen();
        assert_eq!(fb.locate(0), Some((Half::Top, 0)));
        assert_eq!(fb.locate(119), Some((Half::Top, 119)));
        assert_eq!(fb.locate(120), Some((Half::Bottom, 0)));
        assert_eq!(fb.locate(239), Some((Half::Bottom, 119)));
        assert_eq!(fb.locate(240), None);
        assert_eq!(fb.half(Half::Top).len(), 320 * 120);
        assert_eq!(fb.half(Half::Bottom).len(), 320 * 120);
    }

    #[test]
    fn set_pixel_writes_the_owning_half() {
        let mut fb = screen();
        fb.set_pixel(5, 119, Color(0x1234)).unwrap();
        fb.set_pixel(6, 120, Color(0xBEEF)).unwrap();

        assert_eq!(fb.row_slice(Half::Top, 119).unwrap()[5], 0x1234);
        assert_eq!(fb.row_slice(Half::Bottom, 0).unwrap()[6], 0xBEEF);
        assert_eq!(fb.pixel(6, 120), Some(Color(0xBEEF)));
    }

    #[test]
    fn set_pixel_rejects_off_screen() {
        let mut fb = screen();
        assert_eq!(
            fb.set_pixel(320, 0, Color::WHITE).unwrap_err().reason,
            BoundsReason::Overshoot
        );
        assert_eq!(
            fb.set_pixel(0, 240, Color::WHITE).unwrap_err().reason,
            BoundsReason::Overshoot
        );
        assert_eq!(
            fb.set_pixel(-1, 0, Color::WHITE).unwrap_err().reason,
            BoundsReason::Negative
        );
        assert!(fb.half(Half::Top).iter().all(|&px| px == 0));
        assert!(fb.half(Half::Bottom).iter().all(|&px| px == 0));
    }

    #[test]
    fn fill_covers_both_halves() {
        let mut fb = screen();
        fb.fill(Color(0xFFFF));
        assert!(fb.half(Half::Top).iter().all(|&px| px == 0xFFFF));
        assert!(fb.half(Half::Bottom).iter().all(|&px| px == 0xFFFF));
    }

    #[test]
    fn fill_span_clips_at_right_edge() {
        let mut fb = screen();
        fb.fill_span(315, 3, 20, Color(0x00FF));
        let row = fb.row(3).unwrap();
        assert!(row[315..].iter().all(|&px| px == 0x00FF));
        assert_eq!(row[314], 0);
        assert_eq!(fb.row(4).unwrap()[0], 0);
    }

    #[test]
    fn rejects_odd_heights() {
        assert!(Dimensions::new(320, 241).is_err());
        assert!(Dimensions::new(0, 240).is_err());
        assert_eq!(Dimensions::new(320, 240), Ok(Dimensions::QVGA));
    }

    #[test]
    fn draws_embedded_graphics_primitives() {
        let mut fb = screen();
        Rectangle::new(Point::new(10, 115), Size::new(4, 10))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::new(31, 0, 0)))
            .draw(&mut fb)
            .unwrap();

        assert_eq!(fb.pixel(10, 115), Some(Color(0xF800)));
        assert_eq!(fb.pixel(13, 124), Some(Color(0xF800)));
        assert_eq!(fb.pixel(14, 124), Some(Color(0x0000)));
        assert_eq!(fb.pixel(10, 125), Some(Color(0x0000)));
    }
}
