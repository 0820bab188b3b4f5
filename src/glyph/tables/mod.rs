//! Bitmap faces for printable ASCII (codes 32 to 127)

mod font16;
mod font32;
mod font64;

use super::font::GlyphTable;

pub static FONT16: GlyphTable = GlyphTable::new(font16::HEIGHT, &font16::WIDTHS, &font16::BITMAPS);
pub static FONT32: GlyphTable = GlyphTable::new(font32::HEIGHT, &font32::WIDTHS, &font32::BITMAPS);
pub static FONT64: GlyphTable = GlyphTable::new(font64::HEIGHT, &font64::WIDTHS, &font64::BITMAPS);
