//! Font sizes, glyph lookup and text metrics
use crate::error::ConfigError;

use super::tables::{FONT16, FONT32, FONT64};

/// Character code of the first table entry
pub const FIRST_CODE: u8 = 32;
/// Number of entries in every table
pub const GLYPH_COUNT: usize = 96;
/// Drawn in place of control characters
pub const PLACEHOLDER: u8 = b'~';
/// Drawn in place of anything outside 7-bit ASCII
pub const NON_ASCII: u8 = b'.';

/// One bitmap face: a fixed cell height and per-glyph widths.
///
/// Bitmaps are stored row by row, `(width + 7) / 8` bytes per row, most
/// significant bit leftmost.
#[derive(Debug)]
pub struct GlyphTable {
    height: u8,
    widths: &'static [u8; GLYPH_COUNT],
    bitmaps: &'static [&'static [u8]; GLYPH_COUNT],
}

impl GlyphTable {
    pub const fn new(
        height: u8,
        widths: &'static [u8; GLYPH_COUNT],
        bitmaps: &'static [&'static [u8]; GLYPH_COUNT],
    ) -> Self {
        Self {
            height,
            widths,
            bitmaps,
        }
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn glyph(&self, code: u8) -> Option<Glyph> {
        let index = usize::from(code.checked_sub(FIRST_CODE)?);
        Some(Glyph {
            width: *self.widths.get(index)?,
            height: self.height,
            bitmap: *self.bitmaps.get(index)?,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Glyph {
    pub width: u8,
    pub height: u8,
    pub bitmap: &'static [u8],
}

impl Glyph {
    pub fn bytes_per_row(&self) -> usize {
        (usize::from(self.width) + 7) / 8
    }

    /// Bitmap bytes of source row `row`; empty past the end of the bitmap.
    pub fn row(&self, row: usize) -> &'static [u8] {
        let stride = self.bytes_per_row();
        let start = row * stride;
        self.bitmap.get(start..start + stride).unwrap_or(&[])
    }
}

/// Supported point sizes. `Size128` is the 64 face drawn at double scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Size16,
    Size32,
    Size64,
    Size128,
}

impl FontSize {
    pub const ALL: [FontSize; 4] = [
        FontSize::Size16,
        FontSize::Size32,
        FontSize::Size64,
        FontSize::Size128,
    ];

    pub fn from_points(points: u16) -> Result<Self, ConfigError> {
        match points {
            16 => Ok(FontSize::Size16),
            32 => Ok(FontSize::Size32),
            64 => Ok(FontSize::Size64),
            128 => Ok(FontSize::Size128),
            other => {
                log::error!("invalid font size {}", other);
                Err(ConfigError::UnknownFontSize(other))
            }
        }
    }

    pub const fn points(self) -> u16 {
        match self {
            FontSize::Size16 => 16,
            FontSize::Size32 => 32,
            FontSize::Size64 => 64,
            FontSize::Size128 => 128,
        }
    }

    pub fn table(self) -> &'static GlyphTable {
        match self {
            FontSize::Size16 => &FONT16,
            FontSize::Size32 => &FONT32,
            FontSize::Size64 | FontSize::Size128 => &FONT64,
        }
    }

    /// Horizontal adjustment between neighbouring glyphs
    pub const fn gap(self) -> i32 {
        match self {
            FontSize::Size16 => 1,
            FontSize::Size32 | FontSize::Size64 | FontSize::Size128 => -3,
        }
    }

    /// Pixel duplication factor
    pub const fn scale(self) -> i32 {
        match self {
            FontSize::Size128 => 2,
            _ => 1,
        }
    }

    pub fn line_height(self) -> i32 {
        i32::from(self.table().height()) * self.scale()
    }
}

impl TryFrom<u16> for FontSize {
    type Error = ConfigError;

    fn try_from(points: u16) -> Result<Self, ConfigError> {
        FontSize::from_points(points)
    }
}

/// Map a byte onto the table range: controls to `~`, high bytes to `.`.
pub const fn printable(code: u8) -> u8 {
    if code >= 127 {
        NON_ASCII
    } else if code < 0x20 {
        PLACEHOLDER
    } else {
        code
    }
}

/// Code drawn for `ch` inside a string. Underscores become dashes.
pub fn substitute(ch: char) -> u8 {
    let code = if ch.is_ascii() { ch as u8 } else { NON_ASCII };
    match printable(code) {
        b'_' => b'-',
        code => code,
    }
}

/// Cell of one glyph: advance including the gap, and height, both scaled.
pub fn glyph_extent(code: u8, size: FontSize) -> (i32, i32) {
    let width = size
        .table()
        .glyph(printable(code))
        .map_or(0, |glyph| i32::from(glyph.width));
    (width * size.scale() + size.gap(), size.line_height())
}

/// Width and height `text` would occupy, without drawing it.
pub fn string_extent(text: &str, size: FontSize) -> (i32, i32) {
    let width = text
        .chars()
        .map(|ch| glyph_extent(substitute(ch), size).0)
        .sum();
    (width, size.line_height())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_from_points() {
        for size in FontSize::ALL {
            assert_eq!(FontSize::from_points(size.points()), Ok(size));
        }
        assert_eq!(
            FontSize::try_from(24u16),
            Err(ConfigError::UnknownFontSize(24))
        );
    }

    #[test]
    fn extent_matches_table_width_plus_gap() {
        for size in FontSize::ALL {
            let table = size.table();
            for code in FIRST_CODE..127 {
                let width = i32::from(table.glyph(code).unwrap().width);
                let (w, h) = glyph_extent(code, size);
                assert_eq!(w, width * size.scale() + size.gap());
                assert_eq!(h, i32::from(table.height()) * size.scale());
            }
        }
    }

    #[test]
    fn doubled_size_reuses_the_64_face() {
        let code = b'W';
        let w64 = i32::from(FontSize::Size64.table().glyph(code).unwrap().width);
        assert_eq!(glyph_extent(code, FontSize::Size128), (w64 * 2 - 3, 96));
        assert_eq!(glyph_extent(code, FontSize::Size64), (w64 - 3, 48));
    }

    #[test]
    fn size16_metrics() {
        assert_eq!(glyph_extent(b'A', FontSize::Size16), (8, 16));
        assert_eq!(glyph_extent(b'B', FontSize::Size16), (8, 16));
        assert_eq!(string_extent("AB", FontSize::Size16), (16, 16));
        assert_eq!(string_extent("", FontSize::Size32), (0, 26));
    }

    #[test]
    fn out_of_range_codes_are_substituted() {
        assert_eq!(printable(0x07), b'~');
        assert_eq!(printable(200), b'.');
        assert_eq!(printable(127), b'.');
        assert_eq!(substitute('_'), b'-');
        assert_eq!(substitute('\n'), b'~');
        assert_eq!(substitute('é'), b'.');
        assert_eq!(substitute('x'), b'x');
        assert_eq!(glyph_extent(0x07, FontSize::Size16), glyph_extent(b'~', FontSize::Size16));
    }

    #[test]
    fn rows_use_whole_bytes() {
        let glyph = FontSize::Size32.table().glyph(b'W').unwrap();
        assert_eq!(glyph.bytes_per_row(), (usize::from(glyph.width) + 7) / 8);
        assert_eq!(glyph.bitmap.len(), glyph.bytes_per_row() * usize::from(glyph.height));
        assert!(glyph.row(usize::from(glyph.height)).is_empty());
    }
}
