//! # Glyph Rendering
//!
//! Bitmap text in four sizes.
//!
//! ## Modules
//!
//! - `font`: `FontSize`, table lookup, character substitution and extents
//! - `render`: `Canvas::draw_glyph` and `Canvas::draw_string`
//! - `tables`: the 16, 32 (26 px) and 64 (48 px) faces
//!
//! ## Sizes
//!
//! | size | face  | scale | gap |
//! |------|-------|-------|-----|
//! | 16   | 16 px | 1     | +1  |
//! | 32   | 26 px | 1     | -3  |
//! | 64   | 48 px | 1     | -3  |
//! | 128  | 48 px | 2     | -3  |

pub mod font;
pub mod render;
pub mod tables;

pub use font::{glyph_extent, string_extent, FontSize, Glyph, GlyphTable};
