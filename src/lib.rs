//! # tft-display
//!
//! Driver and 2D rasterizer for 320x240 RGB565 SPI panels (ILI9341 and
//! ST7789) with an in-memory mirror of the screen.
//!
//! ## Modules
//!
//! - `display`: the `Display` context and its public drawing API
//! - `controller`: panel reset, detection, init tables and addressing
//! - `transport`: command/data descriptors, the batch pipeline and transports
//! - `block`: rectangular region writes
//! - `framebuffer`: split screen memory
//! - `raster`: rectangles, lines and outlines
//! - `glyph`: bitmap fonts and text
//! - `color`, `config`, `error`, `status`: shared types
//!
//! ## Bring-up
//!
//! ```no_run
//! # use tft_display::{Color, Config, Display, FontSize};
//! # fn demo<T, RST, BL, D>(transport: T, reset: RST, backlight: BL, delay: &mut D)
//! # -> Result<(), tft_display::Error>
//! # where
//! #     T: tft_display::transport::Transport,
//! #     RST: embedded_hal::digital::OutputPin,
//! #     BL: embedded_hal::digital::OutputPin,
//! #     D: embedded_hal::delay::DelayNs,
//! # {
//! let mut display = Display::setup(transport, reset, backlight, Config::wrover_kit())?;
//! display.display_init(delay)?;
//! display.clear_screen(Color::BLACK)?;
//! display.draw_string("hello", FontSize::Size32, 10, 10, Color::WHITE);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod block;
pub mod color;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod framebuffer;
pub mod glyph;
pub mod raster;
pub mod status;
pub mod transport;

#[cfg(test)]
mod testing;

pub use color::Color;
pub use config::{Config, PanelConfig, RenderConfig};
pub use controller::{DisplayController, PanelVariant, VendorSelect};
pub use display::Display;
pub use error::Error;
pub use framebuffer::{Dimensions, Framebuffer};
pub use glyph::FontSize;
pub use raster::Canvas;
pub use status::ErrorLatch;
