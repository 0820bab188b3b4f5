//! # Screen Memory
//!
//! The in-memory image of what the panel currently shows.
//!
//! ## Modules
//!
//! - `framebuffer`: `Framebuffer`, the split pixel store, and its
//!   `embedded_graphics` draw target
//!
//! ## Layout
//!
//! A 320x240 RGB565 image needs 150 KiB. On a heap that the radio stack has
//! already fragmented a single block of that size is often unavailable, so the
//! image is held as two independent halves:
//!
//! - rows `0..height/2` live in the top half
//! - rows `height/2..height` live in the bottom half, re-based to row 0
//!
//! The split is purely an allocation detail; every accessor takes logical
//! screen coordinates.

pub mod framebuffer;

pub use framebuffer::{Dimensions, Framebuffer, Half};
