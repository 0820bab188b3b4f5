//! Packed 16-bit panel color
use embedded_graphics::pixelcolor::{raw::RawU16, IntoStorage, Rgb565};

/// One pixel as it is stored in screen memory and clocked onto the wire
/// (5 bits red, 6 bits green, 5 bits blue, red in the top bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Color = Color(0x0000);
    pub const WHITE: Color = Color(0xFFFF);
    pub const RED: Color = Color(0xF800);
    pub const GREEN: Color = Color(0x07E0);
    pub const BLUE: Color = Color(0x001F);
    pub const YELLOW: Color = Color(0xFFE0);
    pub const CYAN: Color = Color(0x07FF);
    pub const MAGENTA: Color = Color(0xF81F);
    pub const GRAY: Color = Color::from_rgb888(128, 128, 128);
    pub const DARK_GRAY: Color = Color::from_rgb888(64, 64, 64);
    pub const LIGHT_GRAY: Color = Color::from_rgb888(192, 192, 192);

    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Pack 8-bit channels, dropping the low bits of each.
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        let r = (r as u16 & 0xF8) << 8;
        let g = (g as u16 & 0xFC) << 3;
        let b = b as u16 >> 3;
        Self(r | g | b)
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self::from_rgb888(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Wire order: most significant byte first.
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 11) as u8
    }

    pub const fn green(self) -> u8 {
        ((self.0 >> 5) & 0x3F) as u8
    }

    pub const fn blue(self) -> u8 {
        (self.0 & 0x1F) as u8
    }

    pub fn to_rgb565(self) -> Rgb565 {
        Rgb565::from(RawU16::new(self.0))
    }
}

impl From<Rgb565> for Color {
    fn from(color: Rgb565) -> Self {
        Color(color.into_storage())
    }
}

impl From<Color> for Rgb565 {
    fn from(color: Color) -> Self {
        color.to_rgb565()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::pixelcolor::RgbColor;

    #[test]
    fn packs_rgb888_into_565() {
        assert_eq!(Color::from_rgb888(255, 0, 0).raw(), 0xF800);
        assert_eq!(Color::from_rgb888(0, 255, 0).raw(), 0x07E0);
        assert_eq!(Color::from_rgb888(0, 0, 255).raw(), 0x001F);
        assert_eq!(Color::from_rgb888(255, 255, 255).raw(), 0xFFFF);
        assert_eq!(Color::from_hex(0x808080).raw(), 0x8410);
    }

    #[test]
    fn channels_match_embedded_graphics() {
        let color = Color::new(0xA2C5);
        let eg = color.to_rgb565();
        assert_eq!(eg.r(), color.red());
        assert_eq!(eg.g(), color.green());
        assert_eq!(eg.b(), color.blue());
        assert_eq!(Color::from(eg), color);
    }

    #[test]
    fn wire_bytes_are_big_endian() {
        assert_eq!(Color::new(0x1234).to_be_bytes(), [0x12, 0x34]);
    }
}
