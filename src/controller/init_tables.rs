//! Power-on command tables for the two supported controllers
//!
//! Each entry is a command byte, its argument bytes and a flag byte: the low
//! five bits count the arguments actually sent, bit 7 asks for a pause after
//! the command. A flag byte of `0xFF` ends the table.

use super::PanelVariant;

pub const ARG_COUNT_MASK: u8 = 0x1F;
pub const DELAY_FLAG: u8 = 0x80;
pub const END_MARKER: u8 = 0xFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitCommand {
    pub command: u8,
    pub data: &'static [u8],
    pub flags: u8,
}

impl InitCommand {
    pub const fn entry(command: u8, data: &'static [u8], flags: u8) -> Self {
        Self {
            command,
            data,
            flags,
        }
    }

    pub const fn end() -> Self {
        Self::entry(0x00, &[], END_MARKER)
    }

    pub const fn is_end(&self) -> bool {
        self.flags == END_MARKER
    }

    pub const fn wants_delay(&self) -> bool {
        self.flags & DELAY_FLAG != 0
    }

    /// Bytes sent after the command; never more than the entry stores.
    pub fn args(&self) -> &'static [u8] {
        let count = (self.flags & ARG_COUNT_MASK) as usize;
        &self.data[..count.min(self.data.len())]
    }
}

pub static ST7789_INIT: [InitCommand; 16] = [
    // Memory access control: row/column exchange + column order (landscape)
    InitCommand::entry(0x36, &[(1 << 5) | (1 << 6)], 1),
    // 16 bits per pixel
    InitCommand::entry(0x3A, &[0x55], 1),
    InitCommand::entry(0xB2, &[0x0C, 0x0C, 0x00, 0x33, 0x33], 5),
    InitCommand::entry(0xB7, &[0x45], 1),
    InitCommand::entry(0xBB, &[0x2B], 1),
    InitCommand::entry(0xC0, &[0x2C], 1),
    InitCommand::entry(0xC2, &[0x01, 0xFF], 2),
    InitCommand::entry(0xC3, &[0x11], 1),
    InitCommand::entry(0xC4, &[0x20], 1),
    InitCommand::entry(0xC6, &[0x0F], 1),
    // Power control: only the first byte is clocked out
    InitCommand::entry(0xD0, &[0xA4, 0xA1], 1),
    InitCommand::entry(
        0xE0,
        &[
            0xD0, 0x00, 0x05, 0x0E, 0x15, 0x0D, 0x37, 0x43, 0x47, 0x09, 0x15, 0x12, 0x16, 0x19,
        ],
        14,
    ),
    InitCommand::entry(
        0xE1,
        &[
            0xD0, 0x00, 0x05, 0x0D, 0x0C, 0x06, 0x2D, 0x44, 0x40, 0x0E, 0x1C, 0x18, 0x16, 0x19,
        ],
        14,
    ),
    // Sleep out
    InitCommand::entry(0x11, &[], DELAY_FLAG),
    // Display on
    InitCommand::entry(0x29, &[], DELAY_FLAG),
    InitCommand::end(),
];

pub static ILI9341_INIT: [InitCommand; 25] = [
    InitCommand::entry(0xCF, &[0x00, 0x83, 0x30], 3),
    InitCommand::entry(0xED, &[0x64, 0x03, 0x12, 0x81], 4),
    InitCommand::entry(0xE8, &[0x85, 0x01, 0x79], 3),
    InitCommand::entry(0xCB, &[0x39, 0x2C, 0x00, 0x34, 0x02], 5),
    InitCommand::entry(0xF7, &[0x20], 1),
    InitCommand::entry(0xEA, &[0x00, 0x00], 2),
    // Power control
    InitCommand::entry(0xC0, &[0x26], 1),
    InitCommand::entry(0xC1, &[0x11], 1),
    // VCOM
    InitCommand::entry(0xC5, &[0x35, 0x3E], 2),
    InitCommand::entry(0xC7, &[0xBE], 1),
    // Memory access control: landscape, BGR
    InitCommand::entry(0x36, &[0x28], 1),
    InitCommand::entry(0x3A, &[0x55], 1),
    // Frame rate
    InitCommand::entry(0xB1, &[0x00, 0x1B], 2),
    InitCommand::entry(0xF2, &[0x08], 1),
    // Gamma curve
    InitCommand::entry(0x26, &[0x01], 1),
    InitCommand::entry(
        0xE0,
        &[
            0x1F, 0x1A, 0x18, 0x0A, 0x0F, 0x06, 0x45, 0x87, 0x32, 0x0A, 0x07, 0x02, 0x07, 0x05,
            0x00,
        ],
        15,
    ),
    InitCommand::entry(
        0xE1,
        &[
            0x00, 0x25, 0x27, 0x05, 0x10, 0x09, 0x3A, 0x78, 0x4D, 0x05, 0x18, 0x0D, 0x38, 0x3A,
            0x1F,
        ],
        15,
    ),
    InitCommand::entry(0x2A, &[0x00, 0x00, 0x00, 0xEF], 4),
    InitCommand::entry(0x2B, &[0x00, 0x00, 0x01, 0x3F], 4),
    InitCommand::entry(0x2C, &[], 0),
    // Entry mode
    InitCommand::entry(0xB7, &[0x07], 1),
    // Display function control
    InitCommand::entry(0xB6, &[0x0A, 0x82, 0x27, 0x00], 4),
    InitCommand::entry(0x11, &[], DELAY_FLAG),
    InitCommand::entry(0x29, &[], DELAY_FLAG),
    InitCommand::end(),
];

pub fn table_for(variant: PanelVariant) -> &'static [InitCommand] {
    match variant {
        PanelVariant::Ili9341 => &ILI9341_INIT,
        PanelVariant::St7789 => &ST7789_INIT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_terminated() {
        for variant in [PanelVariant::Ili9341, PanelVariant::St7789] {
            let table = table_for(variant);
            assert!(table.last().unwrap().is_end());
            assert_eq!(table.iter().filter(|entry| entry.is_end()).count(), 1);
        }
    }

    #[test]
    fn arg_count_comes_from_the_flag_byte() {
        let power = ST7789_INIT[10];
        assert_eq!(power.command, 0xD0);
        assert_eq!(power.args(), &[0xA4]);

        let sleep_out = ST7789_INIT[13];
        assert!(sleep_out.wants_delay());
        assert!(sleep_out.args().is_empty());
        assert!(!ST7789_INIT[0].wants_delay());
    }
}
