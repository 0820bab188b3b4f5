//! Panel and rendering configuration presets
use crate::color::Color;
use crate::controller::VendorSelect;
use crate::framebuffer::Dimensions;

/// Electrical and timing parameters of the attached panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelConfig {
    pub dimensions: Dimensions,
    pub vendor: VendorSelect,
    /// How long reset is held low, and how long to wait after releasing it
    pub reset_hold_ms: u32,
    /// Pause after init-table entries flagged with the delay bit
    pub command_delay_ms: u32,
    /// Poll budget for a batch drain; `None` waits forever
    pub drain_spin_limit: Option<u32>,
}

/// How drawing operations reach the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Compose text in screen memory and flush once per string instead of
    /// pushing every pixel as it is plotted
    pub double_buffer: bool,
    /// Fill behind glyphs
    pub background: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub panel: PanelConfig,
    pub render: RenderConfig,
}

impl PanelConfig {
    /// ESP-WROVER-KIT LCD: 320x240 landscape, controller detected at reset
    pub const fn wrover_kit() -> Self {
        Self {
            dimensions: Dimensions::QVGA,
            vendor: VendorSelect::Auto,
            reset_hold_ms: 100,
            command_delay_ms: 100,
            drain_spin_limit: None,
        }
    }
}

impl RenderConfig {
    pub const fn buffered() -> Self {
        Self {
            double_buffer: true,
            background: Color::BLACK,
        }
    }

    pub const fn immediate() -> Self {
        Self {
            double_buffer: false,
            background: Color::BLACK,
        }
    }
}

impl Config {
    pub const fn wrover_kit() -> Self {
        Self {
            panel: PanelConfig::wrover_kit(),
            render: RenderConfig::buffered(),
        }
    }

    pub const fn with_vendor(mut self, vendor: VendorSelect) -> Self {
        self.panel.vendor = vendor;
        self
    }

    pub const fn with_drain_limit(mut self, polls: u32) -> Self {
        self.panel.drain_spin_limit = Some(polls);
        self
    }

    pub const fn with_render(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::wrover_kit()
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::buffered()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::wrover_kit()
    }
}
