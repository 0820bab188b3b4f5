//! The display context: screen memory, the panel and the error latch in one
//! value, with the drawing API on top.
use embedded_graphics::primitives::Rectangle;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::block::Region;
use crate::color::Color;
use crate::config::{Config, RenderConfig};
use crate::controller::{DisplayController, NoPin, PanelVariant};
use crate::error::{ConfigError, Error};
use crate::framebuffer::framebuffer::alloc_pixels;
use crate::framebuffer::Framebuffer;
use crate::glyph::{self, FontSize};
use crate::raster::Canvas;
use crate::status::ErrorLatch;
use crate::transport::Transport;

pub struct Display<T: Transport, RST, BL = NoPin> {
    framebuffer: Framebuffer,
    controller: DisplayController<T, RST, BL>,
    render: RenderConfig,
    latch: ErrorLatch,
}

impl<T, RST, BL> Display<T, RST, BL>
where
    T: Transport,
    RST: OutputPin,
    BL: OutputPin,
{
    /// Pair existing screen memory with a controller of the same size.
    pub fn new(
        framebuffer: Framebuffer,
        controller: DisplayController<T, RST, BL>,
        render: RenderConfig,
    ) -> Result<Self, Error> {
        if framebuffer.dimensions() != controller.dimensions() {
            return Err(ConfigError::DimensionMismatch.into());
        }
        Ok(Self {
            framebuffer,
            controller,
            render,
            latch: ErrorLatch::new(),
        })
    }

    /// Reserve screen memory and wrap the panel pins. Nothing is sent until
    /// [`Display::display_init`].
    ///
    /// Call this early: the two framebuffer halves are the largest blocks the
    /// firmware ever asks for.
    pub fn setup(transport: T, reset: RST, backlight: BL, config: Config) -> Result<Self, Error> {
        let framebuffer = Framebuffer::alloc(config.panel.dimensions)?;
        let controller = DisplayController::new(transport, reset, backlight, config.panel);
        Self::new(framebuffer, controller, config.render)
    }

    /// Reset, identify and program the panel, then switch the backlight on.
    pub fn display_init<D: DelayNs>(&mut self, delay: &mut D) -> Result<PanelVariant, Error> {
        let result = self.controller.init(delay);
        if let Err(err) = result {
            self.latch.raise(err);
        }
        result
    }

    /// Borrow everything a draw needs at once.
    pub fn canvas(&mut self) -> Result<Canvas<'_, T>, Error> {
        let writer = self.controller.block_writer()?;
        Ok(Canvas::new(
            &mut self.framebuffer,
            writer,
            self.render,
            &mut self.latch,
        ))
    }

    fn ready_canvas(&mut self) -> Result<Canvas<'_, T>, Error> {
        if !self.controller.is_ready() {
            log::warn!("draw before panel init ({})", self.controller.state());
            self.latch.raise(Error::NotReady);
            return Err(Error::NotReady);
        }
        self.canvas()
    }

    pub fn clear_screen(&mut self, color: Color) -> Result<(), Error> {
        self.ready_canvas()?.clear_screen(color)
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) -> Result<(), Error> {
        self.ready_canvas()?.fill_rect(x, y, w, h, color)
    }

    pub fn draw_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        thick: i32,
        color: Color,
    ) -> Result<(), Error> {
        self.ready_canvas()?.draw_line(x0, y0, x1, y1, thick, color)
    }

    pub fn draw_frame(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        thick: i32,
        color: Color,
    ) -> Result<(), Error> {
        self.ready_canvas()?.draw_frame(x, y, w, h, thick, color)
    }

    /// See [`Canvas::draw_glyph`]. Returns 0 before the panel is up.
    pub fn draw_glyph(&mut self, code: u8, size: FontSize, x: i32, y: i32, color: Color) -> i32 {
        match self.ready_canvas() {
            Ok(mut canvas) => canvas.draw_glyph(code, size, x, y, color),
            Err(_) => 0,
        }
    }

    /// See [`Canvas::draw_string`]. Returns `x` unchanged before the panel
    /// is up.
    pub fn draw_string(&mut self, text: &str, size: FontSize, x: i32, y: i32, color: Color) -> i32 {
        match self.ready_canvas() {
            Ok(mut canvas) => canvas.draw_string(text, size, x, y, color),
            Err(_) => x,
        }
    }

    pub fn string_extent(&self, text: &str, size: FontSize) -> (i32, i32) {
        glyph::string_extent(text, size)
    }

    /// Push a rectangle of screen memory to the panel, typically after
    /// drawing into [`Display::framebuffer_mut`] with `embedded-graphics`.
    pub fn flush(&mut self, area: Rectangle) -> Result<(), Error> {
        let w = i32::try_from(area.size.width).unwrap_or(i32::MAX);
        let h = i32::try_from(area.size.height).unwrap_or(i32::MAX);
        self.ready_canvas()?
            .flush(area.top_left.x, area.top_left.y, w, h)
    }

    /// Fill the whole screen row by row from `render_row`.
    ///
    /// Two line buffers alternate: while one row is on the wire the next is
    /// computed into the other. A row is copied into screen memory once its
    /// transfer has drained.
    pub fn stream_rows<F>(&mut self, mut render_row: F) -> Result<(), Error>
    where
        F: FnMut(usize, &mut [u16]),
    {
        let result = self.stream(&mut render_row);
        if let Err(err) = result {
            log::error!("row stream stopped: {}", err);
            self.latch.raise(err);
        }
        result
    }

    fn stream<F>(&mut self, render_row: &mut F) -> Result<(), Error>
    where
        F: FnMut(usize, &mut [u16]),
    {
        let dims = self.framebuffer.dimensions();
        let mut writer = self.controller.block_writer()?;
        let mut front = alloc_pixels(dims.width)?;
        let mut back = alloc_pixels(dims.width)?;

        render_row(0, &mut front[..]);
        for y in 0..dims.height {
            let region = Region::from_slice(0, y as i32, dims.width as i32, 1, &front);
            let batch = writer.write_region(region)?;
            if y + 1 < dims.height {
                render_row(y + 1, &mut back[..]);
            }
            batch.drain_and_check()?;

            if let Some(row) = self.framebuffer.row_mut(y) {
                row.copy_from_slice(&front);
            }
            core::mem::swap(&mut front, &mut back);
        }
        Ok(())
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Screen memory without mirroring; push changes with [`Display::flush`].
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer {
        &mut self.framebuffer
    }

    pub fn controller(&self) -> &DisplayController<T, RST, BL> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut DisplayController<T, RST, BL> {
        &mut self.controller
    }

    pub fn set_backlight(&mut self, on: bool) -> Result<(), Error> {
        self.controller.set_backlight(on)
    }

    pub fn render(&self) -> RenderConfig {
        self.render
    }

    pub fn set_render(&mut self, render: RenderConfig) {
        self.render = render;
    }

    pub fn set_double_buffer(&mut self, enabled: bool) {
        self.render.double_buffer = enabled;
    }

    pub fn set_background(&mut self, color: Color) {
        self.render.background = color;
    }

    pub fn latch(&self) -> &ErrorLatch {
        &self.latch
    }

    /// First failure since the last [`Display::clear_error`]
    pub fn last_error(&self) -> Option<Error> {
        self.latch.first()
    }

    pub fn clear_error(&mut self) {
        self.latch.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PanelConfig;
    use crate::controller::ControllerState;
    use crate::error::TransportError;
    use crate::framebuffer::Dimensions;
    use crate::testing::{MockDelay, MockPin};
    use crate::transport::CaptureTransport;
    use embedded_graphics::prelude::{Point, Size};

    type TestDisplay = Display<CaptureTransport, MockPin, MockPin>;

    fn ready_display() -> (TestDisplay, CaptureTransport) {
        let capture = CaptureTransport::new();
        let mut display = Display::setup(
            capture.clone(),
            MockPin::default(),
            MockPin::default(),
            Config::wrover_kit(),
        )
        .unwrap();
        display.display_init(&mut MockDelay::default()).unwrap();
        capture.clear();
        (display, capture)
    }

    #[test]
    fn mismatched_sizes_are_refused() {
        let fb = Framebuffer::alloc(Dimensions::new(160, 128).unwrap()).unwrap();
        let controller = DisplayController::new(
            CaptureTransport::new(),
            MockPin::default(),
            MockPin::default(),
            PanelConfig::wrover_kit(),
        );
        let err = Display::new(fb, controller, RenderConfig::default()).err();
        assert_eq!(err, Some(Error::Config(ConfigError::DimensionMismatch)));
    }

    #[test]
    fn drawing_before_init_is_refused_and_latched() {
        let capture = CaptureTransport::new();
        let mut display: TestDisplay = Display::setup(
            capture.clone(),
            MockPin::default(),
            MockPin::default(),
            Config::wrover_kit(),
        )
        .unwrap();

        assert_eq!(display.fill_rect(0, 0, 4, 4, Color(0xF800)), Err(Error::NotReady));
        assert_eq!(display.draw_string("x", FontSize::Size16, 7, 0, Color(0xFFFF)), 7);
        assert_eq!(display.last_error(), Some(Error::NotReady));
        assert_eq!(display.controller().state(), ControllerState::Uninitialized);
        assert!(capture.events().is_empty());
    }

    #[test]
    fn flush_pushes_a_rectangle() {
        let (mut display, capture) = ready_display();
        display.framebuffer_mut().fill_span(2, 3, 4, Color(0x07E0));
        display
            .flush(Rectangle::new(Point::new(2, 3), Size::new(4, 1)))
            .unwrap();

        let regions = capture.regions();
        assert_eq!(regions.len(), 1);
        assert_eq!((regions[0].x, regions[0].y), (2, 3));
        assert_eq!(regions[0].pixels, [0x07E0; 4]);
    }

    #[test]
    fn flush_outside_the_screen_is_a_bounds_error() {
        let (mut display, capture) = ready_display();
        let err = display
            .flush(Rectangle::new(Point::new(300, 0), Size::new(40, 1)))
            .unwrap_err();
        assert!(err.is_bounds());
        assert!(capture.events().is_empty());
    }

    #[test]
    fn stream_rows_sends_every_row_and_fills_memory() {
        let (mut display, capture) = ready_display();
        let mut calls = Vec::new();
        display
            .stream_rows(|y, line| {
                calls.push(y);
                line.fill(y as u16);
            })
            .unwrap();

        assert_eq!(calls, (0..240).collect::<Vec<_>>());
        let regions = capture.regions();
        assert_eq!(regions.len(), 240);
        assert!(regions.iter().all(|r| r.width == 320 && r.height == 1));
        assert_eq!(regions[17].y, 17);
        assert!(regions[17].pixels.iter().all(|&px| px == 17));
        assert_eq!(display.framebuffer().pixel(5, 200), Some(Color(200)));
    }

    #[test]
    fn stream_rows_stops_on_a_bus_error() {
        let (mut display, capture) = ready_display();
        capture.fail_next(TransportError::Bus);
        let err = display.stream_rows(|_, line| line.fill(0xFFFF)).unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
        assert_eq!(display.last_error(), Some(err));
        // The failed row never reached screen memory
        assert_eq!(display.framebuffer().pixel(0, 0), Some(Color(0)));
    }

    #[test]
    fn render_settings_follow_the_setters() {
        let (mut display, _) = ready_display();
        display.set_double_buffer(false);
        display.set_background(Color(0x001F));
        assert_eq!(
            display.render(),
            RenderConfig {
                double_buffer: false,
                background: Color(0x001F)
            }
        );
    }
}
