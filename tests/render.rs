mod common;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};

use common::Bench;
use tft_display::controller::init_tables::{ILI9341_INIT, ST7789_INIT};
use tft_display::controller::{ControllerState, READ_ID};
use tft_display::error::{BoundsReason, TransportError};
use tft_display::framebuffer::Half;
use tft_display::{Color, Config, Error, FontSize, PanelVariant, RenderConfig, VendorSelect};

#[test]
fn zero_id_brings_up_an_ili9341() {
    let mut bench = Bench::new(Config::wrover_kit());
    assert_eq!(bench.init(), PanelVariant::Ili9341);

    let commands = bench.wire.commands();
    assert_eq!(commands[0], READ_ID);
    assert_eq!(commands[1], ILI9341_INIT[0].command);
    assert_eq!(*commands.last().unwrap(), 0x29);
    assert!(bench.wire.mode_lines_consistent());

    // Reset pulse, then backlight on (active low)
    assert_eq!(bench.reset.levels(), [false, true]);
    assert_eq!(bench.backlight.levels(), [false]);
    // 2 x reset hold, plus sleep-out and display-on pauses
    assert_eq!(bench.delay.total_ms, 400);
    assert_eq!(bench.display.controller().state(), ControllerState::Ready);
}

#[test]
fn nonzero_id_brings_up_an_st7789() {
    let mut bench = Bench::new(Config::wrover_kit());
    bench.wire.set_id_reply([0x85, 0x85, 0x52]);
    assert_eq!(bench.init(), PanelVariant::St7789);
    assert_eq!(bench.display.controller().panel_id(), Some(0x52_85_85));
    assert_eq!(bench.wire.commands()[1], ST7789_INIT[0].command);
}

#[test]
fn forced_vendor_overrides_detection() {
    let config = Config::wrover_kit().with_vendor(VendorSelect::Force(PanelVariant::St7789));
    let mut bench = Bench::new(config);
    assert_eq!(bench.init(), PanelVariant::St7789);
    assert_eq!(bench.display.controller().panel_id(), Some(0));
}

#[test]
fn failed_init_is_latched_and_leaves_the_panel_unusable() {
    let mut bench = Bench::new(Config::wrover_kit());
    bench.wire.fail_next(TransportError::Bus);
    let err = bench.display.display_init(&mut bench.delay).unwrap_err();

    assert_eq!(err, Error::Transport(TransportError::Bus));
    assert_eq!(bench.display.last_error(), Some(err));
    assert_eq!(
        bench.display.clear_screen(Color(0x0000)),
        Err(Error::NotReady)
    );

    // A second attempt goes through
    bench.display.clear_error();
    bench.init();
    assert!(bench.display.clear_screen(Color(0x0000)).is_ok());
}

#[test]
fn clear_screen_blanks_memory_and_panel() {
    let mut bench = Bench::ready();
    bench.display.framebuffer_mut().fill(Color(0x1234));
    bench.display.clear_screen(Color(0x0000)).unwrap();

    for half in [Half::Top, Half::Bottom] {
        assert!(bench.display.framebuffer().half(half).iter().all(|&px| px == 0x0000));
    }
    let regions = bench.wire.regions();
    let pixels: usize = regions.iter().map(|r| r.pixels.len()).sum();
    assert_eq!(pixels, 320 * 240);
    assert!(regions.iter().all(|r| r.pixels.iter().all(|&px| px == 0x0000)));
}

#[test]
fn fill_rect_colors_only_its_area() {
    let mut bench = Bench::ready();
    bench.display.clear_screen(Color(0x0000)).unwrap();
    bench.wire.clear();

    bench.display.fill_rect(10, 10, 50, 20, Color(0xF800)).unwrap();
    assert_eq!(bench.pixel(30, 15), 0xF800);
    assert_eq!(bench.pixel(5, 5), 0x0000);
    assert_eq!(bench.pixel(60, 10), 0x0000);
    assert_eq!(bench.pixel(10, 30), 0x0000);

    let regions = bench.wire.regions();
    assert_eq!(regions.len(), 20);
    assert_eq!((regions[0].x, regions[0].y, regions[0].width), (10, 10, 50));
    assert_eq!(regions[19].y, 29);
}

#[test]
fn rejected_fill_rect_changes_nothing() {
    let mut bench = Bench::ready();
    bench.display.clear_screen(Color(0x0000)).unwrap();
    bench.wire.clear();

    let err = bench.display.fill_rect(310, 230, 20, 20, Color(0xF800)).unwrap_err();
    match err {
        Error::Bounds(bounds) => assert_eq!(bounds.reason, BoundsReason::Overshoot),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(bench.pixel(315, 235), 0x0000);
    assert!(bench.wire.events().is_empty());
    assert_eq!(bench.display.last_error(), Some(err));
    assert_eq!(
        bench.display.latch().message(),
        "bad region (overshoot) x=310 y=230 w=20 h=20"
    );
}

#[test]
fn string_end_is_the_sum_of_glyph_advances() {
    let mut bench = Bench::ready();
    let end = bench
        .display
        .draw_string("AB", FontSize::Size16, 40, 50, Color(0xFFFF));
    assert_eq!(end, 40 + 16);
    assert_eq!(
        bench.display.string_extent("AB", FontSize::Size16),
        (16, 16)
    );
    assert!(bench.display.last_error().is_none());

    // One flushed row per line of the face
    let regions = bench.wire.regions();
    assert_eq!(regions.len(), 16);
    assert!(regions.iter().all(|r| r.x == 40 && r.width == 16));
}

#[test]
fn immediate_text_matches_buffered_text_in_memory() {
    let mut buffered = Bench::ready();
    let mut immediate = Bench::ready();
    immediate.display.set_render(RenderConfig::immediate());

    for bench in [&mut buffered, &mut immediate] {
        bench
            .display
            .draw_string("Rust 2x", FontSize::Size128, 4, 100, Color(0x07E0));
    }
    for half in [Half::Top, Half::Bottom] {
        assert_eq!(
            buffered.display.framebuffer().half(half),
            immediate.display.framebuffer().half(half)
        );
    }
    assert!(immediate.wire.regions().len() > buffered.wire.regions().len());
}

#[test]
fn line_direction_does_not_matter() {
    let mut forward = Bench::ready();
    let mut backward = Bench::ready();
    forward.display.draw_line(10, 10, 60, 25, 2, Color(0x001F)).unwrap();
    backward.display.draw_line(60, 25, 10, 10, 2, Color(0x001F)).unwrap();

    for half in [Half::Top, Half::Bottom] {
        assert_eq!(
            forward.display.framebuffer().half(half),
            backward.display.framebuffer().half(half)
        );
    }
}

#[test]
fn horizontal_line_stops_before_its_end() {
    let mut bench = Bench::ready();
    bench.display.draw_line(5, 5, 15, 5, 1, Color(0xF800)).unwrap();
    assert_eq!(bench.pixel(5, 5), 0xF800);
    assert_eq!(bench.pixel(14, 5), 0xF800);
    assert_eq!(bench.pixel(15, 5), 0x0000);
}

#[test]
fn frame_outlines_a_rectangle() {
    let mut bench = Bench::ready();
    bench.display.draw_frame(100, 100, 40, 30, 1, Color(0xFFE0)).unwrap();
    assert_eq!(bench.pixel(100, 100), 0xFFE0);
    assert_eq!(bench.pixel(139, 100), 0xFFE0);
    assert_eq!(bench.pixel(100, 129), 0xFFE0);
    assert_eq!(bench.pixel(140, 130), 0xFFE0);
    assert_eq!(bench.pixel(120, 115), 0x0000);
}

#[test]
fn embedded_graphics_drawing_is_flushed_on_request() {
    let mut bench = Bench::ready();
    let area = Rectangle::new(Point::new(20, 30), Size::new(8, 2));
    area.into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
        .draw(bench.display.framebuffer_mut())
        .unwrap();
    assert!(bench.wire.events().is_empty());

    bench.display.flush(area).unwrap();
    let regions = bench.wire.regions();
    assert_eq!(regions.len(), 1);
    assert_eq!((regions[0].x, regions[0].y), (20, 30));
    assert_eq!((regions[0].width, regions[0].height), (8, 2));
    assert_eq!(regions[0].pixels, vec![0xF800; 16]);
}

#[test]
fn streamed_rows_end_up_on_screen_and_in_memory() {
    let mut bench = Bench::ready();
    bench
        .display
        .stream_rows(|y, line| {
            for (x, px) in line.iter_mut().enumerate() {
                *px = ((x ^ y) & 0x1F) as u16;
            }
        })
        .unwrap();

    assert_eq!(bench.pixel(3, 5), 6);
    assert_eq!(bench.pixel(319, 239), ((319 ^ 239) & 0x1F) as u16);
    let regions = bench.wire.regions();
    assert_eq!(regions.len(), 240);
    assert_eq!(regions[5].pixels[3], 6);
    assert!(bench.wire.mode_lines_consistent());
}
