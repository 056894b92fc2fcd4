use super::*;

fn font() -> Font<'static> {
    let bytes = std::fs::read("tests/data/fonts/DejaVuSans.ttf").unwrap();
    Font::try_from_vec(bytes).unwrap()
}

fn white(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_pixel(w, h, Rgba([255, 255, 255, 255]))
}

fn dark_pixels(img: &RgbaImage) -> usize {
    img.pixels().filter(|p| p[0] < 128).count()
}

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

#[test]
fn draws_glyphs_above_baseline() {
    let font = font();
    let mut canvas = white(200, 60);
    let origin = Baseline { x: 10, y: 42 };
    let end = draw_line(&mut canvas, &font, 32.0, Hinting::None, origin, BLACK, "Hi");

    assert!(end > 10.0);
    assert!(dark_pixels(&canvas) > 0);
    // Nothing below the baseline for glyphs without descenders.
    for y in 44..60 {
        for x in 0..200 {
            assert_eq!(canvas.get_pixel(x, y)[0], 255, "ink at ({x},{y})");
        }
    }
}

#[test]
fn empty_and_control_only_text_draw_nothing() {
    let font = font();
    let origin = Baseline { x: 10, y: 42 };
    for text in ["", "\n", "\t\r\n"] {
        let mut canvas = white(100, 60);
        let end = draw_line(&mut canvas, &font, 32.0, Hinting::None, origin, BLACK, text);
        assert_eq!(end, 10.0);
        assert_eq!(dark_pixels(&canvas), 0, "{text:?}");
    }
}

#[test]
fn full_hinting_lands_on_whole_pixels() {
    let font = font();
    let origin = Baseline { x: 10, y: 42 };
    let mut canvas = white(400, 60);
    let end = draw_line(
        &mut canvas,
        &font,
        31.3,
        Hinting::Full,
        origin,
        BLACK,
        "wavy text",
    );
    assert_eq!(end, end.round());
    assert!(dark_pixels(&canvas) > 0);
}

#[test]
fn text_past_the_edge_is_clipped() {
    let font = font();
    let mut canvas = white(30, 20);
    let origin = Baseline { x: 10, y: 42 };
    draw_line(
        &mut canvas,
        &font,
        32.0,
        Hinting::None,
        origin,
        BLACK,
        "a very long line that runs far past the right edge",
    );
    assert_eq!(canvas.dimensions(), (30, 20));

    let mut canvas = white(30, 30);
    draw_line(
        &mut canvas,
        &font,
        32.0,
        Hinting::None,
        Baseline { x: -50, y: -5 },
        BLACK,
        "offscreen",
    );
    assert_eq!(dark_pixels(&canvas), 0);
}

#[test]
fn coverage_blends_in_straight_alpha() {
    let font = font();
    let mut canvas = RgbaImage::from_pixel(200, 60, Rgba([255, 255, 255, 0]));
    draw_line(
        &mut canvas,
        &font,
        32.0,
        Hinting::None,
        Baseline { x: 10, y: 42 },
        BLACK,
        "Hello",
    );

    let mut inked = 0;
    let mut partial = 0;
    for p in canvas.pixels().filter(|p| p[3] > 0) {
        assert_eq!([p[0], p[1], p[2]], [0, 0, 0], "{p:?}");
        inked += 1;
        if p[3] < 255 {
            partial += 1;
        }
    }
    assert!(inked > 0);
    assert!(partial > 0, "expected anti-aliased edges");
}
