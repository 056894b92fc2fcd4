use super::*;
use crate::foundation::error::TextcardError;
use crate::foundation::params::Hinting;

fn font() -> Font<'static> {
    let bytes = std::fs::read("tests/data/fonts/DejaVuSans.ttf").unwrap();
    Font::try_from_vec(bytes).unwrap()
}

fn gradient(w: u32, h: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(image::RgbImage::from_fn(w, h, |x, y| {
        image::Rgb([(x % 251) as u8 | 0x80, (y % 251) as u8 | 0x80, 0xc0])
    }))
}

fn assert_guides(canvas: &RgbaImage) {
    for i in 0..GUIDE_LEN {
        assert_eq!(*canvas.get_pixel(10, 10 + i), GUIDE_RGBA, "vertical at {i}");
        assert_eq!(*canvas.get_pixel(10 + i, 10), GUIDE_RGBA, "horizontal at {i}");
    }
}

#[test]
fn canvas_matches_background_size() {
    let font = font();
    let bg = gradient(320, 240);
    for text in ["", " ", "\t  ", "Hello", "a much longer line of text than fits"] {
        let canvas = render(&font, &bg, text, &RenderParams::default()).unwrap();
        assert_eq!(canvas.dimensions(), (320, 240), "{text:?}");
        assert_guides(&canvas);
    }
}

#[test]
fn empty_text_is_background_plus_guides() {
    let font = font();
    let bg = gradient(300, 260);
    let canvas = render(&font, &bg, "", &RenderParams::default()).unwrap();

    let mut expected = bg.to_rgba8();
    draw_guides(&mut expected);
    assert_eq!(canvas, expected);
}

#[test]
fn guides_are_clipped_on_small_canvases() {
    let font = font();
    let bg = gradient(50, 15);
    let canvas = render(&font, &bg, "clip", &RenderParams::default()).unwrap();
    assert_eq!(canvas.dimensions(), (50, 15));
    for x in 10..50 {
        assert_eq!(*canvas.get_pixel(x, 10), GUIDE_RGBA);
    }
    for y in 10..15 {
        assert_eq!(*canvas.get_pixel(10, y), GUIDE_RGBA);
    }

    let tiny = gradient(5, 5);
    let canvas = render(&font, &tiny, "x", &RenderParams::default()).unwrap();
    assert_eq!(canvas, tiny.to_rgba8());
}

#[test]
fn hello_leaves_ink_near_the_first_baseline() {
    let font = font();
    let bg = DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
        800,
        600,
        image::Rgb([255, 255, 255]),
    ));
    let params = RenderParams::default();
    let canvas = render(&font, &bg, "Hello", &params).unwrap();
    assert_eq!(canvas.dimensions(), (800, 600));
    assert_guides(&canvas);

    let baseline = 10 + params.baseline_offset() as u32;
    let mut ink = 0;
    for y in 11..=baseline {
        for x in 11..200 {
            let p = canvas.get_pixel(x, y);
            if p[0] < 64 && p[1] < 64 && p[2] < 64 {
                ink += 1;
            }
        }
    }
    assert!(ink > 50, "expected glyph ink above baseline {baseline}, got {ink}");

    // Single line only: nothing far below the first baseline.
    for y in (baseline + 12)..600 {
        for x in 0..800 {
            assert_eq!(canvas.get_pixel(x, y).0, [255, 255, 255, 255]);
        }
    }
}

#[test]
fn renders_are_deterministic() {
    let font = font();
    let bg = gradient(400, 120);
    for hinting in [Hinting::None, Hinting::Full] {
        let params = RenderParams {
            hinting,
            ..RenderParams::default()
        };
        let a = render(&font, &bg, "Same text twice", &params).unwrap();
        let b = render(&font, &bg, "Same text twice", &params).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }
}

#[test]
fn embedded_newlines_stay_on_one_line() {
    let font = font();
    let bg = gradient(400, 200);
    let params = RenderParams::default();
    let joined = render(&font, &bg, "ab", &params).unwrap();
    let split = render(&font, &bg, "a\nb", &params).unwrap();
    assert_eq!(joined, split);
}

#[test]
fn invalid_params_produce_no_canvas() {
    let font = font();
    let bg = gradient(10, 10);
    let params = RenderParams {
        size: 0.0,
        ..RenderParams::default()
    };
    let err = render(&font, &bg, "x", &params).unwrap_err();
    assert!(matches!(err, TextcardError::Render(_)), "{err}");
}

#[test]
fn background_is_not_modified() {
    let font = font();
    let bg = gradient(240, 100);
    let before = bg.to_rgba8();
    let _ = render(&font, &bg, "touch", &RenderParams::default()).unwrap();
    assert_eq!(bg.to_rgba8(), before);
}

#[test]
fn guides_survive_glyphs_that_reach_the_guide_cells() {
    let font = font();
    let bg = DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
        800,
        600,
        image::Rgb([255, 255, 255]),
    ));
    for text in ["y", "j", "J", "/", "_", "ƒ", "Å", "jJy/_"] {
        for hinting in [Hinting::None, Hinting::Full] {
            let params = RenderParams {
                hinting,
                ..RenderParams::default()
            };
            let canvas = render(&font, &bg, text, &params).unwrap();
            assert_guides(&canvas);
        }
    }
}

#[test]
fn huge_line_spacing_does_not_overflow_the_cursor() {
    let font = font();
    let bg = gradient(20, 20);
    for spacing in [1.0e9, f64::MAX / 1.0e6] {
        let params = RenderParams {
            spacing,
            ..RenderParams::default()
        };
        let canvas = render(&font, &bg, "", &params).unwrap();
        assert_eq!(canvas.dimensions(), (20, 20));
    }

    let params = RenderParams {
        size: 1.0e7,
        ..RenderParams::default()
    };
    let err = render(&font, &bg, "", &params).unwrap_err();
    assert!(matches!(err, TextcardError::Render(_)), "{err}");
}
