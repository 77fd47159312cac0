use super::*;

#[test]
fn filled_frame_has_expected_size() {
    let f = FrameRGBA::filled(Canvas::new(3, 2), Rgba8Premul::from_straight_rgba(1, 2, 3, 255));
    assert_eq!(f.data.len(), 24);
    assert_eq!(f.pixel(2, 1), [1, 2, 3, 255]);
}

#[test]
fn from_premul_checks_length() {
    assert!(FrameRGBA::from_premul(Canvas::new(2, 2), vec![0; 16]).is_ok());
    let err = FrameRGBA::from_premul(Canvas::new(2, 2), vec![0; 15]).unwrap_err();
    assert!(err.to_string().contains("render error:"));
}

#[test]
fn image_roundtrip_keeps_opaque_pixels() {
    let mut img = image::RgbaImage::new(2, 1);
    img.put_pixel(0, 0, image::Rgba([10, 20, 30, 255]));
    img.put_pixel(1, 0, image::Rgba([200, 100, 50, 255]));

    let f = FrameRGBA::from_image(&img);
    assert_eq!(f.pixel(1, 0), [200, 100, 50, 255]);
    assert_eq!(f.to_image().unwrap(), img);
}

#[test]
fn translucent_pixels_are_premultiplied_on_import() {
    let mut img = image::RgbaImage::new(1, 1);
    img.put_pixel(0, 0, image::Rgba([255, 255, 255, 128]));
    let f = FrameRGBA::from_image(&img);
    assert_eq!(f.pixel(0, 0), [128, 128, 128, 128]);
    assert_eq!(f.to_image().unwrap().get_pixel(0, 0).0, [255, 255, 255, 128]);
}

#[test]
fn test_pattern_is_opaque_and_varied() {
    let f = FrameRGBA::test_pattern(Canvas::new(64, 64));
    assert!(f.data.chunks_exact(4).all(|px| px[3] == 255));
    assert_ne!(f.pixel(0, 0), f.pixel(16, 0));
    assert_eq!(f.rows(1, 3).len(), 64 * 2 * 4);
}

#[test]
fn rows_are_clipped_to_the_frame() {
    let f = FrameRGBA::new(Canvas::new(4, 3));
    assert_eq!(f.rows(2, 10).len(), 4 * 4);
    assert!(f.rows(5, 9).is_empty());
}

#[test]
fn pixel_bounds_cover_partial_pixels_and_clip() {
    let canvas = Canvas::new(10, 10);
    let b = PixelBounds::of(Rect::new(-3.0, 2.4, 20.0, 5.5), canvas).unwrap();
    assert_eq!(b, PixelBounds { x0: 0, y0: 2, x1: 10, y1: 6 });
    assert_eq!((b.width(), b.height()), (10, 4));
    assert!(b.fits(canvas));
    assert!(PixelBounds::of(Rect::new(0.0, 4.0, 10.0, 4.0), canvas).is_none());
    assert!(PixelBounds::of(Rect::new(0.0, 12.0, 10.0, 20.0), canvas).is_none());
}
