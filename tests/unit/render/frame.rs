use super::*;

#[test]
fn new_checks_byte_length() {
    assert!(RawImage::new(2, 2, vec![0; 12]).is_ok());
    assert!(matches!(
        RawImage::new(2, 2, vec![0; 16]),
        Err(TurntableError::Validation(_))
    ));
    assert!(RawImage::new(0, 2, Vec::new()).is_err());
}

#[test]
fn solid_repeats_the_color() {
    let img = RawImage::solid(3, 2, [1, 2, 3]).unwrap();
    assert_eq!(img.resolution(), (3, 2));
    assert_eq!(img.as_bytes().len(), 18);
    assert!(img.as_bytes().chunks_exact(3).all(|px| px == [1, 2, 3]));
}

#[test]
fn converts_to_and_from_rgb_image() {
    let mut rgb = image::RgbImage::new(4, 3);
    rgb.put_pixel(1, 2, image::Rgb([9, 8, 7]));

    let raw = RawImage::from(rgb.clone());
    assert_eq!(raw.resolution(), (4, 3));
    // Row-major: pixel (1, 2) starts at (2 * 4 + 1) * 3.
    assert_eq!(&raw.data[27..30], &[9, 8, 7]);

    let back = image::RgbImage::try_from(raw).unwrap();
    assert_eq!(back, rgb);
}
