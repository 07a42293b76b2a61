use instanced_cubes::resources::ppm::{PpmImage, load_ppm};

const ONE_PIXEL: &str = "P3\n1 1\n255\n10 20 30\n";

#[test]
fn reads_single_pixel() {
    let ppm = PpmImage::parse(ONE_PIXEL, false).unwrap();
    assert_eq!(ppm.magic, "P3");
    assert_eq!((ppm.width, ppm.height), (1, 1));
    assert_eq!(ppm.data, vec![10, 20, 30]);
    assert!(!ppm.flipped);
}

#[test]
fn flipping_reverses_the_whole_buffer() {
    let ppm = PpmImage::parse(ONE_PIXEL, true).unwrap();
    assert_eq!(ppm.data, vec![30, 20, 10]);
    assert!(ppm.flipped);

    let ppm = PpmImage::parse("P3\n2 1\n255\n1 2 3 4 5 6\n", true).unwrap();
    assert_eq!(ppm.data, vec![6, 5, 4, 3, 2, 1]);
}

#[test]
fn skips_comments_and_blank_lines() {
    let text = "# made by hand\nP3\n\n# size\n2 2\n255\n# pixels\n255 0 0  0 255 0\n\n0 0 255  255 255 255\n";
    let ppm = PpmImage::parse(text, false).unwrap();
    assert_eq!((ppm.width, ppm.height), (2, 2));
    assert_eq!(ppm.data, vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255]);
}

#[test]
fn samples_may_be_spread_over_any_number_of_lines() {
    let text = "P3\n2 1\n255\n1\n2\n3 4\n5 6\n";
    let ppm = PpmImage::parse(text, false).unwrap();
    assert_eq!(ppm.data, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn tolerates_windows_line_endings() {
    let ppm = PpmImage::parse("P3\r\n1 1\r\n255\r\n7 8 9\r\n", false).unwrap();
    assert_eq!(ppm.data, vec![7, 8, 9]);
}

#[test]
fn rejects_non_positive_dimensions() {
    assert!(PpmImage::parse("P3\n0 1\n255\n", false).is_err());
    assert!(PpmImage::parse("P3\n4 -2\n255\n", false).is_err());
}

#[test]
fn rejects_malformed_headers() {
    assert!(PpmImage::parse("", false).is_err());
    assert!(PpmImage::parse("P3\n", false).is_err());
    assert!(PpmImage::parse("hello\n1 1\n255\n1 2 3\n", false).is_err());
    assert!(PpmImage::parse("P3\nwide tall\n255\n1 2 3\n", false).is_err());
}

#[test]
fn rejects_oversized_dimensions() {
    let result = PpmImage::parse("P3\n4294967295 4294967295\n255\n1 2 3\n", false);
    assert!(result.is_err());

    let mut bytes = b"P6\n4294967295 4294967295\n255\n".to_vec();
    bytes.extend_from_slice(&[1, 2, 3]);
    assert!(PpmImage::from_bytes(&bytes, false).is_err());
}

#[test]
fn large_header_with_few_samples_is_an_error() {
    assert!(PpmImage::parse("P3\n65535 65535\n255\n1 2 3\n", false).is_err());
}

#[test]
fn rejects_wrong_sample_count() {
    let short = PpmImage::parse("P3\n2 1\n255\n1 2 3\n", false);
    let long = PpmImage::parse("P3\n1 1\n255\n1 2 3 4\n", false);
    assert!(short.is_err());
    assert!(long.is_err());
}

#[test]
fn rejects_samples_above_a_byte() {
    assert!(PpmImage::parse("P3\n1 1\n255\n1 2 300\n", false).is_err());
}

#[test]
fn reads_binary_variant() {
    let mut bytes = b"P6\n# binary\n2 1\n255\n".to_vec();
    bytes.extend_from_slice(&[1, 2, 3, 4, 5, 6]);
    let ppm = PpmImage::from_bytes(&bytes, false).unwrap();
    assert_eq!(ppm.magic, "P6");
    assert_eq!((ppm.width, ppm.height), (2, 1));
    assert_eq!(ppm.data, vec![1, 2, 3, 4, 5, 6]);

    let flipped = PpmImage::from_bytes(&bytes, true).unwrap();
    assert_eq!(flipped.data, vec![6, 5, 4, 3, 2, 1]);
}

#[test]
fn from_bytes_reads_ascii() {
    let ppm = PpmImage::from_bytes(ONE_PIXEL.as_bytes(), false).unwrap();
    assert_eq!(ppm.data, vec![10, 20, 30]);
}

#[test]
fn rgba_expansion_restores_channel_order() {
    let plain = PpmImage::parse("P3\n2 1\n255\n1 2 3 4 5 6\n", false).unwrap();
    assert_eq!(plain.to_rgba8().unwrap().into_raw(), vec![1, 2, 3, 255, 4, 5, 6, 255]);

    // Flipped images run back to front, but every pixel keeps its RGB order.
    let flipped = PpmImage::parse("P3\n2 1\n255\n1 2 3 4 5 6\n", true).unwrap();
    assert_eq!(flipped.to_rgba8().unwrap().into_raw(), vec![4, 5, 6, 255, 1, 2, 3, 255]);
}

#[test]
fn missing_file_names_the_path() {
    let err = load_ppm("definitely/not/here.ppm", false).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Unable to open ppm file"));
    assert!(message.contains("here.ppm"));
}

#[test]
fn loads_demo_texture() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/textured/clouds.ppm");
    let ppm = load_ppm(path, true).unwrap();
    assert_eq!((ppm.width, ppm.height), (32, 32));
    assert_eq!(ppm.data.len(), 32 * 32 * 3);
}
