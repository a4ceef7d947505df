use std::fs;
use std::path::Path;

use image::{
    DynamicImage, GrayImage, ImageFormat, ImageReader, Luma, Rgb, RgbImage, Rgba, RgbaImage,
};
use jpg2raw::{
    ConversionParams, Error, NormalizeParams, NormalizedTensor, PadAnchor, RawDataType,
    ResizeParams, convert_directory, create_raw, read_raw, read_rgb_array, resize_to_square_jpeg,
};

fn write_jpeg(path: &Path, width: u32, height: u32, color: [u8; 3]) {
    RgbImage::from_pixel(width, height, Rgb(color))
        .save_with_format(path, ImageFormat::Jpeg)
        .unwrap();
}

fn open_sniffed(path: &Path) -> DynamicImage {
    ImageReader::open(path)
        .unwrap()
        .with_guessed_format()
        .unwrap()
        .decode()
        .unwrap_or_else(|e| panic!("{}: {e}", path.display()))
}

#[test]
fn wide_jpeg_scenario_produces_expected_raw_size() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("src");
    let dest = dir.path().join("dest");
    fs::create_dir_all(&src).unwrap();
    write_jpeg(&src.join("wide.jpg"), 600, 400, [90, 140, 210]);

    let report = convert_directory(&src, &dest, &ConversionParams::default()).unwrap();
    assert_eq!(report.resized, 1);
    assert_eq!(report.normalized, 1);

    let resized = image::open(dest.join("wide.jpg")).unwrap();
    assert_eq!((resized.width(), resized.height()), (299, 299));
    assert_eq!(resized.color().channel_count(), 3);

    let raw = dest.join("wide.raw");
    assert_eq!(fs::metadata(&raw).unwrap().len(), 1_072_812);
}

#[test]
fn raw_file_reads_back_bit_exact() {
    let dir = tempfile::tempdir().unwrap();
    let jpg = dir.path().join("cat.jpg");
    write_jpeg(&jpg, 40, 30, [10, 200, 77]);

    for params in [
        NormalizeParams::default(),
        NormalizeParams {
            mean: [103.94, 116.78, 123.68],
            divisor: 1.0,
            bgr: true,
            save_uint8: false,
        },
        NormalizeParams {
            save_uint8: true,
            divisor: 1.0,
            mean: [0.0, 0.0, 0.0],
            bgr: false,
        },
    ] {
        let raw_path = create_raw(&jpg, &params).unwrap();
        assert_eq!(raw_path, dir.path().join("cat.raw"));

        let decoded = read_rgb_array(&jpg).unwrap();
        let expected = jpg2raw::core::processing::normalize::normalize_rgb(&decoded, &params)
            .unwrap();
        let loaded = read_raw(&raw_path, (30, 40, 3), params.data_type()).unwrap();
        assert_eq!(loaded, expected);
        assert_eq!(
            fs::metadata(&raw_path).unwrap().len() as usize,
            30 * 40 * 3 * params.data_type().element_size()
        );
    }
}

#[test]
fn uint8_raw_without_mean_is_the_decoded_image() {
    let dir = tempfile::tempdir().unwrap();
    let jpg = dir.path().join("flat.jpg");
    write_jpeg(&jpg, 8, 8, [50, 60, 70]);

    let params = NormalizeParams {
        mean: [0.0, 0.0, 0.0],
        divisor: 1.0,
        bgr: false,
        save_uint8: true,
    };
    let raw_path = create_raw(&jpg, &params).unwrap();
    let decoded = read_rgb_array(&jpg).unwrap();
    assert_eq!(
        fs::read(raw_path).unwrap(),
        decoded.iter().copied().collect::<Vec<u8>>()
    );
}

#[test]
fn grayscale_source_is_promoted_to_rgb() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("gray.jpg");
    let dst = dir.path().join("out.jpg");
    GrayImage::from_pixel(300, 100, Luma([180]))
        .save_with_format(&src, ImageFormat::Jpeg)
        .unwrap();

    let padding = resize_to_square_jpeg(&src, &dst, &ResizeParams::default()).unwrap();
    assert_eq!(padding.bottom, 199);

    let out = image::open(&dst).unwrap();
    assert_eq!(out.color().channel_count(), 3);
    assert_eq!((out.width(), out.height()), (299, 299));
}

#[test]
fn four_channel_source_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("alpha.png.jpg");
    RgbaImage::from_pixel(10, 10, Rgba([1, 2, 3, 4]))
        .save_with_format(&src, ImageFormat::Png)
        .unwrap();

    let err = resize_to_square_jpeg(&src, &dir.path().join("out.jpg"), &ResizeParams::default())
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedChannels { channels: 4, .. }));

    let err = create_raw(&src, &NormalizeParams::default()).unwrap_err();
    assert!(matches!(err, Error::UnsupportedChannels { channels: 4, .. }));
}

#[test]
fn normalizer_rejects_grayscale() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("gray.jpg");
    GrayImage::new(4, 4)
        .save_with_format(&src, ImageFormat::Jpeg)
        .unwrap();
    assert!(matches!(
        create_raw(&src, &NormalizeParams::default()),
        Err(Error::UnsupportedChannels { channels: 1, .. })
    ));
}

#[test]
fn nested_sources_are_flattened_and_loosely_matched() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("src");
    let dest = dir.path().join("dest");
    fs::create_dir_all(src.join("a/b")).unwrap();

    write_jpeg(&src.join("top.jpg"), 20, 10, [0, 0, 0]);
    write_jpeg(&src.join("a/b/deep.jpg"), 10, 20, [255, 255, 255]);
    write_jpeg(&src.join("a/odd.jpg.bak"), 16, 16, [9, 9, 9]);
    fs::write(src.join("a/notes.txt"), b"not an image").unwrap();
    write_jpeg(&src.join("a/upper.JPG"), 16, 16, [9, 9, 9]);

    let params = ConversionParams {
        resize: ResizeParams {
            width: 32,
            height: 24,
            anchor: PadAnchor::BottomRight,
            ..Default::default()
        },
        ..Default::default()
    };
    let report = convert_directory(&src, &dest, &params).unwrap();
    assert_eq!(report.resized, 3);
    assert_eq!(report.normalized, 3);

    for name in ["top.jpg", "deep.jpg", "odd.jpg.bak"] {
        let img = open_sniffed(&dest.join(name));
        assert_eq!((img.width(), img.height()), (32, 24), "{name}");
    }
    assert!(!dest.join("upper.JPG").exists());
    assert!(!dest.join("a").exists());

    for raw in ["top.raw", "deep.raw", "odd.jpg.raw"] {
        let len = fs::metadata(dest.join(raw)).unwrap().len();
        assert_eq!(len, 32 * 24 * 3 * 4, "{raw}");
    }
}

#[test]
fn same_basename_in_different_folders_collides() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("src");
    let dest = dir.path().join("dest");
    fs::create_dir_all(src.join("x")).unwrap();
    fs::create_dir_all(src.join("y")).unwrap();
    write_jpeg(&src.join("x/img.jpg"), 10, 10, [0, 0, 0]);
    write_jpeg(&src.join("y/img.jpg"), 10, 10, [255, 255, 255]);

    let report = convert_directory(&src, &dest, &ConversionParams::default()).unwrap();
    assert_eq!(report.resized, 2);
    assert_eq!(report.normalized, 1);
    assert_eq!(fs::read_dir(&dest).unwrap().count(), 2);
}

#[test]
fn corrupt_source_aborts_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("src");
    let dest = dir.path().join("dest");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("broken.jpg"), b"definitely not a jpeg").unwrap();

    let err = convert_directory(&src, &dest, &ConversionParams::default()).unwrap_err();
    assert!(matches!(err, Error::ImageLoad { .. }), "{err}");
}

#[test]
fn missing_image_error_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("gone.jpg");

    let err = create_raw(&src, &NormalizeParams::default()).unwrap_err();
    let Error::ImageOpen { path, source } = &err else {
        panic!("expected ImageOpen, got {err:?}");
    };
    assert_eq!(path, &src);
    assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
    assert!(err.to_string().contains("gone.jpg"), "{err}");

    let err = resize_to_square_jpeg(&src, &dir.path().join("out.jpg"), &ResizeParams::default())
        .unwrap_err();
    assert!(matches!(err, Error::ImageOpen { .. }), "{err}");
}

#[test]
fn missing_source_directory_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = convert_directory(
        &dir.path().join("nope"),
        &dir.path().join("dest"),
        &ConversionParams::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn raw_with_wrong_shape_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("t.raw");
    fs::write(&path, vec![0u8; 12]).unwrap();

    assert!(read_raw(&path, (1, 1, 3), RawDataType::F32).is_ok());
    assert!(matches!(
        read_raw(&path, (2, 2, 3), RawDataType::F32),
        Err(Error::InvalidArgument { .. })
    ));
    let NormalizedTensor::U8(a) = read_raw(&path, (2, 2, 3), RawDataType::U8).unwrap() else {
        panic!("expected u8 tensor");
    };
    assert_eq!(a.dim(), (2, 2, 3));
}
