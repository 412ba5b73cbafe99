mod common;

use std::path::Path;

use image::ImageFormat;
use mosaic_core::compose::compose_images;
use mosaic_core::error::MosaicError;
use mosaic_core::io::image_io::{
    image_dimensions, load_source, load_sources, output_format, save_composed,
    save_composed_reported,
};
use mosaic_core::progress::NoOpReporter;

use common::{solid, source, write_png, RecordingReporter};

#[test]
fn test_load_source_keeps_path_and_size() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(dir.path(), "a.png", 9, 4, [1, 2, 3]);

    let src = load_source(&path).unwrap();
    assert_eq!(src.path, path);
    assert_eq!(src.dimensions(), (9, 4));
}

#[test]
fn test_load_sources_preserves_order() {
    let dir = tempfile::tempdir().unwrap();
    let paths = vec![
        write_png(dir.path(), "z.png", 1, 1, [0, 0, 0]),
        write_png(dir.path(), "a.png", 2, 2, [0, 0, 0]),
        write_png(dir.path(), "m.png", 3, 3, [0, 0, 0]),
    ];

    let sources = load_sources(&paths, &NoOpReporter).unwrap();
    let widths: Vec<u32> = sources.iter().map(|s| s.width()).collect();
    assert_eq!(widths, vec![1, 2, 3]);
}

#[test]
fn test_image_dimensions_reads_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(dir.path(), "a.png", 17, 5, [9, 9, 9]);
    assert_eq!(image_dimensions(&path).unwrap(), (17, 5));
}

#[test]
fn test_image_dimensions_missing_file() {
    let err = image_dimensions(Path::new("/nonexistent/nope.png")).unwrap_err();
    assert!(matches!(err, MosaicError::Decode { .. }), "got: {err}");
}

#[test]
fn test_output_format_from_extension() {
    assert_eq!(output_format(Path::new("out.png")), ImageFormat::Png);
    assert_eq!(output_format(Path::new("out.jpg")), ImageFormat::Jpeg);
    assert_eq!(output_format(Path::new("out.JPEG")), ImageFormat::Jpeg);
    assert_eq!(output_format(Path::new("out.tif")), ImageFormat::Tiff);
    assert_eq!(output_format(Path::new("out.bmp")), ImageFormat::Bmp);
    assert_eq!(output_format(Path::new("out")), ImageFormat::Png);
    assert_eq!(output_format(Path::new("out.xyz")), ImageFormat::Png);
}

#[test]
fn test_save_png_is_lossless() {
    let out = compose_images(&[source("a", 6, 6, [10, 200, 30])], 1, 2).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");
    save_composed(&out.raster, &path).unwrap();

    let reloaded = image::open(&path).unwrap().to_rgb8();
    assert_eq!(reloaded, out.raster);
}

#[test]
fn test_save_jpeg_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved_image.jpg");
    save_composed(&solid(8, 8, [128, 128, 128]), &path).unwrap();

    assert_eq!(image::ImageFormat::from_path(&path).unwrap(), ImageFormat::Jpeg);
    assert_eq!(image::image_dimensions(&path).unwrap(), (8, 8));
}

#[test]
fn test_save_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("out.png");

    let err = save_composed(&solid(2, 2, [0, 0, 0]), &path).unwrap_err();
    match err {
        MosaicError::Save { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected Save, got: {other}"),
    }
}

#[test]
fn test_save_reports_writing_stage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");
    let reporter = RecordingReporter::default();

    save_composed_reported(&solid(3, 3, [1, 2, 3]), &path, &reporter).unwrap();

    assert!(path.exists());
    assert_eq!(
        reporter.take(),
        vec!["begin Writing Some(1)", "advance 1", "finish"]
    );
}

#[test]
fn test_failed_save_never_finishes_writing_stage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.png");
    let reporter = RecordingReporter::default();

    let err = save_composed_reported(&solid(3, 3, [1, 2, 3]), &path, &reporter).unwrap_err();

    assert!(matches!(err, MosaicError::Save { .. }), "got: {err}");
    assert_eq!(reporter.take(), vec!["begin Writing Some(1)"]);
}
