//! Image I/O regression test
//!
//! Export to every format, format detection, decoding and source errors.

use pixedit_io::{
    ExportFormat, ImageFormat, ImageSource, IoError, decode_image, detect_format_from_bytes,
    export_image, load_image,
};
use pixedit_test::{RegParams, fixtures};

#[test]
fn io_reg() {
    pixedit_test::init_logging();
    let mut rp = RegParams::new("io");

    let pixs = fixtures::make_noise(33, 17, 2);
    let opaque = fixtures::make_gradient(48, 32);

    // --- Test 1: lossless formats round-trip exactly, alpha included ---
    for (format, detected) in [
        (ExportFormat::Png, ImageFormat::Png),
        (ExportFormat::Webp, ImageFormat::WebP),
    ] {
        let bytes = export_image(&pixs, format, 0.3).expect("export");
        rp.compare_values(
            1.0,
            if detect_format_from_bytes(&bytes).expect("detect") == detected { 1.0 } else { 0.0 },
            0.0,
        );
        let back = load_image(&ImageSource::from(bytes)).expect("load");
        rp.compare_pix(&pixs, &back);
    }

    // --- Test 2: JPEG is lossy but close, and opaque ---
    let jpeg = export_image(&opaque, ExportFormat::Jpeg, 0.95).expect("jpeg");
    rp.compare_values(
        1.0,
        if detect_format_from_bytes(&jpeg).expect("detect") == ImageFormat::Jpeg { 1.0 } else { 0.0 },
        0.0,
    );
    let back = decode_image(&jpeg).expect("decode jpeg");
    rp.compare_pix_within(&opaque, &back, 40);

    // lower quality gives smaller output
    let small = export_image(&opaque, ExportFormat::Jpeg, 0.1).expect("jpeg low");
    rp.compare_values(1.0, if small.len() < jpeg.len() { 1.0 } else { 0.0 }, 0.0);

    // --- Test 3: export is deterministic ---
    for format in [ExportFormat::Png, ExportFormat::Jpeg, ExportFormat::Webp] {
        let a = export_image(&opaque, format, 0.8).expect("export a");
        let b = export_image(&opaque, format, 0.8).expect("export b");
        rp.compare_strings(&a, &b);
    }

    // --- Test 4: quality outside [0, 1] is rejected ---
    for q in [-0.1, 1.01, f32::NAN] {
        let err = export_image(&opaque, ExportFormat::Jpeg, q);
        rp.compare_values(
            1.0,
            if matches!(err, Err(IoError::InvalidData(_))) { 1.0 } else { 0.0 },
            0.0,
        );
    }

    // --- Test 5: unknown and corrupt data ---
    let unknown = decode_image(b"definitely not an image");
    rp.compare_values(
        1.0,
        if matches!(unknown, Err(IoError::UnsupportedFormat(_))) { 1.0 } else { 0.0 },
        0.0,
    );
    let mut truncated = export_image(&opaque, ExportFormat::Png, 1.0).expect("png");
    truncated.truncate(40);
    rp.compare_values(1.0, if decode_image(&truncated).is_err() { 1.0 } else { 0.0 }, 0.0);

    // --- Test 6: unreachable sources are load errors ---
    let err = load_image(&ImageSource::url("ftp://example.com/a.png"));
    rp.compare_values(
        1.0,
        if matches!(err, Err(IoError::Load(_))) { 1.0 } else { 0.0 },
        0.0,
    );

    // --- Test 7: export format names ---
    for (name, format) in [
        ("png", ExportFormat::Png),
        ("JPG", ExportFormat::Jpeg),
        ("webp", ExportFormat::Webp),
    ] {
        let parsed = ExportFormat::from_name(name).expect("format name");
        rp.compare_values(1.0, if parsed == format { 1.0 } else { 0.0 }, 0.0);
    }

    assert!(rp.cleanup(), "io regression test failed");
}
