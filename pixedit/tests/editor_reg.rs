//! Editing session regression test
//!
//! Drives an Editor through load, adjust, filter, transform, crop,
//! commit, undo/redo and export.

use pixedit::io::{ImageFormat, decode_image, detect_format_from_bytes, export_image};
use pixedit::{
    ColorAdjustments, CropArea, Editor, EditorConfig, EditorError, ExportFormat, FILTERS,
    FilterKind, ImageSource, Interpolation, SessionState, TransformState,
};
use pixedit_test::{RegParams, fixtures};

fn flag(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

#[test]
fn editor_session_reg() {
    pixedit_test::init_logging();
    let mut rp = RegParams::new("editor_session");

    let pixs = fixtures::make_gradient(60, 40);
    let png = export_image(&pixs, ExportFormat::Png, 1.0).expect("encode fixture");

    let mut ed = Editor::default();
    let dims = ed.load(&ImageSource::from(png)).expect("load");
    rp.compare_values(60.0, dims.0 as f64, 0.0);
    rp.compare_values(40.0, dims.1 as f64, 0.0);
    rp.compare_pix(&pixs, ed.current().expect("current"));

    // --- Test 1: adjustments are re-derived from the original ---
    ed.adjust(&ColorAdjustments::identity().with_brightness(40).with_contrast(30))
        .expect("adjust");
    rp.compare_values(1.0, flag(ed.state() == SessionState::Adjusting), 0.0);
    ed.adjust(&ColorAdjustments::identity()).expect("neutral adjust");
    rp.compare_pix(&pixs, ed.current().expect("current"));

    // --- Test 2: filter, commit, undo, redo ---
    ed.apply_filter(FilterKind::Grayscale).expect("grayscale");
    let gray = ed.current().expect("current").clone();
    rp.compare_values(1.0, ed.commit().expect("commit") as f64, 0.0);

    rp.compare_values(1.0, flag(ed.undo().expect("undo")), 0.0);
    rp.compare_pix(&pixs, ed.current().expect("current"));
    rp.compare_values(0.0, flag(ed.undo().expect("undo at start")), 0.0);
    rp.compare_values(1.0, flag(ed.redo().expect("redo")), 0.0);
    rp.compare_pix(&gray, ed.current().expect("current"));
    rp.compare_values(0.0, flag(ed.redo().expect("redo at end")), 0.0);

    // --- Test 3: committing after undo drops the redo branch ---
    ed.undo().expect("undo");
    ed.apply_named_filter("sepia", None).expect("sepia");
    let sepia = ed.current().expect("current").clone();
    rp.compare_values(1.0, ed.commit().expect("commit") as f64, 0.0);
    rp.compare_values(2.0, ed.history().len() as f64, 0.0);
    rp.compare_values(0.0, flag(ed.redo().expect("redo")), 0.0);
    rp.compare_pix(&sepia, ed.current().expect("current"));

    // --- Test 4: crop changes dimensions, transform keeps them ---
    ed.crop(&CropArea::new(10, 5, 30, 20)).expect("crop");
    rp.compare_values(1.0, flag(ed.dimensions().expect("dims") == (30, 20)), 0.0);
    ed.transform(&TransformState::identity().with_flip(true, false))
        .expect("flip");
    rp.compare_values(1.0, flag(ed.dimensions().expect("dims") == (30, 20)), 0.0);
    rp.compare_values(1.0, flag(ed.state() == SessionState::Transformed), 0.0);

    let err = ed.crop(&CropArea::new(20, 0, 20, 20));
    rp.compare_values(1.0, flag(matches!(err, Err(EditorError::Transform(_)))), 0.0);
    rp.compare_values(1.0, flag(ed.dimensions().expect("dims") == (30, 20)), 0.0);

    // --- Test 5: reset returns to the loaded image ---
    ed.reset_to_original().expect("reset");
    rp.compare_pix(&pixs, ed.current().expect("current"));
    rp.compare_values(2.0, ed.history().len() as f64, 0.0);

    // --- Test 6: export in every format ---
    let png_out = ed.export(ExportFormat::Png, 1.0).expect("png");
    rp.compare_values(
        1.0,
        flag(detect_format_from_bytes(&png_out).expect("detect") == ImageFormat::Png),
        0.0,
    );
    rp.compare_pix(&pixs, &decode_image(&png_out).expect("decode png"));

    let jpeg_out = ed.export(ExportFormat::Jpeg, 0.92).expect("jpeg");
    let jpeg_back = decode_image(&jpeg_out).expect("decode jpeg");
    rp.compare_values(1.0, flag(jpeg_back.dimensions() == (60, 40)), 0.0);
    rp.compare_pix_within(&pixs, &jpeg_back, 40);

    let webp_out = ed.export(ExportFormat::Webp, 0.5).expect("webp");
    rp.compare_pix(&pixs, &decode_image(&webp_out).expect("decode webp"));

    let bad_quality = ed.export(ExportFormat::Jpeg, 1.5);
    rp.compare_values(1.0, flag(matches!(bad_quality, Err(EditorError::Io(_)))), 0.0);

    // exports are deterministic
    rp.compare_strings(&png_out, &ed.export(ExportFormat::Png, 1.0).expect("png"));

    assert!(rp.cleanup(), "editor session regression test failed");
}

#[test]
fn editor_sources_reg() {
    pixedit_test::init_logging();
    let mut rp = RegParams::new("editor_sources");

    let pixs = fixtures::make_checkerboard(16, 16, 4, [255, 0, 0, 255], [0, 0, 255, 128]);
    let png = export_image(&pixs, ExportFormat::Png, 1.0).expect("encode");

    let dir = std::env::temp_dir().join("pixedit_editor_sources");
    std::fs::create_dir_all(&dir).expect("tmp dir");
    let path = dir.join("checker.png");
    std::fs::write(&path, &png).expect("write tmp");

    // --- Test 1: path source ---
    let mut ed = Editor::default();
    ed.load(&ImageSource::from(path.clone())).expect("load path");
    rp.compare_pix(&pixs, ed.current().expect("current"));

    // --- Test 2: file:// URL source ---
    let url = format!("file://{}", path.display());
    let mut ed2 = Editor::default();
    ed2.load(&ImageSource::url(url)).expect("load url");
    rp.compare_pix(&pixs, ed2.current().expect("current"));

    // --- Test 3: unsupported scheme is a load error, session unchanged ---
    let err = ed2.load(&ImageSource::url("gopher://example.com/x.png"));
    rp.compare_values(1.0, flag(matches!(err, Err(EditorError::Io(_)))), 0.0);
    rp.compare_pix(&pixs, ed2.current().expect("current"));

    // --- Test 4: loading a new image resets the history ---
    ed.apply_filter(FilterKind::Invert).expect("invert");
    ed.commit().expect("commit");
    rp.compare_values(2.0, ed.history().len() as f64, 0.0);
    ed.load(&ImageSource::from(png)).expect("reload");
    rp.compare_values(1.0, ed.history().len() as f64, 0.0);
    rp.compare_values(0.0, flag(ed.undo().expect("undo")), 0.0);

    assert!(rp.cleanup(), "editor sources regression test failed");
}

#[test]
fn editor_config_reg() {
    pixedit_test::init_logging();
    let mut rp = RegParams::new("editor_config");

    let pixs = fixtures::make_noise(12, 12, 4);
    let png = export_image(&pixs, ExportFormat::Png, 1.0).expect("encode");

    // --- Test 1: capacity bounds the history ---
    let config = EditorConfig::default()
        .with_history_capacity(3)
        .with_interpolation(Interpolation::Nearest);
    let mut ed = Editor::new(config).expect("editor");
    ed.load(&ImageSource::from(png)).expect("load");
    for _ in 0..5 {
        ed.apply_filter(FilterKind::Invert).expect("invert");
        ed.commit().expect("commit");
    }
    rp.compare_values(3.0, ed.history().len() as f64, 0.0);
    let mut undos = 0;
    while ed.undo().expect("undo") {
        undos += 1;
    }
    rp.compare_values(2.0, undos as f64, 0.0);

    // --- Test 2: nearest interpolation quarter turns are exact ---
    ed.reset_to_original().expect("reset");
    for _ in 0..4 {
        ed.transform(&TransformState::identity().with_rotation(90.0))
            .expect("rotate");
    }
    rp.compare_pix(&pixs, ed.current().expect("current"));

    // --- Test 3: the registry lists every filter in order ---
    let names: Vec<&str> = ed.filters().iter().map(|d| d.name).collect();
    rp.compare_strings(
        names.join(",").as_bytes(),
        b"grayscale,sepia,invert,blur,sharpen,edge,emboss",
    );
    for desc in FILTERS.iter() {
        ed.apply_named_filter(desc.name, desc.default_intensity)
            .expect("named filter");
        rp.compare_values(1.0, flag(ed.dimensions().expect("dims") == (12, 12)), 0.0);
    }

    assert!(rp.cleanup(), "editor config regression test failed");
}
