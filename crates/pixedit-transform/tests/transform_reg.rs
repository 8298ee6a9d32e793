//! Geometric transform regression test
//!
//! Crop bounds, identity, flips and quarter-turn rotations.

use pixedit_transform::{
    AffineMatrix, CropArea, Interpolation, TransformError, TransformState, affine, crop,
    transform, transform_with,
};
use pixedit_test::{RegParams, fixtures};

#[test]
fn crop_reg() {
    pixedit_test::init_logging();
    let mut rp = RegParams::new("crop");

    let pixs = fixtures::make_gradient(100, 80);

    // --- Test 1: output dimensions match the crop area ---
    for &(x, y, w, h) in &[(0, 0, 100, 80), (10, 20, 30, 40), (99, 79, 1, 1), (0, 40, 100, 40)] {
        let out = crop(&pixs, &CropArea::new(x, y, w, h)).expect("crop");
        rp.compare_values(w as f64, out.width() as f64, 0.0);
        rp.compare_values(h as f64, out.height() as f64, 0.0);
        rp.compare_values(
            1.0,
            if out.get_pixel(0, 0) == pixs.get_pixel(x, y) { 1.0 } else { 0.0 },
            0.0,
        );
    }

    // --- Test 2: out-of-bounds areas are rejected and the input survives ---
    let before = pixs.deep_clone();
    for area in [
        CropArea::new(0, 0, 101, 80),
        CropArea::new(50, 0, 51, 10),
        CropArea::new(0, 80, 10, 1),
        CropArea::new(0, 0, 0, 0),
    ] {
        let err = crop(&pixs, &area);
        rp.compare_values(
            1.0,
            if matches!(err, Err(TransformError::InvalidCrop { .. })) { 1.0 } else { 0.0 },
            0.0,
        );
    }
    rp.compare_pix(&before, &pixs);

    rp.write_pix_and_check(&crop(&pixs, &CropArea::new(10, 20, 30, 40)).unwrap())
        .expect("write crop");

    assert!(rp.cleanup(), "crop regression test failed");
}

#[test]
fn transform_reg() {
    pixedit_test::init_logging();
    let mut rp = RegParams::new("transform");

    let pixs = fixtures::make_noise(32, 32, 21);

    // --- Test 1: identity state reproduces the input ---
    for interp in [Interpolation::Bilinear, Interpolation::Nearest] {
        let out = transform_with(&pixs, &TransformState::default(), interp).unwrap();
        rp.compare_pix(&pixs, &out);
    }
    let out = affine(&pixs, &AffineMatrix::identity()).unwrap();
    rp.compare_pix(&pixs, &out);

    // --- Test 2: flipping twice is the identity ---
    for (fx, fy) in [(true, false), (false, true), (true, true)] {
        let state = TransformState::identity().with_flip(fx, fy);
        let once = transform(&pixs, &state).unwrap();
        let twice = transform(&once, &state).unwrap();
        rp.compare_pix(&pixs, &twice);
    }

    // --- Test 3: four quarter turns of a square image are the identity ---
    let quarter = TransformState::identity().with_rotation(90.0);
    let mut turned = pixs.clone();
    for _ in 0..4 {
        turned = transform_with(&turned, &quarter, Interpolation::Nearest).unwrap();
    }
    rp.compare_pix(&pixs, &turned);

    // --- Test 4: a half turn equals flipping both axes ---
    let half = transform(&pixs, &TransformState::identity().with_rotation(180.0)).unwrap();
    let flipped = transform(&pixs, &TransformState::identity().with_flip(true, true)).unwrap();
    rp.compare_pix(&half, &flipped);

    // --- Test 5: canvas size is kept for any state ---
    let state = TransformState::identity()
        .with_rotation(33.0)
        .with_scale(0.6)
        .with_offset(4.0, -3.0);
    let out = transform(&pixs, &state).unwrap();
    rp.compare_values(32.0, out.width() as f64, 0.0);
    rp.compare_values(32.0, out.height() as f64, 0.0);
    // zooming out uncovers transparent corners
    rp.compare_values(0.0, out.get_pixel(0, 0).unwrap()[3] as f64, 0.0);
    rp.write_pix_and_check(&out).expect("write transform");

    // --- Test 6: a pan is a plain translation matrix ---
    let warped = affine(&pixs, &AffineMatrix::translation(3.0, 1.0)).unwrap();
    let shifted = transform_with(
        &pixs,
        &TransformState::identity().with_offset(3.0, 1.0),
        Interpolation::Bilinear,
    )
    .unwrap();
    rp.compare_pix_within(&warped, &shifted, 1);

    assert!(rp.cleanup(), "transform regression test failed");
}
