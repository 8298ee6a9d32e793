//! Convolution regression test
//!
//! Sharpen, emboss and Gaussian blur.

use pixedit_core::PixelBuffer;
use pixedit_filter::{
    FilterError, FilterKind, Kernel3, MAX_BLUR_RADIUS, apply_filter, convolve3, emboss,
    gaussian_blur, sharpen,
};
use pixedit_test::{RegParams, fixtures};

#[test]
fn convolve_reg() {
    pixedit_test::init_logging();
    let mut rp = RegParams::new("convolve");

    let pixs = fixtures::make_checkerboard(64, 48, 8, [30, 60, 90, 255], [220, 200, 180, 255]);
    let w = pixs.width();
    let h = pixs.height();

    // --- Test 1: sizes are preserved ---
    for kind in [
        FilterKind::Sharpen(1.0),
        FilterKind::Emboss,
        FilterKind::Blur(2.0),
    ] {
        let out = apply_filter(&pixs, kind).unwrap_or_else(|e| panic!("{kind}: {e}"));
        rp.compare_values(w as f64, out.width() as f64, 0.0);
        rp.compare_values(h as f64, out.height() as f64, 0.0);
    }

    // --- Test 2: identity kernel and zero intensities ---
    rp.compare_pix(&pixs, &convolve3(&pixs, &Kernel3::identity()).unwrap());
    rp.compare_pix(&pixs, &sharpen(&pixs, 0.0).unwrap());
    rp.compare_pix(&pixs, &gaussian_blur(&pixs, 0.0).unwrap());

    // --- Test 3: the border ring is untouched by sharpen and emboss ---
    let noise = fixtures::make_noise(20, 16, 5);
    for out in [sharpen(&noise, 2.0).unwrap(), emboss(&noise).unwrap()] {
        let mut border_same = true;
        for x in 0..20 {
            border_same &= out.get_pixel(x, 0) == noise.get_pixel(x, 0);
            border_same &= out.get_pixel(x, 15) == noise.get_pixel(x, 15);
        }
        for y in 0..16 {
            border_same &= out.get_pixel(0, y) == noise.get_pixel(0, y);
            border_same &= out.get_pixel(19, y) == noise.get_pixel(19, y);
        }
        rp.compare_values(1.0, if border_same { 1.0 } else { 0.0 }, 0.0);
    }

    // --- Test 4: sharpen increases and blur reduces variance ---
    let orig_var = pixel_variance(&noise);
    let sharp_var = pixel_variance(&sharpen(&noise, 1.0).unwrap());
    let blur_var = pixel_variance(&gaussian_blur(&noise, 2.0).unwrap());
    eprintln!(
        "  variance: orig={:.1}, sharpened={:.1}, blurred={:.1}",
        orig_var, sharp_var, blur_var
    );
    rp.compare_values(1.0, if sharp_var > orig_var { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, if blur_var < orig_var { 1.0 } else { 0.0 }, 0.0);

    // --- Test 5: emboss of a flat image is value + 128 ---
    let flat = fixtures::make_uniform(5, 5, [20, 40, 60, 255]);
    let emb = emboss(&flat).unwrap();
    rp.compare_values(148.0, emb.get_pixel(2, 2).unwrap()[0] as f64, 0.0);

    rp.write_pix_and_check(&gaussian_blur(&pixs, 3.0).unwrap())
        .expect("write blur");
    rp.write_pix_and_check(&emboss(&pixs).unwrap())
        .expect("write emboss");

    // --- Test 6: invalid parameters ---
    rp.compare_values(
        1.0,
        if gaussian_blur(&pixs, -2.0).is_err() { 1.0 } else { 0.0 },
        0.0,
    );
    rp.compare_values(
        1.0,
        if sharpen(&pixs, f32::NAN).is_err() { 1.0 } else { 0.0 },
        0.0,
    );
    for radius in [f32::MAX, 1e9, MAX_BLUR_RADIUS * 2.0] {
        let huge = apply_filter(&pixs, FilterKind::Blur(radius));
        rp.compare_values(
            1.0,
            if matches!(huge, Err(FilterError::InvalidParameters(_))) { 1.0 } else { 0.0 },
            0.0,
        );
    }

    assert!(rp.cleanup(), "convolve regression test failed");
}

fn pixel_variance(pix: &PixelBuffer) -> f64 {
    let vals: Vec<f64> = pix
        .data()
        .chunks_exact(4)
        .flat_map(|px| px[..3].iter().map(|&v| v as f64))
        .collect();
    let n = vals.len() as f64;
    let mean = vals.iter().sum::<f64>() / n;
    vals.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
}
