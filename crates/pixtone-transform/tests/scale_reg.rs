//! Resize and tile regression test

use pixtone_core::{Pix, color};
use pixtone_test::{RegParams, color_sweep, rgb_ramp};
use pixtone_transform::{TransformError, resize, tile};

#[test]
fn scale_reg() {
    let mut rp = RegParams::new("scale");

    let pixs = color_sweep(60, 40).expect("build sweep");
    let w = pixs.width();
    let h = pixs.height();
    eprintln!("Image size: {}x{}", w, h);

    // --- Test 1: Scale up 2x ---
    let up2 = resize(&pixs, w * 2, h * 2).expect("resize 2x");
    rp.compare_values((w * 2) as f64, up2.width() as f64, 0.0);
    rp.compare_values((h * 2) as f64, up2.height() as f64, 0.0);
    rp.write_pix(&up2).expect("write up2");

    // --- Test 2: Scale down by half, aspect from width ---
    let down2 = resize(&pixs, w / 2, 0).expect("resize 0.5x");
    rp.compare_values((w / 2) as f64, down2.width() as f64, 0.0);
    rp.compare_values((h / 2) as f64, down2.height() as f64, 0.0);

    // --- Test 3: Same size is the identity ---
    let s1 = resize(&pixs, w, h).expect("resize 1x");
    rp.compare_pix(&pixs, &s1);

    // --- Test 4: Smooth ramps survive a round trip closely ---
    let ramp = rgb_ramp(64, 64).expect("build ramp");
    let up = resize(&ramp, 128, 128).expect("ramp up");
    let back = resize(&up, 64, 64).expect("ramp down");
    rp.compare_pix_with_tolerance(&ramp, &back, 3);

    // --- Test 5: Both dimensions 0 is rejected ---
    let err = resize(&pixs, 0, 0);
    rp.compare_values(
        1.0,
        if matches!(err, Err(TransformError::InvalidParameters(_))) { 1.0 } else { 0.0 },
        0.0,
    );

    // --- Test 6: Tiling repeats the source from the origin ---
    let tiled = tile(&pixs, w * 2 + 7, h + 3).expect("tile");
    rp.compare_values((w * 2 + 7) as f64, tiled.width() as f64, 0.0);
    let mut same = true;
    for y in 0..tiled.height() {
        for x in 0..tiled.width() {
            if tiled.get_pixel(x, y) != pixs.get_pixel(x % w, y % h) {
                same = false;
            }
        }
    }
    rp.compare_values(1.0, if same { 1.0 } else { 0.0 }, 0.0);

    // --- Test 7: Alpha is interpolated like any channel ---
    let mut pm = Pix::new_filled(4, 4, color::pack(0, 0, 0, 100)).unwrap().into_mut();
    pm.set_spp(4);
    let half = resize(&pm.into(), 2, 2).expect("resize alpha");
    rp.compare_values(100.0, color::alpha(half.get_pixel(1, 1).unwrap()) as f64, 0.0);
    rp.compare_values(4.0, half.spp() as f64, 0.0);

    assert!(rp.cleanup(), "scale regression test failed");
}
