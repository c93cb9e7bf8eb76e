//! Channel filter regression test

use pixtone_color::{ColorError, brightness, colorize, contrast};
use pixtone_core::{Pix, color};
use pixtone_test::{RegParams, rgb_ramp, with_alpha};

#[test]
fn enhance_reg() {
    let mut rp = RegParams::new("enhance");
    let ramp = with_alpha(&rgb_ramp(32, 32).unwrap(), 9);

    // --- Zero levels are identities ---
    let mut pm = ramp.to_mut();
    brightness(&mut pm, 0).unwrap();
    contrast(&mut pm, 0).unwrap();
    colorize(&mut pm, 0, 0, 0, 0).unwrap();
    rp.compare_pix(&ramp, &pm.into());

    // --- Brightness saturates at both ends and keeps alpha ---
    let mut pm = ramp.to_mut();
    brightness(&mut pm, 255).unwrap();
    let white = with_alpha(&Pix::new_filled(32, 32, color::pack(255, 255, 255, 0)).unwrap(), 9);
    rp.compare_pix(&white, &pm.into());
    let mut pm = ramp.to_mut();
    brightness(&mut pm, -255).unwrap();
    let black = with_alpha(&Pix::new(32, 32).unwrap(), 9);
    rp.compare_pix(&black, &pm.into());

    // --- Full negative contrast collapses to mid gray ---
    let mut pm = ramp.to_mut();
    contrast(&mut pm, -100).unwrap();
    let mid = with_alpha(&Pix::new_filled(32, 32, color::pack(127, 127, 127, 0)).unwrap(), 9);
    rp.compare_pix(&mid, &pm.into());

    // --- Colorize shifts channels and alpha with clamping ---
    let mut pm = Pix::new_filled(2, 2, color::pack(250, 5, 100, 120)).unwrap().into_mut();
    colorize(&mut pm, 10, -10, 0, 20).unwrap();
    rp.compare_values(
        color::pack(255, 0, 100, 127) as f64,
        pm.get_pixel(0, 1).unwrap() as f64,
        0.0,
    );

    // --- Range errors leave the image alone ---
    let mut pm = ramp.to_mut();
    let err = contrast(&mut pm, 101);
    rp.compare_values(
        1.0,
        matches!(err, Err(ColorError::OutOfRange { name: "contrast", .. })) as u8 as f64,
        0.0,
    );
    let err = colorize(&mut pm, 0, -256, 0, 0);
    rp.compare_values(
        1.0,
        matches!(err, Err(ColorError::OutOfRange { name: "green", .. })) as u8 as f64,
        0.0,
    );
    rp.compare_pix(&ramp, &pm.into());

    assert!(rp.cleanup());
}
