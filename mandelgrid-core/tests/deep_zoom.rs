//! Behavior at zoom depths where f64 pixel spacing collapses.

use mandelgrid_core::{DecFloat, PlaneRegion, Real, Selection};

#[test]
fn f64_pixel_spacing_collapses_below_its_epsilon() {
    // Around |x| ~ 0.74 the f64 ulp is ~1e-16; a 1e-17 pixel step vanishes.
    let center = -0.74364388703715870475_f64;
    let step = 1e-17_f64;
    assert_eq!(center + step, center);
}

#[test]
fn decimal_backend_distinguishes_adjacent_pixels_at_depth() {
    let center = DecFloat::from_decimal_str("-0.74364388703715870475").unwrap();
    let step = DecFloat::from_decimal_str("1e-17").unwrap();

    let neighbor = center.clone() + step;
    assert_ne!(neighbor, center);
    assert!(neighbor > center);
}

#[test]
fn selection_zoom_survives_depths_beyond_f64() {
    let region = PlaneRegion::<DecFloat>::new(
        DecFloat::from_decimal_str("-0.74364388703715870475").unwrap(),
        DecFloat::from_decimal_str("0.13182590420531197049").unwrap(),
        DecFloat::from_decimal_str("1e-15").unwrap(),
        DecFloat::from_decimal_str("1e-15").unwrap(),
    );

    // Zoom into the upper-left quadrant of a 100x100 grid.
    let selection = Selection::new(0, 0, 50, 50);
    let zoomed =
        mandelgrid_core::region_from_selection(&region, 100, 100, &selection).unwrap();

    assert!(!zoomed.is_degenerate());
    // Half-distances shrink by exactly half.
    let expected = DecFloat::from_decimal_str("5e-16").unwrap();
    let err = Real::abs(&(zoomed.half_width.clone() - expected)).to_f64();
    assert!(err < 1e-30, "half width off by {}", err);
    // The new center moved left and up by a quarter of the old span, a
    // displacement far below f64 resolution at this coordinate.
    assert!(zoomed.center_x < region.center_x);
    assert!(zoomed.center_y > region.center_y);
}

#[test]
fn repeated_halving_keeps_twenty_digits_of_headroom() {
    let mut half_width = DecFloat::from_decimal_str("1.5").unwrap();
    let two = DecFloat::from_f64(2.0);

    // 120 halvings: width ~1e-36, far past f64 subnormals but comfortably
    // inside a 20-digit decimal with unbounded exponent.
    for _ in 0..120 {
        half_width = half_width / two.clone();
    }

    let zero = DecFloat::from_f64(0.0);
    assert!(half_width > zero);

    let restored = {
        let mut w = half_width;
        for _ in 0..120 {
            w = w * two.clone();
        }
        w
    };
    let err = Real::abs(&(restored - DecFloat::from_decimal_str("1.5").unwrap())).to_f64();
    assert!(err < 1e-15, "restored width off by {}", err);
}
