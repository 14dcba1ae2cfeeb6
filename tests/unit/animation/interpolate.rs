use super::*;

#[test]
fn clamped_endpoints_hold_outside_range() {
    let i = Interpolation::clamped([10.0, 20.0, 40.0], [1.0, -3.0, 7.0]).unwrap();
    for x in [-1e9, -5.0, 0.0, 10.0] {
        assert_eq!(i.sample(x), 1.0);
    }
    for x in [40.0, 41.0, 1e9] {
        assert_eq!(i.sample(x), 7.0);
    }
}

#[test]
fn linear_segments_are_monotonic_with_output_direction() {
    let i = Interpolation::clamped([0.0, 10.0, 20.0], [0.0, 100.0, 50.0]).unwrap();
    let mut prev = i.sample(0.0);
    for x in 1..=10 {
        let v = i.sample(f64::from(x));
        assert!(v > prev);
        prev = v;
    }
    for x in 11..=20 {
        let v = i.sample(f64::from(x));
        assert!(v < prev);
        prev = v;
    }
    assert_eq!(i.sample(15.0), 75.0);
}

#[test]
fn out_quad_scenario_between_bounds() {
    let opts = InterpolateOptions::clamped().with_ease(Ease::OutQuad);
    let v = interpolate(75.0, &[0.0, 150.0], &[0.0, 500.0], opts).unwrap();
    assert!(v > 0.0 && v < 500.0);
    assert_eq!(v, 375.0);
    assert_eq!(
        interpolate(150.0, &[0.0, 150.0], &[0.0, 500.0], opts).unwrap(),
        500.0
    );
    assert_eq!(
        interpolate(0.0, &[0.0, 150.0], &[0.0, 500.0], opts).unwrap(),
        0.0
    );
}

#[test]
fn extend_follows_boundary_slope() {
    let i = Interpolation::new([0.0, 10.0, 20.0], [0.0, 10.0, 30.0], Default::default()).unwrap();
    assert_eq!(i.sample(-5.0), -5.0);
    assert_eq!(i.sample(25.0), 40.0);
}

#[test]
fn extend_ignores_easing_outside_range() {
    let opts = InterpolateOptions::default().with_ease(Ease::OutQuad);
    let i = Interpolation::new([0.0, 10.0], [0.0, 10.0], opts).unwrap();
    assert_eq!(i.sample(20.0), 20.0);
    assert_eq!(i.sample(5.0), 7.5);
}

#[test]
fn sides_are_independent() {
    let i = Interpolation::new([0.0, 10.0], [0.0, 1.0], InterpolateOptions::clamp_right()).unwrap();
    assert_eq!(i.sample(-10.0), -1.0);
    assert_eq!(i.sample(20.0), 1.0);

    let opts = InterpolateOptions {
        left: Extrapolate::Identity,
        right: Extrapolate::Identity,
        ease: Ease::Linear,
    };
    let i = Interpolation::new([0.0, 10.0], [5.0, 6.0], opts).unwrap();
    assert_eq!(i.sample(-3.0), -3.0);
    assert_eq!(i.sample(12.0), 12.0);
}

#[test]
fn invalid_ranges_fail_at_construction() {
    let opts = InterpolateOptions::clamped();
    for (input, output) in [
        (vec![0.0, 1.0], vec![0.0]),
        (vec![0.0], vec![0.0]),
        (vec![0.0, 0.0], vec![0.0, 1.0]),
        (vec![1.0, 0.0], vec![0.0, 1.0]),
        (vec![0.0, f64::NAN], vec![0.0, 1.0]),
        (vec![0.0, 1.0], vec![0.0, f64::INFINITY]),
    ] {
        let err = Interpolation::new(input, output, opts).unwrap_err();
        assert!(matches!(err, FramecastError::InvalidRange(_)));
    }
}

#[test]
fn nan_input_maps_to_first_output() {
    let i = Interpolation::clamped([0.0, 1.0], [3.0, 4.0]).unwrap();
    assert_eq!(i.sample(f64::NAN), 3.0);
}

#[test]
fn breakpoint_hits_exact_output() {
    let i = Interpolation::clamped([0.0, 0.3, 0.5], [1.0, 1.0, 0.0]).unwrap();
    assert_eq!(i.sample(0.3), 1.0);
    assert!((i.sample(0.4) - 0.5).abs() < 1e-12);
    assert_eq!(i.at(0), 1.0);
}
