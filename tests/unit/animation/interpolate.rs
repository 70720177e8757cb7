use super::*;

fn unit_ramp() -> KeyframeMapping {
    KeyframeMapping::new([0.0, 60.0], [0.0, 1.0]).unwrap()
}

#[test]
fn clamped_ramp_matches_reference_points() {
    let m = unit_ramp();
    let opts = InterpolateOpts::clamped();
    assert_eq!(m.sample(30.0, opts).unwrap(), 0.5);
    assert_eq!(m.sample(-5.0, opts).unwrap(), 0.0);
    assert_eq!(m.sample(1000.0, opts).unwrap(), 1.0);
}

#[test]
fn clamp_holds_edges_for_every_frame_outside() {
    let m = KeyframeMapping::new([10.0, 20.0, 40.0], [3.0, -1.0, 7.5]).unwrap();
    let opts = InterpolateOpts::clamped();
    for f in -50..10 {
        assert_eq!(m.sample(f as f64, opts).unwrap(), 3.0);
    }
    for f in 41..200 {
        assert_eq!(m.sample(f as f64, opts).unwrap(), 7.5);
    }
}

#[test]
fn breakpoints_return_exact_outputs() {
    let inputs = [0.0, 0.1, 0.3, 7.0, 9.0];
    let outputs = [0.1, 0.3, 0.7, 1.0 / 3.0, 2.0 / 3.0];
    let m = KeyframeMapping::new(inputs, outputs).unwrap();
    for (i, o) in inputs.iter().zip(outputs) {
        for opts in [
            InterpolateOpts::extend(),
            InterpolateOpts::clamped(),
            InterpolateOpts::clamp_right().with_easing(Ease::Smoothstep),
        ] {
            assert_eq!(m.sample(*i, opts).unwrap(), o);
        }
    }
}

#[test]
fn extend_continues_edge_slopes() {
    let m = KeyframeMapping::new([0.0, 10.0, 20.0], [0.0, 10.0, 30.0]).unwrap();
    let opts = InterpolateOpts::extend();
    assert_eq!(m.sample(-5.0, opts).unwrap(), -5.0);
    assert_eq!(m.sample(25.0, opts).unwrap(), 40.0);
}

#[test]
fn identity_returns_input_outside_range() {
    let opts = InterpolateOpts {
        left: Extrapolate::Identity,
        right: Extrapolate::Identity,
        ..InterpolateOpts::default()
    };
    let m = unit_ramp();
    assert_eq!(m.sample(-3.0, opts).unwrap(), -3.0);
    assert_eq!(m.sample(90.0, opts).unwrap(), 90.0);
}

#[test]
fn policies_apply_per_edge() {
    let m = unit_ramp();
    let opts = InterpolateOpts::clamp_right();
    assert_eq!(m.sample(-30.0, opts).unwrap(), -0.5);
    assert_eq!(m.sample(120.0, opts).unwrap(), 1.0);
}

#[test]
fn easing_shapes_the_inside_only() {
    let m = unit_ramp();
    let eased = InterpolateOpts::extend().with_easing(Ease::Decelerate);
    assert_eq!(m.sample(30.0, eased).unwrap(), 0.875);
    assert_eq!(m.sample(120.0, eased).unwrap(), 2.0);
}

#[test]
fn four_point_fade_profile() {
    let v = |f: f64| {
        interpolate(
            f,
            &[0.0, 20.0, 40.0, 60.0],
            &[0.0, 1.0, 1.0, 0.0],
            InterpolateOpts::clamped(),
        )
        .unwrap()
    };
    assert_eq!(v(0.0), 0.0);
    assert_eq!(v(10.0), 0.5);
    assert_eq!(v(30.0), 1.0);
    assert_eq!(v(50.0), 0.5);
    assert_eq!(v(60.0), 0.0);
}

#[test]
fn duplicate_breakpoints_do_not_divide_by_zero() {
    let m = KeyframeMapping::new([0.0, 10.0, 10.0, 20.0], [0.0, 1.0, 5.0, 6.0]).unwrap();
    let opts = InterpolateOpts::extend();
    assert_eq!(m.sample(10.0, opts).unwrap(), 1.0);
    assert_eq!(m.sample(5.0, opts).unwrap(), 0.5);
    assert_eq!(m.sample(15.0, opts).unwrap(), 5.5);
    for f in [-10.0, 0.0, 9.999, 10.0, 10.001, 30.0] {
        assert!(m.sample(f, opts).unwrap().is_finite());
    }

    let flat = KeyframeMapping::new([5.0, 5.0], [2.0, 9.0]).unwrap();
    assert_eq!(flat.sample(1.0, opts).unwrap(), 2.0);
    assert_eq!(flat.sample(8.0, opts).unwrap(), 9.0);
}

#[test]
fn sampling_is_idempotent() {
    let m = KeyframeMapping::new([0.0, 30.0, 70.0, 100.0], [0.0, 1.2, 1.0, 0.8]).unwrap();
    for f in 0..140 {
        let a = m.sample(f as f64, InterpolateOpts::clamp_right()).unwrap();
        let b = m.sample(f as f64, InterpolateOpts::clamp_right()).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn mismatched_lengths_fail_fast() {
    let err = interpolate(1.0, &[0.0, 1.0], &[0.0], InterpolateOpts::default()).unwrap_err();
    assert!(matches!(err, ReelError::Animation(_)));
    assert!(err.to_string().contains("does not match"));
}

#[test]
fn decreasing_breakpoints_fail_fast() {
    let err = KeyframeMapping::new([0.0, 20.0, 10.0], [0.0, 1.0, 2.0]).unwrap_err();
    assert!(err.to_string().contains("non-decreasing"));
}

#[test]
fn degenerate_inputs_are_rejected() {
    assert!(KeyframeMapping::new([0.0], [1.0]).is_err());
    assert!(KeyframeMapping::new(Vec::new(), Vec::new()).is_err());
    assert!(KeyframeMapping::new([0.0, f64::NAN], [0.0, 1.0]).is_err());
    assert!(KeyframeMapping::new([0.0, 1.0], [0.0, f64::INFINITY]).is_err());
    assert!(unit_ramp().sample(f64::NAN, InterpolateOpts::default()).is_err());
}
