use super::*;

const CURVES: [Ease; 3] = [Ease::Linear, Ease::Smoothstep, Ease::Decelerate];

#[test]
fn curves_pin_both_ends() {
    for ease in CURVES {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn out_of_range_input_is_clamped() {
    assert_eq!(Ease::Smoothstep.apply(-3.0), 0.0);
    assert_eq!(Ease::Decelerate.apply(7.0), 1.0);
}

#[test]
fn smoothstep_is_symmetric_about_the_midpoint() {
    assert_eq!(Ease::Smoothstep.apply(0.5), 0.5);
    assert_eq!(Ease::Smoothstep.apply(0.25), 0.15625);
    assert_eq!(Ease::Smoothstep.apply(0.75), 0.84375);
}

#[test]
fn decelerate_runs_ahead_of_linear() {
    assert_eq!(Ease::Decelerate.apply(0.5), 0.875);
    for i in 1..10 {
        let t = f64::from(i) / 10.0;
        assert!(Ease::Decelerate.apply(t) > t);
    }
}

#[test]
fn names_are_snake_case() {
    assert_eq!(serde_json::to_string(&Ease::Smoothstep).unwrap(), "\"smoothstep\"");
    let parsed: Ease = serde_json::from_str("\"decelerate\"").unwrap();
    assert_eq!(parsed, Ease::Decelerate);
}
