use super::*;

#[test]
fn clamp_unit_bounds() {
    assert_eq!(clamp_unit(-3.0), 0.0);
    assert_eq!(clamp_unit(0.4), 0.4);
    assert_eq!(clamp_unit(7.0), 1.0);
    assert_eq!(clamp_unit(f64::NAN), 0.0);
    assert_eq!(clamp_unit(f64::INFINITY), 1.0);
}

#[test]
fn smoothstep_endpoints_and_midpoint() {
    assert_eq!(smoothstep(0.0), 0.0);
    assert_eq!(smoothstep(1.0), 1.0);
    assert!((smoothstep(0.5) - 0.5).abs() < 1e-12);
}

#[test]
fn smoothstep_is_flat_at_both_ends() {
    let h = 1e-6;
    let d0 = (smoothstep(h) - smoothstep(0.0)) / h;
    let d1 = (smoothstep(1.0) - smoothstep(1.0 - h)) / h;
    assert!(d0 < 1e-5);
    assert!(d1 < 1e-5);
}

#[test]
fn smoothstep_is_monotonic() {
    let mut prev = 0.0;
    for i in 1..=100 {
        let v = smoothstep(f64::from(i) / 100.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn unit_ratio_handles_degenerate_denominators() {
    assert_eq!(unit_ratio(5.0, 0.0), 0.0);
    assert_eq!(unit_ratio(5.0, -10.0), 0.0);
    assert_eq!(unit_ratio(5.0, 10.0), 0.5);
    assert_eq!(unit_ratio(50.0, 10.0), 1.0);
}

#[test]
fn lerp_hits_endpoints_and_extrapolates() {
    assert_eq!(lerp(0.55, 1.55, 0.0), 0.55);
    assert_eq!(lerp(0.55, 1.55, 1.0), 1.55);
    assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
    assert_eq!(lerp(2.0, 4.0, 1.5), 5.0);
}
