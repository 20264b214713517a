use super::*;

fn fade() -> EdgeFade {
    EdgeFade::default()
}

fn tuning() -> ApproachTuning {
    ApproachTuning::default()
}

// Anchor 0 makes `distance == depth`.
fn edge_at(d: f64) -> f64 {
    edge_fade_opacity(&fade(), 0.0, d)
}

#[test]
fn edge_fade_window_values() {
    assert_eq!(edge_at(-2001.0), 0.0);
    assert_eq!(edge_at(-2000.0), 0.0);
    assert!((edge_at(-1250.0) - 0.5).abs() < 1e-12);
    for d in [-500.0, -200.0, 0.0, 199.9, 200.0] {
        assert_eq!(edge_at(d), 1.0, "distance {d}");
    }
    assert!((edge_at(600.0) - 0.5).abs() < 1e-12);
    assert_eq!(edge_at(1000.0), 0.0);
    assert_eq!(edge_at(5000.0), 0.0);
}

#[test]
fn edge_fade_ramps_are_monotonic() {
    let mut prev = edge_at(-2000.0);
    let mut d = -2000.0;
    while d < -500.0 {
        let v = edge_at(d);
        assert!(v >= prev);
        prev = v;
        d += 7.0;
    }
    let mut prev = edge_at(200.0);
    let mut d = 200.0;
    while d < 1000.0 {
        let v = edge_at(d);
        assert!(v <= prev);
        prev = v;
        d += 7.0;
    }
}

#[test]
fn element_far_behind_is_invisible() {
    // anchor -2500 at depth 0 sits below the -2000 floor
    assert_eq!(edge_fade_opacity(&fade(), -2500.0, 0.0), 0.0);
}

#[test]
fn edge_fade_shifts_with_anchor() {
    assert_eq!(edge_fade_opacity(&fade(), -500.0, 500.0), 1.0);
    assert_eq!(edge_fade_opacity(&fade(), -500.0, 1500.0), 0.0);
}

#[test]
fn approach_scale_is_non_decreasing() {
    for profile in [ViewportProfile::Mobile, ViewportProfile::Desktop] {
        let t = tuning();
        let mut prev = f64::NEG_INFINITY;
        let mut dist = t.start;
        while dist <= t.pass_end {
            let s = compute_approach(&t, &fade(), 0.0, dist, profile).scale;
            assert!(s >= prev - 1e-12, "{profile:?} at {dist}");
            prev = s;
            dist += 5.0;
        }
    }
}

#[test]
fn approach_scale_hits_keyframes() {
    let t = tuning();
    let at = |dist: f64, p| compute_approach(&t, &fade(), 0.0, dist, p).scale;
    assert!((at(t.start, ViewportProfile::Desktop) - 0.55).abs() < 1e-12);
    assert!((at(t.end, ViewportProfile::Desktop) - 1.55).abs() < 1e-12);
    assert!((at(t.pass_end, ViewportProfile::Desktop) - 2.35).abs() < 1e-12);
    assert!((at(t.start, ViewportProfile::Mobile) - 0.95).abs() < 1e-12);
    assert!((at(t.end, ViewportProfile::Mobile) - 1.12).abs() < 1e-12);
    assert!((at(t.pass_end, ViewportProfile::Mobile) - 1.35).abs() < 1e-12);
}

#[test]
fn approach_opacity_is_zero_outside_window() {
    let t = tuning();
    let before = compute_approach(&t, &fade(), 0.0, t.start - 10.0, ViewportProfile::Desktop);
    let after = compute_approach(&t, &fade(), 0.0, t.pass_end + 10.0, ViewportProfile::Desktop);
    assert_eq!(before.opacity, 0.0);
    assert_eq!(after.opacity, 0.0);
}

#[test]
fn approach_is_fully_opaque_near_camera() {
    let t = tuning();
    let s = compute_approach(&t, &fade(), 0.0, t.end, ViewportProfile::Desktop);
    assert_eq!(s.t_approach, 1.0);
    assert_eq!(s.t_pass, 0.0);
    assert!(s.opacity > 1.0 - 1e-12);
}

#[test]
fn approach_opacity_stays_in_unit_range() {
    let t = tuning();
    let mut dist = -4000.0;
    while dist < 3000.0 {
        let o = compute_approach(&t, &fade(), 0.0, dist, ViewportProfile::Mobile).opacity;
        assert!((0.0..=1.0).contains(&o));
        dist += 13.0;
    }
}

#[test]
fn approach_z_index_tracks_progress() {
    let t = tuning();
    let far = compute_approach(&t, &fade(), 0.0, t.start - 100.0, ViewportProfile::Desktop);
    let mid = compute_approach(&t, &fade(), 0.0, -1000.0, ViewportProfile::Desktop);
    let near = compute_approach(&t, &fade(), 0.0, t.end, ViewportProfile::Desktop);
    assert_eq!(far.z_index, 20);
    assert!(mid.z_index > far.z_index);
    assert_eq!(near.z_index, 80);
}
