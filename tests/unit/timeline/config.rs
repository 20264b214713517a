use super::*;

#[test]
fn default_config_is_valid() {
    let cfg = TimelineConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.climax_anchor_index().unwrap(), 2);
}

#[test]
fn missing_anchor_fails_fast() {
    let json = r#"{ "elements": [ { "id": "lonely", "policy": "approach" } ] }"#;
    let cfg: TimelineConfig = serde_json::from_str(json).unwrap();
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("'lonely' has no anchor depth"));
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut cfg = TimelineConfig::default();
    cfg.elements[1].id = "intro".to_owned();
    assert!(cfg.validate().is_err());
}

#[test]
fn climax_needs_an_approach_element() {
    let mut cfg = TimelineConfig::default();
    cfg.elements.retain(|e| e.policy == OpacityPolicy::EdgeFade);
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("approach element"));
}

#[test]
fn explicit_climax_anchor_must_be_approach() {
    let mut cfg = TimelineConfig::default();
    cfg.climax.anchor_element = Some("intro".to_owned());
    assert!(cfg.validate().is_err());

    cfg.climax.anchor_element = Some("panel-heritage".to_owned());
    assert_eq!(cfg.climax_anchor_index().unwrap(), 1);

    cfg.climax.anchor_element = Some("nope".to_owned());
    assert!(cfg.validate().is_err());
}

#[test]
fn inverted_breakpoints_are_rejected() {
    let mut cfg = TimelineConfig::default();
    cfg.approach.end = cfg.approach.pass_end + 1.0;
    assert!(cfg.validate().is_err());

    let mut cfg = TimelineConfig::default();
    cfg.edge_fade.near = cfg.edge_fade.plateau_end;
    assert!(cfg.validate().is_err());
}

#[test]
fn non_finite_values_are_rejected() {
    let mut cfg = TimelineConfig::default();
    cfg.elements[0].anchor = Some(f64::NAN);
    assert!(cfg.validate().is_err());

    let mut cfg = TimelineConfig::default();
    cfg.handoff.ramp = 0.0;
    assert!(cfg.validate().is_err());
}

#[test]
fn degenerate_journey_height_is_tolerated() {
    let mut cfg = TimelineConfig::default();
    cfg.journey_height = 0.0;
    cfg.validate().unwrap();
    cfg.journey_height = -10.0;
    cfg.validate().unwrap();
}

#[test]
fn partial_json_fills_defaults() {
    let cfg: TimelineConfig = serde_json::from_str(r#"{ "journey_height": 9000 }"#).unwrap();
    assert_eq!(cfg.journey_height, 9000.0);
    assert_eq!(cfg.elements.len(), 3);
    assert_eq!(cfg.approach, ApproachTuning::default());
}

#[test]
fn unknown_fields_are_rejected() {
    let res = serde_json::from_str::<TimelineConfig>(r#"{ "journey_heigth": 9000 }"#);
    assert!(res.is_err());
}

#[test]
fn negative_z_span_is_rejected() {
    let mut cfg = TimelineConfig::default();
    cfg.approach.z_span = -60;
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("z_span"));

    cfg.approach.z_span = 0;
    cfg.validate().unwrap();
}

#[test]
fn stacking_overflow_is_rejected_before_evaluation() {
    let mut cfg = TimelineConfig::default();
    cfg.approach.z_base = i32::MAX;
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("stacking range"));

    let mut cfg = TimelineConfig::default();
    cfg.approach.z_base = i32::MAX - 60;
    assert!(cfg.validate().is_err(), "community panel bias of 1 overflows");
    cfg.elements[2].z_bias = 0;
    cfg.validate().unwrap();

    let mut cfg = TimelineConfig::default();
    cfg.approach.z_base = -100;
    cfg.elements[1].z_bias = i32::MIN;
    assert!(cfg.validate().is_err());

    // Edge-fade elements stack at their bias alone.
    let mut cfg = TimelineConfig::default();
    cfg.elements[0].z_bias = i32::MAX;
    cfg.validate().unwrap();
}

#[test]
fn overflowing_json_fails_at_load() {
    let json = r#"{ "approach": { "z_base": 2147483647 } }"#;
    let cfg: TimelineConfig = serde_json::from_str(json).unwrap();
    assert!(cfg.validate().is_err());
}
