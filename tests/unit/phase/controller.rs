use super::*;
use crate::phase::store::{MemoryFlagStore, UnavailableFlagStore};

fn fresh() -> (PhaseController, MemoryFlagStore) {
    let store = MemoryFlagStore::new();
    let ctl = PhaseController::new(Box::new(store.clone()), TransitionTuning::default());
    (ctl, store)
}

#[test]
fn starts_in_journey_when_unseen() {
    let (ctl, _) = fresh();
    assert_eq!(ctl.phase(), JourneyPhase::Journey);
    assert!(!ctl.is_transitioning());
}

#[test]
fn seen_flag_skips_straight_to_reveal() {
    let store = MemoryFlagStore::with_flag(STORY_SEEN_KEY, true);
    let mut ctl = PhaseController::new(Box::new(store.clone()), TransitionTuning::default());
    assert_eq!(ctl.phase(), JourneyPhase::Reveal);

    assert!(!ctl.trigger(TransitionCause::Skip, 0.0));
    for t in 0..10 {
        ctl.tick(f64::from(t) * 16.0);
    }
    assert_eq!(ctl.fade_timer_starts(), 0);
    assert_eq!(ctl.fade_started_at(), None);
    assert_eq!(store.writes(), 0);
}

#[test]
fn repeated_triggers_write_once_and_start_one_timer() {
    let (mut ctl, store) = fresh();
    assert!(ctl.trigger(TransitionCause::ReachedEnd, 100.0));
    assert!(!ctl.trigger(TransitionCause::HandoffSaturated, 100.0));
    assert!(!ctl.trigger(TransitionCause::Skip, 120.0));
    assert!(!ctl.trigger(TransitionCause::ReachedEnd, 300.0));

    assert_eq!(store.writes(), 1);
    assert_eq!(store.get(STORY_SEEN_KEY), Some(true));
    assert_eq!(ctl.fade_timer_starts(), 1);
    assert_eq!(ctl.fade_started_at(), Some(100.0));
}

#[test]
fn fade_completes_after_duration() {
    let (mut ctl, _) = fresh();
    ctl.tick(0.0);
    ctl.trigger(TransitionCause::Skip, 1000.0);
    assert_eq!(ctl.phase(), JourneyPhase::Fading);
    assert!(ctl.is_transitioning());

    assert!(ctl.tick(1349.0).is_empty());
    assert_eq!(ctl.phase(), JourneyPhase::Fading);

    let events = ctl.tick(1350.0);
    assert_eq!(events, vec![PhaseEvent::Entered(JourneyPhase::Reveal)]);
    assert_eq!(ctl.phase(), JourneyPhase::Reveal);
    assert!(!ctl.is_transitioning());
}

#[test]
fn phases_only_move_forward() {
    let (mut ctl, _) = fresh();
    let mut seen = vec![ctl.phase()];
    let causes = [
        TransitionCause::ReachedEnd,
        TransitionCause::Skip,
        TransitionCause::HandoffSaturated,
    ];
    for step in 0..200u32 {
        let now = f64::from(step) * 16.0;
        ctl.trigger(causes[(step % 3) as usize], now);
        ctl.tick(now);
        if seen.last() != Some(&ctl.phase()) {
            seen.push(ctl.phase());
        }
    }
    assert_eq!(
        seen,
        vec![
            JourneyPhase::Journey,
            JourneyPhase::Fading,
            JourneyPhase::Reveal
        ]
    );
}

#[test]
fn startup_and_post_reveal_scroll_resets() {
    let (mut ctl, _) = fresh();
    assert_eq!(ctl.tick(0.0), vec![PhaseEvent::ResetScroll]);
    assert!(ctl.tick(16.0).is_empty());

    ctl.trigger(TransitionCause::Skip, 16.0);
    assert_eq!(
        ctl.tick(400.0),
        vec![PhaseEvent::Entered(JourneyPhase::Reveal)]
    );
    assert!(ctl.tick(416.0).is_empty());
    assert_eq!(ctl.tick(432.0), vec![PhaseEvent::ResetScroll]);
    assert!(ctl.tick(448.0).is_empty());
}

#[test]
fn store_failure_does_not_block_transition() {
    let mut ctl = PhaseController::new(Box::new(UnavailableFlagStore), TransitionTuning::default());
    assert_eq!(ctl.phase(), JourneyPhase::Journey);
    assert!(ctl.trigger(TransitionCause::Skip, 0.0));
    ctl.tick(400.0);
    assert_eq!(ctl.phase(), JourneyPhase::Reveal);
}

#[test]
fn layers_cross_fade() {
    let (mut ctl, _) = fresh();
    let l = ctl.layers(0.0);
    assert!(l.journey.mounted && !l.reveal.mounted);
    assert_eq!(l.journey.pointer_events, PointerEvents::None);

    ctl.trigger(TransitionCause::Skip, 0.0);
    let l = ctl.layers(175.0);
    assert!(l.journey.mounted && l.reveal.mounted);
    assert!((l.journey.opacity - 0.5).abs() < 1e-12);
    assert_eq!(l.reveal.opacity, 1.0);
    assert_eq!(l.reveal.pointer_events, PointerEvents::None);

    ctl.tick(350.0);
    let l = ctl.layers(350.0);
    assert!(!l.journey.mounted);
    assert_eq!(l.reveal.pointer_events, PointerEvents::Auto);
}

#[test]
fn zero_fade_reveals_on_next_tick() {
    let store = MemoryFlagStore::new();
    let tuning = TransitionTuning {
        fade_ms: 0.0,
        scroll_reset_frames: 0,
    };
    let mut ctl = PhaseController::new(Box::new(store), tuning);
    ctl.tick(0.0);
    ctl.trigger(TransitionCause::Skip, 5.0);
    assert_eq!(ctl.fade_progress(5.0), 1.0);
    assert_eq!(
        ctl.tick(5.0),
        vec![
            PhaseEvent::Entered(JourneyPhase::Reveal),
            PhaseEvent::ResetScroll
        ]
    );
}
