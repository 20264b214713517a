use super::*;
use crate::frame::scheduler::FrameQueue;

const GEOMETRY: ScrollGeometry = ScrollGeometry {
    journey_height: 12_000.0,
    viewport_height: 900.0,
};

fn sampler() -> ScrollSampler {
    ScrollSampler::new(SamplerTuning::default())
}

#[test]
fn many_events_publish_once_per_frame() {
    let mut q = FrameQueue::new();
    let mut s = sampler();
    for off in [10.0, 20.0, 30.0, 40.0] {
        s.on_scroll_event(off, &mut q);
    }
    assert_eq!(q.pending_len(), 1);

    let batch = q.drain();
    let update = s.tick(&batch, GEOMETRY).unwrap();
    assert_eq!(update.sample.raw_offset, 40.0);
    assert!(s.tick(&batch, GEOMETRY).is_none());
    assert_eq!(q.pending_len(), 0);
}

#[test]
fn no_update_without_events() {
    let mut q = FrameQueue::new();
    let mut s = sampler();
    assert!(s.tick(&q.drain(), GEOMETRY).is_none());
}

#[test]
fn started_flag_reports_only_changes() {
    let mut q = FrameQueue::new();
    let mut s = sampler();

    s.on_scroll_event(50.0, &mut q);
    let u = s.tick(&q.drain(), GEOMETRY).unwrap();
    assert_eq!(u.started_changed, None);
    assert!(!s.has_started());

    s.on_scroll_event(51.0, &mut q);
    let u = s.tick(&q.drain(), GEOMETRY).unwrap();
    assert_eq!(u.started_changed, Some(true));

    s.on_scroll_event(400.0, &mut q);
    let u = s.tick(&q.drain(), GEOMETRY).unwrap();
    assert_eq!(u.started_changed, None);

    s.on_scroll_event(0.0, &mut q);
    let u = s.tick(&q.drain(), GEOMETRY).unwrap();
    assert_eq!(u.started_changed, Some(false));
}

#[test]
fn end_threshold_is_inclusive() {
    let mut q = FrameQueue::new();
    let mut s = sampler();
    assert_eq!(s.end_threshold(GEOMETRY), 11_050.0);

    s.on_scroll_event(11_049.0, &mut q);
    assert!(!s.tick(&q.drain(), GEOMETRY).unwrap().reached_end);

    s.on_scroll_event(11_050.0, &mut q);
    assert!(s.tick(&q.drain(), GEOMETRY).unwrap().reached_end);

    // Staying past the end does not re-raise; leaving and returning does.
    s.on_scroll_event(11_060.0, &mut q);
    assert!(!s.tick(&q.drain(), GEOMETRY).unwrap().reached_end);
    s.on_scroll_event(10_000.0, &mut q);
    assert!(!s.tick(&q.drain(), GEOMETRY).unwrap().reached_end);
    s.on_scroll_event(11_100.0, &mut q);
    assert!(s.tick(&q.drain(), GEOMETRY).unwrap().reached_end);
}

#[test]
fn teardown_cancels_pending_frame_and_ignores_events() {
    let mut q = FrameQueue::new();
    let mut s = sampler();
    s.on_scroll_event(300.0, &mut q);
    s.teardown(&mut q);
    assert_eq!(q.pending_len(), 0);
    assert!(!s.is_listening());

    s.on_scroll_event(600.0, &mut q);
    assert_eq!(q.pending_len(), 0);
    assert!(s.tick(&q.drain(), GEOMETRY).is_none());
    assert_eq!(s.sample().raw_offset, 0.0);
}

#[test]
fn non_finite_and_negative_offsets() {
    let mut q = FrameQueue::new();
    let mut s = sampler();
    s.on_scroll_event(f64::NAN, &mut q);
    assert_eq!(q.pending_len(), 0);
    s.on_scroll_event(-30.0, &mut q);
    assert_eq!(s.tick(&q.drain(), GEOMETRY).unwrap().sample.raw_offset, 0.0);
}
