use super::*;

fn scheduled(count: usize, now: f64) -> RevealState {
    RevealState::new(RevealTiming::default())
        .begin()
        .schedule_rects(count, now)
}

#[test]
fn starts_idle_without_frames() {
    let s = RevealState::new(RevealTiming::default());
    assert_eq!(s.phase(), Phase::Idle);
    assert!(!s.wants_frame());
    assert_eq!(s.start_time(), None);
}

#[test]
fn zero_rects_stay_idle() {
    let s = scheduled(0, 10.0);
    assert_eq!(s.phase(), Phase::Idle);
    assert!(!s.wants_frame());
    let s = s.advance(1_000_000.0);
    assert_eq!(s.phase(), Phase::Idle);
    assert_eq!(s.revealed(), 0);
}

#[test]
fn waits_for_settle_delay() {
    let s = scheduled(3, 100.0);
    assert_eq!(s.phase(), Phase::Scheduled { settle_until: 250.0 });
    assert!(s.wants_frame());

    let s = s.advance(249.0);
    assert!(matches!(s.phase(), Phase::Scheduled { .. }));
    assert_eq!(s.revealed(), 0);

    let s = s.advance(250.0);
    assert_eq!(s.phase(), Phase::Running { started_at: 250.0 });
    assert_eq!(s.start_time(), Some(250.0));
    // Offset 0 is due as soon as the window opens.
    assert_eq!(s.revealed(), 1);
}

#[test]
fn reveals_follow_offsets_then_finish() {
    let s = scheduled(4, 0.0).advance(150.0);
    assert_eq!(s.revealed(), 1);

    let s = s.advance(150.0 + 1300.0);
    assert_eq!(s.revealed(), 2);
    let s = s.advance(150.0 + 3800.0);
    assert_eq!(s.revealed(), 4);
    assert!(matches!(s.phase(), Phase::Running { .. }));

    let s = s.advance(150.0 + 5000.0);
    assert_eq!(s.phase(), Phase::Done);
    assert_eq!(s.revealed(), 4);
    assert!(!s.wants_frame());
}

#[test]
fn late_first_frame_finishes_in_one_step() {
    let s = scheduled(10, 0.0).advance(150.0);
    let s = s.advance(150.0 + 60_000.0);
    assert_eq!(s.phase(), Phase::Done);
    assert_eq!(s.revealed(), 10);
}

#[test]
fn clock_going_backwards_never_hides() {
    let s = scheduled(4, 0.0).advance(150.0).advance(150.0 + 2600.0);
    assert_eq!(s.revealed(), 3);
    let s = s.advance(150.0 + 10.0);
    assert_eq!(s.revealed(), 3);
}

#[test]
fn done_is_terminal() {
    let s = scheduled(2, 0.0).advance(150.0).advance(6000.0);
    assert_eq!(s.phase(), Phase::Done);
    let again = s.clone().advance(1e9);
    assert_eq!(again, s);
}

#[test]
fn begin_resets_a_run_in_flight() {
    let s = scheduled(4, 0.0).advance(150.0).advance(2000.0);
    assert!(s.revealed() > 0);
    let s = s.begin();
    assert_eq!(s.phase(), Phase::Collecting);
    assert_eq!(s.revealed(), 0);
    assert!(s.schedule().is_empty());
}

#[test]
fn schedule_rects_outside_collecting_is_ignored() {
    let s = RevealState::new(RevealTiming::default()).schedule_rects(5, 0.0);
    assert_eq!(s.phase(), Phase::Idle);
    assert!(s.schedule().is_empty());
}
