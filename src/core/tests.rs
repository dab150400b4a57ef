//! Core domain: unit tests for session, gate, and time formatting.

use super::resources::{GameplayPaused, GateStatus, ServicesGate};
use super::timing::format_run_time;

#[test]
fn test_format_run_time_rounding_offset() {
    // 12,201 ms + 9 ms = 12,210 ms -> 00:12:21. The offset is load-bearing
    // for leaderboard display equality.
    assert_eq!(format_run_time(12_201), "00:12:21");
}

#[test]
fn test_format_run_time_fields() {
    assert_eq!(format_run_time(0), "00:00:00");
    // 61,500 ms + 9 -> 1 min, 1 s, 50 cs
    assert_eq!(format_run_time(61_500), "01:01:50");
    // the offset can carry into the seconds field
    assert_eq!(format_run_time(59_995), "01:00:00");
}

#[test]
fn test_gameplay_paused_sources() {
    let mut paused = GameplayPaused::default();
    assert!(!paused.is_paused());

    paused.pause("menu");
    paused.pause("cutscene");
    assert!(paused.is_paused());

    paused.unpause("menu");
    assert!(paused.is_paused());
    paused.unpause("cutscene");
    assert!(!paused.is_paused());
}

#[test]
fn test_services_gate_ready() {
    let mut gate = ServicesGate::default();
    assert_eq!(gate.poll(0.1), GateStatus::Waiting);
    gate.mark_ready();
    assert_eq!(gate.poll(0.1), GateStatus::Ready);
    // resolved once, stays resolved
    assert_eq!(gate.poll(100.0), GateStatus::Ready);
}

#[test]
fn test_services_gate_times_out_to_degraded() {
    let mut gate = ServicesGate::with_timeout(1.0);
    assert_eq!(gate.poll(0.5), GateStatus::Waiting);
    assert_eq!(gate.poll(0.6), GateStatus::Degraded);
    // late readiness does not flip an already-degraded gate
    gate.mark_ready();
    assert_eq!(gate.poll(0.1), GateStatus::Degraded);
}
