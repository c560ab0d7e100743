// SPDX-License-Identifier: MPL-2.0
//! End-to-end behaviour of the refresh coordinator as the app drives it:
//! one request, a stream of ~16 ms frames, a wall clock.

use membership_card::domain::access::{
    generate, AccessToken, RefreshCoordinator, RefreshEvent, RefreshPhase, RefreshState,
    RefreshTimings, TokenSeed, UnixSeconds,
};
use std::time::{Duration, Instant};

const FRAME: Duration = Duration::from_millis(16);
const WALL: UnixSeconds = UnixSeconds::new(1_700_000_000);

/// Drives frames from `start` until the coordinator stops animating.
fn run_frames(
    coordinator: &mut RefreshCoordinator,
    start: Instant,
    wall: UnixSeconds,
) -> (Vec<RefreshEvent>, Vec<f32>) {
    let mut events = Vec::new();
    let mut opacities = Vec::new();
    let mut now = start;

    for _ in 0..200 {
        now += FRAME;
        events.extend(coordinator.tick(now, wall));
        opacities.push(coordinator.opacity().value());
        if !coordinator.is_animating() {
            break;
        }
    }
    (events, opacities)
}

#[test]
fn generator_appends_wall_clock_seconds_to_seed() {
    let token = generate(&AccessToken::default(), WALL);
    assert_eq!(token.as_str(), "user-id-12345-abcde-1700000000");

    let again = generate(&token, UnixSeconds::new(1_700_000_060));
    assert_eq!(again.as_str(), "user-id-12345-abcde-1700000060");
}

#[test]
fn full_cycle_fades_out_swaps_and_fades_back_in() {
    let mut coordinator = RefreshCoordinator::default();
    let start = Instant::now();

    coordinator.request_refresh(start);
    assert_eq!(coordinator.state(), RefreshState::Refreshing);
    assert!(matches!(coordinator.phase(), RefreshPhase::FadingOut { .. }));

    let (events, opacities) = run_frames(&mut coordinator, start, WALL);

    assert_eq!(events.len(), 2);
    match &events[0] {
        RefreshEvent::TokenSwapped {
            previous,
            current,
            opacity,
        } => {
            assert_eq!(previous.as_str(), "user-id-12345-abcde");
            assert_eq!(current.as_str(), "user-id-12345-abcde-1700000000");
            assert!(opacity.is_transparent());
        }
        other => panic!("expected a swap first, got {other:?}"),
    }
    assert_eq!(events[1], RefreshEvent::Completed);

    assert_eq!(coordinator.state(), RefreshState::Idle);
    assert_eq!(coordinator.token().as_str(), "user-id-12345-abcde-1700000000");
    assert!(coordinator.opacity().is_opaque());

    // Goes down to zero, then back up to one.
    let lowest = opacities.iter().copied().fold(f32::INFINITY, f32::min);
    assert_eq!(lowest, 0.0);
    assert_eq!(opacities.last().copied(), Some(1.0));
}

#[test]
fn rapid_double_request_runs_one_cycle() {
    let mut coordinator = RefreshCoordinator::default();
    let start = Instant::now();

    coordinator.request_refresh(start);
    coordinator.request_refresh(start + Duration::from_millis(5));

    let (events, _) = run_frames(&mut coordinator, start, WALL);
    let swaps = events
        .iter()
        .filter(|e| matches!(e, RefreshEvent::TokenSwapped { .. }))
        .count();
    assert_eq!(swaps, 1);
}

#[test]
fn requests_during_fade_in_are_dropped() {
    let mut coordinator = RefreshCoordinator::default();
    let start = Instant::now();

    coordinator.request_refresh(start);
    let swap_at = start + Duration::from_millis(210);
    let events = coordinator.tick(swap_at, WALL);
    assert!(matches!(events.first(), Some(RefreshEvent::TokenSwapped { .. })));
    assert!(matches!(coordinator.phase(), RefreshPhase::FadingIn { .. }));

    let token = coordinator.token().clone();
    coordinator.request_refresh(swap_at + FRAME);
    assert!(matches!(coordinator.phase(), RefreshPhase::FadingIn { .. }));
    assert_eq!(coordinator.token(), &token);
}

#[test]
fn second_cycle_after_completion_uses_new_wall_clock() {
    let mut coordinator = RefreshCoordinator::default();
    let start = Instant::now();

    coordinator.request_refresh(start);
    run_frames(&mut coordinator, start, WALL);

    let restart = start + Duration::from_secs(2);
    coordinator.request_refresh(restart);
    run_frames(&mut coordinator, restart, UnixSeconds::new(1_700_000_002));

    assert_eq!(coordinator.token().as_str(), "user-id-12345-abcde-1700000002");
}

#[test]
fn instant_timings_swap_and_complete_in_one_frame() {
    let timings = RefreshTimings {
        fade_out: Duration::ZERO,
        fade_in: Duration::ZERO,
        press_pulse: Duration::ZERO,
    };
    let seed = TokenSeed::new("seed").expect("non-blank seed");
    let mut coordinator = RefreshCoordinator::new(AccessToken::initial(seed), timings);
    let start = Instant::now();

    coordinator.request_refresh(start);
    let events = coordinator.tick(start, WALL);

    assert_eq!(events.len(), 2);
    assert_eq!(coordinator.token().as_str(), "seed-1700000000");
    assert!(!coordinator.is_animating());
}
