//! Timing scenarios for the breathing controller, run under a paused tokio
//! clock so phase boundaries land deterministically.

use std::time::Duration;

use serenity::breathing::{BreathPhase, BreathingController, BreathingEvent, BreathingState};
use tokio::sync::broadcast::{error::TryRecvError, Receiver};

const TICK: Duration = Duration::from_millis(10);

/// Wait for the next `Tick` event, returning the state it carried along with
/// any `CycleCompleted` seen on the way.
async fn next_tick(events: &mut Receiver<BreathingEvent>) -> (BreathingState, bool) {
    let mut cycle_completed = false;
    loop {
        match events.recv().await.expect("event channel closed") {
            BreathingEvent::Tick(state) => return (state, cycle_completed),
            BreathingEvent::CycleCompleted(_) => cycle_completed = true,
        }
    }
}

async fn collect_ticks(events: &mut Receiver<BreathingEvent>, count: usize) -> Vec<BreathingState> {
    let mut states = Vec::with_capacity(count);
    for _ in 0..count {
        let (state, _) = next_tick(events).await;
        states.push(state);
    }
    states
}

#[tokio::test(start_paused = true)]
async fn twelve_ticks_walk_one_full_cycle() {
    let controller = BreathingController::with_tick_interval(TICK);
    let mut events = controller.subscribe();
    controller.start().await.unwrap();

    let states = collect_ticks(&mut events, 12).await;

    // After 4 ticks: entering Hold with progress reset.
    assert_eq!(states[3].phase, BreathPhase::Hold);
    assert_eq!(states[3].progress, 0);
    assert_eq!(states[3].completed_breaths, 0);

    // After 8 ticks: entering Exhale.
    assert_eq!(states[7].phase, BreathPhase::Exhale);
    assert_eq!(states[7].progress, 0);

    // After 12 ticks: back at Inhale with one breath banked.
    assert_eq!(states[11].phase, BreathPhase::Inhale);
    assert_eq!(states[11].completed_breaths, 1);

    controller.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn progress_never_leaves_bounds() {
    let controller = BreathingController::with_tick_interval(TICK);
    let mut events = controller.subscribe();
    controller.start().await.unwrap();

    for state in collect_ticks(&mut events, 40).await {
        assert!(state.progress <= 100);
    }

    controller.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn phase_order_never_skips() {
    let controller = BreathingController::with_tick_interval(TICK);
    let mut events = controller.subscribe();
    controller.start().await.unwrap();

    let mut previous = BreathPhase::Inhale;
    for state in collect_ticks(&mut events, 36).await {
        assert!(
            state.phase == previous || state.phase == previous.next(),
            "phase jumped from {previous:?} to {:?}",
            state.phase
        );
        previous = state.phase;
    }

    controller.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn cycle_completed_fires_once_per_cycle() {
    let controller = BreathingController::with_tick_interval(TICK);
    let mut events = controller.subscribe();
    controller.start().await.unwrap();

    // 36 ticks close out exactly 3 cycles, so 39 events arrive in total and
    // the last one is the third completion.
    let mut ticks = 0;
    let mut completions = 0;
    for _ in 0..39 {
        match events.recv().await.expect("event channel closed") {
            BreathingEvent::Tick(_) => ticks += 1,
            BreathingEvent::CycleCompleted(state) => {
                completions += 1;
                assert_eq!(state.completed_breaths, completions);
            }
        }
    }
    assert_eq!(ticks, 36);
    assert_eq!(completions, 3);
    assert_eq!(controller.snapshot().await.completed_breaths, 3);

    controller.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn no_events_after_stop_returns() {
    let controller = BreathingController::with_tick_interval(TICK);
    let mut events = controller.subscribe();
    controller.start().await.unwrap();

    collect_ticks(&mut events, 2).await;
    let frozen = controller.stop().await.unwrap();

    assert!(!frozen.active);
    assert_eq!(frozen.phase, BreathPhase::Inhale);
    assert_eq!(frozen.progress, 50);

    // The tick that would have fired next must not arrive.
    tokio::time::sleep(TICK * 5).await;
    assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));

    // And the frozen state stays put.
    assert_eq!(controller.snapshot().await, frozen);
}

#[tokio::test(start_paused = true)]
async fn reset_restores_initial_state() {
    let controller = BreathingController::with_tick_interval(TICK);
    let mut events = controller.subscribe();
    controller.start().await.unwrap();

    // Let one full cycle complete, then reset.
    collect_ticks(&mut events, 12).await;
    let state = controller.reset().await.unwrap();

    assert_eq!(state, BreathingState::default());
    assert!(!state.active);
    assert_eq!(state.completed_breaths, 0);

    // Drain the cycle-completed event buffered from before the reset, then
    // confirm the ticker stays silent.
    while events.try_recv().is_ok() {}
    tokio::time::sleep(TICK * 5).await;
    assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));
}

#[tokio::test(start_paused = true)]
async fn start_while_active_is_a_no_op() {
    let controller = BreathingController::with_tick_interval(TICK);
    let mut events = controller.subscribe();
    controller.start().await.unwrap();

    collect_ticks(&mut events, 3).await;
    let before = controller.snapshot().await;

    let after = controller.start().await.unwrap();
    assert_eq!(after, before);
    assert!(after.active);

    // The ticker keeps its cadence: the next tick continues from where the
    // exercise was, rather than restarting the phase.
    let (state, _) = next_tick(&mut events).await;
    assert_eq!(state.phase, BreathPhase::Hold);
    assert_eq!(state.progress, 0);

    controller.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn restart_after_stop_begins_a_fresh_session() {
    let controller = BreathingController::with_tick_interval(TICK);
    let mut events = controller.subscribe();

    controller.start().await.unwrap();
    collect_ticks(&mut events, 14).await;
    controller.stop().await.unwrap();

    // Drain anything buffered before the restart.
    while events.try_recv().is_ok() {}

    let restarted = controller.start().await.unwrap();
    assert!(restarted.active);
    assert_eq!(restarted.completed_breaths, 0);
    assert_eq!(restarted.phase, BreathPhase::Inhale);
    assert_eq!(restarted.progress, 0);

    let (state, _) = next_tick(&mut events).await;
    assert_eq!(state.phase, BreathPhase::Inhale);
    assert_eq!(state.progress, 25);

    controller.stop().await.unwrap();
}
