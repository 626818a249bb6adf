use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use log::info;
use tokio::{
    sync::{broadcast, Mutex},
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};
use tokio_util::sync::CancellationToken;

use super::BreathingState;

const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// State update pushed to subscribers. `Tick` carries the state after every
/// tick; `CycleCompleted` follows the tick that closed out a full
/// inhale-hold-exhale cycle, once per cycle.
#[derive(Debug, Clone)]
pub enum BreathingEvent {
    Tick(BreathingState),
    CycleCompleted(BreathingState),
}

/// Drives the 4-4-4 breathing exercise: a single recurring ticker advances
/// phase and progress, and a broadcast channel carries updates to whatever
/// is rendering the exercise.
#[derive(Clone)]
pub struct BreathingController {
    state: Arc<Mutex<BreathingState>>,
    ticker: Arc<Mutex<Option<TickerHandle>>>,
    events: broadcast::Sender<BreathingEvent>,
    tick_interval: Duration,
}

struct TickerHandle {
    task: JoinHandle<()>,
    cancel_token: CancellationToken,
}

impl Default for BreathingController {
    fn default() -> Self {
        Self::new()
    }
}

impl BreathingController {
    pub fn new() -> Self {
        Self::with_tick_interval(DEFAULT_TICK_INTERVAL)
    }

    /// Controller with a non-default tick length. The exercise keeps its
    /// 4-ticks-per-phase shape; only the real-time pacing changes.
    pub fn with_tick_interval(tick_interval: Duration) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            state: Arc::new(Mutex::new(BreathingState::new())),
            ticker: Arc::new(Mutex::new(None)),
            events,
            tick_interval,
        }
    }

    pub async fn snapshot(&self) -> BreathingState {
        self.state.lock().await.clone()
    }

    /// Subscribe to state updates. Each subscriber gets every `Tick` and
    /// `CycleCompleted` emitted after the point of subscription.
    pub fn subscribe(&self) -> broadcast::Receiver<BreathingEvent> {
        self.events.subscribe()
    }

    /// Begin the exercise at the top of an inhale. Calling while already
    /// active is a no-op.
    pub async fn start(&self) -> Result<BreathingState> {
        {
            let mut state = self.state.lock().await;
            if state.active {
                return Ok(state.clone());
            }
            state.begin_session();
        }

        self.spawn_ticker().await?;
        info!("breathing exercise started");
        Ok(self.snapshot().await)
    }

    /// Halt the exercise, freezing phase and progress where they are.
    /// No tick or cycle event is delivered after this returns.
    pub async fn stop(&self) -> Result<BreathingState> {
        {
            let mut state = self.state.lock().await;
            if !state.active {
                return Ok(state.clone());
            }
            state.stop();
        }

        self.cancel_ticker().await?;
        info!("breathing exercise stopped");
        Ok(self.snapshot().await)
    }

    /// Stop if needed and restore the initial state.
    pub async fn reset(&self) -> Result<BreathingState> {
        {
            let mut state = self.state.lock().await;
            state.stop();
        }
        self.cancel_ticker().await?;

        let mut state = self.state.lock().await;
        state.reset();
        info!("breathing exercise reset");
        Ok(state.clone())
    }

    async fn spawn_ticker(&self) -> Result<()> {
        let mut ticker_guard = self.ticker.lock().await;

        // A restart must never leave two tickers running; cancel and join
        // any previous one before spawning.
        if let Some(handle) = ticker_guard.take() {
            handle.cancel_token.cancel();
            handle
                .task
                .await
                .context("previous ticker task failed to join")?;
        }

        let state = self.state.clone();
        let events = self.events.clone();
        let tick_interval = self.tick_interval;
        let cancel_token = CancellationToken::new();
        let token = cancel_token.clone();

        let task = tokio::spawn(async move {
            let mut interval = time::interval(tick_interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first interval tick fires immediately; consume it so the
            // opening inhale gets a full phase worth of time.
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let (snapshot, cycle_done) = {
                            let mut guard = state.lock().await;
                            if !guard.active {
                                break;
                            }
                            let cycle_done = guard.advance_tick();
                            (guard.clone(), cycle_done)
                        };

                        let _ = events.send(BreathingEvent::Tick(snapshot.clone()));
                        if cycle_done {
                            let _ = events.send(BreathingEvent::CycleCompleted(snapshot));
                        }
                    }
                    _ = token.cancelled() => {
                        break;
                    }
                }
            }
        });

        *ticker_guard = Some(TickerHandle { task, cancel_token });
        Ok(())
    }

    async fn cancel_ticker(&self) -> Result<()> {
        if let Some(handle) = self.ticker.lock().await.take() {
            handle.cancel_token.cancel();
            handle
                .task
                .await
                .context("ticker task failed to join")?;
        }
        Ok(())
    }
}
