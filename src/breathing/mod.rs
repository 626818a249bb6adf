pub mod controller;
pub mod state;

pub use controller::{BreathingController, BreathingEvent};
pub use state::{BreathPhase, BreathingState, PROGRESS_PER_TICK, TICKS_PER_PHASE};
