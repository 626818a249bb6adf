use serde::{Deserialize, Serialize};

/// Number of ticks in each phase. One tick per second in the real exercise,
/// so every phase lasts four seconds (the 4-4-4 technique).
pub const TICKS_PER_PHASE: u8 = 4;

/// Progress gained per tick, in percent.
pub const PROGRESS_PER_TICK: u8 = 25;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum BreathPhase {
    Inhale,
    Hold,
    Exhale,
}

impl Default for BreathPhase {
    fn default() -> Self {
        BreathPhase::Inhale
    }
}

impl BreathPhase {
    /// The phase that follows this one. The order is fixed and cyclic.
    pub fn next(self) -> Self {
        match self {
            BreathPhase::Inhale => BreathPhase::Hold,
            BreathPhase::Hold => BreathPhase::Exhale,
            BreathPhase::Exhale => BreathPhase::Inhale,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BreathPhase::Inhale => "Inhale",
            BreathPhase::Hold => "Hold",
            BreathPhase::Exhale => "Exhale",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BreathingState {
    pub phase: BreathPhase,
    /// Percentage through the current phase, always within 0..=100.
    pub progress: u8,
    pub completed_breaths: u32,
    pub active: bool,
    /// Ticks elapsed in the current phase, 0..TICKS_PER_PHASE.
    #[serde(skip)]
    pub tick_index: u8,
}

impl Default for BreathingState {
    fn default() -> Self {
        Self {
            phase: BreathPhase::Inhale,
            progress: 0,
            completed_breaths: 0,
            active: false,
            tick_index: 0,
        }
    }
}

impl BreathingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset counters and begin a fresh session at the top of an inhale.
    pub fn begin_session(&mut self) {
        *self = Self {
            active: true,
            ..Self::default()
        };
    }

    /// Freeze in place. Phase and progress keep their last values so a
    /// display can show where the exercise paused.
    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance by one tick. Returns true when this tick closed out a full
    /// Inhale -> Hold -> Exhale cycle.
    ///
    /// At a phase boundary progress snaps back to 0 for the new phase, so
    /// observers see Inhale 25/50/75, then Hold 0 on the boundary tick.
    pub fn advance_tick(&mut self) -> bool {
        if !self.active {
            return false;
        }

        self.tick_index += 1;

        if self.tick_index >= TICKS_PER_PHASE {
            self.tick_index = 0;
            self.progress = 0;
            let finished_cycle = self.phase == BreathPhase::Exhale;
            self.phase = self.phase.next();
            if finished_cycle {
                self.completed_breaths += 1;
            }
            finished_cycle
        } else {
            self.progress = (self.tick_index * PROGRESS_PER_TICK).min(100);
            false
        }
    }
}
