// Explicit per-page session state threaded through the round loop.

/// Where the round loop currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    InitialCountdown,
    Spinning,
    Announcing,
    InterRoundCountdown,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub active: bool,
    pub spinning: bool,
    /// Set until the first countdown of a session completes; selects the
    /// emphasized timer style and the tick cue.
    pub first_countdown: bool,
    pub phase: Phase,
    /// Bumped on every start. A task only keeps going while its epoch is current.
    pub epoch: u64,
    pub rotation_deg: f64,
    pub last_landing: Option<usize>,
    pub rounds: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            active: false,
            spinning: false,
            first_countdown: true,
            phase: Phase::Idle,
            epoch: 0,
            rotation_deg: 0.0,
            last_landing: None,
            rounds: 0,
        }
    }
}

impl Session {
    /// Open a new session. Returns its epoch, or `None` if one is running.
    pub fn begin(&mut self) -> Option<u64> {
        if self.active {
            return None;
        }
        self.epoch += 1;
        self.active = true;
        self.spinning = false;
        self.first_countdown = true;
        self.phase = Phase::InitialCountdown;
        self.rounds = 0;
        self.last_landing = None;
        Some(self.epoch)
    }

    /// Close the session. Returns whether one was running.
    pub fn end(&mut self) -> bool {
        let was_active = self.active;
        self.active = false;
        self.spinning = false;
        self.first_countdown = true;
        self.phase = Phase::Idle;
        self.rotation_deg = 0.0;
        was_active
    }

    #[inline]
    pub fn is_live(&self, epoch: u64) -> bool {
        self.active && self.epoch == epoch
    }

    /// Move to `phase` if the session identified by `epoch` is still live.
    pub fn enter(&mut self, epoch: u64, phase: Phase) -> bool {
        if self.is_live(epoch) {
            self.phase = phase;
            true
        } else {
            false
        }
    }

    /// Take the spin guard. Fails while another spin is in flight.
    pub fn claim_spin(&mut self) -> bool {
        if self.spinning {
            return false;
        }
        self.spinning = true;
        true
    }

    /// Release the spin guard taken under `epoch`; a newer session's guard is
    /// left alone.
    pub fn release_spin(&mut self, epoch: u64) {
        if self.epoch == epoch {
            self.spinning = false;
        }
    }
}
