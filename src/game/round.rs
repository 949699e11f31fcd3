use super::constants::*;
use super::cue::{announcement, Cue};
use super::params::GameParams;
use super::ring::{Marker, Ring};
use super::session::{Phase, Session};
use super::spin::SpinPlan;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;

/// Visual treatment of the timer while counting down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownStyle {
    /// Large zooming digits with a tick per step.
    Emphasized,
    /// Small fixed digits, silent.
    Plain,
}

/// Everything the round loop needs from the page.
///
/// The only suspension points of the loop are `sleep_ms`, `play_to_end` and
/// `unlock_audio`; implementations must always resolve them, even when the
/// underlying platform call fails.
#[allow(async_fn_in_trait)]
pub trait Stage {
    fn place_marker(&self, marker: &Marker);

    fn has_clip(&self, cue: Cue) -> bool;
    fn play_and_forget(&self, cue: Cue);
    async fn play_to_end(&self, cue: Cue);
    async fn unlock_audio(&self);

    async fn sleep_ms(&self, ms: u32);

    fn show_count(&self, remaining: u32, style: CountdownStyle);
    fn clear_count(&self);
    fn show_ready(&self);

    /// Start an eased rotation of the needle to `angle_deg`.
    fn rotate_needle(&self, angle_deg: f64, duration_ms: u32);
    /// Drop the rotation transition so later moves are instant.
    fn settle_needle(&self);
    /// Snap the needle back to 0 degrees with no transition.
    fn reset_needle(&self);

    fn set_start_enabled(&self, enabled: bool);
    fn set_fullscreen(&self, on: bool);
}

/// The spinner controller: owns the ring, the session state and the stage,
/// and runs the countdown -> spin -> announce loop.
pub struct Spinner<S: Stage> {
    stage: S,
    ring: Ring,
    params: GameParams,
    session: RefCell<Session>,
    rng: RefCell<StdRng>,
}

impl<S: Stage> Spinner<S> {
    pub fn new(stage: S, params: GameParams) -> Self {
        let ring = Ring::new();
        for marker in ring.markers() {
            stage.place_marker(marker);
        }
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            stage,
            ring,
            params,
            session: RefCell::new(Session::default()),
            rng: RefCell::new(rng),
        }
    }

    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    pub fn stage(&self) -> &S {
        &self.stage
    }

    /// Snapshot of the session state.
    pub fn session(&self) -> Session {
        self.session.borrow().clone()
    }

    #[inline]
    fn is_live(&self, epoch: u64) -> bool {
        self.session.borrow().is_live(epoch)
    }

    #[inline]
    fn enter(&self, epoch: u64, phase: Phase) -> bool {
        self.session.borrow_mut().enter(epoch, phase)
    }

    /// Run a whole session: initial countdown, then spin/announce/countdown
    /// rounds until `stop` is called. Returns at once if a session is active.
    pub async fn start(&self) {
        let Some(epoch) = self.session.borrow_mut().begin() else {
            log::debug!("[round] start ignored, session already active");
            return;
        };
        log::info!("[round] session {} starting", epoch);
        self.stage.set_start_enabled(false);
        self.stage.set_fullscreen(true);
        self.stage.unlock_audio().await;

        if !self.countdown(epoch, self.params.initial_countdown).await {
            return;
        }
        self.session.borrow_mut().first_countdown = false;

        while self.is_live(epoch) {
            self.spin(epoch).await;
            if !self.enter(epoch, Phase::InterRoundCountdown) {
                break;
            }
            self.countdown(epoch, self.params.round_countdown).await;
        }
        log::debug!("[round] session {} loop exited", epoch);
    }

    /// End the session. Safe to call at any time; in-flight waits and clips
    /// finish on their own and the loop notices at its next boundary.
    pub fn stop(&self) {
        let (was_active, rounds, last, from_deg) = {
            let mut session = self.session.borrow_mut();
            let from_deg = session.rotation_deg;
            (session.end(), session.rounds, session.last_landing, from_deg)
        };
        log::debug!("[round] needle reset from {:.2}deg", from_deg);
        self.stage.reset_needle();
        self.stage.show_ready();
        self.stage.set_start_enabled(true);
        self.stage.set_fullscreen(false);
        if was_active {
            log::info!("[round] stopped after {} round(s), last marker {:?}", rounds, last);
        }
    }

    /// Count `seconds` down on the timer. Returns false if the session stopped
    /// before the count finished; the display is left untouched in that case.
    async fn countdown(&self, epoch: u64, seconds: u32) -> bool {
        let style = if self.session.borrow().first_countdown {
            CountdownStyle::Emphasized
        } else {
            CountdownStyle::Plain
        };
        for remaining in (1..=seconds).rev() {
            if !self.is_live(epoch) {
                return false;
            }
            self.stage.show_count(remaining, style);
            if style == CountdownStyle::Emphasized {
                self.stage.play_and_forget(Cue::Tick);
            }
            self.stage.sleep_ms(COUNTDOWN_STEP_MS).await;
        }
        if !self.is_live(epoch) {
            return false;
        }
        self.stage.clear_count();
        true
    }

    /// One spin: whoosh, eased rotation, time-based wait, decode, announce.
    async fn spin(&self, epoch: u64) {
        if !self.session.borrow_mut().claim_spin() {
            log::debug!("[spin] already spinning");
            return;
        }
        self.enter(epoch, Phase::Spinning);
        self.stage.play_and_forget(Cue::Whoosh);

        let plan = SpinPlan::sample(&mut *self.rng.borrow_mut());
        self.session.borrow_mut().rotation_deg = plan.target_deg;
        self.stage.rotate_needle(plan.target_deg, SPIN_DURATION_MS);
        self.stage.sleep_ms(SPIN_DURATION_MS).await;

        // A newer session owns the needle now.
        if self.session.borrow().epoch != epoch {
            return;
        }
        self.stage.settle_needle();

        let marker = self.ring.landed(plan.target_deg).clone();
        {
            let mut session = self.session.borrow_mut();
            session.last_landing = Some(marker.index);
            session.rounds += 1;
        }
        log::info!(
            "[spin] {} turns -> {:.2}deg, marker {}: {} {}",
            plan.turns,
            plan.target_deg,
            marker.index,
            marker.body_part,
            marker.color
        );

        self.enter(epoch, Phase::Announcing);
        self.announce(&marker).await;
        self.session.borrow_mut().release_spin(epoch);
    }

    /// Play body part then color, with a short gap. A cue with no clip ends
    /// the announcement early.
    async fn announce(&self, marker: &Marker) {
        for (i, cue) in announcement(marker).into_iter().enumerate() {
            if i > 0 {
                self.stage.sleep_ms(ANNOUNCE_GAP_MS).await;
            }
            if !self.stage.has_clip(cue) {
                log::error!("[announce] missing audio for {:?} (marker {})", cue, marker.index);
                return;
            }
            self.stage.play_to_end(cue).await;
        }
    }
}
