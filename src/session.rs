//! The timing session: stopwatch, double-points toggle, scoring preset and
//! leaderboard, plus the gestures that move between them.
//!
//! A round runs `Idle -> Running <-> Paused` and ends with a commit, a discard
//! or a reset. Every round end puts the clock back to `Idle` at zero and turns
//! double points off. Commit and discard do nothing while the clock reads zero.

use crate::clock::{Clock, ClockPhase};
use crate::config::DEFAULT_PRESET;
use crate::leaderboard::{EntryId, Leaderboard};
use crate::scoring::{apply_modifier, points_for, ScoringPreset};
use crate::team::Team;
use crate::time_label::format_elapsed;
use log::{debug, info};
use std::rc::Rc;

/// Every state change the UI can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Pause,
    ToggleRunning,
    Reset,
    Discard,
    ToggleDouble,
    Commit(Team),
    RemoveEntry(Team, EntryId),
    ResetAll,
    SetPreset(ScoringPreset),
    Tick(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceSession {
    clock: Clock,
    // Shared between session snapshots; copied only when an entry changes.
    leaderboard: Rc<Leaderboard>,
    double_points: bool,
    preset: ScoringPreset,
}

impl Default for RaceSession {
    fn default() -> Self {
        Self::new(DEFAULT_PRESET)
    }
}

impl RaceSession {
    pub fn new(preset: ScoringPreset) -> Self {
        Self {
            clock: Clock::new(),
            leaderboard: Rc::new(Leaderboard::new()),
            double_points: false,
            preset,
        }
    }

    pub fn start(&mut self) {
        self.clock.start();
    }

    pub fn pause(&mut self) {
        self.clock.pause();
    }

    /// Start when stopped, pause when running.
    pub fn toggle_running(&mut self) {
        if self.clock.is_running() {
            self.clock.pause();
        } else {
            self.clock.start();
        }
    }

    pub fn reset(&mut self) {
        self.end_round();
    }

    /// Throw away the current time. Returns `false` when there was nothing to discard.
    pub fn discard(&mut self) -> bool {
        if !self.can_commit() {
            debug!("Discard ignored: no elapsed time");
            return false;
        }
        debug!("Discarding {}", self.elapsed_label());
        self.end_round();
        true
    }

    pub fn toggle_double(&mut self) {
        self.double_points = !self.double_points;
    }

    /// Score the current time for `team` and start a fresh round.
    ///
    /// Returns the new entry's id, or `None` if the clock reads zero.
    pub fn commit_to_team(&mut self, team: Team) -> Option<EntryId> {
        if !self.can_commit() {
            debug!("Commit to {} ignored: no elapsed time", team);
            return None;
        }
        let points = self.display_points();
        let label = self.elapsed_label();
        info!(
            "{} scores {} ({}{})",
            team,
            points,
            label,
            if self.double_points { ", doubled" } else { "" }
        );
        let id = Rc::make_mut(&mut self.leaderboard).add_entry(team, points, label);
        self.end_round();
        Some(id)
    }

    pub fn remove_entry(&mut self, team: Team, id: EntryId) {
        if self.leaderboard.entries(team).iter().any(|e| e.id == id) {
            Rc::make_mut(&mut self.leaderboard).remove_entry(team, id);
        }
    }

    pub fn reset_all(&mut self) {
        if !self.leaderboard.is_empty() {
            Rc::make_mut(&mut self.leaderboard).reset_all();
        }
    }

    pub fn set_preset(&mut self, preset: ScoringPreset) {
        if preset != self.preset {
            info!("Scoring preset changed to {}", preset);
            self.preset = preset;
        }
    }

    /// Scheduling port: advance the clock by `delta_ms` if it is running.
    pub fn on_tick(&mut self, delta_ms: u32) -> bool {
        self.clock.on_tick(delta_ms)
    }

    /// Apply one UI action. Returns whether the session changed.
    pub fn apply(&mut self, action: Action) -> bool {
        // Ticks arrive every few milliseconds; skip the snapshot for them.
        if let Action::Tick(delta_ms) = action {
            return delta_ms > 0 && self.on_tick(delta_ms);
        }
        let before = self.clone();
        match action {
            Action::Start => self.start(),
            Action::Pause => self.pause(),
            Action::ToggleRunning => self.toggle_running(),
            Action::Reset => self.reset(),
            Action::Discard => {
                self.discard();
            }
            Action::ToggleDouble => self.toggle_double(),
            Action::Commit(team) => {
                self.commit_to_team(team);
            }
            Action::RemoveEntry(team, id) => self.remove_entry(team, id),
            Action::ResetAll => self.reset_all(),
            Action::SetPreset(preset) => self.set_preset(preset),
            Action::Tick(_) => {}
        }
        *self != before
    }

    fn end_round(&mut self) {
        self.clock.reset();
        self.double_points = false;
    }

    pub fn elapsed(&self) -> u32 {
        self.clock.elapsed()
    }

    pub fn elapsed_label(&self) -> String {
        format_elapsed(self.clock.elapsed())
    }

    pub fn phase(&self) -> ClockPhase {
        self.clock.phase()
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Commit and discard are only meaningful once some time has elapsed.
    pub fn can_commit(&self) -> bool {
        self.clock.elapsed() > 0
    }

    pub fn double_points(&self) -> bool {
        self.double_points
    }

    pub fn preset(&self) -> ScoringPreset {
        self.preset
    }

    /// Points the current time would earn if committed now.
    pub fn display_points(&self) -> u32 {
        apply_modifier(points_for(self.clock.elapsed(), self.preset), self.double_points)
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Shared handle to the leaderboard, for consumers that keep it around.
    pub fn shared_leaderboard(&self) -> Rc<Leaderboard> {
        Rc::clone(&self.leaderboard)
    }
}
