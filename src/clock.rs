//! Stopwatch state.
//!
//! The clock never schedules anything itself. Whoever drives it calls
//! [`Clock::on_tick`] at a fixed period while it is running; outside of
//! `Running` ticks are ignored.

use log::debug;

/// Where the stopwatch is in a timing round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockPhase {
    #[default]
    Idle,
    Running,
    Paused,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clock {
    elapsed_ms: u32,
    phase: ClockPhase,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        if self.phase == ClockPhase::Running {
            return;
        }
        debug!("Clock started at {} ms", self.elapsed_ms);
        self.phase = ClockPhase::Running;
    }

    pub fn pause(&mut self) {
        if self.phase != ClockPhase::Running {
            return;
        }
        debug!("Clock paused at {} ms", self.elapsed_ms);
        self.phase = ClockPhase::Paused;
    }

    pub fn reset(&mut self) {
        self.phase = ClockPhase::Idle;
        self.elapsed_ms = 0;
    }

    /// Advance by `delta_ms` if running. Returns whether time moved.
    pub fn on_tick(&mut self, delta_ms: u32) -> bool {
        if self.phase != ClockPhase::Running {
            return false;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
        true
    }

    #[inline]
    pub fn elapsed(&self) -> u32 {
        self.elapsed_ms
    }

    #[inline]
    pub fn phase(&self) -> ClockPhase {
        self.phase
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == ClockPhase::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TICK_STEP_MS;

    #[test]
    fn new_clock_is_idle_at_zero() {
        let clock = Clock::new();
        assert_eq!(clock.phase(), ClockPhase::Idle);
        assert_eq!(clock.elapsed(), 0);
    }

    #[test]
    fn ticks_only_count_while_running() {
        let mut clock = Clock::new();
        assert!(!clock.on_tick(TICK_STEP_MS));
        assert_eq!(clock.elapsed(), 0);

        clock.start();
        for _ in 0..95 {
            assert!(clock.on_tick(TICK_STEP_MS));
        }
        assert_eq!(clock.elapsed(), 950);

        clock.pause();
        assert_eq!(clock.phase(), ClockPhase::Paused);
        assert!(!clock.on_tick(TICK_STEP_MS));
        assert_eq!(clock.elapsed(), 950);
    }

    #[test]
    fn start_and_pause_are_idempotent() {
        let mut clock = Clock::new();
        clock.start();
        clock.on_tick(10);
        clock.start();
        assert_eq!(clock.phase(), ClockPhase::Running);
        assert_eq!(clock.elapsed(), 10);

        clock.pause();
        clock.pause();
        assert_eq!(clock.phase(), ClockPhase::Paused);

        // Pausing an idle clock leaves it idle.
        let mut idle = Clock::new();
        idle.pause();
        assert_eq!(idle.phase(), ClockPhase::Idle);
    }

    #[test]
    fn resume_continues_from_paused_time() {
        let mut clock = Clock::new();
        clock.start();
        clock.on_tick(500);
        clock.pause();
        clock.start();
        clock.on_tick(500);
        assert_eq!(clock.elapsed(), 1_000);
    }

    #[test]
    fn reset_stops_and_zeroes() {
        let mut clock = Clock::new();
        clock.start();
        clock.on_tick(1_230);
        clock.reset();
        assert_eq!(clock.phase(), ClockPhase::Idle);
        assert_eq!(clock.elapsed(), 0);
        assert!(!clock.on_tick(10));
    }

    #[test]
    fn elapsed_saturates() {
        let mut clock = Clock::new();
        clock.start();
        clock.on_tick(u32::MAX - 5);
        clock.on_tick(10);
        assert_eq!(clock.elapsed(), u32::MAX);
    }
}
