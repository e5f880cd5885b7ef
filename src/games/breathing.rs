//! Box-breathing pacer.
//!
//! Cycles through inhale, hold, exhale, hold, each taking a quarter of
//! the configured cycle length. The pacer is driven by the caller's
//! clock through [`BreathingPacer::tick`], which keeps it testable and
//! independent of any timer framework.

use std::time::{Duration, Instant};

/// One phase of the breathing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreathPhase {
    Inhale,
    HoldIn,
    Exhale,
    HoldOut,
}

impl BreathPhase {
    pub fn next(self) -> Self {
        match self {
            BreathPhase::Inhale => BreathPhase::HoldIn,
            BreathPhase::HoldIn => BreathPhase::Exhale,
            BreathPhase::Exhale => BreathPhase::HoldOut,
            BreathPhase::HoldOut => BreathPhase::Inhale,
        }
    }

    /// On-screen guidance text for the phase.
    pub fn label(self) -> &'static str {
        match self {
            BreathPhase::Inhale => "↑ Breathe In ↑",
            BreathPhase::HoldIn => "• Hold In •",
            BreathPhase::Exhale => "↓ Breathe Out ↓",
            BreathPhase::HoldOut => "• Hold Out •",
        }
    }
}

/// Preset cycle lengths offered in the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreathingPace {
    /// 12 second cycle
    Fast,
    /// 16 second cycle
    Normal,
    /// 20 second cycle
    Slow,
}

impl BreathingPace {
    pub fn cycle(self) -> Duration {
        match self {
            BreathingPace::Fast => Duration::from_secs(12),
            BreathingPace::Normal => Duration::from_secs(16),
            BreathingPace::Slow => Duration::from_secs(20),
        }
    }
}

/// Drives the breathing cycle from an external clock.
#[derive(Debug)]
pub struct BreathingPacer {
    cycle: Duration,
    phase: BreathPhase,
    running: bool,
    phase_started: Option<Instant>,
}

impl BreathingPacer {
    pub fn new(pace: BreathingPace) -> Self {
        Self {
            cycle: pace.cycle(),
            phase: BreathPhase::Inhale,
            running: false,
            phase_started: None,
        }
    }

    pub fn phase(&self) -> BreathPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn cycle_length(&self) -> Duration {
        self.cycle
    }

    /// Each phase lasts a quarter of the cycle.
    pub fn phase_length(&self) -> Duration {
        self.cycle / 4
    }

    /// Changes the pace without restarting; the current phase keeps its
    /// start time and finishes at the new length.
    pub fn set_pace(&mut self, pace: BreathingPace) {
        self.cycle = pace.cycle();
    }

    /// Starts (or restarts) a session from the inhale phase.
    pub fn start(&mut self, now: Instant) {
        self.running = true;
        self.phase = BreathPhase::Inhale;
        self.phase_started = Some(now);
    }

    pub fn pause(&mut self) {
        self.running = false;
        self.phase_started = None;
    }

    /// Advances the cycle to where it should be at `now`.
    ///
    /// Returns the current phase. A long gap between ticks advances
    /// through as many phases as have elapsed.
    pub fn tick(&mut self, now: Instant) -> BreathPhase {
        if !self.running {
            return self.phase;
        }
        let Some(mut started) = self.phase_started else {
            self.phase_started = Some(now);
            return self.phase;
        };

        let length = self.phase_length();
        while now.duration_since(started) >= length {
            started += length;
            self.phase = self.phase.next();
        }
        self.phase_started = Some(started);
        self.phase
    }

    /// Time left in the current phase, zero when paused.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.phase_started {
            Some(started) if self.running => self
                .phase_length()
                .saturating_sub(now.duration_since(started)),
            _ => Duration::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_cycle_in_order() {
        assert_eq!(BreathPhase::Inhale.next(), BreathPhase::HoldIn);
        assert_eq!(BreathPhase::HoldIn.next(), BreathPhase::Exhale);
        assert_eq!(BreathPhase::Exhale.next(), BreathPhase::HoldOut);
        assert_eq!(BreathPhase::HoldOut.next(), BreathPhase::Inhale);
    }

    #[test]
    fn quarter_cycle_advances_one_phase() {
        let mut pacer = BreathingPacer::new(BreathingPace::Normal);
        let start = Instant::now();
        pacer.start(start);

        assert_eq!(pacer.tick(start + Duration::from_secs(3)), BreathPhase::Inhale);
        assert_eq!(pacer.tick(start + Duration::from_secs(4)), BreathPhase::HoldIn);
        assert_eq!(pacer.tick(start + Duration::from_secs(8)), BreathPhase::Exhale);
        assert_eq!(pacer.tick(start + Duration::from_secs(12)), BreathPhase::HoldOut);
        assert_eq!(pacer.tick(start + Duration::from_secs(16)), BreathPhase::Inhale);
    }

    #[test]
    fn a_long_gap_skips_multiple_phases() {
        let mut pacer = BreathingPacer::new(BreathingPace::Fast);
        let start = Instant::now();
        pacer.start(start);

        // Fast cycle is 12s, so 3s per phase: 10s in we are in phase 4.
        assert_eq!(pacer.tick(start + Duration::from_secs(10)), BreathPhase::HoldOut);
    }

    #[test]
    fn paused_pacer_holds_its_phase() {
        let mut pacer = BreathingPacer::new(BreathingPace::Normal);
        let start = Instant::now();
        pacer.start(start);
        pacer.tick(start + Duration::from_secs(4));
        pacer.pause();

        assert_eq!(pacer.tick(start + Duration::from_secs(60)), BreathPhase::HoldIn);
        assert_eq!(pacer.remaining(start + Duration::from_secs(60)), Duration::ZERO);
    }

    #[test]
    fn restart_returns_to_inhale() {
        let mut pacer = BreathingPacer::new(BreathingPace::Normal);
        let start = Instant::now();
        pacer.start(start);
        pacer.tick(start + Duration::from_secs(4));

        pacer.start(start + Duration::from_secs(5));
        assert_eq!(pacer.phase(), BreathPhase::Inhale);
    }

    #[test]
    fn presets_map_to_cycle_lengths() {
        assert_eq!(BreathingPace::Fast.cycle(), Duration::from_secs(12));
        assert_eq!(BreathingPace::Normal.cycle(), Duration::from_secs(16));
        assert_eq!(BreathingPace::Slow.cycle(), Duration::from_secs(20));
        assert_eq!(
            BreathingPacer::new(BreathingPace::Slow).phase_length(),
            Duration::from_secs(5)
        );
    }
}
