//! Guided breathing timer.
//!
//! [`BreathingTimer`] is a pure state machine advanced one second at a time
//! by [`BreathingTimer::tick`]. [`TickDriver`] owns the tokio task that
//! produces those ticks; aborting it is how a stopped or unmounted timer
//! guarantees no further ticks arrive.

use std::borrow::Cow;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

pub use crate::models::Difficulty;
use crate::models::BreathingPattern;

/// Rest after each exhale for patterns served by the backend, which only
/// carry inhale, hold and exhale.
pub const SERVER_REST_SECONDS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BreathPhase {
    #[default]
    Inhale,
    Hold,
    Exhale,
    Rest,
}

impl BreathPhase {
    pub fn next(&self) -> Self {
        match self {
            BreathPhase::Inhale => BreathPhase::Hold,
            BreathPhase::Hold => BreathPhase::Exhale,
            BreathPhase::Exhale => BreathPhase::Rest,
            BreathPhase::Rest => BreathPhase::Inhale,
        }
    }

    pub fn instruction(&self) -> &'static str {
        match self {
            BreathPhase::Inhale => "Breathe in",
            BreathPhase::Hold => "Hold",
            BreathPhase::Exhale => "Breathe out",
            BreathPhase::Rest => "Rest",
        }
    }
}

/// Phase durations, in seconds, of one breathing pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreathingExercise {
    pub id: Cow<'static, str>,
    pub name: Cow<'static, str>,
    pub description: Cow<'static, str>,
    pub inhale: u32,
    pub hold: u32,
    pub exhale: u32,
    pub rest: u32,
    /// Cycles after which the exercise finishes on its own. 0 means open-ended.
    pub cycles: u32,
    pub difficulty: Difficulty,
}

impl BreathingExercise {
    pub fn duration_of(&self, phase: BreathPhase) -> u32 {
        match phase {
            BreathPhase::Inhale => self.inhale,
            BreathPhase::Hold => self.hold,
            BreathPhase::Exhale => self.exhale,
            BreathPhase::Rest => self.rest,
        }
    }

    pub fn cycle_seconds(&self) -> u32 {
        self.inhale + self.hold + self.exhale + self.rest
    }

    /// Pattern label such as `4-7-8-0`.
    pub fn pattern(&self) -> String {
        format!("{}-{}-{}-{}", self.inhale, self.hold, self.exhale, self.rest)
    }
}

/// Built-in patterns, used until (or unless) the backend serves its own.
pub const PRESETS: [BreathingExercise; 4] = [
    BreathingExercise {
        id: Cow::Borrowed("box"),
        name: Cow::Borrowed("Box breathing"),
        description: Cow::Borrowed("Equal counts to steady your focus"),
        inhale: 4,
        hold: 4,
        exhale: 4,
        rest: 4,
        cycles: 8,
        difficulty: Difficulty::Beginner,
    },
    BreathingExercise {
        id: Cow::Borrowed("478"),
        name: Cow::Borrowed("4-7-8 relaxation"),
        description: Cow::Borrowed("A long exhale that helps you wind down"),
        inhale: 4,
        hold: 7,
        exhale: 8,
        rest: 0,
        cycles: 4,
        difficulty: Difficulty::Intermediate,
    },
    BreathingExercise {
        id: Cow::Borrowed("calm"),
        name: Cow::Borrowed("Calm breathing"),
        description: Cow::Borrowed("Gentle breaths with a longer exhale"),
        inhale: 4,
        hold: 0,
        exhale: 6,
        rest: 2,
        cycles: 10,
        difficulty: Difficulty::Beginner,
    },
    BreathingExercise {
        id: Cow::Borrowed("energizing"),
        name: Cow::Borrowed("Energizing breath"),
        description: Cow::Borrowed("Quick rhythm to lift your energy"),
        inhale: 3,
        hold: 1,
        exhale: 3,
        rest: 0,
        cycles: 12,
        difficulty: Difficulty::Advanced,
    },
];

impl From<BreathingPattern> for BreathingExercise {
    fn from(pattern: BreathingPattern) -> Self {
        Self {
            id: Cow::Owned(pattern.id),
            name: Cow::Owned(pattern.name),
            description: Cow::Owned(pattern.description),
            inhale: pattern.inhale_duration,
            hold: pattern.hold_duration,
            exhale: pattern.exhale_duration,
            rest: SERVER_REST_SECONDS,
            cycles: pattern.cycles,
            difficulty: pattern.difficulty,
        }
    }
}

/// Server patterns converted for the timer, or the presets when there are
/// none.
pub fn exercises_or_presets(patterns: &[BreathingPattern]) -> Vec<BreathingExercise> {
    if patterns.is_empty() {
        PRESETS.to_vec()
    } else {
        patterns.iter().cloned().map(BreathingExercise::from).collect()
    }
}

/// What a single tick changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer is not running.
    Idle,
    /// Still counting down the current phase.
    Counting,
    /// Moved into a new phase.
    PhaseChanged(BreathPhase),
    /// The final cycle completed; the timer has stopped itself.
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreathingTimer {
    exercise: BreathingExercise,
    phase: BreathPhase,
    cycle: u32,
    /// Seconds left in the current phase; 0 when stopped.
    remaining: u32,
    active: bool,
}

impl BreathingTimer {
    pub fn new(exercise: BreathingExercise) -> Self {
        Self {
            exercise,
            phase: BreathPhase::Inhale,
            cycle: 0,
            remaining: 0,
            active: false,
        }
    }

    pub fn exercise(&self) -> &BreathingExercise {
        &self.exercise
    }

    pub fn phase(&self) -> BreathPhase {
        self.phase
    }

    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Stopped (as opposed to paused): nothing counted down yet.
    pub fn is_stopped(&self) -> bool {
        !self.active && self.remaining == 0
    }

    /// Change the pattern. Resets the timer.
    pub fn select(&mut self, exercise: BreathingExercise) {
        *self = Self::new(exercise);
    }

    /// Start or pause. Starting a stopped timer loads the inhale duration.
    pub fn toggle(&mut self) {
        if self.active {
            self.active = false;
            return;
        }
        if self.exercise.cycle_seconds() == 0 {
            return;
        }
        if self.remaining == 0 {
            self.phase = BreathPhase::Inhale;
            self.remaining = self.exercise.inhale;
            if self.remaining == 0 {
                self.enter_next_phase();
            }
        }
        self.active = true;
    }

    /// Reset phase, cycle count and countdown.
    pub fn stop(&mut self) {
        self.active = false;
        self.phase = BreathPhase::Inhale;
        self.cycle = 0;
        self.remaining = 0;
    }

    /// Advance by one second.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.active {
            return TickOutcome::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining > 0 {
            return TickOutcome::Counting;
        }
        self.enter_next_phase();
        if self.exercise.cycles > 0 && self.cycle >= self.exercise.cycles {
            self.active = false;
            self.remaining = 0;
            return TickOutcome::Finished;
        }
        TickOutcome::PhaseChanged(self.phase)
    }

    /// Move to the next phase with a non-zero duration.
    fn enter_next_phase(&mut self) {
        // cycle_seconds() > 0 guarantees a non-empty phase within four steps
        for _ in 0..4 {
            self.phase = self.phase.next();
            if self.phase == BreathPhase::Inhale {
                self.cycle += 1;
            }
            self.remaining = self.exercise.duration_of(self.phase);
            if self.remaining > 0 {
                return;
            }
        }
    }
}

impl Default for BreathingTimer {
    fn default() -> Self {
        let [first, ..] = PRESETS;
        Self::new(first)
    }
}

/// Owns the periodic task feeding ticks into the event loop.
#[derive(Debug, Default)]
pub struct TickDriver {
    handle: Option<JoinHandle<()>>,
}

impl TickDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Send `message` every `period` until stopped or the receiver is gone.
    /// A previous task is aborted first.
    pub fn start<M>(&mut self, tx: UnboundedSender<M>, message: M, period: Duration)
    where
        M: Clone + Send + 'static,
    {
        self.stop();
        self.handle = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // First tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(message.clone()).is_err() {
                    break;
                }
            }
        }));
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for TickDriver {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset(id: &str) -> BreathingExercise {
        PRESETS.into_iter().find(|p| p.id == id).unwrap()
    }

    fn open_ended(mut exercise: BreathingExercise) -> BreathingExercise {
        exercise.cycles = 0;
        exercise
    }

    #[test]
    fn test_start_loads_inhale() {
        let mut timer = BreathingTimer::new(preset("box"));
        assert!(timer.is_stopped());
        timer.toggle();
        assert!(timer.is_active());
        assert_eq!(timer.phase(), BreathPhase::Inhale);
        assert_eq!(timer.remaining(), 4);
    }

    #[test]
    fn test_full_box_cycle() {
        let mut timer = BreathingTimer::new(open_ended(preset("box")));
        timer.toggle();

        let mut phases = Vec::new();
        for _ in 0..16 {
            if let TickOutcome::PhaseChanged(p) = timer.tick() {
                phases.push(p);
            }
        }
        assert_eq!(
            phases,
            vec![
                BreathPhase::Hold,
                BreathPhase::Exhale,
                BreathPhase::Rest,
                BreathPhase::Inhale
            ]
        );
        assert_eq!(timer.cycle(), 1);
        assert_eq!(timer.remaining(), 4);
    }

    #[test]
    fn test_zero_duration_phases_are_skipped() {
        let mut timer = BreathingTimer::new(open_ended(preset("calm")));
        timer.toggle();
        for _ in 0..4 {
            timer.tick();
        }
        // 4-0-6-2: hold is skipped
        assert_eq!(timer.phase(), BreathPhase::Exhale);
        assert_eq!(timer.remaining(), 6);

        for _ in 0..8 {
            timer.tick();
        }
        assert_eq!(timer.phase(), BreathPhase::Inhale);
        assert_eq!(timer.cycle(), 1);
    }

    #[test]
    fn test_cycle_counts_returns_to_inhale() {
        let exercise = open_ended(preset("478"));
        let mut timer = BreathingTimer::new(exercise.clone());
        timer.toggle();
        let seconds = exercise.cycle_seconds() * 3;
        for _ in 0..seconds {
            timer.tick();
        }
        assert_eq!(timer.cycle(), 3);
        assert_eq!(timer.phase(), BreathPhase::Inhale);
    }

    #[test]
    fn test_pause_freezes_countdown() {
        let mut timer = BreathingTimer::new(preset("box"));
        timer.toggle();
        timer.tick();
        timer.toggle();
        assert_eq!(timer.tick(), TickOutcome::Idle);
        assert_eq!(timer.remaining(), 3);

        timer.toggle();
        assert_eq!(timer.remaining(), 3);
    }

    #[test]
    fn test_stop_resets() {
        let mut timer = BreathingTimer::new(preset("energizing"));
        timer.toggle();
        for _ in 0..20 {
            timer.tick();
        }
        timer.stop();
        assert_eq!(timer.phase(), BreathPhase::Inhale);
        assert_eq!(timer.cycle(), 0);
        assert_eq!(timer.remaining(), 0);
        assert!(!timer.is_active());
    }

    #[test]
    fn test_finishes_after_target_cycles() {
        let exercise = preset("478");
        let mut timer = BreathingTimer::new(exercise.clone());
        timer.toggle();
        let mut last = TickOutcome::Idle;
        for _ in 0..exercise.cycle_seconds() * exercise.cycles {
            last = timer.tick();
        }
        assert_eq!(last, TickOutcome::Finished);
        assert!(!timer.is_active());
        assert_eq!(timer.cycle(), exercise.cycles);
    }

    fn pattern(id: &str, inhale: u32, hold: u32, exhale: u32) -> BreathingPattern {
        BreathingPattern {
            id: id.to_string(),
            name: format!("Pattern {}", id),
            description: String::new(),
            inhale_duration: inhale,
            hold_duration: hold,
            exhale_duration: exhale,
            cycles: 3,
            difficulty: Difficulty::Intermediate,
        }
    }

    #[test]
    fn test_server_pattern_gets_fixed_rest() {
        let exercise = BreathingExercise::from(pattern("deep", 5, 2, 7));
        assert_eq!(exercise.pattern(), "5-2-7-2");
        assert_eq!(exercise.cycle_seconds(), 16);
        assert_eq!(exercise.id, "deep");

        let mut timer = BreathingTimer::new(exercise);
        timer.toggle();
        for _ in 0..14 {
            timer.tick();
        }
        assert_eq!(timer.phase(), BreathPhase::Rest);
        assert_eq!(timer.remaining(), SERVER_REST_SECONDS);
    }

    #[test]
    fn test_presets_when_backend_has_none() {
        assert_eq!(exercises_or_presets(&[]), PRESETS.to_vec());

        let served = exercises_or_presets(&[pattern("a", 4, 0, 4), pattern("b", 3, 3, 3)]);
        let ids: Vec<&str> = served.iter().map(|e| e.id.as_ref()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(served.iter().all(|e| e.rest == SERVER_REST_SECONDS));
    }

    #[tokio::test(start_paused = true)]
    async fn test_driver_stop_ends_ticks() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let mut driver = TickDriver::new();
        driver.start(tx, (), Duration::from_secs(1));

        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert!(rx.recv().await.is_some());
        assert!(driver.is_running());

        driver.stop();
        assert!(!driver.is_running());
        while rx.try_recv().is_ok() {}
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }
}
