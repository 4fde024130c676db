//! Breathing timer behaviour across every preset.

use std::time::Duration;

use mindwell::breathing::{BreathPhase, BreathingTimer, TickDriver, TickOutcome, PRESETS};
use tokio::sync::mpsc;

#[test]
fn test_every_preset_finishes_after_its_cycles() {
    for exercise in PRESETS {
        let mut timer = BreathingTimer::new(exercise.clone());
        timer.toggle();

        let mut ticks = 0;
        loop {
            ticks += 1;
            if timer.tick() == TickOutcome::Finished {
                break;
            }
            assert!(ticks <= exercise.cycle_seconds() * exercise.cycles, "{}", exercise.id);
        }

        assert_eq!(ticks, exercise.cycle_seconds() * exercise.cycles, "{}", exercise.id);
        assert!(timer.is_stopped());
        assert_eq!(timer.tick(), TickOutcome::Idle);
    }
}

#[test]
fn test_zero_length_phases_never_shown() {
    for exercise in PRESETS {
        let mut timer = BreathingTimer::new(exercise.clone());
        timer.toggle();
        while timer.is_active() {
            let phase = timer.phase();
            assert!(exercise.duration_of(phase) > 0, "{} entered {:?}", exercise.id, phase);
            assert!(timer.remaining() >= 1);
            assert!(timer.remaining() <= exercise.duration_of(phase));
            timer.tick();
        }
    }
}

#[test]
fn test_one_cycle_returns_to_inhale() {
    for exercise in PRESETS {
        let mut timer = BreathingTimer::new(exercise.clone());
        timer.toggle();
        for _ in 0..exercise.cycle_seconds() {
            timer.tick();
        }
        assert_eq!(timer.phase(), BreathPhase::Inhale, "{}", exercise.id);
        assert_eq!(timer.cycle(), 1, "{}", exercise.id);
        assert_eq!(timer.remaining(), exercise.inhale, "{}", exercise.id);
    }
}

#[test]
fn test_pause_then_resume_changes_nothing() {
    let mut timer = BreathingTimer::new(PRESETS[1].clone());
    timer.toggle();
    for _ in 0..6 {
        timer.tick();
    }
    let before = timer.clone();

    timer.toggle();
    assert!(!timer.is_active());
    assert!(!timer.is_stopped());
    assert_eq!(timer.tick(), TickOutcome::Idle);
    timer.toggle();

    assert_eq!(timer, before);
}

#[test]
fn test_selecting_a_preset_resets() {
    let mut timer = BreathingTimer::new(PRESETS[0].clone());
    timer.toggle();
    timer.tick();

    timer.select(PRESETS[2].clone());

    assert!(timer.is_stopped());
    assert_eq!(timer.exercise().id, PRESETS[2].id);
    assert_eq!(timer.cycle(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_driver_ticks_once_per_period() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut driver = TickDriver::new();
    driver.start(tx, "tick", Duration::from_secs(1));

    tokio::time::sleep(Duration::from_millis(3500)).await;
    let mut received = 0;
    while rx.try_recv().is_ok() {
        received += 1;
    }
    assert_eq!(received, 3);

    driver.stop();
    assert!(!driver.is_running());
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_restart_replaces_previous_task() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut driver = TickDriver::new();
    driver.start(tx.clone(), 1u8, Duration::from_secs(1));
    driver.start(tx, 2u8, Duration::from_secs(1));

    tokio::time::sleep(Duration::from_millis(2500)).await;
    let mut seen = Vec::new();
    while let Ok(value) = rx.try_recv() {
        seen.push(value);
    }
    assert_eq!(seen, vec![2, 2]);
}
