//! Integration tests for br-sim.

use std::cell::Cell;
use std::time::{Duration, Instant};

use br_core::{SimRng, Step, Vec2};
use br_motion::{Agent, Arena, MotionEngine, SpecularReflection};

use crate::{
    run_fixed, run_realtime, NoopObserver, OnStep, RealtimeOptions, RunBuilder, RunSummary,
    StepEvent, StepObserver,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Records every callback for later inspection.
#[derive(Default)]
struct Recorder {
    start:  Option<StepEvent>,
    events: Vec<StepEvent>,
    end:    Option<RunSummary>,
}

impl StepObserver for Recorder {
    fn on_run_start(&mut self, start: &StepEvent) {
        self.start = Some(*start);
    }
    fn on_step(&mut self, event: &StepEvent) {
        self.events.push(*event);
    }
    fn on_run_end(&mut self, summary: &RunSummary) {
        self.end = Some(*summary);
    }
}

fn default_runner(seed: u64) -> crate::Runner {
    RunBuilder::new(100.0, 2.0, 2.0).seed(seed).build().unwrap()
}

// ── RunBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::SimError;

    #[test]
    fn builds_at_arena_center() {
        let runner = default_runner(1);
        assert_eq!(runner.agent.position, Vec2::new(50.0, 50.0));
        assert_eq!(runner.agent.radius, 2.0);
        assert_eq!(runner.agent.speed, 2.0);
        assert_eq!(runner.engine.arena, Arena::new(100.0));
    }

    #[test]
    fn same_seed_same_initial_heading() {
        let a = default_runner(77);
        let b = default_runner(77);
        assert_eq!(a.agent.heading, b.agent.heading);
    }

    #[test]
    fn rejects_non_positive_parameters() {
        for (size, radius, speed) in [
            (0.0, 1.0, 1.0),
            (-10.0, 1.0, 1.0),
            (100.0, 0.0, 1.0),
            (100.0, 1.0, -2.0),
            (f64::NAN, 1.0, 1.0),
            (100.0, 1.0, f64::INFINITY),
        ] {
            let err = RunBuilder::new(size, radius, speed).build().err();
            assert!(
                matches!(err, Some(SimError::Parameter(_))),
                "({size}, {radius}, {speed}) → {err:?}",
            );
        }
    }

    #[test]
    fn rejects_radius_of_half_arena_or_more() {
        let err = RunBuilder::new(10.0, 5.0, 1.0).build().err();
        assert!(matches!(err, Some(SimError::RadiusTooLarge { .. })));
        assert!(RunBuilder::new(10.0, 4.99, 1.0).seed(0).build().is_ok());
    }

    #[test]
    fn rejects_start_outside_arena() {
        let err = RunBuilder::new(100.0, 2.0, 1.0)
            .start_position(Vec2::new(99.0, 50.0))
            .build()
            .err();
        assert!(matches!(err, Some(SimError::StartOutsideArena { .. })));
    }

    #[test]
    fn rejects_non_finite_heading() {
        let err = RunBuilder::new(100.0, 2.0, 1.0).heading(f64::NAN).build().err();
        assert!(matches!(err, Some(SimError::InvalidHeading(_))));
    }

    #[test]
    fn explicit_start_and_heading() {
        let runner = RunBuilder::new(100.0, 2.0, 1.0)
            .seed(3)
            .start_position(Vec2::new(10.0, 20.0))
            .heading(-std::f64::consts::PI)
            .build()
            .unwrap();
        assert_eq!(runner.agent.position, Vec2::new(10.0, 20.0));
        assert!((runner.agent.heading - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn policy_swap_keeps_settings() {
        let runner = RunBuilder::new(50.0, 1.0, 3.0)
            .seed(9)
            .policy(SpecularReflection)
            .build()
            .unwrap();
        assert_eq!(runner.engine.arena.size, 50.0);
        assert_eq!(runner.agent.speed, 3.0);
    }

    #[test]
    fn time_step_validation() {
        assert_eq!(crate::validate_time_step(0.0).unwrap(), 0.0);
        assert!(crate::validate_time_step(0.5).is_ok());
        assert!(crate::validate_time_step(-0.1).is_err());
        assert!(crate::validate_time_step(f64::NAN).is_err());

        assert!(RealtimeOptions::new(0.5, 60.0).validate().is_ok());
        assert!(RealtimeOptions::new(0.0, 60.0).validate().is_err());
        assert!(RealtimeOptions::new(0.5, 0.0).validate().is_err());
        assert!(RealtimeOptions::new(0.5, 1.0).target_fps(-1.0).validate().is_err());
        assert!(RealtimeOptions::new(0.5, 1.0).target_fps(0.0).validate().is_ok());
    }
}

// ── Fixed-step-count mode ─────────────────────────────────────────────────────

#[cfg(test)]
mod fixed_tests {
    use super::*;

    #[test]
    fn length_is_steps_plus_one() {
        for steps in [1u64, 2, 10, 1_000] {
            let mut runner = default_runner(steps);
            let start = runner.agent.position;
            let t = runner.run_fixed(steps, 0.5, &mut NoopObserver);
            assert_eq!(t.len() as u64, steps + 1);
            assert_eq!(t.steps() as u64, steps);
            assert_eq!(t.start(), start);
            assert_eq!(t.last(), runner.agent.position);
        }
    }

    #[test]
    fn zero_steps_is_idempotent() {
        let mut runner = default_runner(5);
        let before = runner.agent.clone();
        let mut rec = Recorder::default();
        let t = runner.run_fixed(0, 0.5, &mut rec);

        assert_eq!(t.positions(), &[before.position]);
        // Even a zero-step trajectory holds its start position.
        assert_eq!(t.len(), 1);
        assert_eq!(t.steps(), 0);
        assert_eq!(t.last(), t.start());
        assert_eq!(runner.agent, before);
        assert!(rec.events.is_empty());
        assert_eq!(rec.end.unwrap().steps, 0);
    }

    #[test]
    fn every_position_contained() {
        let mut runner = RunBuilder::new(30.0, 1.5, 4.0).seed(12).build().unwrap();
        let t = runner.run_fixed(5_000, 1.0, &mut NoopObserver);
        for p in &t {
            assert!((1.5..=28.5).contains(&p.x), "{p}");
            assert!((1.5..=28.5).contains(&p.y), "{p}");
        }
        assert!(t.collisions() > 0, "a 5000-step walk in a small box must hit a wall");
    }

    #[test]
    fn free_steps_have_constant_length() {
        let mut runner = default_runner(21);
        let mut rec = Recorder::default();
        let t = runner.run_fixed(500, 0.5, &mut rec);

        for (i, e) in rec.events.iter().enumerate() {
            if !e.collided {
                let d = t[i].distance(t[i + 1]);
                assert!((d - 1.0).abs() < 1e-9, "step {i}: moved {d}");
            }
        }
    }

    #[test]
    fn heading_changes_only_on_collision() {
        let mut runner = RunBuilder::new(20.0, 1.0, 3.0).seed(4).build().unwrap();
        let mut rec = Recorder::default();
        runner.run_fixed(2_000, 1.0, &mut rec);

        let mut prev = rec.start.unwrap().heading;
        for e in &rec.events {
            if !e.collided {
                assert_eq!(e.heading, prev, "heading moved without wall contact at {}", e.step);
            }
            prev = e.heading;
        }
    }

    #[test]
    fn observer_sees_every_step_in_order() {
        let mut runner = default_runner(8);
        let mut rec = Recorder::default();
        let t = runner.run_fixed(25, 0.5, &mut rec);

        let start = rec.start.unwrap();
        assert_eq!(start.step, Step::ZERO);
        assert_eq!(start.position, t.start());
        assert!(!start.collided);

        assert_eq!(rec.events.len(), 25);
        for (i, e) in rec.events.iter().enumerate() {
            assert_eq!(e.step, Step(i as u64 + 1));
            assert_eq!(e.position, t[i + 1]);
            assert!((e.time_secs - 0.5 * (i + 1) as f64).abs() < 1e-12);
        }

        let end = rec.end.unwrap();
        assert_eq!(end.steps, 25);
        assert_eq!(end.collisions, t.collisions());
        assert!((end.sim_secs - 12.5).abs() < 1e-12);
        assert!(!end.cancelled);
    }

    #[test]
    fn deterministic_given_seed() {
        let a = default_runner(99).run_fixed(1_000, 0.5, &mut NoopObserver);
        let b = default_runner(99).run_fixed(1_000, 0.5, &mut NoopObserver);
        assert_eq!(a, b);
    }

    #[test]
    fn consecutive_runs_continue_from_current_state() {
        let mut runner = default_runner(6);
        let first = runner.run_fixed(10, 0.5, &mut NoopObserver);
        let second = runner.run_fixed(10, 0.5, &mut NoopObserver);
        assert_eq!(second.start(), first.last());
    }

    #[test]
    fn free_function_borrows_agent() {
        let arena = Arena::new(100.0);
        let engine = MotionEngine::new(arena);
        let mut rng = SimRng::new(1);
        let mut agent = Agent::placed(Vec2::new(98.0, 50.0), 0.0, 2.0, 50.0);

        let t = run_fixed(&engine, &mut agent, &mut rng, 1, 1.0, &mut NoopObserver);
        assert_eq!(t.len(), 2);
        assert_eq!(t[1], Vec2::new(98.0, 50.0));
        assert_eq!(t.collisions(), 1);
    }

    #[test]
    fn trajectory_tail() {
        let mut runner = default_runner(2);
        let t = runner.run_fixed(10, 0.5, &mut NoopObserver);
        assert_eq!(t.tail(3), &t.positions()[8..]);
        assert_eq!(t.tail(100).len(), 11);
        assert_eq!(t.clone().into_positions().len(), 11);
    }
}

// ── Wall-clock-bounded mode ───────────────────────────────────────────────────

#[cfg(test)]
mod realtime_tests {
    use super::*;

    #[test]
    fn stops_when_cancelled() {
        let mut runner = default_runner(3);
        let polls = Cell::new(0u32);
        let opts = RealtimeOptions::new(0.5, 60.0).target_fps(0.0);

        let summary = runner.run_realtime(
            &opts,
            || {
                polls.set(polls.get() + 1);
                polls.get() > 5
            },
            &mut NoopObserver,
        );

        assert!(summary.cancelled);
        assert_eq!(summary.steps, 5);
        assert_eq!(polls.get(), 6, "cancellation is polled once per iteration");
    }

    #[test]
    fn cancelled_before_first_step() {
        let mut runner = default_runner(3);
        let before = runner.agent.clone();
        let opts = RealtimeOptions::new(0.5, 60.0);
        let summary = runner.run_realtime(&opts, || true, &mut NoopObserver);
        assert_eq!(summary.steps, 0);
        assert!(summary.cancelled);
        assert_eq!(runner.agent, before);
    }

    #[test]
    fn stops_when_budget_elapses() {
        let mut runner = default_runner(4);
        let opts = RealtimeOptions::new(0.5, 0.1);
        let started = Instant::now();
        let summary = runner.run_realtime(&opts, || false, &mut NoopObserver);

        assert!(!summary.cancelled);
        assert!(summary.steps >= 1);
        assert!(summary.elapsed >= Duration::from_millis(100));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn frame_cap_throttles_steps() {
        // 0.2 s at 20 fps → at most ~4 frames (plus one for timer slack).
        let mut runner = default_runner(4);
        let opts = RealtimeOptions::new(0.5, 0.2).target_fps(20.0);
        let summary = runner.run_realtime(&opts, || false, &mut NoopObserver);
        assert!(summary.steps >= 1);
        assert!(summary.steps <= 5, "ran {} steps", summary.steps);
    }

    #[test]
    fn on_step_callback_sees_committed_state() {
        let mut runner = default_runner(10);
        let mut seen: Vec<(Vec2, bool)> = Vec::new();
        let polls = Cell::new(0u32);
        let opts = RealtimeOptions::new(1.0, 60.0).target_fps(0.0);

        let summary = runner.run_realtime(
            &opts,
            || {
                polls.set(polls.get() + 1);
                polls.get() > 50
            },
            &mut OnStep(|e: &StepEvent| seen.push((e.position, e.collided))),
        );

        assert_eq!(summary.steps, 50);
        assert_eq!(seen.len(), 50);
        assert_eq!(seen.last().unwrap().0, runner.agent.position);
        assert_eq!(summary.collisions, seen.iter().filter(|(_, c)| *c).count() as u64);
    }

    #[test]
    fn matches_fixed_mode_for_same_seed() {
        // Same RNG stream → same positions, whichever loop drives the engine.
        let fixed = default_runner(31).run_fixed(40, 0.5, &mut NoopObserver);

        let mut runner = default_runner(31);
        let mut positions = vec![runner.agent.position];
        let polls = Cell::new(0u32);
        runner.run_realtime(
            &RealtimeOptions::new(0.5, 60.0).target_fps(0.0),
            || {
                polls.set(polls.get() + 1);
                polls.get() > 40
            },
            &mut OnStep(|e: &StepEvent| positions.push(e.position)),
        );

        assert_eq!(fixed.positions(), positions.as_slice());
    }

    #[test]
    fn free_function_with_specular_policy() {
        let arena = Arena::new(10.0);
        let engine = MotionEngine::with_policy(arena, SpecularReflection);
        let mut rng = SimRng::new(0);
        let mut agent = Agent::placed(Vec2::new(5.0, 5.0), 0.3, 0.5, 4.0);
        let polls = Cell::new(0u32);

        let summary = run_realtime(
            &engine,
            &mut agent,
            &mut rng,
            &RealtimeOptions::new(1.0, 60.0).target_fps(0.0),
            || {
                polls.set(polls.get() + 1);
                polls.get() > 100
            },
            &mut NoopObserver,
        );
        assert_eq!(summary.steps, 100);
        assert!(summary.collisions > 0);
        assert!(agent.is_contained(&arena));
    }
}

// ── FrameLimiter ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod pacing_tests {
    use super::*;
    use crate::FrameLimiter;

    #[test]
    fn interval_from_fps() {
        let l = FrameLimiter::new(60.0);
        let i = l.interval().unwrap();
        assert!((i.as_secs_f64() - 1.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn zero_or_invalid_fps_is_uncapped() {
        assert_eq!(FrameLimiter::new(0.0), FrameLimiter::uncapped());
        assert_eq!(FrameLimiter::new(-5.0).interval(), None);
        assert_eq!(FrameLimiter::new(f64::NAN).interval(), None);
        assert_eq!(FrameLimiter::uncapped().wait(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn wait_fills_the_frame() {
        let l = FrameLimiter::new(50.0); // 20 ms
        let start = Instant::now();
        l.wait(start);
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn overrun_frame_does_not_sleep() {
        let l = FrameLimiter::new(1000.0); // 1 ms
        let start = Instant::now();
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(l.remaining(start), Duration::ZERO);
        assert_eq!(l.wait(start), Duration::ZERO);
    }
}
