//! brownian — a single robot doing a random walk in a square arena.
//!
//! Reads `config.yaml` (written with defaults on first run), then either
//! pre-computes a fixed number of steps and plays them back at 30 fps, or steps
//! live against the wall clock and redraws the terminal every frame.
//!
//! ```text
//! brownian                          # settings from ./config.yaml
//! brownian --mode realtime --seed 7 # type q + Enter to stop early
//! ```

mod render;

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, warn};

use br_config::{Mode, SimSettings, load_settings};
use br_core::Vec2;
use br_output::{CsvWriter, TrajectoryOutputObserver};
use br_sim::{
    FrameLimiter, NoopObserver, RealtimeOptions, RunBuilder, RunSummary, Runner, StepEvent,
    StepObserver, Trajectory, validate_time_step,
};

use render::{CLEAR, Canvas, trail_window};

// ── Constants ─────────────────────────────────────────────────────────────────

const FIXED_TRAIL:    usize = 100;
const PLAYBACK_FPS:   f64   = 30.0;
const REALTIME_TRAIL: usize = 500;
const CANVAS_ROWS:    usize = 25;
const REALTIME_DIR:   &str  = "realtime";

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about = "Brownian robot random walk", long_about = None)]
struct Args {
    /// Settings file; created with defaults if missing
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Override the run mode: fixed or realtime
    #[arg(short, long)]
    mode: Option<Mode>,

    /// Override the fixed-mode step count
    #[arg(long)]
    steps: Option<u64>,

    /// Override the realtime wall-clock budget in seconds
    #[arg(long)]
    duration: Option<f64>,

    /// Override the RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Fixed mode: print only the final frame instead of replaying the run
    #[arg(long)]
    no_playback: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

impl Args {
    fn apply(&self, settings: &mut SimSettings) {
        if let Some(mode) = self.mode {
            settings.mode = mode;
        }
        if let Some(steps) = self.steps {
            settings.steps = steps;
        }
        if let Some(duration) = self.duration {
            settings.duration = duration;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
    }
}

// ── Live terminal view ────────────────────────────────────────────────────────

/// Redraws the arena after every step and forwards events to the optional
/// CSV observer.
struct LiveView {
    canvas: Canvas,
    trail:  VecDeque<Vec2>,
    output: Option<TrajectoryOutputObserver<CsvWriter>>,
}

impl LiveView {
    fn new(canvas: Canvas, output: Option<TrajectoryOutputObserver<CsvWriter>>) -> Self {
        Self {
            canvas,
            trail: VecDeque::with_capacity(REALTIME_TRAIL + 1),
            output,
        }
    }

    fn remember(&mut self, p: Vec2) {
        if self.trail.len() == REALTIME_TRAIL {
            self.trail.pop_front();
        }
        self.trail.push_back(p);
    }
}

impl StepObserver for LiveView {
    fn on_run_start(&mut self, start: &StepEvent) {
        self.remember(start.position);
        if let Some(out) = self.output.as_mut() {
            out.on_run_start(start);
        }
    }

    fn on_step(&mut self, event: &StepEvent) {
        self.remember(event.position);
        let status = format!(
            "{}  t={:.1}s  pos {}  {}   (q + Enter to quit)",
            event.step,
            event.time_secs,
            event.position,
            if event.collided { "BUMP" } else { "    " },
        );
        let frame = self.canvas.frame(self.trail.iter().copied(), event.position, &status);
        let mut stdout = io::stdout().lock();
        // A closed terminal is not worth aborting the run over.
        let _ = write!(stdout, "{CLEAR}{frame}");
        let _ = stdout.flush();

        if let Some(out) = self.output.as_mut() {
            out.on_step(event);
        }
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        if let Some(out) = self.output.as_mut() {
            out.on_run_end(summary);
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn csv_observer(dir: PathBuf) -> Result<TrajectoryOutputObserver<CsvWriter>> {
    let writer = CsvWriter::new(&dir)
        .with_context(|| format!("cannot open output directory {}", dir.display()))?;
    info!("writing trajectory to {}", dir.display());
    Ok(TrajectoryOutputObserver::new(writer))
}

fn report_output_error(obs: &mut TrajectoryOutputObserver<CsvWriter>) {
    if let Some(e) = obs.take_error() {
        error!("output error: {e}");
    }
}

/// Polls a flag set by a background thread that watches stdin for `q`.
fn spawn_quit_watcher() -> Arc<AtomicBool> {
    let flag = Arc::new(AtomicBool::new(false));
    let setter = Arc::clone(&flag);
    let spawned = thread::Builder::new()
        .name("quit-watcher".into())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(l) if l.trim().eq_ignore_ascii_case("q") => {
                        setter.store(true, Ordering::Relaxed);
                        break;
                    }
                    Ok(_) => {}
                    Err(_) => break,
                }
            }
        });
    if let Err(e) = spawned {
        warn!("cannot watch stdin, run will stop at the duration limit: {e}");
    }
    flag
}

// ── Modes ─────────────────────────────────────────────────────────────────────

/// Play the pre-computed trajectory back frame by frame, with a trail that
/// grows to `FIXED_TRAIL` points.
fn replay(canvas: &Canvas, trajectory: &Trajectory) {
    let limiter = FrameLimiter::new(PLAYBACK_FPS);
    let positions = trajectory.positions();
    let mut stdout = io::stdout().lock();

    for (i, &p) in positions.iter().enumerate() {
        let frame_start = Instant::now();
        let status = format!("Brownian motion: step {i}/{}  pos {p}", trajectory.steps());
        let frame = canvas.frame(trail_window(positions, i, FIXED_TRAIL).iter().copied(), p, &status);
        // Stop quietly if the terminal went away.
        if write!(stdout, "{CLEAR}{frame}").and_then(|()| stdout.flush()).is_err() {
            return;
        }
        limiter.wait(frame_start);
    }
}

fn run_fixed_mode(settings: &SimSettings, runner: &mut Runner, playback: bool) -> Result<()> {
    let time_step = validate_time_step(settings.time_step)?;
    info!("fixed mode: {} steps, dt={time_step}", settings.steps);

    let trajectory = if settings.save_output {
        let mut obs = csv_observer(settings.output_path.clone())?;
        let t = runner.run_fixed(settings.steps, time_step, &mut obs);
        report_output_error(&mut obs);
        t
    } else {
        runner.run_fixed(settings.steps, time_step, &mut NoopObserver)
    };

    info!(
        "done: {} positions, {} wall contacts, end {}",
        trajectory.len(),
        trajectory.collisions(),
        trajectory.last(),
    );

    let canvas = Canvas::new(settings.arena_size, CANVAS_ROWS);
    if playback {
        replay(&canvas, &trajectory);
    }
    let status = format!(
        "Brownian motion: {} steps, {} collisions, start {} end {}",
        trajectory.steps(),
        trajectory.collisions(),
        trajectory.start(),
        trajectory.last(),
    );
    let prefix = if playback { CLEAR } else { "" };
    print!(
        "{prefix}{}",
        canvas.frame(trajectory.tail(FIXED_TRAIL).iter().copied(), trajectory.last(), &status)
    );
    Ok(())
}

fn run_realtime_mode(settings: &SimSettings, runner: &mut Runner) -> Result<()> {
    let opts = RealtimeOptions::new(settings.time_step, settings.duration)
        .target_fps(settings.target_fps);
    opts.validate()?;
    info!(
        "realtime mode: up to {}s at {} fps, dt={}",
        opts.max_duration, opts.target_fps, opts.time_step,
    );

    let output = if settings.save_output {
        Some(csv_observer(settings.output_path.join(REALTIME_DIR))?)
    } else {
        None
    };
    let mut view = LiveView::new(Canvas::new(settings.arena_size, CANVAS_ROWS), output);
    let quit = spawn_quit_watcher();

    let summary = runner.run_realtime(&opts, || quit.load(Ordering::Relaxed), &mut view);

    if let Some(obs) = view.output.as_mut() {
        report_output_error(obs);
    }
    println!();
    info!(
        "{} after {} steps ({:.2}s wall, {:.1}s simulated), {} collisions",
        if summary.cancelled { "stopped by user" } else { "time limit reached" },
        summary.steps,
        summary.elapsed.as_secs_f64(),
        summary.sim_secs,
        summary.collisions,
    );
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.debug { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    env_logger::Builder::from_default_env().filter_level(level).init();

    let mut settings = load_settings(&args.config);
    args.apply(&mut settings);
    info!(
        "mode={} arena={} radius={} speed={} seed={}",
        settings.mode,
        settings.arena_size,
        settings.robot_radius,
        settings.speed,
        settings.seed.map_or_else(|| "entropy".to_owned(), |s| s.to_string()),
    );

    let mut runner = RunBuilder::new(settings.arena_size, settings.robot_radius, settings.speed)
        .maybe_seed(settings.seed)
        .build()
        .context("invalid simulation settings")?;

    match settings.mode {
        Mode::Fixed    => run_fixed_mode(&settings, &mut runner, !args.no_playback),
        Mode::Realtime => run_realtime_mode(&settings, &mut runner),
    }
}
