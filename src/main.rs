//! Duel Pong headless host
//!
//! Drives a session from an optional input script and prints what a
//! renderer would draw: a frame counter line, or one JSON snapshot per frame.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use duel_pong::Settings;
use duel_pong::platform::{Clock, FixedClock, InputScript, MonotonicClock, Session};
use duel_pong::sim::Viewpoint;

#[derive(Debug, Parser)]
#[command(name = "duel-pong", about = "Headless two-player arena Pong")]
struct Args {
    /// Settings JSON file
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Input script JSON file (timed host events)
    #[arg(long)]
    script: Option<PathBuf>,

    /// Stop after this many simulated seconds (defaults to the end of the script)
    #[arg(long)]
    duration: Option<f64>,

    /// Use the wall clock and sleep between frames instead of a fixed step
    #[arg(long)]
    realtime: bool,

    /// Print one JSON snapshot per frame
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let settings = Settings::load_or_default(args.settings.as_deref());

    let script = match &args.script {
        Some(path) => InputScript::load(path)
            .with_context(|| format!("loading input script {}", path.display()))?,
        None => InputScript::default(),
    };

    let duration = args.duration.unwrap_or_else(|| script.end_time().max(10.0));

    if args.realtime {
        let session = Session::new(MonotonicClock::new(), settings.bindings.clone())
            .with_max_frame_dt(settings.max_frame_dt);
        run(session, script, &settings, &args, duration, true)
    } else {
        let step = settings.fixed_step.unwrap_or(duel_pong::consts::SIM_DT);
        let session = Session::new(FixedClock::new(step), settings.bindings.clone())
            .with_max_frame_dt(settings.max_frame_dt);
        run(session, script, &settings, &args, duration, false)
    }
}

fn run<C: Clock>(
    mut session: Session<C>,
    mut script: InputScript,
    settings: &Settings,
    args: &Args,
    duration: f64,
    pace: bool,
) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let frame_pause =
        std::time::Duration::from_secs_f64(settings.fixed_step.unwrap_or(duel_pong::consts::SIM_DT));

    while session.is_running() && session.elapsed() < duration {
        let due = script.drain_until(session.elapsed());
        session.run_frame(&due);

        let snapshot = session.snapshot();
        if args.json {
            let view = Viewpoint::for_camera(snapshot.camera, &snapshot);
            let line = serde_json::json!({
                "frame": session.frame_count(),
                "snapshot": snapshot,
                "view": view,
            });
            writeln!(out, "{}", line)?;
        } else if settings.show_frame_counter {
            write!(
                out,
                "\rFrame: {}  Score: {} - {}  Camera: {}",
                session.frame_count(),
                snapshot.player1_score,
                snapshot.player2_score,
                snapshot.camera
            )?;
            out.flush()?;
        }

        if pace {
            std::thread::sleep(frame_pause);
        }
    }

    if settings.show_frame_counter && !args.json {
        writeln!(out)?;
    }
    let snapshot = session.snapshot();
    log::info!(
        "Final score {} - {} after {:.2}s",
        snapshot.player1_score,
        snapshot.player2_score,
        session.elapsed()
    );
    Ok(())
}
