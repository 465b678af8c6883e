//! Brick Pong entry point
//!
//! Runs the game headless: input comes from an optional replay script, audio
//! and rendering are logged. Windowing and real audio backends plug in through
//! the `InputSource`, `AudioSink` and `Renderer` traits.
//!
//! Usage:
//!   RUST_LOG=info brick-pong --script replay.json --frames 3600

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;

use brick_pong::audio::LogAudio;
use brick_pong::frame_loop::{FrameLoop, NoInput, ScriptedInput};
use brick_pong::renderer::LogRenderer;
use brick_pong::sim::GameState;
use brick_pong::Settings;

#[derive(Parser, Debug)]
#[command(about = "Pong/Breakout simulation, run headless", version)]
struct Args {
    /// JSON settings file; missing fields keep their defaults
    #[arg(long)]
    settings: Option<PathBuf>,
    /// JSON input script: a list of { "frame": n, "event": ... } entries
    #[arg(long)]
    script: Option<PathBuf>,
    /// Stop after this many frames if nobody quits first
    #[arg(long, default_value_t = 3600)]
    frames: u64,
    /// RNG seed for the serve direction; defaults to the clock
    #[arg(long)]
    seed: Option<u64>,
    /// Silence sound effects; music changes are still logged
    #[arg(long)]
    mute: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::info!("Brick Pong (headless) starting...");

    let settings = match &args.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });
    log::info!("Game initialized with seed: {}", seed);

    let mut audio = LogAudio::new();
    audio.set_muted(args.mute);

    let state = GameState::new(settings, seed);
    let summary = match &args.script {
        Some(path) => {
            let input = ScriptedInput::load(path)?;
            FrameLoop::new(state, input, audio, LogRenderer::new()).run(args.frames)
        }
        None => FrameLoop::new(state, NoInput, audio, LogRenderer::new()).run(args.frames),
    };

    log::info!(
        "Finished after {} frames: score {}, game over: {}, quit: {}",
        summary.frames,
        summary.score,
        summary.gameover,
        summary.quit
    );
    Ok(())
}
