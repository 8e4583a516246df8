//! Terminal runner (default binary).
//!
//! Owns the terminal, the fixed-rate tick loop and the high score file.
//! Logs go to `--log-file` when given, since the screen belongs to the renderer.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use blockfall::core::{GameSnapshot, GameState};
use blockfall::input::{handle_key_event, is_reset_high_score, should_quit};
use blockfall::store::{HighScoreTracker, JsonFileStore};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

#[derive(Debug, Parser)]
#[command(version, about = "Falling-block puzzle game for the terminal")]
struct Cli {
    #[arg(long, help = "Seed for piece selection (random when omitted)")]
    seed: Option<u64>,

    #[arg(long, default_value = "blockfall_scores.json", help = "Where the high score is kept")]
    score_file: PathBuf,

    #[arg(long, help = "Reset the stored high score to 0 before starting")]
    reset_high_score: bool,

    #[arg(long, help = "Write logs to this file (RUST_LOG overrides the default filter)")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let mut scores = HighScoreTracker::open(JsonFileStore::new(&cli.score_file));
    if cli.reset_high_score {
        scores.reset();
    }

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, score_file = %cli.score_file.display(), best = scores.best(), "starting");
    let mut game = GameState::new(seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &mut scores);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!(error = %err, "failed to restore terminal");
    }
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("blockfall=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run(
    term: &mut TerminalRenderer,
    game: &mut GameState,
    scores: &mut HighScoreTracker<JsonFileStore>,
) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let tick_duration = Duration::from_millis(game.config().tick_ms());
    let mut last_tick = Instant::now();

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        snap.high_score = scores.best();
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!(score = game.score(), "quit");
                        return Ok(());
                    }
                    if game.show_help() && is_reset_high_score(key) {
                        scores.reset();
                    } else if let Some(command) = handle_key_event(key) {
                        game.apply_command(command);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            // Game over zeroes the score; keep the final one for the log line.
            let before = game.score();
            let summary = game.tick();
            if summary.game_over {
                info!(score = before, best = scores.best(), "game over");
            }
            scores.observe(game.score());
        }
    }
}
