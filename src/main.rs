//! Terminal runner (default binary).
//!
//! Sizes the board from the terminal unless told otherwise, then runs a
//! [`Session`] on its tick, polling keys in between.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};

use blocktris::core::{Engine, EngineConfig, Session};
use blocktris::input::{map_key, should_quit};
use blocktris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blocktris::types::{DEFAULT_COLUMNS, DEFAULT_ROWS};

#[derive(Debug, Parser)]
#[command(name = "blocktris", version, about = "Falling-block puzzle in the terminal")]
struct Cli {
    /// Board width in cells (defaults to what fits the terminal)
    #[arg(long)]
    columns: Option<u16>,

    /// Board height in cells (defaults to what fits the terminal)
    #[arg(long)]
    rows: Option<u16>,

    /// Seed for the shape randomizer
    #[arg(long, default_value_t = 1)]
    seed: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let view = GameView::default();

    let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
    let (fit_columns, fit_rows) = view.board_size_for(Viewport::new(width, height));
    let columns = cli.columns.unwrap_or(fit_columns.min(DEFAULT_COLUMNS * 2));
    let rows = cli.rows.unwrap_or(fit_rows.min(DEFAULT_ROWS));
    let config = EngineConfig::new(columns, rows)
        .with_context(|| format!("cannot play on a {columns}x{rows} board"))?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &view, config, cli.seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(
    term: &mut TerminalRenderer,
    view: &GameView,
    config: EngineConfig,
    seed: u32,
) -> Result<()> {
    let mut session = Session::new(Engine::with_seed(config, seed));
    session.start();

    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(session.engine(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Animations are not drawn; updates only need draining.
        session.drain_updates().for_each(drop);

        let tick_duration = Duration::from_millis(u64::from(session.tick_length_ms()));
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = map_key(key) {
                        session.apply(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick();
        }
    }
}
