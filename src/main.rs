//! Tetris Reserve runner (default binary).
//!
//! Fills the queue, then hands the session to either the full-screen terminal
//! UI or the line-mode script runner, depending on `TETRIS_RESERVE_MODE`.

use std::io;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tetris_reserve::config::{AppConfig, Mode};
use tetris_reserve::core::Session;
use tetris_reserve::input::{handle_key_event, should_quit};
use tetris_reserve::term::{
    describe_outcome, FrameBuffer, SessionView, StatusLine, TerminalRenderer, Viewport,
};
use tetris_reserve::{logging, script};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(&config)?;

    let seed = config.resolve_seed();
    info!(seed, mode = ?config.mode, "starting session");

    let mut session = Session::new(seed);
    session.start();

    match config.mode {
        Mode::Lines => {
            let summary = script::run_lines(&mut session, io::stdin().lock(), io::stdout().lock())?;
            info!(?summary, "line mode finished");
            Ok(())
        }
        Mode::Tui => {
            let mut term = TerminalRenderer::new();
            let result = term.enter().and_then(|()| run(&mut term, &mut session));

            // Always try to restore terminal state.
            let _ = term.exit();
            info!(
                played = session.played(),
                used = session.used(),
                "session ended"
            );
            result
        }
    }
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = SessionView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = session.snapshot();
    let mut status = String::from("Choose an option");
    let mut is_error = false;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(
            &snap,
            Some(StatusLine {
                text: &status,
                is_error,
            }),
            Viewport::new(w, h),
            &mut fb,
        );
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                let Some(command) = handle_key_event(key) else {
                    continue;
                };
                match session.apply(command) {
                    Ok(outcome) => {
                        status = describe_outcome(&outcome);
                        is_error = false;
                    }
                    Err(err) => {
                        status = format!("{}: {err}", command.label());
                        is_error = true;
                    }
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
