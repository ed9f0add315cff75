//! Piece tray runner (default binary).
//!
//! This is the interactive entrypoint. It uses crossterm for input and a
//! custom framebuffer-based renderer (no ratatui widgets/layout). The tray
//! only changes on key presses, so the loop blocks on the next event instead
//! of ticking.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use tetris_stack::core::transfer;
use tetris_stack::core::{PieceGenerator, PieceQueue, PieceStack, TraySnapshot};
use tetris_stack::input::{handle_key_event, should_quit};
use tetris_stack::term::{FrameBuffer, StatusLine, TerminalRenderer, TrayView, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TrayConfig {
    seed: u32,
}

fn parse_tray_args(args: &[String]) -> Result<TrayConfig> {
    let mut seed = clock_seed();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("tray: missing value for --seed"))?;
                seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("tray: invalid --seed value: {}", v))?;
            }
            other => {
                return Err(anyhow!("tray: unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(TrayConfig { seed })
}

/// Wall-clock fallback when no seed is given.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_tray_args(&args)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: TrayConfig) -> Result<()> {
    let mut generator = PieceGenerator::new(config.seed);
    let mut queue = PieceQueue::new();
    let mut stack = PieceStack::new();

    // A session starts with a full rack of upcoming pieces.
    while !queue.is_full() {
        queue.enqueue(generator.next_piece())?;
    }

    let view = TrayView::default();
    let mut snapshot = TraySnapshot::capture(&queue, &stack);
    let mut status = StatusLine::Idle;
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snapshot, &status, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }

                if let Some(action) = handle_key_event(key) {
                    status = StatusLine::Outcome(transfer::apply(
                        action,
                        &mut queue,
                        &mut stack,
                        &mut generator,
                    ));
                    snapshot.capture_into(&queue, &stack);
                } else if let KeyCode::Char(ch) = key.code {
                    status = StatusLine::UnknownKey(ch);
                }
            }
            Event::Resize(_, _) => {
                // Fall through; the next iteration re-renders at the new size.
            }
            _ => {}
        }
    }
}
