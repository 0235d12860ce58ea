//! Visitor Pong terminal entry point
//!
//! Runs a scripted session (pointer pressed and released in turns) and prints
//! the final frame as text. Usage: `visitor-pong [settings.json]`

use anyhow::Context;

use visitor_pong::consts::FRAME_DT_MS;
use visitor_pong::platform::PointerState;
use visitor_pong::renderer::AsciiCanvas;
use visitor_pong::{Game, Settings};

/// Ten seconds at 60 fps
const DEMO_FRAMES: u32 = 600;
/// Frames per pointer press/release phase
const POINTER_PHASE: u32 = 120;

const CANVAS_COLUMNS: usize = 80;
const CANVAS_ROWS: usize = 24;

fn main() -> anyhow::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Visitor Pong (terminal) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(&path).with_context(|| format!("loading settings from {path}"))?,
        None => Settings::default(),
    };

    let mut game = Game::new(settings).context("starting game")?;
    let mut pointer = PointerState::new();
    let mut canvas = AsciiCanvas::new(CANVAS_COLUMNS, CANVAS_ROWS, game.settings().screen_size());

    for frame in 0..DEMO_FRAMES {
        if (frame / POINTER_PHASE) % 2 == 1 {
            pointer.press(game.settings().screen_size() / 2.0);
        } else {
            pointer.release();
        }

        canvas.clear();
        game.frame(&pointer, FRAME_DT_MS, &mut canvas);
    }

    println!("{}", canvas.render());
    log::info!(
        "Finished after {} frames, score {}",
        game.frame_count(),
        game.score().label()
    );

    Ok(())
}
