// What you SEE:
// • A dark toolbar strip on top (colors, brush widths, UNDO/REDO/CLEAR/SAVE).
// • A white canvas below it. Hold Left Mouse to draw.
// • Ctrl/Cmd+Z undo, Ctrl/Cmd+Shift+Z or Ctrl/Cmd+Y redo, Ctrl/Cmd+S save PNG.
// • 1-8 pick a color, [ ] change brush width, Delete clears. ESC quits.

mod app;
mod canvas;
mod config;
mod draw;
mod error;
mod export;
mod gamma;
mod history;
mod input;
mod toolbar;
mod types;

use app::App;
use clap::Parser;
use config::{Args, Config};
use draw::{Drawer, blit};
use error::Error;
use input::{Action, InputEvent, PointerTracker, Viewport, shortcut};
use toolbar::{TOOLBAR_HEIGHT, Toolbar};
use types::FrameBuffer;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = Config::try_from(Args::parse())?;
    log::info!("canvas {}x{}, exporting to {}", cfg.width, cfg.height, cfg.out_dir.display());

    /* --- Window + session setup ---
       Visual: window opens with the toolbar and a blank canvas. */
    let win_h = cfg.height + TOOLBAR_HEIGHT;
    let mut drawer = Drawer::new("Sketchpad", cfg.width, win_h)?;
    let mut app = App::new(&cfg);
    log::debug!("keeping up to {} canvas states", app.history().limit());
    let toolbar = Toolbar::new();
    let mut tracker = PointerTracker::new(Viewport {
        x: 0.0,
        y: TOOLBAR_HEIGHT as f32,
        width: cfg.width as f32,
        height: cfg.height as f32,
    });

    /* --- Reusable screen buffer: toolbar strip + canvas --- */
    let mut screen = FrameBuffer::filled(cfg.width, win_h, 0);

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() {
        /* 1) Keyboard shortcuts */
        let mut quit = false;
        for chord in drawer.key_chords() {
            match shortcut(chord) {
                Some(Action::Quit) => quit = true,
                Some(action) => app.apply(action),
                None => {}
            }
        }
        if quit {
            break;
        }

        /* 2) Mouse: strokes on the canvas, clicks on the toolbar */
        match tracker.update(drawer.mouse_pos(), drawer.left_mouse_down()) {
            Some(InputEvent::Stroke(ev)) => app.pointer(ev),
            Some(InputEvent::ToolbarClick(x, y)) => {
                if let Some(action) = toolbar.hit(x, y) {
                    app.apply(action);
                }
            }
            None => {}
        }

        /* 3) Compose and present */
        toolbar.render(&mut screen, &app.toolbar_state());
        blit(&mut screen, app.frame(), 0, TOOLBAR_HEIGHT);
        drawer.present(&screen)?;
    }

    log::info!("bye ({} undo state(s) in memory)", app.history().undo_len());
    Ok(())
}
