//! One drawing session: canvas, history, and the current brush.
//!
//! Window-free so the whole input → draw → commit → undo cycle can be driven
//! from tests. `main` feeds it pointer events and actions each frame.

use std::path::PathBuf;

use chrono::Utc;

use crate::canvas::Canvas;
use crate::config::Config;
use crate::error::Error;
use crate::export;
use crate::history::History;
use crate::input::{Action, PointerEvent};
use crate::toolbar::{ToolbarState, step_width};
use crate::types::{FrameBuffer, StrokeStyle};

pub struct App {
    canvas: Canvas,
    history: History,
    style: StrokeStyle,
    out_dir: PathBuf,
}

impl App {
    pub fn new(cfg: &Config) -> Self {
        let canvas = Canvas::new(cfg.width, cfg.height, cfg.background);
        let history = History::new(canvas.frame(), cfg.history_limit);
        Self {
            canvas,
            history,
            style: StrokeStyle { color: cfg.color, width: cfg.brush },
            out_dir: cfg.out_dir.clone(),
        }
    }

    pub fn frame(&self) -> &FrameBuffer {
        self.canvas.frame()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn toolbar_state(&self) -> ToolbarState {
        ToolbarState {
            color: self.style.color,
            width: self.style.width,
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
        }
    }

    pub fn pointer(&mut self, ev: PointerEvent) {
        match ev {
            PointerEvent::Down(p) => {
                self.commit_stroke();
                self.canvas.begin_stroke(p, self.style);
            }
            PointerEvent::Move(p) => self.canvas.extend_stroke(p, self.style),
            PointerEvent::Up => self.commit_stroke(),
        }
    }

    /// Apply a keyboard/toolbar action. `Quit` is the window loop's business and is ignored here.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Undo => {
                self.commit_stroke();
                if self.history.undo(self.canvas.frame_mut()) {
                    log::debug!("undo -> {} state(s) left", self.history.undo_len());
                }
            }
            Action::Redo => {
                self.commit_stroke();
                if self.history.redo(self.canvas.frame_mut()) {
                    log::debug!("redo -> {} undone state(s) left", self.history.redo_len());
                }
            }
            Action::Clear => {
                self.commit_stroke();
                self.canvas.clear();
                self.history.save_state(self.canvas.frame());
                log::debug!("canvas cleared");
            }
            Action::Export => {
                self.commit_stroke();
                if let Err(e) = self.export() {
                    log::warn!("{e}");
                }
            }
            Action::SetColor(color) => self.style.color = color,
            Action::SetWidth(width) => self.style.width = width,
            Action::WidenBrush => self.style.width = step_width(self.style.width, true),
            Action::NarrowBrush => self.style.width = step_width(self.style.width, false),
            Action::Quit => {}
        }
    }

    /// Write the current canvas as `drawing-<millis>.png` into the output directory.
    pub fn export(&self) -> Result<PathBuf, Error> {
        export::save_png(self.canvas.frame(), &self.out_dir, Utc::now())
    }

    fn commit_stroke(&mut self) {
        if self.canvas.end_stroke() {
            self.history.save_state(self.canvas.frame());
        }
    }
}
