//! Turns raw window input into things the app understands.
//!
//! Mouse samples arrive once per frame as (position, left button held). The
//! [`PointerTracker`] converts the button transitions into stroke events in
//! canvas-local coordinates, or into toolbar clicks when the press lands
//! outside the canvas. Key presses become [`Action`]s through [`shortcut`].

use minifb::Key;

use crate::types::Point;

/// Everything the user can ask for, from the keyboard or the toolbar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Undo,
    Redo,
    Clear,
    Export,
    SetColor(u32),
    SetWidth(f32),
    WidenBrush,
    NarrowBrush,
    Quit,
}

/// Where the canvas sits inside the window (the toolbar occupies the rest).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Window coordinates → canvas-local point, or None outside the canvas.
    pub fn to_canvas(&self, wx: f32, wy: f32) -> Option<Point> {
        let (x, y) = (wx - self.x, wy - self.y);
        if x < 0.0 || y < 0.0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(Point::new(x, y))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Stroke(PointerEvent),
    /// Press outside the canvas, in window coordinates.
    ToolbarClick(f32, f32),
}

pub struct PointerTracker {
    viewport: Viewport,
    was_down: bool,
    drawing: bool,
}

impl PointerTracker {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport, was_down: false, drawing: false }
    }

    /// Feed one frame's mouse sample; yields at most one event.
    /// Leaving the canvas while drawing ends the stroke, like a mouseleave.
    pub fn update(&mut self, pos: Option<(f32, f32)>, down: bool) -> Option<InputEvent> {
        let pressed = down && !self.was_down;
        self.was_down = down;
        let local = pos.and_then(|(x, y)| self.viewport.to_canvas(x, y));

        if pressed {
            return match (local, pos) {
                (Some(p), _) => {
                    self.drawing = true;
                    Some(InputEvent::Stroke(PointerEvent::Down(p)))
                }
                (None, Some((x, y))) => Some(InputEvent::ToolbarClick(x, y)),
                (None, None) => None,
            };
        }

        if !self.drawing {
            return None;
        }
        match local {
            Some(p) if down => Some(InputEvent::Stroke(PointerEvent::Move(p))),
            _ => {
                self.drawing = false;
                Some(InputEvent::Stroke(PointerEvent::Up))
            }
        }
    }
}

/// A key press together with the modifiers held at that moment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyChord {
    pub key: Key,
    /// Ctrl, or Cmd on macOS.
    pub command: bool,
    pub shift: bool,
}

/// Map a key chord to an action.
pub fn shortcut(chord: KeyChord) -> Option<Action> {
    use crate::toolbar::PALETTE;

    let KeyChord { key, command, shift } = chord;
    if command {
        return match key {
            Key::Z if shift => Some(Action::Redo),
            Key::Z => Some(Action::Undo),
            Key::Y => Some(Action::Redo),
            Key::S => Some(Action::Export),
            _ => None,
        };
    }
    let swatch = match key {
        Key::Key1 => Some(0),
        Key::Key2 => Some(1),
        Key::Key3 => Some(2),
        Key::Key4 => Some(3),
        Key::Key5 => Some(4),
        Key::Key6 => Some(5),
        Key::Key7 => Some(6),
        Key::Key8 => Some(7),
        _ => None,
    };
    if let Some(i) = swatch {
        return Some(Action::SetColor(PALETTE[i]));
    }
    match key {
        Key::Delete | Key::Backspace => Some(Action::Clear),
        Key::LeftBracket => Some(Action::NarrowBrush),
        Key::RightBracket => Some(Action::WidenBrush),
        Key::Escape => Some(Action::Quit),
        _ => None,
    }
}
