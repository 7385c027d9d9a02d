// Toolbar strip above the canvas: color swatches, brush widths, and command buttons.
// Visual: a dark bar; the active color and width are outlined in white,
// UNDO/REDO turn grey when there is nothing to undo/redo.

use crate::draw::{draw_text_5x7, fill_disc, fill_rect, outline_rect, text_width_5x7};
use crate::input::Action;
use crate::types::{FrameBuffer, Rect};

/// Height of the strip in pixels; the canvas starts right below it.
pub const TOOLBAR_HEIGHT: usize = 40;

/// Narrowest window that still fits every toolbar item.
pub const MIN_WIDTH: usize = 600;

pub const PALETTE: [u32; 8] = [
    0x00_00_00_00, // black
    0x00_E5_39_35, // red
    0x00_FB_8C_00, // orange
    0x00_FD_D8_35, // yellow
    0x00_43_A0_47, // green
    0x00_1E_88_E5, // blue
    0x00_8E_24_AA, // purple
    0x00_FF_FF_FF, // white
];

pub const WIDTHS: [f32; 4] = [2.0, 5.0, 10.0, 20.0];

const BAR_BG: u32 = 0x00_2B_2B_2B;
const ITEM_BG: u32 = 0x00_3C_3C_3C;
const IDLE_OUTLINE: u32 = 0x00_5A_5A_5A;
const ACTIVE_OUTLINE: u32 = 0x00_FF_FF_FF;
const LABEL: u32 = 0x00_EE_EE_EE;
const LABEL_DISABLED: u32 = 0x00_70_70_70;

const ITEM_Y: usize = 8;
const ITEM_H: usize = 24;
const ITEM_GAP: usize = 6;
const GROUP_GAP: usize = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Button {
    Undo,
    Redo,
    Clear,
    Save,
}

impl Button {
    fn label(self) -> &'static str {
        match self {
            Button::Undo => "UNDO",
            Button::Redo => "REDO",
            Button::Clear => "CLEAR",
            Button::Save => "SAVE",
        }
    }

    fn action(self) -> Action {
        match self {
            Button::Undo => Action::Undo,
            Button::Redo => Action::Redo,
            Button::Clear => Action::Clear,
            Button::Save => Action::Export,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Kind {
    Swatch(u32),
    Width(f32),
    Button(Button),
}

struct Item {
    rect: Rect,
    kind: Kind,
}

/// What the toolbar needs to know to draw highlights and disabled buttons.
pub struct ToolbarState {
    pub color: u32,
    pub width: f32,
    pub can_undo: bool,
    pub can_redo: bool,
}

pub struct Toolbar {
    items: Vec<Item>,
}

impl Toolbar {
    /// Lay out items left to right: swatches, widths, then buttons.
    pub fn new() -> Self {
        let mut items = Vec::new();
        let mut x = 8;
        for color in PALETTE {
            items.push(place(&mut x, 24, Kind::Swatch(color)));
        }
        x += GROUP_GAP;
        for width in WIDTHS {
            items.push(place(&mut x, 28, Kind::Width(width)));
        }
        x += GROUP_GAP;
        for button in [Button::Undo, Button::Redo, Button::Clear, Button::Save] {
            items.push(place(&mut x, text_width_5x7(button.label()) + 12, Kind::Button(button)));
        }
        Self { items }
    }

    /// Action for a click at window coordinates (x,y), if it lands on an item.
    pub fn hit(&self, x: f32, y: f32) -> Option<Action> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        let item = self.items.iter().find(|it| it.rect.contains(x, y))?;
        Some(match item.kind {
            Kind::Swatch(color) => Action::SetColor(color),
            Kind::Width(width) => Action::SetWidth(width),
            Kind::Button(button) => button.action(),
        })
    }

    /// Paint the strip into the top TOOLBAR_HEIGHT rows of `fb`.
    pub fn render(&self, fb: &mut FrameBuffer, state: &ToolbarState) {
        let strip = Rect { x0: 0, y0: 0, x1: fb.width, y1: TOOLBAR_HEIGHT.min(fb.height) };
        fill_rect(fb, strip, BAR_BG);

        for item in &self.items {
            let r = item.rect;
            match item.kind {
                Kind::Swatch(color) => {
                    fill_rect(fb, r, color);
                    let active = color == state.color;
                    outline_rect(fb, r, if active { ACTIVE_OUTLINE } else { IDLE_OUTLINE });
                }
                Kind::Width(width) => {
                    fill_rect(fb, r, ITEM_BG);
                    // Preview dot, capped so the widest preset still fits the button.
                    let radius = (width * 0.5).min((ITEM_H / 2 - 2) as f32);
                    let (cx, cy) = ((r.x0 + r.x1) as f32 * 0.5, (r.y0 + r.y1) as f32 * 0.5);
                    fill_disc(fb, cx, cy, radius.max(1.0), LABEL);
                    let active = width == state.width;
                    outline_rect(fb, r, if active { ACTIVE_OUTLINE } else { IDLE_OUTLINE });
                }
                Kind::Button(button) => {
                    fill_rect(fb, r, ITEM_BG);
                    outline_rect(fb, r, IDLE_OUTLINE);
                    let enabled = match button {
                        Button::Undo => state.can_undo,
                        Button::Redo => state.can_redo,
                        Button::Clear | Button::Save => true,
                    };
                    let label = button.label();
                    let tx = r.x0 + (r.x1 - r.x0 - text_width_5x7(label)) / 2;
                    let ty = r.y0 + (ITEM_H - 7) / 2;
                    draw_text_5x7(fb, tx as i32, ty as i32, label, if enabled { LABEL } else { LABEL_DISABLED });
                }
            }
        }
    }
}

/// Put an item of width `w` at `x` and advance `x` past it.
fn place(x: &mut usize, w: usize, kind: Kind) -> Item {
    let rect = Rect { x0: *x, y0: ITEM_Y, x1: *x + w, y1: ITEM_Y + ITEM_H };
    *x += w + ITEM_GAP;
    Item { rect, kind }
}

/// Next preset width above (`up`) or below the current one; stays put at either end.
pub fn step_width(current: f32, up: bool) -> f32 {
    if up {
        WIDTHS.iter().copied().find(|&w| w > current).unwrap_or(current)
    } else {
        WIDTHS.iter().rev().copied().find(|&w| w < current).unwrap_or(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn center(r: Rect) -> (f32, f32) {
        ((r.x0 + r.x1) as f32 / 2.0, (r.y0 + r.y1) as f32 / 2.0)
    }

    #[test]
    fn every_item_fits_the_minimum_width() {
        let bar = Toolbar::new();
        assert_eq!(bar.items.len(), PALETTE.len() + WIDTHS.len() + 4);
        assert!(bar.items.iter().all(|it| it.rect.x1 <= MIN_WIDTH && it.rect.y1 <= TOOLBAR_HEIGHT));
    }

    #[test]
    fn clicks_map_to_actions() {
        let bar = Toolbar::new();
        let (x, y) = center(bar.items[1].rect);
        assert_eq!(bar.hit(x, y), Some(Action::SetColor(PALETTE[1])));
        let (x, y) = center(bar.items[PALETTE.len() + 2].rect);
        assert_eq!(bar.hit(x, y), Some(Action::SetWidth(10.0)));

        let actions: Vec<_> = bar.items[PALETTE.len() + WIDTHS.len()..]
            .iter()
            .map(|it| {
                let (x, y) = center(it.rect);
                bar.hit(x, y)
            })
            .collect();
        assert_eq!(
            actions,
            vec![Some(Action::Undo), Some(Action::Redo), Some(Action::Clear), Some(Action::Export)]
        );
    }

    #[test]
    fn gaps_and_margins_hit_nothing() {
        let bar = Toolbar::new();
        assert_eq!(bar.hit(2.0, 2.0), None);
        assert_eq!(bar.hit(100.0, 36.0), None);
        assert_eq!(bar.hit(-1.0, 10.0), None);
        assert_eq!(bar.hit(MIN_WIDTH as f32 + 50.0, 20.0), None);
    }

    #[test]
    fn render_highlights_active_swatch() {
        let bar = Toolbar::new();
        let mut fb = FrameBuffer::filled(MIN_WIDTH, TOOLBAR_HEIGHT + 10, 0x00_12_34_56);
        let state = ToolbarState { color: PALETTE[2], width: 5.0, can_undo: false, can_redo: true };
        bar.render(&mut fb, &state);

        let active = bar.items[2].rect;
        let idle = bar.items[3].rect;
        assert_eq!(fb.get(active.x0, active.y0), Some(ACTIVE_OUTLINE));
        assert_eq!(fb.get(idle.x0, idle.y0), Some(IDLE_OUTLINE));
        assert_eq!(fb.get(active.x0 + 5, active.y0 + 5), Some(PALETTE[2]));
        // Rows below the strip are left alone.
        assert_eq!(fb.get(0, TOOLBAR_HEIGHT + 1), Some(0x00_12_34_56));
    }

    #[test]
    fn width_steps_through_presets() {
        assert_eq!(step_width(5.0, true), 10.0);
        assert_eq!(step_width(5.0, false), 2.0);
        assert_eq!(step_width(20.0, true), 20.0);
        assert_eq!(step_width(2.0, false), 2.0);
        assert_eq!(step_width(7.0, true), 10.0);
        assert_eq!(step_width(7.0, false), 5.0);
    }
}
