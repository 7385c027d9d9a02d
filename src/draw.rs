// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows the toolbar strip with the canvas under it.
// 2) Filled/outlined rectangles and discs for swatches and width previews.
// 3) A tiny 5x7 bitmap font for the button labels.

use crate::error::Error;
use crate::input::KeyChord;
use crate::types::{FrameBuffer, Rect};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window of exactly `width` x `height` buffer pixels.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Mouse position in window pixels; None while the cursor is outside the window.
    pub fn mouse_pos(&self) -> Option<(f32, f32)> {
        self.window.get_mouse_pos(MouseMode::Discard)
    }

    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// Keys pressed since the last frame, each with the modifiers held right now.
    /// Ctrl and Cmd (Super) both count as the command modifier.
    pub fn key_chords(&self) -> Vec<KeyChord> {
        let down = |keys: [Key; 2]| keys.iter().any(|&k| self.window.is_key_down(k));
        let command = down([Key::LeftCtrl, Key::RightCtrl]) || down([Key::LeftSuper, Key::RightSuper]);
        let shift = down([Key::LeftShift, Key::RightShift]);
        self.window
            .get_keys_pressed(KeyRepeat::No)
            .into_iter()
            .map(|key| KeyChord { key, command, shift })
            .collect()
    }
}

/* ---------- Software drawing: pixels, rects, discs, blits ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Fill `r` (clipped to the buffer) with a solid color.
pub fn fill_rect(fb: &mut FrameBuffer, r: Rect, color: u32) {
    let (x1, y1) = (r.x1.min(fb.width), r.y1.min(fb.height));
    if r.x0 >= x1 {
        return;
    }
    for y in r.y0..y1 {
        let row = y * fb.width;
        fb.pixels[row + r.x0..row + x1].fill(color);
    }
}

/// 1-pixel border just inside `r`.
pub fn outline_rect(fb: &mut FrameBuffer, r: Rect, color: u32) {
    if r.x1 <= r.x0 || r.y1 <= r.y0 {
        return;
    }
    let (x0, y0, x1, y1) = (r.x0 as i32, r.y0 as i32, r.x1 as i32 - 1, r.y1 as i32 - 1);
    for x in x0..=x1 {
        put_pixel(fb, x, y0, color);
        put_pixel(fb, x, y1, color);
    }
    for y in y0..=y1 {
        put_pixel(fb, x0, y, color);
        put_pixel(fb, x1, y, color);
    }
}

/// Hard-edged disc: every pixel whose center lies within `radius` of (cx,cy).
pub fn fill_disc(fb: &mut FrameBuffer, cx: f32, cy: f32, radius: f32, color: u32) {
    let r2 = radius * radius;
    let (x0, x1) = ((cx - radius).floor() as i32, (cx + radius).ceil() as i32);
    let (y0, y1) = ((cy - radius).floor() as i32, (cy + radius).ceil() as i32);
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            if dx * dx + dy * dy <= r2 {
                put_pixel(fb, x, y, color);
            }
        }
    }
}

/// Copy all of `src` into `dst` with its top-left corner at (ox,oy), clipped to `dst`.
pub fn blit(dst: &mut FrameBuffer, src: &FrameBuffer, ox: usize, oy: usize) {
    if ox >= dst.width {
        return;
    }
    let w = src.width.min(dst.width - ox);
    for y in 0..src.height.min(dst.height.saturating_sub(oy)) {
        let s = y * src.width;
        let d = (y + oy) * dst.width + ox;
        dst.pixels[d..d + w].copy_from_slice(&src.pixels[s..s + w]);
    }
}

/* ---------- 5x7 bitmap font (just the letters the toolbar labels need) ---------- */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    // Helper macro to define a glyph quickly
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        // Letters in UNDO / REDO / CLEAR / SAVE
        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'N' => g!(0b10001,0b11001,0b10101,0b10101,0b10011,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y).
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(fb, x + rx, y + ry as i32, color);
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs; each glyph is 5x7 with 1-pixel spacing.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += 6; // 5 pixels glyph width + 1 pixel spacing
    }
}

/// Pixel width of `text` as drawn by `draw_text_5x7` (no trailing spacing).
pub fn text_width_5x7(text: &str) -> usize {
    (text.chars().count() * 6).saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BG: u32 = 0x00_00_00_00;
    const FG: u32 = 0x00_FF_FF_FF;

    #[test]
    fn fill_rect_is_clipped() {
        let mut fb = FrameBuffer::filled(4, 3, BG);
        fill_rect(&mut fb, Rect { x0: 2, y0: 1, x1: 10, y1: 10 }, FG);
        assert_eq!(fb.pixels, vec![BG, BG, BG, BG, BG, BG, FG, FG, BG, BG, FG, FG]);
    }

    #[test]
    fn outline_leaves_inside_untouched() {
        let mut fb = FrameBuffer::filled(5, 5, BG);
        outline_rect(&mut fb, Rect { x0: 0, y0: 0, x1: 5, y1: 5 }, FG);
        assert_eq!(fb.get(0, 0), Some(FG));
        assert_eq!(fb.get(4, 4), Some(FG));
        assert_eq!(fb.get(2, 2), Some(BG));
    }

    #[test]
    fn blit_places_source_at_offset() {
        let mut dst = FrameBuffer::filled(4, 4, BG);
        let src = FrameBuffer::filled(3, 3, FG);
        blit(&mut dst, &src, 2, 1);
        assert_eq!(dst.get(1, 1), Some(BG));
        assert_eq!(dst.get(2, 1), Some(FG));
        assert_eq!(dst.get(3, 3), Some(FG));
        assert_eq!(dst.get(2, 0), Some(BG));
    }

    #[test]
    fn disc_is_round() {
        let mut fb = FrameBuffer::filled(11, 11, BG);
        fill_disc(&mut fb, 5.5, 5.5, 3.0, FG);
        assert_eq!(fb.get(5, 5), Some(FG));
        assert_eq!(fb.get(8, 5), Some(FG));
        assert_eq!(fb.get(8, 8), Some(BG));
    }

    #[test]
    fn labels_have_glyphs() {
        for label in ["UNDO", "REDO", "CLEAR", "SAVE"] {
            assert!(label.chars().all(|c| glyph5x7(c).is_some()), "{label}");
        }
        assert_eq!(text_width_5x7("UNDO"), 23);
        assert_eq!(text_width_5x7(""), 0);
    }
}
