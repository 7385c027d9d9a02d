// Core types shared by the canvas, history, and window code.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: usize,      // canvas width (pixels)
    pub height: usize,     // canvas height (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A buffer of `width * height` pixels, all set to `color`.
    pub fn filled(width: usize, height: usize, color: u32) -> Self {
        Self { width, height, pixels: vec![color; width * height] }
    }

    /// Pixel at (x,y), or None when outside the buffer.
    #[cfg(test)]
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }
}

/// Per-pixel coverage in [0,1] of the stroke being drawn; 1 = stroke color, 0 = untouched.
/// Same size as the canvas and reused between strokes.
pub struct Mask {
    pub width: usize,
    pub height: usize,
    pub alpha: Vec<f32>,   // length = width * height
}

impl Mask {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, alpha: vec![0.0; width * height] }
    }

    /// Zero only the given region, clipped to the mask (the rest is already zero).
    pub fn clear_region(&mut self, r: Rect) {
        let (x1, y1) = (r.x1.min(self.width), r.y1.min(self.height));
        if r.x0 >= x1 {
            return;
        }
        for y in r.y0..y1 {
            let row = y * self.width;
            self.alpha[row + r.x0..row + x1].fill(0.0);
        }
    }
}

/// Half-open pixel rectangle [x0,x1) x [y0,y1).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

impl Rect {
    pub fn union(self, other: Rect) -> Rect {
        Rect {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }
}

/// A canvas-local position in pixels (fractional; pixel centers sit at +0.5).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Current brush: applied to the next segment drawn, never stored with a stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: u32, // 0x00RRGGBB
    pub width: f32, // line width in pixels
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rect_union_covers_both() {
        let a = Rect { x0: 2, y0: 3, x1: 5, y1: 6 };
        let b = Rect { x0: 4, y0: 1, x1: 9, y1: 4 };
        assert_eq!(a.union(b), Rect { x0: 2, y0: 1, x1: 9, y1: 6 });
    }

    #[test]
    fn mask_clear_region_only_touches_region() {
        let mut m = Mask::new(4, 4);
        m.alpha.fill(1.0);
        m.clear_region(Rect { x0: 1, y0: 1, x1: 3, y1: 3 });
        assert_eq!(m.alpha[0], 1.0);
        assert_eq!(m.alpha[5], 0.0);
        assert_eq!(m.alpha[10], 0.0);
        assert_eq!(m.alpha[15], 1.0);
    }

    #[test]
    fn mask_clear_region_is_clipped_to_the_mask() {
        let mut m = Mask::new(3, 2);
        m.alpha.fill(1.0);
        m.clear_region(Rect { x0: 1, y0: 1, x1: 10, y1: 10 });
        assert_eq!(m.alpha, vec![1.0, 1.0, 1.0, 1.0, 0.0, 0.0]);
        m.clear_region(Rect { x0: 5, y0: 0, x1: 9, y1: 2 });
        assert_eq!(m.alpha[0], 1.0);
    }

    #[test]
    fn framebuffer_get_is_bounds_checked() {
        let fb = FrameBuffer::filled(3, 2, 0x00_12_34_56);
        assert_eq!(fb.get(2, 1), Some(0x00_12_34_56));
        assert_eq!(fb.get(3, 0), None);
        assert_eq!(fb.get(0, 2), None);
    }
}
