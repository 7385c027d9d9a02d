// The drawing surface: owns the raster buffer and renders strokes into it.
// Visual: a stroke is a chain of round-capped segments with soft (anti-aliased) edges.
//
// Each stroke accumulates coverage in a Mask with `max`, then composites
// color over the pixels from before the stroke. Overlapping joints therefore
// do not get darker where two segments meet.

use crate::gamma::GammaLut;
use crate::types::{FrameBuffer, Mask, Point, Rect, StrokeStyle};

struct ActiveStroke {
    last: Point,
    style: StrokeStyle,
    dirty: Option<Rect>, // mask region touched since the last rebase
}

pub struct Canvas {
    frame: FrameBuffer,
    background: u32,
    base: Vec<u32>, // pixels under the current run of same-style segments
    mask: Mask,
    lut: GammaLut,
    stroke: Option<ActiveStroke>,
}

impl Canvas {
    /// A blank canvas filled with `background`.
    pub fn new(width: usize, height: usize, background: u32) -> Self {
        let frame = FrameBuffer::filled(width, height, background);
        Self {
            base: frame.pixels.clone(),
            mask: Mask::new(width, height),
            lut: GammaLut::new(),
            frame,
            background,
            stroke: None,
        }
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Mutable access for restoring history. Any stroke in progress is dropped
    /// (not committed) so it cannot repaint over the restored pixels.
    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        self.abandon_stroke();
        &mut self.frame
    }

    #[cfg(test)]
    pub fn is_drawing(&self) -> bool {
        self.stroke.is_some()
    }

    /// Start a stroke at `p`. A press without motion leaves a round dot.
    pub fn begin_stroke(&mut self, p: Point, style: StrokeStyle) {
        self.abandon_stroke();
        self.base.copy_from_slice(&self.frame.pixels);
        self.stroke = Some(ActiveStroke { last: p, style, dirty: None });
        self.draw_segment(p, p);
    }

    /// Continue the current stroke to `p` with whatever style is current now.
    /// Ignored when no stroke is active or `p` repeats the last sample.
    pub fn extend_stroke(&mut self, p: Point, style: StrokeStyle) {
        let (last, restyled) = match &self.stroke {
            Some(s) if s.last == p => return,
            Some(s) => (s.last, s.style != style),
            None => return,
        };
        if restyled {
            // Bake what is drawn so far; the new style starts a fresh composite.
            self.rebase();
            if let Some(s) = self.stroke.as_mut() {
                s.style = style;
            }
        }
        self.draw_segment(last, p);
        if let Some(s) = self.stroke.as_mut() {
            s.last = p;
        }
    }

    /// Finish the stroke. Returns true if a stroke was active (the caller commits it).
    pub fn end_stroke(&mut self) -> bool {
        let was_drawing = self.stroke.is_some();
        self.abandon_stroke();
        was_drawing
    }

    /// Wipe everything back to the background color.
    pub fn clear(&mut self) {
        self.abandon_stroke();
        self.frame.pixels.fill(self.background);
    }

    fn abandon_stroke(&mut self) {
        if let Some(s) = self.stroke.take() {
            if let Some(r) = s.dirty {
                self.mask.clear_region(r);
            }
        }
    }

    fn rebase(&mut self) {
        if let Some(s) = self.stroke.as_mut() {
            if let Some(r) = s.dirty.take() {
                self.mask.clear_region(r);
            }
        }
        self.base.copy_from_slice(&self.frame.pixels);
    }

    /// Rasterize the capsule around segment a→b (round caps) into the mask and frame.
    fn draw_segment(&mut self, a: Point, b: Point) {
        let Some(style) = self.stroke.as_ref().map(|s| s.style) else { return };
        let radius = (style.width * 0.5).max(0.5);

        // Bounding box, padded by one pixel for the soft edge and clipped to the canvas.
        let w = self.frame.width as f32;
        let h = self.frame.height as f32;
        let x0 = (a.x.min(b.x) - radius - 1.0).floor().clamp(0.0, w) as usize;
        let y0 = (a.y.min(b.y) - radius - 1.0).floor().clamp(0.0, h) as usize;
        let x1 = (a.x.max(b.x) + radius + 1.0).ceil().clamp(0.0, w) as usize;
        let y1 = (a.y.max(b.y) + radius + 1.0).ceil().clamp(0.0, h) as usize;
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for y in y0..y1 {
            for x in x0..x1 {
                let center = Point::new(x as f32 + 0.5, y as f32 + 0.5);
                let coverage = (radius + 0.5 - distance_to_segment(center, a, b)).clamp(0.0, 1.0);
                let idx = y * self.frame.width + x;
                if coverage <= self.mask.alpha[idx] {
                    continue;
                }
                self.mask.alpha[idx] = coverage;
                self.frame.pixels[idx] = self.lut.mix(self.base[idx], style.color, coverage);
            }
        }

        let touched = Rect { x0, y0, x1, y1 };
        if let Some(s) = self.stroke.as_mut() {
            s.dirty = Some(s.dirty.map_or(touched, |d| d.union(touched)));
        }
    }
}

/// Shortest distance from `p` to the segment a→b (a point when a == b).
fn distance_to_segment(p: Point, a: Point, b: Point) -> f32 {
    let (abx, aby) = (b.x - a.x, b.y - a.y);
    let len2 = abx * abx + aby * aby;
    let t = if len2 > 0.0 {
        (((p.x - a.x) * abx + (p.y - a.y) * aby) / len2).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (cx, cy) = (a.x + abx * t, a.y + aby * t);
    ((p.x - cx).powi(2) + (p.y - cy).powi(2)).sqrt()
}
