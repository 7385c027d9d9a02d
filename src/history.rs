//! Undo/redo over full-frame raster snapshots.
//!
//! The undo stack is ordered oldest first and its last entry is always the
//! frame currently on screen, so it is never empty once created. Undone
//! frames move to the redo stack, which any new save throws away.

use std::collections::VecDeque;

use crate::types::FrameBuffer;

/// Default number of frames kept on the undo stack.
pub const DEFAULT_LIMIT: usize = 50;

/// Immutable copy of the canvas pixels at one point in time.
#[derive(Debug, PartialEq, Eq)]
pub struct Snapshot {
    width: usize,
    height: usize,
    pixels: Box<[u32]>,
}

impl Snapshot {
    pub fn capture(frame: &FrameBuffer) -> Self {
        Self {
            width: frame.width,
            height: frame.height,
            pixels: frame.pixels.clone().into_boxed_slice(),
        }
    }

    /// Overwrite `frame` (size included) with this snapshot.
    pub fn restore_into(&self, frame: &mut FrameBuffer) {
        frame.width = self.width;
        frame.height = self.height;
        frame.pixels.clear();
        frame.pixels.extend_from_slice(&self.pixels);
    }
}

pub struct History {
    undo: VecDeque<Snapshot>,
    redo: Vec<Snapshot>,
    limit: usize,
}

impl History {
    /// Start a history whose only entry is `initial` (normally the blank canvas).
    /// A `limit` of 0 is treated as 1.
    pub fn new(initial: &FrameBuffer, limit: usize) -> Self {
        let limit = limit.max(1);
        let mut undo = VecDeque::with_capacity(limit + 1);
        undo.push_back(Snapshot::capture(initial));
        Self { undo, redo: Vec::new(), limit }
    }

    /// Record `frame` as the new current state.
    pub fn save_state(&mut self, frame: &FrameBuffer) {
        self.push_undo(Snapshot::capture(frame));
        if !self.redo.is_empty() {
            log::debug!("history: dropping {} redo frame(s)", self.redo.len());
            self.redo.clear();
        }
    }

    /// Step back one state, writing it into `frame`. Returns false when there is
    /// nothing older than the current state.
    pub fn undo(&mut self, frame: &mut FrameBuffer) -> bool {
        if self.undo.len() < 2 {
            return false;
        }
        let Some(current) = self.undo.pop_back() else { return false };
        self.redo.push(current);
        if let Some(top) = self.undo.back() {
            top.restore_into(frame);
        }
        true
    }

    /// Re-apply the most recently undone state. Returns false when nothing was undone.
    pub fn redo(&mut self, frame: &mut FrameBuffer) -> bool {
        let Some(snap) = self.redo.pop() else { return false };
        snap.restore_into(frame);
        self.push_undo(snap);
        true
    }

    pub fn can_undo(&self) -> bool {
        self.undo.len() >= 2
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    fn push_undo(&mut self, snap: Snapshot) {
        self.undo.push_back(snap);
        while self.undo.len() > self.limit {
            self.undo.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BLANK: u32 = 0x00_FF_FF_FF;

    fn blank() -> FrameBuffer {
        FrameBuffer::filled(8, 6, BLANK)
    }

    /// Stand-in for a stroke: mark pixel `n` so every state is distinct.
    fn stroke(frame: &mut FrameBuffer, history: &mut History, n: usize) {
        let len = frame.pixels.len();
        frame.pixels[n % len] = n as u32;
        history.save_state(frame);
    }

    #[test]
    fn starts_with_one_entry_and_nothing_to_undo() {
        let mut frame = blank();
        let mut h = History::new(&frame, DEFAULT_LIMIT);
        assert_eq!(h.undo_len(), 1);
        assert!(!h.can_undo());
        assert!(!h.undo(&mut frame));
        assert!(!h.redo(&mut frame));
        assert_eq!(frame, blank());
    }

    #[test]
    fn n_strokes_then_n_undos_returns_to_blank() {
        let mut frame = blank();
        let mut h = History::new(&frame, DEFAULT_LIMIT);
        for n in 1..=40 {
            stroke(&mut frame, &mut h, n);
        }
        assert_eq!(h.undo_len(), 41);
        for _ in 0..40 {
            assert!(h.undo(&mut frame));
        }
        assert_eq!(frame, blank());
        assert_eq!(h.undo_len(), 1);
        assert_eq!(h.redo_len(), 40);
        assert!(!h.undo(&mut frame));
    }

    #[test]
    fn committed_state_clears_redo() {
        let mut frame = blank();
        let mut h = History::new(&frame, DEFAULT_LIMIT);
        stroke(&mut frame, &mut h, 1);
        stroke(&mut frame, &mut h, 2);
        h.undo(&mut frame);
        h.undo(&mut frame);
        assert_eq!(h.redo_len(), 2);
        stroke(&mut frame, &mut h, 3);
        assert_eq!(h.redo_len(), 0);
        assert!(!h.redo(&mut frame));
    }

    #[test]
    fn undo_stack_is_bounded() {
        let mut frame = blank();
        let mut h = History::new(&frame, DEFAULT_LIMIT);
        for n in 1..=200 {
            stroke(&mut frame, &mut h, n);
            assert!(h.undo_len() <= DEFAULT_LIMIT);
        }
        assert_eq!(h.undo_len(), DEFAULT_LIMIT);
        // The blank canvas was evicted; only 49 steps back are reachable.
        let mut steps = 0;
        while h.undo(&mut frame) {
            steps += 1;
        }
        assert_eq!(steps, DEFAULT_LIMIT - 1);
        assert_ne!(frame, blank());
    }

    #[test]
    fn undo_then_redo_is_pixel_identical() {
        let mut frame = blank();
        let mut h = History::new(&frame, DEFAULT_LIMIT);
        stroke(&mut frame, &mut h, 3);
        stroke(&mut frame, &mut h, 7);
        let before = frame.clone();
        assert!(h.undo(&mut frame));
        assert_ne!(frame, before);
        assert!(h.redo(&mut frame));
        assert_eq!(frame, before);
        assert_eq!(h.undo_len(), 3);
        assert_eq!(h.redo_len(), 0);
    }

    #[test]
    fn redo_replays_in_order() {
        let mut frame = blank();
        let mut h = History::new(&frame, DEFAULT_LIMIT);
        let mut states = vec![frame.clone()];
        for n in 1..=3 {
            stroke(&mut frame, &mut h, n);
            states.push(frame.clone());
        }
        for _ in 0..3 {
            h.undo(&mut frame);
        }
        for expected in &states[1..] {
            assert!(h.redo(&mut frame));
            assert_eq!(&frame, expected);
        }
        assert!(!h.can_redo());
    }

    #[test]
    fn zero_limit_still_keeps_current_state() {
        let frame = blank();
        let mut h = History::new(&frame, 0);
        assert_eq!(h.limit(), 1);
        h.save_state(&frame);
        assert_eq!(h.undo_len(), 1);
    }
}
