//! Stroke history: gesture state machine plus undo/redo stacks.

use super::stroke::{Point, Stroke};
use log::debug;

/// Current gesture state.
///
/// Transitions: `Idle -> Drawing` on pointer-down, `Drawing -> Idle` on
/// pointer-up (or pointer-leave, which commits whatever was drawn so far).
#[derive(Debug)]
enum Gesture {
    /// Not drawing - waiting for a pointer-down.
    Idle,
    /// Pointer is held down; points accumulate into this stroke.
    Drawing(Stroke),
}

/// Records completed gestures and supports undo/redo with full replay.
///
/// Maintains two stacks: `applied` (strokes currently rendered) and
/// `undone` (strokes removed by undo, redoable). Invariant: replaying
/// `applied` in order onto a cleared surface reproduces exactly the
/// visible drawing. The history only tracks geometry; rendering is the
/// caller's job, which is what makes replay use the brush settings in
/// effect at replay time.
#[derive(Debug)]
pub struct StrokeHistory {
    gesture: Gesture,
    applied: Vec<Stroke>,
    undone: Vec<Stroke>,
}

impl Default for StrokeHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl StrokeHistory {
    pub fn new() -> Self {
        Self {
            gesture: Gesture::Idle,
            applied: Vec::new(),
            undone: Vec::new(),
        }
    }

    /// Starts a new in-progress stroke seeded with one point.
    ///
    /// No-op if a stroke is already in progress (e.g. a second
    /// pointer-down arriving before the matching pointer-up).
    pub fn begin_stroke(&mut self, point: Point) {
        match self.gesture {
            Gesture::Idle => self.gesture = Gesture::Drawing(Stroke::new(point)),
            Gesture::Drawing(_) => {
                debug!("begin_stroke ignored: a stroke is already in progress");
            }
        }
    }

    /// Appends a point to the in-progress stroke.
    ///
    /// Returns the previously recorded point (the segment start the
    /// renderer needs), or `None` when no gesture is active.
    pub fn extend_stroke(&mut self, point: Point) -> Option<Point> {
        match &mut self.gesture {
            Gesture::Drawing(stroke) => {
                let previous = stroke.last();
                stroke.push(point);
                Some(previous)
            }
            Gesture::Idle => None,
        }
    }

    /// Seals the in-progress stroke and appends it to the applied stack.
    ///
    /// Committing new work invalidates old redo history, so the undone
    /// stack is cleared. No-op when no gesture is active.
    pub fn commit_stroke(&mut self) {
        if let Gesture::Drawing(stroke) = std::mem::replace(&mut self.gesture, Gesture::Idle) {
            debug!("committing stroke with {} points", stroke.len());
            self.applied.push(stroke);
            self.undone.clear();
        }
    }

    /// Moves the most recent applied stroke to the redo stack.
    ///
    /// Returns `true` if a stroke was moved (the caller must then replay).
    pub fn undo(&mut self) -> bool {
        match self.applied.pop() {
            Some(stroke) => {
                self.undone.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Moves the most recently undone stroke back to the applied stack.
    ///
    /// Returns `true` if a stroke was moved (the caller must then replay).
    pub fn redo(&mut self) -> bool {
        match self.undone.pop() {
            Some(stroke) => {
                self.applied.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Empties both stacks. The in-progress gesture is untouched.
    pub fn clear(&mut self) {
        self.applied.clear();
        self.undone.clear();
    }

    /// Last recorded point of the in-progress stroke, if any.
    pub fn current_point(&self) -> Option<Point> {
        match &self.gesture {
            Gesture::Drawing(stroke) => Some(stroke.last()),
            Gesture::Idle => None,
        }
    }

    /// Whether a gesture is currently active.
    pub fn is_drawing(&self) -> bool {
        matches!(self.gesture, Gesture::Drawing(_))
    }

    /// The strokes currently rendered, oldest first.
    pub fn applied(&self) -> &[Stroke] {
        &self.applied
    }

    pub fn can_undo(&self) -> bool {
        !self.applied.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Replaces the applied stack wholesale (session restore).
    pub fn restore(&mut self, strokes: Vec<Stroke>) {
        self.gesture = Gesture::Idle;
        self.applied = strokes;
        self.undone.clear();
    }
}
