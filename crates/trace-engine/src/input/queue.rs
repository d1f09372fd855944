/// Pointer events the recognizer understands, in raw device coordinates.
/// Only a single contact is modeled; the input layer filters out others.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// A touch/click began.
    Down { x: f32, y: f32 },
    /// A touch/cursor moved.
    Move { x: f32, y: f32 },
    /// A touch/click ended.
    Up { x: f32, y: f32 },
    /// The pointer left the tracing surface.
    Leave,
}

/// Pointer events buffered between ticks, oldest first.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: Vec<PointerEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: PointerEvent) {
        self.pending.push(event);
    }

    /// Take everything queued so far.
    pub fn drain(&mut self) -> Vec<PointerEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Discard pending input, e.g. on "play again".
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
