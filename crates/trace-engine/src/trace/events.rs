/// Everything the recognizer reports to its collaborators (render overlay,
/// audio cues, completion callbacks). These are its only observable effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    /// Tracing became active for the current stroke.
    TraceStart { stroke: usize },
    /// Forward progress accepted on the current stroke.
    TraceProgress {
        stroke: usize,
        checkpoint: usize,
        total_checkpoints: usize,
    },
    /// A stroke reached its last checkpoint.
    StrokeComplete { stroke: usize },
    /// Every stroke of the path is completed. Emitted once per session.
    AllStrokesComplete,
    /// An active trace ended because the pointer was released or left the surface.
    TraceEnd,
    /// A pointer-down that missed the surface or the start of the active stroke.
    EmptyTap,
}

/// Receives trace events as they are dispatched.
pub trait TraceListener {
    fn on_event(&mut self, event: &TraceEvent);
}

impl<F> TraceListener for F
where
    F: FnMut(&TraceEvent),
{
    fn on_event(&mut self, event: &TraceEvent) {
        self(event)
    }
}
