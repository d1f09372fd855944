use super::stroke::StrokeState;
use crate::path::ReferencePath;

/// Aggregate state of one tracing attempt.
///
/// Created fresh per attempt and mutated only by the orchestrator.
/// `current_stroke` never decreases; it equals the stroke count once every
/// stroke is completed.
#[derive(Debug, Clone, PartialEq)]
pub struct TracingSession {
    pub(crate) current_stroke: usize,
    pub(crate) actively_tracing: bool,
    pub(crate) strokes: Vec<StrokeState>,
}

impl TracingSession {
    pub fn new(path: &ReferencePath) -> Self {
        Self {
            current_stroke: 0,
            actively_tracing: false,
            strokes: path.strokes().map(|s| StrokeState::new(s.len())).collect(),
        }
    }

    /// Index of the stroke being traced, or the stroke count when all are done.
    pub fn current_stroke(&self) -> usize {
        self.current_stroke
    }

    pub fn is_actively_tracing(&self) -> bool {
        self.actively_tracing
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    pub fn stroke(&self, index: usize) -> Option<&StrokeState> {
        self.strokes.get(index)
    }

    pub fn strokes(&self) -> &[StrokeState] {
        &self.strokes
    }

    /// State of the stroke being traced; `None` once all are done.
    pub fn current(&self) -> Option<&StrokeState> {
        self.strokes.get(self.current_stroke)
    }

    pub fn is_complete(&self) -> bool {
        self.current_stroke >= self.strokes.len()
    }

    pub fn completed_stroke_count(&self) -> usize {
        self.strokes.iter().filter(|s| s.is_completed()).count()
    }

    /// Progress of the stroke being traced (1.0 once all are done).
    pub fn current_progress(&self) -> f32 {
        self.current().map_or(1.0, StrokeState::progress)
    }

    /// Mean progress across all strokes.
    pub fn overall_progress(&self) -> f32 {
        if self.strokes.is_empty() {
            return 0.0;
        }
        let sum: f32 = self.strokes.iter().map(StrokeState::progress).sum();
        sum / self.strokes.len() as f32
    }

    /// Back to the initial state for a new attempt.
    pub fn reset(&mut self) {
        self.current_stroke = 0;
        self.actively_tracing = false;
        for s in &mut self.strokes {
            *s = StrokeState::new(s.checkpoint_count());
        }
    }
}
