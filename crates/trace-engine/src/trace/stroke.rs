use glam::Vec3;

use crate::path::Stroke;

/// Lifecycle of one stroke within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokePhase {
    /// No pointer-down has been accepted on this stroke yet.
    #[default]
    NotStarted,
    /// Tracing has begun; progress is retained across pointer-ups.
    InProgress,
    /// The last checkpoint was reached. Terminal.
    Completed,
}

/// What happened when a matched checkpoint was applied to a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Progress moved forward; the stroke is still open.
    Progressed,
    /// Progress reached the final checkpoint.
    Completed,
    /// Not applied: stroke not in progress, or the index does not move forward.
    Ignored,
}

/// Mutable progress of a single stroke.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StrokeState {
    phase: StrokePhase,
    last_matched: Option<usize>,
    checkpoint_count: usize,
}

impl StrokeState {
    pub fn new(checkpoint_count: usize) -> Self {
        Self {
            phase: StrokePhase::NotStarted,
            last_matched: None,
            checkpoint_count,
        }
    }

    pub fn phase(&self) -> StrokePhase {
        self.phase
    }

    pub fn is_completed(&self) -> bool {
        self.phase == StrokePhase::Completed
    }

    /// Last accepted checkpoint index, `None` before the first match.
    pub fn last_matched(&self) -> Option<usize> {
        self.last_matched
    }

    pub fn checkpoint_count(&self) -> usize {
        self.checkpoint_count
    }

    /// Fraction of checkpoints reached, `(last_matched + 1) / checkpoint_count`.
    pub fn progress(&self) -> f32 {
        if self.is_completed() {
            return 1.0;
        }
        match self.last_matched {
            Some(last) if self.checkpoint_count > 0 => {
                ((last + 1) as f32 / self.checkpoint_count as f32).min(1.0)
            }
            _ => 0.0,
        }
    }

    /// Checkpoint a resuming trace must land near: the one after the last match.
    pub fn resume_index(&self) -> Option<usize> {
        let next = self.last_matched.map_or(0, |last| last + 1);
        (next < self.checkpoint_count).then_some(next)
    }

    /// Pointer-down test. Accepts when `point` is within `start_tolerance` of
    /// the stroke's first checkpoint or of the checkpoint after the last
    /// match. Moves `NotStarted` to `InProgress`; an `InProgress` stroke stays
    /// where it is (resume). Completed strokes never restart. The radius is
    /// inclusive: a point exactly `start_tolerance` away still begins.
    pub fn try_begin(&mut self, point: Vec3, stroke: &Stroke, start_tolerance: f32) -> bool {
        if self.is_completed() {
            return false;
        }
        let near = |index: usize| {
            stroke
                .get(index)
                .map_or(false, |cp| point.distance(cp.pos) <= start_tolerance)
        };
        let near_start = near(0);
        let near_resume = self.resume_index().map_or(false, near);
        if !(near_start || near_resume) {
            return false;
        }
        if self.phase == StrokePhase::NotStarted {
            self.phase = StrokePhase::InProgress;
        }
        true
    }

    /// Apply an accepted checkpoint index. Indices that do not move forward
    /// are ignored, so progress never regresses.
    pub fn advance(&mut self, index: usize) -> Advance {
        if self.phase != StrokePhase::InProgress || index >= self.checkpoint_count {
            return Advance::Ignored;
        }
        if self.last_matched.map_or(false, |last| index <= last) {
            return Advance::Ignored;
        }
        self.last_matched = Some(index);
        if index + 1 == self.checkpoint_count {
            self.phase = StrokePhase::Completed;
            Advance::Completed
        } else {
            Advance::Progressed
        }
    }
}
