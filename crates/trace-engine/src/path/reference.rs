use glam::Vec3;

use crate::error::PathError;

/// An indexed sample point along a stroke's intended trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checkpoint {
    /// Position within the owning stroke.
    pub index: usize,
    /// Position in path-space.
    pub pos: Vec3,
}

/// One continuous pen-down segment of a glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    checkpoints: Vec<Checkpoint>,
}

impl Stroke {
    /// Build a stroke from ordered points. Indices are assigned in order.
    pub fn new(points: impl IntoIterator<Item = Vec3>) -> Self {
        let checkpoints = points
            .into_iter()
            .enumerate()
            .map(|(index, pos)| Checkpoint { index, pos })
            .collect();
        Self { checkpoints }
    }

    /// Build a stroke on the z = 0 plane from `[x, y]` pairs.
    pub fn from_xy(points: &[[f32; 2]]) -> Self {
        Self::new(points.iter().map(|&[x, y]| Vec3::new(x, y, 0.0)))
    }

    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    pub fn first(&self) -> Option<&Checkpoint> {
        self.checkpoints.first()
    }

    /// Index of the final checkpoint. Reaching it completes the stroke.
    pub fn last_index(&self) -> usize {
        self.checkpoints.len().saturating_sub(1)
    }

    pub fn get(&self, index: usize) -> Option<&Checkpoint> {
        self.checkpoints.get(index)
    }

    fn validate(&self, stroke: usize) -> Result<(), PathError> {
        if self.checkpoints.len() < 2 {
            return Err(PathError::TooFewCheckpoints {
                stroke,
                count: self.checkpoints.len(),
            });
        }
        for cp in &self.checkpoints {
            if !cp.pos.is_finite() {
                return Err(PathError::NonFinite { stroke, index: cp.index });
            }
        }
        for w in self.checkpoints.windows(2) {
            if w[0].pos == w[1].pos {
                return Err(PathError::CoincidentCheckpoints { stroke, index: w[0].index });
            }
        }
        Ok(())
    }
}

/// The immutable definition of a traceable glyph: ordered strokes of ordered checkpoints.
///
/// Only obtainable through [`ReferencePath::load`], so every instance has at
/// least one stroke, every stroke has at least two checkpoints, and no stroke
/// contains a zero-length segment.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferencePath {
    strokes: Vec<Stroke>,
}

impl ReferencePath {
    /// Validate and freeze a set of strokes.
    pub fn load(strokes: Vec<Stroke>) -> Result<Self, PathError> {
        if strokes.is_empty() {
            return Err(PathError::NoStrokes);
        }
        for (i, stroke) in strokes.iter().enumerate() {
            stroke.validate(i)?;
        }
        log::debug!(
            "reference path loaded: {} strokes, {} checkpoints",
            strokes.len(),
            strokes.iter().map(Stroke::len).sum::<usize>()
        );
        Ok(Self { strokes })
    }

    /// Check the density precondition: every gap between consecutive
    /// checkpoints must be smaller than the matching radius.
    pub fn validate_density(&self, tolerance_radius: f32) -> Result<(), PathError> {
        for (stroke, s) in self.strokes.iter().enumerate() {
            for w in s.checkpoints.windows(2) {
                let gap = w[0].pos.distance(w[1].pos);
                if gap >= tolerance_radius {
                    return Err(PathError::TooSparse {
                        stroke,
                        index: w[0].index,
                        gap,
                        tolerance: tolerance_radius,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    pub fn stroke(&self, stroke: usize) -> Option<&Stroke> {
        self.strokes.get(stroke)
    }

    pub fn strokes(&self) -> impl Iterator<Item = &Stroke> {
        self.strokes.iter()
    }

    /// Number of checkpoints in a stroke (0 when the stroke does not exist).
    pub fn checkpoint_count(&self, stroke: usize) -> usize {
        self.strokes.get(stroke).map_or(0, Stroke::len)
    }

    pub fn checkpoint(&self, stroke: usize, index: usize) -> Option<&Checkpoint> {
        self.strokes.get(stroke)?.get(index)
    }

    /// A copy of this path moved by `offset`, e.g. to place a glyph on a board.
    /// The moved strokes go back through [`ReferencePath::load`]: a non-finite
    /// offset, or one large enough to round neighbours together, is an error.
    pub fn translated(&self, offset: Vec3) -> Result<Self, PathError> {
        let strokes = self
            .strokes
            .iter()
            .map(|s| Stroke::new(s.checkpoints.iter().map(|cp| cp.pos + offset)))
            .collect();
        Self::load(strokes)
    }
}
