use glam::Vec3;

use crate::path::Stroke;

/// Nearest checkpoint to a point, before any acceptance rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub index: usize,
    pub distance: f32,
}

/// Result of matching one path-space point against the active stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchOutcome {
    /// Forward progress to this checkpoint index.
    Accepted(usize),
    /// Nearest checkpoint is outside the tolerance radius (or the stroke is empty).
    TooFar(Option<Candidate>),
    /// Nearest checkpoint is at or behind the last match.
    Behind(Candidate),
    /// Nearest checkpoint is further ahead than the skip bound allows.
    SkippedTooFar(Candidate),
}

impl MatchOutcome {
    pub fn accepted(&self) -> Option<usize> {
        match *self {
            MatchOutcome::Accepted(index) => Some(index),
            _ => None,
        }
    }
}

/// Decides whether an incoming point advances a stroke.
///
/// The whole stroke is scanned, not just the checkpoints ahead of the last
/// match, so a finger wobbling back over an earlier part of the path finds
/// that earlier checkpoint and is rejected as `Behind` instead of snapping to
/// a later one. The backward rule and the skip bound together stop the wide
/// search from being used to jump ahead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckpointMatcher {
    pub tolerance_radius: f32,
    pub max_forward_skip: usize,
}

impl CheckpointMatcher {
    pub fn new(tolerance_radius: f32, max_forward_skip: usize) -> Self {
        Self {
            tolerance_radius,
            max_forward_skip,
        }
    }

    /// Nearest checkpoint on the stroke. Ties resolve to the lowest index.
    pub fn find_nearest(point: Vec3, stroke: &Stroke) -> Option<Candidate> {
        let mut best: Option<Candidate> = None;
        for cp in stroke.checkpoints() {
            let distance = point.distance(cp.pos);
            if best.map_or(true, |b| distance < b.distance) {
                best = Some(Candidate { index: cp.index, distance });
            }
        }
        best
    }

    /// Match `point` against `stroke` given the last accepted checkpoint
    /// (`None` before the first match).
    pub fn match_point(
        &self,
        point: Vec3,
        stroke: &Stroke,
        last_matched: Option<usize>,
    ) -> MatchOutcome {
        let candidate = match Self::find_nearest(point, stroke) {
            Some(c) if c.distance <= self.tolerance_radius => c,
            other => return MatchOutcome::TooFar(other),
        };

        if let Some(last) = last_matched {
            if candidate.index <= last {
                return MatchOutcome::Behind(candidate);
            }
        }

        // With no match yet the previous index is -1.
        let skip = match last_matched {
            Some(last) => candidate.index - last,
            None => candidate.index + 1,
        };
        if skip > self.max_forward_skip {
            return MatchOutcome::SkippedTooFar(candidate);
        }

        MatchOutcome::Accepted(candidate.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal(n: usize) -> Stroke {
        Stroke::new((0..n).map(|i| Vec3::new(i as f32 * 0.2, 0.0, 0.0)))
    }

    fn at(i: usize) -> Vec3 {
        Vec3::new(i as f32 * 0.2, 0.05, 0.0)
    }

    #[test]
    fn nearest_scans_whole_stroke() {
        let stroke = horizontal(10);
        let c = CheckpointMatcher::find_nearest(at(7), &stroke).unwrap();
        assert_eq!(c.index, 7);
        assert!((c.distance - 0.05).abs() < 1e-5);
    }

    #[test]
    fn nearest_tie_prefers_lower_index() {
        let stroke = horizontal(3);
        let c = CheckpointMatcher::find_nearest(Vec3::new(0.1, 0.0, 0.0), &stroke).unwrap();
        assert_eq!(c.index, 0);
    }

    #[test]
    fn accept_next_checkpoint() {
        let m = CheckpointMatcher::new(0.35, 3);
        let stroke = horizontal(10);
        assert_eq!(m.match_point(at(1), &stroke, None), MatchOutcome::Accepted(1));
        assert_eq!(m.match_point(at(3), &stroke, Some(2)), MatchOutcome::Accepted(3));
    }

    #[test]
    fn reject_outside_tolerance() {
        let m = CheckpointMatcher::new(0.35, 3);
        let stroke = horizontal(10);
        let outcome = m.match_point(Vec3::new(0.4, 1.0, 0.0), &stroke, Some(1));
        assert!(matches!(outcome, MatchOutcome::TooFar(Some(c)) if c.index == 2));
    }

    #[test]
    fn reject_repeat_and_backward() {
        let m = CheckpointMatcher::new(0.35, 3);
        let stroke = horizontal(10);
        assert!(matches!(m.match_point(at(4), &stroke, Some(4)), MatchOutcome::Behind(_)));
        assert!(matches!(m.match_point(at(3), &stroke, Some(4)), MatchOutcome::Behind(_)));
        assert!(matches!(m.match_point(at(0), &stroke, Some(0)), MatchOutcome::Behind(_)));
    }

    #[test]
    fn skip_bound() {
        let m = CheckpointMatcher::new(0.35, 3);
        let stroke = horizontal(10);
        assert_eq!(m.match_point(at(5), &stroke, Some(2)), MatchOutcome::Accepted(5));
        assert!(matches!(
            m.match_point(at(6), &stroke, Some(2)),
            MatchOutcome::SkippedTooFar(c) if c.index == 6
        ));
        // From "no match yet" the previous index counts as -1.
        assert_eq!(m.match_point(at(2), &stroke, None), MatchOutcome::Accepted(2));
        assert!(matches!(m.match_point(at(3), &stroke, None), MatchOutcome::SkippedTooFar(_)));
    }

    #[test]
    fn skip_of_one_only_allows_neighbours() {
        let m = CheckpointMatcher::new(0.35, 1);
        let stroke = horizontal(10);
        assert_eq!(m.match_point(at(3), &stroke, Some(2)), MatchOutcome::Accepted(3));
        assert!(matches!(m.match_point(at(4), &stroke, Some(2)), MatchOutcome::SkippedTooFar(_)));
    }

    #[test]
    fn loop_back_matches_earlier_checkpoint() {
        // A stroke that curls back near its own start: the wide scan finds
        // the earlier checkpoint, which is then refused as behind.
        let stroke = Stroke::from_xy(&[
            [0.0, 0.0],
            [0.2, 0.0],
            [0.4, 0.0],
            [0.4, 0.2],
            [0.2, 0.2],
            [0.02, 0.05],
        ]);
        let m = CheckpointMatcher::new(0.35, 3);
        let outcome = m.match_point(Vec3::new(0.0, 0.0, 0.0), &stroke, Some(3));
        assert!(matches!(outcome, MatchOutcome::Behind(c) if c.index == 0));
        assert_eq!(outcome.accepted(), None);
    }
}
