use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::reference::{ReferencePath, Stroke};
use crate::error::{LoadError, PathError};

/// Letter "A" as three strokes on the z = 0 plane, centered on the origin.
/// Left leg (bottom-left up to the apex), right leg (apex down to
/// bottom-right), then the crossbar left to right.
pub const LETTER_A: [&[[f32; 2]]; 3] = [
    &[
        [-1.0, -1.5],
        [-0.85, -1.0],
        [-0.7, -0.5],
        [-0.55, 0.0],
        [-0.4, 0.5],
        [-0.25, 1.0],
        [-0.1, 1.3],
        [0.0, 1.5],
    ],
    &[
        [0.0, 1.5],
        [0.1, 1.3],
        [0.25, 1.0],
        [0.4, 0.5],
        [0.55, 0.0],
        [0.7, -0.5],
        [0.85, -1.0],
        [1.0, -1.5],
    ],
    &[
        [-0.55, 0.0],
        [-0.35, 0.0],
        [-0.15, 0.0],
        [0.0, 0.0],
        [0.15, 0.0],
        [0.35, 0.0],
        [0.55, 0.0],
    ],
];

/// Where the letter sits on the writing board in the game scene.
pub const BOARD_OFFSET: Vec3 = Vec3::new(0.0, 1.2, 0.03);

/// The built-in letter "A".
pub fn letter_a() -> Result<ReferencePath, PathError> {
    ReferencePath::load(LETTER_A.iter().map(|pts| Stroke::from_xy(pts)).collect())
}

/// A glyph as exchanged with the content pipeline.
///
/// Points are `[x, y]` (placed on z = 0) or `[x, y, z]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlyphDocument {
    /// Display name, e.g. "A".
    #[serde(default)]
    pub name: String,
    /// Strokes in drawing order, each a list of points.
    pub strokes: Vec<Vec<Vec<f32>>>,
}

impl GlyphDocument {
    /// Parse a glyph document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Convert into a validated reference path.
    pub fn to_path(&self) -> Result<ReferencePath, LoadError> {
        let mut strokes = Vec::with_capacity(self.strokes.len());
        for (s, points) in self.strokes.iter().enumerate() {
            let mut pts = Vec::with_capacity(points.len());
            for (i, p) in points.iter().enumerate() {
                let pos = match p.as_slice() {
                    [x, y] => Vec3::new(*x, *y, 0.0),
                    [x, y, z] => Vec3::new(*x, *y, *z),
                    _ => {
                        return Err(LoadError::PointArity {
                            stroke: s,
                            index: i,
                            len: p.len(),
                        })
                    }
                };
                pts.push(pos);
            }
            strokes.push(Stroke::new(pts));
        }
        Ok(ReferencePath::load(strokes)?)
    }
}

/// Parse and validate a glyph in one step.
pub fn path_from_json(json: &str) -> Result<ReferencePath, LoadError> {
    let doc = GlyphDocument::from_json(json)?;
    let path = doc.to_path()?;
    log::info!("glyph '{}' loaded with {} strokes", doc.name, path.stroke_count());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_a_shape() {
        let path = letter_a().unwrap();
        assert_eq!(path.stroke_count(), 3);
        assert_eq!(path.checkpoint_count(0), 8);
        assert_eq!(path.checkpoint_count(1), 8);
        assert_eq!(path.checkpoint_count(2), 7);
        // Right leg starts where the left leg ends.
        assert_eq!(
            path.checkpoint(0, 7).unwrap().pos,
            path.checkpoint(1, 0).unwrap().pos
        );
    }

    #[test]
    fn parse_mixed_arity_document() {
        let json = r#"{
            "name": "L",
            "strokes": [
                [[0.0, 1.0], [0.0, 0.5], [0.0, 0.0]],
                [[0.0, 0.0, 0.1], [0.5, 0.0, 0.1]]
            ]
        }"#;
        let path = path_from_json(json).unwrap();
        assert_eq!(path.stroke_count(), 2);
        assert_eq!(path.checkpoint(1, 1).unwrap().pos, Vec3::new(0.5, 0.0, 0.1));
    }

    #[test]
    fn reject_bad_arity() {
        let json = r#"{ "strokes": [[[0.0, 1.0], [2.0]]] }"#;
        let err = path_from_json(json).unwrap_err();
        assert!(matches!(err, LoadError::PointArity { stroke: 0, index: 1, len: 1 }));
    }

    #[test]
    fn document_goes_through_path_validation() {
        let json = r#"{ "strokes": [[[0.0, 0.0]]] }"#;
        let err = path_from_json(json).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Path(PathError::TooFewCheckpoints { stroke: 0, count: 1 })
        ));
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(path_from_json("{ strokes"), Err(LoadError::Json(_))));
    }
}
