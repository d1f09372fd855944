/// Reasons a reference path is refused at load time.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathError {
    /// A path needs at least one stroke.
    #[error("reference path has no strokes")]
    NoStrokes,

    /// Every stroke needs a start and an end.
    #[error("stroke {stroke} has {count} checkpoint(s), at least 2 are required")]
    TooFewCheckpoints { stroke: usize, count: usize },

    /// Two adjacent checkpoints share a position (zero-length segment).
    #[error("stroke {stroke}: checkpoints {index} and {} coincide", .index + 1)]
    CoincidentCheckpoints { stroke: usize, index: usize },

    /// A coordinate is NaN or infinite.
    #[error("stroke {stroke}: checkpoint {index} has a non-finite coordinate")]
    NonFinite { stroke: usize, index: usize },

    /// Consecutive checkpoints are further apart than the matching radius,
    /// so a steady trace could fall between them.
    #[error("stroke {stroke}: gap {gap:.3} after checkpoint {index} is not below tolerance {tolerance:.3}")]
    TooSparse {
        stroke: usize,
        index: usize,
        gap: f32,
        tolerance: f32,
    },
}

/// Invalid recognizer options.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("tolerance_radius must be a positive finite number, got {0}")]
    ToleranceRadius(f32),

    #[error("start_tolerance must be a positive finite number, got {0}")]
    StartTolerance(f32),

    #[error("max_forward_skip must be at least 1")]
    MaxForwardSkip,
}

/// Failure while turning a JSON document into a usable path or config.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid path: {0}")]
    Path(#[from] PathError),

    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    /// A point was neither `[x, y]` nor `[x, y, z]`.
    #[error("stroke {stroke}: point {index} has {len} coordinate(s), expected 2 or 3")]
    PointArity { stroke: usize, index: usize, len: usize },
}
