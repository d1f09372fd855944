pub mod bridge;
pub mod config;
pub mod cues;
pub mod error;
pub mod input;
pub mod path;
pub mod projection;
pub mod trace;

// Re-export key types at crate root for convenience
pub use bridge::protocol::{EventBuffer, EventRecord, EVENT_FLOATS, PROTOCOL_VERSION};
pub use config::TraceConfig;
pub use cues::SoundCue;
pub use error::{ConfigError, LoadError, PathError};
pub use input::{InputQueue, PointerEvent};
pub use path::{letter_a, path_from_json, Checkpoint, GlyphDocument, ReferencePath, Stroke};
pub use projection::{IdentityProjector, PlaneProjector, Projector, ViewportProjector};
pub use trace::{
    CheckpointMatcher, MatchOutcome, SessionOrchestrator, StrokePhase, StrokeState, TraceEvent,
    TraceListener, TracingSession,
};
