// trace/mod.rs
//
// The recognizer proper: checkpoint matching, per-stroke progress, and the
// session orchestrator that sequences strokes and emits trace events.

pub mod events;
pub mod matcher;
pub mod orchestrator;
pub mod session;
pub mod stroke;

pub use events::{TraceEvent, TraceListener};
pub use matcher::{Candidate, CheckpointMatcher, MatchOutcome};
pub use orchestrator::SessionOrchestrator;
pub use session::TracingSession;
pub use stroke::{Advance, StrokePhase, StrokeState};
