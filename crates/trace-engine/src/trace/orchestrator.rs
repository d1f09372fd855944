use glam::Vec2;

use super::events::{TraceEvent, TraceListener};
use super::matcher::{CheckpointMatcher, MatchOutcome};
use super::session::TracingSession;
use super::stroke::Advance;
use crate::config::TraceConfig;
use crate::error::ConfigError;
use crate::input::{InputQueue, PointerEvent};
use crate::path::ReferencePath;
use crate::projection::Projector;

/// Routes pointer events to the active stroke and sequences strokes.
///
/// Only the stroke at `current_stroke` receives input: earlier strokes are
/// frozen and later ones are not reachable yet. Every handler is a no-op once
/// all strokes are completed. Emitted events collect in an internal buffer
/// until they are drained or dispatched.
pub struct SessionOrchestrator<P: Projector> {
    path: ReferencePath,
    config: TraceConfig,
    matcher: CheckpointMatcher,
    projector: P,
    session: TracingSession,
    events: Vec<TraceEvent>,
}

impl<P: Projector> SessionOrchestrator<P> {
    /// Start a session over `path`. Fails if the config is unusable.
    pub fn new(path: ReferencePath, config: TraceConfig, projector: P) -> Result<Self, ConfigError> {
        config.validate()?;
        let session = TracingSession::new(&path);
        Ok(Self {
            matcher: CheckpointMatcher::new(config.tolerance_radius, config.max_forward_skip),
            path,
            config,
            projector,
            session,
            events: Vec::with_capacity(16),
        })
    }

    pub fn session(&self) -> &TracingSession {
        &self.session
    }

    pub fn path(&self) -> &ReferencePath {
        &self.path
    }

    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    pub fn projector(&self) -> &P {
        &self.projector
    }

    /// Mutable projector access, e.g. to follow a viewport resize.
    pub fn projector_mut(&mut self) -> &mut P {
        &mut self.projector
    }

    /// Handle one pointer event to completion.
    pub fn handle(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y } => self.pointer_down(Vec2::new(x, y)),
            PointerEvent::Move { x, y } => self.pointer_move(Vec2::new(x, y)),
            PointerEvent::Up { .. } => self.pointer_up(),
            PointerEvent::Leave => self.pointer_leave(),
        }
    }

    /// Handle every queued event in arrival order.
    pub fn process(&mut self, input: &mut InputQueue) {
        for event in input.drain() {
            self.handle(event);
        }
    }

    pub fn pointer_down(&mut self, raw: Vec2) {
        if self.session.is_complete() {
            return;
        }
        let index = self.session.current_stroke;

        let Some(point) = self.projector.project(raw) else {
            self.events.push(TraceEvent::EmptyTap);
            return;
        };
        let Some(stroke) = self.path.stroke(index) else {
            return;
        };

        if self.session.strokes[index].try_begin(point, stroke, self.config.start_tolerance) {
            self.session.actively_tracing = true;
            log::debug!("trace start on stroke {index} at {point}");
            self.events.push(TraceEvent::TraceStart { stroke: index });
        } else {
            self.events.push(TraceEvent::EmptyTap);
        }
    }

    pub fn pointer_move(&mut self, raw: Vec2) {
        if self.session.is_complete() || !self.session.actively_tracing {
            return;
        }
        let index = self.session.current_stroke;

        // A momentary miss is not an error; tracing continues.
        let Some(point) = self.projector.project(raw) else {
            return;
        };
        let Some(stroke) = self.path.stroke(index) else {
            return;
        };
        let state = &mut self.session.strokes[index];

        let checkpoint = match self.matcher.match_point(point, stroke, state.last_matched()) {
            MatchOutcome::Accepted(checkpoint) => checkpoint,
            rejected => {
                log::trace!("stroke {index}: move rejected ({rejected:?})");
                return;
            }
        };

        let total_checkpoints = stroke.len();
        match state.advance(checkpoint) {
            Advance::Ignored => {}
            Advance::Progressed => {
                self.events.push(TraceEvent::TraceProgress {
                    stroke: index,
                    checkpoint,
                    total_checkpoints,
                });
            }
            Advance::Completed => {
                self.events.push(TraceEvent::TraceProgress {
                    stroke: index,
                    checkpoint,
                    total_checkpoints,
                });
                self.session.current_stroke += 1;
                self.session.actively_tracing = false;
                log::debug!("stroke {index} complete");
                self.events.push(TraceEvent::StrokeComplete { stroke: index });

                if self.session.is_complete() {
                    log::info!("all {} strokes complete", self.session.stroke_count());
                    self.events.push(TraceEvent::AllStrokesComplete);
                }
            }
        }
    }

    pub fn pointer_up(&mut self) {
        self.end_trace();
    }

    pub fn pointer_leave(&mut self) {
        self.end_trace();
    }

    /// Release keeps all progress; only the active flag drops.
    fn end_trace(&mut self) {
        if self.session.is_complete() || !self.session.actively_tracing {
            return;
        }
        self.session.actively_tracing = false;
        self.events.push(TraceEvent::TraceEnd);
    }

    /// Events emitted since the last drain.
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<TraceEvent> {
        std::mem::take(&mut self.events)
    }

    /// Deliver pending events to a listener in emission order, then clear them.
    pub fn dispatch(&mut self, listener: &mut impl TraceListener) {
        for event in self.events.drain(..) {
            listener.on_event(&event);
        }
    }

    /// Start over ("play again"). Pending events are discarded.
    pub fn reset(&mut self) {
        self.session.reset();
        self.events.clear();
        log::debug!("tracing session reset");
    }
}
