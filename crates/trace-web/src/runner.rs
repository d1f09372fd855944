use glam::{Vec2, Vec3};
use trace_engine::path::{letter_a, path_from_json, BOARD_OFFSET};
use trace_engine::{
    EventBuffer, InputQueue, LoadError, PointerEvent, Projector, ReferencePath, SessionOrchestrator,
    SoundCue, TraceConfig, TracingSession, ViewportProjector,
};

/// Size of the writing board in path-space units.
pub const BOARD_SIZE: Vec2 = Vec2::new(3.5, 4.0);

/// Drives a tracing session from the browser.
///
/// JS pushes pointer events as they arrive and calls `tick()` once per frame;
/// the runner feeds the queue to the orchestrator and packs the resulting
/// events and audio cues into flat buffers that TypeScript reads by pointer.
pub struct TraceRunner<P: Projector> {
    orchestrator: SessionOrchestrator<P>,
    input: InputQueue,
    events: EventBuffer,
    /// Flat buffer of cue ids for the sound manager.
    cue_buffer: Vec<u8>,
    /// Per-stroke progress, refreshed every tick.
    progress_buffer: Vec<f32>,
}

impl<P: Projector> TraceRunner<P> {
    pub fn new(orchestrator: SessionOrchestrator<P>) -> Self {
        let stroke_count = orchestrator.session().stroke_count();
        let mut runner = Self {
            orchestrator,
            input: InputQueue::new(),
            events: EventBuffer::default(),
            cue_buffer: Vec::with_capacity(32),
            progress_buffer: Vec::with_capacity(stroke_count),
        };
        runner.refresh_progress();
        runner
    }

    /// Push a pointer event into the queue.
    pub fn push_input(&mut self, event: PointerEvent) {
        self.input.push(event);
    }

    /// Handle queued input and rebuild the output buffers.
    pub fn tick(&mut self) {
        self.events.clear();
        self.cue_buffer.clear();

        self.orchestrator.process(&mut self.input);

        // A busy tick can outgrow the default cap; every event must reach JS.
        let events = self.orchestrator.drain_events();
        self.events.reserve(events.len());
        for event in &events {
            self.events.push(event);
            if let Some(cue) = SoundCue::for_event(event) {
                self.cue_buffer.push(cue.0 as u8);
            }
        }
        self.refresh_progress();
    }

    /// Start a new attempt ("play again").
    pub fn reset(&mut self) {
        self.input.clear();
        self.orchestrator.reset();
        self.events.clear();
        self.cue_buffer.clear();
        self.refresh_progress();
    }

    fn refresh_progress(&mut self) {
        self.progress_buffer.clear();
        self.progress_buffer
            .extend(self.orchestrator.session().strokes().iter().map(|s| s.progress()));
    }

    pub fn session(&self) -> &TracingSession {
        self.orchestrator.session()
    }

    pub fn projector_mut(&mut self) -> &mut P {
        self.orchestrator.projector_mut()
    }

    // ---- Pointer accessors for TypeScript reads ----

    pub fn events_ptr(&self) -> *const f32 {
        self.events.as_ptr()
    }

    pub fn events_len(&self) -> u32 {
        self.events.len() as u32
    }

    pub fn events_floats(&self) -> &[f32] {
        self.events.as_floats()
    }

    pub fn cues_ptr(&self) -> *const u8 {
        self.cue_buffer.as_ptr()
    }

    pub fn cues_len(&self) -> u32 {
        self.cue_buffer.len() as u32
    }

    pub fn cues(&self) -> &[u8] {
        &self.cue_buffer
    }

    pub fn stroke_progress(&self) -> &[f32] {
        &self.progress_buffer
    }

    pub fn current_stroke(&self) -> u32 {
        self.session().current_stroke() as u32
    }

    pub fn stroke_count(&self) -> u32 {
        self.session().stroke_count() as u32
    }

    pub fn overall_progress(&self) -> f32 {
        self.session().overall_progress()
    }

    pub fn is_tracing(&self) -> bool {
        self.session().is_actively_tracing()
    }

    pub fn is_complete(&self) -> bool {
        self.session().is_complete()
    }
}

impl TraceRunner<ViewportProjector> {
    /// Build a runner for a glyph on the writing board, viewed through a
    /// viewport of the given pixel size. Without a glyph document the
    /// built-in letter "A" is used; without a config the defaults apply.
    pub fn for_board(
        glyph_json: Option<&str>,
        config_json: Option<&str>,
        viewport: Vec2,
    ) -> Result<Self, LoadError> {
        let path: ReferencePath = match glyph_json {
            Some(json) => path_from_json(json)?,
            None => letter_a()?,
        };
        let path = path.translated(BOARD_OFFSET)?;
        let config = match config_json {
            Some(json) => TraceConfig::from_json(json)?,
            None => TraceConfig::default(),
        };
        let projector = board_projector(viewport);
        let orchestrator = SessionOrchestrator::new(path, config, projector)?;
        Ok(Self::new(orchestrator))
    }

    /// Follow a canvas resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.projector_mut().resize(width, height);
    }
}

/// Orthographic view fitted around the board.
pub fn board_projector(viewport: Vec2) -> ViewportProjector {
    let center = Vec2::new(BOARD_OFFSET.x, BOARD_OFFSET.y);
    ViewportProjector::new(viewport, BOARD_SIZE)
        .with_center(center)
        .with_board(center, BOARD_SIZE / 2.0)
        .with_z(BOARD_OFFSET.z)
}

/// Pixel position of a path-space point under [`board_projector`].
pub fn board_to_screen(projector: &ViewportProjector, p: Vec3) -> Vec2 {
    let visible = projector.visible_size();
    let ndc = (Vec2::new(p.x, p.y) - projector.center) / (visible / 2.0);
    Vec2::new(
        (ndc.x + 1.0) / 2.0 * projector.viewport.x,
        (1.0 - ndc.y) / 2.0 * projector.viewport.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use trace_engine::bridge::protocol::{
        DEFAULT_MAX_EVENTS, KIND_ALL_STROKES_COMPLETE, KIND_EMPTY_TAP, KIND_STROKE_COMPLETE,
        KIND_TRACE_PROGRESS, KIND_TRACE_START,
    };

    fn runner() -> TraceRunner<ViewportProjector> {
        TraceRunner::for_board(None, None, Vec2::new(700.0, 800.0)).unwrap()
    }

    fn screen(r: &TraceRunner<ViewportProjector>, stroke: usize, index: usize) -> Vec2 {
        let p = r.orchestrator.path().checkpoint(stroke, index).unwrap().pos;
        board_to_screen(r.orchestrator.projector(), p)
    }

    #[test]
    fn screen_round_trip_lands_on_checkpoint() {
        let r = runner();
        let s = screen(&r, 0, 3);
        let target = r.orchestrator.path().checkpoint(0, 3).unwrap().pos;
        let hit = r.orchestrator.projector().project(s).unwrap();
        assert!(hit.distance(target) < 1e-4);
    }

    #[test]
    fn tick_packs_events_and_cues() {
        let mut r = runner();
        let start = screen(&r, 0, 0);
        let next = screen(&r, 0, 1);
        r.push_input(PointerEvent::Down { x: start.x, y: start.y });
        r.push_input(PointerEvent::Move { x: next.x, y: next.y });
        r.tick();

        assert_eq!(r.events_len(), 2);
        let floats = r.events_floats();
        assert_eq!(floats[0], KIND_TRACE_START);
        assert_eq!(&floats[4..8], &[KIND_TRACE_PROGRESS, 0.0, 1.0, 8.0]);
        assert_eq!(r.cues(), &[SoundCue::TRACING_TONE.0 as u8, SoundCue::checkpoint(1).0 as u8]);
        assert!((r.stroke_progress()[0] - 0.25).abs() < 1e-6);

        // Buffers only hold the latest tick.
        r.tick();
        assert_eq!(r.events_len(), 0);
        assert_eq!(r.cues_len(), 0);
    }

    #[test]
    fn stray_tap_is_empty_tap() {
        let mut r = runner();
        r.push_input(PointerEvent::Down { x: 1.0, y: 1.0 });
        r.tick();
        assert_eq!(r.events_floats(), &[KIND_EMPTY_TAP, 0.0, 0.0, 0.0]);
        assert!(r.cues().is_empty());
    }

    #[test]
    fn busy_tick_keeps_every_event() {
        let mut r = runner();
        let taps = DEFAULT_MAX_EVENTS + 6;
        for _ in 0..taps {
            r.push_input(PointerEvent::Down { x: 1.0, y: 1.0 });
        }
        for stroke in 0..3 {
            let count = r.orchestrator.path().checkpoint_count(stroke);
            let start = screen(&r, stroke, 0);
            r.push_input(PointerEvent::Down { x: start.x, y: start.y });
            for i in 1..count {
                let p = screen(&r, stroke, i);
                r.push_input(PointerEvent::Move { x: p.x, y: p.y });
            }
            r.push_input(PointerEvent::Up { x: start.x, y: start.y });
        }
        r.tick();

        assert!(r.is_complete());
        // Taps, then per stroke: start, one progress per remaining checkpoint, complete.
        let expected = taps + (1 + 7 + 1) + (1 + 7 + 1) + (1 + 6 + 1) + 1;
        assert_eq!(r.events_len() as usize, expected);
        let kinds: Vec<f32> = r.events_floats().chunks(4).map(|c| c[0]).collect();
        assert_eq!(kinds.iter().filter(|&&k| k == KIND_STROKE_COMPLETE).count(), 3);
        assert_eq!(kinds.last(), Some(&KIND_ALL_STROKES_COMPLETE));
    }

    #[test]
    fn reset_clears_everything() {
        let mut r = runner();
        let start = screen(&r, 0, 0);
        r.push_input(PointerEvent::Down { x: start.x, y: start.y });
        r.tick();
        assert!(r.is_tracing());
        r.push_input(PointerEvent::Leave);
        r.reset();
        r.tick();
        assert!(!r.is_tracing());
        assert_eq!(r.events_len(), 0);
        assert_eq!(r.stroke_progress(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn custom_glyph_and_config() {
        let glyph = r#"{ "name": "I", "strokes": [[[0.0, 1.0], [0.0, 0.8], [0.0, 0.6]]] }"#;
        let config = r#"{ "max_forward_skip": 1 }"#;
        let r = TraceRunner::for_board(Some(glyph), Some(config), Vec2::new(350.0, 400.0)).unwrap();
        assert_eq!(r.stroke_count(), 1);
        assert_eq!(r.orchestrator.config().max_forward_skip, 1);
    }

    #[test]
    fn bad_documents_are_reported() {
        let err = TraceRunner::for_board(Some("not json"), None, Vec2::new(100.0, 100.0));
        assert!(matches!(err, Err(LoadError::Json(_))));
        let config = r#"{ "tolerance_radius": -1 }"#;
        let err = TraceRunner::for_board(None, Some(config), Vec2::new(100.0, 100.0));
        assert!(matches!(err, Err(LoadError::Config(_))));
    }
}
