/// Wire format for trace events read by TypeScript.
/// Must stay in sync with the web layer's `traceProtocol.ts`.
///
/// Each event is 4 floats:
/// ```text
/// [kind, a, b, c]
/// TraceStart          a = stroke
/// TraceProgress       a = stroke, b = checkpoint, c = total checkpoints
/// StrokeComplete      a = stroke
/// AllStrokesComplete
/// TraceEnd
/// EmptyTap
/// ```
/// Unused payload slots are zero.

use bytemuck::{Pod, Zeroable};

use crate::trace::TraceEvent;

/// Protocol version exposed to the web layer.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per event record (wire format, never changes).
pub const EVENT_FLOATS: usize = 4;

/// Default number of records kept per tick.
pub const DEFAULT_MAX_EVENTS: usize = 64;

pub const KIND_TRACE_START: f32 = 1.0;
pub const KIND_TRACE_PROGRESS: f32 = 2.0;
pub const KIND_STROKE_COMPLETE: f32 = 3.0;
pub const KIND_ALL_STROKES_COMPLETE: f32 = 4.0;
pub const KIND_TRACE_END: f32 = 5.0;
pub const KIND_EMPTY_TAP: f32 = 6.0;

/// One trace event in wire form.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct EventRecord {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl EventRecord {
    fn new(kind: f32, a: f32, b: f32, c: f32) -> Self {
        Self { kind, a, b, c }
    }
}

impl From<&TraceEvent> for EventRecord {
    fn from(event: &TraceEvent) -> Self {
        match *event {
            TraceEvent::TraceStart { stroke } => Self::new(KIND_TRACE_START, stroke as f32, 0.0, 0.0),
            TraceEvent::TraceProgress {
                stroke,
                checkpoint,
                total_checkpoints,
            } => Self::new(
                KIND_TRACE_PROGRESS,
                stroke as f32,
                checkpoint as f32,
                total_checkpoints as f32,
            ),
            TraceEvent::StrokeComplete { stroke } => {
                Self::new(KIND_STROKE_COMPLETE, stroke as f32, 0.0, 0.0)
            }
            TraceEvent::AllStrokesComplete => Self::new(KIND_ALL_STROKES_COMPLETE, 0.0, 0.0, 0.0),
            TraceEvent::TraceEnd => Self::new(KIND_TRACE_END, 0.0, 0.0, 0.0),
            TraceEvent::EmptyTap => Self::new(KIND_EMPTY_TAP, 0.0, 0.0, 0.0),
        }
    }
}

/// Capped record buffer rebuilt every tick. The cap only grows, through
/// [`EventBuffer::reserve`]. TypeScript reads `len() * EVENT_FLOATS` floats starting at `as_ptr()`.
pub struct EventBuffer {
    records: Vec<EventRecord>,
    capacity: usize,
}

impl EventBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an event. Returns false (and drops it) when the buffer is full.
    pub fn push(&mut self, event: &TraceEvent) -> bool {
        if self.records.len() >= self.capacity {
            log::warn!("event buffer full ({}), dropping {:?}", self.capacity, event);
            return false;
        }
        self.records.push(EventRecord::from(event));
        true
    }

    /// Raise the cap so `additional` more records fit.
    pub fn reserve(&mut self, additional: usize) {
        let needed = self.records.len() + additional;
        if needed > self.capacity {
            log::debug!("event buffer grows {} -> {}", self.capacity, needed);
            self.capacity = needed;
        }
        self.records.reserve(additional);
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    /// Records as a flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.records)
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.as_floats().as_ptr()
    }
}

impl Default for EventBuffer {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_EVENTS)
    }
}
