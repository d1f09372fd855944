// cues.rs
//
// Maps trace events to the audio cues the game plays for them.
// Synthesis lives in the web layer; Rust only says which cue to play.

use crate::trace::TraceEvent;

/// Number of distinct checkpoint tones; progress cycles through them.
pub const CHECKPOINT_TONES: usize = 6;

/// An audio cue id forwarded to the web sound manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct SoundCue(pub u32);

impl SoundCue {
    pub const TRACING_TONE: SoundCue = SoundCue(1);
    /// First checkpoint tone; tones occupy ids 2..=7.
    pub const CHECKPOINT_BASE: SoundCue = SoundCue(2);
    pub const STROKE_COMPLETE: SoundCue = SoundCue(8);
    pub const LETTER_SOUND: SoundCue = SoundCue(9);

    /// Tone for an accepted checkpoint.
    pub fn checkpoint(index: usize) -> Self {
        SoundCue(Self::CHECKPOINT_BASE.0 + (index % CHECKPOINT_TONES) as u32)
    }

    /// Cue for an event, if it has one.
    pub fn for_event(event: &TraceEvent) -> Option<Self> {
        match *event {
            TraceEvent::TraceStart { .. } => Some(Self::TRACING_TONE),
            TraceEvent::TraceProgress { checkpoint, .. } => Some(Self::checkpoint(checkpoint)),
            TraceEvent::StrokeComplete { .. } => Some(Self::STROKE_COMPLETE),
            TraceEvent::AllStrokesComplete => Some(Self::LETTER_SOUND),
            TraceEvent::TraceEnd | TraceEvent::EmptyTap => None,
        }
    }

    /// Asset name used by the sound manager.
    pub fn name(&self) -> &'static str {
        match self.0 {
            1 => "tracing-tone",
            2 => "checkpoint-1",
            3 => "checkpoint-2",
            4 => "checkpoint-3",
            5 => "checkpoint-4",
            6 => "checkpoint-5",
            7 => "checkpoint-6",
            8 => "stroke-complete",
            9 => "letter-sound",
            _ => "unknown",
        }
    }
}
