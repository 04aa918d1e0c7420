use serde::Serialize;

use super::SpeakerLabel;

/// A single recognized word with millisecond offsets into the recording.
///
/// Produced once by a backend adapter and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Word {
    pub text: String,
    pub start_ms: u64,
    pub end_ms: u64,
    pub confidence: f32,
    pub speaker: SpeakerLabel,
}
