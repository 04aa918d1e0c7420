use serde::Serialize;

use super::Utterance;

/// Backend-agnostic transcription result for a single request.
///
/// Owned by the orchestrator for one HTTP exchange and discarded afterwards.
/// When `utterances` is absent, `text` is the sole authoritative content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transcript {
    pub id: String,
    pub status: TranscriptStatus,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utterances: Option<Vec<Utterance>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptStatus {
    Completed,
    Failed,
}
