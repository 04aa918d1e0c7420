use async_trait::async_trait;

use crate::domain::{LanguageSelection, Transcript};

/// A speech-to-text provider turning an audio buffer into the canonical
/// transcript model.
#[async_trait]
pub trait TranscriptionBackend: Send + Sync {
    async fn transcribe(
        &self,
        audio: &[u8],
        language: &LanguageSelection,
    ) -> Result<Transcript, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    /// Transport, auth, or provider-side processing failure. Also raised
    /// when a provider response is missing an expected field.
    #[error("provider request failed: {0}")]
    ProviderFailed(String),
    /// Auto-detection ran but produced no usable text.
    #[error(
        "language detection produced no usable text (detected {detected_language}, \
         {confidence_percent:.0}% confidence)"
    )]
    LanguageDetection {
        detected_language: String,
        confidence_percent: f32,
    },
    /// The audio contains no recognizable speech in any language.
    #[error("no speech detected in the audio")]
    NoSpeechDetected,
}
