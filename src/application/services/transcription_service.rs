use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{
    StagingStore, StagingStoreError, TranscriptionBackend, TranscriptionError,
};
use crate::domain::{LanguageSelection, StoragePath, Transcript};

/// Runs one upload through the configured transcription backend.
///
/// The backend is selected once at startup; requests cannot switch it.
pub struct TranscriptionService {
    backend: Arc<dyn TranscriptionBackend>,
    staging: Arc<dyn StagingStore>,
}

impl TranscriptionService {
    pub fn new(backend: Arc<dyn TranscriptionBackend>, staging: Arc<dyn StagingStore>) -> Self {
        Self { backend, staging }
    }

    /// Stages the audio, transcribes it, and removes the staged copy on
    /// every exit path. A failed cleanup is logged and never replaces the
    /// transcription outcome.
    pub async fn transcribe(
        &self,
        filename: &str,
        audio: Bytes,
        language: &LanguageSelection,
    ) -> Result<Transcript, TranscriptionServiceError> {
        let path = StoragePath::for_upload(filename);

        if let Err(e) = self.staging.store(&path, audio.clone()).await {
            self.cleanup(&path).await;
            return Err(TranscriptionServiceError::Staging(e));
        }

        tracing::debug!(path = %path, bytes = audio.len(), "Audio staged for transcription");

        let outcome = self.backend.transcribe(&audio, language).await;

        self.cleanup(&path).await;

        outcome.map_err(TranscriptionServiceError::Backend)
    }

    async fn cleanup(&self, path: &StoragePath) {
        if let Err(e) = self.staging.delete(path).await {
            tracing::warn!(path = %path, error = %e, "Failed to remove staged audio");
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionServiceError {
    #[error("staging: {0}")]
    Staging(StagingStoreError),
    #[error("backend: {0}")]
    Backend(TranscriptionError),
}
