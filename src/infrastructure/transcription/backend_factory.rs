use std::sync::Arc;

use crate::application::ports::TranscriptionBackend;

use super::assemblyai_backend::AssemblyAiBackend;
use super::deepgram_backend::DeepgramBackend;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptionProvider {
    AssemblyAi,
    Deepgram,
}

pub struct TranscriptionBackendFactory;

impl TranscriptionBackendFactory {
    /// A missing credential for the selected provider is a startup failure,
    /// never a per-request one.
    pub fn create(
        provider: TranscriptionProvider,
        api_key: Option<String>,
        base_url: Option<String>,
    ) -> Result<Arc<dyn TranscriptionBackend>, BackendConfigError> {
        match provider {
            TranscriptionProvider::AssemblyAi => {
                let key = api_key.ok_or(BackendConfigError::MissingApiKey("ASSEMBLYAI_API_KEY"))?;
                Ok(Arc::new(AssemblyAiBackend::new(key, base_url)))
            }
            TranscriptionProvider::Deepgram => {
                let key = api_key.ok_or(BackendConfigError::MissingApiKey("DEEPGRAM_API_KEY"))?;
                Ok(Arc::new(DeepgramBackend::new(key, base_url)))
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BackendConfigError {
    #[error("{0} must be set for the selected transcription provider")]
    MissingApiKey(&'static str),
}
