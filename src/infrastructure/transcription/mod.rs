mod assemblyai_backend;
mod backend_factory;
mod deepgram_backend;
mod redaction;

pub use assemblyai_backend::AssemblyAiBackend;
pub use backend_factory::{BackendConfigError, TranscriptionBackendFactory, TranscriptionProvider};
pub use deepgram_backend::DeepgramBackend;
pub use redaction::{
    ASSEMBLYAI_REDACTION_POLICIES, ASSEMBLYAI_REDACTION_SUBSTITUTION, DEEPGRAM_REDACTION_ENTITIES,
};
