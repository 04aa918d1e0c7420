mod generative_client;
mod staging_store;
mod transcription_backend;

pub use generative_client::{GenerativeClient, GenerativeClientError};
pub use staging_store::{StagingStore, StagingStoreError};
pub use transcription_backend::{TranscriptionBackend, TranscriptionError};
