mod summary_service;
mod transcription_service;

pub use summary_service::{SummaryError, SummaryService};
pub use transcription_service::{TranscriptionService, TranscriptionServiceError};
