use std::sync::Arc;

use crate::application::ports::GenerativeClient;
use crate::application::services::{SummaryService, TranscriptionService};
use crate::presentation::config::Settings;

pub struct AppState<G>
where
    G: GenerativeClient,
{
    pub transcription_service: Arc<TranscriptionService>,
    pub summary_service: Arc<SummaryService<G>>,
    pub settings: Settings,
}

impl<G> Clone for AppState<G>
where
    G: GenerativeClient,
{
    fn clone(&self) -> Self {
        Self {
            transcription_service: Arc::clone(&self.transcription_service),
            summary_service: Arc::clone(&self.summary_service),
            settings: self.settings.clone(),
        }
    }
}
