use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use lexscribe::application::services::{SummaryService, TranscriptionService};
use lexscribe::infrastructure::llm::GeminiClient;
use lexscribe::infrastructure::observability::{init_tracing, TracingConfig};
use lexscribe::infrastructure::storage::LocalStagingStore;
use lexscribe::infrastructure::transcription::{
    TranscriptionBackendFactory, TranscriptionProvider,
};
use lexscribe::presentation::config::TranscriptionProviderSetting;
use lexscribe::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;
    init_tracing(TracingConfig::default(), settings.server.port);

    let (provider, api_key, base_url) = match settings.transcription.provider {
        TranscriptionProviderSetting::AssemblyAi => (
            TranscriptionProvider::AssemblyAi,
            settings.transcription.assemblyai_api_key.clone(),
            settings.transcription.assemblyai_base_url.clone(),
        ),
        TranscriptionProviderSetting::Deepgram => (
            TranscriptionProvider::Deepgram,
            settings.transcription.deepgram_api_key.clone(),
            settings.transcription.deepgram_base_url.clone(),
        ),
    };
    let backend = TranscriptionBackendFactory::create(provider, api_key, base_url)?;

    let staging = Arc::new(LocalStagingStore::new(PathBuf::from(
        &settings.storage.upload_dir,
    ))?);
    let transcription_service = Arc::new(TranscriptionService::new(backend, staging));

    let generative_client = Arc::new(GeminiClient::new(
        settings.summarizer.api_key.clone(),
        settings.summarizer.base_url.clone(),
        settings.summarizer.model.clone(),
    ));
    let summary_service = Arc::new(SummaryService::new(generative_client));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;

    let state = AppState {
        transcription_service,
        summary_service,
        settings,
    };
    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
