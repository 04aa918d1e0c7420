use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{TranscriptionBackend, TranscriptionError};
use crate::domain::{
    LanguageSelection, SpeakerLabel, Transcript, TranscriptStatus, Utterance, Word,
};

use super::redaction::{ASSEMBLYAI_REDACTION_POLICIES, ASSEMBLYAI_REDACTION_SUBSTITUTION};

const SPEECH_MODEL: &str = "universal";
const POLL_INTERVAL: Duration = Duration::from_secs(3);

/// AssemblyAI adapter. The provider diarizes and merges speaker turns
/// itself and reports millisecond offsets, so its payload maps directly
/// onto the canonical model.
pub struct AssemblyAiBackend {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl AssemblyAiBackend {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.assemblyai.com".to_string()),
        }
    }

    async fn upload(&self, audio: &[u8]) -> Result<String, TranscriptionError> {
        let url = format!("{}/v2/upload", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("authorization", &self.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(audio.to_vec())
            .send()
            .await
            .map_err(|e| TranscriptionError::ProviderFailed(format!("upload request: {}", e)))?;

        let response = check_status(response).await?;
        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::ProviderFailed(format!("parse upload: {}", e)))?;

        Ok(body.upload_url)
    }

    async fn submit(
        &self,
        audio_url: &str,
        language: &LanguageSelection,
    ) -> Result<String, TranscriptionError> {
        let url = format!("{}/v2/transcript", self.base_url);

        // "auto" omits the language parameter so the provider self-detects.
        let request = CreateTranscriptRequest {
            audio_url,
            speaker_labels: true,
            speech_model: SPEECH_MODEL,
            redact_pii: true,
            redact_pii_policies: ASSEMBLYAI_REDACTION_POLICIES,
            redact_pii_sub: ASSEMBLYAI_REDACTION_SUBSTITUTION,
            language_code: language.as_tag(),
        };

        let response = self
            .client
            .post(&url)
            .header("authorization", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| TranscriptionError::ProviderFailed(format!("submit request: {}", e)))?;

        let response = check_status(response).await?;
        let body: CreateTranscriptResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::ProviderFailed(format!("parse submit: {}", e)))?;

        Ok(body.id)
    }

    async fn poll(&self, id: &str) -> Result<TranscriptPayload, TranscriptionError> {
        let url = format!("{}/v2/transcript/{}", self.base_url, id);

        loop {
            let response = self
                .client
                .get(&url)
                .header("authorization", &self.api_key)
                .send()
                .await
                .map_err(|e| TranscriptionError::ProviderFailed(format!("poll request: {}", e)))?;

            let response = check_status(response).await?;
            let payload: TranscriptPayload = response
                .json()
                .await
                .map_err(|e| TranscriptionError::ProviderFailed(format!("parse poll: {}", e)))?;

            match payload.status.as_str() {
                "completed" => return Ok(payload),
                "error" => {
                    return Err(TranscriptionError::ProviderFailed(
                        payload
                            .error
                            .unwrap_or_else(|| "unspecified provider error".to_string()),
                    ));
                }
                _ => tokio::time::sleep(POLL_INTERVAL).await,
            }
        }
    }
}

#[async_trait]
impl TranscriptionBackend for AssemblyAiBackend {
    async fn transcribe(
        &self,
        audio: &[u8],
        language: &LanguageSelection,
    ) -> Result<Transcript, TranscriptionError> {
        let audio_url = self.upload(audio).await?;
        let id = self.submit(&audio_url, language).await?;

        tracing::debug!(transcript_id = %id, "AssemblyAI transcript submitted");

        let payload = self.poll(&id).await?;

        tracing::info!(
            transcript_id = %id,
            utterances = payload.utterances.as_ref().map_or(0, Vec::len),
            "AssemblyAI transcription completed"
        );

        normalize(payload)
    }
}

fn normalize(payload: TranscriptPayload) -> Result<Transcript, TranscriptionError> {
    let text = payload.text.ok_or_else(|| {
        TranscriptionError::ProviderFailed("completed transcript missing text".to_string())
    })?;

    let utterances = payload
        .utterances
        .map(|list| {
            list.into_iter()
                .map(normalize_utterance)
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()?;

    Ok(Transcript {
        id: payload.id,
        status: TranscriptStatus::Completed,
        text,
        utterances,
    })
}

fn normalize_utterance(raw: UtterancePayload) -> Result<Utterance, TranscriptionError> {
    let words = raw
        .words
        .into_iter()
        .map(|w| {
            Ok(Word {
                speaker: parse_speaker(&w.speaker)?,
                text: w.text,
                start_ms: w.start,
                end_ms: w.end,
                confidence: w.confidence,
            })
        })
        .collect::<Result<Vec<_>, TranscriptionError>>()?;

    Ok(Utterance {
        speaker: parse_speaker(&raw.speaker)?,
        text: raw.text,
        start_ms: raw.start,
        end_ms: raw.end,
        words,
    })
}

fn parse_speaker(raw: &str) -> Result<SpeakerLabel, TranscriptionError> {
    SpeakerLabel::from_letter(raw).ok_or_else(|| {
        TranscriptionError::ProviderFailed(format!("unexpected speaker label: {}", raw))
    })
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, TranscriptionError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    Err(TranscriptionError::ProviderFailed(format!(
        "status {}: {}",
        status, body
    )))
}

#[derive(Deserialize)]
struct UploadResponse {
    upload_url: String,
}

#[derive(Serialize)]
struct CreateTranscriptRequest<'a> {
    audio_url: &'a str,
    speaker_labels: bool,
    speech_model: &'a str,
    redact_pii: bool,
    redact_pii_policies: &'a [&'a str],
    redact_pii_sub: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    language_code: Option<&'a str>,
}

#[derive(Deserialize)]
struct CreateTranscriptResponse {
    id: String,
}

#[derive(Deserialize)]
struct TranscriptPayload {
    id: String,
    status: String,
    text: Option<String>,
    error: Option<String>,
    utterances: Option<Vec<UtterancePayload>>,
}

#[derive(Deserialize)]
struct UtterancePayload {
    speaker: String,
    text: String,
    start: u64,
    end: u64,
    words: Vec<WordPayload>,
}

#[derive(Deserialize)]
struct WordPayload {
    text: String,
    start: u64,
    end: u64,
    confidence: f32,
    speaker: String,
}
