use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{TranscriptionBackend, TranscriptionError};
use crate::domain::{
    merge_segments, LanguageSelection, SpeakerLabel, Transcript, TranscriptStatus, Utterance, Word,
};

use super::redaction::DEEPGRAM_REDACTION_ENTITIES;

const HIGH_ACCURACY_MODEL: &str = "nova-3";
const BROAD_COVERAGE_MODEL: &str = "nova-2";

/// Languages the nova-3 model handles. Everything else, including
/// auto-detection, rides the older broad-coverage model.
const HIGH_ACCURACY_LANGUAGES: &[&str] = &[
    "en", "es", "fr", "de", "hi", "ru", "pt", "ja", "it", "nl",
];

/// Deepgram adapter. The provider emits one record per detected speech
/// segment with offsets in fractional seconds, so normalization converts
/// time units and coalesces fragmented speaker turns locally.
pub struct DeepgramBackend {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl DeepgramBackend {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.deepgram.com".to_string()),
        }
    }
}

#[async_trait]
impl TranscriptionBackend for DeepgramBackend {
    async fn transcribe(
        &self,
        audio: &[u8],
        language: &LanguageSelection,
    ) -> Result<Transcript, TranscriptionError> {
        let url = format!("{}/v1/listen", self.base_url);

        let mut query: Vec<(&str, String)> = vec![
            ("model", select_model(language).to_string()),
            ("diarize", "true".to_string()),
            ("punctuate", "true".to_string()),
            ("smart_format", "true".to_string()),
            ("utterances", "true".to_string()),
        ];
        match language.as_tag() {
            Some(tag) => query.push(("language", tag.to_string())),
            None => query.push(("detect_language", "true".to_string())),
        }
        for entity in DEEPGRAM_REDACTION_ENTITIES {
            query.push(("redact", (*entity).to_string()));
        }

        tracing::debug!(model = %select_model(language), "Sending audio to Deepgram");

        let response = self
            .client
            .post(&url)
            .query(&query)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Token {}", self.api_key),
            )
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(audio.to_vec())
            .send()
            .await
            .map_err(|e| TranscriptionError::ProviderFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::ProviderFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let payload: ListenResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::ProviderFailed(format!("parse response: {}", e)))?;

        normalize(payload, language)
    }
}

fn select_model(language: &LanguageSelection) -> &'static str {
    match language.as_tag() {
        Some(tag) if HIGH_ACCURACY_LANGUAGES.contains(&tag) => HIGH_ACCURACY_MODEL,
        _ => BROAD_COVERAGE_MODEL,
    }
}

fn normalize(
    payload: ListenResponse,
    language: &LanguageSelection,
) -> Result<Transcript, TranscriptionError> {
    let channel = payload
        .results
        .channels
        .into_iter()
        .next()
        .ok_or_else(|| TranscriptionError::ProviderFailed("response has no channels".to_string()))?;
    let alternative = channel.alternatives.into_iter().next().ok_or_else(|| {
        TranscriptionError::ProviderFailed("channel has no alternatives".to_string())
    })?;

    if alternative.transcript.is_empty() {
        // No words at all means no recognizable speech, regardless of
        // which language was requested or detected.
        if alternative.words.is_empty() {
            return Err(TranscriptionError::NoSpeechDetected);
        }
        if language.is_auto() {
            return Err(TranscriptionError::LanguageDetection {
                detected_language: channel
                    .detected_language
                    .unwrap_or_else(|| "unknown".to_string()),
                confidence_percent: channel.language_confidence.unwrap_or(0.0) * 100.0,
            });
        }
    }

    let utterances = payload
        .results
        .utterances
        .map(|segments| merge_segments(segments.into_iter().map(normalize_segment).collect()));

    tracing::info!(
        request_id = %payload.metadata.request_id,
        turns = utterances.as_ref().map_or(0, Vec::len),
        "Deepgram transcription completed"
    );

    Ok(Transcript {
        id: payload.metadata.request_id,
        status: TranscriptStatus::Completed,
        text: alternative.transcript,
        utterances,
    })
}

fn normalize_segment(raw: UtteranceResult) -> Utterance {
    Utterance {
        speaker: SpeakerLabel::from_index(raw.speaker),
        text: raw.transcript,
        start_ms: floor_ms(raw.start),
        end_ms: floor_ms(raw.end),
        words: raw.words.into_iter().map(normalize_word).collect(),
    }
}

fn normalize_word(raw: WordResult) -> Word {
    Word {
        // Prefer the punctuation-restored form when the provider supplies one.
        text: raw.punctuated_word.unwrap_or(raw.word),
        start_ms: floor_ms(raw.start),
        end_ms: floor_ms(raw.end),
        confidence: raw.confidence,
        speaker: SpeakerLabel::from_index(raw.speaker),
    }
}

/// Provider offsets are fractional seconds; floor to whole milliseconds.
fn floor_ms(seconds: f64) -> u64 {
    (seconds * 1000.0).floor() as u64
}

#[derive(Deserialize)]
struct ListenResponse {
    metadata: ListenMetadata,
    results: ListenResults,
}

#[derive(Deserialize)]
struct ListenMetadata {
    request_id: String,
}

#[derive(Deserialize)]
struct ListenResults {
    channels: Vec<ChannelResult>,
    utterances: Option<Vec<UtteranceResult>>,
}

#[derive(Deserialize)]
struct ChannelResult {
    alternatives: Vec<AlternativeResult>,
    detected_language: Option<String>,
    language_confidence: Option<f32>,
}

#[derive(Deserialize)]
struct AlternativeResult {
    transcript: String,
    words: Vec<WordResult>,
}

#[derive(Deserialize)]
struct UtteranceResult {
    start: f64,
    end: f64,
    transcript: String,
    speaker: usize,
    words: Vec<WordResult>,
}

#[derive(Deserialize)]
struct WordResult {
    word: String,
    start: f64,
    end: f64,
    confidence: f32,
    speaker: usize,
    punctuated_word: Option<String>,
}
