use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use bytes::Bytes;
use serde::Serialize;

use crate::application::ports::{GenerativeClient, TranscriptionError};
use crate::application::services::TranscriptionServiceError;
use crate::domain::{LanguageSelection, Transcript};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub transcript: Transcript,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler<G>(
    State(state): State<AppState<G>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    G: GenerativeClient + 'static,
{
    let mut audio: Option<(String, Bytes)> = None;
    let mut language_raw: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart body");
                return bad_request(format!("Failed to read multipart body: {}", e));
            }
        };

        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("audio") => {
                let filename = field.file_name().unwrap_or("audio.webm").to_string();
                match field.bytes().await {
                    Ok(data) => audio = Some((filename, data)),
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to read audio field");
                        return bad_request(format!("Failed to read audio field: {}", e));
                    }
                }
            }
            Some("language") => match field.text().await {
                Ok(value) => language_raw = Some(value),
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read language field");
                    return bad_request(format!("Failed to read language field: {}", e));
                }
            },
            _ => {}
        }
    }

    let Some((filename, data)) = audio else {
        tracing::warn!("Transcribe request with no audio file");
        return bad_request("No audio file provided".to_string());
    };
    if data.is_empty() {
        tracing::warn!("Transcribe request with empty audio file");
        return bad_request("Audio file is empty".to_string());
    }

    let language = match LanguageSelection::parse(language_raw.as_deref().unwrap_or("auto")) {
        Ok(l) => l,
        Err(e) => {
            tracing::warn!(error = %e, "Transcribe request with unsupported language");
            return bad_request(e.to_string());
        }
    };

    tracing::debug!(filename = %filename, bytes = data.len(), "Processing audio upload");

    match state
        .transcription_service
        .transcribe(&filename, data, &language)
        .await
    {
        Ok(transcript) => {
            tracing::info!(
                transcript_id = %transcript.id,
                utterances = transcript.utterances.as_ref().map_or(0, Vec::len),
                "Transcription successful"
            );
            (StatusCode::OK, Json(TranscribeResponse { transcript })).into_response()
        }
        Err(e) => {
            // Full provider detail stays in the logs; callers get a
            // sanitized message.
            tracing::error!(error = %e, "Transcription failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: user_message(&e),
                }),
            )
                .into_response()
        }
    }
}

fn bad_request(error: String) -> axum::response::Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
}

fn user_message(err: &TranscriptionServiceError) -> String {
    match err {
        TranscriptionServiceError::Backend(TranscriptionError::LanguageDetection {
            detected_language,
            confidence_percent,
        }) => format!(
            "Could not detect usable speech automatically (detected language: {}, \
             confidence {:.0}%). Retry with an explicit language.",
            detected_language, confidence_percent
        ),
        TranscriptionServiceError::Backend(TranscriptionError::NoSpeechDetected) => {
            "No speech was detected in the audio".to_string()
        }
        _ => "Transcription failed".to_string(),
    }
}
