use std::sync::{Arc, Mutex};

use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use lexscribe::application::ports::{TranscriptionBackend, TranscriptionError};
use lexscribe::domain::LanguageSelection;
use lexscribe::infrastructure::transcription::AssemblyAiBackend;

const COMPLETED_PAYLOAD: &str = r#"{
    "id": "t-123",
    "status": "completed",
    "text": "Good morning. How can I help?",
    "utterances": [
        {
            "speaker": "A",
            "text": "Good morning.",
            "start": 120,
            "end": 900,
            "words": [
                {"text": "Good", "start": 120, "end": 400, "confidence": 0.98, "speaker": "A"},
                {"text": "morning.", "start": 410, "end": 900, "confidence": 0.97, "speaker": "A"}
            ]
        },
        {
            "speaker": "B",
            "text": "How can I help?",
            "start": 1200,
            "end": 2400,
            "words": [
                {"text": "How", "start": 1200, "end": 1350, "confidence": 0.99, "speaker": "B"},
                {"text": "can", "start": 1360, "end": 1500, "confidence": 0.99, "speaker": "B"},
                {"text": "I", "start": 1510, "end": 1600, "confidence": 0.99, "speaker": "B"},
                {"text": "help?", "start": 1610, "end": 2400, "confidence": 0.98, "speaker": "B"}
            ]
        }
    ]
}"#;

type CapturedRequest = Arc<Mutex<Option<serde_json::Value>>>;

async fn start_mock_assemblyai_server(
    transcript_payload: &'static str,
) -> (String, CapturedRequest, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let captured: CapturedRequest = Arc::new(Mutex::new(None));
    let captured_clone = Arc::clone(&captured);

    let app = Router::new()
        .route(
            "/v2/upload",
            post(|| async { r#"{"upload_url": "https://cdn.example/upload/abc"}"# }),
        )
        .route(
            "/v2/transcript",
            post(move |Json(body): Json<serde_json::Value>| async move {
                *captured_clone.lock().unwrap() = Some(body);
                r#"{"id": "t-123", "status": "queued"}"#
            }),
        )
        .route(
            "/v2/transcript/{id}",
            get(move || async move { transcript_payload }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, captured, shutdown_tx)
}

#[tokio::test]
async fn given_completed_transcript_when_transcribing_then_maps_payload_directly() {
    let (base_url, _captured, shutdown_tx) =
        start_mock_assemblyai_server(COMPLETED_PAYLOAD).await;

    let backend = AssemblyAiBackend::new("test-key".to_string(), Some(base_url));
    let transcript = backend
        .transcribe(b"fake audio", &LanguageSelection::Auto)
        .await
        .unwrap();

    assert_eq!(transcript.id, "t-123");
    assert_eq!(transcript.text, "Good morning. How can I help?");

    let utterances = transcript.utterances.unwrap();
    assert_eq!(utterances.len(), 2);
    assert_eq!(utterances[0].speaker.as_char(), 'A');
    assert_eq!(utterances[0].text, "Good morning.");
    assert_eq!(utterances[0].start_ms, 120);
    assert_eq!(utterances[0].end_ms, 900);
    assert_eq!(utterances[0].words.len(), 2);
    assert_eq!(utterances[1].speaker.as_char(), 'B');
    assert_eq!(utterances[1].words.len(), 4);

    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_auto_language_when_submitting_then_request_enables_diarization_and_redaction() {
    let (base_url, captured, shutdown_tx) = start_mock_assemblyai_server(COMPLETED_PAYLOAD).await;

    let backend = AssemblyAiBackend::new("test-key".to_string(), Some(base_url));
    backend
        .transcribe(b"fake audio", &LanguageSelection::Auto)
        .await
        .unwrap();

    let body = captured.lock().unwrap().clone().unwrap();
    assert_eq!(body["audio_url"], "https://cdn.example/upload/abc");
    assert_eq!(body["speaker_labels"], true);
    assert_eq!(body["speech_model"], "universal");
    assert_eq!(body["redact_pii"], true);
    assert_eq!(body["redact_pii_sub"], "entity_name");

    let policies = body["redact_pii_policies"].as_array().unwrap();
    assert!(policies.iter().any(|p| p == "banking_information"));
    assert!(policies.iter().any(|p| p == "credit_card_number"));
    assert!(policies.iter().any(|p| p == "us_social_security_number"));

    // "auto" omits the language entirely so the provider self-detects.
    assert!(body.get("language_code").is_none());

    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_explicit_language_when_submitting_then_request_carries_it_verbatim() {
    let (base_url, captured, shutdown_tx) = start_mock_assemblyai_server(COMPLETED_PAYLOAD).await;

    let backend = AssemblyAiBackend::new("test-key".to_string(), Some(base_url));
    backend
        .transcribe(b"fake audio", &LanguageSelection::parse("fr").unwrap())
        .await
        .unwrap();

    let body = captured.lock().unwrap().clone().unwrap();
    assert_eq!(body["language_code"], "fr");

    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_provider_reports_error_status_when_polling_then_returns_provider_failure() {
    const ERROR_PAYLOAD: &str = r#"{
        "id": "t-123",
        "status": "error",
        "text": null,
        "error": "audio file is corrupted"
    }"#;
    let (base_url, _captured, shutdown_tx) = start_mock_assemblyai_server(ERROR_PAYLOAD).await;

    let backend = AssemblyAiBackend::new("test-key".to_string(), Some(base_url));
    let result = backend
        .transcribe(b"fake audio", &LanguageSelection::Auto)
        .await;

    match result {
        Err(TranscriptionError::ProviderFailed(message)) => {
            assert!(message.contains("audio file is corrupted"));
        }
        other => panic!("expected ProviderFailed, got {:?}", other.map(|t| t.id)),
    }

    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_upload_endpoint_rejects_when_transcribing_then_returns_provider_failure() {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/v2/upload",
        post(|| async {
            (
                axum::http::StatusCode::UNAUTHORIZED,
                r#"{"error": "invalid api key"}"#,
            )
                .into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);
    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    let backend = AssemblyAiBackend::new("bad-key".to_string(), Some(base_url));
    let result = backend
        .transcribe(b"fake audio", &LanguageSelection::Auto)
        .await;

    assert!(matches!(
        result,
        Err(TranscriptionError::ProviderFailed(_))
    ));

    shutdown_tx.send(()).ok();
}
