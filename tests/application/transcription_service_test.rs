use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use lexscribe::application::ports::{
    StagingStore, StagingStoreError, TranscriptionBackend, TranscriptionError,
};
use lexscribe::application::services::{TranscriptionService, TranscriptionServiceError};
use lexscribe::domain::{LanguageSelection, StoragePath, Transcript, TranscriptStatus};

struct RecordingStore {
    stores: AtomicUsize,
    deletes: AtomicUsize,
    fail_store: bool,
    fail_delete: bool,
}

impl RecordingStore {
    fn new(fail_store: bool, fail_delete: bool) -> Arc<Self> {
        Arc::new(Self {
            stores: AtomicUsize::new(0),
            deletes: AtomicUsize::new(0),
            fail_store,
            fail_delete,
        })
    }
}

#[async_trait]
impl StagingStore for RecordingStore {
    async fn store(&self, _path: &StoragePath, data: Bytes) -> Result<u64, StagingStoreError> {
        self.stores.fetch_add(1, Ordering::SeqCst);
        if self.fail_store {
            return Err(StagingStoreError::UploadFailed("disk full".to_string()));
        }
        Ok(data.len() as u64)
    }

    async fn delete(&self, _path: &StoragePath) -> Result<(), StagingStoreError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        if self.fail_delete {
            return Err(StagingStoreError::DeleteFailed("gone already".to_string()));
        }
        Ok(())
    }
}

struct OkBackend;

#[async_trait]
impl TranscriptionBackend for OkBackend {
    async fn transcribe(
        &self,
        _audio: &[u8],
        _language: &LanguageSelection,
    ) -> Result<Transcript, TranscriptionError> {
        Ok(Transcript {
            id: "t-1".to_string(),
            status: TranscriptStatus::Completed,
            text: "hello".to_string(),
            utterances: None,
        })
    }
}

struct FailingBackend;

#[async_trait]
impl TranscriptionBackend for FailingBackend {
    async fn transcribe(
        &self,
        _audio: &[u8],
        _language: &LanguageSelection,
    ) -> Result<Transcript, TranscriptionError> {
        Err(TranscriptionError::ProviderFailed(
            "status 401: bad key".to_string(),
        ))
    }
}

#[tokio::test]
async fn given_successful_transcription_then_staged_audio_is_deleted() {
    let store = RecordingStore::new(false, false);
    let service = TranscriptionService::new(Arc::new(OkBackend), store.clone() as Arc<dyn StagingStore>);

    let result = service
        .transcribe("a.webm", Bytes::from_static(b"audio"), &LanguageSelection::Auto)
        .await;

    assert!(result.is_ok());
    assert_eq!(store.stores.load(Ordering::SeqCst), 1);
    assert_eq!(store.deletes.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn given_backend_failure_then_staged_audio_is_still_deleted() {
    let store = RecordingStore::new(false, false);
    let service = TranscriptionService::new(Arc::new(FailingBackend), store.clone() as Arc<dyn StagingStore>);

    let result = service
        .transcribe("a.webm", Bytes::from_static(b"audio"), &LanguageSelection::Auto)
        .await;

    assert!(matches!(result, Err(TranscriptionServiceError::Backend(_))));
    assert_eq!(store.deletes.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn given_cleanup_failure_then_successful_transcript_is_not_masked() {
    let store = RecordingStore::new(false, true);
    let service = TranscriptionService::new(Arc::new(OkBackend), store.clone() as Arc<dyn StagingStore>);

    let result = service
        .transcribe("a.webm", Bytes::from_static(b"audio"), &LanguageSelection::Auto)
        .await;

    assert!(result.is_ok());
    assert_eq!(store.deletes.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn given_cleanup_failure_then_original_backend_error_is_preserved() {
    let store = RecordingStore::new(false, true);
    let service = TranscriptionService::new(Arc::new(FailingBackend), store.clone() as Arc<dyn StagingStore>);

    let result = service
        .transcribe("a.webm", Bytes::from_static(b"audio"), &LanguageSelection::Auto)
        .await;

    assert!(matches!(
        result,
        Err(TranscriptionServiceError::Backend(
            TranscriptionError::ProviderFailed(_)
        ))
    ));
}

#[tokio::test]
async fn given_staging_failure_then_backend_is_never_invoked_and_cleanup_still_runs() {
    let store = RecordingStore::new(true, false);
    let service = TranscriptionService::new(Arc::new(OkBackend), store.clone() as Arc<dyn StagingStore>);

    let result = service
        .transcribe("a.webm", Bytes::from_static(b"audio"), &LanguageSelection::Auto)
        .await;

    assert!(matches!(result, Err(TranscriptionServiceError::Staging(_))));
    assert_eq!(store.deletes.load(Ordering::SeqCst), 1);
}
