use std::sync::Arc;

use crate::application::ports::{GenerativeClient, GenerativeClientError};

const PROMPT_HEADER: &str = "\
You are a legal assistant summarizing a client consultation for a law firm \
(e.g. immigration, family, civil).

Please provide a structured summary including:
1. Client Information & Core Issue
2. Key Facts & Timeline
3. Potential Legal Strategies discussed
4. Next Steps & Required Documents for the client
5. Recommended Follow-up Actions for the law firm

Format the response in Markdown.

Here is the consultation transcript:";

/// Produces the structured Markdown summary for one consultation transcript.
pub struct SummaryService<G>
where
    G: GenerativeClient,
{
    client: Arc<G>,
}

impl<G> SummaryService<G>
where
    G: GenerativeClient,
{
    pub fn new(client: Arc<G>) -> Self {
        Self { client }
    }

    /// Empty or whitespace-only input is rejected before any backend call.
    pub async fn summarize(&self, transcript_text: &str) -> Result<String, SummaryError> {
        if transcript_text.trim().is_empty() {
            return Err(SummaryError::EmptyTranscript);
        }

        let prompt = build_prompt(transcript_text);

        let summary = self
            .client
            .generate(&prompt)
            .await
            .map_err(SummaryError::Completion)?;

        tracing::info!(chars = summary.len(), "Consultation summary generated");

        Ok(summary)
    }
}

/// The transcript is appended verbatim after the fixed instruction block.
fn build_prompt(transcript_text: &str) -> String {
    format!("{PROMPT_HEADER}\n{transcript_text}")
}

#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("transcript contains no text to summarize")]
    EmptyTranscript,
    #[error("summarization failed: {0}")]
    Completion(GenerativeClientError),
}
