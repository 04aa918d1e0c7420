const MAX_PREVIEW_CHARS: usize = 80;

/// Shortens free text (transcripts, prompts) for log lines.
///
/// Consultation transcripts routinely contain personal detail; logs get a
/// bounded prefix plus the total length, never the full text.
pub fn preview_text(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[empty]");
    }

    let char_count = trimmed.chars().count();
    if char_count <= MAX_PREVIEW_CHARS {
        return trimmed.to_string();
    }

    let prefix: String = trimmed.chars().take(MAX_PREVIEW_CHARS).collect();
    format!("{}... ({} chars total)", prefix, char_count)
}
