/// Language codes the transcribe endpoint accepts, besides `auto`.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "en", "zh", "es", "fr", "de", "ja", "ko", "pt", "vi", "hi", "ru",
];

/// The caller's language choice for a recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageSelection {
    /// Let the backend detect the spoken language.
    Auto,
    /// An explicit code from [`SUPPORTED_LANGUAGES`].
    Tag(String),
}

impl LanguageSelection {
    /// Parses the form-field value. Empty input and `auto` both mean
    /// auto-detection; anything outside the supported set is rejected.
    pub fn parse(raw: &str) -> Result<Self, UnsupportedLanguage> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }

        let code = trimmed.to_ascii_lowercase();
        if SUPPORTED_LANGUAGES.contains(&code.as_str()) {
            Ok(Self::Tag(code))
        } else {
            Err(UnsupportedLanguage(trimmed.to_string()))
        }
    }

    pub fn as_tag(&self) -> Option<&str> {
        match self {
            Self::Auto => None,
            Self::Tag(code) => Some(code),
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language: {0}")]
pub struct UnsupportedLanguage(pub String);
