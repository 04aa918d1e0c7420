use std::fmt;

use serde::Serialize;

/// Single-letter speaker label derived from a zero-based diarization index.
///
/// The mapping is stable within one transcript and not persisted across
/// requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SpeakerLabel(char);

impl SpeakerLabel {
    /// `0 -> 'A'`, `1 -> 'B'`, ... Indices past `'Z'` saturate; a two-party
    /// consultation never gets close.
    pub fn from_index(index: usize) -> Self {
        Self((b'A' + index.min(25) as u8) as char)
    }

    /// Accepts the letter form some providers emit directly.
    pub fn from_letter(letter: &str) -> Option<Self> {
        let mut chars = letter.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_uppercase() => Some(Self(c)),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        self.0
    }
}

impl fmt::Display for SpeakerLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
