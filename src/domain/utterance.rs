use serde::Serialize;

use super::{SpeakerLabel, Word};

/// One continuous speaker turn.
///
/// Invariants: `start_ms` matches the first word, `end_ms` the last, and
/// `text` is the spacing-aware join of the word texts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Utterance {
    pub speaker: SpeakerLabel,
    pub text: String,
    pub start_ms: u64,
    pub end_ms: u64,
    pub words: Vec<Word>,
}

impl Utterance {
    /// Extends this turn with a raw segment attributed to the same speaker.
    fn absorb(&mut self, segment: Utterance) {
        if needs_joining_space(&self.text, &segment.text) {
            self.text.push(' ');
        }
        self.text.push_str(&segment.text);
        self.end_ms = segment.end_ms;
        self.words.extend(segment.words);
    }
}

/// Coalesces adjacent same-speaker segments into full speaker turns.
///
/// Single left-to-right pass: never reorders, never merges across a speaker
/// change.
pub fn merge_segments(segments: Vec<Utterance>) -> Vec<Utterance> {
    let mut merged: Vec<Utterance> = Vec::with_capacity(segments.len());
    for segment in segments {
        let continues_turn = merged
            .last()
            .is_some_and(|current| current.speaker == segment.speaker);

        if continues_turn {
            if let Some(current) = merged.last_mut() {
                current.absorb(segment);
            }
        } else {
            merged.push(segment);
        }
    }
    merged
}

/// One space at the seam, but only when neither side already carries
/// boundary whitespace. Scripts without word spacing get none added.
fn needs_joining_space(left: &str, right: &str) -> bool {
    if left.is_empty() || right.is_empty() {
        return false;
    }
    !left.ends_with(char::is_whitespace) && !right.starts_with(char::is_whitespace)
}
