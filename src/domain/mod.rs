mod language;
mod speaker_label;
mod storage_path;
mod transcript;
mod utterance;
mod word;

pub use language::{LanguageSelection, UnsupportedLanguage, SUPPORTED_LANGUAGES};
pub use speaker_label::SpeakerLabel;
pub use storage_path::StoragePath;
pub use transcript::{Transcript, TranscriptStatus};
pub use utterance::{merge_segments, Utterance};
pub use word::Word;
