mod health;
mod summarize;
mod transcribe;

pub use health::health_handler;
pub use summarize::summarize_handler;
pub use transcribe::transcribe_handler;
