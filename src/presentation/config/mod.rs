mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ServerSettings, Settings, SettingsError, StorageSettings, SummarizerSettings,
    TranscriptionProviderSetting, TranscriptionSettings,
};
