use super::Environment;

/// Process-lifetime configuration, loaded from the environment at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub transcription: TranscriptionSettings,
    pub summarizer: SummarizerSettings,
    pub storage: StorageSettings,
    pub environment: Environment,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Which speech-to-text provider serves this process. Fixed for the process
/// lifetime; requests cannot override it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptionProviderSetting {
    AssemblyAi,
    Deepgram,
}

#[derive(Debug, Clone)]
pub struct TranscriptionSettings {
    pub provider: TranscriptionProviderSetting,
    pub assemblyai_api_key: Option<String>,
    pub assemblyai_base_url: Option<String>,
    pub deepgram_api_key: Option<String>,
    pub deepgram_base_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SummarizerSettings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub upload_dir: String,
    pub max_upload_mb: usize,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let host = env_or("SERVER_HOST", "0.0.0.0");
        let port = parse_var("SERVER_PORT", 3001)?;

        let provider = match env_or("TRANSCRIPTION_PROVIDER", "assemblyai")
            .to_lowercase()
            .as_str()
        {
            "assemblyai" => TranscriptionProviderSetting::AssemblyAi,
            "deepgram" => TranscriptionProviderSetting::Deepgram,
            other => {
                return Err(SettingsError::InvalidValue {
                    name: "TRANSCRIPTION_PROVIDER",
                    value: other.to_string(),
                });
            }
        };

        let environment = Environment::try_from(env_or("APP_ENV", "local"))
            .map_err(|e| SettingsError::InvalidValue {
                name: "APP_ENV",
                value: e,
            })?;

        Ok(Self {
            server: ServerSettings { host, port },
            transcription: TranscriptionSettings {
                provider,
                assemblyai_api_key: env_opt("ASSEMBLYAI_API_KEY"),
                assemblyai_base_url: env_opt("ASSEMBLYAI_BASE_URL"),
                deepgram_api_key: env_opt("DEEPGRAM_API_KEY"),
                deepgram_base_url: env_opt("DEEPGRAM_BASE_URL"),
            },
            summarizer: SummarizerSettings {
                api_key: env_opt("GEMINI_API_KEY")
                    .ok_or(SettingsError::MissingVar("GEMINI_API_KEY"))?,
                base_url: env_opt("GEMINI_BASE_URL"),
                model: env_opt("GEMINI_MODEL"),
            },
            storage: StorageSettings {
                upload_dir: env_or("UPLOAD_DIR", "./uploads"),
                max_upload_mb: parse_var("MAX_UPLOAD_MB", 100)?,
            },
            environment,
        })
    }
}

fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn env_or(name: &str, default: &str) -> String {
    env_opt(name).unwrap_or_else(|| default.to_string())
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, SettingsError> {
    match env_opt(name) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| SettingsError::InvalidValue {
            name,
            value: raw,
        }),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}
