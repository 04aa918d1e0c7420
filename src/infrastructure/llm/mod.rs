mod gemini_client;
mod mock_generative_client;

pub use gemini_client::GeminiClient;
pub use mock_generative_client::MockGenerativeClient;
