mod init_tracing;
mod request_id;
mod text_preview;

pub use init_tracing::{init_tracing, TracingConfig};
pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
pub use text_preview::preview_text;
