/// Errors surfaced by the public entry point.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
    #[error("tracing setup failed: {msg}")]
    Tracing { msg: String },
}
