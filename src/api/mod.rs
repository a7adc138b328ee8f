mod types;

pub use types::EngineError;

use std::path::Path;

use tengwar_core::{QuenyaTranscriber, Registry, Transcriber};
use tracing::debug_span;

use crate::unicode::fold_input;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

pub fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Transcribe `word` with the default Quenya engine over the global glyph set.
pub fn transcribe(word: &str) -> String {
    transcribe_with(word, &QuenyaTranscriber::default())
}

/// Transcribe `word` with a caller-selected engine.
pub fn transcribe_with(word: &str, engine: &dyn Transcriber) -> String {
    let _span = debug_span!("transcribe", len = word.len()).entered();
    engine.transcribe(&fold_input(word))
}

/// Install the glyph set in `path` as the global one. Must run before the
/// first transcription.
pub fn load_glyph_config(path: &Path) -> Result<(), EngineError> {
    let content = std::fs::read_to_string(path).map_err(|e| EngineError::Io {
        msg: format!("{}: {e}", path.display()),
    })?;
    Registry::init_custom(content).map_err(|e| EngineError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

pub fn default_glyph_config() -> String {
    Registry::default_toml().to_string()
}
