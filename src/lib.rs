//! Public entry point of the Tengwar transcription engine.
//!
//! The engines themselves live in `tengwar_core`; this crate prepares input
//! text, owns the glyph-set loading surface, and wires up tracing.

mod api;
pub mod trace_init;
pub mod unicode;

pub use api::{
    default_glyph_config, engine_version, load_glyph_config, transcribe, transcribe_with,
    EngineError,
};
pub use tengwar_core::{
    EngineOptions, GlyphConfigError, NumeralBase, QuenyaTranscriber, Registry, Transcriber,
    TranscriberKind,
};
