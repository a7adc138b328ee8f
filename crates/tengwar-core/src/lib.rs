//! Latin-to-Tengwar transcription.
//!
//! Output is a string of private-use codepoints laid out by the glyph set in
//! [`glyphs`]; rendering it needs a font that uses the same layout.

pub mod glyphs;
pub mod numeral;
pub mod quenya;
pub mod registry;
pub mod tehta;
pub mod tengwa;
pub mod transcriber;

pub use glyphs::{GlyphConfigError, GlyphSet};
pub use numeral::NumeralBase;
pub use quenya::QuenyaTranscriber;
pub use registry::Registry;
pub use transcriber::{EngineOptions, Transcriber, TranscriberKind};
