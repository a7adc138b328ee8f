use crate::numeral::NumeralBase;
use crate::quenya::QuenyaTranscriber;
use crate::registry::Registry;

/// A Latin-to-Tengwar transcription mode.
///
/// Implementations keep no state between calls; the same instance may be
/// shared across threads.
pub trait Transcriber: Send + Sync {
    /// Transcribe already case-folded text into glyph codepoints.
    fn transcribe(&self, text: &str) -> String;
}

/// Options shared by the engines that understand them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOptions {
    pub numeral_base: NumeralBase,
}

/// The available transcription engines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TranscriberKind {
    #[default]
    Quenya,
}

impl TranscriberKind {
    pub const ALL: &'static [TranscriberKind] = &[TranscriberKind::Quenya];

    pub fn name(self) -> &'static str {
        match self {
            Self::Quenya => "quenya",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }

    /// Build the engine over `registry`.
    pub fn build<'r>(
        self,
        registry: &'r Registry,
        options: EngineOptions,
    ) -> Box<dyn Transcriber + 'r> {
        match self {
            Self::Quenya => Box::new(
                QuenyaTranscriber::new(registry).with_numeral_base(options.numeral_base),
            ),
        }
    }
}
