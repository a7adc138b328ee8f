//! Quenya in the classical tehtar mode.
//!
//! Consonants are base letters; each vowel is a tehta placed on the consonant
//! before it, or on a carrier when there is none. Numbers are written in
//! base 12 by default.

mod segmenter;

#[cfg(test)]
mod tests;

use crate::numeral::NumeralBase;
use crate::registry::Registry;
use crate::transcriber::Transcriber;

use segmenter::Segmenter;

#[derive(Debug, Clone, Copy)]
pub struct QuenyaTranscriber<'r> {
    registry: &'r Registry,
    numeral_base: NumeralBase,
}

impl<'r> QuenyaTranscriber<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            numeral_base: NumeralBase::Duodecimal,
        }
    }

    pub fn with_numeral_base(mut self, numeral_base: NumeralBase) -> Self {
        self.numeral_base = numeral_base;
        self
    }

    pub fn numeral_base(&self) -> NumeralBase {
        self.numeral_base
    }
}

impl Default for QuenyaTranscriber<'static> {
    fn default() -> Self {
        Self::new(Registry::global())
    }
}

impl Transcriber for QuenyaTranscriber<'_> {
    fn transcribe(&self, text: &str) -> String {
        // `x` is always written as `cs`.
        let text = text.replace('x', "cs");
        Segmenter::new(self.registry, self.numeral_base).run(&text)
    }
}
