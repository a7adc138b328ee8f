use crate::registry::{Registry, Vowel};

/// The consonant glyph currently being assembled.
///
/// A `Tengwa` collects a vowel and its modifiers while the segmenter reads
/// ahead, and is rendered once when a boundary flushes it. Flags are only
/// ever set; a tengwa holds at most one vowel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tengwa {
    base: char,
    vowel: Option<Vowel>,
    silme: bool,
    long_cons: bool,
}

impl Tengwa {
    pub fn new(base: char) -> Self {
        Self {
            base,
            vowel: None,
            silme: false,
            long_cons: false,
        }
    }

    pub fn base(&self) -> char {
        self.base
    }

    /// Swap the base for another form of the same letter (a nuquerna).
    pub fn rebase(&mut self, base: char) {
        self.base = base;
    }

    pub fn has_vowel(&self) -> bool {
        self.vowel.is_some()
    }

    pub fn attach_vowel(&mut self, vowel: Vowel) {
        debug_assert!(self.vowel.is_none(), "tengwa already carries a vowel");
        self.vowel = Some(vowel);
    }

    /// Mark the consonant as doubled.
    pub fn geminate(&mut self) {
        self.long_cons = true;
    }

    /// Mark a following `s` written as a hook on this letter.
    pub fn add_silme(&mut self) {
        self.silme = true;
    }

    pub fn render(&self, registry: &Registry) -> String {
        let base = match self.vowel {
            Some(_) => registry.prevocalic_form(self.base).unwrap_or(self.base),
            None => self.base,
        };

        let mut out = String::new();
        out.push(base);
        if self.long_cons {
            out.push(registry.double_mark());
        }

        if let Some(vowel) = self.vowel {
            if vowel.palatal {
                out.push(registry.palatal_mark());
            }
            out = if vowel.long {
                vowel.tehta.long(Some(out.as_str()))
            } else {
                vowel.tehta.short(Some(out.as_str()))
            };
        }

        // The hook follows the written base, not its pre-vocalic form.
        if self.silme {
            out.push(registry.silme_mark(self.base));
        }
        out
    }
}
