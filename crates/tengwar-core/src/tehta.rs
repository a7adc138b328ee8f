use crate::glyphs::{Carriers, Modifiers, TehtaGlyphs};

/// Glyphs a tehta falls back on when it has no consonant to sit on, or no
/// dedicated long form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VowelCarriers {
    pub short: char,
    pub long: char,
    pub long_mark: char,
}

impl VowelCarriers {
    pub fn new(carriers: &Carriers, modifiers: &Modifiers) -> Self {
        Self {
            short: carriers.short,
            long: carriers.long,
            long_mark: modifiers.long_vowel,
        }
    }
}

/// A vowel diacritic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tehta {
    base: char,
    long: Option<char>,
    carriers: VowelCarriers,
}

impl Tehta {
    pub fn new(glyphs: TehtaGlyphs, carriers: VowelCarriers) -> Self {
        Self {
            base: glyphs.base,
            long: glyphs.long,
            carriers,
        }
    }

    pub fn base(&self) -> char {
        self.base
    }

    /// Short form over `carrier`, or over telco when there is none.
    pub fn short(&self, carrier: Option<&str>) -> String {
        let mut out = String::new();
        match carrier {
            Some(c) => out.push_str(c),
            None => out.push(self.carriers.short),
        }
        out.push(self.base);
        out
    }

    /// Long form over `carrier`, or over ára when there is none.
    ///
    /// Over a consonant the dedicated long glyph is used when the tehta has
    /// one; otherwise the short tehta follows the long-vowel mark.
    pub fn long(&self, carrier: Option<&str>) -> String {
        let mut out = String::new();
        match (carrier, self.long) {
            (None, _) => out.push(self.carriers.long),
            (Some(c), Some(long)) => {
                out.push_str(c);
                out.push(long);
                return out;
            }
            (Some(c), None) => {
                out.push_str(c);
                out.push(self.carriers.long_mark);
            }
        }
        out.push(self.base);
        out
    }
}
