//! Glyph set loaded from TOML: which codepoint a Tengwar font assigns to each
//! letter, tehta, carrier and modifier.
//!
//! - `DEFAULT_GLYPHS_TOML` is embedded via `include_str!("default_glyphs.toml")`
//! - `parse_glyph_toml` deserializes and validates a glyph set
//! - the registry built from it lives in [`crate::registry`]

use std::collections::BTreeMap;

use serde::Deserialize;

pub const DEFAULT_GLYPHS_TOML: &str = include_str!("default_glyphs.toml");

/// Number of numeral glyphs; enough for base 12.
pub const NUMERAL_DIGITS: usize = 12;

#[derive(Debug, thiserror::Error)]
pub enum GlyphConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("expected 12 numeral digits, found {0}")]
    NumeralCount(usize),
    #[error("punctuation key must be a single character: {0:?}")]
    PunctuationKey(String),
    #[error("punctuation key {0:?} would shadow a letter, digit or minus sign")]
    PunctuationShadows(char),
    #[error("glyph set already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GlyphSet {
    pub end_of_text: String,
    pub carriers: Carriers,
    pub modifiers: Modifiers,
    pub irregular: Irregular,
    pub temar: Temar,
    pub tehtar: Tehtar,
    pub numerals: Numerals,
    pub punctuation: BTreeMap<String, String>,
}

/// Placeholder letters that host a tehta when no consonant does.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Carriers {
    /// Telco, for short vowels.
    pub short: char,
    /// Ára, for long vowels.
    pub long: char,
    pub yanta: char,
    pub ure: char,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Modifiers {
    pub palatal: char,
    pub silme_left: char,
    pub silme_right: char,
    pub double: char,
    pub long_vowel: char,
}

/// Letters outside the four témar.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Irregular {
    pub romen: char,
    pub arda: char,
    pub lambe: char,
    pub alda: char,
    pub silme: char,
    pub silme_nuquerna: char,
    pub esse: char,
    pub esse_nuquerna: char,
    pub hyamen: char,
}

/// One row of the consonant grid.
///
/// In Quenya the `fric_voiced` column holds the nasalized stops (anto, ampa,
/// anca, unque) rather than voiced fricatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Tema {
    pub base: char,
    pub voiced: char,
    pub fric: char,
    pub fric_voiced: char,
    pub nasal: char,
    pub special: char,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Temar {
    pub tinco: Tema,
    pub parma: Tema,
    pub calma: Tema,
    pub quesse: Tema,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TehtaGlyphs {
    pub base: char,
    /// Dedicated long form; absent means "short tehta plus the long-vowel mark".
    #[serde(default)]
    pub long: Option<char>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Tehtar {
    pub a: TehtaGlyphs,
    pub e: TehtaGlyphs,
    pub i: TehtaGlyphs,
    pub o: TehtaGlyphs,
    pub u: TehtaGlyphs,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Numerals {
    pub digits: Vec<char>,
    /// Positional mark suffixed to every base-10 digit.
    pub decimal: char,
    /// Positional mark suffixed to every base-12 digit.
    pub duodecimal: char,
}

/// Parse and validate a glyph set.
pub fn parse_glyph_toml(toml_str: &str) -> Result<GlyphSet, GlyphConfigError> {
    let glyphs: GlyphSet =
        toml::from_str(toml_str).map_err(|e| GlyphConfigError::Parse(e.to_string()))?;

    if glyphs.numerals.digits.len() != NUMERAL_DIGITS {
        return Err(GlyphConfigError::NumeralCount(glyphs.numerals.digits.len()));
    }

    for key in glyphs.punctuation.keys() {
        let mut chars = key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(GlyphConfigError::PunctuationKey(key.clone()));
        };
        if c.is_alphanumeric() || c == '-' {
            return Err(GlyphConfigError::PunctuationShadows(c));
        }
    }

    Ok(glyphs)
}
