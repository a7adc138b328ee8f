//! Lookup tables from Latin spellings to Tengwar glyphs.
//!
//! The spelling tables below are the Quenya orthography and are fixed; the
//! codepoints they resolve to come from a [`GlyphSet`] so that a different
//! font layout only needs a different TOML file.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::glyphs::{parse_glyph_toml, GlyphConfigError, GlyphSet, DEFAULT_GLYPHS_TOML};
use crate::numeral::{encode_decimal_run, encode_numeral, NumeralBase};
use crate::tehta::{Tehta, VowelCarriers};

/// Longest key in any spelling table, in characters.
pub const MAX_SPELLING_LEN: usize = 3;

/// Prefix that marks a palatalized vowel (`ya`, `yó`, ...).
pub const PALATAL_MARKER: char = 'y';

static INSTANCE: OnceLock<Registry> = OnceLock::new();

/// A vowel spelling resolved to its tehta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vowel {
    pub tehta: Tehta,
    pub long: bool,
    pub palatal: bool,
}

/// A sibilant letter and the inverted form it takes before a vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sibilant {
    pub standalone: char,
    pub nuquerna: char,
}

#[derive(Debug)]
pub struct Registry {
    glyphs: GlyphSet,
    consonants: HashMap<&'static str, char>,
    diphthongs: HashMap<&'static str, String>,
    vowels: HashMap<&'static str, (Tehta, bool)>,
    punctuation: HashMap<char, String>,
    /// Letters that change shape when a tehta is placed on them.
    prevocalic: HashMap<char, char>,
    /// Bases whose silme hook attaches on the right.
    right_silme: Vec<char>,
    silme: Sibilant,
    esse: Sibilant,
}

impl Registry {
    /// Install a custom glyph set as the global registry. Fails once
    /// `global()` has been called or another set was installed.
    pub fn init_custom(toml_content: String) -> Result<(), GlyphConfigError> {
        // Built before the slot is claimed, so a racing `global()` either
        // wins outright or sees this registry.
        let registry = Self::from_toml(&toml_content)?;
        INSTANCE
            .set(registry)
            .map_err(|_| GlyphConfigError::AlreadyInitialized)?;
        debug!("custom glyph set installed");
        Ok(())
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static Registry {
        INSTANCE.get_or_init(|| {
            Self::from_toml(DEFAULT_GLYPHS_TOML).expect("default glyph TOML must be valid")
        })
    }

    pub fn default_toml() -> &'static str {
        DEFAULT_GLYPHS_TOML
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, GlyphConfigError> {
        Ok(Self::new(parse_glyph_toml(toml_str)?))
    }

    pub fn new(glyphs: GlyphSet) -> Self {
        let carriers = VowelCarriers::new(&glyphs.carriers, &glyphs.modifiers);
        let t = &glyphs.tehtar;
        let (a, e, i, o, u) = (
            Tehta::new(t.a, carriers),
            Tehta::new(t.e, carriers),
            Tehta::new(t.i, carriers),
            Tehta::new(t.o, carriers),
            Tehta::new(t.u, carriers),
        );

        let mut vowels = HashMap::new();
        for (spelling, tehta) in [("a", a), ("e", e), ("i", i), ("o", o), ("u", u)] {
            vowels.insert(spelling, (tehta, false));
        }
        for (spelling, tehta) in [("ä", a), ("ë", e), ("ï", i), ("ö", o), ("ü", u)] {
            vowels.insert(spelling, (tehta, false));
        }
        for (spelling, tehta) in [("á", a), ("é", e), ("í", i), ("ó", o), ("ú", u)] {
            vowels.insert(spelling, (tehta, true));
        }

        let yanta = glyphs.carriers.yanta.to_string();
        let ure = glyphs.carriers.ure.to_string();
        let diphthongs = HashMap::from([
            ("ai", a.short(Some(yanta.as_str()))),
            ("oi", o.short(Some(yanta.as_str()))),
            ("ui", u.short(Some(yanta.as_str()))),
            ("au", a.short(Some(ure.as_str()))),
            ("eu", e.short(Some(ure.as_str()))),
            ("iu", i.short(Some(ure.as_str()))),
        ]);

        let punctuation = glyphs
            .punctuation
            .iter()
            .filter_map(|(k, v)| Some((k.chars().next()?, v.clone())))
            .collect();

        let temar = &glyphs.temar;
        let irr = &glyphs.irregular;
        Self {
            consonants: consonant_table(&glyphs),
            diphthongs,
            vowels,
            punctuation,
            prevocalic: HashMap::from([(temar.tinco.special, irr.romen)]),
            right_silme: vec![
                temar.calma.base,
                temar.calma.voiced,
                temar.quesse.base,
                temar.quesse.voiced,
            ],
            silme: Sibilant {
                standalone: irr.silme,
                nuquerna: irr.silme_nuquerna,
            },
            esse: Sibilant {
                standalone: irr.esse,
                nuquerna: irr.esse_nuquerna,
            },
            glyphs,
        }
    }

    pub fn glyphs(&self) -> &GlyphSet {
        &self.glyphs
    }

    pub fn consonant(&self, spelling: &str) -> Option<char> {
        self.consonants.get(spelling).copied()
    }

    pub fn diphthong(&self, spelling: &str) -> Option<&str> {
        self.diphthongs.get(spelling).map(String::as_str)
    }

    /// Resolve a vowel spelling, optionally prefixed by the palatal marker.
    pub fn vowel(&self, spelling: &str) -> Option<Vowel> {
        let (spelling, palatal) = match spelling.strip_prefix(PALATAL_MARKER) {
            Some(rest) => (rest, true),
            None => (spelling, false),
        };
        let &(tehta, long) = self.vowels.get(spelling)?;
        Some(Vowel {
            tehta,
            long,
            palatal,
        })
    }

    pub fn punctuation(&self, c: char) -> Option<&str> {
        self.punctuation.get(&c).map(String::as_str)
    }

    /// The sibilant family spelled by `marker`: `s` for silme, `z` for esse.
    pub fn sibilant(&self, marker: char) -> Option<Sibilant> {
        match marker {
            's' => Some(self.silme),
            'z' => Some(self.esse),
            _ => None,
        }
    }

    /// The form `base` takes when it carries a tehta, if it differs.
    pub fn prevocalic_form(&self, base: char) -> Option<char> {
        self.prevocalic.get(&base).copied()
    }

    /// The trailing-s hook that fits `base`.
    pub fn silme_mark(&self, base: char) -> char {
        if self.right_silme.contains(&base) {
            self.glyphs.modifiers.silme_right
        } else {
            self.glyphs.modifiers.silme_left
        }
    }

    pub fn double_mark(&self) -> char {
        self.glyphs.modifiers.double
    }

    pub fn palatal_mark(&self) -> char {
        self.glyphs.modifiers.palatal
    }

    pub fn end_of_text(&self) -> &str {
        &self.glyphs.end_of_text
    }

    pub fn encode_numeral(&self, n: i128, base: NumeralBase) -> String {
        encode_numeral(n, base, &self.glyphs.numerals)
    }

    /// Encode a `-?[0-9]+` run of any length.
    pub fn encode_decimal_run(&self, run: &str, base: NumeralBase) -> String {
        encode_decimal_run(run, base, &self.glyphs.numerals)
    }
}

fn consonant_table(glyphs: &GlyphSet) -> HashMap<&'static str, char> {
    let ti = &glyphs.temar.tinco;
    let pa = &glyphs.temar.parma;
    let ca = &glyphs.temar.calma;
    let qu = &glyphs.temar.quesse;
    let irr = &glyphs.irregular;

    HashMap::from([
        ("t", ti.base),
        ("nd", ti.voiced),
        ("s", ti.fric),
        ("þ", ti.fric),
        ("th", ti.fric),
        ("nt", ti.fric_voiced),
        ("n", ti.nasal),
        ("r", ti.special),
        ("p", pa.base),
        ("mb", pa.voiced),
        ("f", pa.fric),
        ("mp", pa.fric_voiced),
        ("m", pa.nasal),
        ("v", pa.special),
        ("c", ca.base),
        ("k", ca.base),
        ("ng", ca.voiced),
        ("ch", ca.fric),
        ("nc", ca.fric_voiced),
        ("ñ", ca.nasal),
        ("y", ca.special),
        ("qu", qu.base),
        ("q", qu.base),
        ("cw", qu.base),
        ("ngw", qu.voiced),
        ("hw", qu.fric),
        ("nqu", qu.fric_voiced),
        ("nw", qu.nasal),
        ("w", qu.special),
        ("rd", irr.arda),
        ("l", irr.lambe),
        ("ld", irr.alda),
        ("h", irr.hyamen),
    ])
}
