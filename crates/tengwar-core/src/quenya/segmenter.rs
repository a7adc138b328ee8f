use tracing::{debug, debug_span};

use crate::numeral::{decimal_value, NumeralBase};
use crate::registry::{Registry, Sibilant, MAX_SPELLING_LEN, PALATAL_MARKER};
use crate::tengwa::Tengwa;

const SILME: char = 's';

/// Outcome of matching one lookahead window.
enum Step {
    /// A production fired and used this many bytes.
    Consumed(usize),
    /// The pending tengwa cannot take the window: flush it and match the same
    /// window again with nothing pending.
    Flush,
    NoMatch,
}

/// Left-to-right driver that turns prepared Latin text into glyphs.
///
/// Owns the output buffer and the pending [`Tengwa`] for one call.
pub(crate) struct Segmenter<'r> {
    registry: &'r Registry,
    numeral_base: NumeralBase,
    out: String,
    pending: Option<Tengwa>,
}

impl<'r> Segmenter<'r> {
    pub(crate) fn new(registry: &'r Registry, numeral_base: NumeralBase) -> Self {
        Self {
            registry,
            numeral_base,
            out: String::new(),
            pending: None,
        }
    }

    pub(crate) fn run(mut self, text: &str) -> String {
        let _span = debug_span!("segment", len = text.len()).entered();
        let registry = self.registry;
        let mut rest = text;

        while !rest.is_empty() {
            // Numerals do not flush the pending tengwa.
            if let Some(len) = numeral_run(rest) {
                let run = &rest[..len];
                debug!(run, "numeral run");
                let glyphs = registry.encode_decimal_run(run, self.numeral_base);
                self.out.push_str(&glyphs);
                rest = &rest[len..];
                continue;
            }

            while let Some(c) = rest.chars().next() {
                let Some(glyph) = registry.punctuation(c) else {
                    break;
                };
                self.flush();
                self.out.push_str(glyph);
                rest = &rest[c.len_utf8()..];
            }
            if rest.is_empty() {
                break;
            }

            let used = self.cluster(rest);
            rest = &rest[used..];
        }

        self.flush();
        self.out
    }

    /// Render the pending tengwa, if any, into the output.
    fn flush(&mut self) {
        if let Some(tengwa) = self.pending.take() {
            self.out.push_str(&tengwa.render(self.registry));
        }
    }

    /// Longest-match over windows of 3, 2 and 1 characters. Always consumes
    /// at least one character of a non-empty `rest`.
    fn cluster(&mut self, rest: &str) -> usize {
        let mut len = rest.chars().count().min(MAX_SPELLING_LEN);
        while len > 0 {
            let step = if self.pending.is_some() {
                self.match_pending(rest, len)
            } else {
                self.match_free(rest, &mut len)
            };
            match step {
                Step::Consumed(used) => return used,
                // With nothing pending the same window always matches.
                Step::Flush => self.flush(),
                Step::NoMatch => len -= 1,
            }
        }

        self.flush();
        match rest.chars().next() {
            Some(c) => {
                debug!(%c, "no spelling matched, passing through");
                self.out.push(c);
                c.len_utf8()
            }
            None => 0,
        }
    }

    /// Match a window with no consonant pending.
    fn match_free(&mut self, rest: &str, len: &mut usize) -> Step {
        let registry = self.registry;
        let mut window = prefix(rest, *len);

        // Without a consonant to palatalize, `y` is the consonant anna.
        if *len > 1 && window.starts_with(PALATAL_MARKER) {
            *len = 1;
            window = prefix(rest, 1);
        }

        if let Some(sibilant) = window.chars().next().and_then(|c| registry.sibilant(c)) {
            return Step::Consumed(self.start_sibilant(rest, sibilant));
        }

        if let Some(glyph) = registry.consonant(window) {
            return Step::Consumed(self.start_consonant(rest, window, glyph));
        }

        if let Some(diphthong) = registry.diphthong(window) {
            self.out.push_str(diphthong);
            return Step::Consumed(window.len());
        }

        if let Some(vowel) = registry.vowel(window) {
            let glyph = if vowel.long {
                vowel.tehta.long(None)
            } else {
                vowel.tehta.short(None)
            };
            self.out.push_str(&glyph);
            if vowel.palatal {
                self.out.push(registry.palatal_mark());
            }
            return Step::Consumed(window.len());
        }

        Step::NoMatch
    }

    /// Match a window against the pending consonant.
    fn match_pending(&mut self, rest: &str, len: usize) -> Step {
        let registry = self.registry;
        let window = prefix(rest, len);
        let has_vowel = self.pending.as_ref().is_some_and(Tengwa::has_vowel);

        // A doubled s always starts its own letter.
        if is_repeat(window, SILME, 2) {
            return Step::Flush;
        }

        if is_repeat(window, SILME, 1) {
            if has_vowel {
                return Step::Flush;
            }
            if let Some(tengwa) = self.pending.as_mut() {
                tengwa.add_silme();
            }
            return Step::Consumed(window.len());
        }

        if let Some(glyph) = registry.consonant(window) {
            self.flush();
            return Step::Consumed(self.start_consonant(rest, window, glyph));
        }

        if let Some(diphthong) = registry.diphthong(window) {
            self.flush();
            self.out.push_str(diphthong);
            return Step::Consumed(window.len());
        }

        if let Some(vowel) = registry.vowel(window) {
            if has_vowel {
                return Step::Flush;
            }
            if let Some(tengwa) = self.pending.as_mut() {
                tengwa.attach_vowel(vowel);
            }
            return Step::Consumed(window.len());
        }

        Step::NoMatch
    }

    /// Start silme or esse at the head of `rest`, taking a doubled marker as
    /// gemination and switching to the nuquerna when a vowel follows.
    fn start_sibilant(&mut self, rest: &str, sibilant: Sibilant) -> usize {
        let Some(marker) = rest.chars().next() else {
            return 0;
        };
        let mut tengwa = Tengwa::new(sibilant.standalone);
        let mut used = marker.len_utf8();

        if rest[used..].starts_with(marker) {
            tengwa.geminate();
            used += marker.len_utf8();
        }
        if self.registry.vowel(prefix(&rest[used..], 1)).is_some() {
            tengwa.rebase(sibilant.nuquerna);
        }

        self.pending = Some(tengwa);
        used
    }

    /// Start a consonant spelled by `window`; a single letter written twice
    /// is one geminated consonant.
    fn start_consonant(&mut self, rest: &str, window: &str, glyph: char) -> usize {
        let mut tengwa = Tengwa::new(glyph);
        let mut used = window.len();

        if window.chars().count() == 1 && rest[used..].starts_with(window) {
            tengwa.geminate();
            used += window.len();
        }

        self.pending = Some(tengwa);
        used
    }
}

/// The first `chars` characters of `s`, or all of it if shorter.
fn prefix(s: &str, chars: usize) -> &str {
    match s.char_indices().nth(chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// True if `window` is exactly `c` repeated `times` times.
fn is_repeat(window: &str, c: char, times: usize) -> bool {
    window.len() == c.len_utf8() * times && window.chars().all(|w| w == c)
}

/// Byte length of a leading `-?\d+` run, digits in any script.
fn numeral_run(s: &str) -> Option<usize> {
    let sign = usize::from(s.starts_with('-'));
    let digits: usize = s[sign..]
        .chars()
        .take_while(|&c| decimal_value(c).is_some())
        .map(char::len_utf8)
        .sum();
    (digits > 0).then_some(sign + digits)
}
