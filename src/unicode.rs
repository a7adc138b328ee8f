use unicode_normalization::UnicodeNormalization;

/// Bring raw input into the form the spelling tables are keyed on:
/// NFC-composed, so `e` + U+0301 becomes `é`, then fully case-folded, so
/// `ß` becomes `ss` and the `ﬁ` ligature becomes `fi`.
pub fn fold_input(text: &str) -> String {
    let composed: String = text.nfc().collect();
    caseless::default_case_fold_str(&composed)
}
