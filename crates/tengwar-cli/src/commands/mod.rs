use std::fmt::Write;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod numeral_ops;
pub mod transcribe_ops;

/// Make glyph output readable on terminals without a Tengwar font: every
/// non-ASCII character becomes a `\u{XXXX}` escape.
pub fn escape_glyphs(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 4);
    for c in s.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            let _ = write!(out, "\\u{{{:04X}}}", u32::from(c));
        }
    }
    out
}

pub(crate) fn display(s: String, escape: bool) -> String {
    if escape {
        escape_glyphs(&s)
    } else {
        s
    }
}
