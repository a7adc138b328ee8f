//! Integer-to-numeral conversion.
//!
//! Every digit is written with its numeral glyph followed by the base's
//! positional mark. Digits come out least-significant first, which is how
//! Tengwar numbers are read.

use crate::glyphs::Numerals;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumeralBase {
    Decimal,
    #[default]
    Duodecimal,
}

impl NumeralBase {
    pub fn radix(self) -> u8 {
        match self {
            Self::Decimal => 10,
            Self::Duodecimal => 12,
        }
    }

    fn mark(self, numerals: &Numerals) -> char {
        match self {
            Self::Decimal => numerals.decimal,
            Self::Duodecimal => numerals.duodecimal,
        }
    }
}

/// Zero of every Unicode decimal digit (`Nd`) block. Each block holds the
/// digits 0 to 9 at consecutive codepoints.
const DECIMAL_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E140,
    0x1E2F0, 0x1E950, 0x1FBF0,
];

/// Value of a decimal digit in any script: `'7'`, `'٧'` and `'７'` are all 7.
pub fn decimal_value(c: char) -> Option<u32> {
    let cp = u32::from(c);
    let idx = DECIMAL_ZEROS.partition_point(|&zero| zero <= cp);
    let zero = *DECIMAL_ZEROS.get(idx.checked_sub(1)?)?;
    let value = cp - zero;
    (value < 10).then_some(value)
}

/// Split `n` into base-`radix` digits, least significant first. Zero is `[0]`.
pub fn digits(mut n: u128, radix: u8) -> Vec<u8> {
    if n == 0 {
        return vec![0];
    }
    let radix = u128::from(radix);
    let mut out = Vec::new();
    while n > 0 {
        // always < radix <= 12
        out.push((n % radix) as u8);
        n /= radix;
    }
    out
}

/// Split a run of decimal digits into base-`radix` digits, least significant
/// first. The run may be arbitrarily long and mix scripts; characters that
/// are not decimal digits are ignored.
pub fn decimal_digits(decimal: &str, radix: u8) -> Vec<u8> {
    let radix = u32::from(radix);
    let mut num: Vec<u32> = decimal
        .chars()
        .filter_map(decimal_value)
        .skip_while(|&d| d == 0)
        .collect();
    if num.is_empty() {
        return vec![0];
    }

    // Schoolbook long division, one pass per output digit.
    let mut out = Vec::new();
    while !num.is_empty() {
        let mut rem = 0;
        let mut quotient = Vec::with_capacity(num.len());
        for &d in &num {
            let acc = rem * 10 + d;
            let q = acc / radix;
            rem = acc % radix;
            if q != 0 || !quotient.is_empty() {
                quotient.push(q);
            }
        }
        out.push(rem as u8);
        num = quotient;
    }
    out
}

fn write_digits(out: &mut String, digits: &[u8], base: NumeralBase, numerals: &Numerals) {
    let mark = base.mark(numerals);
    for &d in digits {
        out.push(numerals.digits[usize::from(d)]);
        out.push(mark);
    }
}

/// Encode a signed integer. Negative numbers get a leading ASCII minus.
pub fn encode_numeral(n: i128, base: NumeralBase, numerals: &Numerals) -> String {
    let mut out = String::new();
    if n < 0 {
        out.push('-');
    }
    write_digits(&mut out, &digits(n.unsigned_abs(), base.radix()), base, numerals);
    out
}

/// Encode a `-?\d+` run exactly as [`encode_numeral`] would encode its
/// value, without limiting its magnitude.
pub fn encode_decimal_run(run: &str, base: NumeralBase, numerals: &Numerals) -> String {
    let (negative, magnitude) = match run.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, run),
    };
    let digits = decimal_digits(magnitude, base.radix());

    let mut out = String::new();
    // -0 is plain zero
    if negative && digits != [0] {
        out.push('-');
    }
    write_digits(&mut out, &digits, base, numerals);
    out
}
