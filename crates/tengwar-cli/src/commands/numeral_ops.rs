use tengwar_core::{NumeralBase, Registry};

use super::display;

pub fn numeral_cmd(n: i128, decimal: bool, escape: bool) {
    let base = if decimal {
        NumeralBase::Decimal
    } else {
        NumeralBase::Duodecimal
    };
    let glyphs = Registry::global().encode_numeral(n, base);
    println!("{}", display(glyphs, escape));
}
