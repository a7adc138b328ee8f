use std::fs;

use tengwar_core::glyphs::parse_glyph_toml;

use super::escape_glyphs;

pub fn config_export() {
    print!("{}", tengwar_engine::default_glyph_config());
}

pub fn config_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let glyphs = die!(parse_glyph_toml(&content), "Error: {}");
    println!(
        "OK: {} punctuation marks, end_of_text={}",
        glyphs.punctuation.len(),
        escape_glyphs(&glyphs.end_of_text)
    );
}
