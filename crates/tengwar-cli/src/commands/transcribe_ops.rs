use std::io::{self, BufRead};
use std::path::Path;

use serde::Serialize;
use tengwar_core::{EngineOptions, NumeralBase, Registry, Transcriber, TranscriberKind};

use super::display;

pub struct TranscribeOptions<'a> {
    pub mode: &'a str,
    pub glyphs: Option<&'a str>,
    pub decimal: bool,
    pub end_mark: bool,
    pub escape: bool,
    pub json: bool,
}

#[derive(Serialize)]
struct Transcription<'a> {
    input: &'a str,
    output: String,
}

pub fn transcribe_cmd(texts: &[String], opts: &TranscribeOptions) {
    if let Some(path) = opts.glyphs {
        die!(
            tengwar_engine::load_glyph_config(Path::new(path)),
            "Error loading glyph set: {}"
        );
    }
    let kind = die!(
        TranscriberKind::from_name(opts.mode).ok_or(opts.mode),
        "Error: unknown mode {}"
    );
    let options = EngineOptions {
        numeral_base: if opts.decimal {
            NumeralBase::Decimal
        } else {
            NumeralBase::Duodecimal
        },
    };
    let registry = Registry::global();
    let engine = kind.build(registry, options);

    if texts.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = die!(line, "Error reading stdin: {}");
            emit(&line, engine.as_ref(), registry, opts);
        }
    } else {
        for text in texts {
            emit(text, engine.as_ref(), registry, opts);
        }
    }
}

fn emit(input: &str, engine: &dyn Transcriber, registry: &Registry, opts: &TranscribeOptions) {
    let mut output = tengwar_engine::transcribe_with(input, engine);
    if opts.end_mark {
        output.push_str(registry.end_of_text());
    }
    let output = display(output, opts.escape);

    if opts.json {
        let record = Transcription { input, output };
        let line = die!(serde_json::to_string(&record), "Error encoding JSON: {}");
        println!("{line}");
    } else {
        println!("{output}");
    }
}
