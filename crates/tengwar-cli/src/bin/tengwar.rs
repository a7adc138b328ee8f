use std::path::PathBuf;

use clap::{Parser, Subcommand};

use tengwar_cli::commands::{config_ops, numeral_ops, transcribe_ops};

#[derive(Parser)]
#[command(name = "tengwar", about = "Latin to Tengwar transcription tool")]
struct Cli {
    /// Write a JSON trace log to this directory (requires --features trace)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transcribe text (arguments, or stdin line by line)
    Transcribe {
        /// Text to transcribe
        text: Vec<String>,
        /// Transcription mode
        #[arg(long, default_value = "quenya")]
        mode: String,
        /// Custom glyph set TOML
        #[arg(long)]
        glyphs: Option<String>,
        /// Write numerals in base 10
        #[arg(long)]
        decimal: bool,
        /// Append the end-of-text mark
        #[arg(long)]
        end_mark: bool,
        /// Print glyphs as \u{XXXX} escapes
        #[arg(long)]
        escape: bool,
        /// One JSON object per input
        #[arg(long)]
        json: bool,
    },
    /// Encode an integer as Tengwar numerals
    Numeral {
        /// Integer to encode
        #[arg(allow_negative_numbers = true)]
        n: i128,
        /// Base 10 instead of base 12
        #[arg(long)]
        decimal: bool,
        /// Print glyphs as \u{XXXX} escapes
        #[arg(long)]
        escape: bool,
    },
    /// Export the default glyph set as TOML
    Config,
    /// Validate a custom glyph set TOML file
    ConfigValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        if let Err(e) = tengwar_engine::trace_init::init_tracing(dir) {
            eprintln!("Error starting trace log: {e}");
            std::process::exit(1);
        }
    }

    match cli.command {
        Command::Transcribe {
            text,
            mode,
            glyphs,
            decimal,
            end_mark,
            escape,
            json,
        } => {
            let opts = transcribe_ops::TranscribeOptions {
                mode: &mode,
                glyphs: glyphs.as_deref(),
                decimal,
                end_mark,
                escape,
                json,
            };
            transcribe_ops::transcribe_cmd(&text, &opts);
        }
        Command::Numeral { n, decimal, escape } => numeral_ops::numeral_cmd(n, decimal, escape),
        Command::Config => config_ops::config_export(),
        Command::ConfigValidate { file } => config_ops::config_validate(&file),
    }
}
