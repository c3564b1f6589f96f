use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use kana_cli::commands::{config_ops, convert_ops};

#[derive(Parser)]
#[command(name = "kanatool", about = "Hiragana to romaji transliteration tool")]
struct Cli {
    /// Log transliteration details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate text to romaji (reads stdin lines when no text is given)
    Convert {
        /// Hiragana text, one output line per argument
        text: Vec<String>,
        /// Output JSON lines instead of plain romaji
        #[arg(long)]
        json: bool,
        /// Custom kana table TOML (optional)
        #[arg(long)]
        table: Option<String>,
    },
    /// Convert a file of readings (one per line) to JSONL
    Batch {
        /// Input file, one reading per line
        input_file: String,
        /// Output JSONL file
        output_file: String,
        /// Custom kana table TOML (optional)
        #[arg(long)]
        table: Option<String>,
    },
    /// Export the default kana table as TOML
    RomajiExport,
    /// Validate a custom kana table TOML file
    RomajiValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("kana_core=debug,kana_cli=debug")),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        init_logging();
    }

    match cli.command {
        Command::Convert { text, json, table } => {
            convert_ops::convert_cmd(&text, table.as_deref(), json);
        }
        Command::Batch {
            input_file,
            output_file,
            table,
        } => {
            convert_ops::batch_cmd(&input_file, &output_file, table.as_deref());
        }
        Command::RomajiExport => config_ops::romaji_export(),
        Command::RomajiValidate { file } => config_ops::romaji_validate(&file),
    }
}
