//! Subcommand implementations for `kanatool`.
//!
//! The `*_cmd` entry points print results and exit the process on failure;
//! the helpers they wrap return `Result` so they can be tested.

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod convert_ops;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid kana table: {0}")]
    Config(#[from] kana_core::romaji::RomajiConfigError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
