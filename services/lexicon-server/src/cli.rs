//! Command-line arguments for the Lexicon server
//!
//! The only argument is the optional listening port; see
//! [`crate::core::config::Config::load`] for how it combines with
//! the environment.

use clap::Parser;

/// Lexicon - word/definition store over HTTP
#[derive(Parser, Debug, Default)]
#[command(name = "lexicon")]
#[command(version)]
#[command(about = "In-memory word/definition HTTP service", long_about = None)]
pub struct Cli {
    /// Port to listen on (overrides the PORT environment variable)
    #[arg(value_name = "PORT")]
    pub port: Option<u16>,
}
