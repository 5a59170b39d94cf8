//! CLI argument definitions using clap derive macros.

use clap::Parser;

/// Terminal chat for symptom triage
#[derive(Parser, Debug)]
#[command(name = "triage", about, version)]
pub struct Cli {
    /// Use the light theme
    #[arg(long)]
    pub light: bool,

    /// UI language (en, ar). Overrides the config file.
    #[arg(long)]
    pub locale: Option<String>,

    /// Show timestamps as "1:05 PM" instead of "13:05"
    #[arg(long)]
    pub twelve_hour: bool,

    /// Enable verbose logging (debug level in the Ctrl+D log screen)
    #[arg(short, long)]
    pub verbose: bool,
}
