use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "feeding-plan",
    version,
    about = "Parse monthly infant feeding plan documents into structured data"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Export(ExportArgs),
    Summary(SummaryArgs),
    Validate(ValidateArgs),
    Rules,
}

#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Feeding plan document; the bundled document is used when omitted.
    #[arg(long)]
    pub input: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Write the JSON export here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub with_diagnostics: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}
