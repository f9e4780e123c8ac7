use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::OutputFormat;

/// Project persisted component records into the web-service component format
#[derive(Parser, Debug)]
#[command(name = "component-ws")]
#[command(version)]
#[command(about = "Project persisted component records into the web-service component format", long_about = None)]
pub struct Args {
    /// JSON request document holding organization, component and optional project/analysis records
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output format: json or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Config file path (defaults to component-ws.config.yml next to the input)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
