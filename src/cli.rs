use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "github-activity")]
#[command(version, about = "Show a GitHub user's recent public activity")]
pub struct Cli {
    /// GitHub username to report on
    pub username: Option<String>,

    /// Read configuration from this file instead of the default location
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the API base URL from the configuration
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Log request details to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Write a default config file and exit
    #[arg(long = "init")]
    pub init: bool,

    /// Print the effective configuration and exit
    #[arg(long = "print")]
    pub print: bool,

    /// Validate the configuration and exit
    #[arg(long = "check")]
    pub check: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
