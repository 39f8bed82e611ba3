pub mod generate;

use std::path::PathBuf;

use clap::Parser;
use teamgen_common::config::{Config, DEFAULT_FILE_NAME, DEFAULT_OUTPUT_DIR};

/// Every flag is optional; with none given the tool just starts asking questions.
#[derive(Parser, Debug)]
#[command(name = "teamgen")]
#[command(about = "Interactively build a team roster page.")]
#[command(version)]
pub struct CommandLine {
    /// Directory the roster page is written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// File name of the roster page
    #[arg(long, default_value = DEFAULT_FILE_NAME)]
    pub file_name: String,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,

    /// Print less (-q hides status lines, -qq hides warnings too)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            output_dir: self.output_dir.clone(),
            file_name: self.file_name.clone(),
            no_banner: self.no_banner,
            quiet: self.quiet,
        }
    }
}
