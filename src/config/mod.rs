pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_entry_names, validate_path, validate_range, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const MAX_CONCURRENCY: usize = 1024;

/// One reader per available CPU.
pub fn default_concurrency() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "php-var-collector"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Collect the variable names used in a PHP source tree")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long = "in", default_value = "in", help = "Directory to scan"))]
    pub input_dir: String,

    #[cfg_attr(
        feature = "cli",
        arg(long = "out", default_value = "out", help = "Directory for variables.txt")
    )]
    pub output_dir: String,

    #[cfg_attr(
        feature = "cli",
        arg(long, value_delimiter = ',', help = "File or directory names to skip")
    )]
    pub exclude: Vec<String>,

    #[cfg_attr(feature = "cli", arg(long, default_value_t = default_concurrency()))]
    pub concurrency: usize,

    #[cfg_attr(
        feature = "cli",
        arg(long, value_enum, value_delimiter = ',', default_value = "txt")
    )]
    pub format: Vec<OutputFormat>,

    #[cfg_attr(
        feature = "cli",
        arg(long, help = "Load settings from a TOML file instead of flags")
    )]
    pub config: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "List the files that would be scanned"))]
    pub dry_run: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Log CPU and memory usage per phase"))]
    pub monitor: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Emit logs as JSON lines"))]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn input_dir(&self) -> &str {
        &self.input_dir
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn excludes(&self) -> &[String] {
        &self.exclude
    }

    fn concurrency(&self) -> usize {
        self.concurrency
    }

    fn output_formats(&self) -> &[OutputFormat] {
        &self.format
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("in", &self.input_dir)?;
        validate_path("out", &self.output_dir)?;
        validate_entry_names("exclude", &self.exclude)?;
        validate_range("concurrency", self.concurrency, 1, MAX_CONCURRENCY)?;
        Ok(())
    }
}
