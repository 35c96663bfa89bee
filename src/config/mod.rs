pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::Invocation;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "line-reporter")]
#[command(about = "Prints a deterministic greeting/parity line report")]
pub struct CliConfig {
    #[arg(long, default_value = "5", help = "Indexed lines per reporter invocation")]
    pub count: i64,

    #[arg(long, default_value = "3", help = "How many reporter invocations to run")]
    pub runs: usize,

    #[arg(long, help = "Skip the trailing end marker on the final invocation")]
    pub no_end_marker: bool,

    #[arg(short = 'f', long, help = "Write the report to a file instead of stdout")]
    pub output_file: Option<PathBuf>,

    #[arg(short = 'o', long, default_value = "text")]
    pub output_format: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn invocations(&self) -> Vec<Invocation> {
        // 結尾標記只掛在最後一次呼叫上，對應觀察到的三連呼叫程式
        let emit_marker = !self.no_end_marker;
        (0..self.runs)
            .map(|run| Invocation::new(self.count, emit_marker && run + 1 == self.runs))
            .collect()
    }

    fn output_format(&self) -> &str {
        &self.output_format
    }

    fn output_file(&self) -> Option<&Path> {
        self.output_file.as_deref()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_positive_number("runs", self.runs, 1)?;
        validation::validate_output_format("output_format", &self.output_format)?;

        if let Some(path) = &self.output_file {
            validation::validate_path("output_file", &path.to_string_lossy())?;
        }

        Ok(())
    }
}
