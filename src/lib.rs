pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalSink;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::{engine::ReportEngine, pipeline::SimplePipeline, report::LineReporter};
pub use utils::error::{ReportError, Result};
