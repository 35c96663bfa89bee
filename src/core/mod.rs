pub mod engine;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{Invocation, Parity, RenderResult, ReportLine};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Sink};
pub use crate::utils::error::Result;
