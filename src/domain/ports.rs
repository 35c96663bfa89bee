use crate::domain::model::{Invocation, RenderResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

pub trait Sink: Send + Sync {
    fn write_output(&self, output: &str) -> impl std::future::Future<Output = Result<()>> + Send;
    fn describe(&self) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn invocations(&self) -> Vec<Invocation>;
    fn output_format(&self) -> &str;
    fn output_file(&self) -> Option<&Path>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn plan(&self) -> Result<Vec<Invocation>>;
    async fn render(&self, invocations: Vec<Invocation>) -> Result<RenderResult>;
    async fn emit(&self, result: RenderResult) -> Result<String>;
}
