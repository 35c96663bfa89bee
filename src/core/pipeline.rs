use crate::core::report::LineReporter;
use crate::core::{ConfigProvider, Invocation, Pipeline, RenderResult, Sink};
use crate::domain::model::ReportDocument;
use crate::utils::error::{ReportError, Result};

pub struct SimplePipeline<S: Sink, C: ConfigProvider> {
    sink: S,
    config: C,
}

impl<S: Sink, C: ConfigProvider> SimplePipeline<S, C> {
    pub fn new(sink: S, config: C) -> Self {
        Self { sink, config }
    }
}

#[async_trait::async_trait]
impl<S: Sink, C: ConfigProvider> Pipeline for SimplePipeline<S, C> {
    async fn plan(&self) -> Result<Vec<Invocation>> {
        let invocations = self.config.invocations();
        tracing::debug!("Planned invocations: {:?}", invocations);

        if invocations.is_empty() {
            return Err(ReportError::ProcessingError {
                message: "report plan contains no invocations".to_string(),
            });
        }

        Ok(invocations)
    }

    async fn render(&self, invocations: Vec<Invocation>) -> Result<RenderResult> {
        let mut lines = Vec::new();

        // 依序展開每次呼叫，每次都重新產生完整輸出
        for invocation in &invocations {
            lines.extend(LineReporter::render(invocation));
        }

        // 每行都以換行結尾
        let mut text_output = lines.join("\n");
        if !text_output.is_empty() {
            text_output.push('\n');
        }

        let document = ReportDocument {
            generated_at: chrono::Utc::now(),
            line_count: lines.len(),
            lines: lines.clone(),
        };
        let json_output = serde_json::to_string_pretty(&document)?;

        tracing::debug!("Rendered {} lines for {} invocations", lines.len(), invocations.len());

        Ok(RenderResult {
            invocations,
            lines,
            text_output,
            json_output,
        })
    }

    async fn emit(&self, result: RenderResult) -> Result<String> {
        let output = match self.config.output_format() {
            "text" => &result.text_output,
            "json" => &result.json_output,
            format => {
                return Err(ReportError::InvalidConfigValueError {
                    field: "output_format".to_string(),
                    value: format.to_string(),
                    reason: "supported formats: text, json".to_string(),
                })
            }
        };

        tracing::debug!("Writing {} bytes to sink", output.len());
        self.sink.write_output(output).await?;

        Ok(self.sink.describe())
    }
}
