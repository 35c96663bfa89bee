use crate::core::Pipeline;
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::monitor::SystemMonitor;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
    #[cfg(feature = "cli")]
    monitor: Option<SystemMonitor>,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            #[cfg(feature = "cli")]
            monitor: None,
        }
    }

    #[cfg(feature = "cli")]
    pub fn new_with_monitoring(pipeline: P, enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: enabled.then(|| SystemMonitor::new(true)),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting report run");

        // Plan
        let invocations = self.pipeline.plan().await?;
        tracing::info!("Planned {} reporter invocations", invocations.len());

        // Render
        let rendered = self.pipeline.render(invocations).await?;
        tracing::info!("Rendered {} lines", rendered.lines.len());

        // Emit
        let destination = self.pipeline.emit(rendered).await?;
        tracing::info!("Report written to: {}", destination);

        #[cfg(feature = "cli")]
        if let Some(monitor) = &self.monitor {
            monitor.log_summary();
        }

        Ok(destination)
    }
}
