use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: String,
    pub documents: usize,
    pub items: usize,
}

pub struct ExtractionEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ExtractionEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting menu extraction...");
        self.monitor.log_stats("Start");

        // Extract
        let documents = self.pipeline.extract().await?;
        let line_count: usize = documents.iter().map(|d| d.lines.len()).sum();
        tracing::info!("Read {} OCR lines from {} documents", line_count, documents.len());
        self.monitor.log_stats("Extract");

        // Transform
        let result = self.pipeline.transform(documents).await?;
        let summary_documents = result.documents.len();
        let summary_items = result.total_items();
        tracing::info!(
            "Classified {} items ({} mode)",
            summary_items,
            result.mode
        );
        self.monitor.log_stats("Transform");

        // Load
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(RunSummary {
            output_path,
            documents: summary_documents,
            items: summary_items,
        })
    }
}
