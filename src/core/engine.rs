use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use std::path::PathBuf;

pub struct CollectorEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> CollectorEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting variable collection...");
        self.monitor.log_stats("Start");

        // Extract
        let files = self.pipeline.extract().await?;
        tracing::info!("Found {} PHP files", files.len());
        self.monitor.log_stats("Extract");

        // Transform
        let report = self.pipeline.transform(files).await?;
        tracing::info!(
            "Collected {} unique variables from {} files",
            report.dictionary.len(),
            report.files_scanned
        );
        if !report.failures.is_empty() {
            tracing::warn!("{} files could not be read", report.failures.len());
        }
        self.monitor.log_stats("Transform");

        // Load
        let output_path = self.pipeline.load(report).await?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(output_path)
    }

    /// Discovery only; nothing is read or written.
    pub async fn dry_run(&self) -> Result<Vec<PathBuf>> {
        let files = self.pipeline.extract().await?;
        tracing::info!("Dry run: {} PHP files would be scanned", files.len());
        Ok(files)
    }
}
