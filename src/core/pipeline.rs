use crate::config::MAX_CONCURRENCY;
use crate::core::discovery::php_file_paths;
use crate::core::extractor::extract_variables;
use crate::core::{
    ConfigProvider, FileFailure, OutputFormat, Pipeline, ScanReport, Storage, VariableDictionary,
    VariableReport,
};
use crate::utils::error::{CollectorError, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

pub struct VariablePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> VariablePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn formats(&self) -> Vec<OutputFormat> {
        let mut formats = Vec::new();
        for format in self.config.output_formats() {
            if !formats.contains(format) {
                formats.push(*format);
            }
        }
        if formats.is_empty() {
            formats.push(OutputFormat::default());
        }
        formats
    }

    fn render(&self, format: OutputFormat, report: &ScanReport) -> Result<Vec<u8>> {
        match format {
            OutputFormat::Txt => {
                let mut content = String::new();
                for name in report.dictionary.sorted() {
                    content.push_str(&name);
                    content.push('\n');
                }
                Ok(content.into_bytes())
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&VariableReport::from(report))?;
                Ok(json.into_bytes())
            }
        }
    }
}

async fn scan_file(path: &Path) -> std::io::Result<Vec<String>> {
    let bytes = tokio::fs::read(path).await?;
    Ok(extract_variables(&String::from_utf8_lossy(&bytes)))
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for VariablePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<PathBuf>> {
        let input_dir = self.config.input_dir();
        tracing::debug!(
            "Discovering PHP files in {} (excluding {:?})",
            input_dir,
            self.config.excludes()
        );

        let paths = php_file_paths(input_dir, self.config.excludes())?;
        if paths.is_empty() {
            tracing::warn!("No PHP files found in {}", input_dir);
        }
        Ok(paths)
    }

    async fn transform(&self, files: Vec<PathBuf>) -> Result<ScanReport> {
        let permits = self.config.concurrency().clamp(1, MAX_CONCURRENCY);
        let semaphore = Arc::new(Semaphore::new(permits));
        let mut tasks = JoinSet::new();

        for path in files {
            let semaphore = Arc::clone(&semaphore);
            tasks.spawn(async move {
                let _permit = semaphore.acquire_owned().await;
                let outcome = scan_file(&path).await;
                (path, outcome)
            });
        }

        let mut dictionary = VariableDictionary::new();
        let mut files_scanned = 0;
        let mut failures = Vec::new();

        while let Some(joined) = tasks.join_next().await {
            let (path, outcome) = joined.map_err(|e| CollectorError::ProcessingError {
                message: format!("Scan task failed: {}", e),
            })?;

            match outcome {
                Ok(variables) => {
                    tracing::debug!("{}: {} variables", path.display(), variables.len());
                    files_scanned += 1;
                    dictionary.extend(variables);
                }
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", path.display(), e);
                    failures.push(FileFailure {
                        path,
                        message: e.to_string(),
                    });
                }
            }
        }

        Ok(ScanReport {
            source_dir: PathBuf::from(self.config.input_dir()),
            dictionary,
            files_scanned,
            failures,
        })
    }

    async fn load(&self, report: ScanReport) -> Result<String> {
        let output_dir = Path::new(self.config.output_dir());

        // 先清空輸出目錄中的舊檔案
        if output_dir.is_dir() {
            let removed = self.storage.clear().await?;
            tracing::debug!("Removed {} stale files from {}", removed, output_dir.display());
        } else {
            tracing::warn!(
                "Output directory {} does not exist, creating it",
                output_dir.display()
            );
        }

        let formats = self.formats();
        for format in &formats {
            let data = self.render(*format, &report)?;
            tracing::debug!("Writing {} ({} bytes)", format.file_name(), data.len());
            self.storage.write_file(format.file_name(), &data).await?;
        }

        let primary = output_dir.join(formats[0].file_name());
        Ok(primary.display().to_string())
    }
}
