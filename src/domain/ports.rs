use crate::domain::model::{OutputFormat, ScanReport};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn append_line(
        &self,
        path: &str,
        line: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Removes every regular file below the storage root, returning how many were removed.
    fn clear(&self) -> impl std::future::Future<Output = Result<usize>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_dir(&self) -> &str;
    fn output_dir(&self) -> &str;
    fn excludes(&self) -> &[String];
    fn concurrency(&self) -> usize;
    fn output_formats(&self) -> &[OutputFormat];
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<PathBuf>>;
    async fn transform(&self, files: Vec<PathBuf>) -> Result<ScanReport>;
    async fn load(&self, report: ScanReport) -> Result<String>;
}
