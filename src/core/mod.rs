pub mod discovery;
pub mod engine;
pub mod extractor;
pub mod pipeline;

pub use crate::domain::model::{
    FileFailure, OutputFormat, ScanReport, VariableDictionary, VariableReport,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
