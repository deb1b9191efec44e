pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};
pub use core::{engine::CollectorEngine, pipeline::VariablePipeline};
pub use domain::holder::Holder;
pub use domain::model::{OutputFormat, ScanReport, VariableDictionary};
pub use utils::error::{CollectorError, Result};
