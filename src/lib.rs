pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

pub use crate::core::{etl::ExtractionEngine, pipeline::MenuPipeline};
pub use domain::model::{Candidate, ExtractionMode, InputFormat, ParsedLine};
pub use domain::services::{extract_items, parse_lines};
pub use utils::error::{MenuError, Result};
