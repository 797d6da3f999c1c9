pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::{ConfigProvider, ExtractionMode, InputFormat};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "menu-extract")]
#[command(about = "Turn OCR text lines from menus into candidate item names")]
pub struct CliConfig {
    /// OCR line dumps: plain text (one line per OCR line) or JSON {"lines": [...]}
    #[arg(required = true)]
    pub inputs: Vec<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_enum, default_value_t = ExtractionMode::Heuristic)]
    pub mode: ExtractionMode,

    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    pub input_format: InputFormat,

    #[arg(long, value_delimiter = ',', default_value = "json")]
    pub formats: Vec<String>,

    /// Only classify the first N lines of each input
    #[arg(long)]
    pub max_lines: Option<usize>,

    /// Bundle all outputs into menu_items.zip
    #[arg(long)]
    pub compress: bool,

    #[arg(long, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_files(&self) -> &[String] {
        &self.inputs
    }

    fn input_format(&self) -> InputFormat {
        self.input_format
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.formats
    }

    fn mode(&self) -> ExtractionMode {
        self.mode
    }

    fn max_lines(&self) -> Option<usize> {
        self.max_lines
    }

    fn compression(&self) -> Option<&str> {
        self.compress.then_some("menu_items.zip")
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_input_files("inputs", &self.inputs)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_output_formats("formats", &self.formats)?;
        if let Some(max) = self.max_lines {
            validation::validate_positive_number("max_lines", max, 1)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_defaults() {
        let config = CliConfig::try_parse_from(["menu-extract", "menu.txt"]).unwrap();
        assert_eq!(config.inputs, vec!["menu.txt"]);
        assert_eq!(config.output_path, "./output");
        assert_eq!(config.mode, ExtractionMode::Heuristic);
        assert_eq!(config.input_format, InputFormat::Auto);
        assert_eq!(config.formats, vec!["json"]);
        assert_eq!(config.compression(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_cli_overrides() {
        let config = CliConfig::try_parse_from([
            "menu-extract",
            "--mode",
            "simple",
            "--input-format",
            "json",
            "--formats",
            "csv,tsv",
            "--max-lines",
            "50",
            "--compress",
            "a.json",
            "b.json",
        ])
        .unwrap();
        assert_eq!(config.mode, ExtractionMode::Simple);
        assert_eq!(config.input_format, InputFormat::Json);
        assert_eq!(config.formats, vec!["csv", "tsv"]);
        assert_eq!(config.max_lines, Some(50));
        assert_eq!(config.compression(), Some("menu_items.zip"));
        assert_eq!(config.input_files().len(), 2);
    }

    #[test]
    fn test_cli_requires_inputs() {
        assert!(CliConfig::try_parse_from(["menu-extract"]).is_err());
    }

    #[test]
    fn test_cli_validation_rejects_bad_values() {
        let config =
            CliConfig::try_parse_from(["menu-extract", "--formats", "xml", "menu.txt"]).unwrap();
        assert!(config.validate().is_err());

        let config =
            CliConfig::try_parse_from(["menu-extract", "--max-lines", "0", "menu.txt"]).unwrap();
        assert!(config.validate().is_err());
    }
}
