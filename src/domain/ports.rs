use crate::domain::model::{ExtractionMode, InputFormat, OcrDocument, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Output file names for each format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFilenames {
    pub json: String,
    pub csv: String,
    pub tsv: String,
}

impl Default for OutputFilenames {
    fn default() -> Self {
        Self {
            json: "menu_items.json".to_string(),
            csv: "menu_items.csv".to_string(),
            tsv: "menu_items.tsv".to_string(),
        }
    }
}

pub trait ConfigProvider: Send + Sync {
    fn input_files(&self) -> &[String];
    fn input_format(&self) -> InputFormat;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn mode(&self) -> ExtractionMode;
    fn max_lines(&self) -> Option<usize>;
    /// ZIP bundle file name when compression is enabled.
    fn compression(&self) -> Option<&str>;
    fn filenames(&self) -> OutputFilenames {
        OutputFilenames::default()
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<OcrDocument>>;
    async fn transform(&self, documents: Vec<OcrDocument>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
