use crate::core::{
    ConfigProvider, DocumentResult, ExtractedItems, ExtractionMode, InputFormat, OcrDocument,
    Pipeline, Storage, TransformResult,
};
use crate::domain::services::classify;
use crate::utils::error::{MenuError, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use zip::write::{SimpleFileOptions, ZipWriter};

const LINES_FIELD_ERROR: &str = "`lines` must be a list of strings";

pub struct MenuPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> MenuPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

/// `auto` picks JSON for `.json` files and plain text for everything else.
pub fn resolve_format(source: &str, format: InputFormat) -> InputFormat {
    match format {
        InputFormat::Auto => {
            let is_json = Path::new(source)
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
            if is_json {
                InputFormat::Json
            } else {
                InputFormat::Text
            }
        }
        other => other,
    }
}

/// Split a file's content into OCR lines.
pub fn decode_lines(source: &str, content: &str, format: InputFormat) -> Result<Vec<String>> {
    match resolve_format(source, format) {
        InputFormat::Json => {
            let payload: serde_json::Value =
                serde_json::from_str(content).map_err(|e| MenuError::InputFormatError {
                    source_name: source.to_string(),
                    message: format!("invalid JSON: {}", e),
                })?;

            let invalid = || MenuError::InputFormatError {
                source_name: source.to_string(),
                message: LINES_FIELD_ERROR.to_string(),
            };

            let lines = payload
                .get("lines")
                .and_then(|v| v.as_array())
                .ok_or_else(invalid)?;

            lines
                .iter()
                .map(|line| line.as_str().map(str::to_string).ok_or_else(invalid))
                .collect()
        }
        _ => Ok(content.lines().map(str::to_string).collect()),
    }
}

#[derive(Serialize)]
struct CandidateRow<'a> {
    source: &'a str,
    id: &'a str,
    name: &'a str,
    original: &'a str,
    score: f64,
}

#[derive(Serialize)]
struct ParsedRow<'a> {
    source: &'a str,
    id: &'a str,
    text: &'a str,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    mode: ExtractionMode,
    documents: &'a [DocumentResult],
}

fn render_delimited(
    mode: ExtractionMode,
    documents: &[DocumentResult],
    delimiter: u8,
) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(Vec::new());

    // 即使沒有任何項目也輸出標題列
    match mode {
        ExtractionMode::Heuristic => wtr.write_record(["source", "id", "name", "original", "score"])?,
        ExtractionMode::Simple => wtr.write_record(["source", "id", "text"])?,
    }

    for doc in documents {
        match &doc.items {
            ExtractedItems::Heuristic(candidates) => {
                for c in candidates {
                    wtr.serialize(CandidateRow {
                        source: &doc.source,
                        id: &c.id,
                        name: &c.name,
                        original: &c.original,
                        score: c.score,
                    })?;
                }
            }
            ExtractedItems::Simple(items) => {
                for p in items {
                    wtr.serialize(ParsedRow {
                        source: &doc.source,
                        id: &p.id,
                        text: &p.text,
                    })?;
                }
            }
        }
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| MenuError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| MenuError::ProcessingError {
        message: format!("rendered output is not UTF-8: {}", e),
    })
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for MenuPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<OcrDocument>> {
        let mut documents = Vec::new();

        for source in self.config.input_files() {
            tracing::debug!("Reading OCR lines from: {}", source);
            let data = self.storage.read_file(source).await?;
            let content = String::from_utf8_lossy(&data);

            let mut lines = decode_lines(source, &content, self.config.input_format())?;
            if let Some(max) = self.config.max_lines() {
                if lines.len() > max {
                    tracing::debug!("Truncating {} from {} to {} lines", source, lines.len(), max);
                    lines.truncate(max);
                }
            }

            documents.push(OcrDocument {
                source: source.clone(),
                lines,
            });
        }

        Ok(documents)
    }

    async fn transform(&self, documents: Vec<OcrDocument>) -> Result<TransformResult> {
        let mode = self.config.mode();

        // 每個文件各自呼叫一次分類器，去重與編號不跨文件
        let results: Vec<DocumentResult> = documents
            .into_iter()
            .map(|doc| {
                let items = classify(mode, doc.lines.as_slice());
                tracing::debug!(
                    "{}: {} lines -> {} items",
                    doc.source,
                    doc.lines.len(),
                    items.len()
                );
                DocumentResult {
                    source: doc.source,
                    line_count: doc.lines.len(),
                    items,
                }
            })
            .collect();

        let csv_output = render_delimited(mode, &results, b',')?;
        let tsv_output = render_delimited(mode, &results, b'\t')?;
        let json_output = serde_json::to_string_pretty(&JsonReport {
            generated_at: chrono::Utc::now().to_rfc3339(),
            mode,
            documents: &results,
        })?;

        Ok(TransformResult {
            mode,
            documents: results,
            csv_output,
            tsv_output,
            json_output,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let names = self.config.filenames();
        let mut outputs: Vec<(&str, &str)> = Vec::new();

        for format in self.config.output_formats() {
            match format.as_str() {
                "json" => outputs.push((names.json.as_str(), result.json_output.as_str())),
                "csv" => outputs.push((names.csv.as_str(), result.csv_output.as_str())),
                "tsv" => outputs.push((names.tsv.as_str(), result.tsv_output.as_str())),
                other => {
                    return Err(MenuError::InvalidConfigValueError {
                        field: "output_formats".to_string(),
                        value: other.to_string(),
                        reason: "Unsupported format".to_string(),
                    })
                }
            }
        }

        let output_dir = Path::new(self.config.output_path());

        if let Some(zip_name) = self.config.compression() {
            tracing::debug!("Creating ZIP file with {} files", outputs.len());

            let zip_data = {
                let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
                for (name, content) in &outputs {
                    zip.start_file(*name, SimpleFileOptions::default())?;
                    zip.write_all(content.as_bytes())?;
                }
                zip.finish()?.into_inner()
            };

            let zip_path = output_dir.join(zip_name).to_string_lossy().into_owned();
            tracing::debug!("Writing ZIP file ({} bytes) to {}", zip_data.len(), zip_path);
            self.storage.write_file(&zip_path, &zip_data).await?;
            return Ok(zip_path);
        }

        let mut written = Vec::new();
        for (name, content) in outputs {
            let path = output_dir.join(name).to_string_lossy().into_owned();
            self.storage.write_file(&path, content.as_bytes()).await?;
            tracing::debug!("Wrote {}", path);
            written.push(path);
        }

        written
            .into_iter()
            .next()
            .ok_or_else(|| MenuError::MissingConfigError {
                field: "output_formats".to_string(),
            })
    }
}
