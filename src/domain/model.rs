use serde::{Deserialize, Serialize};
use std::fmt;

/// A scored, de-duplicated probable menu item extracted from one OCR line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    /// The untouched source line.
    pub original: String,
    pub score: f64,
}

/// Output of the coarse pass: `id` is the index of the source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLine {
    pub id: String,
    pub text: String,
}

/// Which classifier pass turns a document's lines into items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMode {
    /// Full multi-step classifier (headers, bullets, prices, comma lists).
    #[default]
    Heuristic,
    /// Coarse price-strip and dedupe filter for already clean text.
    Simple,
}

impl fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionMode::Heuristic => write!(f, "heuristic"),
            ExtractionMode::Simple => write!(f, "simple"),
        }
    }
}

/// How an input file's bytes map to OCR lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// `json` for `.json` files, `text` otherwise.
    #[default]
    Auto,
    /// One OCR line per text line.
    Text,
    /// `{"lines": ["..."]}`
    Json,
}

/// One input file's worth of OCR lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrDocument {
    pub source: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtractedItems {
    Heuristic(Vec<Candidate>),
    Simple(Vec<ParsedLine>),
}

impl ExtractedItems {
    pub fn len(&self) -> usize {
        match self {
            ExtractedItems::Heuristic(items) => items.len(),
            ExtractedItems::Simple(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentResult {
    pub source: String,
    pub line_count: usize,
    #[serde(rename = "candidates")]
    pub items: ExtractedItems,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub mode: ExtractionMode,
    pub documents: Vec<DocumentResult>,
    pub csv_output: String,
    pub tsv_output: String,
    pub json_output: String,
}

impl TransformResult {
    pub fn total_items(&self) -> usize {
        self.documents.iter().map(|d| d.items.len()).sum()
    }
}
