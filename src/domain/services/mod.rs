// Line classification: the full heuristic pass and the coarse simple pass.
// Both stay separate operations; callers pick one per input quality.

pub mod heuristic;
pub mod simple;
pub mod text;

pub use heuristic::extract_items;
pub use simple::parse_lines;

use crate::domain::model::{ExtractedItems, ExtractionMode};

/// Run the pass selected by `mode` over one document's lines.
pub fn classify<S: AsRef<str>>(mode: ExtractionMode, lines: &[S]) -> ExtractedItems {
    match mode {
        ExtractionMode::Heuristic => ExtractedItems::Heuristic(extract_items(lines)),
        ExtractionMode::Simple => ExtractedItems::Simple(parse_lines(lines)),
    }
}
