pub mod etl;
pub mod pipeline;

pub use crate::domain::model::{
    Candidate, DocumentResult, ExtractedItems, ExtractionMode, InputFormat, OcrDocument,
    ParsedLine, TransformResult,
};
pub use crate::domain::ports::{ConfigProvider, OutputFilenames, Pipeline, Storage};
pub use crate::utils::error::Result;
