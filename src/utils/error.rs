use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid configuration for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Unreadable input '{source_name}': {message}")]
    InputFormatError {
        source_name: String,
        message: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Output,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl MenuError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MenuError::ConfigValidationError { .. }
            | MenuError::InvalidConfigValueError { .. }
            | MenuError::MissingConfigError { .. } => ErrorCategory::Configuration,
            MenuError::InputFormatError { .. } => ErrorCategory::Input,
            MenuError::IoError(_) | MenuError::ZipError(_) => ErrorCategory::Output,
            MenuError::CsvError(_)
            | MenuError::SerializationError(_)
            | MenuError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            MenuError::IoError(_) => ErrorSeverity::Medium,
            MenuError::ZipError(_) | MenuError::CsvError(_) | MenuError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the command line flags or TOML file against the documented options"
            }
            ErrorCategory::Input => {
                "Provide plain text with one OCR line per line, or JSON shaped like {\"lines\": [...]}"
            }
            ErrorCategory::Output => {
                "Make sure the input files exist and the output directory is writable"
            }
            ErrorCategory::Processing => "Re-run with --verbose and report the failing input",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MenuError::IoError(e) => format!("File access failed: {}", e),
            MenuError::MissingConfigError { field } => {
                format!("Missing required setting '{}'", field)
            }
            MenuError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            MenuError::InputFormatError {
                source_name,
                message,
            } => format!("Could not read OCR lines from '{}': {}", source_name, message),
            other => other.to_string(),
        }
    }

    /// Process exit code for the binaries.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;
