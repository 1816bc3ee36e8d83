use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Input file not found: {path}")]
    InputMissing { path: String },

    #[error("Failed to export results to {path}: {message}")]
    Export { path: String, message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, TrackerError>;

/// 單筆資金欄位解析失敗；只會導致該筆記錄被略過
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FundingParseError {
    #[error("funding amount is empty")]
    Empty,

    #[error("'{text}' is not a number")]
    Invalid { text: String },

    #[error("'{text}' is not a finite amount")]
    NotFinite { text: String },

    #[error("'{text}' is negative")]
    Negative { text: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Processing,
    Output,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl TrackerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TrackerError::InputMissing { .. } | TrackerError::CsvError(_) => ErrorCategory::Input,
            TrackerError::ConfigValidationError { .. }
            | TrackerError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            TrackerError::ProcessingError { .. } | TrackerError::SerializationError(_) => {
                ErrorCategory::Processing
            }
            TrackerError::Export { .. } => ErrorCategory::Output,
            TrackerError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Processing | ErrorCategory::Output => {
                ErrorSeverity::High
            }
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TrackerError::InputMissing { .. } => {
                "Create the input file using the generated template as a guide"
            }
            TrackerError::CsvError(_) => {
                "Check that the input file is valid CSV with a header row"
            }
            TrackerError::Export { .. } => {
                "Make sure the output file is not open elsewhere and the directory is writable"
            }
            TrackerError::ConfigValidationError { .. }
            | TrackerError::InvalidConfigValueError { .. } => {
                "Review the command line options and the criteria file"
            }
            TrackerError::ProcessingError { .. } | TrackerError::SerializationError(_) => {
                "Re-run with --verbose to see which record caused the problem"
            }
            TrackerError::IoError(_) => "Check file permissions and available disk space",
        }
    }

    /// 依嚴重程度決定的程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TrackerError::InputMissing { path } => format!("File '{}' not found.", path),
            TrackerError::Export { path, .. } => format!("Error exporting to '{}'.", path),
            TrackerError::CsvError(e) => format!("Error loading file: {}", e),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_error_is_output_category() {
        let err = TrackerError::Export {
            path: "startup_results.csv".to_string(),
            message: "permission denied".to_string(),
        };

        assert_eq!(err.category(), ErrorCategory::Output);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("startup_results.csv"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err = TrackerError::from(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk full",
        ));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_funding_parse_error_messages() {
        let err = FundingParseError::Invalid {
            text: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "'abc' is not a number");
        assert_eq!(FundingParseError::Empty.to_string(), "funding amount is empty");
    }
}
