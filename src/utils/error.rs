use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollectorError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Cannot read directory {}: {source}", path.display())]
    DirectoryError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl ErrorSeverity {
    /// 對應的程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl CollectorError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CollectorError::ConfigValidationError { .. }
            | CollectorError::InvalidConfigValueError { .. }
            | CollectorError::DirectoryError { .. } => ErrorSeverity::High,
            CollectorError::ProcessingError { .. }
            | CollectorError::IoError(_)
            | CollectorError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CollectorError::DirectoryError { path, .. } => {
                format!("Directory '{}' could not be read", path.display())
            }
            CollectorError::IoError(e) => format!("A file operation failed: {}", e),
            CollectorError::SerializationError(_) => {
                "Failed to serialize the variable report".to_string()
            }
            CollectorError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CollectorError::DirectoryError { .. } => {
                "Check that the input directory exists and is readable (--in)"
            }
            CollectorError::IoError(_) => {
                "Check permissions and free space of the output directory (--out)"
            }
            CollectorError::SerializationError(_) => "Retry with --format txt",
            CollectorError::ConfigValidationError { .. } => {
                "Check the TOML configuration file syntax"
            }
            CollectorError::InvalidConfigValueError { .. } => {
                "Run with --help to see accepted values"
            }
            CollectorError::ProcessingError { .. } => "Re-run with --verbose for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, CollectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_error_is_high_severity() {
        let err = CollectorError::DirectoryError {
            path: PathBuf::from("heavensdoor"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.severity().exit_code(), 1);
        assert!(err.user_friendly_message().contains("heavensdoor"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: CollectorError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.severity().exit_code(), 3);
    }

    #[test]
    fn test_processing_error_does_not_use_usage_exit_code() {
        let err = CollectorError::ProcessingError {
            message: "Scan task failed".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        // 2 保留給 clap 的參數錯誤
        assert_ne!(err.severity().exit_code(), 2);
        assert_eq!(err.severity().exit_code(), 3);
    }
}
