//! Domain error types
//!
//! Every failure the backup job can hit maps onto one variant of
//! [`BackupError`]. None of them are retried inside the job; the caller
//! decides whether to schedule a fresh run.

use thiserror::Error;

/// Main backup error type
///
/// Variants carry plain messages so that SDK error types never leak out of
/// the adapter layer.
#[derive(Debug, Error)]
pub enum BackupError {
    /// Missing or invalid required settings
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The table scan request failed
    #[error("Scan error: {0}")]
    Scan(String),

    /// An attribute value could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Writing an object to the output bucket failed
    #[error("Upload of {key} failed: {message}")]
    Upload { key: String, message: String },

    /// Export orchestration errors
    #[error("Export error: {0}")]
    Export(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl BackupError {
    /// Creates an upload error for the given object key
    pub fn upload(key: impl Into<String>, message: impl Into<String>) -> Self {
        BackupError::Upload {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for BackupError {
    fn from(err: std::io::Error) -> Self {
        BackupError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BackupError {
    fn from(err: serde_json::Error) -> Self {
        BackupError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for BackupError {
    fn from(err: toml::de::Error) -> Self {
        BackupError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backup_error_display() {
        let err = BackupError::Configuration("DYNAMODB_TABLE is not set".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: DYNAMODB_TABLE is not set"
        );
    }

    #[test]
    fn test_upload_error_display() {
        let err = BackupError::upload("orders/2024-01-01-00-00-00/manifest", "access denied");
        assert_eq!(
            err.to_string(),
            "Upload of orders/2024-01-01-00-00-00/manifest failed: access denied"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: BackupError = io_err.into();
        assert!(matches!(err, BackupError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: BackupError = json_err.into();
        assert!(matches!(err, BackupError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: BackupError = toml_err.into();
        assert!(matches!(err, BackupError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_backup_error_implements_std_error() {
        let err = BackupError::Scan("throughput exceeded".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
