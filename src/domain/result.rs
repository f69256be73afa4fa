//! Result type alias for backup operations

use super::errors::BackupError;

/// Result type alias that uses [`BackupError`] as the error type.
///
/// # Examples
///
/// ```
/// use ddb_backup::domain::result::Result;
/// use ddb_backup::domain::errors::BackupError;
///
/// fn failing_function() -> Result<()> {
///     Err(BackupError::Scan("connection reset".to_string()))
/// }
///
/// assert!(failing_function().is_err());
/// ```
pub type Result<T> = std::result::Result<T, BackupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(BackupError::Export("test error".to_string()));
        assert!(result.is_err());
    }
}
