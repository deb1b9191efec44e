use crate::utils::error::{CollectorError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CollectorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CollectorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Exclusions are matched against a single file name, so separators never match.
pub fn validate_entry_names(field_name: &str, names: &[String]) -> Result<()> {
    for name in names {
        validate_non_empty_string(field_name, name)?;
        if name.contains('/') || name.contains('\\') {
            return Err(CollectorError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.clone(),
                reason: "Expected a file or directory name, not a path".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CollectorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(CollectorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("in", "./src").is_ok());
        assert!(validate_path("in", "").is_err());
        assert!(validate_path("in", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_entry_names() {
        let names = vec!["vendor".to_string(), "Exclude1.php".to_string()];
        assert!(validate_entry_names("exclude", &names).is_ok());

        assert!(validate_entry_names("exclude", &["  ".to_string()]).is_err());
        assert!(validate_entry_names("exclude", &["src/vendor".to_string()]).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("concurrency", 4usize, 1, 1024).is_ok());
        assert!(validate_range("concurrency", 0usize, 1, 1024).is_err());
        assert!(validate_range("concurrency", 2048usize, 1, 1024).is_err());
    }
}
