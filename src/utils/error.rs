use thiserror::Error;

/// The only failure the resolver reports. The breed could not be resolved,
/// whatever the underlying cause was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("breed not found: {breed}")]
pub struct ResolutionError {
    pub breed: String,
}

impl ResolutionError {
    pub fn new(breed: impl Into<String>) -> Self {
        Self {
            breed: breed.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    Resolution(#[from] ResolutionError),
}

impl AppError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::HttpClient(_) => "Could not set up the HTTP client".to_string(),
            AppError::Io(e) => format!("Could not read a file: {}", e),
            AppError::TomlParse(_) => "The configuration file is not valid TOML".to_string(),
            AppError::InvalidConfigValue { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            AppError::Resolution(e) => format!("Could not resolve sub-breeds for '{}'", e.breed),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::HttpClient(_) => "Check the TLS setup and the timeout value",
            AppError::Io(_) => "Make sure the file exists and is readable",
            AppError::TomlParse(_) => "Fix the syntax of the configuration file",
            AppError::InvalidConfigValue { .. } => {
                "Review the command line flags and the configuration file"
            }
            AppError::Resolution(_) => {
                "Check the breed name spelling and that the service is reachable"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_error_carries_breed() {
        let err = ResolutionError::new("nonexistent");
        assert_eq!(err.breed, "nonexistent");
        assert_eq!(err.to_string(), "breed not found: nonexistent");
    }

    #[test]
    fn test_app_error_wraps_resolution_error() {
        let err: AppError = ResolutionError::new("hound").into();
        assert_eq!(err.to_string(), "breed not found: hound");
        assert!(err.user_friendly_message().contains("hound"));
    }

    #[test]
    fn test_invalid_config_value_message() {
        let err = AppError::InvalidConfigValue {
            field: "service.base_url".to_string(),
            value: "ftp://x".to_string(),
            reason: "Unsupported URL scheme: ftp".to_string(),
        };
        assert!(err.user_friendly_message().contains("service.base_url"));
        assert!(!err.recovery_suggestion().is_empty());
    }
}
