//! Unit tests for manifest error types

#[cfg(test)]
mod tests {
    use crate::manifest::error::ManifestError;
    use std::error::Error;
    use std::path::PathBuf;

    #[test]
    fn test_duplicate_key() {
        let error = ManifestError::DuplicateKey("wifi".to_string());
        assert_eq!(error.to_string(), "Duplicate setting key: wifi");
    }

    #[test]
    fn test_invalid_range() {
        let error = ManifestError::InvalidRange {
            key: "brightness".to_string(),
            min: 10,
            max: 0,
            step: 1,
        };
        assert_eq!(
            error.to_string(),
            "Invalid range for 'brightness': min 10, max 0, step 1"
        );
    }

    #[test]
    fn test_empty_options() {
        let error = ManifestError::EmptyOptions("theme".to_string());
        assert_eq!(error.to_string(), "Picker 'theme' has no options");
    }

    #[test]
    fn test_default_out_of_range() {
        let error = ManifestError::DefaultOutOfRange {
            key: "volume".to_string(),
            value: "120".to_string(),
        };
        assert_eq!(error.to_string(), "Default for 'volume' is out of range: 120");
    }

    #[test]
    fn test_io_error_keeps_source() {
        let error = ManifestError::Io {
            path: PathBuf::from("settings.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };

        assert!(error.to_string().contains("settings.toml"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_parse_error_from_toml() {
        let toml_error = toml::from_str::<toml::Table>("title = ").unwrap_err();
        let error: ManifestError = toml_error.into();

        assert!(error.to_string().starts_with("Invalid manifest:"));
        assert!(matches!(error, ManifestError::Parse(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = ManifestError::EmptyOptions("theme".to_string());
        let debug = format!("{error:?}");
        assert!(debug.contains("EmptyOptions"));
    }
}
