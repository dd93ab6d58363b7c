//! Configuration loading and validation.

mod types;
mod validation;

pub use types::*;

use crate::error::Result;
use std::path::Path;

impl CodecConfig {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: CodecConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }

    /// Reject a decoded element count above the configured limit.
    pub(crate) fn check_len(&self, len: usize) -> std::result::Result<(), String> {
        match self.max_elements {
            Some(max) if len > max => Err(format!(
                "{} elements exceeds configured maximum of {}",
                len, max
            )),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = CodecConfig::from_yaml("{}").unwrap();
        assert!(config.text.strict_envelope);
        assert_eq!(config.binary.lower_bound, i32::MIN);
        assert!(config.json.accept_numbers);
        assert_eq!(config.max_elements, None);
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r#"
text:
  strict_envelope: false
binary:
  lower_bound: 1
max_elements: 1000
"#;
        let config = CodecConfig::from_yaml(yaml).unwrap();
        assert!(!config.text.strict_envelope);
        assert_eq!(config.binary.lower_bound, 1);
        assert!(config.json.accept_numbers);
        assert_eq!(config.max_elements, Some(1000));
    }

    #[test]
    fn test_invalid_yaml_is_rejected() {
        let err = CodecConfig::from_yaml("max_elements: 0").unwrap_err();
        assert!(matches!(err, crate::SeqError::Config(_)));

        let err = CodecConfig::from_yaml("binary: not-a-map").unwrap_err();
        assert!(matches!(err, crate::SeqError::Yaml(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "json:\n  accept_numbers: false").unwrap();

        let config = CodecConfig::load(file.path()).unwrap();
        assert!(!config.json.accept_numbers);
        assert!(config.text.strict_envelope);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CodecConfig::load(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, crate::SeqError::Io(_)));
    }

    #[test]
    fn test_check_len() {
        let config = CodecConfig {
            max_elements: Some(2),
            ..Default::default()
        };
        assert!(config.check_len(2).is_ok());
        assert!(config.check_len(3).is_err());
        assert!(CodecConfig::default().check_len(usize::MAX).is_ok());
    }
}
