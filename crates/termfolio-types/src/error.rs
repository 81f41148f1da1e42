//! Error types for termfolio.

use std::io;

/// Errors produced by the termfolio crates.
#[derive(Debug, thiserror::Error)]
pub enum TermfolioError {
    #[error("storage error: {0}")]
    Storage(String),

    #[error("validation error: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("template error: {0}")]
    Template(String),

    #[error("export error: {0}")]
    Export(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, TermfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_display() {
        let e = TermfolioError::Storage("disk full".into());
        assert_eq!(format!("{e}"), "storage error: disk full");
    }

    #[test]
    fn validation_error_lists_every_field() {
        let e = TermfolioError::Validation(vec!["name".into(), "contact.email".into()]);
        assert_eq!(format!("{e}"), "validation error: name, contact.email");
    }

    #[test]
    fn template_error_display() {
        let e = TermfolioError::Template("placeholder missing".into());
        assert_eq!(format!("{e}"), "template error: placeholder missing");
    }

    #[test]
    fn export_error_display() {
        let e = TermfolioError::Export("archive failed".into());
        assert_eq!(format!("{e}"), "export error: archive failed");
    }

    #[test]
    fn config_error_display() {
        let e = TermfolioError::Config("bad width".into());
        assert_eq!(format!("{e}"), "config error: bad width");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: TermfolioError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let toml_err = toml::from_str::<toml::Value>("this is [[[not valid toml").unwrap_err();
        let e: TermfolioError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let e: TermfolioError = json_err.into();
        assert!(format!("{e}").contains("JSON error"));
    }

    #[test]
    fn result_alias_err() {
        let r: Result<i32> = Err(TermfolioError::Storage("oops".into()));
        assert!(r.is_err());
    }
}
