use miette::Diagnostic;
use thiserror::Error;

/// Main error type for blocklogo operations
#[derive(Error, Diagnostic, Debug)]
pub enum LogoError {
    #[error("IO error: {0}")]
    #[diagnostic(code(logo::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(logo::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(logo::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("{message}")]
    #[diagnostic(code(logo::lookup))]
    Lookup {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(logo::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error: {message}")]
    #[diagnostic(code(logo::render))]
    Render {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl LogoError {
    /// Build a lookup error for `kind` named `name`, listing the valid names.
    pub fn not_found<'a>(kind: &str, name: &str, available: impl IntoIterator<Item = &'a str>) -> Self {
        let available: Vec<&str> = available.into_iter().collect();
        LogoError::Lookup {
            message: format!("{} '{}' not found", kind, name),
            help: Some(format!("Available: {}", available.join(", "))),
        }
    }
}

pub type Result<T> = std::result::Result<T, LogoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_lists_alternatives() {
        let err = LogoError::not_found("Palette", "nope", ["dawn", "fire"]);
        assert_eq!(err.to_string(), "Palette 'nope' not found");
        match err {
            LogoError::Lookup { help, .. } => {
                assert_eq!(help.as_deref(), Some("Available: dawn, fire"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
