use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for svcgen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Terminal failures of a generation run.
///
/// None of these are retried. Every variant maps to the same process exit
/// code and renders as a single line.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// A required descriptor field was missing or blank.
    #[error("option {name} is not set")]
    #[diagnostic(code(svcgen::missing_field), help("pass --{name} <value>"))]
    MissingField { name: &'static str },

    /// The output destination could not be created.
    #[error("unable to open file {}", path.display())]
    #[diagnostic(code(svcgen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The generated module could not be written out.
    #[error("unable to render output")]
    #[diagnostic(code(svcgen::render))]
    Render {
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Exit code shared by every terminal error.
    pub const EXIT_CODE: i32 = 2;

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingField { .. } | Self::Io { .. } | Self::Render { .. } => Self::EXIT_CODE,
        }
    }

    pub fn render(source: std::io::Error) -> Self {
        Self::Render { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_single_line() {
        let errors = [
            Error::MissingField { name: "service" },
            Error::Io {
                path: PathBuf::from("/no/such/dir/out.go"),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            },
            Error::render(std::io::Error::from(std::io::ErrorKind::BrokenPipe)),
        ];

        for err in &errors {
            assert!(!err.to_string().contains('\n'));
            assert_eq!(err.exit_code(), 2);
        }
    }

    #[test]
    fn test_message_text() {
        assert_eq!(
            Error::MissingField {
                name: "short-service"
            }
            .to_string(),
            "option short-service is not set"
        );
        assert_eq!(
            Error::Io {
                path: PathBuf::from("out/todo.go"),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }
            .to_string(),
            "unable to open file out/todo.go"
        );
        assert_eq!(
            Error::render(std::io::Error::from(std::io::ErrorKind::WriteZero)).to_string(),
            "unable to render output"
        );
    }
}
