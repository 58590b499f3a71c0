//! Shell protocol errors.

/// Errors that can occur while handling shell input.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// A command is missing its argument.
    #[error("{command} needs an argument")]
    MissingArgument {
        /// The command name.
        command: &'static str,
    },
    /// A square argument could not be parsed.
    #[error("invalid square: {found}")]
    InvalidSquare {
        /// The string that failed to parse.
        found: String,
    },
    /// A board diagram could not be parsed.
    #[error("invalid diagram: {diagram}")]
    InvalidDiagram {
        /// The diagram string that failed to parse.
        diagram: String,
    },
    /// The side argument of `setup` is not "w" or "b".
    #[error("invalid side: {found}")]
    InvalidSide {
        /// The string that failed to parse.
        found: String,
    },
    /// An I/O error occurred while reading from stdin.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
