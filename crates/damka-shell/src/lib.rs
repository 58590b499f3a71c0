//! Text command protocol for damka.

pub mod command;
pub mod error;
pub mod shell;

pub use command::{parse_command, Command};
pub use error::ShellError;
pub use shell::{Shell, TextAdapter};
