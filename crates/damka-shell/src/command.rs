//! Shell command parsing.

use damka_core::{Board, Color, Square};

use crate::error::ShellError;

/// A parsed shell command.
#[derive(Debug)]
pub enum Command {
    /// `new` -- start a fresh game.
    New,
    /// `show` / `board` -- print the board and the turn.
    Show,
    /// `moves <square>` -- list the legal destinations for a piece.
    Moves(Square),
    /// `grab <square>` -- pick up the piece on a square.
    Grab(Square),
    /// `hover <square>` -- move the pointer over a square mid-drag.
    Hover(Square),
    /// `drop` -- release the held piece on the hovered square.
    Drop,
    /// `move <from> <to>` -- grab, hover, and drop in one line.
    Move {
        /// Square to grab.
        from: Square,
        /// Square to drop on.
        to: Square,
    },
    /// `setup <diagram> <w|b>` -- restart from a diagram position.
    Setup {
        /// The parsed board.
        board: Board,
        /// The side to move.
        side: Color,
    },
    /// `quit` -- exit the shell.
    Quit,
    /// Unrecognized command (silently ignored).
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ShellError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "new" => Ok(Command::New),
        "show" | "board" => Ok(Command::Show),
        "drop" => Ok(Command::Drop),
        "quit" | "exit" => Ok(Command::Quit),
        "moves" => Ok(Command::Moves(parse_square(tokens.get(1).copied(), "moves")?)),
        "grab" => Ok(Command::Grab(parse_square(tokens.get(1).copied(), "grab")?)),
        "hover" => Ok(Command::Hover(parse_square(tokens.get(1).copied(), "hover")?)),
        "move" => Ok(Command::Move {
            from: parse_square(tokens.get(1).copied(), "move")?,
            to: parse_square(tokens.get(2).copied(), "move")?,
        }),
        "setup" => parse_setup(&tokens[1..]),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

/// Parse the `setup` arguments: a board diagram and the side to move.
fn parse_setup(tokens: &[&str]) -> Result<Command, ShellError> {
    let diagram = tokens.first().ok_or(ShellError::MissingArgument {
        command: "setup",
    })?;
    let board: Board = diagram.parse().map_err(|_| ShellError::InvalidDiagram {
        diagram: diagram.to_string(),
    })?;

    let side = match tokens.get(1).copied() {
        None | Some("w") => Color::White,
        Some("b") => Color::Black,
        Some(other) => {
            return Err(ShellError::InvalidSide {
                found: other.to_string(),
            });
        }
    };

    Ok(Command::Setup { board, side })
}

/// Parse a square argument from a token.
fn parse_square(token: Option<&str>, command: &'static str) -> Result<Square, ShellError> {
    let value = token.ok_or(ShellError::MissingArgument { command })?;
    Square::from_algebraic(value).ok_or_else(|| ShellError::InvalidSquare {
        found: value.to_string(),
    })
}
