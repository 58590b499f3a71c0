//! Line-based interactive shell driving a game session.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use damka_core::legal_moves_at;
use damka_game::{Game, Session, UiAdapter};

use crate::command::{parse_command, Command};
use crate::error::ShellError;

/// A [`UiAdapter`] that narrates board effects as text lines.
pub struct TextAdapter;

impl UiAdapter for TextAdapter {
    fn highlight_squares(&mut self, squares: &[damka_core::Square]) {
        let listed: Vec<String> = squares.iter().map(|s| s.to_string()).collect();
        println!("highlight {}", listed.join(" "));
    }

    fn clear_highlights(&mut self) {
        println!("clear highlights");
    }

    fn show_piece_at(&mut self, piece: damka_core::PieceId, square: damka_core::Square) {
        println!("piece {piece} -> {square}");
    }

    fn remove_piece(&mut self, piece: damka_core::PieceId) {
        println!("remove piece {piece}");
    }

    fn mark_crowned(&mut self, piece: damka_core::PieceId) {
        println!("crown piece {piece}");
    }
}

/// The interactive shell, holding the session it drives.
///
/// Reads commands from stdin one line at a time and applies them in
/// order. All state lives on the calling thread.
pub struct Shell {
    session: Session<TextAdapter>,
}

impl Shell {
    /// Create a shell with a fresh game.
    pub fn new() -> Self {
        Self {
            session: Session::new(TextAdapter),
        }
    }

    /// Run the shell loop, reading from stdin until `quit` or input closes.
    pub fn run(&mut self) -> Result<(), ShellError> {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");
            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.handle(cmd),
                Err(e) => warn!(error = %e, "parse error"),
            }
            io::stdout().flush()?;
        }

        info!("damka shutting down");
        Ok(())
    }

    /// Dispatch a single parsed command.
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::New => {
                self.session.restart(Game::new());
                println!("new game");
            }
            Command::Show => self.show(),
            Command::Moves(square) => self.show_moves(square),
            Command::Grab(square) => self.session.piece_grabbed_at(square),
            Command::Hover(square) => self.session.pointer_over(square),
            Command::Drop => self.session.piece_dropped(),
            Command::Move { from, to } => {
                self.session.piece_grabbed_at(from);
                self.session.pointer_over(to);
                self.session.piece_dropped();
            }
            Command::Setup { board, side } => {
                self.session.restart(Game::with_board(board, side));
                println!("position set");
            }
            Command::Quit => {}
            Command::Unknown(name) => {
                if !name.is_empty() {
                    warn!(command = %name, "unknown command");
                }
            }
        }
    }

    fn show(&self) {
        let game = self.session.game();
        println!("{}", game.board().pretty());
        println!(
            "turn {} ({} to move)",
            game.turn().number(),
            game.turn().side()
        );
    }

    fn show_moves(&self, square: damka_core::Square) {
        let moves = legal_moves_at(self.session.game().board(), square);
        if moves.is_empty() {
            println!("no moves from {square}");
            return;
        }
        let listed: Vec<String> = moves.into_iter().map(|m| m.to_string()).collect();
        println!("moves {}", listed.join(" "));
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}
