//! Game state machine errors.
//!
//! Every variant is recoverable: callers log and carry on, the game never
//! dies on bad input.

use damka_core::{BoardError, Color, PieceId};

/// Errors from the turn/selection state machine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A player grabbed the opponent's piece.
    #[error("piece belongs to {piece}, but it is {turn}'s turn")]
    WrongColor {
        /// Color of the grabbed piece.
        piece: Color,
        /// Color whose turn it is.
        turn: Color,
    },
    /// The grabbed id was never issued by this board, e.g. a stale id
    /// replayed after a restart.
    #[error("unknown piece id {piece}")]
    UnknownPiece {
        /// The unrecognized id.
        piece: PieceId,
    },
    /// The grabbed piece is no longer on the board.
    #[error("piece {piece} has been captured")]
    PieceCaptured {
        /// The captured piece.
        piece: PieceId,
    },
    /// A selection was begun while another is still active.
    #[error("a selection is already in progress")]
    SelectionInProgress,
    /// A drop arrived with no active selection.
    #[error("no selection is in progress")]
    NoSelection,
    /// The board refused a move the legality engine produced.
    #[error("board rejected the move: {source}")]
    Board {
        /// The underlying board error.
        #[from]
        source: BoardError,
    },
}

#[cfg(test)]
mod tests {
    use super::GameError;
    use damka_core::Color;

    #[test]
    fn wrong_color_display() {
        let err = GameError::WrongColor {
            piece: Color::Black,
            turn: Color::White,
        };
        assert_eq!(format!("{err}"), "piece belongs to b, but it is w's turn");
    }
}
