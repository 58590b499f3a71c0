//! Error types for board mutation and diagram parsing.

use crate::piece::PieceId;
use crate::square::Square;

/// Errors from board mutation or structural validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A capture was requested for a piece that is already off the board.
    #[error("piece {piece} has already been captured")]
    PieceAlreadyCaptured {
        /// The offending piece.
        piece: PieceId,
    },
    /// A move was applied whose source square holds no piece.
    #[error("no piece on source square {square}")]
    SourceEmpty {
        /// The empty source square.
        square: Square,
    },
    /// A move was applied whose destination square is occupied.
    #[error("destination square {square} is occupied")]
    DestinationOccupied {
        /// The occupied destination square.
        square: Square,
    },
    /// A jump move carries no piece on its intermediate square.
    #[error("no piece to capture on {square}")]
    NothingToJump {
        /// The empty intermediate square.
        square: Square,
    },
    /// An alive piece sits on a Light square.
    #[error("piece {piece} sits on light square {square}")]
    PieceOnLightSquare {
        /// The offending piece.
        piece: PieceId,
        /// Its square.
        square: Square,
    },
    /// A piece's square and its cell's occupant disagree.
    #[error("piece {piece} thinks it is on {square} but the cell disagrees")]
    OccupancyDesync {
        /// The offending piece.
        piece: PieceId,
        /// The square the piece claims.
        square: Square,
    },
    /// A cell references a piece that has been captured.
    #[error("cell {square} references captured piece {piece}")]
    CellReferencesCapturedPiece {
        /// The offending cell.
        square: Square,
        /// The captured piece it points at.
        piece: PieceId,
    },
}

/// Errors from parsing a board diagram.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    /// The diagram does not have exactly 8 slash-separated ranks.
    #[error("expected 8 ranks in diagram, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index as written (0 = rank 8, 7 = rank 1).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the diagram.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The parsed board fails structural validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying board validation error.
        #[from]
        source: BoardError,
    },
}
