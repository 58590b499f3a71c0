//! Core checkers types: the board grid, pieces, and the move-legality engine.

mod board;
mod color;
mod error;
mod moves;
mod movegen;
mod notation;
mod piece;
mod square;

pub use board::{Board, MoveOutcome, PrettyBoard};
pub use color::Color;
pub use error::{BoardError, NotationError};
pub use moves::{Move, MoveKind};
pub use movegen::{legal_moves, legal_moves_at, legal_moves_from, MoveList};
pub use notation::STARTING_DIAGRAM;
pub use piece::{Piece, PieceId};
pub use square::{File, Rank, Shade, Square};
