//! Checkers pieces and the arena ids the board tracks them by.

use std::fmt;

use crate::color::Color;
use crate::square::Square;

/// Stable handle to a piece in the board's arena.
///
/// Ids are assigned during setup and stay valid for the whole game; captured
/// pieces keep their id so the UI can keep addressing their visuals.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId(pub(crate) u8);

impl PieceId {
    /// Return the zero-based arena index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PieceId({})", self.0)
    }
}

/// A single checkers piece.
///
/// The piece records the square it stands on; the board's cell array records
/// the reverse reference. Only [`Board`](crate::Board) mutations touch either
/// side, and they always update both together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    color: Color,
    crowned: bool,
    square: Square,
    captured: bool,
}

impl Piece {
    /// Create a fresh man of the given color on the given square.
    pub(crate) const fn new(color: Color, square: Square) -> Piece {
        Piece {
            color,
            crowned: false,
            square,
            captured: false,
        }
    }

    /// Create a crowned piece. Used by diagram parsing.
    pub(crate) const fn new_crowned(color: Color, square: Square) -> Piece {
        Piece {
            color,
            crowned: true,
            square,
            captured: false,
        }
    }

    /// Return the piece's color.
    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Return `true` if the piece has been crowned (a "double" piece).
    #[inline]
    pub const fn is_crowned(self) -> bool {
        self.crowned
    }

    /// Return the square the piece stands on.
    ///
    /// Meaningless once the piece is captured; callers should check
    /// [`is_captured`](Self::is_captured) first.
    #[inline]
    pub const fn square(self) -> Square {
        self.square
    }

    /// Return `true` if the piece has been captured.
    #[inline]
    pub const fn is_captured(self) -> bool {
        self.captured
    }

    /// Crown the piece. No-op when already crowned.
    #[inline]
    pub(crate) fn crown(&mut self) {
        self.crowned = true;
    }

    /// Record the piece's new square.
    #[inline]
    pub(crate) fn set_square(&mut self, square: Square) {
        self.square = square;
    }

    /// Flag the piece as captured.
    #[inline]
    pub(crate) fn set_captured(&mut self) {
        self.captured = true;
    }

    /// Diagram character: `w`/`b` for men, `W`/`B` for crowned pieces.
    pub const fn diagram_char(self) -> char {
        match (self.color, self.crowned) {
            (Color::White, false) => 'w',
            (Color::White, true) => 'W',
            (Color::Black, false) => 'b',
            (Color::Black, true) => 'B',
        }
    }
}
