//! Piece and player colors.

use std::fmt;
use std::ops::Not;

use crate::square::Rank;

/// A checkers color: White or Black. White sits on ranks 1-3 and moves up
/// the board; Black sits on ranks 6-8 and moves down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Total number of colors.
    pub const COUNT: usize = 2;

    /// All colors in index order.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Return the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of a forward step for a man of this color.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// The rank this color's pieces started from.
    #[inline]
    pub const fn back_rank(self) -> Rank {
        match self {
            Color::White => Rank::R1,
            Color::Black => Rank::R8,
        }
    }

    /// The opponent's back rank, where a man of this color is crowned.
    #[inline]
    pub const fn crowning_rank(self) -> Rank {
        match self {
            Color::White => Rank::R8,
            Color::Black => Rank::R1,
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "w"),
            Color::Black => write!(f, "b"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;
    use crate::square::Rank;

    #[test]
    fn index_values() {
        assert_eq!(Color::White.index(), 0);
        assert_eq!(Color::Black.index(), 1);
    }

    #[test]
    fn flip_roundtrip() {
        assert_eq!(Color::White.flip(), Color::Black);
        assert_eq!(Color::Black.flip(), Color::White);
        assert_eq!(Color::White.flip().flip(), Color::White);
    }

    #[test]
    fn not_operator() {
        assert_eq!(!Color::White, Color::Black);
        assert_eq!(!Color::Black, Color::White);
    }

    #[test]
    fn forward_directions_oppose() {
        assert_eq!(Color::White.forward(), 1);
        assert_eq!(Color::Black.forward(), -1);
        assert_eq!(Color::White.forward(), -Color::Black.forward());
    }

    #[test]
    fn crowning_rank_is_opponents_back_rank() {
        assert_eq!(Color::White.crowning_rank(), Rank::R8);
        assert_eq!(Color::Black.crowning_rank(), Rank::R1);
        assert_eq!(Color::White.crowning_rank(), Color::Black.back_rank());
        assert_eq!(Color::Black.crowning_rank(), Color::White.back_rank());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Color::White), "w");
        assert_eq!(format!("{}", Color::Black), "b");
    }
}
