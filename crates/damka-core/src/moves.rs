//! Move representation, bit-packed into a u16.

use std::fmt;

use crate::square::Square;

// Private bit-field constants.
const SRC_MASK: u16 = 0x003F;
const DST_MASK: u16 = 0x0FC0;
const KIND_MASK: u16 = 0x1000;
const DST_SHIFT: u32 = 6;
const KIND_SHIFT: u32 = 12;

/// The category of a checkers move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveKind {
    /// A single diagonal step onto an empty adjacent square.
    Step = 0,
    /// A hop over an adjacent opposing piece onto the empty square beyond it.
    Jump = 1,
}

/// A checkers move encoded in 16 bits.
///
/// ```text
/// bits  0-5:  source square      (0-63)
/// bits  6-11: destination square (0-63)
/// bit   12:   move kind          (Step=0, Jump=1)
/// ```
///
/// A jump always lands exactly two files and two ranks from its source, so
/// the captured square is derivable and not stored.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// Null move sentinel (a1→a1, Step). Never a legal move.
    pub const NULL: Move = Move(0);

    /// Create a single-step move.
    pub const fn new_step(source: Square, dest: Square) -> Move {
        Move((source.index() as u16) | ((dest.index() as u16) << DST_SHIFT))
    }

    /// Create a capture hop.
    ///
    /// # Panics
    ///
    /// Debug-asserts that the destination is exactly two diagonal steps from
    /// the source.
    pub const fn new_jump(source: Square, dest: Square) -> Move {
        debug_assert!(source.x().abs_diff(dest.x()) == 2);
        debug_assert!(source.y().abs_diff(dest.y()) == 2);
        Move(
            (source.index() as u16)
                | ((dest.index() as u16) << DST_SHIFT)
                | (1u16 << KIND_SHIFT),
        )
    }

    /// Extract the source square.
    pub const fn source(self) -> Square {
        Square::from_index_unchecked((self.0 & SRC_MASK) as u8)
    }

    /// Extract the destination square.
    pub const fn dest(self) -> Square {
        Square::from_index_unchecked(((self.0 & DST_MASK) >> DST_SHIFT) as u8)
    }

    /// Extract the move kind.
    pub const fn kind(self) -> MoveKind {
        if self.0 & KIND_MASK == 0 {
            MoveKind::Step
        } else {
            MoveKind::Jump
        }
    }

    /// Return `true` if this is the null move sentinel.
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Return `true` if this is a capture hop.
    pub const fn is_jump(self) -> bool {
        self.0 & KIND_MASK != 0
    }

    /// The square hopped over by a jump: the diagonal midpoint of source and
    /// destination. Returns `None` for step moves.
    pub const fn jumped_square(self) -> Option<Square> {
        if self.is_jump() {
            // Source and destination differ by 2 on both axes, so the index
            // sum is even and the midpoint is exact.
            Some(Square::from_index_unchecked(
                ((self.source().index() + self.dest().index()) / 2) as u8,
            ))
        } else {
            None
        }
    }

    /// Parse a move from text like "c3d4". The kind is derived from the
    /// distance between the two squares.
    pub fn from_text(s: &str) -> Option<Move> {
        if s.len() != 4 {
            return None;
        }
        let source = Square::from_algebraic(&s[..2])?;
        let dest = Square::from_algebraic(&s[2..])?;
        let dx = source.x().abs_diff(dest.x());
        let dy = source.y().abs_diff(dest.y());
        match (dx, dy) {
            (1, 1) => Some(Move::new_step(source, dest)),
            (2, 2) => Some(Move::new_jump(source, dest)),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "0000")
        } else {
            write!(f, "{}{}", self.source(), self.dest())
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} kind={:?})", self, self.kind())
    }
}
