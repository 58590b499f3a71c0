//! Legal destination computation.
//!
//! Pure queries over a [`Board`]; nothing here mutates state, so calling
//! twice on the same position yields the same list.

use crate::board::Board;
use crate::color::Color;
use crate::moves::Move;
use crate::piece::PieceId;
use crate::square::Square;

/// Stack-allocated buffer for a piece's legal moves. A piece probes at most
/// four diagonals and each yields at most one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveList {
    moves: [Move; 4],
    len: u8,
}

impl MoveList {
    /// Create an empty move list.
    pub const fn new() -> MoveList {
        MoveList {
            moves: [Move::NULL; 4],
            len: 0,
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!((self.len as usize) < 4);
        self.moves[self.len as usize] = mv;
        self.len += 1;
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len as usize]
    }

    /// Find the move landing on the given square, if any.
    pub fn find_dest(&self, dest: Square) -> Option<Move> {
        self.as_slice().iter().copied().find(|mv| mv.dest() == dest)
    }

    /// Return `true` if some move lands on the given square.
    pub fn contains_dest(&self, dest: Square) -> bool {
        self.find_dest(dest).is_some()
    }

    /// Return the destination squares in list order.
    pub fn dests(&self) -> impl Iterator<Item = Square> + '_ {
        self.as_slice().iter().map(|mv| mv.dest())
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Compute the legal moves for a piece by id.
///
/// Captured pieces have no moves.
pub fn legal_moves(board: &Board, id: PieceId) -> MoveList {
    let piece = board.piece(id);
    if piece.is_captured() {
        return MoveList::new();
    }
    legal_moves_from(board, piece.square(), piece.color(), piece.is_crowned())
}

/// Compute the legal moves for the piece on a square. Empty squares have no
/// moves.
pub fn legal_moves_at(board: &Board, sq: Square) -> MoveList {
    match board.piece_at(sq) {
        Some(id) => legal_moves(board, id),
        None => MoveList::new(),
    }
}

/// Compute legal moves from a square for a hypothetical piece of the given
/// color and crown status.
///
/// Directions are probed independently in a fixed order: forward-left,
/// forward-right, then (for crowned pieces) backward-left, backward-right.
pub fn legal_moves_from(
    board: &Board,
    source: Square,
    color: Color,
    can_move_backwards: bool,
) -> MoveList {
    let mut list = MoveList::new();
    let forward = color.forward();

    // On the far edge rank there is no forward square in either diagonal;
    // the probes are skipped outright.
    if source.rank() != color.crowning_rank() {
        probe_diagonal(board, source, color, -1, forward, &mut list);
        probe_diagonal(board, source, color, 1, forward, &mut list);
    }

    // The backward guard is derived from the piece's own rank, independently
    // of the forward guard: on the own back rank a backward step would leave
    // the board.
    if can_move_backwards && source.rank() != color.back_rank() {
        probe_diagonal(board, source, color, -1, -forward, &mut list);
        probe_diagonal(board, source, color, 1, -forward, &mut list);
    }

    list
}

/// Probe one diagonal: an empty adjacent square is a step; an adjacent
/// opposing piece with an empty square beyond it is a jump; anything else
/// yields nothing.
fn probe_diagonal(
    board: &Board,
    source: Square,
    color: Color,
    dx: i8,
    dy: i8,
    list: &mut MoveList,
) {
    let Some(adjacent) = source.offset(dx, dy) else {
        return;
    };

    match board.color_at(adjacent) {
        None => list.push(Move::new_step(source, adjacent)),
        Some(other) if other != color => {
            let Some(landing) = adjacent.offset(dx, dy) else {
                return;
            };
            if !board.is_occupied(landing) {
                list.push(Move::new_jump(source, landing));
            }
        }
        // Own piece blocks the diagonal.
        Some(_) => {}
    }
}
