//! The checkers board: cell grid, piece arena, and move application.

use std::fmt;

use tracing::trace;

use crate::color::Color;
use crate::error::BoardError;
use crate::moves::Move;
use crate::piece::{Piece, PieceId};
use crate::square::{Shade, Square};

/// What happened when a move was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The piece removed by a jump, if the move was one.
    pub captured: Option<PieceId>,
    /// Whether the mover was crowned by this move.
    pub crowned: bool,
}

/// Complete board state.
///
/// Cells reference pieces by id and pieces record their square; the cyclic
/// cell↔piece relationship is kept consistent by updating both sides inside
/// a single mutation, never from the outside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Occupant of each square, indexed by [`Square::index()`].
    cells: [Option<PieceId>; Square::COUNT],
    /// Piece arena. Captured pieces stay in place with their flag set, so
    /// ids remain stable for the whole game.
    pieces: Vec<Piece>,
}

impl Board {
    /// Return an empty board.
    pub fn empty() -> Board {
        Board {
            cells: [None; Square::COUNT],
            pieces: Vec::new(),
        }
    }

    /// Return the standard starting position: 12 men per side on the Dark
    /// squares of the three ranks nearest each player.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for sq in Square::all() {
            if sq.shade() != Shade::Dark {
                continue;
            }
            let y = sq.y();
            if y < 3 {
                board.place(Piece::new(Color::White, sq));
            } else if y > 4 {
                board.place(Piece::new(Color::Black, sq));
            }
        }
        board
    }

    /// Add a piece to the arena and its cell. Used by setup and diagram
    /// parsing; silently overwrites nothing (the caller guarantees an empty
    /// cell).
    pub(crate) fn place(&mut self, piece: Piece) -> PieceId {
        debug_assert!(self.cells[piece.square().index()].is_none());
        let id = PieceId(self.pieces.len() as u8);
        self.cells[piece.square().index()] = Some(id);
        self.pieces.push(piece);
        id
    }

    /// Return the piece occupying the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<PieceId> {
        self.cells[sq.index()]
    }

    /// Return the piece record for an id.
    ///
    /// # Panics
    ///
    /// Panics if the id was not issued by this board.
    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    /// Return the piece record for an id, or `None` when the id was not
    /// issued by this board. Ids can outlive the board they came from (a UI
    /// may replay one after a restart), so lookups from the outside go
    /// through here.
    #[inline]
    pub fn try_piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_some()
    }

    /// Return the color of the piece on the given square, if any.
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|id| self.piece(id).color())
    }

    /// Iterate over all pieces still on the board.
    pub fn alive_pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces
            .iter()
            .enumerate()
            .filter(|(_, piece)| !piece.is_captured())
            .map(|(i, piece)| (PieceId(i as u8), piece))
    }

    /// Count the pieces of one color still on the board.
    pub fn count(&self, color: Color) -> usize {
        self.alive_pieces()
            .filter(|(_, piece)| piece.color() == color)
            .count()
    }

    /// Apply a move: relocate the mover, resolve the capture on a jump, and
    /// crown the mover when it reaches the far back rank.
    ///
    /// The move is trusted to come from the legality engine; structurally
    /// impossible moves are rejected with an error and leave the board
    /// untouched.
    pub fn apply(&mut self, mv: Move) -> Result<MoveOutcome, BoardError> {
        let src = mv.source();
        let dest = mv.dest();

        let id = self
            .piece_at(src)
            .ok_or(BoardError::SourceEmpty { square: src })?;
        if self.is_occupied(dest) {
            return Err(BoardError::DestinationOccupied { square: dest });
        }

        // Resolve the jumped piece up front so a bad jump leaves no trace.
        let victim = match mv.jumped_square() {
            Some(mid) => Some(
                self.piece_at(mid)
                    .ok_or(BoardError::NothingToJump { square: mid })?,
            ),
            None => None,
        };

        self.relocate(id, src, dest);

        if let Some(victim) = victim {
            self.capture(victim)?;
        }

        let piece = &self.pieces[id.index()];
        let crowned = !piece.is_crowned() && dest.rank() == piece.color().crowning_rank();
        if crowned {
            self.pieces[id.index()].crown();
        }

        trace!(%mv, captured = ?victim, crowned, "move applied");

        Ok(MoveOutcome {
            captured: victim,
            crowned,
        })
    }

    /// Move a piece between cells, updating the cell array and the piece's
    /// back-reference together.
    fn relocate(&mut self, id: PieceId, src: Square, dest: Square) {
        self.cells[src.index()] = None;
        self.cells[dest.index()] = Some(id);
        self.pieces[id.index()].set_square(dest);
    }

    /// Remove a piece from the board: detach it from its cell and flag it
    /// captured. Capturing an already-captured piece is a caller error.
    pub fn capture(&mut self, id: PieceId) -> Result<(), BoardError> {
        let piece = &self.pieces[id.index()];
        if piece.is_captured() {
            return Err(BoardError::PieceAlreadyCaptured { piece: id });
        }
        let square = piece.square();
        self.cells[square.index()] = None;
        self.pieces[id.index()].set_captured();
        Ok(())
    }

    /// Validate the structural integrity of the board.
    ///
    /// Checks the occupancy invariant (every alive piece's square points back
    /// at it, every occupied cell points at an alive piece on that square)
    /// and that play stays on the Dark squares.
    pub fn validate(&self) -> Result<(), BoardError> {
        for (id, piece) in self.alive_pieces() {
            let square = piece.square();
            if square.shade() != Shade::Dark {
                return Err(BoardError::PieceOnLightSquare { piece: id, square });
            }
            if self.cells[square.index()] != Some(id) {
                return Err(BoardError::OccupancyDesync { piece: id, square });
            }
        }

        for sq in Square::all() {
            if let Some(id) = self.cells[sq.index()] {
                let piece = &self.pieces[id.index()];
                if piece.is_captured() {
                    return Err(BoardError::CellReferencesCapturedPiece {
                        square: sq,
                        piece: id,
                    });
                }
                if piece.square() != sq {
                    return Err(BoardError::OccupancyDesync {
                        piece: id,
                        square: sq,
                    });
                }
            }
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for y in (0i8..8).rev() {
            write!(f, "{}  ", y + 1)?;
            for x in 0i8..8 {
                let sq = Square::from_index_unchecked((y * 8 + x) as u8);
                let c = match board.piece_at(sq) {
                    Some(id) => board.piece(id).diagram_char(),
                    None => '.',
                };
                if x < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::color::Color;
    use crate::error::BoardError;
    use crate::moves::Move;
    use crate::square::{Shade, Square};

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn starting_position_validates() {
        let board = Board::starting_position();
        board.validate().unwrap();
    }

    #[test]
    fn starting_position_counts() {
        let board = Board::starting_position();
        assert_eq!(board.count(Color::White), 12);
        assert_eq!(board.count(Color::Black), 12);
        assert_eq!(board.alive_pieces().count(), 24);
    }

    #[test]
    fn starting_position_layout() {
        let board = Board::starting_position();
        assert_eq!(board.color_at(sq("b1")), Some(Color::White));
        assert_eq!(board.color_at(sq("a2")), Some(Color::White));
        assert_eq!(board.color_at(sq("b3")), Some(Color::White));
        assert_eq!(board.color_at(sq("a8")), Some(Color::Black));
        assert_eq!(board.color_at(sq("b7")), Some(Color::Black));
        assert_eq!(board.color_at(sq("a6")), Some(Color::Black));
        assert!(!board.is_occupied(sq("b5")));
        assert!(!board.is_occupied(sq("a4")));
        for (_, piece) in board.alive_pieces() {
            assert_eq!(piece.square().shade(), Shade::Dark);
            assert!(!piece.is_crowned());
        }
    }

    #[test]
    fn try_piece_rejects_foreign_ids() {
        use crate::piece::PieceId;

        let board: Board = "8/8/8/8/8/1w6/8/8".parse().unwrap();
        let id = board.piece_at(sq("b3")).unwrap();
        assert!(board.try_piece(id).is_some());
        assert!(board.try_piece(PieceId(1)).is_none());
        assert!(board.try_piece(PieceId(42)).is_none());
    }

    #[test]
    fn piece_back_reference_agrees() {
        let board = Board::starting_position();
        for (id, piece) in board.alive_pieces() {
            assert_eq!(board.piece_at(piece.square()), Some(id));
        }
    }

    #[test]
    fn apply_step_relocates() {
        let mut board = Board::starting_position();
        let id = board.piece_at(sq("b3")).unwrap();
        let outcome = board.apply(Move::new_step(sq("b3"), sq("c4"))).unwrap();

        assert_eq!(outcome.captured, None);
        assert!(!outcome.crowned);
        assert!(!board.is_occupied(sq("b3")));
        assert_eq!(board.piece_at(sq("c4")), Some(id));
        assert_eq!(board.piece(id).square(), sq("c4"));
        board.validate().unwrap();
    }

    #[test]
    fn apply_jump_captures_exactly_one() {
        // White man on b3, black man on c4, d5 empty.
        let mut board: Board = "8/8/8/8/2b5/1w6/8/8".parse().unwrap();
        let victim = board.piece_at(sq("c4")).unwrap();
        let outcome = board.apply(Move::new_jump(sq("b3"), sq("d5"))).unwrap();

        assert_eq!(outcome.captured, Some(victim));
        assert!(board.piece(victim).is_captured());
        assert!(!board.is_occupied(sq("c4")));
        assert_eq!(board.count(Color::Black), 0);
        assert_eq!(board.count(Color::White), 1);
        assert_eq!(board.piece(board.piece_at(sq("d5")).unwrap()).square(), sq("d5"));
        board.validate().unwrap();
    }

    #[test]
    fn apply_crowns_on_far_rank() {
        // White man on b7 about to reach rank 8.
        let mut board: Board = "8/1w6/8/8/8/8/8/8".parse().unwrap();
        let id = board.piece_at(sq("b7")).unwrap();
        let outcome = board.apply(Move::new_step(sq("b7"), sq("c8"))).unwrap();

        assert!(outcome.crowned);
        assert!(board.piece(id).is_crowned());
        board.validate().unwrap();
    }

    #[test]
    fn crowning_is_not_repeated() {
        // Already-crowned white piece stepping back onto rank 8.
        let mut board: Board = "8/1W6/8/8/8/8/8/8".parse().unwrap();
        let outcome = board.apply(Move::new_step(sq("b7"), sq("a8"))).unwrap();
        assert!(!outcome.crowned);
        assert!(board.piece(board.piece_at(sq("a8")).unwrap()).is_crowned());
    }

    #[test]
    fn apply_empty_source_fails() {
        let mut board = Board::starting_position();
        let err = board.apply(Move::new_step(sq("c4"), sq("d5"))).unwrap_err();
        assert_eq!(err, BoardError::SourceEmpty { square: sq("c4") });
    }

    #[test]
    fn apply_occupied_destination_fails() {
        let mut board = Board::starting_position();
        let err = board.apply(Move::new_step(sq("b1"), sq("a2"))).unwrap_err();
        assert_eq!(err, BoardError::DestinationOccupied { square: sq("a2") });
    }

    #[test]
    fn apply_jump_over_nothing_fails() {
        let mut board: Board = "8/8/8/8/8/1w6/8/8".parse().unwrap();
        let err = board.apply(Move::new_jump(sq("b3"), sq("d5"))).unwrap_err();
        assert_eq!(err, BoardError::NothingToJump { square: sq("c4") });
        // Failed moves leave the board untouched.
        assert!(board.is_occupied(sq("b3")));
        board.validate().unwrap();
    }

    #[test]
    fn double_capture_is_an_error() {
        let mut board: Board = "8/8/8/8/2b5/8/8/8".parse().unwrap();
        let victim = board.piece_at(sq("c4")).unwrap();
        board.capture(victim).unwrap();
        let err = board.capture(victim).unwrap_err();
        assert_eq!(err, BoardError::PieceAlreadyCaptured { piece: victim });
    }

    #[test]
    fn pretty_print() {
        let board = Board::starting_position();
        let output = format!("{}", board.pretty());
        assert!(output.contains("b . b . b . b"));
        assert!(output.contains(". w . w . w . w"));
        assert!(output.contains("a b c d e f g h"));
    }
}
