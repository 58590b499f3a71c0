//! The turn and selection state machine.

use tracing::debug;

use damka_core::{legal_moves, Board, Color, Move, MoveList, PieceId, Square};

use crate::error::GameError;

/// One of the two static players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    /// Player id: 0 or 1.
    pub id: u8,
    /// The color this player moves.
    pub color: Color,
}

/// Turn counter and side to move.
///
/// The number increments by exactly one per applied move and never on a
/// cancelled one; the side strictly alternates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    number: u32,
    side: Color,
}

impl Turn {
    /// Return the zero-based turn number.
    #[inline]
    pub const fn number(self) -> u32 {
        self.number
    }

    /// Return the side to move.
    #[inline]
    pub const fn side(self) -> Color {
        self.side
    }

    /// Advance to the next turn: count up, hand over to the other player.
    fn advance(&mut self) {
        self.number += 1;
        self.side = self.side.flip();
    }
}

/// The selection phase of the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    /// Waiting for the current player to pick a piece up.
    AwaitingSelection,
    /// A piece is in hand, with its legal set computed once at pick-up.
    MoveInProgress { piece: PieceId, legal: MoveList },
}

/// A fully applied move, reported back to the caller for visual bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    /// The piece that moved.
    pub piece: PieceId,
    /// The move that was applied.
    pub mv: Move,
    /// The opposing piece removed by a jump, if any.
    pub captured: Option<PieceId>,
    /// Whether the mover was crowned.
    pub crowned: bool,
}

/// How a drop resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResolution {
    /// The destination was legal; the move went through and the turn advanced.
    Applied(AppliedMove),
    /// The destination was not in the legal set; the piece stays where it
    /// was and the turn does not advance.
    Cancelled,
}

/// A running two-player game: board, turn, and the active selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Turn,
    phase: Phase,
}

impl Game {
    /// The two players. White is player 0 and moves first.
    pub const PLAYERS: [Player; 2] = [
        Player {
            id: 0,
            color: Color::White,
        },
        Player {
            id: 1,
            color: Color::Black,
        },
    ];

    /// Start a new game from the standard starting position.
    pub fn new() -> Game {
        Game::with_board(Board::starting_position(), Color::White)
    }

    /// Start a game from an arbitrary position with the given side to move.
    pub fn with_board(board: Board, side: Color) -> Game {
        Game {
            board,
            turn: Turn { number: 0, side },
            phase: Phase::AwaitingSelection,
        }
    }

    /// Return the board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the current turn.
    #[inline]
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Return the player whose turn it is.
    pub fn current_player(&self) -> Player {
        Game::PLAYERS[self.turn.side.index()]
    }

    /// Return the active selection, if a piece is in hand.
    pub fn selection(&self) -> Option<(PieceId, &MoveList)> {
        match &self.phase {
            Phase::MoveInProgress { piece, legal } => Some((*piece, legal)),
            Phase::AwaitingSelection => None,
        }
    }

    /// Pick a piece up: validate ownership, compute its legal set once, and
    /// enter `MoveInProgress`.
    ///
    /// A piece with no legal moves may still be selected; any drop will then
    /// resolve as a cancellation, matching the drag-and-drop feel.
    pub fn begin_selection(&mut self, piece: PieceId) -> Result<&MoveList, GameError> {
        if matches!(self.phase, Phase::MoveInProgress { .. }) {
            return Err(GameError::SelectionInProgress);
        }

        let record = self
            .board
            .try_piece(piece)
            .ok_or(GameError::UnknownPiece { piece })?;
        if record.is_captured() {
            return Err(GameError::PieceCaptured { piece });
        }
        if record.color() != self.turn.side {
            return Err(GameError::WrongColor {
                piece: record.color(),
                turn: self.turn.side,
            });
        }

        let legal = legal_moves(&self.board, piece);
        debug!(%piece, moves = legal.len(), "selection begun");
        self.phase = Phase::MoveInProgress { piece, legal };

        match &self.phase {
            Phase::MoveInProgress { legal, .. } => Ok(legal),
            Phase::AwaitingSelection => unreachable!("phase was just set"),
        }
    }

    /// Drop the held piece on a destination square.
    ///
    /// A destination outside the set computed at pick-up cancels the move;
    /// a legal one relocates the piece, resolves its capture and crowning,
    /// and advances the turn.
    pub fn attempt_move(&mut self, dest: Square) -> Result<MoveResolution, GameError> {
        let Phase::MoveInProgress { piece, legal } =
            std::mem::replace(&mut self.phase, Phase::AwaitingSelection)
        else {
            return Err(GameError::NoSelection);
        };

        let Some(mv) = legal.find_dest(dest) else {
            debug!(%piece, %dest, "illegal destination, move cancelled");
            return Ok(MoveResolution::Cancelled);
        };

        let outcome = self.board.apply(mv)?;
        self.turn.advance();
        debug!(
            %piece,
            %mv,
            turn = self.turn.number,
            side = %self.turn.side,
            "move applied, turn advanced"
        );

        Ok(MoveResolution::Applied(AppliedMove {
            piece,
            mv,
            captured: outcome.captured,
            crowned: outcome.crowned,
        }))
    }

    /// Put the held piece back down: discard the legal set, change nothing
    /// else.
    pub fn cancel_selection(&mut self) {
        self.phase = Phase::AwaitingSelection;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
