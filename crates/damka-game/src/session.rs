//! One drag-and-drop transaction at a time over a running game.
//!
//! The session translates raw pointer events (grab, hover, release) into
//! state machine calls and drives the adapter's visuals. Everything is
//! synchronous; a grab-to-release pair is one atomic logical transaction.

use tracing::debug;

use damka_core::{PieceId, Square};

use crate::adapter::UiAdapter;
use crate::game::{Game, MoveResolution};

/// A game plus the transient pointer state of the current selection.
#[derive(Debug)]
pub struct Session<A: UiAdapter> {
    game: Game,
    adapter: A,
    hover: Option<Square>,
}

impl<A: UiAdapter> Session<A> {
    /// Start a session on a fresh game.
    pub fn new(adapter: A) -> Session<A> {
        Session::with_game(Game::new(), adapter)
    }

    /// Start a session on an existing game.
    pub fn with_game(game: Game, adapter: A) -> Session<A> {
        Session {
            game,
            adapter,
            hover: None,
        }
    }

    /// Return the game state.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Return the adapter.
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Replace the game, dropping any active selection.
    pub fn restart(&mut self, game: Game) {
        self.game = game;
        self.hover = None;
        self.adapter.clear_highlights();
    }

    /// A piece was picked up. Invalid selections (wrong color, captured
    /// piece, stray second grab) are logged and ignored.
    pub fn piece_grabbed(&mut self, piece: PieceId) {
        match self.game.begin_selection(piece) {
            Ok(legal) => {
                let dests: Vec<Square> = legal.dests().collect();
                self.adapter.highlight_squares(&dests);
            }
            Err(err) => {
                debug!(%piece, %err, "grab ignored");
            }
        }
    }

    /// A piece was picked up by its square. Grabbing an empty square is
    /// ignored.
    pub fn piece_grabbed_at(&mut self, square: Square) {
        match self.game.board().piece_at(square) {
            Some(piece) => self.piece_grabbed(piece),
            None => debug!(%square, "grab on empty square ignored"),
        }
    }

    /// The pointer moved over a cell during a drag.
    pub fn pointer_over(&mut self, square: Square) {
        self.hover = Some(square);
    }

    /// The piece was released.
    ///
    /// Without an active selection this is a no-op (stray drop events are
    /// part of normal pointer traffic). Without a hovered cell, or with one
    /// outside the legal set, the selection cancels and the piece snaps back.
    pub fn piece_dropped(&mut self) {
        let Some((piece, _)) = self.game.selection() else {
            debug!("drop without selection ignored");
            return;
        };
        let origin = self.game.board().piece(piece).square();

        let resolution = match self.hover.take() {
            Some(dest) => self.game.attempt_move(dest),
            None => {
                self.game.cancel_selection();
                Ok(MoveResolution::Cancelled)
            }
        };

        match resolution {
            Ok(MoveResolution::Applied(applied)) => {
                self.adapter.show_piece_at(applied.piece, applied.mv.dest());
                if let Some(captured) = applied.captured {
                    self.adapter.remove_piece(captured);
                }
                if applied.crowned {
                    self.adapter.mark_crowned(applied.piece);
                }
            }
            Ok(MoveResolution::Cancelled) => {
                self.adapter.show_piece_at(piece, origin);
            }
            Err(err) => {
                // Selection was checked above, so only board-level refusals
                // land here; the piece snaps back like any cancellation.
                debug!(%err, "drop failed");
                self.adapter.show_piece_at(piece, origin);
            }
        }

        self.adapter.clear_highlights();
    }
}
