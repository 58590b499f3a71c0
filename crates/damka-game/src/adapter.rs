//! The visual-adapter contract the core drives.
//!
//! The core never reads from the adapter; the board data model stays the
//! single source of truth and the adapter only mirrors it.

use damka_core::{PieceId, Square};

/// Visual effects the core requests from its rendering layer.
pub trait UiAdapter {
    /// Highlight the given squares as legal destinations.
    fn highlight_squares(&mut self, squares: &[Square]);

    /// Clear all destination highlights.
    fn clear_highlights(&mut self);

    /// Show a piece on the given square (moved there, or snapped back).
    fn show_piece_at(&mut self, piece: PieceId, square: Square);

    /// Remove a captured piece's visual.
    fn remove_piece(&mut self, piece: PieceId);

    /// Mark a piece's visual as crowned.
    fn mark_crowned(&mut self, piece: PieceId);
}

/// Adapter that ignores every effect. Useful for headless games.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAdapter;

impl UiAdapter for NullAdapter {
    fn highlight_squares(&mut self, _squares: &[Square]) {}
    fn clear_highlights(&mut self) {}
    fn show_piece_at(&mut self, _piece: PieceId, _square: Square) {}
    fn remove_piece(&mut self, _piece: PieceId) {}
    fn mark_crowned(&mut self, _piece: PieceId) {}
}

/// A single recorded visual effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Highlight(Vec<Square>),
    ClearHighlights,
    ShowPieceAt(PieceId, Square),
    RemovePiece(PieceId),
    MarkCrowned(PieceId),
}

/// Adapter that records every effect in order. Test support.
#[derive(Debug, Default, Clone)]
pub struct RecordingAdapter {
    effects: Vec<Effect>,
}

impl RecordingAdapter {
    /// Create an empty recorder.
    pub fn new() -> RecordingAdapter {
        RecordingAdapter::default()
    }

    /// Return the recorded effects in order.
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.effects.clear();
    }
}

impl UiAdapter for RecordingAdapter {
    fn highlight_squares(&mut self, squares: &[Square]) {
        self.effects.push(Effect::Highlight(squares.to_vec()));
    }

    fn clear_highlights(&mut self) {
        self.effects.push(Effect::ClearHighlights);
    }

    fn show_piece_at(&mut self, piece: PieceId, square: Square) {
        self.effects.push(Effect::ShowPieceAt(piece, square));
    }

    fn remove_piece(&mut self, piece: PieceId) {
        self.effects.push(Effect::RemovePiece(piece));
    }

    fn mark_crowned(&mut self, piece: PieceId) {
        self.effects.push(Effect::MarkCrowned(piece));
    }
}
