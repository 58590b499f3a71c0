//! Integration tests for full grab→hover→drop transactions.
//!
//! Drives the session through the adapter contract and checks both the
//! resulting game state and the exact visual effects emitted.

use damka_core::{Board, Color, Square};
use damka_game::{Effect, Game, RecordingAdapter, Session};

/// White man on b3 facing a black man on c4 with an open landing on d5.
const JUMP_READY: &str = "8/8/8/8/2b5/1w6/8/8";

/// White man one step from the crowning rank.
const CROWNING_READY: &str = "8/1w6/8/8/8/8/8/8";

fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap()
}

/// Helper: a session over a diagram position with the given side to move.
fn session_from(diagram: &str, side: Color) -> Session<RecordingAdapter> {
    let board: Board = diagram.parse().unwrap();
    Session::with_game(Game::with_board(board, side), RecordingAdapter::new())
}

// ── Plain step transactions ───────────────────────────────────────────────────

#[test]
fn grab_highlights_both_step_destinations() {
    let mut session = Session::new(RecordingAdapter::new());
    session.piece_grabbed_at(sq("b3"));

    assert_eq!(
        session.adapter().effects(),
        &[Effect::Highlight(vec![sq("a4"), sq("c4")])]
    );
}

#[test]
fn full_step_transaction_moves_and_clears() {
    let mut session = Session::new(RecordingAdapter::new());
    session.piece_grabbed_at(sq("b3"));
    let piece = session.game().selection().unwrap().0;
    session.pointer_over(sq("c4"));
    session.piece_dropped();

    let effects = session.adapter().effects();
    assert_eq!(effects[1], Effect::ShowPieceAt(piece, sq("c4")));
    assert_eq!(effects[2], Effect::ClearHighlights);

    assert_eq!(session.game().turn().number(), 1);
    assert_eq!(session.game().turn().side(), Color::Black);
    assert_eq!(session.game().board().piece_at(sq("c4")), Some(piece));
    session.game().board().validate().unwrap();
}

#[test]
fn illegal_drop_snaps_back_and_keeps_the_turn() {
    let mut session = Session::new(RecordingAdapter::new());
    session.piece_grabbed_at(sq("b3"));
    let piece = session.game().selection().unwrap().0;
    session.pointer_over(sq("f6"));
    session.piece_dropped();

    let effects = session.adapter().effects();
    assert_eq!(effects[1], Effect::ShowPieceAt(piece, sq("b3")));
    assert_eq!(effects[2], Effect::ClearHighlights);

    assert_eq!(session.game().turn().number(), 0);
    assert_eq!(session.game().turn().side(), Color::White);
    assert_eq!(session.game().board().piece_at(sq("b3")), Some(piece));
}

// ── Captures and crowning ─────────────────────────────────────────────────────

#[test]
fn capture_transaction_removes_the_victim_visual() {
    let mut session = session_from(JUMP_READY, Color::White);
    let victim = session.game().board().piece_at(sq("c4")).unwrap();

    session.piece_grabbed_at(sq("b3"));
    let piece = session.game().selection().unwrap().0;
    session.pointer_over(sq("d5"));
    session.piece_dropped();

    let effects = session.adapter().effects();
    assert!(matches!(effects[0], Effect::Highlight(_)));
    assert_eq!(effects[1], Effect::ShowPieceAt(piece, sq("d5")));
    assert_eq!(effects[2], Effect::RemovePiece(victim));
    assert_eq!(effects[3], Effect::ClearHighlights);

    assert!(session.game().board().piece(victim).is_captured());
    assert_eq!(session.game().board().count(Color::Black), 0);
    session.game().board().validate().unwrap();
}

#[test]
fn crowning_transaction_marks_the_piece() {
    let mut session = session_from(CROWNING_READY, Color::White);
    session.piece_grabbed_at(sq("b7"));
    let piece = session.game().selection().unwrap().0;
    session.pointer_over(sq("c8"));
    session.piece_dropped();

    let effects = session.adapter().effects();
    assert_eq!(effects[1], Effect::ShowPieceAt(piece, sq("c8")));
    assert_eq!(effects[2], Effect::MarkCrowned(piece));
    assert!(session.game().board().piece(piece).is_crowned());
}

#[test]
fn recrossing_the_back_rank_does_not_recrown() {
    let mut session = session_from("8/1W6/8/8/8/8/8/8", Color::White);
    session.piece_grabbed_at(sq("b7"));
    session.pointer_over(sq("a8"));
    session.piece_dropped();

    let crowns = session
        .adapter()
        .effects()
        .iter()
        .filter(|e| matches!(e, Effect::MarkCrowned(_)))
        .count();
    assert_eq!(crowns, 0, "already-crowned piece must not be re-marked");
}

// ── Input ordering and rejected selections ────────────────────────────────────

#[test]
fn wrong_color_grab_emits_nothing() {
    let mut session = Session::new(RecordingAdapter::new());
    session.piece_grabbed_at(sq("b7"));

    assert!(session.adapter().effects().is_empty());
    assert!(session.game().selection().is_none());
    assert_eq!(session.game().turn().side(), Color::White);
}

#[test]
fn stray_drop_is_swallowed() {
    let mut session = Session::new(RecordingAdapter::new());
    session.piece_dropped();
    session.piece_dropped();

    assert!(session.adapter().effects().is_empty());
    assert_eq!(session.game().turn().number(), 0);
}

#[test]
fn legality_is_fixed_at_grab_time() {
    // The legal set computed at grab time is what the drop validates
    // against; hovering elsewhere first changes nothing.
    let mut session = session_from(JUMP_READY, Color::White);
    session.piece_grabbed_at(sq("b3"));
    session.pointer_over(sq("h8"));
    session.pointer_over(sq("g1"));
    session.pointer_over(sq("d5"));
    session.piece_dropped();

    assert_eq!(session.game().turn().number(), 1);
    assert_eq!(session.game().board().count(Color::Black), 0);
}

#[test]
fn two_full_turns_alternate_players() {
    let mut session = Session::new(RecordingAdapter::new());

    session.piece_grabbed_at(sq("b3"));
    session.pointer_over(sq("c4"));
    session.piece_dropped();
    assert_eq!(session.game().turn().side(), Color::Black);

    session.piece_grabbed_at(sq("c6"));
    session.pointer_over(sq("b5"));
    session.piece_dropped();
    assert_eq!(session.game().turn().side(), Color::White);
    assert_eq!(session.game().turn().number(), 2);
    session.game().board().validate().unwrap();
}

#[test]
fn stale_piece_id_after_restart_is_ignored() {
    // The UI may still hold an id from the previous game after a restart;
    // replaying it must be swallowed like any other invalid grab.
    let mut session = Session::new(RecordingAdapter::new());
    let stale = session.game().board().piece_at(sq("g8")).unwrap();

    let board: Board = CROWNING_READY.parse().unwrap();
    session.restart(Game::with_board(board, Color::White));
    session.piece_grabbed(stale);

    assert_eq!(session.adapter().effects(), &[Effect::ClearHighlights]);
    assert!(session.game().selection().is_none());
    assert_eq!(session.game().turn().number(), 0);
}

#[test]
fn restart_clears_highlights_and_selection() {
    let mut session = Session::new(RecordingAdapter::new());
    session.piece_grabbed_at(sq("b3"));
    session.restart(Game::new());

    assert!(session.game().selection().is_none());
    assert_eq!(
        session.adapter().effects().last(),
        Some(&Effect::ClearHighlights)
    );
    session.piece_grabbed_at(sq("d3"));
    assert!(session.game().selection().is_some());
}
