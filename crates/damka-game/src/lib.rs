//! Turn state machine and UI-adapter plumbing for damka.

pub mod adapter;
pub mod error;
pub mod game;
pub mod session;

pub use adapter::{Effect, NullAdapter, RecordingAdapter, UiAdapter};
pub use error::GameError;
pub use game::{AppliedMove, Game, MoveResolution, Player, Turn};
pub use session::Session;
