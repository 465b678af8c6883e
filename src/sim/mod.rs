//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One integer step per frame, no delta time
//! - Seeded RNG only
//! - Row-major tile iteration
//! - No audio, rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;
pub mod tiles;

pub use collision::{
    WallResult, ball_hits_paddle, correct_paddle_bounds, resolve_ball_paddle, resolve_ball_tiles,
    resolve_ball_walls,
};
pub use rect::{Rect, intersects};
pub use state::{Ball, GameEvent, GamePhase, GameState, MusicCue, Paddle, SoundKind, Track};
pub use tick::{
    Action, Axis, FrameOutcome, InputEvent, Key, actions_for, apply_action, handle_event,
    perform_game_logic,
};
pub use tiles::{Tile, TileMap};
