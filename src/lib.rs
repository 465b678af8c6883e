//! Brick Pong - A Pong/Breakout arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, game state)
//! - `audio`: Audio sink contract and event dispatch
//! - `renderer`: Render snapshot and renderer contract
//! - `frame_loop`: Single-threaded frame loop wiring the collaborators together
//! - `settings`: Overridable configuration

pub mod audio;
pub mod frame_loop;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use frame_loop::FrameLoop;
pub use settings::Settings;

/// Game configuration constants (defaults for [`Settings`])
pub mod consts {
    /// Screen dimensions
    pub const SCREEN_WIDTH: i32 = 1024;
    pub const SCREEN_HEIGHT: i32 = 768;

    /// Ball defaults
    pub const BALL_WIDTH: i32 = 20;
    pub const BALL_HEIGHT: i32 = 20;
    pub const BALL_VELOCITY_DELTA: i32 = 5;

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 200;
    pub const PADDLE_HEIGHT: i32 = 30;
    pub const PADDLE_VELOCITY_DELTA: i32 = 5;

    /// Tile grid
    pub const TILE_ROWS: usize = 10;
    pub const TILE_COLS: usize = 8;
    pub const TILE_HEIGHT: i32 = 20;

    /// Level loaded on startup and on restart
    pub const START_LEVEL: u32 = 1;
}
