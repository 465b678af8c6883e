//! Game state and core simulation types

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::tiles::{self, TileMap};
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// Simulation frozen, entered and left with the pause toggle
    Paused,
    /// Ball fell through the bottom edge; only a restart leaves this phase
    GameOver,
}

/// Sound effects the simulation can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundKind {
    /// Ball hits a side or top wall
    Bounce,
    /// Ball hits the paddle
    Knock,
    /// Ball falls through the bottom edge
    Dead,
}

/// Music tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Track {
    #[default]
    MainTheme,
}

/// Something observable that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Sound(SoundKind),
    TileBroken { row: usize, col: usize },
    GameOver,
}

/// What the music player should be doing after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MusicCue {
    Play(Track),
    Stop,
}

/// The ball
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub width: i32,
    pub height: i32,
    pub pos: IVec2,
    pub vel: IVec2,
    /// Speed magnitude assigned to an axis after a bounce
    pub velocity_delta: i32,
}

impl Ball {
    /// Ball centered horizontally at three quarters of the screen height
    pub fn new(settings: &Settings, heading_left: bool) -> Self {
        let delta = settings.ball_velocity_delta;
        Self {
            width: settings.ball_width,
            height: settings.ball_height,
            pos: IVec2::new(settings.screen_width / 2, settings.screen_height * 3 / 4),
            vel: IVec2::new(if heading_left { -delta } else { delta }, -delta),
            velocity_delta: delta,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos(self.pos, self.width, self.height)
    }

    /// Advance one frame at constant velocity
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    pub width: i32,
    pub height: i32,
    pub pos: IVec2,
    pub vel: IVec2,
    /// Whether the paddle takes part in the game at all
    pub exists: bool,
    /// Velocity change per key press/release, also the boundary nudge distance
    pub velocity_delta: i32,
}

impl Paddle {
    /// Stationary paddle at seven eighths of the screen height
    pub fn new(settings: &Settings) -> Self {
        Self {
            width: settings.paddle_width,
            height: settings.paddle_height,
            pos: IVec2::new(settings.screen_width / 2, settings.screen_height * 7 / 8),
            vel: IVec2::ZERO,
            exists: true,
            velocity_delta: settings.paddle_velocity_delta,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos(self.pos, self.width, self.height)
    }

    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }
}

/// Complete game state, owned by the frame loop
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    pub paddle: Paddle,
    pub ball: Ball,
    pub tile_map: TileMap,
    pub phase: GamePhase,
    /// Set once the player asked to quit; the frame loop stops
    pub quit: bool,
    /// Whether music should be playing
    pub music: bool,
    /// Level the tile map was built from
    pub level: u32,
    /// Simulated frames since the last reset
    pub frame: u64,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game at the configured level
    pub fn new(settings: Settings, seed: u64) -> Self {
        let level = settings.level;
        let mut state = Self {
            paddle: Paddle::new(&settings),
            ball: Ball::new(&settings, false),
            tile_map: TileMap::new(0, 0, 0, 0),
            phase: GamePhase::Playing,
            quit: false,
            music: true,
            level,
            frame: 0,
            rng: Pcg32::seed_from_u64(seed),
            settings,
        };
        state.reset(level);
        state
    }

    /// Start the given level from scratch
    ///
    /// Replaces the tile map as a whole, puts ball and paddle back at their
    /// starting positions and returns to `Playing` with music on.
    pub fn reset(&mut self, level: u32) {
        let s = &self.settings;
        let tile_map = match tiles::layout(
            level,
            s.tile_rows,
            s.tile_cols,
            s.tile_width(),
            s.tile_height,
        ) {
            Some(map) => {
                self.level = level;
                map
            }
            None => {
                log::warn!("Unknown level {}, loading level 1", level);
                self.level = 1;
                TileMap::new(s.tile_rows, s.tile_cols, s.tile_width(), s.tile_height)
            }
        };

        let heading_left = self.rng.random_bool(0.5);
        self.tile_map = tile_map;
        self.paddle = Paddle::new(&self.settings);
        self.ball = Ball::new(&self.settings, heading_left);
        self.phase = GamePhase::Playing;
        self.quit = false;
        self.music = true;
        self.frame = 0;

        log::info!(
            "Level {} loaded: {}x{} tiles of {}x{}",
            self.level,
            self.tile_map.rows(),
            self.tile_map.cols(),
            self.tile_map.tile_width(),
            self.tile_map.tile_height()
        );
    }

    pub fn gameover(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    /// Tiles broken so far this level
    pub fn score(&self) -> usize {
        self.tile_map.broken_count()
    }

    /// Music cue matching the current music flag
    pub fn music_cue(&self) -> MusicCue {
        if self.music {
            MusicCue::Play(Track::MainTheme)
        } else {
            MusicCue::Stop
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_matches_reset_contract() {
        let state = GameState::new(Settings::default(), 7);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(!state.gameover());
        assert!(!state.paused());
        assert!(state.music);
        assert!(!state.quit);
        assert_eq!(state.paddle.pos, IVec2::new(512, 672));
        assert_eq!(state.ball.pos, IVec2::new(512, 576));
        assert_eq!(state.ball.vel.x.abs(), 5);
        assert_eq!(state.ball.vel.y, -5);
        assert_eq!(state.paddle.vel, IVec2::ZERO);
        assert!(state.paddle.exists);
        assert_eq!(state.tile_map.remaining(), 80);
    }

    #[test]
    fn test_reset_replaces_tile_map_and_flags() {
        let mut state = GameState::new(Settings::default(), 1);
        state.tile_map.break_tile(0, 0);
        state.phase = GamePhase::GameOver;
        state.music = false;
        state.quit = true;
        state.ball.pos = IVec2::new(3, 3);

        state.reset(1);
        assert_eq!(state.tile_map.broken_count(), 0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.music);
        assert!(!state.quit);
        assert_eq!(state.ball.pos, IVec2::new(512, 576));
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let mut state = GameState::new(Settings::default(), 1);
        state.reset(42);
        assert_eq!(state.level, 1);
        assert_eq!(state.tile_map.len(), 80);
    }

    #[test]
    fn test_seed_determines_serve_direction() {
        let a = GameState::new(Settings::default(), 99);
        let b = GameState::new(Settings::default(), 99);
        assert_eq!(a.ball.vel, b.ball.vel);
    }

    #[test]
    fn test_music_cue_follows_flag() {
        let mut state = GameState::new(Settings::default(), 1);
        assert_eq!(state.music_cue(), MusicCue::Play(Track::MainTheme));
        state.music = false;
        assert_eq!(state.music_cue(), MusicCue::Stop);
    }
}
