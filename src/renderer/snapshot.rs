//! Immutable per-frame view of the game for renderers

use serde::Serialize;

use crate::sim::{GamePhase, GameState, Rect};

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const PADDLE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BALL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const TILE_EVEN: [f32; 4] = [0.38, 0.52, 0.97, 1.0];
    pub const TILE_ODD: [f32; 4] = [0.25, 0.36, 0.8, 1.0];
}

/// A filled rectangle to draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sprite {
    pub rect: Rect,
    pub color: [f32; 4],
}

/// An unbroken tile with its grid position
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TileSprite {
    pub row: usize,
    pub col: usize,
    pub sprite: Sprite,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub screen_width: i32,
    pub screen_height: i32,
    pub background: [f32; 4],
    /// Absent when the paddle does not exist
    pub paddle: Option<Sprite>,
    pub ball: Sprite,
    pub tiles: Vec<TileSprite>,
    pub phase: GamePhase,
    pub music: bool,
    pub score: usize,
    pub frame: u64,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let paddle = state.paddle.exists.then(|| Sprite {
            rect: state.paddle.rect(),
            color: colors::PADDLE,
        });

        // Checkerboard shading so neighbouring tiles stay distinguishable
        let tiles = state
            .tile_map
            .unbroken()
            .map(|(row, col, rect)| TileSprite {
                row,
                col,
                sprite: Sprite {
                    rect,
                    color: if (row + col) % 2 == 0 {
                        colors::TILE_EVEN
                    } else {
                        colors::TILE_ODD
                    },
                },
            })
            .collect();

        Self {
            screen_width: state.settings.screen_width,
            screen_height: state.settings.screen_height,
            background: colors::BACKGROUND,
            paddle,
            ball: Sprite {
                rect: state.ball.rect(),
                color: colors::BALL,
            },
            tiles,
            phase: state.phase,
            music: state.music,
            score: state.score(),
            frame: state.frame,
        }
    }

    pub fn gameover(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    /// Overlay text shown on top of the playfield, if any
    pub fn banner(&self) -> Option<(&'static str, &'static str)> {
        match self.phase {
            GamePhase::GameOver => Some(("GAME OVER!", "press ENTER to play again, Q to quit")),
            GamePhase::Paused => Some(("PAUSED", "press P to resume")),
            GamePhase::Playing => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;

    #[test]
    fn test_capture_fresh_game() {
        let mut state = GameState::new(Settings::default(), 3);
        state.tile_map.break_tile(0, 1);
        let snap = RenderSnapshot::capture(&state);

        assert_eq!(snap.tiles.len(), 79);
        assert!(!snap.tiles.iter().any(|t| t.row == 0 && t.col == 1));
        assert_eq!(snap.score, 1);
        assert_eq!(snap.paddle.unwrap().rect, Rect::new(512, 672, 200, 30));
        assert_eq!(snap.ball.rect, Rect::new(512, 576, 20, 20));
        assert!(snap.banner().is_none());
    }

    #[test]
    fn test_capture_hides_missing_paddle() {
        let mut state = GameState::new(Settings::default(), 3);
        state.paddle.exists = false;
        state.phase = GamePhase::GameOver;
        let snap = RenderSnapshot::capture(&state);
        assert!(snap.paddle.is_none());
        assert!(snap.gameover());
        assert_eq!(snap.banner().map(|b| b.0), Some("GAME OVER!"));
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(Settings::default(), 3);
        let json = serde_json::to_string(&RenderSnapshot::capture(&state)).unwrap();
        assert!(json.contains("\"phase\":\"Playing\""));
    }
}
