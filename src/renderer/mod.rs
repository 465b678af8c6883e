//! Rendering contract
//!
//! Drawing itself lives outside the crate. The frame loop captures a
//! [`RenderSnapshot`] after every step and passes it to a [`Renderer`].

pub mod snapshot;

pub use snapshot::{RenderSnapshot, Sprite, TileSprite, colors};

use crate::sim::GamePhase;

/// Consumes one snapshot per frame; never feeds back into the game
pub trait Renderer {
    fn render(&mut self, snapshot: &RenderSnapshot);
}

/// Renderer that draws nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _snapshot: &RenderSnapshot) {}
}

/// Renderer that logs phase changes and score progress
#[derive(Debug, Clone, Default)]
pub struct LogRenderer {
    last_phase: Option<GamePhase>,
    last_score: usize,
    frames: u64,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, snapshot: &RenderSnapshot) {
        self.frames += 1;

        if self.last_phase != Some(snapshot.phase) {
            match snapshot.banner() {
                Some((title, hint)) => log::info!("{} ({})", title, hint),
                None => log::info!("Playing, {} tiles left", snapshot.tiles.len()),
            }
            self.last_phase = Some(snapshot.phase);
        }

        if snapshot.score != self.last_score {
            log::debug!("Score: {}", snapshot.score);
            self.last_score = snapshot.score;
        }
    }
}
