//! Single-threaded frame loop
//!
//! Each frame, in order: drain input, apply each event, step the simulation,
//! dispatch sounds and music, hand a snapshot to the renderer. The loop owns
//! the game state and all collaborators; nothing is global.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::audio::{self, AudioSink};
use crate::renderer::{RenderSnapshot, Renderer};
use crate::sim::{GameState, InputEvent, handle_event, perform_game_logic};

/// Source of input events, polled once per frame
pub trait InputSource {
    /// Events pending for the given frame, in arrival order
    fn poll(&mut self, frame: u64) -> Vec<InputEvent>;
}

/// Input source that never produces events
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputSource for NoInput {
    fn poll(&mut self, _frame: u64) -> Vec<InputEvent> {
        Vec::new()
    }
}

/// One entry of an input script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptEntry {
    /// Loop iteration the event is delivered on (0-based)
    pub frame: u64,
    pub event: InputEvent,
}

/// Replays a fixed list of events at given frames
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    entries: Vec<ScriptEntry>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(mut entries: Vec<ScriptEntry>) -> Self {
        // Stable: same-frame events keep their written order
        entries.sort_by_key(|e| e.frame);
        Self { entries, cursor: 0 }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<ScriptEntry> =
            serde_json::from_str(json).context("invalid input script")?;
        Ok(Self::new(entries))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("read input script {}", path.display()))?;
        let script = Self::from_json(&json)?;
        log::info!(
            "Loaded {} scripted events from {}",
            script.entries.len(),
            path.display()
        );
        Ok(script)
    }

    /// Events not delivered yet
    pub fn remaining(&self) -> usize {
        self.entries.len() - self.cursor
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, frame: u64) -> Vec<InputEvent> {
        let mut events = Vec::new();
        while let Some(entry) = self.entries.get(self.cursor) {
            if entry.frame > frame {
                break;
            }
            events.push(entry.event);
            self.cursor += 1;
        }
        events
    }
}

/// Summary of a finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub quit: bool,
    pub gameover: bool,
    pub score: usize,
}

/// Owns the game and its collaborators and drives them frame by frame
pub struct FrameLoop<I, A, R> {
    pub state: GameState,
    pub input: I,
    pub audio: A,
    pub renderer: R,
    frames: u64,
}

impl<I: InputSource, A: AudioSink, R: Renderer> FrameLoop<I, A, R> {
    pub fn new(state: GameState, input: I, audio: A, renderer: R) -> Self {
        Self {
            state,
            input,
            audio,
            renderer,
            frames: 0,
        }
    }

    /// Loop iterations run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame. Returns false once the player has quit.
    pub fn run_frame(&mut self) -> bool {
        for event in self.input.poll(self.frames) {
            handle_event(&mut self.state, &event);
        }

        let outcome = perform_game_logic(&mut self.state);
        audio::dispatch(&outcome, &mut self.audio);

        // Taken after any reset so the renderer never sees a half-replaced grid
        let snapshot = RenderSnapshot::capture(&self.state);
        self.renderer.render(&snapshot);

        self.frames += 1;
        !self.state.quit
    }

    /// Run until quit or `max_frames` iterations
    pub fn run(&mut self, max_frames: u64) -> RunSummary {
        while self.frames < max_frames && !self.state.quit {
            self.run_frame();
        }

        RunSummary {
            frames: self.frames,
            quit: self.state.quit,
            gameover: self.state.gameover(),
            score: self.state.score(),
        }
    }
}
