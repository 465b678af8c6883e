//! Per-frame simulation step and input handling
//!
//! Input events become [`Action`]s which drive the phase machine; the frame
//! step then advances the simulation once and reports what happened.

use serde::{Deserialize, Serialize};

use super::collision::{
    correct_paddle_bounds, resolve_ball_paddle, resolve_ball_tiles, resolve_ball_walls,
};
use super::state::{GameEvent, GamePhase, GameState, MusicCue};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    P,
    M,
    Q,
}

/// Input events, already translated from the windowing layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Window close request
    Quit,
    KeyDown { key: Key, repeat: bool },
    KeyUp { key: Key, repeat: bool },
}

impl InputEvent {
    pub fn key_down(key: Key) -> Self {
        InputEvent::KeyDown { key, repeat: false }
    }

    pub fn key_up(key: Key) -> Self {
        InputEvent::KeyUp { key, repeat: false }
    }
}

/// Paddle velocity component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Abstract state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Quit,
    Restart,
    TogglePause,
    ToggleMusic,
    AdjustPaddleVelocity { axis: Axis, amount: i32 },
}

/// Direction an arrow key pushes the paddle, as (axis, sign)
fn arrow_direction(key: Key) -> Option<(Axis, i32)> {
    match key {
        Key::Up => Some((Axis::Y, -1)),
        Key::Down => Some((Axis::Y, 1)),
        Key::Left => Some((Axis::X, -1)),
        Key::Right => Some((Axis::X, 1)),
        _ => None,
    }
}

/// Translate an input event into actions
///
/// Pressing an arrow adds `velocity_delta` in its direction and releasing it
/// takes the same amount back, so paddle velocity is the sum of the held
/// arrows. Key repeats never touch the paddle.
pub fn actions_for(event: &InputEvent, paddle_delta: i32) -> Vec<Action> {
    let mut actions = Vec::new();
    match *event {
        InputEvent::Quit => actions.push(Action::Quit),
        InputEvent::KeyDown { key, repeat } => {
            if !repeat {
                if let Some((axis, sign)) = arrow_direction(key) {
                    actions.push(Action::AdjustPaddleVelocity {
                        axis,
                        amount: sign * paddle_delta,
                    });
                }
            }
        }
        InputEvent::KeyUp { key, repeat } => {
            match key {
                Key::Q => actions.push(Action::Quit),
                Key::Enter => actions.push(Action::Restart),
                Key::P => actions.push(Action::TogglePause),
                Key::M => actions.push(Action::ToggleMusic),
                _ => {}
            }
            if !repeat {
                if let Some((axis, sign)) = arrow_direction(key) {
                    actions.push(Action::AdjustPaddleVelocity {
                        axis,
                        amount: -sign * paddle_delta,
                    });
                }
            }
        }
    }
    actions
}

/// Apply one action to the game state
///
/// Pause and music share a toggle: every pause or unpause also flips the music
/// flag. Pausing with music already off therefore turns it on.
pub fn apply_action(state: &mut GameState, action: Action) {
    match action {
        Action::Quit => {
            log::info!("Quit requested");
            state.quit = true;
        }
        Action::Restart => {
            log::info!("Restarting level {}", state.settings.level);
            state.reset(state.settings.level);
        }
        Action::TogglePause => {
            state.phase = match state.phase {
                GamePhase::Playing => GamePhase::Paused,
                GamePhase::Paused => GamePhase::Playing,
                GamePhase::GameOver => return,
            };
            state.music = !state.music;
            log::info!("Paused: {}", state.paused());
        }
        Action::ToggleMusic => {
            if state.gameover() {
                return;
            }
            state.music = !state.music;
        }
        Action::AdjustPaddleVelocity { axis, amount } => {
            if state.gameover() || !state.paddle.exists {
                return;
            }
            match axis {
                Axis::X => state.paddle.vel.x += amount,
                Axis::Y => state.paddle.vel.y += amount,
            }
        }
    }
}

/// Translate and apply a single input event
pub fn handle_event(state: &mut GameState, event: &InputEvent) {
    for action in actions_for(event, state.paddle.velocity_delta) {
        apply_action(state, action);
    }
}

/// Everything a frame step triggered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameOutcome {
    pub events: Vec<GameEvent>,
    /// Music state to enforce this frame
    pub music: MusicCue,
}

impl FrameOutcome {
    pub fn tiles_broken(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::TileBroken { .. }))
            .count()
    }
}

/// Advance the game by one frame
///
/// Ball and paddle only move while `Playing`. Resolution order is fixed: ball
/// walls, tiles, paddle hit, then the paddle moves and is pushed back inside.
/// The music cue is produced every frame regardless of phase.
pub fn perform_game_logic(state: &mut GameState) -> FrameOutcome {
    let mut events = Vec::new();

    if state.phase == GamePhase::Playing {
        state.frame += 1;
        let (width, height) = (state.settings.screen_width, state.settings.screen_height);

        state.ball.integrate();

        let walls = resolve_ball_walls(&mut state.ball, width, height, &mut events);
        if walls.dead {
            state.phase = GamePhase::GameOver;
            state.music = false;
            log::info!(
                "Game over after {} frames, {} tiles broken",
                state.frame,
                state.score()
            );
        }

        resolve_ball_tiles(&mut state.ball, &mut state.tile_map, &mut events);

        if state.paddle.exists {
            resolve_ball_paddle(&mut state.ball, &state.paddle, &mut events);
            state.paddle.integrate();
            correct_paddle_bounds(&mut state.paddle, width, height);
        }
    }

    FrameOutcome {
        events,
        music: state.music_cue(),
    }
}
