//! Collision detection and response
//!
//! Each resolver mutates the entities it is handed and records what happened in
//! an event list. Nothing here touches audio or rendering.

use super::state::{Ball, GameEvent, Paddle, SoundKind};
use super::tiles::TileMap;

/// Outcome of checking the ball against the screen edges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallResult {
    /// Number of walls the ball bounced off
    pub bounces: u32,
    /// Ball crossed the bottom edge
    pub dead: bool,
}

/// Bounce the ball off the left, right and top edges; detect a fall through the bottom
///
/// A bounce sets the axis speed to exactly `velocity_delta` pointing back into the
/// screen, so speed never drifts however deep the ball got past the edge.
pub fn resolve_ball_walls(
    ball: &mut Ball,
    screen_width: i32,
    screen_height: i32,
    events: &mut Vec<GameEvent>,
) -> WallResult {
    let mut result = WallResult::default();

    if ball.pos.x < 0 {
        log_ball_impact(ball);
        ball.vel.x = ball.velocity_delta;
        events.push(GameEvent::Sound(SoundKind::Bounce));
        result.bounces += 1;
    }
    if ball.pos.x + ball.width > screen_width {
        log_ball_impact(ball);
        ball.vel.x = -ball.velocity_delta;
        events.push(GameEvent::Sound(SoundKind::Bounce));
        result.bounces += 1;
    }
    if ball.pos.y < 0 {
        log_ball_impact(ball);
        ball.vel.y = ball.velocity_delta;
        events.push(GameEvent::Sound(SoundKind::Bounce));
        result.bounces += 1;
    }
    if ball.pos.y + ball.height > screen_height {
        events.push(GameEvent::Sound(SoundKind::Dead));
        events.push(GameEvent::GameOver);
        result.dead = true;
    }

    result
}

/// Break every unbroken tile the ball overlaps
///
/// Each broken tile inverts the ball's y velocity, so an even number of hits in
/// one frame leaves it unchanged. Returns the number of tiles broken.
pub fn resolve_ball_tiles(
    ball: &mut Ball,
    tile_map: &mut TileMap,
    events: &mut Vec<GameEvent>,
) -> usize {
    let ball_rect = ball.rect();
    let hits: Vec<(usize, usize)> = tile_map
        .unbroken()
        .filter(|(_, _, rect)| rect.intersects(&ball_rect))
        .map(|(row, col, _)| (row, col))
        .collect();

    for &(row, col) in &hits {
        tile_map.break_tile(row, col);
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::TileBroken { row, col });
    }

    hits.len()
}

/// Whether the ball's bottom-right corner lies within the paddle rectangle
///
/// Only the bottom edge and right edge of the ball are tested, both inclusive.
pub fn ball_hits_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let ball_bottom = ball.pos.y + ball.height;
    let ball_right = ball.pos.x + ball.width;
    let paddle_rect = paddle.rect();

    (paddle_rect.top()..=paddle_rect.bottom()).contains(&ball_bottom)
        && (paddle_rect.left()..=paddle_rect.right()).contains(&ball_right)
}

/// Send the ball back up if it landed on the paddle
pub fn resolve_ball_paddle(ball: &mut Ball, paddle: &Paddle, events: &mut Vec<GameEvent>) -> bool {
    if !ball_hits_paddle(ball, paddle) {
        return false;
    }

    log_ball_impact(ball);
    log_paddle_impact(paddle);
    ball.vel.y = -ball.velocity_delta;
    events.push(GameEvent::Sound(SoundKind::Knock));
    true
}

/// Nudge the paddle back inside the screen
///
/// Every crossed edge moves the paddle inward by `velocity_delta`. This is a
/// fixed step, not a clamp: a paddle moving faster than `velocity_delta` can stay
/// partly off screen for a frame. Returns the number of edges corrected.
pub fn correct_paddle_bounds(paddle: &mut Paddle, screen_width: i32, screen_height: i32) -> u32 {
    let mut corrections = 0;

    if paddle.pos.x < 0 {
        log_paddle_impact(paddle);
        paddle.pos.x += paddle.velocity_delta;
        corrections += 1;
    }
    if paddle.pos.x + paddle.width > screen_width {
        log_paddle_impact(paddle);
        paddle.pos.x -= paddle.velocity_delta;
        corrections += 1;
    }
    if paddle.pos.y < 0 {
        log_paddle_impact(paddle);
        paddle.pos.y += paddle.velocity_delta;
        corrections += 1;
    }
    if paddle.pos.y + paddle.height > screen_height {
        log_paddle_impact(paddle);
        paddle.pos.y -= paddle.velocity_delta;
        corrections += 1;
    }

    corrections
}

fn log_ball_impact(ball: &Ball) {
    log::debug!(
        "Ball impact: pos ({}, {}) vel ({}, {})",
        ball.pos.x,
        ball.pos.y,
        ball.vel.x,
        ball.vel.y
    );
}

fn log_paddle_impact(paddle: &Paddle) {
    log::debug!(
        "Paddle impact: pos ({}, {}) vel ({}, {})",
        paddle.pos.x,
        paddle.pos.y,
        paddle.vel.x,
        paddle.vel.y
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use glam::IVec2;

    fn ball_at(x: i32, y: i32, vx: i32, vy: i32) -> Ball {
        let mut ball = Ball::new(&Settings::default(), false);
        ball.pos = IVec2::new(x, y);
        ball.vel = IVec2::new(vx, vy);
        ball
    }

    #[test]
    fn test_left_wall_bounce() {
        let mut ball = ball_at(-5, 403, -5, 3);
        let mut events = Vec::new();
        let result = resolve_ball_walls(&mut ball, 1024, 768, &mut events);
        assert_eq!(result.bounces, 1);
        assert!(!result.dead);
        assert_eq!(ball.vel, IVec2::new(5, 3));
        assert_eq!(events, vec![GameEvent::Sound(SoundKind::Bounce)]);
    }

    #[test]
    fn test_right_and_top_walls() {
        let mut ball = ball_at(1010, -2, 7, -9);
        let mut events = Vec::new();
        let result = resolve_ball_walls(&mut ball, 1024, 768, &mut events);
        assert_eq!(result.bounces, 2);
        assert_eq!(ball.vel, IVec2::new(-5, 5));
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_bottom_wall_is_fatal() {
        let mut ball = ball_at(500, 755, 5, -5);
        let mut events = Vec::new();
        let result = resolve_ball_walls(&mut ball, 1024, 768, &mut events);
        assert!(result.dead);
        assert_eq!(result.bounces, 0);
        // Velocity is left alone
        assert_eq!(ball.vel, IVec2::new(5, -5));
        assert_eq!(
            events,
            vec![GameEvent::Sound(SoundKind::Dead), GameEvent::GameOver]
        );
    }

    #[test]
    fn test_ball_exactly_at_edges_is_inside() {
        let mut ball = ball_at(0, 0, 5, 5);
        let mut events = Vec::new();
        let result = resolve_ball_walls(&mut ball, 1024, 768, &mut events);
        assert_eq!(result, WallResult::default());

        let mut ball = ball_at(1004, 748, 5, 5);
        let result = resolve_ball_walls(&mut ball, 1024, 768, &mut events);
        assert_eq!(result, WallResult::default());
        assert!(events.is_empty());
    }

    #[test]
    fn test_single_tile_hit_inverts_y() {
        let mut map = TileMap::new(10, 8, 128, 20);
        // Inside tile (9, 1) only: x 128..256, y 180..200
        let mut ball = ball_at(150, 185, 5, -5);
        let mut events = Vec::new();
        let broken = resolve_ball_tiles(&mut ball, &mut map, &mut events);
        assert_eq!(broken, 1);
        assert!(map.get(9, 1).unwrap().broken);
        assert_eq!(ball.vel.y, 5);
        assert_eq!(events, vec![GameEvent::TileBroken { row: 9, col: 1 }]);
    }

    #[test]
    fn test_two_tiles_cancel_flip() {
        let mut map = TileMap::new(10, 8, 128, 20);
        // Straddles the border between columns 0 and 1 in the bottom row
        let mut ball = ball_at(120, 190, 5, -5);
        let mut events = Vec::new();
        let broken = resolve_ball_tiles(&mut ball, &mut map, &mut events);
        assert_eq!(broken, 2);
        assert!(map.get(9, 0).unwrap().broken);
        assert!(map.get(9, 1).unwrap().broken);
        assert_eq!(ball.vel.y, -5);
    }

    #[test]
    fn test_broken_tiles_are_ignored() {
        let mut map = TileMap::new(10, 8, 128, 20);
        map.break_tile(9, 1);
        let mut ball = ball_at(150, 185, 5, -5);
        let mut events = Vec::new();
        assert_eq!(resolve_ball_tiles(&mut ball, &mut map, &mut events), 0);
        assert_eq!(ball.vel.y, -5);
    }

    #[test]
    fn test_ball_below_grid_misses() {
        let mut map = TileMap::new(10, 8, 128, 20);
        let mut ball = ball_at(500, 400, 5, -5);
        let mut events = Vec::new();
        assert_eq!(resolve_ball_tiles(&mut ball, &mut map, &mut events), 0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_paddle_hit_resets_y_speed() {
        let paddle = Paddle::new(&Settings::default()); // at (512, 672), 200x30
        let mut ball = ball_at(600, 660, 5, 9);
        let mut events = Vec::new();
        assert!(resolve_ball_paddle(&mut ball, &paddle, &mut events));
        assert_eq!(ball.vel.y, -5);
        assert_eq!(events, vec![GameEvent::Sound(SoundKind::Knock)]);
    }

    #[test]
    fn test_paddle_hit_zone_is_inclusive() {
        let paddle = Paddle::new(&Settings::default());
        // Bottom edge exactly on paddle top, right edge exactly on paddle left
        assert!(ball_hits_paddle(&ball_at(492, 652, 0, 0), &paddle));
        // Right edge exactly on paddle right, bottom exactly on paddle bottom
        assert!(ball_hits_paddle(&ball_at(692, 682, 0, 0), &paddle));
        // One pixel past either side
        assert!(!ball_hits_paddle(&ball_at(491, 660, 0, 0), &paddle));
        assert!(!ball_hits_paddle(&ball_at(693, 660, 0, 0), &paddle));
        assert!(!ball_hits_paddle(&ball_at(600, 651, 0, 0), &paddle));
        assert!(!ball_hits_paddle(&ball_at(600, 683, 0, 0), &paddle));
    }

    #[test]
    fn test_paddle_nudged_not_clamped() {
        let mut paddle = Paddle::new(&Settings::default());
        paddle.pos = IVec2::new(-12, 672);
        assert_eq!(correct_paddle_bounds(&mut paddle, 1024, 768), 1);
        // Moved in by velocity_delta only, still off screen
        assert_eq!(paddle.pos.x, -7);

        paddle.pos = IVec2::new(830, 745);
        assert_eq!(correct_paddle_bounds(&mut paddle, 1024, 768), 2);
        assert_eq!(paddle.pos, IVec2::new(825, 740));

        paddle.pos = IVec2::new(100, -1);
        assert_eq!(correct_paddle_bounds(&mut paddle, 1024, 768), 1);
        assert_eq!(paddle.pos, IVec2::new(100, 4));
    }

    #[test]
    fn test_paddle_inside_untouched() {
        let mut paddle = Paddle::new(&Settings::default());
        let before = paddle.pos;
        assert_eq!(correct_paddle_bounds(&mut paddle, 1024, 768), 0);
        assert_eq!(paddle.pos, before);
    }
}
