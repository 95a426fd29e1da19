use glam::Vec2;
use serde::Serialize;

use crate::geometry::Rect;
use crate::params::Params;
use crate::{Config, GameRng};

/// Which end of the court an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    /// Left paddle, keyboard controlled
    Human,
    /// Right paddle, tracks the ball
    Ai,
}

impl Side {
    /// Horizontal direction of travel away from this side (+1 = rightward)
    pub fn sign(self) -> f32 {
        match self {
            Side::Human => 1.0,
            Side::Ai => -1.0,
        }
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // fixed per side
    pub y: f32, // top edge, clamped to court
}

impl Paddle {
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            x: config.paddle_x(side),
            y: config.paddle_center_y(),
        }
    }

    pub fn rect(&self, config: &Config) -> Rect {
        Rect::new(self.x, self.y, config.paddle_width, config.paddle_height)
    }
}

/// Ball component - the pong ball (square, top-left origin)
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    pub fn rect(&self, config: &Config) -> Rect {
        Rect::from_pos_size(self.pos, Vec2::splat(config.ball_side))
    }

    /// Serve from `from`'s paddle toward its opponent, drawing the
    /// launch height and angle from `rng`
    pub fn serve(&mut self, from: Side, config: &Config, rng: &mut GameRng) {
        use rand::Rng;
        let r: f32 = rng.0.gen();
        self.serve_with(from, r, config);
    }

    /// Deterministic serve for a given `r` in `[0, 1)`.
    ///
    /// `r` picks both the height (0 = top) and the launch angle, so a ball
    /// served high heads downward and one served low heads upward.
    pub fn serve_with(&mut self, from: Side, r: f32, config: &Config) {
        self.pos = Vec2::new(
            config.ball_flush_x(from),
            r * (config.court_height - config.ball_side),
        );

        let phi = Params::SERVE_SPREAD * (1.0 - 2.0 * r);
        self.vel = Vec2::new(
            from.sign() * config.ball_speed * phi.cos(),
            config.ball_speed * phi.sin(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_starts_centered() {
        let config = Config::new();
        let human = Paddle::new(Side::Human, &config);
        let ai = Paddle::new(Side::Ai, &config);
        assert_eq!((human.x, human.y), (20.0, 250.0));
        assert_eq!((ai.x, ai.y), (660.0, 250.0));
    }

    #[test]
    fn test_serve_from_human_heads_right() {
        let config = Config::new();
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
        ball.serve_with(Side::Human, 0.5, &config);

        assert_eq!(ball.pos.x, 40.0, "Ball should sit flush with human paddle");
        assert_eq!(ball.pos.y, 290.0);
        assert!((ball.vel.x - 10.0).abs() < 1e-5);
        assert!(ball.vel.y.abs() < 1e-5, "r = 0.5 should serve level");
    }

    #[test]
    fn test_serve_from_ai_heads_left() {
        let config = Config::new();
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
        ball.serve_with(Side::Ai, 0.0, &config);

        assert_eq!(ball.pos.x, 640.0, "Ball should sit flush with AI paddle");
        assert_eq!(ball.pos.y, 0.0);
        assert!(ball.vel.x < 0.0);
        // r = 0 serves from the top at the full +18° downward spread
        let phi = Params::SERVE_SPREAD;
        assert!((ball.vel.x + 10.0 * phi.cos()).abs() < 1e-4);
        assert!((ball.vel.y - 10.0 * phi.sin()).abs() < 1e-4);
    }

    #[test]
    fn test_serve_overwrites_previous_state() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::new(-500.0, 9000.0), Vec2::new(99.0, -99.0));
        ball.serve(Side::Human, &config, &mut rng);

        assert_eq!(ball.pos.x, config.ball_flush_x(Side::Human));
        assert!(ball.pos.y >= 0.0 && ball.pos.y <= config.court_height - config.ball_side);
        assert!((ball.vel.length() - config.ball_speed).abs() < 1e-4);
    }
}
