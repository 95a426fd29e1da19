use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::params::Params;
use crate::Side;

/// Game configuration
///
/// Every field falls back to its [`Params`] value when missing from a
/// deserialized document, so hosts only need to send what they override
/// (typically the court size of their drawing surface).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub court_width: f32,
    pub court_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub ai_tracking: f32,
    pub ball_side: f32,
    pub ball_speed: f32,
    pub smash_multiplier: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            court_width: Params::COURT_WIDTH,
            court_height: Params::COURT_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ai_tracking: Params::AI_TRACKING,
            ball_side: Params::BALL_SIDE,
            ball_speed: Params::BALL_SPEED,
            smash_multiplier: Params::SMASH_MULTIPLIER,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON config document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the geometry can hold the clamp and bounce invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("court_width", self.court_width),
            ("court_height", self.court_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_side", self.ball_side),
            ("ball_speed", self.ball_speed),
            ("smash_multiplier", self.smash_multiplier),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        // Human sits one paddle width in, AI two widths from the right edge
        if self.paddle_height > self.court_height || 4.0 * self.paddle_width > self.court_width {
            return Err(ConfigError::PaddleTooLarge {
                paddle_width: self.paddle_width,
                paddle_height: self.paddle_height,
                width: self.court_width,
                height: self.court_height,
            });
        }

        if self.ball_side >= self.court_height || self.ball_side >= self.court_width {
            return Err(ConfigError::BallTooLarge {
                side: self.ball_side,
                width: self.court_width,
                height: self.court_height,
            });
        }

        // One tick of travel at smash speed must neither escape the court
        // after a mirrored wall bounce nor skip over a paddle
        let top_speed = self.ball_speed * self.smash_multiplier;
        let wall_limit = self.court_height - self.ball_side;
        if top_speed > wall_limit {
            return Err(ConfigError::BallTooFast {
                speed: top_speed,
                limit: wall_limit,
                reason: "leaving the court on a wall bounce",
            });
        }
        let paddle_limit = self.paddle_width + self.ball_side;
        if top_speed >= paddle_limit {
            return Err(ConfigError::BallTooFast {
                speed: top_speed,
                limit: paddle_limit,
                reason: "passing through a paddle",
            });
        }

        if self.ai_tracking.is_nan() || self.ai_tracking <= 0.0 || self.ai_tracking > 1.0 {
            return Err(ConfigError::AiTracking(self.ai_tracking));
        }

        if self.win_score == 0 {
            return Err(ConfigError::WinScore);
        }

        Ok(())
    }

    /// Get X position (left edge) for a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Human => self.paddle_width,
            Side::Ai => self.court_width - 2.0 * self.paddle_width,
        }
    }

    /// Y position that vertically centers a paddle
    pub fn paddle_center_y(&self) -> f32 {
        (self.court_height - self.paddle_height) / 2.0
    }

    /// Clamp paddle Y (top edge) to court bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.court_height - self.paddle_height)
    }

    /// X position the ball takes when flush against a paddle's inner face
    pub fn ball_flush_x(&self, side: Side) -> f32 {
        match side {
            Side::Human => self.paddle_x(Side::Human) + self.paddle_width,
            Side::Ai => self.paddle_x(Side::Ai) - self.ball_side,
        }
    }
}
