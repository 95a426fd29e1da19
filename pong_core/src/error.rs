use thiserror::Error;

/// Errors raised while building a game from host-supplied configuration.
///
/// Ticking a running game never fails; only setup does.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    #[error("paddles ({paddle_width}x{paddle_height}) do not fit a {width}x{height} court")]
    PaddleTooLarge {
        paddle_width: f32,
        paddle_height: f32,
        width: f32,
        height: f32,
    },

    #[error("ball side {side} does not fit a {width}x{height} court")]
    BallTooLarge { side: f32, width: f32, height: f32 },

    #[error("top ball speed {speed} exceeds {limit}, the most a single tick can cover without {reason}")]
    BallTooFast {
        speed: f32,
        limit: f32,
        reason: &'static str,
    },

    #[error("ai tracking factor must be in (0, 1], got {0}")]
    AiTracking(f32),

    #[error("win score must be at least 1")]
    WinScore,
}
