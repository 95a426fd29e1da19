/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court
    pub const COURT_WIDTH: f32 = 700.0;
    pub const COURT_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 8.0; // units per tick
    pub const AI_TRACKING: f32 = 0.1; // fraction of remaining distance per tick

    // Ball
    pub const BALL_SIDE: f32 = 20.0;
    pub const BALL_SPEED: f32 = 10.0; // units per tick
    pub const SMASH_MULTIPLIER: f32 = 1.5;

    // Angles (radians)
    pub const SERVE_SPREAD: f32 = 0.1 * std::f32::consts::PI; // ~18°
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4; // 45°
    pub const SMASH_THRESHOLD: f32 = 0.2 * std::f32::consts::PI; // 36°

    // Score
    pub const WIN_SCORE: u8 = 11;

    // Net
    pub const NET_WIDTH: f32 = 4.0;
    pub const NET_SEGMENTS: f32 = 15.0;
}
