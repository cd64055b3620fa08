/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field (the canvas overrides these at startup)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 70.0;
    pub const PADDLE_INSET: f32 = 20.0; // gap between paddle and side edge
    pub const PLAYER_STEP: f32 = 6.0; // per frame while a key is held

    // Opponent
    pub const OPPONENT_SPEED: f32 = 5.0;
    pub const OPPONENT_DEAD_ZONE: f32 = 10.0;

    // Ball
    pub const BALL_RADIUS: f32 = 8.0;
    pub const SERVE_SPEED_X: f32 = 5.0;
    pub const SERVE_SPEED_Y_MAX: f32 = 4.0;
    pub const DEFLECTION_SPEED_MAX: f32 = 5.0;

    // Score
    pub const WIN_SCORE: u8 = 10; // First to 10 wins

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 60.0; // one reference frame
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
