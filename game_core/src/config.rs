use crate::{Params, Side};
use glam::Vec2;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub player_step: f32,
    pub opponent_speed: f32,
    pub opponent_dead_zone: f32,
    pub ball_radius: f32,
    pub serve_speed_x: f32,
    pub serve_speed_y_max: f32,
    pub deflection_speed_max: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            player_step: Params::PLAYER_STEP,
            opponent_speed: Params::OPPONENT_SPEED,
            opponent_dead_zone: Params::OPPONENT_DEAD_ZONE,
            ball_radius: Params::BALL_RADIUS,
            serve_speed_x: Params::SERVE_SPEED_X,
            serve_speed_y_max: Params::SERVE_SPEED_Y_MAX,
            deflection_speed_max: Params::DEFLECTION_SPEED_MAX,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default tuning on a field of the given size (the canvas dimensions)
    pub fn with_field(width: f32, height: f32) -> Self {
        Self {
            field_width: width,
            field_height: height,
            ..Self::default()
        }
    }

    /// Left edge X of a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_inset,
            Side::Opponent => self.field_width - self.paddle_inset - self.paddle_width,
        }
    }

    /// Lowest allowed top-left Y of a paddle
    pub fn max_paddle_y(&self) -> f32 {
        (self.field_height - self.paddle_height).max(0.0)
    }

    /// Clamp paddle Y to field bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.max_paddle_y())
    }

    /// Paddle Y that centers it vertically
    pub fn paddle_start_y(&self) -> f32 {
        self.field_height / 2.0 - self.paddle_height / 2.0
    }

    pub fn field_center(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }
}
