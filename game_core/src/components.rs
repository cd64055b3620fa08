use glam::Vec2;

/// Which end of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,   // left, keyboard controlled
    Opponent, // right, scripted
}

/// Paddle component - one per side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // left edge, fixed for the match
    pub y: f32, // top edge, clamped to the field
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32) -> Self {
        Self { side, x, y }
    }

    pub fn center_y(&self, height: f32) -> f32 {
        self.y + height / 2.0
    }
}

/// Scripted movement for the opponent paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opponent {
    pub speed: f32,     // units per frame
    pub dead_zone: f32, // no movement while the target is this close
}

impl Opponent {
    pub fn new(speed: f32, dead_zone: f32) -> Self {
        Self { speed, dead_zone }
    }
}

/// Movement intent for the keyboard paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2, // units per frame
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Reset ball to the field center with a random serve
    pub fn reset(&mut self, config: &crate::Config, rng: &mut crate::GameRng) {
        use rand::Rng;

        self.pos = config.field_center();

        let dir = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let max_y = config.serve_speed_y_max;
        let vy = if max_y > 0.0 {
            rng.0.gen_range(-max_y..max_y)
        } else {
            0.0
        };

        self.vel = Vec2::new(config.serve_speed_x * dir, vy);
    }
}
