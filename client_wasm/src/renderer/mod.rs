#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod draw;

pub use draw::draw_frame;

use glam::Vec2;

pub const NET_COLOR: &str = "#fff";
pub const NET_DASH: [f32; 2] = [8.0, 8.0];
pub const PLAYER_COLOR: &str = "#FFD600";
pub const OPPONENT_COLOR: &str = "#E53935";
pub const BALL_COLOR: &str = "#fff";

/// The 2D drawing operations a frame needs
///
/// Implemented over the browser canvas, and by recording fakes in tests.
pub trait DrawSurface {
    type Error;

    /// Wipe the whole surface
    fn clear(&mut self, size: Vec2) -> Result<(), Self::Error>;

    fn dashed_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        dash: [f32; 2],
        color: &str,
    ) -> Result<(), Self::Error>;

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) -> Result<(), Self::Error>;

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) -> Result<(), Self::Error>;
}
