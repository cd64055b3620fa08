use game_core::Snapshot;
use glam::Vec2;

use super::{DrawSurface, BALL_COLOR, NET_COLOR, NET_DASH, OPPONENT_COLOR, PLAYER_COLOR};

/// Paint one frame: net, paddles, ball
///
/// Reads the snapshot only; never touches game state.
pub fn draw_frame<S: DrawSurface>(surface: &mut S, snapshot: &Snapshot) -> Result<(), S::Error> {
    surface.clear(snapshot.field)?;

    let mid_x = snapshot.field.x / 2.0;
    surface.dashed_line(
        Vec2::new(mid_x, 0.0),
        Vec2::new(mid_x, snapshot.field.y),
        NET_DASH,
        NET_COLOR,
    )?;

    surface.fill_rect(snapshot.player, snapshot.paddle_size, PLAYER_COLOR)?;
    surface.fill_rect(snapshot.opponent, snapshot.paddle_size, OPPONENT_COLOR)?;

    surface.fill_circle(snapshot.ball, snapshot.ball_radius, BALL_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Config, Game, GameRng};
    use std::convert::Infallible;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear(Vec2),
        Line(Vec2, Vec2, [f32; 2], String),
        Rect(Vec2, Vec2, String),
        Circle(Vec2, f32, String),
    }

    #[derive(Default)]
    struct RecordingSurface {
        ops: Vec<Op>,
    }

    impl DrawSurface for RecordingSurface {
        type Error = Infallible;

        fn clear(&mut self, size: Vec2) -> Result<(), Infallible> {
            self.ops.push(Op::Clear(size));
            Ok(())
        }

        fn dashed_line(
            &mut self,
            from: Vec2,
            to: Vec2,
            dash: [f32; 2],
            color: &str,
        ) -> Result<(), Infallible> {
            self.ops.push(Op::Line(from, to, dash, color.to_string()));
            Ok(())
        }

        fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) -> Result<(), Infallible> {
            self.ops.push(Op::Rect(pos, size, color.to_string()));
            Ok(())
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) -> Result<(), Infallible> {
            self.ops.push(Op::Circle(center, radius, color.to_string()));
            Ok(())
        }
    }

    /// Fails on the first call
    struct BrokenSurface;

    impl DrawSurface for BrokenSurface {
        type Error = &'static str;

        fn clear(&mut self, _size: Vec2) -> Result<(), Self::Error> {
            Err("no context")
        }

        fn dashed_line(&mut self, _: Vec2, _: Vec2, _: [f32; 2], _: &str) -> Result<(), Self::Error> {
            Ok(())
        }

        fn fill_rect(&mut self, _: Vec2, _: Vec2, _: &str) -> Result<(), Self::Error> {
            Ok(())
        }

        fn fill_circle(&mut self, _: Vec2, _: f32, _: &str) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn test_draw_order_and_shapes() {
        let game = Game::new(Config::with_field(600.0, 400.0), GameRng::new(1));
        let mut surface = RecordingSurface::default();

        draw_frame(&mut surface, &game.snapshot()).unwrap();

        assert_eq!(
            surface.ops,
            vec![
                Op::Clear(Vec2::new(600.0, 400.0)),
                Op::Line(
                    Vec2::new(300.0, 0.0),
                    Vec2::new(300.0, 400.0),
                    [8.0, 8.0],
                    "#fff".to_string()
                ),
                Op::Rect(
                    Vec2::new(20.0, 165.0),
                    Vec2::new(10.0, 70.0),
                    "#FFD600".to_string()
                ),
                Op::Rect(
                    Vec2::new(570.0, 165.0),
                    Vec2::new(10.0, 70.0),
                    "#E53935".to_string()
                ),
                Op::Circle(Vec2::new(300.0, 200.0), 8.0, "#fff".to_string()),
            ]
        );
    }

    #[test]
    fn test_drawing_does_not_change_state() {
        let game = Game::new(Config::new(), GameRng::new(2));
        let before = game.snapshot();

        let mut surface = RecordingSurface::default();
        draw_frame(&mut surface, &before).unwrap();
        draw_frame(&mut surface, &game.snapshot()).unwrap();

        assert_eq!(game.snapshot(), before);
        assert_eq!(surface.ops.len(), 10);
    }

    #[test]
    fn test_surface_error_propagates() {
        let game = Game::new(Config::new(), GameRng::new(3));
        assert_eq!(draw_frame(&mut BrokenSurface, &game.snapshot()), Err("no context"));
    }
}
