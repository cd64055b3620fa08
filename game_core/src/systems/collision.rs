use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // First, collect paddle data without holding borrows
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    // Player paddle is resolved first
    paddles.sort_by_key(|paddle| paddle.side != Side::Player);

    let radius = config.ball_radius;
    let height = config.paddle_height;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Top/bottom walls: reflect and snap back inside
        if ball.pos.y - radius < 0.0 {
            ball.pos.y = radius;
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
        if ball.pos.y + radius > config.field_height {
            ball.pos.y = config.field_height - radius;
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }

        for paddle in &paddles {
            let within_span = ball.pos.y > paddle.y && ball.pos.y < paddle.y + height;
            if !within_span {
                continue;
            }

            let (overlaps, contact_x) = match paddle.side {
                Side::Player => {
                    let inner_edge = paddle.x + config.paddle_width;
                    (ball.pos.x - radius < inner_edge, inner_edge + radius)
                }
                Side::Opponent => (ball.pos.x + radius > paddle.x, paddle.x - radius),
            };
            if !overlaps {
                continue;
            }

            // Where on the paddle it struck: -1 (top edge) .. 1 (bottom edge)
            let hit = (ball.pos.y - paddle.center_y(height)) / (height / 2.0);

            ball.pos.x = contact_x;
            ball.vel.x = -ball.vel.x;
            ball.vel.y = config.deflection_speed_max * hit;
            events.ball_hit_paddle = true;

            log::debug!("ball hit {:?} paddle at {:.2}", paddle.side, hit);
        }
    }
}
