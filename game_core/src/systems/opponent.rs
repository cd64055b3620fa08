use crate::{Ball, Config, Opponent, Paddle};
use hecs::World;

/// Steer scripted paddles toward the ball
///
/// The target sits half a paddle above the ball and the paddle only moves
/// once its center leaves the dead-zone around that target.
pub fn move_opponents(world: &mut World, config: &Config) {
    let ball_y = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| ball.pos.y)
    };

    let Some(ball_y) = ball_y else {
        return;
    };

    let half_height = config.paddle_height / 2.0;
    let target = ball_y - half_height;

    for (_entity, (paddle, opponent)) in world.query_mut::<(&mut Paddle, &Opponent)>() {
        let center = paddle.center_y(config.paddle_height);

        if center < target - opponent.dead_zone {
            paddle.y += opponent.speed;
        } else if center > target + opponent.dead_zone {
            paddle.y -= opponent.speed;
        }

        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}
