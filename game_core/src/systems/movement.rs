use crate::{Ball, Config, Paddle, PaddleIntent};
use hecs::World;

/// Apply keyboard paddle movement based on intents
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        paddle.y += intent.dir as f32 * config.player_step;

        // Clamp to field bounds
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
