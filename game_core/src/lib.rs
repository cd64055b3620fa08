pub mod components;
pub mod config;
pub mod fsm;
pub mod game;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use game::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Advance the match by exactly one reference frame
///
/// Does nothing once the match is over. Event flags are only ever set here;
/// callers clear them between reads.
#[allow(clippy::too_many_arguments)]
pub fn tick(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    fsm: &mut GameFsm,
    events: &mut Events,
    input: &TickInput,
    rng: &mut GameRng,
) {
    if !fsm.is_playing() {
        return;
    }

    // 1. Held keys become the player's intent
    ingest_input(world, input);

    // 2. Move paddles: player by intent, opponent toward the ball
    move_paddles(world, config);
    move_opponents(world, config);

    // 3. Move ball
    move_ball(world);

    // 4. Check collisions (walls, then paddles)
    check_collisions(world, config, events);

    // 5. Check scoring (ball exited the field)
    check_scoring(world, config, score, fsm, events, rng);
}

/// Run the deterministic Pong simulation for `dt` seconds of wall-clock time
///
/// Whole reference frames are simulated; the remainder is carried in
/// `time.accumulator`. Events are collected per frame and folded into
/// `events`, which then covers the whole call. Returns the number of frames run.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    score: &mut Score,
    fsm: &mut GameFsm,
    events: &mut Events,
    input: &TickInput,
    rng: &mut GameRng,
    dt: f32,
) -> u32 {
    // Clamp dt to prevent large jumps
    let clamped_dt = dt.clamp(0.0, Params::MAX_DT);
    time.accumulator += clamped_dt;

    events.clear();

    let mut frames = 0;
    let mut frame_events = Events::new();
    while time.accumulator >= Params::FIXED_DT {
        time.accumulator -= Params::FIXED_DT;
        time.frame += 1;
        frames += 1;

        frame_events.clear();
        tick(world, config, score, fsm, &mut frame_events, input, rng);
        events.merge(&frame_events);
    }

    frames
}

/// Helper to create the keyboard-driven paddle
pub fn create_player_paddle(world: &mut World, x: f32, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(Side::Player, x, y), PaddleIntent::new()))
}

/// Helper to create the scripted paddle
pub fn create_opponent_paddle(world: &mut World, config: &Config, x: f32, y: f32) -> hecs::Entity {
    world.spawn((
        Paddle::new(Side::Opponent, x, y),
        Opponent::new(config.opponent_speed, config.opponent_dead_zone),
    ))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
