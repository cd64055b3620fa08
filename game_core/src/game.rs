//! A single match plus everything needed to replay it from scratch

use crate::{
    create_ball, create_opponent_paddle, create_player_paddle, step, tick, Ball, Config, Events,
    GameAction, GameFsm, GameRng, Outcome, Paddle, Score, Side, TickInput, Time,
};
use glam::Vec2;
use hecs::World;

/// Read-only view of what is on the field, for rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub field: Vec2,
    pub paddle_size: Vec2,
    pub player: Vec2, // top-left corner
    pub opponent: Vec2,
    pub ball: Vec2,
    pub ball_radius: f32,
}

/// Match session: the world and its resources
///
/// Configuration and the random source outlive a restart; everything else is
/// rebuilt.
pub struct Game {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub score: Score,
    pub fsm: GameFsm,
    pub events: Events,
    pub rng: GameRng,
}

impl Game {
    pub fn new(config: Config, mut rng: GameRng) -> Self {
        let world = Self::spawn_world(&config, &mut rng);
        log::info!(
            "match started on a {}x{} field",
            config.field_width,
            config.field_height
        );

        Self {
            world,
            time: Time::new(),
            config,
            score: Score::new(),
            fsm: GameFsm::new(),
            events: Events::new(),
            rng,
        }
    }

    fn spawn_world(config: &Config, rng: &mut GameRng) -> World {
        let mut world = World::new();

        // Create paddles
        let start_y = config.paddle_start_y();
        create_player_paddle(&mut world, config.paddle_x(Side::Player), start_y);
        create_opponent_paddle(
            &mut world,
            config,
            config.paddle_x(Side::Opponent),
            start_y,
        );

        // Create ball
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
        ball.reset(config, rng);
        create_ball(&mut world, ball.pos, ball.vel);

        world
    }

    /// Throw the match away and start a new one
    pub fn restart(&mut self) {
        let from = self.fsm.transition(GameAction::Restart).from_state;

        self.world = Self::spawn_world(&self.config, &mut self.rng);
        self.time = Time::new();
        self.score = Score::new();
        self.fsm = GameFsm::new();
        self.events = Events::new();

        log::info!("match restarted from {:?}", from);
    }

    /// Advance one reference frame
    pub fn tick(&mut self, input: &TickInput) {
        self.events.clear();
        tick(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.fsm,
            &mut self.events,
            input,
            &mut self.rng,
        );
    }

    /// Advance by wall-clock time; returns the frames simulated
    pub fn step(&mut self, input: &TickInput, dt: f32) -> u32 {
        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &mut self.score,
            &mut self.fsm,
            &mut self.events,
            input,
            &mut self.rng,
            dt,
        )
    }

    pub fn is_over(&self) -> bool {
        self.fsm.is_game_over()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_over() {
            return None;
        }
        self.score
            .has_winner(self.config.win_score)
            .map(Outcome::winner)
    }

    /// Text for the message line: empty while playing
    pub fn message(&self) -> &'static str {
        self.outcome().map(|o| o.message()).unwrap_or("")
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn snapshot(&self) -> Snapshot {
        let config = &self.config;
        let paddle_pos = |side: Side| {
            self.paddle(side)
                .map(|p| Vec2::new(p.x, p.y))
                .unwrap_or_else(|| Vec2::new(config.paddle_x(side), config.paddle_start_y()))
        };

        Snapshot {
            field: Vec2::new(config.field_width, config.field_height),
            paddle_size: Vec2::new(config.paddle_width, config.paddle_height),
            player: paddle_pos(Side::Player),
            opponent: paddle_pos(Side::Opponent),
            ball: self.ball().map(|b| b.pos).unwrap_or(config.field_center()),
            ball_radius: config.ball_radius,
        }
    }
}
