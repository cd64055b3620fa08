use crate::{Ball, Config, Events, GameAction, GameFsm, GameRng, Outcome, Score, Side};
use hecs::World;

/// Check if ball left the field (scoring)
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    fsm: &mut GameFsm,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Check if ball exited left or right edge
        let scorer = if ball.pos.x < 0.0 {
            events.opponent_scored = true;
            Side::Opponent
        } else if ball.pos.x > config.field_width {
            events.player_scored = true;
            Side::Player
        } else {
            continue;
        };

        let points = score.increment(scorer);
        log::info!(
            "{:?} scored: {} - {}",
            scorer,
            score.player,
            score.opponent
        );

        if points >= config.win_score && fsm.transition(GameAction::MatchWon).success {
            events.game_over = true;
            log::info!("match over: {}", Outcome::winner(scorer).message());
        }

        // Reset ball
        ball.reset(config, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Ball, Config, Events, FsmState, GameFsm, GameRng, Score};
    use glam::Vec2;

    struct Fixture {
        world: hecs::World,
        config: Config,
        score: Score,
        fsm: GameFsm,
        events: Events,
        rng: GameRng,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                world: hecs::World::new(),
                config: Config::new(),
                score: Score::new(),
                fsm: GameFsm::new(),
                events: Events::new(),
                rng: GameRng::new(12345), // Fixed seed for deterministic tests
            }
        }

        fn run(&mut self) {
            check_scoring(
                &mut self.world,
                &self.config,
                &mut self.score,
                &mut self.fsm,
                &mut self.events,
                &mut self.rng,
            );
        }

        fn ball(&self) -> Ball {
            let mut query = self.world.query::<&Ball>();
            let (_e, ball) = query.iter().next().expect("ball");
            *ball
        }
    }

    #[test]
    fn test_opponent_scores_when_ball_exits_left() {
        let mut fx = Fixture::new();
        create_ball(&mut fx.world, Vec2::new(-0.1, 250.0), Vec2::new(-5.0, 0.0));

        fx.run();

        assert_eq!(fx.score.opponent, 1, "Opponent should score");
        assert_eq!(fx.score.player, 0, "Player should not score");
        assert!(fx.events.opponent_scored, "Should trigger opponent_scored event");
    }

    #[test]
    fn test_player_scores_when_ball_exits_right() {
        let mut fx = Fixture::new();
        let x = fx.config.field_width + 0.1;
        create_ball(&mut fx.world, Vec2::new(x, 250.0), Vec2::new(5.0, 0.0));

        fx.run();

        assert_eq!(fx.score.player, 1, "Player should score");
        assert_eq!(fx.score.opponent, 0);
        assert!(fx.events.player_scored);
    }

    #[test]
    fn test_ball_resets_to_exact_center_after_scoring() {
        let mut fx = Fixture::new();
        create_ball(&mut fx.world, Vec2::new(-0.1, 40.0), Vec2::new(-5.0, -2.0));

        fx.run();

        let ball = fx.ball();
        assert_eq!(ball.pos, fx.config.field_center(), "Ball should reset to center");
        assert_eq!(ball.vel.x.abs(), fx.config.serve_speed_x);
    }

    #[test]
    fn test_no_scoring_when_ball_on_edge() {
        let mut fx = Fixture::new();
        create_ball(&mut fx.world, Vec2::new(0.0, 250.0), Vec2::new(-5.0, 0.0));

        fx.run();

        assert_eq!(fx.score, Score::new(), "x == 0 is still in bounds");
        assert!(!fx.events.scored());
        assert_eq!(fx.ball().pos.x, 0.0);
    }

    #[test]
    fn test_reaching_win_score_ends_match() {
        let mut fx = Fixture::new();
        fx.score.player = fx.config.win_score - 1;
        let x = fx.config.field_width + 1.0;
        create_ball(&mut fx.world, Vec2::new(x, 250.0), Vec2::new(5.0, 0.0));

        fx.run();

        assert_eq!(fx.score.player, fx.config.win_score);
        assert_eq!(fx.fsm.state(), FsmState::GameOver);
        assert!(fx.events.game_over);
    }

    #[test]
    fn test_below_win_score_keeps_playing() {
        let mut fx = Fixture::new();
        fx.score.opponent = fx.config.win_score - 2;
        create_ball(&mut fx.world, Vec2::new(-1.0, 250.0), Vec2::new(-5.0, 0.0));

        fx.run();

        assert!(fx.fsm.is_playing());
        assert!(!fx.events.game_over);
    }
}
