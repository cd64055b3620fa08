use crate::Side;

/// Time resource for the fixed-frame simulation
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub accumulator: f32, // Wall-clock time not yet simulated
    pub frame: u64,       // Frames simulated so far
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Held movement keys, sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
}

impl TickInput {
    pub fn new(up: bool, down: bool) -> Self {
        Self { up, down }
    }

    /// Net direction: -1 = up, 0 = none or both, 1 = down
    pub fn dir(&self) -> i8 {
        self.down as i8 - self.up as i8
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u8,
    pub opponent: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a point and return the new total for that side
    pub fn increment(&mut self, side: Side) -> u8 {
        let slot = match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        };
        *slot = slot.saturating_add(1);
        *slot
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.player >= win_score {
            Some(Side::Player)
        } else if self.opponent >= win_score {
            Some(Side::Opponent)
        } else {
            None
        }
    }
}

/// How a finished match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    PlayerWins,
    OpponentWins,
}

impl Outcome {
    pub fn winner(side: Side) -> Self {
        match side {
            Side::Player => Outcome::PlayerWins,
            Side::Opponent => Outcome::OpponentWins,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Outcome::PlayerWins => "You Win! Press R to restart.",
            Outcome::OpponentWins => "AI Wins! Press R to restart.",
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seed from the platform entropy source
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub player_scored: bool,
    pub opponent_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub game_over: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Fold another frame's events into this one
    pub fn merge(&mut self, other: &Events) {
        self.player_scored |= other.player_scored;
        self.opponent_scored |= other.opponent_scored;
        self.ball_hit_paddle |= other.ball_hit_paddle;
        self.ball_hit_wall |= other.ball_hit_wall;
        self.game_over |= other.game_over;
    }

    pub fn scored(&self) -> bool {
        self.player_scored || self.opponent_scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_input_dir() {
        assert_eq!(TickInput::new(false, false).dir(), 0);
        assert_eq!(TickInput::new(true, false).dir(), -1);
        assert_eq!(TickInput::new(false, true).dir(), 1);
        assert_eq!(TickInput::new(true, true).dir(), 0, "Both keys cancel out");
    }

    #[test]
    fn test_score_increment_player() {
        let mut score = Score::new();
        assert_eq!(score.player, 0);
        assert_eq!(score.increment(Side::Player), 1);
        assert_eq!(score.increment(Side::Player), 2);
        assert_eq!(score.opponent, 0);
    }

    #[test]
    fn test_score_increment_opponent() {
        let mut score = Score::new();
        score.increment(Side::Opponent);
        assert_eq!(score.opponent, 1);
        assert_eq!(score.player, 0);
    }

    #[test]
    fn test_score_has_winner() {
        let mut score = Score::new();
        for _ in 0..9 {
            score.increment(Side::Opponent);
        }
        assert_eq!(score.has_winner(10), None, "No winner below threshold");

        score.increment(Side::Opponent);
        assert_eq!(score.has_winner(10), Some(Side::Opponent));
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(
            Outcome::winner(Side::Player).message(),
            "You Win! Press R to restart."
        );
        assert_eq!(
            Outcome::winner(Side::Opponent).message(),
            "AI Wins! Press R to restart."
        );
    }

    #[test]
    fn test_events_clear_and_merge() {
        let mut frame = Events::new();
        frame.ball_hit_wall = true;
        frame.opponent_scored = true;

        let mut total = Events::new();
        total.merge(&frame);
        assert!(total.ball_hit_wall);
        assert!(total.scored());

        frame.clear();
        assert_eq!(frame, Events::default());
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        use rand::Rng;
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        let xs: Vec<u32> = (0..4).map(|_| a.0.gen()).collect();
        let ys: Vec<u32> = (0..4).map(|_| b.0.gen()).collect();
        assert_eq!(xs, ys);
    }
}
