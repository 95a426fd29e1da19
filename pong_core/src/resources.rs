use serde::Serialize;

use crate::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub human: u8,
    pub ai: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Human => self.human,
            Side::Ai => self.ai,
        }
    }

    /// Add a point for `side`, returning its new total
    pub fn increment(&mut self, side: Side) -> u8 {
        let counter = match side {
            Side::Human => &mut self.human,
            Side::Ai => &mut self.ai,
        };
        *counter = counter.saturating_add(1);
        *counter
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.human >= win_score {
            Some(Side::Human)
        } else if self.ai >= win_score {
            Some(Side::Ai)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: bool,
    pub smash: bool,
    pub human_scored: bool,
    pub ai_scored: bool,
    pub game_over: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn scored(&self) -> Option<Side> {
        if self.human_scored {
            Some(Side::Human)
        } else if self.ai_scored {
            Some(Side::Ai)
        } else {
            None
        }
    }
}
