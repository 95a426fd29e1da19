//! Match lifecycle: scores, pause, game over, rematch

use log::{debug, info};
use serde::Serialize;

use crate::{Score, Side};

pub const HUMAN_WIN_MESSAGE: &str = "You Win!";
pub const AI_WIN_MESSAGE: &str = "Computer Wins!";
pub const REPLAY_PROMPT: &str = "Press Enter to play again";

/// Match phases
///
/// Serving is immediate: a served ball is already in play, so there is no
/// separate serving phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchPhase {
    Playing,
    /// Frozen by the player; scores and messages untouched
    Paused,
    /// Someone reached the win score; only a reset leaves this phase
    GameOver,
}

/// Everything about the match that is not an entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    pub score: Score,
    pub phase: MatchPhase,
    pub message: Option<String>,
    pub sub_message: Option<String>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    pub fn new() -> Self {
        Self {
            score: Score::new(),
            phase: MatchPhase::Playing,
            message: None,
            sub_message: None,
        }
    }

    /// True when ticks must not advance entities (paused or game over)
    pub fn is_frozen(&self) -> bool {
        self.phase != MatchPhase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == MatchPhase::GameOver
    }

    /// Playing ⇄ Paused. Has no effect once the match is over.
    pub fn toggle_pause(&mut self) -> bool {
        let next = match self.phase {
            MatchPhase::Playing => MatchPhase::Paused,
            MatchPhase::Paused => MatchPhase::Playing,
            MatchPhase::GameOver => return false,
        };
        debug!("Match {:?} -> {:?}", self.phase, next);
        self.phase = next;
        true
    }

    /// A new match may only start after a finished one, not from a pause
    pub fn can_reset(&self, win_score: u8) -> bool {
        self.is_game_over() && self.score.has_winner(win_score).is_some()
    }

    /// Credit a point to `side`. Returns the winner if this point ends the match.
    pub fn award_point(&mut self, side: Side, win_score: u8) -> Option<Side> {
        let total = self.score.increment(side);
        debug!(
            "{:?} scores ({} - {})",
            side, self.score.human, self.score.ai
        );

        if total < win_score {
            return None;
        }

        let message = match side {
            Side::Human => HUMAN_WIN_MESSAGE,
            Side::Ai => AI_WIN_MESSAGE,
        };
        self.phase = MatchPhase::GameOver;
        self.message = Some(message.to_string());
        self.sub_message = Some(REPLAY_PROMPT.to_string());
        info!(
            "Game over: {:?} wins {} - {}",
            side, self.score.human, self.score.ai
        );
        Some(side)
    }

    /// Zero the scores, clear messages, and return to play
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = MatchState::new();
        assert_eq!(state.phase, MatchPhase::Playing);
        assert!(!state.is_frozen());
        assert_eq!(state.score, Score::new());
        assert!(state.message.is_none() && state.sub_message.is_none());
    }

    #[test]
    fn test_pause_round_trip_keeps_score() {
        let mut state = MatchState::new();
        state.award_point(Side::Human, 11);

        assert!(state.toggle_pause());
        assert_eq!(state.phase, MatchPhase::Paused);
        assert!(state.is_frozen());
        assert!(!state.can_reset(11), "A pause is not a finished match");

        assert!(state.toggle_pause());
        assert_eq!(state.phase, MatchPhase::Playing);
        assert_eq!(state.score.human, 1);
    }

    #[test]
    fn test_award_point_below_win_score() {
        let mut state = MatchState::new();
        assert_eq!(state.award_point(Side::Ai, 11), None);
        assert_eq!(state.score.ai, 1);
        assert_eq!(state.phase, MatchPhase::Playing);
    }

    #[test]
    fn test_eleventh_point_ends_match() {
        let mut state = MatchState::new();
        for _ in 0..10 {
            state.award_point(Side::Human, 11);
        }
        assert_eq!(state.award_point(Side::Human, 11), Some(Side::Human));
        assert!(state.is_game_over());
        assert_eq!(state.message.as_deref(), Some(HUMAN_WIN_MESSAGE));
        assert_eq!(state.sub_message.as_deref(), Some(REPLAY_PROMPT));
        assert!(state.can_reset(11));
    }

    #[test]
    fn test_pause_ignored_after_game_over() {
        let mut state = MatchState::new();
        for _ in 0..11 {
            state.award_point(Side::Ai, 11);
        }
        assert!(!state.toggle_pause());
        assert_eq!(state.phase, MatchPhase::GameOver);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = MatchState::new();
        for _ in 0..11 {
            state.award_point(Side::Ai, 11);
        }
        state.award_point(Side::Human, 11);
        state.reset();
        assert_eq!(state, MatchState::new());
    }
}
