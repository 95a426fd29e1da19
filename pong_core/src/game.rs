//! One human-vs-AI match with everything it owns

use hecs::World;
use log::{debug, info};

use crate::{
    create_ball, create_paddle, step, Ball, Config, ConfigError, Events, GameRng, InputState,
    MatchPhase, MatchState, Paddle, Side, Signal, Snapshot,
};

pub struct Game {
    pub world: World,
    pub config: Config,
    pub match_state: MatchState,
    pub events: Events,
    pub rng: GameRng,
    pub ticks: u64,
}

impl Game {
    /// Set up paddles and serve the first ball from the human end
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        create_paddle(&mut world, Side::Human, &config);
        create_paddle(&mut world, Side::Ai, &config);

        let mut ball = Ball::new(glam::Vec2::ZERO, glam::Vec2::ZERO);
        ball.serve(Side::Human, &config, &mut rng);
        create_ball(&mut world, ball.pos, ball.vel);

        info!(
            "Match started on {}x{} court, first to {}",
            config.court_width, config.court_height, config.win_score
        );

        Ok(Self {
            world,
            config,
            match_state: MatchState::new(),
            events: Events::new(),
            rng,
            ticks: 0,
        })
    }

    /// Run one simulation tick and report what happened in it
    pub fn tick(&mut self, input: &InputState) -> &Events {
        let frozen = self.match_state.is_frozen();

        step(
            &mut self.world,
            &self.config,
            &mut self.match_state,
            input,
            &mut self.events,
            &mut self.rng,
        );

        if !frozen {
            self.ticks = self.ticks.wrapping_add(1);
        }
        &self.events
    }

    /// React to an edge-triggered control. Returns false when the signal
    /// does not apply in the current phase.
    pub fn handle_signal(&mut self, signal: Signal) -> bool {
        match (signal, self.match_state.phase) {
            (Signal::Pause, _) => self.match_state.toggle_pause(),
            (Signal::Confirm, MatchPhase::Paused) => self.match_state.toggle_pause(),
            (Signal::Confirm, MatchPhase::GameOver) => self.reset_match(),
            (Signal::Confirm, MatchPhase::Playing) => false,
        }
    }

    /// Start a new match. Only valid once the previous one has a winner.
    pub fn reset_match(&mut self) -> bool {
        if !self.match_state.can_reset(self.config.win_score) {
            debug!("Ignoring reset in phase {:?}", self.match_state.phase);
            return false;
        }

        info!(
            "Restarting match after {} - {}",
            self.match_state.score.human, self.match_state.score.ai
        );

        self.match_state.reset();
        self.events.clear();
        self.ticks = 0;

        let center_y = self.config.paddle_center_y();
        for (_e, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.y = center_y;
        }
        for (_e, ball) in self.world.query_mut::<&mut Ball>() {
            ball.serve(Side::Human, &self.config, &mut self.rng);
        }
        true
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.world, &self.match_state, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball(game: &Game) -> Ball {
        game.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| *b)
            .expect("ball should exist")
    }

    #[test]
    fn test_new_game_serves_from_human() {
        let game = Game::new(Config::new(), 1).expect("default config is valid");
        let b = ball(&game);
        assert_eq!(b.pos.x, 40.0);
        assert!(b.vel.x > 0.0);
        assert_eq!(game.match_state.phase, MatchPhase::Playing);
    }

    #[test]
    fn test_new_game_rejects_invalid_config() {
        let config = Config {
            court_height: 50.0,
            ..Config::default()
        };
        assert!(Game::new(config, 1).is_err());
    }

    #[test]
    fn test_tick_advances_ball() {
        let mut game = Game::new(Config::new(), 1).expect("valid");
        let before = ball(&game);
        game.tick(&InputState::new());
        let after = ball(&game);
        assert_eq!(after.pos, before.pos + before.vel);
        assert_eq!(game.ticks, 1);
    }

    #[test]
    fn test_tick_counter_wraps() {
        let mut game = Game::new(Config::new(), 1).expect("valid");
        game.ticks = u64::MAX;
        game.tick(&InputState::new());
        assert_eq!(game.ticks, 0);
    }

    #[test]
    fn test_pause_freezes_everything() {
        let mut game = Game::new(Config::new(), 1).expect("valid");
        assert!(game.handle_signal(Signal::Pause));
        let before = game.snapshot();

        game.tick(&InputState { up: true, down: false });
        assert_eq!(game.snapshot(), before);
        assert_eq!(game.ticks, 0);

        assert!(game.handle_signal(Signal::Confirm), "Confirm resumes from pause");
        assert_eq!(game.match_state.phase, MatchPhase::Playing);
    }

    #[test]
    fn test_confirm_ignored_while_playing() {
        let mut game = Game::new(Config::new(), 1).expect("valid");
        assert!(!game.handle_signal(Signal::Confirm));
        assert!(!game.reset_match());
    }
}
