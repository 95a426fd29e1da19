use crate::{Ball, Config, Events, GameRng, MatchState, Side};
use hecs::World;

/// Check if ball left the court (scoring)
///
/// Leaving past the left edge is a point for the AI and the next serve
/// comes from the AI end; leaving past the right edge is a point for the
/// human, served from the human end. The serve happens even when the point
/// ends the match, so the frozen frame shows a freshly served ball.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    match_state: &mut MatchState,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.pos.x + config.ball_side < 0.0 {
            events.ai_scored = true;
            Side::Ai
        } else if ball.pos.x > config.court_width {
            events.human_scored = true;
            Side::Human
        } else {
            continue;
        };

        if match_state.award_point(scorer, config.win_score).is_some() {
            events.game_over = true;
        }

        ball.serve(scorer, config, rng);
    }
}
