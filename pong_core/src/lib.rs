pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod geometry;
pub mod input;
pub mod match_state;
pub mod params;
pub mod resources;
pub mod snapshot;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use geometry::*;
pub use input::*;
pub use match_state::*;
pub use params::*;
pub use resources::*;
pub use snapshot::*;

use hecs::World;
use systems::*;

/// Advance the simulation by one tick
///
/// Does nothing while the match is paused or over. Otherwise the ball moves
/// first (walls, paddles, scoring), then the human paddle, then the AI.
pub fn step(
    world: &mut World,
    config: &Config,
    match_state: &mut MatchState,
    input: &InputState,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    if match_state.is_frozen() {
        return;
    }

    // 1. Ball: integrate, bounce, score
    move_ball(world);
    check_collisions(world, config, events);
    check_scoring(world, config, match_state, events, rng);

    // 2. Human paddle follows input
    move_human_paddle(world, input, config);

    // 3. AI paddle follows ball
    track_ball(world, config);
}

/// Helper to create a paddle entity, vertically centered
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::new(side, config),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
