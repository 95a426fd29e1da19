use crate::{Ball, Config, InputState, Paddle, Side};
use hecs::World;

/// Move ball by one tick of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

/// Apply keyboard input to the human paddle
///
/// Up and down are applied independently, so holding both cancels out.
pub fn move_human_paddle(world: &mut World, input: &InputState, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Human {
            continue;
        }
        if input.up {
            paddle.y -= config.paddle_speed;
        }
        if input.down {
            paddle.y += config.paddle_speed;
        }
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}

/// Ease the AI paddle toward the ball's height
///
/// Covers a fixed fraction of the remaining distance each tick. The lag
/// is what makes the AI beatable.
pub fn track_ball(world: &mut World, config: &Config) {
    let ball_y = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| ball.pos.y)
    };

    let Some(ball_y) = ball_y else {
        return; // No ball in world
    };

    // Line the paddle's center up with the ball's center
    let target = ball_y - (config.paddle_height - config.ball_side) / 2.0;

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Ai {
            continue;
        }
        paddle.y += (target - paddle.y) * config.ai_tracking;
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}
