use log::trace;

use crate::params::Params;
use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Reflect the ball off the top or bottom edge
///
/// The ball is pushed back inside by twice its penetration so the bounce
/// looks elastic instead of sticking to the edge. Only `vel.y` flips.
pub fn bounce_off_walls(ball: &mut Ball, config: &Config) -> bool {
    let bottom = config.court_height - config.ball_side;
    let offset = if ball.pos.y < 0.0 {
        -ball.pos.y
    } else if ball.pos.y > bottom {
        bottom - ball.pos.y
    } else {
        return false;
    };

    ball.pos.y += 2.0 * offset;
    ball.vel.y = -ball.vel.y;
    true
}

/// Deflect the ball off `paddle` if they overlap.
///
/// Returns `None` on a miss, otherwise whether the return was a smash.
/// The outgoing angle depends only on where the ball struck: the middle
/// sends it back level, the ends at up to 45°, and anything steeper than
/// 36° comes back at smash speed.
pub fn deflect_off_paddle(ball: &mut Ball, paddle: &Paddle, config: &Config) -> Option<bool> {
    if !paddle.rect(config).intersects(&ball.rect(config)) {
        return None;
    }

    ball.pos.x = config.ball_flush_x(paddle.side);

    // 0 = ball just clipping the top, 1 = just clipping the bottom
    let n = (ball.pos.y + config.ball_side - paddle.y) / (config.paddle_height + config.ball_side);
    let phi = Params::MAX_BOUNCE_ANGLE * (2.0 * n - 1.0);

    let smash = phi.abs() > Params::SMASH_THRESHOLD;
    let speed = if smash {
        config.ball_speed * config.smash_multiplier
    } else {
        config.ball_speed
    };

    ball.vel.x = paddle.side.sign() * speed * phi.cos();
    ball.vel.y = speed * phi.sin();
    Some(smash)
}

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data without holding borrows
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if bounce_off_walls(ball, config) {
            events.ball_hit_wall = true;
        }

        // Only the paddle the ball is travelling toward can be hit
        let facing = if ball.vel.x < 0.0 { Side::Human } else { Side::Ai };
        let Some(paddle) = paddles.iter().find(|p| p.side == facing) else {
            continue;
        };

        if let Some(smash) = deflect_off_paddle(ball, paddle, config) {
            trace!(
                "Ball hit {:?} paddle at y={:.1}, vel=({:.2}, {:.2}){}",
                facing,
                ball.pos.y,
                ball.vel.x,
                ball.vel.y,
                if smash { " SMASH" } else { "" }
            );
            events.ball_hit_paddle = true;
            events.smash |= smash;
        }
    }
}
