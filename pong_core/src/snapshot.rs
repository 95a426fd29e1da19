//! Read-only view of a game for renderers
//!
//! Renderers redraw from scratch every frame: court fill, net, then the
//! drawables listed here.

use hecs::World;
use serde::Serialize;

use crate::geometry::Rect;
use crate::params::Params;
use crate::{Ball, Config, MatchPhase, MatchState, Paddle, Score, Side};

/// Something a renderer has to draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Drawable {
    Paddle { side: Side, rect: Rect },
    Ball { rect: Rect },
    Score { side: Side, points: u8 },
    Message { text: String, primary: bool },
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub ball: Option<Rect>,
    pub human: Option<Rect>,
    pub ai: Option<Rect>,
    pub score: Score,
    pub phase: MatchPhase,
    pub message: Option<String>,
    pub sub_message: Option<String>,
}

impl Snapshot {
    pub fn capture(world: &World, match_state: &MatchState, config: &Config) -> Self {
        let ball = world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| ball.rect(config));

        let mut human = None;
        let mut ai = None;
        for (_e, paddle) in world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Human => human = Some(paddle.rect(config)),
                Side::Ai => ai = Some(paddle.rect(config)),
            }
        }

        Self {
            ball,
            human,
            ai,
            score: match_state.score,
            phase: match_state.phase,
            message: match_state.message.clone(),
            sub_message: match_state.sub_message.clone(),
        }
    }

    /// Flatten into draw order: paddles, ball, scores, messages
    pub fn drawables(&self) -> Vec<Drawable> {
        let mut items = Vec::with_capacity(7);

        if let Some(rect) = self.human {
            items.push(Drawable::Paddle {
                side: Side::Human,
                rect,
            });
        }
        if let Some(rect) = self.ai {
            items.push(Drawable::Paddle { side: Side::Ai, rect });
        }
        if let Some(rect) = self.ball {
            items.push(Drawable::Ball { rect });
        }

        for side in [Side::Human, Side::Ai] {
            items.push(Drawable::Score {
                side,
                points: self.score.get(side),
            });
        }

        if let Some(text) = &self.message {
            items.push(Drawable::Message {
                text: text.clone(),
                primary: true,
            });
        }
        if let Some(text) = &self.sub_message {
            items.push(Drawable::Message {
                text: text.clone(),
                primary: false,
            });
        }

        items
    }
}

/// Dashes of the center net
///
/// The court height is split into equal intervals and each dash covers the
/// middle half of its interval.
pub fn net_dashes(config: &Config) -> Vec<Rect> {
    let gap = config.court_height / Params::NET_SEGMENTS;
    let x = (config.court_width - Params::NET_WIDTH) / 2.0;

    (0..Params::NET_SEGMENTS as usize)
        .map(|i| Rect::new(x, i as f32 * gap + gap * 0.25, Params::NET_WIDTH, gap * 0.5))
        .collect()
}
