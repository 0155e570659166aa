//! Per-frame instance data built from the session, no GPU involved.

use game_core::Session;

use crate::renderer::resources::InstanceData;

pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Everything the shape pass draws this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneInstances {
    pub left_paddle: InstanceData,
    pub right_paddle: InstanceData,
    pub ball: InstanceData,
}

impl SceneInstances {
    pub fn from_session(session: &Session) -> Self {
        let config = &session.config;

        let paddle = |player_id: u8| {
            // Hidden off-field if the paddle entity is missing
            let top = session
                .paddle(player_id)
                .map_or(-config.paddle_height, |p| p.y);
            InstanceData {
                transform: [
                    session.paddle_x(player_id) + config.paddle_width / 2.0,
                    top + config.paddle_height / 2.0,
                    config.paddle_width,
                    config.paddle_height,
                ],
                tint: WHITE,
            }
        };

        let ball_pos = session
            .ball()
            .map_or(session.map.ball_spawn(), |ball| ball.pos);
        let diameter = config.ball_radius * 2.0;

        Self {
            left_paddle: paddle(0),
            right_paddle: paddle(1),
            ball: InstanceData {
                transform: [ball_pos.x, ball_pos.y, diameter, diameter],
                tint: WHITE,
            },
        }
    }
}
