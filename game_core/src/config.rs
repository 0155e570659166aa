use crate::Params;
use glam::Vec2;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub paddle_start_dir: i8,
    pub ball_radius: f32,
    pub ball_speed_x: f32,
    pub ball_speed_y: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_start_dir: Params::PADDLE_START_DIR,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_x: Params::BALL_SPEED_X,
            ball_speed_y: Params::BALL_SPEED_Y,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the left edge X of a paddle based on player ID
    pub fn paddle_x(&self, player_id: u8, field_width: f32) -> f32 {
        if player_id == 0 {
            self.paddle_margin // Left paddle
        } else {
            field_width - self.paddle_margin - self.paddle_width // Right paddle
        }
    }

    /// Serve velocity used at session start and on a full reset
    pub fn initial_ball_velocity(&self) -> Vec2 {
        Vec2::new(self.ball_speed_x, self.ball_speed_y)
    }
}
