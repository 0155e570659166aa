/// Game tuning parameters for Pong
///
/// Distances are logical pixels, speeds are pixels per tick.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 20.0; // gap between field edge and paddle
    pub const PADDLE_SPEED: f32 = 2.0;
    pub const PADDLE_START_DIR: i8 = 1; // both paddles drift down until a key is touched

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_X: f32 = 4.0;
    pub const BALL_SPEED_Y: f32 = 4.0;

    // Loop
    pub const TICK_MS: u64 = 16; // ~60 Hz
}
