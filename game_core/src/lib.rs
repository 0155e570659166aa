pub mod components;
pub mod config;
pub mod map;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use session::*;
pub use systems::{InputEffect, Key};

use hecs::World;
use systems::*;

/// Run one deterministic Pong tick
pub fn step(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Move paddles based on intents
    move_paddles(world, map, config);

    // 2. Move ball
    move_ball(world);

    // 3. Check collisions (walls, left paddle, right paddle)
    check_collisions(world, map, config, events);

    // 4. Check scoring (left goal, then right goal)
    check_scoring(world, map, config, score, events);
}

/// Helper to create a paddle entity moving in `dir` (-1 up, 0 still, 1 down)
pub fn create_paddle(world: &mut World, player_id: u8, y: f32, dir: i8) -> hecs::Entity {
    world.spawn((Paddle::new(player_id, y), PaddleIntent::new(dir)))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
