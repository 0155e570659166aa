use crate::{Ball, Config, Events, GameMap, Score};
use hecs::World;

/// Check if the ball reached a goal line (scoring)
pub fn check_scoring(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Both lines are tested against the same pre-reset box
        let ball_box = ball.bounds(config.ball_radius);

        if ball_box.left() <= 0.0 {
            // Right player scores
            score.increment_right();
            events.right_scored = true;
            log::info!("Right player scores: {}", score);

            ball.reset(map.ball_spawn());
        }

        if ball_box.right() >= map.width {
            // Left player scores
            score.increment_left();
            events.left_scored = true;
            log::info!("Left player scores: {}", score);

            ball.reset(map.ball_spawn());
        }
    }
}
