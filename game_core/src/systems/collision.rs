use crate::{Ball, Config, Events, GameMap, Paddle};
use hecs::World;

/// Check ball collisions with walls and paddles.
///
/// The ball box is sampled once, after movement. Walls, then the left paddle,
/// then the right paddle are tested unconditionally, and every hit flips the
/// matching velocity component without moving the ball out of contact.
pub fn check_collisions(world: &mut World, map: &GameMap, config: &Config, events: &mut Events) {
    // First, collect ball and paddle data without holding borrows
    let paddles: Vec<(u8, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.player_id, p.y))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let ball_box = ball.bounds(config.ball_radius);

        // Top/bottom walls
        if ball_box.top() <= 0.0 || ball_box.bottom() >= map.height {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
            log::trace!("ball hit wall at y={}", ball.pos.y);
        }

        // Left paddle before right paddle
        for player_id in [0u8, 1] {
            let Some(&(_, paddle_y)) = paddles.iter().find(|(id, _)| *id == player_id) else {
                continue;
            };
            let paddle_box = Paddle::new(player_id, paddle_y).bounds(
                config.paddle_x(player_id, map.width),
                config.paddle_width,
                config.paddle_height,
            );

            let reaches_paddle = if player_id == 0 {
                ball_box.left() <= paddle_box.right()
            } else {
                ball_box.right() >= paddle_box.left()
            };

            if reaches_paddle && paddle_box.overlaps_vertically(&ball_box) {
                ball.vel.x = -ball.vel.x;
                events.ball_hit_paddle = true;
                log::trace!("ball hit paddle {}", player_id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    fn setup_world() -> (hecs::World, Config, GameMap, Events) {
        let world = hecs::World::new();
        let config = Config::new();
        let map = GameMap::new();
        let events = Events::new();
        (world, config, map, events)
    }

    fn ball_vel(world: &World) -> Vec2 {
        let mut query = world.query::<&Ball>();
        query.iter().next().map(|(_e, b)| b.vel).unwrap()
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, map, mut events) = setup_world();
        let ball_pos = Vec2::new(400.0, config.ball_radius); // Touching top wall
        let vel = Vec2::new(4.0, -4.0);
        create_ball(&mut world, ball_pos, vel);

        check_collisions(&mut world, &map, &config, &mut events);

        assert_eq!(ball_vel(&world), Vec2::new(4.0, 4.0));
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
    }

    #[test]
    fn test_wall_hit_does_not_correct_position() {
        let (mut world, config, map, mut events) = setup_world();
        let ball_pos = Vec2::new(400.0, 6.0); // Overlapping top wall
        let ball = create_ball(&mut world, ball_pos, Vec2::new(4.0, -4.0));

        check_collisions(&mut world, &map, &config, &mut events);

        assert_eq!(world.get::<&Ball>(ball).unwrap().pos, ball_pos);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, map, mut events) = setup_world();
        let ball_pos = Vec2::new(400.0, map.height - config.ball_radius + 1.0);
        create_ball(&mut world, ball_pos, Vec2::new(-4.0, 4.0));

        check_collisions(&mut world, &map, &config, &mut events);

        assert_eq!(ball_vel(&world), Vec2::new(-4.0, -4.0));
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, 0, 250.0, 0);

        // Ball left edge exactly on the paddle's right edge (x = 30)
        let ball_pos = Vec2::new(30.0 + config.ball_radius, 300.0);
        create_ball(&mut world, ball_pos, Vec2::new(-4.0, 4.0));

        check_collisions(&mut world, &map, &config, &mut events);

        assert!(ball_vel(&world).x > 0.0, "Ball should bounce right");
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, 1, 250.0, 0);

        // Right paddle left edge is x = 770
        let ball_pos = Vec2::new(770.0 - config.ball_radius, 260.0);
        create_ball(&mut world, ball_pos, Vec2::new(4.0, 4.0));

        check_collisions(&mut world, &map, &config, &mut events);

        assert!(ball_vel(&world).x < 0.0, "Ball should bounce left");
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_grazing_paddle_corner_counts() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, 0, 250.0, 0);

        // Ball bottom edge touches the paddle's top edge
        create_ball(&mut world, Vec2::new(35.0, 240.0), Vec2::new(-4.0, 4.0));

        check_collisions(&mut world, &map, &config, &mut events);

        assert_eq!(ball_vel(&world).x, 4.0);
    }

    #[test]
    fn test_ball_passing_beside_paddle_is_not_reflected() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, 0, 250.0, 0);

        // Same column as the paddle, well below it
        create_ball(&mut world, Vec2::new(25.0, 500.0), Vec2::new(-4.0, 4.0));

        check_collisions(&mut world, &map, &config, &mut events);

        assert_eq!(ball_vel(&world).x, -4.0);
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_behind_paddle_flips_regardless_of_direction() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, 0, 250.0, 0);

        // Ball already moving away from the paddle still overlaps it
        create_ball(&mut world, Vec2::new(35.0, 300.0), Vec2::new(4.0, 4.0));

        check_collisions(&mut world, &map, &config, &mut events);

        assert_eq!(ball_vel(&world).x, -4.0);
    }

    #[test]
    fn test_wall_and_paddle_in_same_tick() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, 0, 0.0, 0);

        create_ball(&mut world, Vec2::new(38.0, 8.0), Vec2::new(-4.0, -4.0));

        check_collisions(&mut world, &map, &config, &mut events);

        assert_eq!(ball_vel(&world), Vec2::new(4.0, 4.0));
        assert!(events.ball_hit_wall && events.ball_hit_paddle);
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, 0, 250.0, 0);

        // Should not panic or error
        check_collisions(&mut world, &map, &config, &mut events);

        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }
}
