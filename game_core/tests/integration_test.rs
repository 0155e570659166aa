use game_core::*;
use glam::Vec2;

fn set_ball(session: &mut Session, pos: Vec2, vel: Vec2) {
    for (_e, ball) in session.world.query_mut::<&mut Ball>() {
        ball.pos = pos;
        ball.vel = vel;
    }
}

fn remove_paddles(session: &mut Session) {
    let paddles: Vec<hecs::Entity> = session
        .world
        .query::<&Paddle>()
        .iter()
        .map(|(e, _)| e)
        .collect();
    for entity in paddles {
        session.world.despawn(entity).unwrap();
    }
}

#[test]
fn test_pause_freezes_state() {
    let mut session = Session::default();
    session.key_down(Key::S, false);
    session.key_down(Key::ArrowUp, false);
    for _ in 0..5 {
        session.tick();
    }

    session.key_down(Key::Escape, false);
    let ball = session.ball().unwrap();
    let left = session.paddle(0).unwrap().y;
    let right = session.paddle(1).unwrap().y;
    let score = session.score;

    for _ in 0..100 {
        session.tick();
    }

    assert_eq!(session.ball().unwrap().pos, ball.pos);
    assert_eq!(session.ball().unwrap().vel, ball.vel);
    assert_eq!(session.paddle(0).unwrap().y, left);
    assert_eq!(session.paddle(1).unwrap().y, right);
    assert_eq!(session.score, score);

    // Resuming picks up where it left off
    session.key_down(Key::Escape, false);
    session.tick();
    assert_eq!(session.ball().unwrap().pos, ball.pos + ball.vel);
}

#[test]
fn test_paddles_stay_on_field() {
    let mut session = Session::new(
        GameMap::new(),
        Config {
            paddle_speed: 37.0,
            ..Config::new()
        },
    );

    session.key_down(Key::W, false);
    session.key_down(Key::ArrowDown, false);
    for _ in 0..200 {
        session.tick();
        let left = session.paddle(0).unwrap().y;
        let right = session.paddle(1).unwrap().y;
        for y in [left, right] {
            assert!(y >= 0.0);
            assert!(y + session.config.paddle_height <= session.map.height);
        }
    }
    assert_eq!(session.paddle(0).unwrap().y, 0.0);
    assert_eq!(session.paddle(1).unwrap().y, 500.0);
}

#[test]
fn test_ball_reflects_off_top_boundary() {
    let mut session = Session::default();
    // One tick from now the ball's top edge sits at y = 0
    set_ball(&mut session, Vec2::new(400.0, 14.0), Vec2::new(4.0, -4.0));

    session.tick();

    let ball = session.ball().unwrap();
    assert_eq!(ball.vel.y, 4.0);
    assert!(session.events.ball_hit_wall);
}

#[test]
fn test_ball_reflects_off_left_paddle() {
    let mut session = Session::default();
    // Left paddle spans x 20..30, y 250..350
    set_ball(&mut session, Vec2::new(44.0, 296.0), Vec2::new(-4.0, 4.0));

    session.tick();

    let ball = session.ball().unwrap();
    assert!(ball.vel.x > 0.0);
    assert_eq!(session.score, Score::new());
}

#[test]
fn test_left_goal_scores_for_right_player() {
    let mut session = Session::default();
    remove_paddles(&mut session);
    set_ball(&mut session, Vec2::new(14.0, 200.0), Vec2::new(-4.0, 4.0));

    session.tick();

    assert_eq!(session.score.right, 1);
    assert_eq!(session.score.left, 0);
    let ball = session.ball().unwrap();
    assert_eq!(ball.pos, session.map.ball_spawn());
    assert_eq!(ball.vel, Vec2::new(4.0, 4.0));
}

#[test]
fn test_paddle_hit_and_goal_in_same_tick() {
    let mut session = Session::default();
    // Ball overlapping the left paddle and the goal line at once
    set_ball(&mut session, Vec2::new(14.0, 300.0), Vec2::new(-4.0, 4.0));

    session.tick();

    // Paddle flip then goal flip: back to moving left
    let ball = session.ball().unwrap();
    assert!(session.events.ball_hit_paddle);
    assert!(session.events.right_scored);
    assert_eq!(ball.vel.x, -4.0);
    assert_eq!(ball.pos, session.map.ball_spawn());
}

#[test]
fn test_reset_restores_initial_state() {
    let mut session = Session::default();
    session.score = Score { left: 9, right: 4 };
    set_ball(&mut session, Vec2::new(123.0, 77.0), Vec2::new(-4.0, -4.0));
    session.toggle_pause();

    assert_eq!(session.apply_menu(MenuAction::Reset), MenuOutcome::Continue);

    assert_eq!(session.score, Score::new());
    assert!(!session.is_paused());
    assert!(!session.menu_visible());
    let ball = session.ball().unwrap();
    assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
    assert_eq!(ball.vel, session.config.initial_ball_velocity());
}

#[test]
fn test_untouched_paddles_drift_down() {
    let mut session = Session::default();
    for _ in 0..10 {
        session.tick();
    }
    assert_eq!(session.paddle(0).unwrap().y, 270.0);
    assert_eq!(session.paddle(1).unwrap().y, 270.0);

    // Any release stops the drift for that paddle only
    session.key_up(Key::W);
    session.tick();
    assert_eq!(session.paddle(0).unwrap().y, 270.0);
    assert_eq!(session.paddle(1).unwrap().y, 272.0);

    // Left alone, the drift ends clamped at the bottom
    for _ in 0..200 {
        session.tick();
    }
    assert_eq!(session.paddle(1).unwrap().y, 500.0);
}

#[test]
fn test_hold_down_then_release() {
    let mut session = Session::default();
    let n = 30;

    session.key_down(Key::S, false);
    let mut last = session.paddle(0).unwrap().y;
    for _ in 0..n {
        session.tick();
        let y = session.paddle(0).unwrap().y;
        assert!(y > last, "Paddle should keep moving down while held");
        last = y;
    }

    session.key_up(Key::S);
    for _ in 0..n {
        session.tick();
        assert_eq!(session.paddle(0).unwrap().y, last);
    }
    assert_eq!(last, 250.0 + n as f32 * session.config.paddle_speed);
}

#[test]
fn test_ball_at_right_edge_scores_for_left_player() {
    let mut session = Session::default();
    remove_paddles(&mut session);
    // After one tick the right edge lands exactly on x = 800
    set_ball(&mut session, Vec2::new(786.0, 300.0), Vec2::new(4.0, 4.0));

    session.tick();

    assert_eq!(session.score.left, 1);
    assert_eq!(session.score.right, 0);
    assert_eq!(session.score.to_string(), "1 : 0");
    assert_eq!(session.ball().unwrap().pos, session.map.ball_spawn());
}

#[test]
fn test_long_rally_keeps_invariants() {
    let mut session = Session::default();
    for _ in 0..10_000 {
        session.tick();
        let ball = session.ball().unwrap();
        assert_eq!(ball.vel.x.abs(), session.config.ball_speed_x);
        assert_eq!(ball.vel.y.abs(), session.config.ball_speed_y);
    }
}
