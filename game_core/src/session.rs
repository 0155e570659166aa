//! A single running match: the world plus score, pause flag and tuning.

use hecs::World;

use crate::systems::{handle_key_down, handle_key_up, InputEffect, Key};
use crate::{create_ball, create_paddle, step, Ball, Config, Events, GameMap, Paddle, Score};

/// Buttons offered by the pause menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Reset,
    Quit,
}

/// What the host should do after a menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    Continue,
    Exit,
}

pub struct Session {
    pub world: World,
    pub map: GameMap,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    paused: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameMap::new(), Config::new())
    }
}

impl Session {
    pub fn new(map: GameMap, config: Config) -> Self {
        let mut world = World::new();

        // Create paddles
        let paddle_y = map.paddle_spawn_y(config.paddle_height);
        create_paddle(&mut world, 0, paddle_y, config.paddle_start_dir);
        create_paddle(&mut world, 1, paddle_y, config.paddle_start_dir);

        // Create ball
        create_ball(&mut world, map.ball_spawn(), config.initial_ball_velocity());

        Self {
            world,
            map,
            config,
            score: Score::new(),
            events: Events::new(),
            paused: false,
        }
    }

    /// Advance one tick. Returns false when paused and nothing moved.
    pub fn tick(&mut self) -> bool {
        if self.paused {
            return false;
        }
        step(
            &mut self.world,
            &self.map,
            &self.config,
            &mut self.score,
            &mut self.events,
        );
        true
    }

    pub fn key_down(&mut self, key: Key, repeat: bool) {
        if handle_key_down(&mut self.world, key, repeat) == InputEffect::TogglePause {
            self.toggle_pause();
        }
    }

    pub fn key_up(&mut self, key: Key) {
        handle_key_up(&mut self.world, key);
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
        self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// The pause menu is shown exactly while the session is paused
    pub fn menu_visible(&self) -> bool {
        self.paused
    }

    pub fn apply_menu(&mut self, action: MenuAction) -> MenuOutcome {
        match action {
            MenuAction::Reset => {
                self.reset();
                MenuOutcome::Continue
            }
            MenuAction::Quit => {
                log::info!("Quit requested from pause menu");
                self.paused = false;
                MenuOutcome::Exit
            }
        }
    }

    /// Full reinitialisation: unpause, zero the score and re-serve the ball
    /// with its starting velocity. Paddles keep their position and intent.
    pub fn reset(&mut self) {
        self.paused = false;
        self.score.clear();
        self.events.clear();

        let (center, vel) = (self.map.ball_spawn(), self.config.initial_ball_velocity());
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.serve(center, vel);
        }
        log::info!("Game reset");
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, player_id: u8) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.player_id == player_id)
            .map(|(_e, p)| *p)
    }

    /// Left edge X of a paddle on this session's field
    pub fn paddle_x(&self, player_id: u8) -> f32 {
        self.config.paddle_x(player_id, self.map.width)
    }
}
