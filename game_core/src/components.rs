use glam::Vec2;

use crate::map::Aabb;

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub player_id: u8, // 0 = left, 1 = right
    pub y: f32,        // Top edge (clamped to field)
}

impl Paddle {
    pub fn new(player_id: u8, y: f32) -> Self {
        Self { player_id, y }
    }

    pub fn bounds(&self, x: f32, width: f32, height: f32) -> Aabb {
        Aabb::from_top_left_size(Vec2::new(x, self.y), Vec2::new(width, height))
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // Centre
    pub vel: Vec2, // Pixels per tick
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    pub fn bounds(&self, radius: f32) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(radius * 2.0))
    }

    /// Recentre after a goal, sending the ball back the way it came.
    /// Vertical velocity is left exactly as it was.
    pub fn reset(&mut self, center: Vec2) {
        self.pos = center;
        self.vel.x = -self.vel.x;
    }

    /// Full reinitialisation: centre plus the original serve velocity
    pub fn serve(&mut self, center: Vec2, vel: Vec2) {
        self.pos = center;
        self.vel = vel;
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new(dir: i8) -> Self {
        Self { dir }
    }
}
