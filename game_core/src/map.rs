use glam::Vec2;

use crate::Params;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn from_top_left_size(top_left: Vec2, size: Vec2) -> Self {
        Self {
            min: top_left,
            max: top_left + size,
        }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.max.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    /// Inclusive overlap of the vertical extents (touching counts)
    pub fn overlaps_vertically(&self, other: &Aabb) -> bool {
        other.top() <= self.bottom() && other.bottom() >= self.top()
    }
}

/// Playing field bounds, (0, 0) top-left to (width, height)
#[derive(Debug, Clone, Copy)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl Default for GameMap {
    fn default() -> Self {
        Self {
            width: Params::FIELD_WIDTH,
            height: Params::FIELD_HEIGHT,
        }
    }
}

impl GameMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Geometric centre, where the ball is served from
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Initial top edge for a paddle of the given height
    pub fn paddle_spawn_y(&self, paddle_height: f32) -> f32 {
        self.height / 2.0 - paddle_height / 2.0
    }

    /// Clamp a paddle's top edge so the whole paddle stays on the field
    pub fn clamp_paddle_top(&self, top: f32, paddle_height: f32) -> f32 {
        if top < 0.0 {
            0.0
        } else if top + paddle_height > self.height {
            self.height - paddle_height
        } else {
            top
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_spawn_is_center() {
        let map = GameMap::new();
        assert_eq!(map.ball_spawn(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_clamp_paddle_top() {
        let map = GameMap::new();
        assert_eq!(map.clamp_paddle_top(-5.0, 100.0), 0.0);
        assert_eq!(map.clamp_paddle_top(550.0, 100.0), 500.0);
        assert_eq!(map.clamp_paddle_top(250.0, 100.0), 250.0);
    }

    #[test]
    fn test_vertical_overlap_is_inclusive() {
        let paddle = Aabb::from_top_left_size(Vec2::new(20.0, 250.0), Vec2::new(10.0, 100.0));
        let touching = Aabb::from_center_size(Vec2::new(40.0, 360.0), Vec2::splat(20.0));
        let below = Aabb::from_center_size(Vec2::new(40.0, 361.0), Vec2::splat(20.0));
        assert!(paddle.overlaps_vertically(&touching));
        assert!(!paddle.overlaps_vertically(&below));
    }
}
