use hecs::World;

use crate::components::*;

/// Keys the game reacts to; everything else maps to `Other`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    W,
    S,
    ArrowUp,
    ArrowDown,
    Escape,
    Other,
}

impl Key {
    /// Paddle driven by this key and the direction it pushes
    fn paddle_binding(self) -> Option<(u8, i8)> {
        match self {
            Key::W => Some((0, -1)),
            Key::S => Some((0, 1)),
            Key::ArrowUp => Some((1, -1)),
            Key::ArrowDown => Some((1, 1)),
            Key::Escape | Key::Other => None,
        }
    }
}

/// What a key event asks of the session beyond paddle intents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEffect {
    None,
    PaddleChanged,
    TogglePause,
}

/// Handle key down event. The most recent press wins; auto-repeat of the
/// pause key is dropped.
pub fn handle_key_down(world: &mut World, key: Key, repeat: bool) -> InputEffect {
    if key == Key::Escape {
        return if repeat {
            InputEffect::None
        } else {
            InputEffect::TogglePause
        };
    }

    match key.paddle_binding() {
        Some((player_id, dir)) => set_intent(world, player_id, dir),
        None => InputEffect::None,
    }
}

/// Handle key up event. Releasing either key of a paddle stops it.
pub fn handle_key_up(world: &mut World, key: Key) -> InputEffect {
    match key.paddle_binding() {
        Some((player_id, _)) => set_intent(world, player_id, 0),
        None => InputEffect::None,
    }
}

fn set_intent(world: &mut World, player_id: u8, dir: i8) -> InputEffect {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.player_id == player_id {
            intent.dir = dir;
            return InputEffect::PaddleChanged;
        }
    }
    InputEffect::None
}
