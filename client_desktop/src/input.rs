//! Keyboard input handling

use game_core::Key;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Map a physical key to a game key. Physical codes keep `w`/`s` on the
/// same place regardless of layout.
pub fn map_key(key: PhysicalKey) -> Key {
    match key {
        PhysicalKey::Code(code) => map_key_code(code),
        PhysicalKey::Unidentified(_) => Key::Other,
    }
}

fn map_key_code(code: KeyCode) -> Key {
    match code {
        KeyCode::KeyW => Key::W,
        KeyCode::KeyS => Key::S,
        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::Escape => Key::Escape,
        _ => Key::Other,
    }
}
