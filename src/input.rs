//! Keyboard input for the spaceship and the application.
//!
//! Bevy accumulates key presses and releases in `ButtonInput<KeyCode>`.
//! The simulation never reads that resource directly: once per tick it
//! takes a [`HeldKeys`] snapshot, so every updater in the tick sees the
//! same key state.

use bevy::app::AppExit;
use bevy::prelude::*;

/// Logical ship control keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShipKey {
    Up,
    Down,
    Left,
    Right,
}

impl ShipKey {
    pub const ALL: [ShipKey; 4] = [ShipKey::Up, ShipKey::Down, ShipKey::Left, ShipKey::Right];

    /// Physical key bound to this control.
    pub fn key_code(&self) -> KeyCode {
        match self {
            ShipKey::Up => KeyCode::ArrowUp,
            ShipKey::Down => KeyCode::ArrowDown,
            ShipKey::Left => KeyCode::ArrowLeft,
            ShipKey::Right => KeyCode::ArrowRight,
        }
    }
}

/// Set of ship keys held at the instant a tick samples input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    /// No keys held.
    pub const NONE: HeldKeys = HeldKeys {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    /// Snapshot the currently pressed ship keys.
    pub fn snapshot(keys: &ButtonInput<KeyCode>) -> Self {
        Self {
            up: keys.pressed(ShipKey::Up.key_code()),
            down: keys.pressed(ShipKey::Down.key_code()),
            left: keys.pressed(ShipKey::Left.key_code()),
            right: keys.pressed(ShipKey::Right.key_code()),
        }
    }

    /// Build a snapshot from a list of held keys.
    pub fn from_keys(keys: &[ShipKey]) -> Self {
        let mut held = Self::NONE;
        for &key in keys {
            held.set(key, true);
        }
        held
    }

    fn set(&mut self, key: ShipKey, held: bool) {
        match key {
            ShipKey::Up => self.up = held,
            ShipKey::Down => self.down = held,
            ShipKey::Left => self.left = held,
            ShipKey::Right => self.right = held,
        }
    }
}

/// Plugin providing application-level keyboard handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, exit_on_escape);
    }
}

/// Escape ends the run.
fn exit_on_escape(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        info!("Escape pressed, exiting");
        exit.write(AppExit::Success);
    }
}
