//! Input plugin - queues key presses and applies them when input is polled.

use bevy::input::ButtonState;
use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;

use crate::game::{GameSet, Key, KeyQueue, Snake};
use crate::timing::poll_due;

/// Plugin for keyboard handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KeyQueue>().add_systems(
            Update,
            (
                collect_keys.in_set(GameSet::Clock),
                poll_input.in_set(GameSet::Input).run_if(poll_due),
            ),
        );
    }
}

/// System to move fresh key presses into the queue every frame.
fn collect_keys(mut keyboard: MessageReader<KeyboardInput>, mut queue: ResMut<KeyQueue>) {
    for event in keyboard.read() {
        if event.state != ButtonState::Pressed || event.repeat {
            continue;
        }
        if let Some(key) = Key::from_key_code(event.key_code) {
            queue.push(key);
        }
    }
}

/// Feeds queued keys to the snake in arrival order.
///
/// Returns `true` as soon as a quit key is seen; keys after it are discarded.
pub fn apply_keys(keys: impl IntoIterator<Item = Key>, snake: &mut Snake) -> bool {
    for key in keys {
        match key {
            Key::Turn(direction) => snake.steer(direction),
            Key::Quit => return true,
        }
    }
    false
}

/// System to drain the key queue on the poll timer.
fn poll_input(
    mut queue: ResMut<KeyQueue>,
    mut snakes: Query<&mut Snake>,
    mut exit: MessageWriter<AppExit>,
) -> Result {
    if queue.is_empty() {
        return Ok(());
    }

    let mut snake = snakes.single_mut()?;
    if apply_keys(queue.drain(), &mut snake) {
        info!("Quit requested, closing the game");
        exit.write(AppExit::Success);
    }
    Ok(())
}
