//! System sets ordering one frame of the game.

use bevy::prelude::*;

/// Frame phases, configured to run in declaration order.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Advance timers and collect raw input.
    Clock,
    /// Apply queued key presses.
    Input,
    /// Move the snake.
    Step,
    /// Paint changed cells.
    Paint,
}

impl GameSet {
    pub fn configure(app: &mut App) {
        app.configure_sets(
            Update,
            (GameSet::Clock, GameSet::Input, GameSet::Step, GameSet::Paint).chain(),
        );
    }
}
