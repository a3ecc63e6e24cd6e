//! Game events (messages).

use bevy::prelude::*;

use super::Position;

/// What a single movement step did to the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved one cell; the tail cell was freed.
    Moved,
    /// Ate the apple that was at `at`; the tail stayed.
    Ate { at: Position },
    /// Ran into itself at `length` and was reset.
    Collided { length: usize },
}

/// Message written after every movement step.
#[derive(Message, Debug, Clone, Copy)]
pub struct Stepped(pub StepOutcome);
