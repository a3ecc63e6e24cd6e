//! Game resources (singleton state).

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

use super::{Direction, POLL_RATE, SPEED};

/// How input polling relates to movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timing {
    /// Input is polled once per movement step.
    Locked,
    /// Input is polled at its own rate, independent of movement.
    Decoupled,
}

/// Where a relocated apple may land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplePlacement {
    AvoidSnake,
    Anywhere,
}

/// Heading given to the snake after a self-collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetHeading {
    Random,
    Fixed(Direction),
}

/// Whether the tail cell counts as body when the head moves onto it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TailRule {
    /// The tail is checked before it moves away.
    Blocks,
    /// The tail is about to leave its cell, so following it is safe.
    Vacates,
}

/// Rules and rates the game was started with.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameSettings {
    pub timing: Timing,
    pub apple_placement: ApplePlacement,
    pub reset_heading: ResetHeading,
    pub tail_rule: TailRule,
    /// Movement steps per second.
    pub speed: u32,
    /// Input polls per second; only used with [`Timing::Decoupled`].
    pub poll_rate: u32,
}

impl GameSettings {
    /// Input is read on the same tick as each movement step.
    pub fn classic() -> Self {
        GameSettings {
            timing: Timing::Locked,
            apple_placement: ApplePlacement::AvoidSnake,
            reset_heading: ResetHeading::Random,
            tail_rule: TailRule::Blocks,
            speed: SPEED,
            poll_rate: SPEED,
        }
    }

    /// Fast input polling with slower movement.
    pub fn decoupled() -> Self {
        GameSettings {
            timing: Timing::Decoupled,
            apple_placement: ApplePlacement::Anywhere,
            reset_heading: ResetHeading::Fixed(Direction::Right),
            tail_rule: TailRule::Vacates,
            speed: SPEED,
            poll_rate: POLL_RATE,
        }
    }

    pub fn step_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.speed.max(1) as f64)
    }

    pub fn poll_interval(&self) -> Duration {
        match self.timing {
            Timing::Locked => self.step_interval(),
            Timing::Decoupled => Duration::from_secs_f64(1.0 / self.poll_rate.max(1) as f64),
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings::classic()
    }
}

/// Random source for apple placement and reset headings.
#[derive(Resource)]
pub struct GameRng(pub StdRng);

impl GameRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => GameRng(StdRng::seed_from_u64(seed)),
            None => GameRng(StdRng::from_os_rng()),
        }
    }
}

/// Drives input polling and movement steps.
#[derive(Resource, Debug)]
pub struct Pacer {
    poll: Timer,
    step: Timer,
}

impl Pacer {
    pub fn new(settings: &GameSettings) -> Self {
        Pacer {
            poll: Timer::new(settings.poll_interval(), TimerMode::Repeating),
            step: Timer::new(settings.step_interval(), TimerMode::Repeating),
        }
    }

    pub fn tick(&mut self, delta: Duration) {
        self.poll.tick(delta);
        self.step.tick(delta);
    }

    /// True on the frame the poll timer elapsed.
    pub fn poll_due(&self) -> bool {
        self.poll.just_finished()
    }

    /// True on the frame the step timer elapsed.
    pub fn step_due(&self) -> bool {
        self.step.just_finished()
    }
}

/// A key press the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Turn(Direction),
    Quit,
}

impl Key {
    pub fn from_key_code(key_code: KeyCode) -> Option<Key> {
        match key_code {
            KeyCode::ArrowUp => Some(Key::Turn(Direction::Up)),
            KeyCode::ArrowDown => Some(Key::Turn(Direction::Down)),
            KeyCode::ArrowLeft => Some(Key::Turn(Direction::Left)),
            KeyCode::ArrowRight => Some(Key::Turn(Direction::Right)),
            KeyCode::Escape => Some(Key::Quit),
            _ => None,
        }
    }
}

/// Key presses received since the last poll, oldest first.
#[derive(Resource, Default, Debug)]
pub struct KeyQueue {
    pending: Vec<Key>,
}

impl KeyQueue {
    pub fn push(&mut self, key: Key) {
        self.pending.push(key);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Key> + '_ {
        self.pending.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
