//! Command line options.

use clap::{Parser, ValueEnum};

use crate::game::{GameSettings, POLL_RATE, SPEED};

/// Which flavour of the game to run.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Input and movement share one tick; apples never land on the snake.
    Classic,
    /// Input is polled faster than the snake moves; apples land anywhere.
    Decoupled,
}

#[derive(Parser, Debug)]
#[command(name = "the_snake", version, about = "Snake on a 32x24 wraparound board")]
pub struct Options {
    #[arg(long, value_enum, default_value_t = Variant::Classic)]
    pub variant: Variant,

    /// Snake moves per second.
    #[arg(long, default_value_t = SPEED, value_parser = clap::value_parser!(u32).range(1..=60))]
    pub speed: u32,

    /// Input polls per second in the decoupled variant.
    #[arg(long, default_value_t = POLL_RATE, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub poll_rate: u32,

    /// Seed for apple placement and reset headings.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Options {
    pub fn settings(&self) -> GameSettings {
        let preset = match self.variant {
            Variant::Classic => GameSettings::classic(),
            Variant::Decoupled => GameSettings::decoupled(),
        };
        GameSettings {
            speed: self.speed,
            poll_rate: match self.variant {
                Variant::Classic => self.speed,
                Variant::Decoupled => self.poll_rate,
            },
            ..preset
        }
    }
}
