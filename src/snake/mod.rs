//! Snake plugin - handles snake spawning, movement, feeding, and self-collision.

use bevy::prelude::*;
use rand::Rng;

use crate::game::{
    Apple, Direction, GameRng, GameSet, GameSettings, ResetHeading, Snake, StepOutcome, Stepped,
};
use crate::timing::step_due;

/// Plugin for snake-related systems.
pub struct SnakePlugin;

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<Stepped>()
            .add_systems(Startup, spawn_snake)
            .add_systems(Update, step_snake.in_set(GameSet::Step).run_if(step_due));
    }
}

/// Spawns a length-one snake at the board center heading right.
fn spawn_snake(mut commands: Commands) {
    commands.spawn(Snake::default());
}

/// Advances the game by one movement step.
///
/// The pending turn is applied, the head moves one cell, and then exactly one of three
/// things happens: the apple is eaten and the tail stays, the head hits the body and
/// everything starts over, or the tail is dropped.
pub fn step(
    snake: &mut Snake,
    apple: &mut Apple,
    settings: &GameSettings,
    rng: &mut impl Rng,
) -> StepOutcome {
    snake.update_direction();
    let head = snake.advance();

    if head == apple.position {
        snake.grow();
        apple.relocate(snake, settings.apple_placement, rng);
        StepOutcome::Ate { at: head }
    } else if snake.hits_body(settings.tail_rule) {
        let length = snake.length();
        let heading = match settings.reset_heading {
            ResetHeading::Random => Direction::random(rng),
            ResetHeading::Fixed(direction) => direction,
        };
        snake.reset(heading);
        apple.relocate(snake, settings.apple_placement, rng);
        StepOutcome::Collided { length }
    } else {
        snake.drop_tail();
        StepOutcome::Moved
    }
}

/// System to move the snake on the step timer.
fn step_snake(
    mut snakes: Query<&mut Snake>,
    mut apples: Query<&mut Apple>,
    settings: Res<GameSettings>,
    mut rng: ResMut<GameRng>,
    mut stepped: MessageWriter<Stepped>,
) -> Result {
    let mut snake = snakes.single_mut()?;
    let mut apple = apples.single_mut()?;

    let outcome = step(&mut snake, &mut apple, &settings, &mut rng.0);
    match outcome {
        StepOutcome::Moved => {}
        StepOutcome::Ate { at } => {
            debug!(x = at.x, y = at.y, length = snake.length(), "Apple eaten");
        }
        StepOutcome::Collided { length } => {
            info!("Snake ran into itself at length {length}, starting over");
        }
    }

    stepped.write(Stepped(outcome));
    Ok(())
}
