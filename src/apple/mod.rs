//! Apple plugin - handles apple spawning and relocation.

use bevy::prelude::*;
use rand::Rng;

use crate::game::{Apple, ApplePlacement, CELL_COUNT, GameRng, GameSettings, Position, Snake};

/// Plugin for apple-related systems.
pub struct ApplePlugin;

impl Plugin for ApplePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_apple);
    }
}

impl Apple {
    /// Moves the apple to a fresh random cell.
    ///
    /// With [`ApplePlacement::AvoidSnake`] the new cell is drawn uniformly over the cells the
    /// snake does not cover. If the snake fills the whole board the apple stays put.
    pub fn relocate(&mut self, snake: &Snake, placement: ApplePlacement, rng: &mut impl Rng) {
        match placement {
            ApplePlacement::Anywhere => self.position = Position::random(rng),
            ApplePlacement::AvoidSnake => {
                if snake.positions().len() >= CELL_COUNT {
                    warn!("No free cell left for the apple");
                    return;
                }

                // Keep generating positions until we find one that doesn't overlap with the snake
                loop {
                    let position = Position::random(rng);
                    if !snake.occupies(position) {
                        self.position = position;
                        break;
                    }
                }
            }
        }
        debug!(x = self.position.x, y = self.position.y, "Apple relocated");
    }
}

/// Places the first apple away from the snake's starting cell.
fn spawn_apple(mut commands: Commands, settings: Res<GameSettings>, mut rng: ResMut<GameRng>) {
    let snake = Snake::default();
    let mut apple = Apple {
        position: snake.head(),
    };
    apple.relocate(&snake, settings.apple_placement, &mut rng.0);

    commands.spawn(apple);
}

#[cfg(test)]
mod tests {
    use bevy::ecs::system::RunSystemOnce;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::game::{CENTER_POSITION, Direction, GRID_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};

    #[test]
    fn avoids_every_snake_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        // Leave exactly one cell free.
        let free = Position::new(300, 220);
        let segments = (0..CELL_COUNT)
            .map(Position::from_cell_index)
            .filter(|position| *position != free);
        let snake = Snake::from_segments(segments, Direction::Right);

        let mut apple = Apple {
            position: snake.head(),
        };
        apple.relocate(&snake, ApplePlacement::AvoidSnake, &mut rng);

        assert_eq!(apple.position, free);
    }

    #[test]
    fn full_board_leaves_apple_in_place() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::from_segments(
            (0..CELL_COUNT).map(Position::from_cell_index),
            Direction::Up,
        );
        let mut apple = Apple {
            position: CENTER_POSITION,
        };
        apple.relocate(&snake, ApplePlacement::AvoidSnake, &mut rng);

        assert_eq!(apple.position, CENTER_POSITION);
    }

    #[test]
    fn anywhere_stays_on_the_grid() {
        let mut rng = StdRng::seed_from_u64(11);
        let snake = Snake::default();
        let mut apple = Apple {
            position: CENTER_POSITION,
        };

        for _ in 0..500 {
            apple.relocate(&snake, ApplePlacement::Anywhere, &mut rng);
            let Position { x, y } = apple.position;
            assert!((0..SCREEN_WIDTH as i32).contains(&x));
            assert!((0..SCREEN_HEIGHT as i32).contains(&y));
            assert_eq!(x % GRID_SIZE, 0);
            assert_eq!(y % GRID_SIZE, 0);
        }
    }

    #[test]
    fn first_apple_is_off_center() {
        let mut world = World::new();
        world.insert_resource(GameSettings::classic());
        world.insert_resource(GameRng::new(Some(3)));

        world
            .run_system_once(spawn_apple)
            .expect("spawn_apple should run");

        let mut apples = world.query::<&Apple>();
        let apple = apples.single(&world).expect("one apple");
        assert_ne!(apple.position, CENTER_POSITION);
    }
}
