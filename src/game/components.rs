//! ECS components for the snake game.

use std::collections::VecDeque;

use bevy::prelude::*;
use rand::Rng;

use super::{
    CENTER_POSITION, GRID_HEIGHT, GRID_SIZE, GRID_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH, TailRule,
};

/// Top-left pixel corner of a grid cell.
///
/// Coordinates follow screen convention: `y` grows downward. Every position on the board
/// is a multiple of [`GRID_SIZE`] in both axes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Picks a cell uniformly over the whole board.
    pub fn random(rng: &mut impl Rng) -> Self {
        Position {
            x: rng.random_range(0..GRID_WIDTH) * GRID_SIZE,
            y: rng.random_range(0..GRID_HEIGHT) * GRID_SIZE,
        }
    }

    /// The neighbouring cell in `direction`, wrapping around the board edges.
    pub fn shifted(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Position {
            x: (self.x + dx * GRID_SIZE).rem_euclid(SCREEN_WIDTH as i32),
            y: (self.y + dy * GRID_SIZE).rem_euclid(SCREEN_HEIGHT as i32),
        }
    }

    /// Row-major index of this cell on the board.
    pub fn cell_index(self) -> usize {
        ((self.y / GRID_SIZE) * GRID_WIDTH + self.x / GRID_SIZE) as usize
    }

    pub fn from_cell_index(index: usize) -> Self {
        let index = index as i32;
        Position {
            x: (index % GRID_WIDTH) * GRID_SIZE,
            y: (index / GRID_WIDTH) * GRID_SIZE,
        }
    }
}

/// Direction enum for snake movement.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Unit step in grid cells, `y` pointing down.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        Direction::ALL[rng.random_range(0..Direction::ALL.len())]
    }
}

/// The player's snake: a chain of cells, head first.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Snake {
    positions: VecDeque<Position>,
    direction: Direction,
    next_direction: Option<Direction>,
    length: usize,
    // Cell dropped from the tail on the last step, still painted on screen.
    last: Option<Position>,
}

impl Default for Snake {
    fn default() -> Self {
        Snake::new(CENTER_POSITION, Direction::Right)
    }
}

impl Snake {
    pub fn new(start: Position, direction: Direction) -> Self {
        Snake {
            positions: VecDeque::from([start]),
            direction,
            next_direction: None,
            length: 1,
            last: None,
        }
    }

    /// Builds a snake from explicit segments, head first.
    #[cfg(test)]
    pub fn from_segments(
        segments: impl IntoIterator<Item = Position>,
        direction: Direction,
    ) -> Self {
        let positions: VecDeque<Position> = segments.into_iter().collect();
        assert!(!positions.is_empty(), "a snake needs at least a head");
        Snake {
            length: positions.len(),
            positions,
            direction,
            next_direction: None,
            last: None,
        }
    }

    pub fn head(&self) -> Position {
        self.positions[0]
    }

    pub fn positions(&self) -> &VecDeque<Position> {
        &self.positions
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn next_direction(&self) -> Option<Direction> {
        self.next_direction
    }

    /// Cell vacated by the tail on the last step, if any.
    pub fn last_tail(&self) -> Option<Position> {
        self.last
    }

    pub fn occupies(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }

    /// Queues a turn for the next step. Reversing onto the neck is ignored.
    pub fn steer(&mut self, direction: Direction) {
        if direction != self.direction.opposite() {
            self.next_direction = Some(direction);
        }
    }

    /// Applies the queued turn, if any.
    pub fn update_direction(&mut self) {
        if let Some(next) = self.next_direction.take() {
            self.direction = next;
        }
    }

    /// Prepends the next head cell and returns it. The tail is left in place.
    pub fn advance(&mut self) -> Position {
        let head = self.head().shifted(self.direction);
        self.positions.push_front(head);
        self.last = None;
        head
    }

    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// Trims the chain back to `length`, remembering the cell that was freed.
    pub fn drop_tail(&mut self) {
        while self.positions.len() > self.length {
            self.last = self.positions.pop_back();
        }
    }

    /// Whether the head overlaps any other segment.
    pub fn hits_body(&self, rule: TailRule) -> bool {
        let head = self.head();
        let body_end = match rule {
            TailRule::Blocks => self.positions.len(),
            TailRule::Vacates if self.positions.len() > self.length => self.positions.len() - 1,
            TailRule::Vacates => self.positions.len(),
        };
        self.positions
            .range(1..body_end.max(1))
            .any(|segment| *segment == head)
    }

    /// Shrinks back to a single cell at the board center.
    pub fn reset(&mut self, direction: Direction) {
        self.positions.clear();
        self.positions.push_back(CENTER_POSITION);
        self.length = 1;
        self.direction = direction;
        self.next_direction = None;
        self.last = None;
    }
}

/// The single piece of food on the board.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Apple {
    pub position: Position,
}

/// Marker for the sprites that make up the board.
#[derive(Component)]
pub struct Tile;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::CELL_COUNT;

    #[test]
    fn opposite_is_symmetric() {
        for direction in Direction::ALL {
            assert_ne!(direction, direction.opposite());
            assert_eq!(direction, direction.opposite().opposite());
        }
    }

    #[test]
    fn center_is_the_middle_cell() {
        assert_eq!(CENTER_POSITION, Position::new(320, 240));
    }

    #[test]
    fn wraps_around_every_edge() {
        let right_edge = Position::new(620, 100);
        assert_eq!(right_edge.shifted(Direction::Right), Position::new(0, 100));

        let left_edge = Position::new(0, 100);
        assert_eq!(left_edge.shifted(Direction::Left), Position::new(620, 100));

        let top_edge = Position::new(200, 0);
        assert_eq!(top_edge.shifted(Direction::Up), Position::new(200, 460));

        let bottom_edge = Position::new(200, 460);
        assert_eq!(bottom_edge.shifted(Direction::Down), Position::new(200, 0));
    }

    #[test]
    fn cell_index_round_trips_on_corners() {
        assert_eq!(Position::new(0, 0).cell_index(), 0);
        assert_eq!(Position::new(620, 460).cell_index(), CELL_COUNT - 1);
        assert_eq!(Position::from_cell_index(33), Position::new(20, 20));
    }

    #[test]
    fn moves_one_cell_without_growing() {
        let mut snake = Snake::new(Position::new(100, 100), Direction::Right);
        snake.update_direction();
        snake.advance();
        snake.drop_tail();

        assert_eq!(snake.positions(), &VecDeque::from([Position::new(120, 100)]));
        assert_eq!(snake.length(), 1);
        assert_eq!(snake.last_tail(), Some(Position::new(100, 100)));
    }

    #[test]
    fn reversal_is_ignored() {
        let mut snake = Snake::new(CENTER_POSITION, Direction::Right);
        snake.steer(Direction::Left);
        snake.update_direction();
        assert_eq!(snake.direction(), Direction::Right);

        snake.steer(Direction::Up);
        snake.update_direction();
        assert_eq!(snake.direction(), Direction::Up);
        assert_eq!(snake.next_direction(), None);
    }

    #[test]
    fn last_turn_before_a_step_wins() {
        let mut snake = Snake::new(CENTER_POSITION, Direction::Right);
        snake.steer(Direction::Up);
        snake.steer(Direction::Down);
        snake.update_direction();
        assert_eq!(snake.direction(), Direction::Down);
    }

    #[test]
    fn tail_rule_decides_whether_the_tail_blocks() {
        // A 2x2 loop: head moving up into the cell the tail is about to leave.
        let mut snake = Snake::from_segments(
            [
                Position::new(100, 120),
                Position::new(120, 120),
                Position::new(120, 100),
                Position::new(100, 100),
            ],
            Direction::Up,
        );
        snake.advance();

        assert!(snake.hits_body(TailRule::Blocks));
        assert!(!snake.hits_body(TailRule::Vacates));
    }

    #[test]
    fn reset_returns_to_a_single_center_cell() {
        let mut snake = Snake::from_segments(
            [Position::new(0, 0), Position::new(20, 0), Position::new(40, 0)],
            Direction::Left,
        );
        snake.steer(Direction::Up);
        snake.reset(Direction::Down);

        assert_eq!(snake.positions(), &VecDeque::from([CENTER_POSITION]));
        assert_eq!(snake.length(), 1);
        assert_eq!(snake.direction(), Direction::Down);
        assert_eq!(snake.next_direction(), None);
        assert_eq!(snake.last_tail(), None);
    }
}
