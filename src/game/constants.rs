//! Game constants for board size, colors, timing, and rendering layers.

use bevy::prelude::*;

use super::Position;

// Window and grid
pub const SCREEN_WIDTH: u32 = 640;
pub const SCREEN_HEIGHT: u32 = 480;
pub const GRID_SIZE: i32 = 20;
pub const GRID_WIDTH: i32 = SCREEN_WIDTH as i32 / GRID_SIZE;
pub const GRID_HEIGHT: i32 = SCREEN_HEIGHT as i32 / GRID_SIZE;
pub const CELL_COUNT: usize = (GRID_WIDTH * GRID_HEIGHT) as usize;

/// Top-left corner of the middle cell, where a fresh snake starts.
pub const CENTER_POSITION: Position = Position {
    x: GRID_WIDTH / 2 * GRID_SIZE,
    y: GRID_HEIGHT / 2 * GRID_SIZE,
};

// Timing
pub const SPEED: u32 = 10;
pub const POLL_RATE: u32 = 60;

// Colors
pub const BOARD_BACKGROUND_COLOR: Color = Color::srgb(0.0, 0.0, 0.0);
pub const BORDER_COLOR: Color = Color::srgb(0.365, 0.847, 0.894);
pub const APPLE_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
pub const SNAKE_COLOR: Color = Color::srgb(0.0, 1.0, 0.0);

// Cell outline thickness in pixels
pub const BORDER_WIDTH: f32 = 1.0;

// Z-index constants for rendering layers
pub const Z_TILE_BORDER: f32 = 0.0;
pub const Z_TILE_FACE: f32 = 0.1;
