//! Rendering plugin - a board of tile sprites that is repainted one cell at a time.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::game::{
    Apple, BOARD_BACKGROUND_COLOR, BORDER_WIDTH, CELL_COUNT, Canvas, CellPaint, Draw, GRID_SIZE,
    GameSet, Position, SCREEN_HEIGHT, SCREEN_WIDTH, Snake, StepOutcome, Stepped, Tile,
    Z_TILE_BORDER, Z_TILE_FACE,
};

/// Plugin for the board and its painting.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_camera, spawn_board))
            .add_systems(Update, paint_board.in_set(GameSet::Paint));
    }
}

/// Sprites making up one grid cell: an outline square and the inset face above it.
#[derive(Debug, Clone, Copy)]
struct TileSprites {
    border: Entity,
    face: Entity,
}

/// Tile sprites indexed by [`Position::cell_index`].
#[derive(Resource)]
pub struct Board {
    tiles: Vec<TileSprites>,
}

impl Board {
    #[cfg(test)]
    fn face(&self, at: Position) -> Option<Entity> {
        self.tiles.get(at.cell_index()).map(|tile| tile.face)
    }
}

/// Center of a cell in world space. The camera looks at the middle of the window with
/// `y` pointing up, while positions count from the top-left corner.
pub fn cell_center(position: Position) -> Vec2 {
    let half_cell = GRID_SIZE as f32 / 2.0;
    Vec2::new(
        position.x as f32 + half_cell - SCREEN_WIDTH as f32 / 2.0,
        SCREEN_HEIGHT as f32 / 2.0 - position.y as f32 - half_cell,
    )
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Startup system creating every tile in background color.
fn spawn_board(mut commands: Commands) {
    let cell = GRID_SIZE as f32;
    let mut tiles = Vec::with_capacity(CELL_COUNT);

    for index in 0..CELL_COUNT {
        let center = cell_center(Position::from_cell_index(index));
        let border = commands
            .spawn((
                Sprite {
                    color: BOARD_BACKGROUND_COLOR,
                    custom_size: Some(Vec2::splat(cell)),
                    ..default()
                },
                Transform::from_translation(center.extend(Z_TILE_BORDER)),
                Tile,
            ))
            .id();
        let face = commands
            .spawn((
                Sprite {
                    color: BOARD_BACKGROUND_COLOR,
                    custom_size: Some(Vec2::splat(cell - 2.0 * BORDER_WIDTH)),
                    ..default()
                },
                Transform::from_translation(center.extend(Z_TILE_FACE)),
                Tile,
            ))
            .id();
        tiles.push(TileSprites { border, face });
    }

    commands.insert_resource(Board { tiles });
}

/// [`Canvas`] backed by the board's sprites.
#[derive(SystemParam)]
pub struct TileCanvas<'w, 's> {
    board: Res<'w, Board>,
    sprites: Query<'w, 's, &'static mut Sprite, With<Tile>>,
}

impl Canvas for TileCanvas<'_, '_> {
    fn paint(&mut self, at: Position, paint: CellPaint) {
        let Some(tile) = self.board.tiles.get(at.cell_index()).copied() else {
            warn!("Tried to paint off-board cell ({}, {})", at.x, at.y);
            return;
        };
        if let Ok(mut sprite) = self.sprites.get_mut(tile.border) {
            sprite.color = paint.border;
        }
        if let Ok(mut sprite) = self.sprites.get_mut(tile.face) {
            sprite.color = paint.body;
        }
    }

    fn clear(&mut self) {
        for mut sprite in self.sprites.iter_mut() {
            sprite.color = BOARD_BACKGROUND_COLOR;
        }
    }
}

/// System to paint the cells a movement step changed. The first run paints the starting
/// snake and apple.
fn paint_board(
    mut stepped: MessageReader<Stepped>,
    snakes: Query<&Snake>,
    apples: Query<&Apple>,
    mut canvas: TileCanvas,
    mut painted_once: Local<bool>,
) -> Result {
    let mut changed = !*painted_once;
    for Stepped(outcome) in stepped.read() {
        if matches!(outcome, StepOutcome::Collided { .. }) {
            canvas.clear();
        }
        changed = true;
    }
    if !changed {
        return Ok(());
    }

    snakes.single()?.draw(&mut canvas);
    apples.single()?.draw(&mut canvas);
    *painted_once = true;
    Ok(())
}
