//! Drawing capability shared by the snake and the apple.

use bevy::prelude::*;

use super::{
    APPLE_COLOR, Apple, BOARD_BACKGROUND_COLOR, BORDER_COLOR, Position, SNAKE_COLOR, Snake,
};

/// How a single cell should look.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPaint {
    pub body: Color,
    pub border: Color,
}

impl CellPaint {
    pub const BACKGROUND: CellPaint = CellPaint {
        body: BOARD_BACKGROUND_COLOR,
        border: BOARD_BACKGROUND_COLOR,
    };

    /// A filled cell with the standard outline.
    pub const fn outlined(body: Color) -> Self {
        CellPaint {
            body,
            border: BORDER_COLOR,
        }
    }
}

/// A surface made of grid cells.
pub trait Canvas {
    fn paint(&mut self, at: Position, paint: CellPaint);

    /// Paints every cell with the background.
    fn clear(&mut self);
}

/// Something that knows how to put itself on a [`Canvas`].
pub trait Draw {
    fn draw(&self, canvas: &mut impl Canvas);
}

impl Draw for Apple {
    fn draw(&self, canvas: &mut impl Canvas) {
        canvas.paint(self.position, CellPaint::outlined(APPLE_COLOR));
    }
}

impl Draw for Snake {
    /// Only the head is painted; body cells keep the color they got when they were the
    /// head. The freed tail cell is painted over with the background unless some segment
    /// still covers it.
    fn draw(&self, canvas: &mut impl Canvas) {
        let head = self.head();
        canvas.paint(head, CellPaint::outlined(SNAKE_COLOR));

        if let Some(tail) = self.last_tail().filter(|tail| !self.occupies(*tail)) {
            canvas.paint(tail, CellPaint::BACKGROUND);
        }
    }
}
