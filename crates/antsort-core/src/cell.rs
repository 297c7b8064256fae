//! The grid cell: one object slot plus an ant-presence flag.

use crate::id::Color;

/// A single grid cell.
///
/// Holds at most one object (its [`Color`], or [`Color::EMPTY`]) and a flag
/// recording whether an ant currently stands on it. The two layers are
/// independent: an ant may stand on an occupied cell, and an object may lie
/// under no ant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    /// Object color lying on this cell.
    pub color: Color,
    /// Whether an ant stands on this cell.
    pub ant: bool,
}

impl Cell {
    /// A cell holding `color` and no ant.
    pub fn with_color(color: Color) -> Self {
        Self { color, ant: false }
    }

    /// Whether the cell holds an object.
    pub fn has_object(&self) -> bool {
        !self.color.is_empty()
    }
}
