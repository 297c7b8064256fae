//! Edge-clipped, aliasing windows into a [`Grid`].
//!
//! A [`KernelView`] borrows the grid mutably for its lifetime and addresses
//! a rectangle of it in window-local coordinates. Every read and write goes
//! straight to the grid's backing storage; nothing is copied.

use antsort_core::{Cell, Color};

use crate::grid::Grid;

/// A rectangular, clipped sub-window of a [`Grid`].
///
/// Local coordinate `(lx, ly)` maps to global `(x1 + lx, y1 + ly)` where
/// `(x1, y1)` is the view's [`origin`](KernelView::origin). The view is
/// never empty: its shape is at least `1 × 1`.
///
/// The view also records a *focal* cell, the cell the window was built
/// around. For [`Grid::kernel_center`] this is the agent's own cell; for
/// [`Grid::kernel_rect`] it is the local origin.
#[derive(Debug)]
pub struct KernelView<'g> {
    grid: &'g mut Grid,
    origin: (usize, usize),
    shape: (usize, usize),
    focal: (usize, usize),
}

impl<'g> KernelView<'g> {
    /// `lo` and `hi` are inclusive, already-clipped global bounds.
    pub(crate) fn new(
        grid: &'g mut Grid,
        lo: (usize, usize),
        hi: (usize, usize),
        focal: (usize, usize),
    ) -> Self {
        let shape = (hi.0 - lo.0 + 1, hi.1 - lo.1 + 1);
        debug_assert!(focal.0 < shape.0 && focal.1 < shape.1);
        Self {
            grid,
            origin: lo,
            shape,
            focal,
        }
    }

    /// `(extent along x, extent along y)`.
    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    /// Number of cells in the window.
    pub fn len(&self) -> usize {
        self.shape.0 * self.shape.1
    }

    /// Always `false`: a view covers at least one cell.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Global coordinate of local `(0, 0)`.
    pub fn origin(&self) -> (usize, usize) {
        self.origin
    }

    /// Local coordinate of the focal cell.
    pub fn focal(&self) -> (usize, usize) {
        self.focal
    }

    /// Global coordinate of local `(lx, ly)`, or `None` outside the window.
    pub fn to_global(&self, lx: usize, ly: usize) -> Option<(usize, usize)> {
        (lx < self.shape.0 && ly < self.shape.1).then(|| (self.origin.0 + lx, self.origin.1 + ly))
    }

    fn slot(&self, lx: usize, ly: usize) -> Option<usize> {
        let (gx, gy) = self.to_global(lx, ly)?;
        self.grid.index(gx, gy)
    }

    /// The cell at local `(lx, ly)`.
    pub fn cell(&self, lx: usize, ly: usize) -> Option<&Cell> {
        self.slot(lx, ly).map(|i| &self.grid.cells()[i])
    }

    /// Mutable access to the cell at local `(lx, ly)`.
    pub fn cell_mut(&mut self, lx: usize, ly: usize) -> Option<&mut Cell> {
        let i = self.slot(lx, ly)?;
        Some(&mut self.grid.cells_mut()[i])
    }

    /// Object color at local `(lx, ly)`.
    pub fn color(&self, lx: usize, ly: usize) -> Option<Color> {
        self.cell(lx, ly).map(|c| c.color)
    }

    /// Overwrite the object color at local `(lx, ly)`, returning the
    /// previous color. Writes land in the underlying grid.
    pub fn set_color(&mut self, lx: usize, ly: usize, color: Color) -> Option<Color> {
        self.cell_mut(lx, ly)
            .map(|c| std::mem::replace(&mut c.color, color))
    }

    /// Whether an ant stands on local `(lx, ly)`. `false` outside.
    pub fn has_ant(&self, lx: usize, ly: usize) -> bool {
        self.cell(lx, ly).is_some_and(|c| c.ant)
    }

    /// Object color on the focal cell.
    pub fn focal_color(&self) -> Color {
        self.color(self.focal.0, self.focal.1)
            .unwrap_or(Color::EMPTY)
    }

    /// Overwrite the focal cell's object color, returning the previous one.
    pub fn set_focal_color(&mut self, color: Color) -> Color {
        let (fx, fy) = self.focal;
        self.set_color(fx, fy, color).unwrap_or(Color::EMPTY)
    }

    /// Iterate over every cell in the window, `x`-major.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        let height = self.grid.height();
        let (x0, y0) = self.origin;
        let (nx, ny) = self.shape;
        let cells = self.grid.cells();
        (x0..x0 + nx).flat_map(move |x| {
            let start = x * height + y0;
            cells[start..start + ny].iter()
        })
    }

    /// Number of cells in the window holding `color`, focal cell included.
    pub fn count(&self, color: Color) -> usize {
        self.cells().filter(|c| c.color == color).count()
    }

    /// Fraction of the window's cells holding `color`, focal cell included.
    pub fn perceived_fraction(&self, color: Color) -> f64 {
        self.count(color) as f64 / self.len() as f64
    }

    /// Fraction of the window's cells other than the focal cell that hold
    /// `color`. A `1 × 1` window has no such cells and perceives `0.0`.
    pub fn perceived_fraction_excluding_focal(&self, color: Color) -> f64 {
        let others = self.len() - 1;
        if others == 0 {
            return 0.0;
        }
        let mut n = self.count(color);
        if self.focal_color() == color {
            n -= 1;
        }
        n as f64 / others as f64
    }

    /// Move the ant flag from local `from` to local `to`.
    ///
    /// Refused (returning `false`, nothing changed) when `to` lies outside
    /// the window or already holds a different ant. Moving onto `from`
    /// itself succeeds trivially.
    pub fn move_ant(&mut self, from: (usize, usize), to: (usize, usize)) -> bool {
        if from == to {
            return self.cell(to.0, to.1).is_some();
        }
        match self.cell(to.0, to.1) {
            Some(c) if !c.ant => {}
            _ => return false,
        }
        if let Some(c) = self.cell_mut(from.0, from.1) {
            c.ant = false;
        }
        if let Some(c) = self.cell_mut(to.0, to.1) {
            c.ant = true;
        }
        true
    }
}
