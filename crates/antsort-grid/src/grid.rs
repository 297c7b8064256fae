//! Dense, array-backed object grid.

use antsort_core::{AcaError, CapacityError, Cell, Color, InvalidParameterError};
use rand::seq::index;
use rand::Rng;

use crate::kernel::KernelView;
use crate::snapshot::ColorMatrix;

/// A `width × height` field of cells, each holding at most one object and
/// at most one ant.
///
/// Storage is a single `Vec<Cell>` with `x` as the outer axis
/// (`index = x * height + y`). The grid is never resized after
/// construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Maximum size of either axis. Kernel bounds are computed in `i64`,
    /// so every coordinate must convert losslessly.
    pub const MAX_DIM: usize = i32::MAX as usize;

    /// Create an empty grid (no objects, no ants).
    ///
    /// Returns `Err` if either dimension is 0 or exceeds [`Grid::MAX_DIM`].
    pub fn new(width: usize, height: usize) -> Result<Self, InvalidParameterError> {
        for (name, value) in [("width", width), ("height", height)] {
            if value == 0 {
                return Err(InvalidParameterError::new(name, "must be at least 1"));
            }
            if value > Self::MAX_DIM {
                return Err(InvalidParameterError::new(
                    name,
                    format!("{value} exceeds maximum of {}", Self::MAX_DIM),
                ));
            }
        }
        let cells = width.checked_mul(height).ok_or_else(|| {
            InvalidParameterError::new("width", format!("{width} x {height} overflows usize"))
        })?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::default(); cells],
        })
    }

    /// Create a grid and scatter objects on it; see [`Grid::init`].
    pub fn with_colors<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        colors: &[usize],
        rng: &mut R,
    ) -> Result<Self, AcaError> {
        let mut grid = Self::new(width, height)?;
        grid.init(colors, rng)?;
        Ok(grid)
    }

    /// Scatter `sum(colors)` objects over distinct, uniformly random cells.
    ///
    /// `colors[i]` is the number of objects of color `i + 1`. Positions are
    /// drawn without replacement; the first `colors[0]` drawn cells get
    /// color 1, the next `colors[1]` get color 2, and so on. Any objects
    /// already on the grid are cleared first. Ant flags are untouched.
    ///
    /// Validation happens before any cell is written, so on `Err` the grid
    /// is unchanged.
    pub fn init<R: Rng + ?Sized>(&mut self, colors: &[usize], rng: &mut R) -> Result<(), AcaError> {
        if colors.len() > Color::MAX.0 as usize {
            return Err(InvalidParameterError::new(
                "colors",
                format!(
                    "{} colors requested, at most {} supported",
                    colors.len(),
                    Color::MAX.0
                ),
            )
            .into());
        }
        let total = colors
            .iter()
            .try_fold(0usize, |acc, &n| acc.checked_add(n))
            .unwrap_or(usize::MAX);
        self.check_capacity("objects", total)?;

        for cell in &mut self.cells {
            cell.color = Color::EMPTY;
        }
        let mut picks = index::sample(rng, self.cells.len(), total).into_iter();
        for (i, &count) in colors.iter().enumerate() {
            // Length checked above, so every index maps to a color.
            let color = Color::from_index(i).unwrap_or(Color::MAX);
            for idx in picks.by_ref().take(count) {
                self.cells[idx].color = color;
            }
        }
        Ok(())
    }

    /// Mark `count` distinct, uniformly random ant-free cells as holding an
    /// ant and return their `(x, y)` positions in draw order.
    ///
    /// Returns `Err` (leaving the grid unchanged) if fewer than `count`
    /// cells are free of ants.
    pub fn place_ants<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<(usize, usize)>, CapacityError> {
        self.check_capacity("ants", count)?;
        let free: Vec<usize> = (0..self.cells.len())
            .filter(|&i| !self.cells[i].ant)
            .collect();
        if count > free.len() {
            return Err(CapacityError {
                what: "ants",
                requested: count as u64,
                available: free.len() as u64,
            });
        }
        let mut positions = Vec::with_capacity(count);
        for i in index::sample(rng, free.len(), count) {
            let idx = free[i];
            self.cells[idx].ant = true;
            positions.push(self.position(idx));
        }
        Ok(positions)
    }

    fn check_capacity(&self, what: &'static str, requested: usize) -> Result<(), CapacityError> {
        if requested > self.cells.len() {
            return Err(CapacityError {
                what,
                requested: requested as u64,
                available: self.cells.len() as u64,
            });
        }
        Ok(())
    }

    /// Extent along `x`.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Extent along `y`.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells, `width * height`.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Flat storage index of `(x, y)`, or `None` out of bounds.
    pub fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| x * self.height + y)
    }

    /// `(x, y)` of a flat storage index.
    fn position(&self, idx: usize) -> (usize, usize) {
        (idx / self.height, idx % self.height)
    }

    /// The cell at `(x, y)`.
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `(x, y)`.
    pub fn cell_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Object color at `(x, y)`.
    pub fn color(&self, x: usize, y: usize) -> Option<Color> {
        self.cell(x, y).map(|c| c.color)
    }

    /// Overwrite the object color at `(x, y)`, returning the previous one.
    pub fn set_color(&mut self, x: usize, y: usize, color: Color) -> Option<Color> {
        self.cell_mut(x, y)
            .map(|c| std::mem::replace(&mut c.color, color))
    }

    /// Whether an ant stands on `(x, y)`. `false` out of bounds.
    pub fn has_ant(&self, x: usize, y: usize) -> bool {
        self.cell(x, y).is_some_and(|c| c.ant)
    }

    /// Set or clear the ant flag at `(x, y)`, returning the previous value.
    pub fn set_ant(&mut self, x: usize, y: usize, ant: bool) -> Option<bool> {
        self.cell_mut(x, y).map(|c| std::mem::replace(&mut c.ant, ant))
    }

    /// Backing storage, `x`-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Number of cells holding `color`.
    pub fn count_color(&self, color: Color) -> usize {
        self.cells.iter().filter(|c| c.color == color).count()
    }

    /// Number of cells holding any object.
    pub fn object_count(&self) -> usize {
        self.cells.iter().filter(|c| c.has_object()).count()
    }

    /// Number of cells flagged as holding an ant.
    pub fn ant_count(&self) -> usize {
        self.cells.iter().filter(|c| c.ant).count()
    }

    /// Live view of the inclusive rectangle `[x1, x2] × [y1, y2]`, clipped
    /// to the grid.
    ///
    /// Bounds may be negative or past the far edge; they are clamped the
    /// same way array slicing truncates. The view's local origin `(0, 0)`
    /// is the clipped top-left cell, which is also reported as its focal
    /// cell. Returns `None` if nothing of the rectangle lies on the grid.
    pub fn kernel_rect(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) -> Option<KernelView<'_>> {
        let (lo_x, hi_x) = clip_axis(x1, x2, self.width)?;
        let (lo_y, hi_y) = clip_axis(y1, y2, self.height)?;
        Some(KernelView::new(self, (lo_x, lo_y), (hi_x, hi_y), (0, 0)))
    }

    /// Live view of the square window of radius `r` centered on `(x, y)`,
    /// clipped to the grid.
    ///
    /// The window spans `[x-r, x+r] × [y-r, y+r]` before clipping. The focal
    /// cell `(x, y)` sits at local coordinate `(min(r, x), min(r, y))`: only
    /// clipping at the low edges shifts it, since clipping past the high
    /// edges removes cells after the focal one.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    pub fn kernel_center(&mut self, x: usize, y: usize, r: usize) -> KernelView<'_> {
        assert!(
            x < self.width && y < self.height,
            "kernel focal cell ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        let lo = (x.saturating_sub(r), y.saturating_sub(r));
        let hi = (
            x.saturating_add(r).min(self.width - 1),
            y.saturating_add(r).min(self.height - 1),
        );
        KernelView::new(self, lo, hi, (r.min(x), r.min(y)))
    }

    /// The empty cell closest to `(x, y)` by Chebyshev distance.
    ///
    /// Rings are scanned outward from `(x, y)` itself; within a ring, cells
    /// are visited in storage order. Only the ring's edges are walked, so a
    /// ring at distance `d` costs `O(d)`. Returns `None` only when every cell
    /// holds an object.
    pub fn nearest_empty(&self, x: usize, y: usize) -> Option<(usize, usize)> {
        let max_ring = self.width.max(self.height);
        for d in 0..max_ring {
            let (x_lo, x_hi) = (x.saturating_sub(d), (x + d).min(self.width - 1));
            let (y_lo, y_hi) = (y.saturating_sub(d), (y + d).min(self.height - 1));
            // Ring edges along y, present only when not clipped away.
            let top = y.checked_sub(d);
            let bottom = (d > 0 && y + d < self.height).then_some(y + d);
            for gx in x_lo..=x_hi {
                if gx.abs_diff(x) == d {
                    if let Some(gy) = (y_lo..=y_hi).find(|&gy| self.is_empty_at(gx, gy)) {
                        return Some((gx, gy));
                    }
                    continue;
                }
                for gy in [top, bottom].into_iter().flatten() {
                    if self.is_empty_at(gx, gy) {
                        return Some((gx, gy));
                    }
                }
            }
        }
        None
    }

    fn is_empty_at(&self, x: usize, y: usize) -> bool {
        self.cell(x, y).is_some_and(|c| !c.has_object())
    }

    /// Owned point-in-time copy of the color layer.
    pub fn snapshot(&self) -> ColorMatrix {
        ColorMatrix::from_cells(self.width, self.height, &self.cells)
    }
}

/// Clamp the inclusive range `[lo, hi]` to `[0, len)`.
fn clip_axis(lo: i64, hi: i64, len: usize) -> Option<(usize, usize)> {
    let last = len as i64 - 1;
    let lo = lo.max(0);
    let hi = hi.min(last);
    if lo > hi {
        return None;
    }
    Some((lo as usize, hi as usize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn new_rejects_zero_dimension() {
        assert_eq!(Grid::new(0, 4).unwrap_err().name, "width");
        assert_eq!(Grid::new(4, 0).unwrap_err().name, "height");
    }

    #[test]
    fn new_grid_is_vacant() {
        let g = Grid::new(3, 4).unwrap();
        assert_eq!(g.cell_count(), 12);
        assert_eq!(g.object_count(), 0);
        assert_eq!(g.ant_count(), 0);
    }

    #[test]
    fn index_is_x_major() {
        let g = Grid::new(3, 4).unwrap();
        assert_eq!(g.index(0, 0), Some(0));
        assert_eq!(g.index(0, 3), Some(3));
        assert_eq!(g.index(1, 0), Some(4));
        assert_eq!(g.index(2, 3), Some(11));
        assert_eq!(g.index(3, 0), None);
        assert_eq!(g.index(0, 4), None);
    }

    #[test]
    fn init_places_exact_color_counts() {
        let g = Grid::with_colors(10, 10, &[7, 0, 12], &mut rng()).unwrap();
        assert_eq!(g.count_color(Color(1)), 7);
        assert_eq!(g.count_color(Color(2)), 0);
        assert_eq!(g.count_color(Color(3)), 12);
        assert_eq!(g.object_count(), 19);
    }

    #[test]
    fn init_can_fill_every_cell() {
        let g = Grid::with_colors(3, 3, &[4, 5], &mut rng()).unwrap();
        assert_eq!(g.object_count(), 9);
    }

    #[test]
    fn init_over_capacity_leaves_grid_untouched() {
        let mut g = Grid::with_colors(3, 3, &[2], &mut rng()).unwrap();
        let before = g.clone();
        match g.init(&[5, 5], &mut rng()) {
            Err(AcaError::Capacity(e)) => {
                assert_eq!(e.requested, 10);
                assert_eq!(e.available, 9);
            }
            other => panic!("expected Capacity, got {other:?}"),
        }
        assert_eq!(g, before);
    }

    #[test]
    fn init_overflowing_sum_is_capacity_error() {
        let mut g = Grid::new(2, 2).unwrap();
        assert!(matches!(
            g.init(&[usize::MAX, 1], &mut rng()),
            Err(AcaError::Capacity(_))
        ));
    }

    #[test]
    fn init_is_seed_deterministic() {
        let a = Grid::with_colors(20, 20, &[30, 30], &mut rng()).unwrap();
        let b = Grid::with_colors(20, 20, &[30, 30], &mut rng()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn place_ants_distinct_and_flagged() {
        let mut g = Grid::new(5, 5).unwrap();
        let ants = g.place_ants(25, &mut rng()).unwrap();
        assert_eq!(ants.len(), 25);
        let mut sorted = ants.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 25);
        assert_eq!(g.ant_count(), 25);
        for (x, y) in ants {
            assert!(g.has_ant(x, y));
        }
    }

    #[test]
    fn place_ants_over_capacity_fails() {
        let mut g = Grid::new(2, 3).unwrap();
        let err = g.place_ants(7, &mut rng()).unwrap_err();
        assert_eq!(err.what, "ants");
        assert_eq!(g.ant_count(), 0);
    }

    #[test]
    fn place_ants_skips_occupied_cells() {
        let mut g = Grid::new(2, 2).unwrap();
        g.place_ants(3, &mut rng()).unwrap();
        assert!(g.place_ants(2, &mut rng()).is_err());
        let last = g.place_ants(1, &mut rng()).unwrap();
        assert_eq!(last.len(), 1);
        assert_eq!(g.ant_count(), 4);
    }

    #[test]
    fn set_color_returns_previous() {
        let mut g = Grid::new(2, 2).unwrap();
        assert_eq!(g.set_color(1, 1, Color(3)), Some(Color::EMPTY));
        assert_eq!(g.set_color(1, 1, Color(1)), Some(Color(3)));
        assert_eq!(g.set_color(2, 0, Color(1)), None);
        assert_eq!(g.color(1, 1), Some(Color(1)));
    }

    #[test]
    fn nearest_empty_prefers_own_cell() {
        let g = Grid::new(3, 3).unwrap();
        assert_eq!(g.nearest_empty(1, 2), Some((1, 2)));
    }

    #[test]
    fn nearest_empty_searches_rings() {
        let mut g = Grid::new(5, 5).unwrap();
        for x in 0..5 {
            for y in 0..5 {
                g.set_color(x, y, Color(1));
            }
        }
        g.set_color(4, 0, Color::EMPTY);
        assert_eq!(g.nearest_empty(2, 2), Some((4, 0)));
        g.set_color(1, 1, Color::EMPTY);
        assert_eq!(g.nearest_empty(2, 2), Some((1, 1)));
    }

    #[test]
    fn nearest_empty_prefers_storage_order_within_ring() {
        let mut g = Grid::new(5, 5).unwrap();
        for x in 0..5 {
            for y in 0..5 {
                g.set_color(x, y, Color(1));
            }
        }
        g.set_color(3, 2, Color::EMPTY);
        g.set_color(2, 1, Color::EMPTY);
        g.set_color(1, 3, Color::EMPTY);
        assert_eq!(g.nearest_empty(2, 2), Some((1, 3)));
    }

    #[test]
    fn nearest_empty_finds_far_corner_of_large_grid() {
        let side = 400;
        let mut g = Grid::new(side, side).unwrap();
        for cell in g.cells_mut() {
            cell.color = Color(1);
        }
        g.set_color(side - 1, side - 1, Color::EMPTY);
        assert_eq!(g.nearest_empty(0, 0), Some((side - 1, side - 1)));
        assert_eq!(g.nearest_empty(0, side - 1), Some((side - 1, side - 1)));
        g.set_color(0, side - 1, Color::EMPTY);
        assert_eq!(g.nearest_empty(0, 0), Some((0, side - 1)));
    }

    #[test]
    fn nearest_empty_none_when_full() {
        let g = Grid::with_colors(3, 2, &[6], &mut rng()).unwrap();
        assert_eq!(g.nearest_empty(0, 0), None);
    }

    #[test]
    fn kernel_rect_entirely_off_grid_is_none() {
        let mut g = Grid::new(5, 5).unwrap();
        assert!(g.kernel_rect(-3, 0, -1, 2).is_none());
        assert!(g.kernel_rect(0, 5, 2, 8).is_none());
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn kernel_center_rejects_off_grid_focal() {
        let mut g = Grid::new(5, 5).unwrap();
        let _ = g.kernel_center(5, 0, 1);
    }
}
