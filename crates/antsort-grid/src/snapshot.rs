//! Owned copies of a grid's color layer.
//!
//! A [`ColorMatrix`] is what leaves the simulation: renderers and analysis
//! code receive one after a tick or a run. It never includes ant presence
//! and never aliases the live grid.

use antsort_core::{Cell, Color};

/// Offsets of the 8-connected neighbourhood.
const OFFSETS_8: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A `width × height` matrix of object colors (`0` = empty).
///
/// Row `x` holds the colors of cells `(x, 0) ..= (x, height - 1)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColorMatrix {
    width: usize,
    height: usize,
    data: Vec<Color>,
}

impl ColorMatrix {
    pub(crate) fn from_cells(width: usize, height: usize, cells: &[Cell]) -> Self {
        Self {
            width,
            height,
            data: cells.iter().map(|c| c.color).collect(),
        }
    }

    /// Number of rows (the grid's `x` extent).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of columns (the grid's `y` extent).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Color at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        (x < self.width && y < self.height).then(|| self.data[x * self.height + y])
    }

    /// All colors, row-major (`x`-major).
    pub fn as_slice(&self) -> &[Color] {
        &self.data
    }

    /// Iterate over rows; row `x` has `height` entries.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
        self.data.chunks(self.height)
    }

    /// Nested `Vec` of raw color ids, for collaborators that want a plain
    /// integer matrix.
    pub fn to_nested(&self) -> Vec<Vec<u16>> {
        self.rows()
            .map(|row| row.iter().map(|c| c.0).collect())
            .collect()
    }

    /// Per-color cell counts. Index `0` counts empty cells; index `k`
    /// counts color `k`. The vector is as long as the largest color
    /// present plus one.
    pub fn color_counts(&self) -> Vec<usize> {
        let max = self.data.iter().map(|c| c.0).max().unwrap_or(0) as usize;
        let mut counts = vec![0usize; max + 1];
        for c in &self.data {
            counts[c.0 as usize] += 1;
        }
        counts
    }

    /// Number of cells holding any object.
    pub fn object_count(&self) -> usize {
        self.data.iter().filter(|c| !c.is_empty()).count()
    }

    /// Mean like-colored share of each object's occupied 8-neighbours.
    ///
    /// For every object with at least one object among its 8 neighbours,
    /// take the fraction of those neighbours sharing its color; return the
    /// mean over such objects. Returns `0.0` when no object has an occupied
    /// neighbour. A perfectly sorted field approaches `1.0`.
    pub fn neighbour_homogeneity(&self) -> f64 {
        let (w, h) = (self.width as i64, self.height as i64);
        let mut total = 0.0;
        let mut counted = 0usize;
        for x in 0..w {
            for y in 0..h {
                let here = self.data[(x * h + y) as usize];
                if here.is_empty() {
                    continue;
                }
                let mut occupied = 0u32;
                let mut alike = 0u32;
                for (dx, dy) in OFFSETS_8 {
                    let (nx, ny) = (x + dx, y + dy);
                    if nx < 0 || nx >= w || ny < 0 || ny >= h {
                        continue;
                    }
                    let other = self.data[(nx * h + ny) as usize];
                    if other.is_empty() {
                        continue;
                    }
                    occupied += 1;
                    if other == here {
                        alike += 1;
                    }
                }
                if occupied > 0 {
                    total += f64::from(alike) / f64::from(occupied);
                    counted += 1;
                }
            }
        }
        if counted == 0 {
            0.0
        } else {
            total / counted as f64
        }
    }
}
