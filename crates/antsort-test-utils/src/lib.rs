//! Test fixtures and invariant checks for antsort development.
//!
//! Grid builders ([`grid_from_rows`], [`arange_grid`]), a seeded generator
//! ([`seeded_rng`]), and assertions over a running
//! [`Simulation`](antsort_engine::Simulation). Config presets live in
//! [`fixtures`].
//!
//! Only integration tests (`tests/`) may use this crate: it depends on the
//! library crates themselves.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use antsort_core::Color;
use antsort_engine::Simulation;
use antsort_grid::Grid;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic generator for tests.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Build a grid whose row `x` is `rows[x]`. All rows must share a length.
pub fn grid_from_rows(rows: &[&[u16]]) -> Grid {
    assert!(!rows.is_empty(), "grid_from_rows needs at least one row");
    let height = rows[0].len();
    let mut g = Grid::new(rows.len(), height).expect("fixture dimensions are valid");
    for (x, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), height, "row {x} has the wrong length");
        for (y, &c) in row.iter().enumerate() {
            g.set_color(x, y, Color(c));
        }
    }
    g
}

/// A `width × height` grid where cell `(x, y)` holds color `x * height + y`.
///
/// Every cell except `(0, 0)` carries a distinct color, so a window's
/// contents identify exactly which global cells it covers.
pub fn arange_grid(width: usize, height: usize) -> Grid {
    let mut g = Grid::new(width, height).expect("fixture dimensions are valid");
    for x in 0..width {
        for y in 0..height {
            let id = u16::try_from(x * height + y).expect("arange grid too large for u16 colors");
            g.set_color(x, y, Color(id));
        }
    }
    g
}

/// The 5×5 pattern behind the perceived-fraction reference values. The
/// full window around `(2, 2)` holds color 2 four times, color 3 eight
/// times, color 4 five times, and no color 1.
pub fn fraction_pattern_grid() -> Grid {
    grid_from_rows(&[
        &[2, 2, 2, 2, 3],
        &[4, 4, 4, 4, 4],
        &[0, 0, 0, 0, 3],
        &[0, 0, 0, 0, 3],
        &[3, 3, 3, 3, 3],
    ])
}

/// Every ant's position carries exactly one ant flag and no other cell does.
pub fn assert_presence_consistent(sim: &Simulation) {
    let grid = sim.grid();
    assert_eq!(
        grid.ant_count(),
        sim.ants().len(),
        "ant flags on grid do not match colony size"
    );
    let mut seen = vec![false; grid.cell_count()];
    for (i, ant) in sim.ants().iter().enumerate() {
        let (x, y) = ant.position();
        assert!(
            grid.has_ant(x, y),
            "ant {i} at ({x}, {y}) has no presence flag"
        );
        let idx = grid.index(x, y).expect("ant position in bounds");
        assert!(!seen[idx], "two ants share cell ({x}, {y})");
        seen[idx] = true;
    }
}

/// Grid objects plus carried objects equal the configured object count, per
/// color.
pub fn assert_objects_conserved(sim: &Simulation) {
    let colors = &sim.config().colors;
    for (i, &expected) in colors.iter().enumerate() {
        let color = Color::from_index(i).expect("fixture color count fits");
        let on_grid = sim.grid().count_color(color);
        let carried = sim
            .ants()
            .iter()
            .filter(|a| a.load() == Some(color))
            .count();
        assert_eq!(
            on_grid + carried,
            expected,
            "color {color}: {on_grid} on grid + {carried} carried != {expected}"
        );
    }
}
