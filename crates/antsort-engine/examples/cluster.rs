//! Ant clustering demo: scatter two colors, let the colony sort them.
//!
//! Demonstrates:
//!   1. Building an AcaConfig and a Simulation
//!   2. Running with periodic forced unloading and an observer
//!   3. Reading snapshots and measuring neighbour homogeneity
//!
//! Run with:
//!   RUST_LOG=antsort_engine=debug cargo run --example cluster

use antsort_core::Color;
use antsort_engine::{AcaConfig, Simulation};
use antsort_grid::ColorMatrix;
use tracing_subscriber::EnvFilter;

// ─── Parameters ─────────────────────────────────────────────────

const WIDTH: usize = 30;
const HEIGHT: usize = 60;
const ITERATIONS: u64 = 20_000;
const RESET_PERIOD: u64 = 5_000;
const REPORT_EVERY: u64 = 2_000;

// ─── Rendering ──────────────────────────────────────────────────

fn glyph(c: Color) -> char {
    match c.0 {
        0 => '.',
        1 => 'o',
        2 => '#',
        n => char::from_digit(u32::from(n % 10), 10).unwrap_or('?'),
    }
}

fn render(m: &ColorMatrix) -> String {
    let mut out = String::with_capacity(m.width() * (m.height() + 1));
    for row in m.rows() {
        out.extend(row.iter().copied().map(glyph));
        out.push('\n');
    }
    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AcaConfig {
        width: WIDTH,
        height: HEIGHT,
        colors: vec![200, 200],
        num_ants: 60,
        radius: 2,
        k1: 0.1,
        k2: 0.1,
        seed: 42,
        ..AcaConfig::default()
    };
    let mut sim = Simulation::new(config)?;

    let before = sim.snapshot();
    println!("Before (homogeneity {:.3}):", before.neighbour_homogeneity());
    println!("{}", render(&before));

    let report = sim.run_observed(ITERATIONS, Some(RESET_PERIOD), |tick, m| {
        if tick.0 % REPORT_EVERY == 0 {
            println!("  tick {tick:>6}  homogeneity {:.3}", m.neighbour_homogeneity());
        }
    })?;

    println!();
    println!(
        "After {} ticks (homogeneity {:.3}):",
        report.ticks,
        report.snapshot.neighbour_homogeneity()
    );
    println!("{}", render(&report.snapshot));
    println!(
        "pickups {}  dropoffs {}  forced drops {}  elapsed {} ms",
        report.pickups,
        report.dropoffs,
        report.forced_drops,
        report.elapsed_us / 1000
    );
    Ok(())
}
