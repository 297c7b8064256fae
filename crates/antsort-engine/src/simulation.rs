//! The simulation controller.
//!
//! # Ownership model
//!
//! [`Simulation`] exclusively owns its [`Grid`], every [`Ant`], and the
//! seeded [`ChaCha8Rng`]. A tick borrows the grid mutably once per ant, for
//! exactly as long as that ant's [`KernelView`](antsort_grid::KernelView)
//! lives, so updates are strictly sequential and each ant observes every
//! change made by the ants before it in the same tick.
//!
//! # Determinism
//!
//! All randomness (object placement, ant placement, and every per-tick
//! draw) comes from one generator seeded by [`AcaConfig::seed`]. Two
//! simulations built from equal configs produce identical trajectories.
//!
//! # Forced unloading
//!
//! [`drop_all()`](Simulation::drop_all) returns every carried object to
//! the grid: onto the ant's own cell when it is empty, otherwise onto the
//! nearest empty cell. Object counts are therefore conserved across resets.

use std::time::Instant;

use antsort_ant::{Ant, AntParams};
use antsort_core::{AcaError, InvalidParameterError, TickId};
use antsort_grid::{ColorMatrix, Grid};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::AcaConfig;
use crate::metrics::{RunReport, TickMetrics};

// Compile-time assertion: Simulation must be Send so it can be moved to a
// worker thread.
const _: () = {
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Simulation>();
    }
};

/// An ant clustering simulation.
pub struct Simulation {
    config: AcaConfig,
    params: AntParams,
    radius: usize,
    grid: Grid,
    ants: Vec<Ant>,
    rng: ChaCha8Rng,
    tick: TickId,
    last_metrics: TickMetrics,
}

impl Simulation {
    /// Build a simulation from `config`.
    ///
    /// Validation runs first; on `Err` nothing is allocated. Objects are
    /// scattered, then ants are placed on distinct cells, both drawn from
    /// the seeded generator.
    pub fn new(config: AcaConfig) -> Result<Self, AcaError> {
        config.validate()?;
        let params = config.ant_params()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut grid = Grid::with_colors(config.width, config.height, &config.colors, &mut rng)?;
        let ants: Vec<Ant> = grid
            .place_ants(config.num_ants, &mut rng)?
            .into_iter()
            .map(|(x, y)| Ant::new(x, y))
            .collect();

        tracing::debug!(
            width = config.width,
            height = config.height,
            objects = grid.object_count(),
            ants = ants.len(),
            radius = config.radius,
            seed = config.seed,
            "simulation initialised"
        );

        Ok(Self {
            radius: config.radius as usize,
            config,
            params,
            grid,
            ants,
            rng,
            tick: TickId(0),
            last_metrics: TickMetrics::default(),
        })
    }

    /// Advance one tick: every ant, in creation order, updates its load and
    /// takes one step within its kernel window.
    pub fn tick(&mut self) -> TickMetrics {
        let start = Instant::now();
        let mut metrics = TickMetrics::default();
        for ant in &mut self.ants {
            let (x, y) = ant.position();
            let mut view = self.grid.kernel_center(x, y, self.radius);
            let outcome = ant.update(&mut view, &self.params, &mut self.rng);
            metrics.record(&outcome);
        }
        self.tick = self.tick.next();
        metrics.tick = self.tick;
        metrics.elapsed_us = start.elapsed().as_micros() as u64;

        tracing::trace!(
            tick = %self.tick,
            pickups = metrics.pickups,
            dropoffs = metrics.dropoffs,
            moves = metrics.moves,
            blocked = metrics.blocked_moves,
            "tick complete"
        );
        self.last_metrics = metrics.clone();
        metrics
    }

    /// Run `iterations` ticks, then unload every ant.
    ///
    /// With `reset_period = Some(p)`, every ant is also unloaded after each
    /// tick whose 1-based number is a multiple of `p`. A period longer than
    /// the run is logged and ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AcaError::InvalidParameter`] if `iterations` is zero or
    /// `reset_period` is `Some(0)`. The simulation is untouched on `Err`.
    pub fn run(
        &mut self,
        iterations: u64,
        reset_period: Option<u64>,
    ) -> Result<RunReport, AcaError> {
        self.run_inner(iterations, reset_period, None)
    }

    /// Like [`run()`](Self::run), calling `observer` with the tick number
    /// and a color snapshot after every tick (and after any periodic unload
    /// on that tick).
    pub fn run_observed<F>(
        &mut self,
        iterations: u64,
        reset_period: Option<u64>,
        mut observer: F,
    ) -> Result<RunReport, AcaError>
    where
        F: FnMut(TickId, &ColorMatrix),
    {
        self.run_inner(iterations, reset_period, Some(&mut observer))
    }

    fn run_inner(
        &mut self,
        iterations: u64,
        reset_period: Option<u64>,
        mut observer: Option<&mut dyn FnMut(TickId, &ColorMatrix)>,
    ) -> Result<RunReport, AcaError> {
        let period = self.check_run(iterations, reset_period)?;
        tracing::debug!(
            iterations,
            reset_period = ?period,
            start_tick = %self.tick,
            "run started"
        );

        let start = Instant::now();
        let (mut pickups, mut dropoffs, mut forced_drops) = (0u64, 0u64, 0u64);
        for i in 1..=iterations {
            let m = self.tick();
            pickups += m.pickups;
            dropoffs += m.dropoffs;
            if period.is_some_and(|p| i % p == 0) {
                forced_drops += self.drop_all() as u64;
            }
            if let Some(obs) = observer.as_deref_mut() {
                obs(self.tick, &self.grid.snapshot());
            }
        }
        forced_drops += self.drop_all() as u64;
        let report = RunReport {
            ticks: iterations,
            pickups,
            dropoffs,
            forced_drops,
            elapsed_us: start.elapsed().as_micros() as u64,
            snapshot: self.grid.snapshot(),
        };

        tracing::debug!(
            ticks = report.ticks,
            pickups = report.pickups,
            dropoffs = report.dropoffs,
            forced_drops = report.forced_drops,
            elapsed_us = report.elapsed_us,
            "run finished"
        );
        Ok(report)
    }

    /// Validate run arguments and resolve the effective reset period.
    fn check_run(
        &self,
        iterations: u64,
        reset_period: Option<u64>,
    ) -> Result<Option<u64>, InvalidParameterError> {
        if iterations == 0 {
            return Err(InvalidParameterError::new(
                "iterations",
                "must be at least 1",
            ));
        }
        match reset_period {
            Some(0) => Err(InvalidParameterError::new(
                "reset_period",
                "must be at least 1",
            )),
            Some(p) if p > iterations => {
                tracing::warn!(
                    reset_period = p,
                    iterations,
                    "reset period exceeds run length; periodic unloading disabled"
                );
                Ok(None)
            }
            other => Ok(other),
        }
    }

    /// Unconditionally unload every ant. Returns the number of objects
    /// returned to the grid.
    pub fn drop_all(&mut self) -> usize {
        let mut dropped = 0;
        for ant in &mut self.ants {
            if !ant.is_loaded() {
                continue;
            }
            let (x, y) = ant.position();
            let Some((tx, ty)) = self.grid.nearest_empty(x, y) else {
                // Unreachable while objects are conserved: every carried
                // object left an empty cell behind.
                tracing::error!(x, y, "no empty cell for forced drop");
                continue;
            };
            if let Some(color) = ant.take_load() {
                self.grid.set_color(tx, ty, color);
                dropped += 1;
            }
        }
        if dropped > 0 {
            tracing::debug!(tick = %self.tick, dropped, "forced unload");
        }
        dropped
    }

    /// Point-in-time copy of the color layer.
    pub fn snapshot(&self) -> ColorMatrix {
        self.grid.snapshot()
    }

    /// The live grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// All ants, in update order.
    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    /// Number of ticks executed so far.
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// Configuration this simulation was built from.
    pub fn config(&self) -> &AcaConfig {
        &self.config
    }

    /// Number of ants currently carrying an object.
    pub fn carried_count(&self) -> usize {
        self.ants.iter().filter(|a| a.is_loaded()).count()
    }

    /// Metrics from the most recent tick.
    pub fn last_metrics(&self) -> &TickMetrics {
        &self.last_metrics
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("current_tick", &self.tick)
            .field("width", &self.grid.width())
            .field("height", &self.grid.height())
            .field("ants", &self.ants.len())
            .field("carried", &self.carried_count())
            .field("seed", &self.config.seed)
            .finish()
    }
}
