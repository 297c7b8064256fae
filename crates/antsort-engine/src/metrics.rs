//! Per-tick and per-run counters.
//!
//! [`TickMetrics`] captures what the ants did during a single tick;
//! [`RunReport`] aggregates a whole [`run()`](crate::Simulation::run) and
//! carries the final color snapshot.

use antsort_ant::{LoadAction, UpdateOutcome};
use antsort_core::TickId;
use antsort_grid::ColorMatrix;

/// Counters collected during a single tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickMetrics {
    /// Tick these counters belong to.
    pub tick: TickId,
    /// Objects picked up.
    pub pickups: u64,
    /// Objects dropped by the probabilistic rule.
    pub dropoffs: u64,
    /// Ants that changed cells.
    pub moves: u64,
    /// Steps refused because another ant held the target cell.
    pub blocked_moves: u64,
    /// Wall-clock time for the tick, in microseconds.
    pub elapsed_us: u64,
}

impl TickMetrics {
    pub(crate) fn record(&mut self, outcome: &UpdateOutcome) {
        match outcome.action {
            LoadAction::PickedUp(_) => self.pickups += 1,
            LoadAction::Dropped(_) => self.dropoffs += 1,
            LoadAction::None => {}
        }
        self.moves += u64::from(outcome.moved);
        self.blocked_moves += u64::from(outcome.blocked);
    }
}

/// Summary of a completed run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// Ticks executed by this run.
    pub ticks: u64,
    /// Objects picked up across the run.
    pub pickups: u64,
    /// Probabilistic drops across the run.
    pub dropoffs: u64,
    /// Unconditional drops: periodic resets plus the final unload.
    pub forced_drops: u64,
    /// Wall-clock time for the run, in microseconds.
    pub elapsed_us: u64,
    /// Color layer after the final unload. No object is held by an ant.
    pub snapshot: ColorMatrix,
}

#[cfg(test)]
mod tests {
    use super::*;
    use antsort_core::Color;

    #[test]
    fn default_metrics_are_zero() {
        let m = TickMetrics::default();
        assert_eq!(m.tick, TickId(0));
        assert_eq!(m.pickups, 0);
        assert_eq!(m.dropoffs, 0);
        assert_eq!(m.moves, 0);
        assert_eq!(m.blocked_moves, 0);
        assert_eq!(m.elapsed_us, 0);
    }

    #[test]
    fn record_counts_each_outcome() {
        let mut m = TickMetrics::default();
        m.record(&UpdateOutcome {
            action: LoadAction::PickedUp(Color(1)),
            moved: true,
            blocked: false,
        });
        m.record(&UpdateOutcome {
            action: LoadAction::Dropped(Color(2)),
            moved: false,
            blocked: true,
        });
        m.record(&UpdateOutcome::default());
        assert_eq!(m.pickups, 1);
        assert_eq!(m.dropoffs, 1);
        assert_eq!(m.moves, 1);
        assert_eq!(m.blocked_moves, 1);
    }

    #[test]
    fn counters_hold_more_than_u32() {
        let mut m = TickMetrics {
            pickups: u64::from(u32::MAX),
            moves: u64::from(u32::MAX),
            ..TickMetrics::default()
        };
        m.record(&UpdateOutcome {
            action: LoadAction::PickedUp(Color(1)),
            moved: true,
            blocked: false,
        });
        assert_eq!(m.pickups, u64::from(u32::MAX) + 1);
        assert_eq!(m.moves, u64::from(u32::MAX) + 1);
    }
}
