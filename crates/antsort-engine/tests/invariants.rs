//! Whole-simulation invariants: conservation, presence, determinism.

use antsort_core::{AcaError, Color, TickId};
use antsort_ant::FractionMode;
use antsort_engine::{AcaConfig, Simulation};
use antsort_test_utils::fixtures::{crowded_config, dense_config, small_config};
use antsort_test_utils::{assert_objects_conserved, assert_presence_consistent};
use proptest::prelude::*;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("antsort_engine=debug")
        .with_test_writer()
        .try_init();
}

// ── Conservation and presence ───────────────────────────────────

#[test]
fn objects_and_presence_hold_every_tick() {
    let mut sim = Simulation::new(small_config(1)).unwrap();
    for _ in 0..300 {
        sim.tick();
        assert_objects_conserved(&sim);
        assert_presence_consistent(&sim);
    }
}

#[test]
fn crowded_grid_blocks_moves_without_losing_ants() {
    let mut sim = Simulation::new(crowded_config(2)).unwrap();
    let mut blocked = 0;
    for _ in 0..100 {
        blocked += sim.tick().blocked_moves;
        assert_presence_consistent(&sim);
    }
    assert!(blocked > 0);
    assert_objects_conserved(&sim);
}

#[test]
fn forced_drops_on_dense_grid_conserve_objects() {
    let mut sim = Simulation::new(dense_config(5)).unwrap();
    for _ in 0..40 {
        sim.tick();
    }
    let carried = sim.carried_count();
    assert_eq!(sim.drop_all(), carried);
    assert_eq!(sim.carried_count(), 0);
    assert_eq!(sim.grid().object_count(), 64);
    assert_objects_conserved(&sim);
}

#[test]
fn run_returns_with_no_loads() {
    init_logging();
    let mut sim = Simulation::new(small_config(3)).unwrap();
    let report = sim.run(500, Some(100)).unwrap();
    assert_eq!(sim.carried_count(), 0);
    assert_eq!(sim.current_tick(), TickId(500));
    assert_eq!(report.snapshot.object_count(), 60);
    assert_eq!(
        report.pickups,
        report.dropoffs + report.forced_drops,
        "every pickup ends in exactly one drop"
    );
}

#[test]
fn runs_accumulate_ticks() {
    let mut sim = Simulation::new(small_config(4)).unwrap();
    sim.run(10, None).unwrap();
    sim.run(15, Some(5)).unwrap();
    assert_eq!(sim.current_tick(), TickId(25));
}

// ── Observation ─────────────────────────────────────────────────

#[test]
fn observer_sees_every_tick_in_order() {
    let mut sim = Simulation::new(small_config(6)).unwrap();
    let mut ticks = Vec::new();
    sim.run_observed(12, None, |t, m| {
        assert_eq!(m.width(), 20);
        assert_eq!(m.height(), 16);
        ticks.push(t);
    })
    .unwrap();
    let expected: Vec<TickId> = (1..=12).map(TickId).collect();
    assert_eq!(ticks, expected);
}

#[test]
fn periodic_unload_lands_on_multiples_of_period() {
    let mut dipped = false;
    for seed in 0..4 {
        let mut sim = Simulation::new(small_config(seed)).unwrap();
        let mut counts = Vec::new();
        sim.run_observed(12, Some(3), |t, m| counts.push((t.0, m.object_count()))).unwrap();
        assert_eq!(counts.len(), 12);
        for &(tick, objects) in &counts {
            if tick % 3 == 0 {
                assert_eq!(objects, 60, "tick {tick}: loads left after unload");
            } else {
                dipped |= objects < 60;
            }
        }
    }
    assert!(dipped, "no ant carried anything between unloads");
}

#[test]
fn snapshot_is_idempotent_and_detached() {
    let mut sim = Simulation::new(small_config(8)).unwrap();
    let a = sim.snapshot();
    assert_eq!(a, sim.snapshot());
    sim.run(50, None).unwrap();
    assert_eq!(a.object_count(), 60);
    assert_eq!(a.color_counts()[1], 30);
}

// ── Errors ──────────────────────────────────────────────────────

#[test]
fn oversized_run_config_fails_before_allocating() {
    let cfg = AcaConfig {
        width: 4,
        height: 4,
        colors: vec![10, 7],
        num_ants: 1,
        ..AcaConfig::default()
    };
    match Simulation::new(cfg) {
        Err(AcaError::Capacity(e)) => {
            assert_eq!(e.requested, 17);
            assert_eq!(e.available, 16);
        }
        other => panic!("expected Capacity, got {other:?}"),
    }
}

#[test]
fn oversized_reset_period_is_ignored() {
    init_logging();
    let mut a = Simulation::new(small_config(9)).unwrap();
    let mut b = Simulation::new(small_config(9)).unwrap();
    let ra = a.run(30, Some(1000)).unwrap();
    let mut rb = b.run(30, None).unwrap();
    rb.elapsed_us = ra.elapsed_us;
    assert_eq!(ra, rb);
}

// ── Fraction modes ──────────────────────────────────────────────

#[test]
fn exclude_focal_mode_runs() {
    let cfg = AcaConfig {
        fraction_mode: FractionMode::ExcludeFocal,
        ..small_config(10)
    };
    let mut sim = Simulation::new(cfg).unwrap();
    sim.run(100, None).unwrap();
    assert_objects_conserved(&sim);
    assert_eq!(sim.grid().count_color(Color(2)), 30);
}

// ── Determinism ─────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn equal_seeds_replay_identically(seed in any::<u64>(), ticks in 1u64..60) {
        let mut a = Simulation::new(small_config(seed)).unwrap();
        let mut b = Simulation::new(small_config(seed)).unwrap();
        prop_assert_eq!(a.snapshot(), b.snapshot());
        for _ in 0..ticks {
            let (ma, mb) = (a.tick(), b.tick());
            prop_assert_eq!(ma.pickups, mb.pickups);
            prop_assert_eq!(ma.moves, mb.moves);
        }
        prop_assert_eq!(a.snapshot(), b.snapshot());
        prop_assert_eq!(a.ants(), b.ants());
    }

    #[test]
    fn reset_periods_conserve_objects(seed in any::<u64>(), period in 1u64..20) {
        let mut sim = Simulation::new(small_config(seed)).unwrap();
        let report = sim.run(40, Some(period)).unwrap();
        prop_assert_eq!(sim.carried_count(), 0);
        prop_assert_eq!(report.snapshot.color_counts()[1..].to_vec(), vec![30, 30]);
        assert_presence_consistent(&sim);
    }
}
