//! Reusable simulation configurations.
//!
//! - [`small_config`]: a 20×16 field with two colors, quick to run.
//! - [`crowded_config`]: ants on almost every cell, to exercise blocking.
//! - [`dense_config`]: objects on every cell, to exercise forced drops with
//!   no free space except the ants' own pickups.

use antsort_engine::AcaConfig;

pub fn small_config(seed: u64) -> AcaConfig {
    AcaConfig {
        width: 20,
        height: 16,
        colors: vec![30, 30],
        num_ants: 20,
        radius: 1,
        k1: 0.1,
        k2: 0.1,
        seed,
        ..AcaConfig::default()
    }
}

pub fn crowded_config(seed: u64) -> AcaConfig {
    AcaConfig {
        width: 6,
        height: 6,
        colors: vec![6, 6],
        num_ants: 34,
        radius: 1,
        seed,
        ..AcaConfig::default()
    }
}

pub fn dense_config(seed: u64) -> AcaConfig {
    AcaConfig {
        width: 8,
        height: 8,
        colors: vec![32, 32],
        num_ants: 10,
        radius: 2,
        seed,
        ..AcaConfig::default()
    }
}
