//! Benchmark profiles for the antsort simulation.
//!
//! - [`reference_profile`]: the default 200x200 field (40K cells, 500 ants)
//! - [`stress_profile`]: 600x600 field (360K cells, 5K ants, four colors)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use antsort_engine::AcaConfig;

/// The default configuration with a fixed seed.
pub fn reference_profile(seed: u64) -> AcaConfig {
    AcaConfig {
        seed,
        ..AcaConfig::default()
    }
}

/// A larger, denser field for throughput measurements.
pub fn stress_profile(seed: u64) -> AcaConfig {
    AcaConfig {
        width: 600,
        height: 600,
        colors: vec![2_000, 2_000, 2_000, 2_000],
        num_ants: 5_000,
        radius: 4,
        seed,
        ..AcaConfig::default()
    }
}
