//! Runs a handful of numeric workloads that needed a supercomputer in the early 1990s and
//! compares the machine it runs on against the historical ones.

pub mod capability;
pub mod profile;
pub mod report;
pub mod suite;
pub mod summary;

use std::io;

pub use capability::Capabilities;
pub use profile::Profile;
pub use suite::Suite;
pub use summary::{Outcome, SuiteSummary, Workload};

/// Detects the capabilities of this build and runs `profile`, reporting to stdout.
pub fn run_to_stdout(profile: Profile) -> anyhow::Result<SuiteSummary> {
    let caps = Capabilities::detect();
    let mut suite = Suite::new(profile, io::stdout().lock());
    suite.run(caps)
}
