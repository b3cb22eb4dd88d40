//! Numeric kernels of the supercomputer workload suite.
//!
//! `lorenz` and `keysearch` use scalar arithmetic only and are always built. `nbody`,
//! `diffusion` and `linpack` need the array-math stack and are only compiled with the
//! `array-math` feature.

pub mod config;
mod error;
pub mod keysearch;
pub mod lorenz;
pub mod timer;

#[cfg(feature = "array-math")]
pub mod diffusion;
#[cfg(feature = "array-math")]
pub mod linpack;
#[cfg(feature = "array-math")]
pub mod nbody;

pub use error::{Result, WorkloadError};
pub use timer::{Timed, measure, rate};
