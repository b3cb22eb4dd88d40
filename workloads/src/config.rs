//! Parameters for every workload kernel.
//!
//! These types don't depend on the array-math stack, so a build without it can still describe
//! (and skip) the workloads that need it.

/// Parameters of the Lorenz attractor iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LorenzConfig {
    pub steps: u64,
}

/// Parameters of the n-body simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NBodyConfig {
    pub atoms: usize,
    pub steps: usize,
    pub seed: u64,
}

/// Fixed temperatures of the four grid edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Boundary {
    /// A single hot top edge, every other edge held at zero.
    pub const HOT_TOP: Self = Self {
        top: 100.0,
        bottom: 0.0,
        left: 0.0,
        right: 0.0,
    };

    /// Hot top, cold bottom and warm sides.
    pub const PLATE: Self = Self {
        top: 100.0,
        bottom: 0.0,
        left: 50.0,
        right: 50.0,
    };

    /// Every edge held at the same temperature.
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            bottom: value,
            left: value,
            right: value,
        }
    }
}

/// Parameters of the 2D heat diffusion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffusionConfig {
    pub size: usize,
    pub iterations: usize,
    pub boundary: Boundary,
    pub interior: f64,
}

/// Parameters of the dense matrix multiply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinpackConfig {
    pub size: usize,
    /// Seeds the matrix generator, `None` draws the seed from the OS.
    pub seed: Option<u64>,
}

/// How each candidate key is hashed during the key search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyScheme {
    /// `(key * multiplier) mod modulus`.
    Multiplicative { multiplier: u64, modulus: u64 },
    /// XxHash64 of the string `"{prefix}{key}"`, reduced modulo the keyspace.
    Prefixed { prefix: &'static str },
}

/// Parameters of the brute force key search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySearchConfig {
    pub keyspace: u64,
    pub scheme: KeyScheme,
    /// The string whose hash is the search target.
    pub secret: &'static str,
}
