use workloads::{
    config::{
        Boundary, DiffusionConfig, KeyScheme, KeySearchConfig, LinpackConfig, LorenzConfig,
        NBodyConfig,
    },
    keysearch::SECRET,
};

const NBODY_SEED: u64 = 42;

/// A complete set of workload parameters plus the text framing a run.
#[derive(Debug, Clone)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub lorenz: LorenzConfig,
    pub nbody: NBodyConfig,
    pub diffusion: DiffusionConfig,
    pub linpack: LinpackConfig,
    pub key_search: KeySearchConfig,
    pub closing: &'static str,
}

impl Profile {
    /// Smaller workloads that finish in a few seconds.
    pub fn quick() -> Self {
        Self {
            name: "quick",
            title: "1990s SUPERCOMPUTER WORKLOADS - QUICK VERSION",
            subtitle: None,
            lorenz: LorenzConfig { steps: 50_000 },
            nbody: NBodyConfig {
                atoms: 64,
                steps: 100,
                seed: NBODY_SEED,
            },
            diffusion: DiffusionConfig {
                size: 80,
                iterations: 500,
                boundary: Boundary::HOT_TOP,
                interior: 0.0,
            },
            linpack: LinpackConfig {
                size: 300,
                seed: None,
            },
            key_search: KeySearchConfig {
                keyspace: 1_000_000,
                scheme: KeyScheme::Multiplicative {
                    multiplier: 31337,
                    modulus: 999_983,
                },
                secret: SECRET,
            },
            closing: QUICK_CLOSING,
        }
    }

    /// The full-size workloads.
    pub fn full() -> Self {
        Self {
            name: "full",
            title: "1990s SUPERCOMPUTER WORKLOADS ON THIS MACHINE",
            subtitle: Some("Comparing to Cray C90 (~16 GFLOPS, $30 million)"),
            lorenz: LorenzConfig { steps: 100_000 },
            nbody: NBodyConfig {
                atoms: 150,
                steps: 300,
                seed: NBODY_SEED,
            },
            diffusion: DiffusionConfig {
                size: 100,
                iterations: 1000,
                boundary: Boundary::PLATE,
                interior: 0.0,
            },
            linpack: LinpackConfig {
                size: 400,
                seed: None,
            },
            key_search: KeySearchConfig {
                keyspace: 3_000_000,
                scheme: KeyScheme::Prefixed { prefix: "KEY_" },
                secret: SECRET,
            },
            closing: FULL_CLOSING,
        }
    }
}

const QUICK_CLOSING: &str = "\
What 1990s scientists needed supercomputers for:
  * Weather prediction    - runs here
  * Nuclear simulation    - runs here
  * Drug discovery        - runs here
  * Aircraft design       - runs here
  * Code breaking         - runs here

The $30M Cray C90 required:
  - Special building with raised floors
  - Massive cooling systems
  - Team of operators
  - Months of wait time for jobs

This machine:
  - Fits in a bag
  - Instant results
";

const FULL_CLOSING: &str = "\
In the 1990s, these workloads required:
  - Cray C90: $30,000,000 + building + cooling + staff
  - This machine: a few hundred dollars

This machine can simulate:
  * Weather chaos (Lorenz attractor)
  * Molecular interactions (drug research scale)
  * Heat/fluid flow (2D CFD)
  * Matrix math at early 90s Cray level
  * Cryptographic key search
";
