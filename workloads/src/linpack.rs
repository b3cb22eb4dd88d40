use std::time::Duration;

use log::debug;
use ndarray::{Array2, ArrayView2};
use ndarray_rand::RandomExt;
use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::Uniform;

use crate::{
    Result, WorkloadError,
    config::LinpackConfig,
    error::at_least,
    timer::{Timed, measure, rate},
};

/// Outcome of a matrix multiply run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinpackRun {
    pub flops: u64,
    /// `None` if the product finished faster than the clock could tell.
    pub gflops: Option<f64>,
}

/// Fills an `n x n` matrix with values uniformly drawn from `[0, 1)`.
pub fn random_matrix<R: Rng>(n: usize, rng: &mut R) -> Result<Array2<f64>> {
    let unit = Uniform::<f64>::new(0.0, 1.0).map_err(|e| WorkloadError::Distribution(e.to_string()))?;
    Ok(Array2::random_using((n, n), unit, rng))
}

/// Computes the matrix product `a * b`.
pub fn multiply(a: ArrayView2<f64>, b: ArrayView2<f64>) -> Result<Array2<f64>> {
    if a.ncols() != b.nrows() {
        return Err(WorkloadError::ShapeMismatch {
            what: "matrix product",
            got: b.nrows(),
            expected: a.ncols(),
        });
    }

    Ok(a.dot(&b))
}

/// Floating point operations of a dense `n x n` product.
pub fn flops(n: usize) -> u64 {
    2 * (n as u64).pow(3)
}

/// Billions of floating point operations per second for an `n x n` product.
pub fn gflops(n: usize, elapsed: Duration) -> Option<f64> {
    rate(flops(n), elapsed).map(|per_sec| per_sec / 1e9)
}

/// Runs the matrix multiply workload, only the product is timed.
pub fn run(cfg: &LinpackConfig) -> Result<Timed<LinpackRun>> {
    at_least("matrix size", cfg.size as u64, 1)?;
    debug!(size = cfg.size; "starting matrix multiply");

    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let a = random_matrix(cfg.size, &mut rng)?;
    let b = random_matrix(cfg.size, &mut rng)?;

    let timed = measure(|| multiply(a.view(), b.view()));
    let elapsed = timed.elapsed;
    timed.value?;

    Ok(Timed {
        value: LinpackRun {
            flops: flops(cfg.size),
            gflops: gflops(cfg.size, elapsed),
        },
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    fn identity_keeps(n: usize) {
        let mut rng = StdRng::seed_from_u64(n as u64);
        let m = random_matrix(n, &mut rng).unwrap();
        let product = multiply(Array2::eye(n).view(), m.view()).unwrap();

        for (got, want) in product.iter().zip(m.iter()) {
            assert!((got - want).abs() < 1e-12);
        }
    }

    #[test]
    fn identity_product_is_unchanged() {
        identity_keeps(1);
        identity_keeps(10);
        identity_keeps(100);
    }

    #[test]
    fn multiply_small_matrices() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let b = array![[5.0, 6.0], [7.0, 8.0]];
        let c = multiply(a.view(), b.view()).unwrap();

        assert_eq!(c, array![[19.0, 22.0], [43.0, 50.0]]);
    }

    #[test]
    fn mismatched_shapes_are_rejected() {
        let a = Array2::<f64>::zeros((2, 3));
        let b = Array2::<f64>::zeros((2, 3));
        assert!(matches!(
            multiply(a.view(), b.view()),
            Err(WorkloadError::ShapeMismatch { got: 2, expected: 3, .. })
        ));
    }

    #[test]
    fn random_values_are_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(3);
        let m = random_matrix(20, &mut rng).unwrap();
        assert!(m.iter().all(|&v| (0.0..1.0).contains(&v)));
    }

    #[test]
    fn gflops_from_elapsed() {
        assert_eq!(flops(400), 128_000_000);
        assert_eq!(gflops(500, Duration::from_millis(125)), Some(2.0));
        assert_eq!(gflops(500, Duration::ZERO), None);
    }

    #[test]
    fn run_reports_flops() {
        let cfg = LinpackConfig {
            size: 16,
            seed: Some(42),
        };
        assert_eq!(run(&cfg).unwrap().value.flops, 2 * 16 * 16 * 16);
    }
}
