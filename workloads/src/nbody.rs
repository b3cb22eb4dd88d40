use log::debug;
use ndarray::{Array1, Array2, ArrayView2, Axis};
use ndarray_rand::RandomExt;
use rand::{SeedableRng, rngs::StdRng};
use rand_distr::StandardNormal;

use crate::{
    Result,
    config::NBodyConfig,
    error::at_least,
    timer::{Timed, measure},
};

pub const DT: f64 = 0.01;
pub const SOFTENING: f64 = 0.1;

const POSITION_SCALE: f64 = 10.0;
const VELOCITY_SCALE: f64 = 0.1;

/// A fixed set of particles moving under pairwise inverse-square attraction.
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    pos: Array2<f64>,
    vel: Array2<f64>,
    mass: Array1<f64>,
}

impl ParticleSystem {
    /// Creates a system of `atoms` unit-mass particles scattered around the origin.
    ///
    /// # Arguments
    /// * `atoms` - The amount of particles, at least 2.
    /// * `seed` - Seed for positions and velocities, the same seed gives the same system.
    pub fn random(atoms: usize, seed: u64) -> Result<Self> {
        at_least("atom count", atoms as u64, 2)?;

        let mut rng = StdRng::seed_from_u64(seed);
        let pos: Array2<f64> = Array2::random_using((atoms, 3), StandardNormal, &mut rng);
        let vel: Array2<f64> = Array2::random_using((atoms, 3), StandardNormal, &mut rng);

        Ok(Self {
            pos: pos * POSITION_SCALE,
            vel: vel * VELOCITY_SCALE,
            mass: Array1::ones(atoms),
        })
    }

    pub fn len(&self) -> usize {
        self.mass.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mass.is_empty()
    }

    pub fn positions(&self) -> ArrayView2<'_, f64> {
        self.pos.view()
    }

    /// Accumulates the pairwise forces and integrates velocities, then positions.
    pub fn step(&mut self, dt: f64) {
        let forces = compute_forces(self.pos.view(), SOFTENING);
        let mass = self.mass.view().insert_axis(Axis(1));

        self.vel += &(forces * dt / &mass);
        self.pos.scaled_add(dt, &self.vel);
    }
}

/// Computes the net force on every particle.
///
/// Each unordered pair is visited once and its contribution is added to one particle and
/// subtracted from the other, so the forces always sum to zero.
///
/// # Arguments
/// * `pos` - An `(n, 3)` array of positions.
/// * `softening` - Added to every pair distance to keep close encounters finite.
pub fn compute_forces(pos: ArrayView2<f64>, softening: f64) -> Array2<f64> {
    let n = pos.nrows();
    let mut forces = Array2::zeros(pos.raw_dim());

    for i in 0..n {
        for j in i + 1..n {
            let r = &pos.row(j) - &pos.row(i);
            let dist = r.dot(&r).sqrt() + softening;
            let f = r / dist.powi(3);

            forces.row_mut(i).scaled_add(1.0, &f);
            forces.row_mut(j).scaled_add(-1.0, &f);
        }
    }

    forces
}

/// The amount of pairwise interactions computed over a whole run.
pub fn interactions(atoms: usize, steps: usize) -> u64 {
    let atoms = atoms as u64;
    atoms * atoms.saturating_sub(1) / 2 * steps as u64
}

/// Runs the n-body workload, only the integration loop is timed.
///
/// # Returns
/// The total pairwise interactions computed.
pub fn run(cfg: &NBodyConfig) -> Result<Timed<u64>> {
    debug!(atoms = cfg.atoms, steps = cfg.steps, seed = cfg.seed; "starting n-body simulation");

    let mut system = ParticleSystem::random(cfg.atoms, cfg.seed)?;
    let timed = measure(|| {
        for _ in 0..cfg.steps {
            system.step(DT);
        }
    });

    Ok(timed.map(|()| interactions(cfg.atoms, cfg.steps)))
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;
    use crate::WorkloadError;

    fn assert_balanced(forces: &Array2<f64>) {
        for total in forces.sum_axis(Axis(0)).iter() {
            assert!(total.abs() < 1e-10, "net force {total} is not zero");
        }
    }

    #[test]
    fn forces_sum_to_zero() {
        let system = ParticleSystem::random(50, 42).unwrap();
        assert_balanced(&compute_forces(system.positions(), SOFTENING));
    }

    #[test]
    fn forces_stay_balanced_while_stepping() {
        let mut system = ParticleSystem::random(20, 7).unwrap();

        for _ in 0..25 {
            system.step(DT);
            assert_balanced(&compute_forces(system.positions(), SOFTENING));
        }
    }

    #[test]
    fn pair_force_is_antisymmetric() {
        let pos = array![[0.0, 0.0, 0.0], [1.9, 0.0, 0.0]];
        let forces = compute_forces(pos.view(), SOFTENING);

        // dist = 1.9 + 0.1, f = 1.9 / 8
        assert!((forces[[0, 0]] - 1.9 / 8.0).abs() < 1e-12);
        assert_eq!(forces.row(0).to_owned(), -&forces.row(1));
    }

    #[test]
    fn same_seed_gives_same_system() {
        let a = ParticleSystem::random(10, 42).unwrap();
        let b = ParticleSystem::random(10, 42).unwrap();
        assert_eq!(a.positions(), b.positions());
    }

    #[test]
    fn interaction_count_is_quadratic() {
        assert_eq!(interactions(150, 300), 150 * 149 / 2 * 300);
        assert_eq!(interactions(2, 1), 1);
    }

    #[test]
    fn run_reports_interactions() {
        let cfg = NBodyConfig {
            atoms: 12,
            steps: 3,
            seed: 42,
        };
        assert_eq!(run(&cfg).unwrap().value, 12 * 11 / 2 * 3);
    }

    #[test]
    fn single_atom_is_rejected() {
        let err = ParticleSystem::random(1, 42).unwrap_err();
        assert!(matches!(err, WorkloadError::InvalidParameter { got: 1, .. }));
    }
}
