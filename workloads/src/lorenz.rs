use log::debug;

use crate::{
    config::LorenzConfig,
    timer::{Timed, measure},
};

pub const SIGMA: f64 = 10.0;
pub const RHO: f64 = 28.0;
pub const BETA: f64 = 8.0 / 3.0;
pub const DT: f64 = 0.01;

/// A point of the Lorenz system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl State {
    pub const INITIAL: Self = Self {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };

    /// Advances the state by one forward Euler step.
    ///
    /// All three derivatives are taken from `self` before any coordinate moves.
    pub fn step(self, dt: f64) -> Self {
        let Self { x, y, z } = self;

        let dx = SIGMA * (y - x);
        let dy = x * (RHO - z) - y;
        let dz = x * y - BETA * z;

        Self {
            x: x + dx * dt,
            y: y + dy * dt,
            z: z + dz * dt,
        }
    }
}

/// Iterates the system `steps` times from `initial`.
///
/// Large step counts may blow up to infinity or NaN, that's just the output.
pub fn iterate(initial: State, steps: u64) -> State {
    (0..steps).fold(initial, |state, _| state.step(DT))
}

/// Runs the Lorenz workload from the fixed initial state.
pub fn run(cfg: &LorenzConfig) -> Timed<State> {
    debug!(steps = cfg.steps; "starting lorenz iteration");
    measure(|| iterate(State::INITIAL, cfg.steps))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_steps_keeps_initial_state() {
        assert_eq!(iterate(State::INITIAL, 0), State::INITIAL);
    }

    #[test]
    fn iteration_is_deterministic() {
        let a = iterate(State::INITIAL, 10_000);
        let b = iterate(State::INITIAL, 10_000);

        assert_eq!(a.x.to_bits(), b.x.to_bits());
        assert_eq!(a.y.to_bits(), b.y.to_bits());
        assert_eq!(a.z.to_bits(), b.z.to_bits());
    }

    #[test]
    fn step_uses_a_single_snapshot() {
        let s = State::INITIAL.step(DT);

        // dx = 0, dy = 26, dz = 1 - 8/3, all from (1, 1, 1)
        assert_eq!(s.x, 1.0);
        assert!((s.y - 1.26).abs() < 1e-12);
        assert!((s.z - (1.0 + (1.0 - BETA) * DT)).abs() < 1e-12);
    }

    #[test]
    fn run_reports_the_iterated_state() {
        let timed = run(&LorenzConfig { steps: 500 });
        assert_eq!(timed.value, iterate(State::INITIAL, 500));
    }
}
