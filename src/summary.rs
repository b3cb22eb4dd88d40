use std::time::Duration;

/// The five workloads, in the order the suite runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Workload {
    Lorenz,
    NBody,
    Diffusion,
    Linpack,
    KeySearch,
}

impl Workload {
    pub const ALL: [Workload; 5] = [
        Workload::Lorenz,
        Workload::NBody,
        Workload::Diffusion,
        Workload::Linpack,
        Workload::KeySearch,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Workload::Lorenz => "WEATHER: Lorenz Attractor (Chaos Theory)",
            Workload::NBody => "MOLECULAR DYNAMICS: N-Body Simulation",
            Workload::Diffusion => "CFD: 2D Heat Diffusion",
            Workload::Linpack => "LINPACK-STYLE: Matrix Multiplication",
            Workload::KeySearch => "CRYPTANALYSIS: Brute Force Search",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            Workload::Lorenz => "This model showed why weather is hard to predict long-term",
            Workload::NBody => "1990s: Used for drug discovery, protein research",
            Workload::Diffusion => "1990s: Aircraft design, reactor cooling simulation",
            Workload::Linpack => "1990s: THE supercomputer benchmark (still used today)",
            Workload::KeySearch => "1990s: Code breaking, DES cracking attempts",
        }
    }

    /// Whether the workload needs the array-math capability.
    pub fn needs_array_math(&self) -> bool {
        matches!(
            self,
            Workload::NBody | Workload::Diffusion | Workload::Linpack
        )
    }
}

/// How a single workload ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed { elapsed: Duration },
    Unavailable,
}

impl Outcome {
    /// The measured time, zero for skipped workloads.
    pub fn elapsed(&self) -> Duration {
        match self {
            Outcome::Completed { elapsed } => *elapsed,
            Outcome::Unavailable => Duration::ZERO,
        }
    }
}

/// Everything the closing report needs from a run.
#[derive(Debug, Clone, Default)]
pub struct SuiteSummary {
    outcomes: Vec<(Workload, Outcome)>,
    gflops: Option<f64>,
    total: Duration,
}

impl SuiteSummary {
    pub(crate) fn record(&mut self, workload: Workload, outcome: Outcome) {
        self.outcomes.push((workload, outcome));
    }

    pub(crate) fn set_gflops(&mut self, gflops: Option<f64>) {
        self.gflops = gflops;
    }

    pub(crate) fn set_total(&mut self, total: Duration) {
        self.total = total;
    }

    pub fn outcome(&self, workload: Workload) -> Option<Outcome> {
        self.outcomes
            .iter()
            .find(|(w, _)| *w == workload)
            .map(|&(_, outcome)| outcome)
    }

    pub fn outcomes(&self) -> &[(Workload, Outcome)] {
        &self.outcomes
    }

    pub fn completed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, Outcome::Completed { .. }))
            .count()
    }

    /// The summed time of every workload, skipped ones add nothing.
    pub fn workload_time(&self) -> Duration {
        self.outcomes.iter().map(|(_, o)| o.elapsed()).sum()
    }

    /// Matrix multiply throughput, `None` if it didn't run or was too fast to time.
    pub fn gflops(&self) -> Option<f64> {
        self.gflops
    }

    /// Wall time of the whole run, reporting included.
    pub fn total(&self) -> Duration {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skipped_workloads_add_no_time() {
        let mut summary = SuiteSummary::default();
        summary.record(
            Workload::Lorenz,
            Outcome::Completed {
                elapsed: Duration::from_millis(30),
            },
        );
        summary.record(Workload::NBody, Outcome::Unavailable);
        summary.record(
            Workload::KeySearch,
            Outcome::Completed {
                elapsed: Duration::from_millis(20),
            },
        );

        assert_eq!(summary.workload_time(), Duration::from_millis(50));
        assert_eq!(summary.completed(), 2);
        assert_eq!(summary.outcome(Workload::NBody), Some(Outcome::Unavailable));
        assert_eq!(summary.outcome(Workload::Linpack), None);
    }

    #[test]
    fn array_math_workloads() {
        let needing: Vec<_> = Workload::ALL
            .into_iter()
            .filter(Workload::needs_array_math)
            .collect();

        assert_eq!(
            needing,
            [Workload::NBody, Workload::Diffusion, Workload::Linpack]
        );
    }
}
