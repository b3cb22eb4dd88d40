use std::{io::Write, time::Instant};

use anyhow::{Context, Result};
use log::{info, warn};
use workloads::{keysearch, lorenz};

use crate::{
    capability::Capabilities,
    profile::Profile,
    report::{Reporter, group_digits},
    summary::{Outcome, SuiteSummary, Workload},
};

/// Runs every workload of a profile in sequence and reports into `W`.
pub struct Suite<W: Write> {
    profile: Profile,
    reporter: Reporter<W>,
}

impl<W: Write> Suite<W> {
    /// Creates a new `Suite`.
    ///
    /// # Arguments
    /// * `profile` - The workload parameters.
    /// * `out` - Where the report is written.
    pub fn new(profile: Profile, out: W) -> Self {
        Self {
            profile,
            reporter: Reporter::new(out),
        }
    }

    /// Gives back the report sink.
    pub fn into_inner(self) -> W {
        self.reporter.into_inner()
    }

    /// Runs the whole suite.
    ///
    /// Workloads needing array math are skipped with a notice if `caps` lacks it, they don't
    /// fail the run.
    ///
    /// # Returns
    /// The per workload outcomes, or an error if the report couldn't be written or a workload
    /// rejected its parameters.
    pub fn run(&mut self, caps: Capabilities) -> Result<SuiteSummary> {
        info!(profile = self.profile.name; "running workload suite");
        if !caps.array_math() {
            warn!("array math unavailable, n-body, diffusion and linpack will be skipped");
        }

        let start = Instant::now();
        let mut summary = SuiteSummary::default();
        self.reporter.banner(&self.profile)?;

        for workload in Workload::ALL {
            let outcome = self
                .run_one(workload, caps, &mut summary)
                .with_context(|| format!("running {workload:?} workload"))?;

            match outcome {
                Outcome::Completed { elapsed } => {
                    info!(workload:? = workload, secs = elapsed.as_secs_f64(); "workload finished")
                }
                Outcome::Unavailable => info!(workload:? = workload; "workload skipped"),
            }
            summary.record(workload, outcome);
        }

        summary.set_total(start.elapsed());
        self.reporter
            .summary(&self.profile, &summary)
            .context("writing summary")?;

        Ok(summary)
    }

    fn run_one(
        &mut self,
        workload: Workload,
        caps: Capabilities,
        summary: &mut SuiteSummary,
    ) -> Result<Outcome> {
        let detail = self.detail(workload);
        self.reporter.section(workload, &detail)?;

        if workload.needs_array_math() && !caps.array_math() {
            self.reporter.unavailable(workload)?;
            return Ok(Outcome::Unavailable);
        }

        match workload {
            Workload::Lorenz => self.lorenz(),
            Workload::KeySearch => self.key_search(),
            Workload::NBody => self.nbody(),
            Workload::Diffusion => self.diffusion(),
            Workload::Linpack => self.linpack(summary),
        }
    }

    fn detail(&self, workload: Workload) -> String {
        let p = &self.profile;

        match workload {
            Workload::Lorenz => {
                format!("Simulating {} timesteps...", group_digits(p.lorenz.steps))
            }
            Workload::NBody => format!(
                "Simulating {} atoms for {} steps...",
                p.nbody.atoms, p.nbody.steps
            ),
            Workload::Diffusion => format!(
                "Grid: {0}x{0} | Iterations: {1}",
                p.diffusion.size, p.diffusion.iterations
            ),
            Workload::Linpack => format!("Matrix size: {0}x{0}", p.linpack.size),
            Workload::KeySearch => format!(
                "Searching {} keys...",
                group_digits(p.key_search.keyspace)
            ),
        }
    }

    fn lorenz(&mut self) -> Result<Outcome> {
        let steps = self.profile.lorenz.steps;
        let timed = lorenz::run(&self.profile.lorenz);

        self.reporter.lorenz(timed.value, steps, timed.elapsed)?;
        Ok(Outcome::Completed {
            elapsed: timed.elapsed,
        })
    }

    fn key_search(&mut self) -> Result<Outcome> {
        let timed = keysearch::run(&self.profile.key_search)?;

        self.reporter.key_search(&timed.value, timed.elapsed)?;
        Ok(Outcome::Completed {
            elapsed: timed.elapsed,
        })
    }
}

#[cfg(feature = "array-math")]
impl<W: Write> Suite<W> {
    fn nbody(&mut self) -> Result<Outcome> {
        let timed = workloads::nbody::run(&self.profile.nbody)?;

        self.reporter.nbody(timed.value, timed.elapsed)?;
        Ok(Outcome::Completed {
            elapsed: timed.elapsed,
        })
    }

    fn diffusion(&mut self) -> Result<Outcome> {
        let timed = workloads::diffusion::run(&self.profile.diffusion)?;
        let run = timed.value;

        self.reporter
            .diffusion(run.cell_updates, run.center, timed.elapsed)?;
        Ok(Outcome::Completed {
            elapsed: timed.elapsed,
        })
    }

    fn linpack(&mut self, summary: &mut SuiteSummary) -> Result<Outcome> {
        let timed = workloads::linpack::run(&self.profile.linpack)?;
        let run = timed.value;

        self.reporter.linpack(run.flops, run.gflops, timed.elapsed)?;
        summary.set_gflops(run.gflops);
        Ok(Outcome::Completed {
            elapsed: timed.elapsed,
        })
    }
}

// Unreached: `Capabilities` can't report array math when the feature is off.
#[cfg(not(feature = "array-math"))]
impl<W: Write> Suite<W> {
    fn nbody(&mut self) -> Result<Outcome> {
        self.skip(Workload::NBody)
    }

    fn diffusion(&mut self) -> Result<Outcome> {
        self.skip(Workload::Diffusion)
    }

    fn linpack(&mut self, _summary: &mut SuiteSummary) -> Result<Outcome> {
        self.skip(Workload::Linpack)
    }

    fn skip(&mut self, workload: Workload) -> Result<Outcome> {
        self.reporter.unavailable(workload)?;
        Ok(Outcome::Unavailable)
    }
}
