use std::{
    io::{self, Write},
    time::Duration,
};

use workloads::{keysearch::SearchOutcome, lorenz::State, rate};

use crate::{
    profile::Profile,
    summary::{SuiteSummary, Workload},
};

const RULE_WIDTH: usize = 60;

/// Matrix multiply throughput from which a machine counts as early-90s Cray class.
pub const CRAY_CLASS_GFLOPS: f64 = 2.0;
/// Matrix multiply throughput from which a machine approaches late-80s supercomputers.
pub const LATE_80S_GFLOPS: f64 = 0.5;
/// Shown in the comparison table when the matrix multiply didn't run.
pub const SKIPPED_GFLOPS_ESTIMATE: f64 = 1.5;

/// A historical machine in the comparison table.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceSystem {
    pub name: &'static str,
    pub year: u16,
    pub gflops: f64,
    pub cost: &'static str,
}

pub const REFERENCE_SYSTEMS: [ReferenceSystem; 3] = [
    ReferenceSystem {
        name: "Cray Y-MP",
        year: 1988,
        gflops: 2.6,
        cost: "$20M",
    },
    ReferenceSystem {
        name: "Cray C90",
        year: 1991,
        gflops: 16.0,
        cost: "$30M",
    },
    ReferenceSystem {
        name: "CM-5",
        year: 1991,
        gflops: 32.0,
        cost: "$5M",
    },
];

/// Where a measured throughput lands against the historical machines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    CrayClass,
    Late80s,
}

impl Verdict {
    pub fn from_gflops(gflops: f64) -> Option<Self> {
        if gflops >= CRAY_CLASS_GFLOPS {
            Some(Verdict::CrayClass)
        } else if gflops >= LATE_80S_GFLOPS {
            Some(Verdict::Late80s)
        } else {
            None
        }
    }
}

/// Writes the human readable report of a run into `W`.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn banner(&mut self, profile: &Profile) -> io::Result<()> {
        self.rule()?;
        writeln!(self.out, "  {}", profile.title)?;
        if let Some(subtitle) = profile.subtitle {
            writeln!(self.out, "  {subtitle}")?;
        }
        self.rule()
    }

    /// Opens the section of `workload`, `detail` describes its parameters.
    pub fn section(&mut self, workload: Workload, detail: &str) -> io::Result<()> {
        self.header(workload.title())?;
        writeln!(self.out, "{detail}")?;
        writeln!(self.out, "{}", workload.blurb())
    }

    pub fn unavailable(&mut self, workload: Workload) -> io::Result<()> {
        writeln!(
            self.out,
            "(array math unavailable - skipping {})",
            workload.title()
        )
    }

    pub fn lorenz(&mut self, state: State, steps: u64, elapsed: Duration) -> io::Result<()> {
        writeln!(
            self.out,
            "Final state: x={:.4}, y={:.4}, z={:.4}",
            state.x, state.y, state.z
        )?;
        self.timing(steps, "steps", elapsed)
    }

    pub fn nbody(&mut self, interactions: u64, elapsed: Duration) -> io::Result<()> {
        writeln!(
            self.out,
            "Interactions computed: {}",
            group_digits(interactions)
        )?;
        self.timing(interactions, "interactions", elapsed)
    }

    pub fn diffusion(
        &mut self,
        cell_updates: u64,
        center: f64,
        elapsed: Duration,
    ) -> io::Result<()> {
        writeln!(self.out, "Cell updates: {}", group_digits(cell_updates))?;
        writeln!(self.out, "Center temp: {center:.2} deg")?;
        self.timing(cell_updates, "cells", elapsed)
    }

    pub fn linpack(
        &mut self,
        flops: u64,
        gflops: Option<f64>,
        elapsed: Duration,
    ) -> io::Result<()> {
        writeln!(self.out, "Operations: {} FLOPs", group_digits(flops))?;
        writeln!(self.out, "Time: {:.3}s", elapsed.as_secs_f64())?;
        match gflops {
            Some(gflops) => writeln!(self.out, "Performance: {gflops:.2} GFLOPS"),
            None => writeln!(self.out, "Performance: n/a (too fast to time)"),
        }
    }

    pub fn key_search(&mut self, outcome: &SearchOutcome, elapsed: Duration) -> io::Result<()> {
        writeln!(self.out, "Keys tested: {}", group_digits(outcome.keys_tested))?;
        match outcome.matches.as_slice() {
            [] => writeln!(self.out, "Matching keys: none")?,
            matches => writeln!(self.out, "Matching keys: {matches:?}")?,
        }
        self.timing(outcome.keys_tested, "keys", elapsed)
    }

    pub fn summary(&mut self, profile: &Profile, summary: &SuiteSummary) -> io::Result<()> {
        self.header("SUMMARY")?;
        writeln!(
            self.out,
            "Total time: {:.1}s (workloads {:.1}s)",
            summary.total().as_secs_f64(),
            summary.workload_time().as_secs_f64()
        )?;
        writeln!(
            self.out,
            "Workloads completed: {} of {}",
            summary.completed(),
            summary.outcomes().len()
        )?;

        self.header("COMPARISON TO 1990s SUPERCOMPUTERS")?;
        self.comparison_table(summary.gflops())?;

        match summary.gflops().and_then(Verdict::from_gflops) {
            Some(Verdict::CrayClass) => {
                writeln!(self.out, ">>> This machine MATCHES early 1990s Cray performance!")?;
                writeln!(self.out, ">>> For a few hundred dollars vs $20-30 MILLION")?;
            }
            Some(Verdict::Late80s) => {
                writeln!(
                    self.out,
                    ">>> This machine approaches late-80s supercomputer level"
                )?;
            }
            None => {}
        }

        writeln!(self.out)?;
        write!(self.out, "{}", profile.closing)?;
        self.out.flush()
    }

    fn comparison_table(&mut self, gflops: Option<f64>) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "| System          | Year | GFLOPS | Cost      |")?;
        writeln!(self.out, "|-----------------|------|--------|-----------|")?;
        for system in REFERENCE_SYSTEMS {
            writeln!(
                self.out,
                "| {:<15} | {:>4} | {:>6.1} | {:<9} |",
                system.name, system.year, system.gflops, system.cost
            )?;
        }

        let measured = match gflops {
            Some(gflops) => format!("{gflops:.1}"),
            None => format!("~{SKIPPED_GFLOPS_ESTIMATE:.1}"),
        };
        writeln!(
            self.out,
            "| {:<15} | {:>4} | {:>6} | {:<9} |",
            "This machine", "now", measured, "-"
        )?;
        writeln!(self.out)
    }

    fn timing(&mut self, count: u64, unit: &str, elapsed: Duration) -> io::Result<()> {
        let per_sec = match rate(count, elapsed) {
            Some(per_sec) => group_digits(per_sec.round() as u64),
            None => "n/a".to_string(),
        };

        writeln!(
            self.out,
            "Time: {:.3}s | {per_sec} {unit}/sec",
            elapsed.as_secs_f64()
        )
    }

    fn header(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out)?;
        self.rule()?;
        writeln!(self.out, "  {title}")?;
        self.rule()
    }

    fn rule(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))
    }
}

/// Formats `n` with a comma between every group of three digits.
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}
