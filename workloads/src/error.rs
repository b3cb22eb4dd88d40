use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used across the workload kernels.
pub type Result<T> = std::result::Result<T, WorkloadError>;

/// The workloads crate's error type.
#[derive(Debug)]
pub enum WorkloadError {
    /// A parameter is below the smallest value the kernel can run with.
    InvalidParameter {
        what: &'static str,
        got: u64,
        min: u64,
    },
    /// Two operands don't agree on a dimension.
    ShapeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    /// A random distribution could not be built.
    Distribution(String),
}

impl Display for WorkloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkloadError::InvalidParameter { what, got, min } => {
                write!(f, "invalid {what}: got {got}, needs at least {min}")
            }
            WorkloadError::ShapeMismatch {
                what,
                got,
                expected,
            } => write!(
                f,
                "There's a shape mismatch in {what}, got {got} and expected {expected}"
            ),
            WorkloadError::Distribution(msg) => {
                write!(f, "failed to build random distribution: {msg}")
            }
        }
    }
}

impl Error for WorkloadError {}

/// Checks that `got` is at least `min`.
pub(crate) fn at_least(what: &'static str, got: u64, min: u64) -> Result<()> {
    if got < min {
        return Err(WorkloadError::InvalidParameter { what, got, min });
    }

    Ok(())
}
