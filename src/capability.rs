/// Optional capabilities this build can use, detected once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    array_math: bool,
}

impl Capabilities {
    /// Detects what this binary was built with.
    pub fn detect() -> Self {
        Self {
            array_math: cfg!(feature = "array-math"),
        }
    }

    /// Capabilities with array math switched off, whatever the build supports.
    pub fn without_array_math() -> Self {
        Self { array_math: false }
    }

    /// Whether the n-body, diffusion and linpack workloads can run.
    pub fn array_math(&self) -> bool {
        self.array_math
    }
}
