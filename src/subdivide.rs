use crate::misc::{GeometryError, Result};

/// A trait for refining a control structure by repeated subdivision passes
pub trait Subdivide
where
    Self: Sized,
{
    /// Largest accepted number of passes
    /// Every pass multiplies the output size, so the count is bounded well before memory runs out.
    const MAX_ITERATIONS: usize;

    /// Apply a single refinement pass
    fn subdivide(&self) -> Result<Self>;

    /// Apply `iterations` refinement passes, each one on the previous output
    /// # Failures
    /// - if `iterations` is zero or greater than `MAX_ITERATIONS`
    fn subdivide_n(&self, iterations: usize) -> Result<Self> {
        if iterations == 0 || iterations > Self::MAX_ITERATIONS {
            return Err(GeometryError::ParameterOutOfRange(format!(
                "iteration count {iterations} is outside of [1, {}]",
                Self::MAX_ITERATIONS
            )));
        }
        (1..iterations).try_fold(self.subdivide()?, |current, _| current.subdivide())
    }
}
