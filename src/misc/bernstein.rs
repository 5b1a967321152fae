use super::{binomial, FloatingPoint, GeometryError, Result, MAX_BINOMIAL_N};

/// Reject degrees whose binomial coefficients are not all exact
fn check_degree(n: usize) -> Result<()> {
    if n > MAX_BINOMIAL_N {
        return Err(GeometryError::DegreeTooHigh {
            degree: n,
            max: MAX_BINOMIAL_N,
        });
    }
    Ok(())
}

/// Exact `C(n, i)` as a field value, `n` must have passed `check_degree`
fn coefficient<T: FloatingPoint>(n: usize, i: usize) -> Result<T> {
    binomial(n, i)
        .map(T::from_count)
        .ok_or(GeometryError::DegreeTooHigh {
            degree: n,
            max: MAX_BINOMIAL_N,
        })
}

/// Evaluates the Bernstein basis polynomial `C(n, i) * t^i * (1 - t)^(n - i)`.
///
/// `t` is not restricted to [0, 1]: outside of it the polynomial extrapolates
/// and the value is no longer bounded.
/// # Failures
/// - if `n` exceeds `MAX_BINOMIAL_N`
///
/// # Example
/// ```
/// use curvelab::prelude::bernstein;
/// assert_eq!(bernstein(2, 5, 0.5_f64), Ok(0.3125));
/// assert!(bernstein(2, 121, 0.5_f64).is_err());
/// ```
pub fn bernstein<T: FloatingPoint>(i: usize, n: usize, t: T) -> Result<T> {
    check_degree(n)?;
    if i > n {
        return Ok(T::zero());
    }
    Ok(coefficient::<T>(n, i)? * t.powi(i as i32) * (T::one() - t).powi((n - i) as i32))
}

/// Cached Bernstein basis of a fixed degree.
/// Holds the binomial coefficients so that repeated evaluation
/// (sampling a surface row by row) skips recomputing them.
#[derive(Clone, Debug, PartialEq)]
pub struct BernsteinBasis<T> {
    coefficients: Vec<T>,
}

impl<T: FloatingPoint> BernsteinBasis<T> {
    /// Create the basis of the given degree
    /// # Failures
    /// - if the degree exceeds `MAX_BINOMIAL_N`
    pub fn try_new(degree: usize) -> Result<Self> {
        check_degree(degree)?;
        let coefficients = (0..=degree)
            .map(|i| coefficient(degree, i))
            .collect::<Result<_>>()?;
        Ok(Self { coefficients })
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Evaluate every basis function of the degree at `t`
    /// The returned vector has `degree + 1` values which sum to one.
    pub fn evaluate(&self, t: T) -> Vec<T> {
        let n = self.degree();
        let s = T::one() - t;
        self.coefficients
            .iter()
            .enumerate()
            .map(|(i, c)| *c * t.powi(i as i32) * s.powi((n - i) as i32))
            .collect()
    }

    /// Evaluate the basis at `divs + 1` regularly spaced parameters over [0, 1]
    pub fn regularly_spaced(&self, divs: usize) -> Vec<Vec<T>> {
        (0..=divs)
            .map(|k| self.evaluate(T::ratio(k, divs)))
            .collect()
    }
}
