use nalgebra::{convert, RealField};
use num_traits::ToPrimitive;

/// Trait for floating point types (f32, f64)
/// Mainly used to identify the type of the field in nalgebra
pub trait FloatingPoint: RealField + ToPrimitive + Copy {
    /// Convert an exact integer count (a binomial coefficient, a sample index) into the field
    fn from_count(n: u128) -> Self {
        convert(n as f64)
    }

    /// `k / n` as a parameter in [0, 1]
    fn ratio(k: usize, n: usize) -> Self {
        Self::from_count(k as u128) / Self::from_count(n as u128)
    }
}

impl FloatingPoint for f32 {}
impl FloatingPoint for f64 {}
