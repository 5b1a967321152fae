use nalgebra::{allocator::Allocator, DefaultAllocator, DimName, OPoint};

use super::FloatingPoint;

/// Linear interpolation `(1 - t) * a + t * b`
pub fn lerp<T: FloatingPoint, D: DimName>(a: &OPoint<T, D>, b: &OPoint<T, D>, t: T) -> OPoint<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    OPoint::from(&a.coords * (T::one() - t) + &b.coords * t)
}

/// Average of the given points
/// Returns `None` for an empty iterator
pub fn centroid<'a, T: FloatingPoint, D: DimName>(
    points: impl IntoIterator<Item = &'a OPoint<T, D>>,
) -> Option<OPoint<T, D>>
where
    DefaultAllocator: Allocator<D>,
{
    let (sum, count) = points.into_iter().fold(
        (OPoint::<T, D>::origin(), 0_usize),
        |(mut sum, count), p| {
            sum.coords += &p.coords;
            (sum, count + 1)
        },
    );
    if count == 0 {
        None
    } else {
        Some(OPoint::from(sum.coords / T::from_count(count as u128)))
    }
}
