use nalgebra::{allocator::Allocator, Const, DefaultAllocator, DimName, OPoint};
use simba::scalar::SupersetOf;

use crate::misc::{centroid, FloatingPoint, GeometryError, Result};

/// Ordered sequence of points, the control polygon of a curve
/// Insertion order defines connectivity. Never empty.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(
        serialize = "OPoint<T, D>: serde::Serialize",
        deserialize = "OPoint<T, D>: serde::Deserialize<'de>"
    ), try_from = "Vec<OPoint<T, D>>", into = "Vec<OPoint<T, D>>")
)]
pub struct Polyline<T: FloatingPoint, D: DimName>
where
    DefaultAllocator: Allocator<D>,
{
    points: Vec<OPoint<T, D>>,
}

/// 2D polyline alias
pub type Polyline2D<T> = Polyline<T, Const<2>>;
/// 3D polyline alias
pub type Polyline3D<T> = Polyline<T, Const<3>>;

impl<T: FloatingPoint, D: DimName> Polyline<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    /// Create a new polyline
    /// # Failures
    /// - if `points` is empty
    ///
    /// # Example
    /// ```
    /// use curvelab::prelude::*;
    /// use nalgebra::Point2;
    ///
    /// let polyline = Polyline2D::try_new(vec![Point2::new(0., 0.), Point2::new(3., 4.)]).unwrap();
    /// assert_eq!(polyline.len(), 2);
    /// assert_eq!(polyline.length(), 5.);
    /// assert!(Polyline2D::<f64>::try_new(vec![]).is_err());
    /// ```
    pub fn try_new(points: Vec<OPoint<T, D>>) -> Result<Self> {
        if points.is_empty() {
            return Err(GeometryError::InvalidControlInput {
                required: 1,
                actual: 0,
            });
        }
        Ok(Self { points })
    }

    /// `points` must not be empty
    pub(crate) fn from_points_unchecked(points: Vec<OPoint<T, D>>) -> Self {
        debug_assert!(!points.is_empty());
        Self { points }
    }

    pub fn points(&self) -> &[OPoint<T, D>] {
        &self.points
    }

    pub fn into_points(self) -> Vec<OPoint<T, D>> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: construction rejects an empty point list
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> &OPoint<T, D> {
        &self.points[0]
    }

    pub fn last(&self) -> &OPoint<T, D> {
        &self.points[self.points.len() - 1]
    }

    /// Iterate over the edges as consecutive point pairs
    /// The polyline is open: there is no edge from the last point back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (&OPoint<T, D>, &OPoint<T, D>)> {
        self.points.iter().zip(self.points.iter().skip(1))
    }

    /// Sum of the edge lengths
    pub fn length(&self) -> T {
        self.edges()
            .map(|(a, b)| (b - a).norm())
            .fold(T::zero(), |acc, l| acc + l)
    }

    /// Average of the points
    pub fn centroid(&self) -> OPoint<T, D> {
        centroid(self.points.iter()).unwrap_or_else(OPoint::origin)
    }

    /// Cast the polyline to another floating point type
    pub fn cast<F: FloatingPoint + SupersetOf<T>>(&self) -> Polyline<F, D> {
        Polyline {
            points: self.points.iter().map(|p| p.clone().cast()).collect(),
        }
    }
}

impl<T: FloatingPoint, D: DimName> TryFrom<Vec<OPoint<T, D>>> for Polyline<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    type Error = GeometryError;

    fn try_from(points: Vec<OPoint<T, D>>) -> Result<Self> {
        Self::try_new(points)
    }
}

impl<T: FloatingPoint, D: DimName> From<Polyline<T, D>> for Vec<OPoint<T, D>>
where
    DefaultAllocator: Allocator<D>,
{
    fn from(polyline: Polyline<T, D>) -> Self {
        polyline.into_points()
    }
}
