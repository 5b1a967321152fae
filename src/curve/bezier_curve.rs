use nalgebra::{allocator::Allocator, Const, DefaultAllocator, DimName, OPoint};
use simba::scalar::SupersetOf;

use crate::misc::{lerp, BernsteinBasis, FloatingPoint, GeometryError, Result};

use super::{CasteljauLayers, Polyline};

/// Bezier curve of arbitrary degree
/// By generics, it can be used for 2D or 3D curves with f32 or f64 scalar types.
/// The degree is the number of control points minus one.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(
        serialize = "OPoint<T, D>: serde::Serialize",
        deserialize = "OPoint<T, D>: serde::Deserialize<'de>"
    ), try_from = "Vec<OPoint<T, D>>", into = "Vec<OPoint<T, D>>")
)]
pub struct BezierCurve<T: FloatingPoint, D: DimName>
where
    DefaultAllocator: Allocator<D>,
{
    control_points: Vec<OPoint<T, D>>,
}

/// 2D Bezier curve alias
pub type BezierCurve2D<T> = BezierCurve<T, Const<2>>;
/// 3D Bezier curve alias
pub type BezierCurve3D<T> = BezierCurve<T, Const<3>>;

/// Reject a curve parameter outside of [0, 1] (NaN included)
pub(crate) fn check_parameter<T: FloatingPoint>(t: T) -> Result<()> {
    if t >= T::zero() && t <= T::one() {
        Ok(())
    } else {
        Err(GeometryError::ParameterOutOfRange(format!(
            "t = {t} is outside of [0, 1]"
        )))
    }
}

impl<T: FloatingPoint, D: DimName> BezierCurve<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    /// Create a new Bezier curve from its control points
    /// # Failures
    /// - if `control_points` is empty
    ///
    /// # Example
    /// ```
    /// use curvelab::prelude::*;
    /// use nalgebra::Point2;
    ///
    /// let curve = BezierCurve2D::try_new(vec![
    ///     Point2::new(0., 0.),
    ///     Point2::new(2., 0.),
    ///     Point2::new(2., 2.),
    /// ]).unwrap();
    /// assert_eq!(curve.degree(), 2);
    /// assert_eq!(curve.point_at(0.5).unwrap(), Point2::new(1.5, 0.5));
    /// ```
    pub fn try_new(control_points: Vec<OPoint<T, D>>) -> Result<Self> {
        if control_points.is_empty() {
            return Err(GeometryError::InvalidControlInput {
                required: 1,
                actual: 0,
            });
        }
        Ok(Self { control_points })
    }

    /// Create a curve of the given degree from the first `degree + 1` points
    /// # Failures
    /// - if there are less than `degree + 1` points
    ///
    /// # Example
    /// ```
    /// use curvelab::prelude::*;
    /// use nalgebra::Point2;
    ///
    /// let points = vec![
    ///     Point2::new(100., 500.),
    ///     Point2::new(200., 100.),
    ///     Point2::new(500., 100.),
    ///     Point2::new(700., 500.),
    /// ];
    /// let quadratic = BezierCurve2D::try_with_degree(&points, 2).unwrap();
    /// assert_eq!(quadratic.control_points().len(), 3);
    /// assert!(BezierCurve2D::try_with_degree(&points, 4).is_err());
    /// ```
    pub fn try_with_degree(points: &[OPoint<T, D>], degree: usize) -> Result<Self> {
        if points.len() < degree + 1 {
            return Err(GeometryError::InvalidControlInput {
                required: degree + 1,
                actual: points.len(),
            });
        }
        Self::try_new(points[..=degree].to_vec())
    }

    /// `control_points` must not be empty
    pub(crate) fn from_points_unchecked(control_points: Vec<OPoint<T, D>>) -> Self {
        debug_assert!(!control_points.is_empty());
        Self { control_points }
    }

    pub fn degree(&self) -> usize {
        self.control_points.len() - 1
    }

    pub fn control_points(&self) -> &[OPoint<T, D>] {
        &self.control_points
    }

    /// The control polygon as a polyline
    pub fn control_polygon(&self) -> Polyline<T, D> {
        Polyline::from(self.clone())
    }

    /// Evaluate the full de Casteljau construction at `t`
    /// # Failures
    /// - if `t` is outside of [0, 1]
    ///
    /// # Example
    /// ```
    /// use curvelab::prelude::*;
    /// use nalgebra::Point2;
    ///
    /// let curve = BezierCurve2D::try_new(vec![
    ///     Point2::new(0., 0.),
    ///     Point2::new(2., 0.),
    ///     Point2::new(2., 2.),
    /// ]).unwrap();
    /// let layers = curve.casteljau(0.5).unwrap();
    /// assert_eq!(layers.len(), 3);
    /// assert_eq!(layers.intermediate(), &[vec![Point2::new(1., 0.), Point2::new(2., 1.)]]);
    /// assert_eq!(layers.point(), &Point2::new(1.5, 0.5));
    /// ```
    pub fn casteljau(&self, t: T) -> Result<CasteljauLayers<T, D>> {
        check_parameter(t)?;
        Ok(CasteljauLayers::build(&self.control_points, t))
    }

    /// Evaluate the curve at `t` with de Casteljau's algorithm
    /// Only the point is kept: the layers are reduced in place.
    /// # Failures
    /// - if `t` is outside of [0, 1]
    pub fn point_at(&self, t: T) -> Result<OPoint<T, D>> {
        check_parameter(t)?;
        let mut scratch = Vec::with_capacity(self.control_points.len());
        Ok(self.reduce(&mut scratch, t))
    }

    /// Reduce a copy of the control points into the curve point at `t`
    fn reduce(&self, scratch: &mut Vec<OPoint<T, D>>, t: T) -> OPoint<T, D> {
        scratch.clear();
        scratch.extend_from_slice(&self.control_points);
        for n in (1..scratch.len()).rev() {
            for i in 0..n {
                scratch[i] = lerp(&scratch[i], &scratch[i + 1], t);
            }
        }
        scratch[0].clone()
    }

    /// Evaluate the curve at `t` as the Bernstein-weighted sum of the control points
    /// Unlike `point_at`, `t` is not checked: outside of [0, 1] the curve extrapolates.
    /// # Failures
    /// - if the degree exceeds `MAX_BINOMIAL_N`
    pub fn bernstein_point_at(&self, t: T) -> Result<OPoint<T, D>> {
        let basis = BernsteinBasis::try_new(self.degree())?;
        let mut position = OPoint::<T, D>::origin();
        for (p, b) in self.control_points.iter().zip(basis.evaluate(t)) {
            position.coords += &p.coords * b;
        }
        Ok(position)
    }

    /// Sample the curve at `sample_count + 1` regularly spaced parameters `k / sample_count`
    /// # Failures
    /// - if `sample_count` is zero
    ///
    /// # Example
    /// ```
    /// use curvelab::prelude::*;
    /// use nalgebra::Point2;
    ///
    /// let curve = BezierCurve2D::try_new(vec![Point2::new(0., 0.), Point2::new(4., 0.)]).unwrap();
    /// let samples = curve.sample(4).unwrap();
    /// assert_eq!(samples, vec![
    ///     Point2::new(0., 0.),
    ///     Point2::new(1., 0.),
    ///     Point2::new(2., 0.),
    ///     Point2::new(3., 0.),
    ///     Point2::new(4., 0.),
    /// ]);
    /// ```
    pub fn sample(&self, sample_count: usize) -> Result<Vec<OPoint<T, D>>> {
        if sample_count == 0 {
            return Err(GeometryError::ParameterOutOfRange(
                "sample count must be positive".to_string(),
            ));
        }
        let mut scratch = Vec::with_capacity(self.control_points.len());
        Ok((0..=sample_count)
            .map(|k| self.reduce(&mut scratch, T::ratio(k, sample_count)))
            .collect())
    }

    /// Cast the curve to another floating point type
    pub fn cast<F: FloatingPoint + SupersetOf<T>>(&self) -> BezierCurve<F, D> {
        BezierCurve {
            control_points: self
                .control_points
                .iter()
                .map(|p| p.clone().cast())
                .collect(),
        }
    }
}

impl<T: FloatingPoint, D: DimName> From<Polyline<T, D>> for BezierCurve<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    fn from(polyline: Polyline<T, D>) -> Self {
        Self::from_points_unchecked(polyline.into_points())
    }
}

impl<T: FloatingPoint, D: DimName> TryFrom<Vec<OPoint<T, D>>> for BezierCurve<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    type Error = GeometryError;

    fn try_from(control_points: Vec<OPoint<T, D>>) -> Result<Self> {
        Self::try_new(control_points)
    }
}

impl<T: FloatingPoint, D: DimName> From<BezierCurve<T, D>> for Vec<OPoint<T, D>>
where
    DefaultAllocator: Allocator<D>,
{
    fn from(curve: BezierCurve<T, D>) -> Self {
        curve.control_points
    }
}

impl<T: FloatingPoint, D: DimName> From<BezierCurve<T, D>> for Polyline<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    fn from(curve: BezierCurve<T, D>) -> Self {
        Polyline::from_points_unchecked(curve.control_points)
    }
}
