use std::{fmt, str::FromStr};

use nalgebra::{allocator::Allocator, DefaultAllocator, DimName, OPoint};

use crate::{
    curve::{BezierCurve, CasteljauLayers, Polyline},
    misc::{FloatingPoint, GeometryError, Result},
};

use super::LabOptions;

/// Curve algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveAlgorithm {
    /// Bezier curve of the first 3 control points
    QuadraticBezier,
    /// Bezier curve of the first 4 control points
    CubicBezier,
    /// Bezier curve of every control point
    Bezier,
    /// Chaikin corner cutting of the control polygon
    Chaikin,
}

/// Result of a curve algorithm
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(bound(serialize = "T: serde::Serialize, OPoint<T, D>: serde::Serialize"))
)]
pub struct CurveOutput<T: FloatingPoint, D: DimName>
where
    DefaultAllocator: Allocator<D>,
{
    /// The polyline approximating the curve
    pub curve: Vec<OPoint<T, D>>,
    /// The de Casteljau construction at the options' parameter, for Bezier algorithms
    pub layers: Option<CasteljauLayers<T, D>>,
}

impl CurveAlgorithm {
    pub const ALL: [CurveAlgorithm; 4] = [
        CurveAlgorithm::QuadraticBezier,
        CurveAlgorithm::CubicBezier,
        CurveAlgorithm::Bezier,
        CurveAlgorithm::Chaikin,
    ];

    /// Fixed degree of the algorithm, if any
    pub fn degree(&self) -> Option<usize> {
        match self {
            CurveAlgorithm::QuadraticBezier => Some(2),
            CurveAlgorithm::CubicBezier => Some(3),
            CurveAlgorithm::Bezier | CurveAlgorithm::Chaikin => None,
        }
    }

    /// Minimum number of control points the algorithm accepts
    pub fn min_points(&self) -> usize {
        match self {
            CurveAlgorithm::QuadraticBezier => 3,
            CurveAlgorithm::CubicBezier => 4,
            CurveAlgorithm::Bezier => 1,
            CurveAlgorithm::Chaikin => 2,
        }
    }

    /// Run the algorithm on the control points
    /// Bezier algorithms sample the curve with `options.samples` steps and expose the
    /// de Casteljau layers at `options.parameter`; Chaikin refines the control polygon
    /// `options.iterations` times.
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
    /// let options = LabOptions::default();
    /// let output = CurveAlgorithm::Bezier.evaluate(&points, &options).unwrap();
    /// assert_eq!(output.curve.len(), 101);
    /// assert_eq!(output.layers.map(|l| l.len()), Some(4));
    ///
    /// let output = CurveAlgorithm::Chaikin.evaluate(&points, &options).unwrap();
    /// assert_eq!(output.curve.len(), 24);
    /// assert!(output.layers.is_none());
    /// ```
    pub fn evaluate<T: FloatingPoint, D: DimName>(
        &self,
        points: &[OPoint<T, D>],
        options: &LabOptions<T>,
    ) -> Result<CurveOutput<T, D>>
    where
        DefaultAllocator: Allocator<D>,
    {
        #[cfg(feature = "log")]
        log::debug!("{} on {} control points", self, points.len());

        match self {
            CurveAlgorithm::Chaikin => {
                let refined = Polyline::try_new(points.to_vec())?.chaikin(options.iterations)?;
                Ok(CurveOutput {
                    curve: refined.into_points(),
                    layers: None,
                })
            }
            _ => {
                let curve = match self.degree() {
                    Some(degree) => BezierCurve::try_with_degree(points, degree)?,
                    None => BezierCurve::try_new(points.to_vec())?,
                };
                let t = options.resolved_parameter()?;
                Ok(CurveOutput {
                    curve: curve.sample(options.samples)?,
                    layers: Some(curve.casteljau(t)?),
                })
            }
        }
    }
}

impl fmt::Display for CurveAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CurveAlgorithm::QuadraticBezier => "Bezier2",
            CurveAlgorithm::CubicBezier => "Bezier3",
            CurveAlgorithm::Bezier => "BezierN",
            CurveAlgorithm::Chaikin => "Chaikin",
        };
        f.write_str(name)
    }
}

impl FromStr for CurveAlgorithm {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self> {
        CurveAlgorithm::ALL
            .into_iter()
            .find(|a| a.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GeometryError::UnknownAlgorithm(s.to_string()))
    }
}
