use itertools::Itertools;
use nalgebra::{allocator::Allocator, convert, DefaultAllocator, DimName};

use crate::{
    misc::{lerp, FloatingPoint, GeometryError, Result},
    subdivide::Subdivide,
};

use super::Polyline;

/// Chaikin corner cutting on an open polyline
impl<T: FloatingPoint, D: DimName> Subdivide for Polyline<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    /// Each pass doubles the number of edges
    const MAX_ITERATIONS: usize = 16;

    /// Replace every edge `(p0, p1)` with the points at 1/4 and 3/4 along it
    /// # Failures
    /// - if the polyline has less than two points (no edges to cut)
    fn subdivide(&self) -> Result<Self> {
        if self.len() < 2 {
            return Err(GeometryError::InvalidControlInput {
                required: 2,
                actual: self.len(),
            });
        }

        let quarter: T = convert(0.25);
        let three_quarters: T = convert(0.75);
        let points = self
            .points()
            .iter()
            .tuple_windows()
            .flat_map(|(p0, p1)| [lerp(p0, p1, quarter), lerp(p0, p1, three_quarters)])
            .collect_vec();

        #[cfg(feature = "log")]
        log::trace!("chaikin pass: {} -> {} points", self.len(), points.len());

        Self::try_new(points)
    }
}

impl<T: FloatingPoint, D: DimName> Polyline<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    /// Refine the polyline with `iterations` passes of Chaikin's corner cutting
    /// After `k` passes a polyline of `n` points has `(n - 1) * 2^k` points.
    /// # Failures
    /// - if the polyline has less than two points
    /// - if `iterations` is zero or greater than 16
    ///
    /// # Example
    /// ```
    /// use curvelab::prelude::*;
    /// use nalgebra::Point2;
    ///
    /// let polyline = Polyline2D::try_new(vec![Point2::new(0., 0.), Point2::new(10., 0.)]).unwrap();
    /// let refined = polyline.chaikin(1).unwrap();
    /// assert_eq!(refined.points(), &[Point2::new(2.5, 0.), Point2::new(7.5, 0.)]);
    /// ```
    pub fn chaikin(&self, iterations: usize) -> Result<Self> {
        self.subdivide_n(iterations)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::{Point2, Point3};

    use crate::{
        curve::{Polyline2D, Polyline3D},
        misc::GeometryError,
        subdivide::Subdivide,
    };

    #[test]
    fn test_single_edge() {
        let polyline = Polyline2D::try_new(vec![Point2::new(0., 0.), Point2::new(10., 0.)]).unwrap();
        let refined = polyline.chaikin(1).unwrap();
        assert_eq!(
            refined.points(),
            &[Point2::new(2.5, 0.), Point2::new(7.5, 0.)]
        );

        // a single edge keeps producing points on the segment
        let refined = polyline.chaikin(4).unwrap();
        assert_eq!(refined.len(), 16);
        refined.points().iter().for_each(|p| {
            assert_eq!(p.y, 0.);
            assert!(p.x > 0. && p.x < 10.);
        });
    }

    #[test]
    fn test_corner() {
        let polyline = Polyline2D::try_new(vec![
            Point2::new(0., 0.),
            Point2::new(4., 0.),
            Point2::new(4., 4.),
        ])
        .unwrap();
        let refined = polyline.subdivide().unwrap();
        assert_eq!(
            refined.points(),
            &[
                Point2::new(1., 0.),
                Point2::new(3., 0.),
                Point2::new(4., 1.),
                Point2::new(4., 3.),
            ]
        );
    }

    #[test]
    fn test_point_count() {
        let polyline = Polyline3D::try_new(
            (0..5)
                .map(|i| Point3::new(i as f64, (i * i) as f64, -(i as f64)))
                .collect(),
        )
        .unwrap();
        for k in 1..6 {
            let refined = polyline.chaikin(k).unwrap();
            assert_eq!(refined.len(), 4 * 2_usize.pow(k as u32));
        }
    }

    #[test]
    fn test_shorter_than_control_polygon() {
        let polyline = Polyline2D::try_new(vec![
            Point2::new(100., 500.),
            Point2::new(200., 100.),
            Point2::new(500., 100.),
            Point2::new(700., 500.),
        ])
        .unwrap();
        let refined = polyline.chaikin(3).unwrap();
        assert!(refined.length() < polyline.length());
        // the first point slides along the first edge to 0.25, 0.375, 0.4375
        assert_relative_eq!(refined.first().x, 143.75, epsilon = 1e-10);
        assert_relative_eq!(refined.first().y, 325., epsilon = 1e-10);
    }

    #[test]
    fn test_invalid_input() {
        let single = Polyline2D::try_new(vec![Point2::new(1., 1.)]).unwrap();
        assert_eq!(
            single.chaikin(1),
            Err(GeometryError::InvalidControlInput {
                required: 2,
                actual: 1
            })
        );

        let polyline = Polyline2D::try_new(vec![Point2::new(0., 0.), Point2::new(1., 0.)]).unwrap();
        assert!(matches!(
            polyline.chaikin(0),
            Err(GeometryError::ParameterOutOfRange(_))
        ));
        assert!(matches!(
            polyline.chaikin(Polyline2D::<f64>::MAX_ITERATIONS + 1),
            Err(GeometryError::ParameterOutOfRange(_))
        ));
        assert!(matches!(
            polyline.chaikin(40),
            Err(GeometryError::ParameterOutOfRange(_))
        ));
        let refined = polyline.chaikin(Polyline2D::<f64>::MAX_ITERATIONS).unwrap();
        assert_eq!(refined.len(), 1 << 16);
    }
}
