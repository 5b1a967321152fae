use nalgebra::{allocator::Allocator, Const, DefaultAllocator, DimName, OPoint};

use crate::misc::{BernsteinBasis, FloatingPoint, GeometryError, Result};

use super::ControlGrid;

/// Tensor-product Bezier surface over a rectangular control grid
/// Rows run along u (degree `rows - 1`), columns along v (degree `cols - 1`).
/// Only the control grid is serialized, the bases are rebuilt on deserialization.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(
        serialize = "OPoint<T, D>: serde::Serialize",
        deserialize = "OPoint<T, D>: serde::Deserialize<'de>"
    ), try_from = "ControlGrid<T, D>", into = "ControlGrid<T, D>")
)]
pub struct BezierSurface<T: FloatingPoint, D: DimName>
where
    DefaultAllocator: Allocator<D>,
{
    control_grid: ControlGrid<T, D>,
    u_basis: BernsteinBasis<T>,
    v_basis: BernsteinBasis<T>,
}

/// 2D Bezier surface alias
pub type BezierSurface2D<T> = BezierSurface<T, Const<2>>;
/// 3D Bezier surface alias
pub type BezierSurface3D<T> = BezierSurface<T, Const<3>>;

impl<T: FloatingPoint, D: DimName> BezierSurface<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    /// Create a new Bezier surface
    /// # Failures
    /// - if the grid is smaller than 2x2
    /// - if a degree exceeds `MAX_BINOMIAL_N`
    ///
    /// # Example
    /// ```
    /// use curvelab::prelude::*;
    /// use nalgebra::Point3;
    ///
    /// let grid = ControlGrid3D::try_new(vec![
    ///     vec![Point3::new(0., 0., 0.), Point3::new(0., 2., 0.)],
    ///     vec![Point3::new(2., 0., 0.), Point3::new(2., 2., 4.)],
    /// ]).unwrap();
    /// let surface = BezierSurface3D::try_new(grid).unwrap();
    /// assert_eq!(surface.point_at(0.5, 0.5), Point3::new(1., 1., 1.));
    /// ```
    pub fn try_new(control_grid: ControlGrid<T, D>) -> Result<Self> {
        control_grid.ensure_dimensions(2, 2)?;
        let u_basis = BernsteinBasis::try_new(control_grid.rows() - 1)?;
        let v_basis = BernsteinBasis::try_new(control_grid.cols() - 1)?;
        Ok(Self {
            control_grid,
            u_basis,
            v_basis,
        })
    }

    pub fn control_grid(&self) -> &ControlGrid<T, D> {
        &self.control_grid
    }

    pub fn u_degree(&self) -> usize {
        self.u_basis.degree()
    }

    pub fn v_degree(&self) -> usize {
        self.v_basis.degree()
    }

    /// Evaluate the surface at the given u, v parameters
    /// The parameters are not clamped: outside of [0, 1] the surface extrapolates.
    pub fn point_at(&self, u: T, v: T) -> OPoint<T, D> {
        let bases_u = self.u_basis.evaluate(u);
        let bases_v = self.v_basis.evaluate(v);
        self.point_given_bases(&bases_u, &bases_v)
    }

    /// Compute a point on the surface given the basis function values in both directions
    fn point_given_bases(&self, bases_u: &[T], bases_v: &[T]) -> OPoint<T, D> {
        let mut position = OPoint::<T, D>::origin();
        for (row, bu) in self.control_grid.points().iter().zip(bases_u) {
            // sample v isoline
            let mut temp = OPoint::<T, D>::origin();
            for (p, bv) in row.iter().zip(bases_v) {
                temp.coords += &p.coords * *bv;
            }
            position.coords += temp.coords * *bu;
        }
        position
    }

    /// Compute a `(steps + 1) x (steps + 1)` grid of points at regularly spaced (u, v)
    /// The basis functions are evaluated once per parameter value and shared across the grid.
    /// # Failures
    /// - if `steps` is zero
    ///
    /// # Example
    /// ```
    /// use curvelab::prelude::*;
    /// use nalgebra::Point3;
    ///
    /// let grid = ControlGrid3D::try_new(vec![
    ///     vec![Point3::new(0., 0., 0.), Point3::new(0., 1., 0.), Point3::new(0., 2., 0.)],
    ///     vec![Point3::new(1., 0., 0.), Point3::new(1., 1., 2.), Point3::new(1., 2., 0.)],
    ///     vec![Point3::new(2., 0., 0.), Point3::new(2., 1., 0.), Point3::new(2., 2., 0.)],
    /// ]).unwrap();
    /// let surface = BezierSurface3D::try_new(grid).unwrap();
    /// let samples = surface.regular_sample_points(8).unwrap();
    /// assert_eq!(samples.dimensions(), (9, 9));
    /// ```
    pub fn regular_sample_points(&self, steps: usize) -> Result<ControlGrid<T, D>> {
        if steps == 0 {
            return Err(GeometryError::ParameterOutOfRange(
                "surface steps must be positive".to_string(),
            ));
        }
        let bases_u = self.u_basis.regularly_spaced(steps);
        let bases_v = self.v_basis.regularly_spaced(steps);
        let points = bases_u
            .iter()
            .map(|bu| {
                bases_v
                    .iter()
                    .map(|bv| self.point_given_bases(bu, bv))
                    .collect()
            })
            .collect();
        Ok(ControlGrid::from_points_unchecked(points))
    }
}

impl<T: FloatingPoint, D: DimName> TryFrom<ControlGrid<T, D>> for BezierSurface<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    type Error = GeometryError;

    fn try_from(control_grid: ControlGrid<T, D>) -> Result<Self> {
        Self::try_new(control_grid)
    }
}

impl<T: FloatingPoint, D: DimName> From<BezierSurface<T, D>> for ControlGrid<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    fn from(surface: BezierSurface<T, D>) -> Self {
        surface.control_grid
    }
}
