use nalgebra::{allocator::Allocator, Const, DefaultAllocator, DimName, OPoint};
use simba::scalar::SupersetOf;

use crate::misc::{centroid, FloatingPoint, GeometryError, Result};

/// Rectangular grid of control points, stored row-major
/// Every row has the same number of points and the grid is never empty.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(
        serialize = "OPoint<T, D>: serde::Serialize",
        deserialize = "OPoint<T, D>: serde::Deserialize<'de>"
    ), try_from = "Vec<Vec<OPoint<T, D>>>", into = "Vec<Vec<OPoint<T, D>>>")
)]
pub struct ControlGrid<T: FloatingPoint, D: DimName>
where
    DefaultAllocator: Allocator<D>,
{
    points: Vec<Vec<OPoint<T, D>>>,
}

/// 2D control grid alias
pub type ControlGrid2D<T> = ControlGrid<T, Const<2>>;
/// 3D control grid alias
pub type ControlGrid3D<T> = ControlGrid<T, Const<3>>;

impl<T: FloatingPoint, D: DimName> ControlGrid<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    /// Create a new grid from its rows
    /// # Failures
    /// - if there is no row or the first row is empty
    /// - if the rows have different lengths
    ///
    /// # Example
    /// ```
    /// use curvelab::prelude::*;
    /// use nalgebra::Point3;
    ///
    /// let grid = ControlGrid3D::try_new(vec![
    ///     vec![Point3::new(0., 0., 0.), Point3::new(1., 0., 0.), Point3::new(2., 0., 0.)],
    ///     vec![Point3::new(0., 1., 0.), Point3::new(1., 1., 1.), Point3::new(2., 1., 0.)],
    /// ]).unwrap();
    /// assert_eq!(grid.dimensions(), (2, 3));
    ///
    /// let ragged = ControlGrid3D::try_new(vec![
    ///     vec![Point3::new(0., 0., 0.), Point3::new(1., 0., 0.)],
    ///     vec![Point3::new(0., 1., 0.)],
    /// ]);
    /// assert!(ragged.is_err());
    /// ```
    pub fn try_new(points: Vec<Vec<OPoint<T, D>>>) -> Result<Self> {
        let cols = points.first().map(|row| row.len()).unwrap_or(0);
        if cols == 0 {
            return Err(GeometryError::InvalidControlInput {
                required: 1,
                actual: 0,
            });
        }
        if let Some((row, r)) = points
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != cols)
        {
            return Err(GeometryError::RaggedGrid {
                row,
                expected: cols,
                actual: r.len(),
            });
        }
        Ok(Self { points })
    }

    /// Check the grid has at least `min_rows` rows and `min_cols` columns
    pub(crate) fn ensure_dimensions(&self, min_rows: usize, min_cols: usize) -> Result<()> {
        if self.rows() < min_rows {
            return Err(GeometryError::InvalidControlInput {
                required: min_rows,
                actual: self.rows(),
            });
        }
        if self.cols() < min_cols {
            return Err(GeometryError::InvalidControlInput {
                required: min_cols,
                actual: self.cols(),
            });
        }
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.points.len()
    }

    pub fn cols(&self) -> usize {
        self.points[0].len()
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    pub fn points(&self) -> &[Vec<OPoint<T, D>>] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Vec<OPoint<T, D>>> {
        self.points
    }

    pub fn row(&self, i: usize) -> &[OPoint<T, D>] {
        &self.points[i]
    }

    pub fn get(&self, i: usize, j: usize) -> Option<&OPoint<T, D>> {
        self.points.get(i).and_then(|row| row.get(j))
    }

    /// Iterate over every point in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &OPoint<T, D>> {
        self.points.iter().flatten()
    }

    /// Corners `[p(i, j), p(i, j + 1), p(i + 1, j + 1), p(i + 1, j)]` of the quad face at `(i, j)`
    pub fn face(&self, i: usize, j: usize) -> [&OPoint<T, D>; 4] {
        [
            &self.points[i][j],
            &self.points[i][j + 1],
            &self.points[i + 1][j + 1],
            &self.points[i + 1][j],
        ]
    }

    /// Average of every point of the grid
    pub fn centroid(&self) -> OPoint<T, D> {
        centroid(self.iter()).unwrap_or_else(OPoint::origin)
    }

    /// Swap rows and columns
    pub fn transpose(&self) -> Self {
        let mut transposed = vec![Vec::with_capacity(self.rows()); self.cols()];
        self.points.iter().for_each(|row| {
            row.iter().enumerate().for_each(|(j, p)| {
                transposed[j].push(p.clone());
            })
        });
        Self { points: transposed }
    }

    /// Cast the grid to another floating point type
    pub fn cast<F: FloatingPoint + SupersetOf<T>>(&self) -> ControlGrid<F, D> {
        ControlGrid {
            points: self
                .points
                .iter()
                .map(|row| row.iter().map(|p| p.clone().cast()).collect())
                .collect(),
        }
    }

    /// `points` must be rectangular and non-empty
    pub(crate) fn from_points_unchecked(points: Vec<Vec<OPoint<T, D>>>) -> Self {
        debug_assert!(!points.is_empty() && !points[0].is_empty());
        debug_assert!(points.iter().all(|row| row.len() == points[0].len()));
        Self { points }
    }
}

impl<T: FloatingPoint, D: DimName> TryFrom<Vec<Vec<OPoint<T, D>>>> for ControlGrid<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    type Error = GeometryError;

    fn try_from(points: Vec<Vec<OPoint<T, D>>>) -> Result<Self> {
        Self::try_new(points)
    }
}

impl<T: FloatingPoint, D: DimName> From<ControlGrid<T, D>> for Vec<Vec<OPoint<T, D>>>
where
    DefaultAllocator: Allocator<D>,
{
    fn from(grid: ControlGrid<T, D>) -> Self {
        grid.into_points()
    }
}
