use nalgebra::{allocator::Allocator, convert, DefaultAllocator, DimName, OPoint};

use crate::{
    misc::{centroid, lerp, FloatingPoint, Result},
    subdivide::Subdivide,
};

use super::ControlGrid;

/// The four refined corners of the quad `[p1, p2, p3, p4]`
/// Each new corner is the average of the original corner, its two adjacent
/// edge midpoints and the face centroid.
fn refine_face<T: FloatingPoint, D: DimName>(corners: [&OPoint<T, D>; 4]) -> [OPoint<T, D>; 4]
where
    DefaultAllocator: Allocator<D>,
{
    let half: T = convert(0.5);
    let face = centroid(corners).unwrap_or_else(OPoint::origin);
    // edge k joins corner k and corner k + 1
    let edges: [OPoint<T, D>; 4] =
        std::array::from_fn(|k| lerp(corners[k], corners[(k + 1) % 4], half));
    std::array::from_fn(|k| {
        let previous = &edges[(k + 3) % 4];
        centroid([corners[k], &edges[k], previous, &face]).unwrap_or_else(OPoint::origin)
    })
}

/// Doo-Sabin refinement of a regular quad grid
impl<T: FloatingPoint, D: DimName> Subdivide for ControlGrid<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    /// Each pass roughly quadruples the number of points
    const MAX_ITERATIONS: usize = 8;

    /// Shrink every face of the grid into a 2x2 block of new points
    /// A `rows x cols` grid becomes a `2 * (rows - 1) x 2 * (cols - 1)` grid.
    /// Boundary faces shrink toward the interior on every pass.
    /// # Failures
    /// - if the grid is smaller than 2x2
    fn subdivide(&self) -> Result<Self> {
        self.ensure_dimensions(2, 2)?;

        let (rows, cols) = self.dimensions();
        let mut refined = vec![Vec::with_capacity(2 * (cols - 1)); 2 * (rows - 1)];
        for i in 0..rows - 1 {
            for j in 0..cols - 1 {
                let [p1, p2, p3, p4] = refine_face(self.face(i, j));
                refined[2 * i].push(p1);
                refined[2 * i].push(p2);
                refined[2 * i + 1].push(p4);
                refined[2 * i + 1].push(p3);
            }
        }

        #[cfg(feature = "log")]
        log::trace!(
            "doo-sabin pass: {}x{} -> {}x{}",
            rows,
            cols,
            2 * (rows - 1),
            2 * (cols - 1)
        );

        Ok(Self::from_points_unchecked(refined))
    }
}

impl<T: FloatingPoint, D: DimName> ControlGrid<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    /// Refine the grid with `iterations` passes of Doo-Sabin subdivision
    /// # Failures
    /// - if the grid is smaller than 2x2
    /// - if `iterations` is zero or greater than 8
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
    /// let refined = grid.doo_sabin(2).unwrap();
    /// assert_eq!(refined.dimensions(), (6, 6));
    /// ```
    pub fn doo_sabin(&self, iterations: usize) -> Result<Self> {
        self.subdivide_n(iterations)
    }
}
