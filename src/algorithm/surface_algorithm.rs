use std::{fmt, str::FromStr};

use nalgebra::{allocator::Allocator, DefaultAllocator, DimName};

use crate::{
    misc::{FloatingPoint, GeometryError, Result},
    surface::{BezierSurface, ControlGrid},
};

use super::LabOptions;

/// Surface algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurfaceAlgorithm {
    /// Regular sampling of the tensor-product Bezier surface
    BezierSurface,
    /// Doo-Sabin refinement of the control grid
    DooSabin,
}

impl SurfaceAlgorithm {
    pub const ALL: [SurfaceAlgorithm; 2] =
        [SurfaceAlgorithm::BezierSurface, SurfaceAlgorithm::DooSabin];

    /// Run the algorithm on the control grid
    /// The Bezier surface is sampled on a `(surface_steps + 1)` square grid,
    /// Doo-Sabin refines the grid `options.iterations` times.
    /// Either way the output is a rectangular grid ready to be drawn as a wireframe.
    pub fn evaluate<T: FloatingPoint, D: DimName>(
        &self,
        grid: &ControlGrid<T, D>,
        options: &LabOptions<T>,
    ) -> Result<ControlGrid<T, D>>
    where
        DefaultAllocator: Allocator<D>,
    {
        #[cfg(feature = "log")]
        log::debug!("{} on a {}x{} grid", self, grid.rows(), grid.cols());

        let output = match self {
            SurfaceAlgorithm::BezierSurface => {
                BezierSurface::try_new(grid.clone())?.regular_sample_points(options.surface_steps)
            }
            SurfaceAlgorithm::DooSabin => grid.doo_sabin(options.iterations),
        }?;

        #[cfg(feature = "log")]
        log::debug!("{} produced a {}x{} grid", self, output.rows(), output.cols());

        Ok(output)
    }
}

impl fmt::Display for SurfaceAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SurfaceAlgorithm::BezierSurface => "BezierSurface",
            SurfaceAlgorithm::DooSabin => "DooSabin",
        };
        f.write_str(name)
    }
}

impl FromStr for SurfaceAlgorithm {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self> {
        SurfaceAlgorithm::ALL
            .into_iter()
            .find(|a| a.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GeometryError::UnknownAlgorithm(s.to_string()))
    }
}
