pub mod bezier_surface;
pub mod control_grid;
pub mod doo_sabin;
pub use bezier_surface::*;
pub use control_grid::*;
