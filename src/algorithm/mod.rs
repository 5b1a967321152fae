pub mod curve_algorithm;
pub mod lab_options;
pub mod surface_algorithm;
pub use curve_algorithm::*;
pub use lab_options::*;
pub use surface_algorithm::*;
