pub mod bezier_curve;
pub mod casteljau_layers;
pub mod chaikin;
pub mod polyline;
pub use bezier_curve::*;
pub use casteljau_layers::*;
pub use polyline::*;

#[cfg(test)]
mod tests;
