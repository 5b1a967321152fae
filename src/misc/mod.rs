pub mod bernstein;
pub mod binomial;
pub mod error;
pub mod floating_point;
pub mod point;

pub use bernstein::*;
pub use binomial::*;
pub use error::*;
pub use floating_point::*;
pub use point::*;
