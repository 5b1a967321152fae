#![allow(clippy::needless_range_loop)]

mod algorithm;
mod curve;
mod misc;
mod subdivide;
mod surface;

pub mod prelude {
    pub use crate::algorithm::*;
    pub use crate::curve::*;
    pub use crate::misc::*;
    pub use crate::subdivide::*;
    pub use crate::surface::*;
}
