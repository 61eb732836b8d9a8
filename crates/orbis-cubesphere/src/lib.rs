//! Cube-sphere patch geometry: face frames, quadrant subdivision, and
//! cube-to-sphere projection.

mod face;
mod frame;
mod projection;

pub use face::Face;
pub use frame::{PatchFrame, Quadrant};
pub use projection::Projection;
