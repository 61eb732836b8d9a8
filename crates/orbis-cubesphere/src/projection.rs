//! Cube-to-sphere projection of patch grid positions.

use glam::DVec3;

/// How cube-space grid positions are projected before emission.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    /// Leave positions on the cube surface.
    Cubic,
    /// Normalize each position and scale it to the sphere radius.
    ///
    /// This is the defining cube-to-sphere map: it projects the cube patch
    /// onto the circumscribed sphere. Cell-area distortion near cube edges
    /// and corners is inherent to the map and is not corrected by
    /// area-preserving warping.
    Spherized {
        /// Sphere radius; emitted positions lie exactly this far from the origin.
        radius: f64,
    },
}

impl Projection {
    /// Apply this projection to a cube-space position.
    #[inline]
    #[must_use]
    pub fn apply(self, position: DVec3) -> DVec3 {
        match self {
            Projection::Cubic => position,
            Projection::Spherized { radius } => position.normalize() * radius,
        }
    }

    /// Whether this projection maps positions onto a sphere.
    #[must_use]
    pub fn is_spherized(self) -> bool {
        matches!(self, Projection::Spherized { .. })
    }
}
