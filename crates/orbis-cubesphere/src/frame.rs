//! Patch local frames: a center point plus two orthogonal axis vectors.

use glam::DVec3;

use crate::Face;

/// The four quadrants of a subdivided patch.
///
/// Ordering matches child construction order: bottom-left, top-left,
/// top-right, bottom-right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Quadrant {
    /// -x, -y offset from the parent center.
    BottomLeft = 0,
    /// -x, +y offset.
    TopLeft = 1,
    /// +x, +y offset.
    TopRight = 2,
    /// +x, -y offset.
    BottomRight = 3,
}

impl Quadrant {
    /// All four quadrants in construction order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::BottomLeft,
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomRight,
    ];

    /// Signs applied to the child half-axes when offsetting the child
    /// center from the parent center: `(x_sign, y_sign)`.
    #[must_use]
    pub fn signs(self) -> (f64, f64) {
        match self {
            Quadrant::BottomLeft => (-1.0, -1.0),
            Quadrant::TopLeft => (-1.0, 1.0),
            Quadrant::TopRight => (1.0, 1.0),
            Quadrant::BottomRight => (1.0, -1.0),
        }
    }

    /// Human-readable quadrant name, used in surface labels.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Quadrant::BottomLeft => "Bottom Left",
            Quadrant::TopLeft => "Top Left",
            Quadrant::TopRight => "Top Right",
            Quadrant::BottomRight => "Bottom Right",
        }
    }
}

/// A patch's local coordinate frame in cube space.
///
/// `local_x` and `local_y` span the patch's square extent. They are always
/// orthogonal and equal in magnitude, and the four corners of the patch lie
/// at `center +/- local_x/2 +/- local_y/2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PatchFrame {
    /// Center of the patch square, cube space.
    pub center: DVec3,
    /// First spanning axis; its length is the patch side length.
    pub local_x: DVec3,
    /// Second spanning axis, orthogonal to `local_x`, same length.
    pub local_y: DVec3,
}

impl PatchFrame {
    /// Root frame for a whole cube face of side length `size`.
    ///
    /// The six root frames tile a closed cube of half-extent `size / 2`
    /// centered at the origin. Winding is consistent within each face;
    /// seamless texturing across faces needs face-dependent UV correction
    /// on top of these frames. Caller guarantees `size > 0`.
    #[must_use]
    pub fn root(face: Face, size: f64) -> Self {
        let half = size / 2.0;
        let (center, local_x, local_y) = match face {
            Face::Front => (
                DVec3::new(0.0, 0.0, -half),
                DVec3::new(size, 0.0, 0.0),
                DVec3::new(0.0, size, 0.0),
            ),
            Face::Back => (
                DVec3::new(0.0, 0.0, half),
                DVec3::new(-size, 0.0, 0.0),
                DVec3::new(0.0, size, 0.0),
            ),
            Face::Left => (
                DVec3::new(-half, 0.0, 0.0),
                DVec3::new(0.0, 0.0, -size),
                DVec3::new(0.0, size, 0.0),
            ),
            Face::Right => (
                DVec3::new(half, 0.0, 0.0),
                DVec3::new(0.0, 0.0, size),
                DVec3::new(0.0, size, 0.0),
            ),
            Face::Top => (
                DVec3::new(0.0, half, 0.0),
                DVec3::new(-size, 0.0, 0.0),
                DVec3::new(0.0, 0.0, -size),
            ),
            Face::Bottom => (
                DVec3::new(0.0, -half, 0.0),
                DVec3::new(size, 0.0, 0.0),
                DVec3::new(0.0, 0.0, -size),
            ),
        };
        Self {
            center,
            local_x,
            local_y,
        }
    }

    /// Frame of the child patch occupying the given quadrant.
    ///
    /// The child axes are the parent's halved; the child center is offset
    /// from the parent center by half a child axis along each direction.
    /// The four children partition the parent square exactly.
    #[must_use]
    pub fn child(&self, quadrant: Quadrant) -> Self {
        let local_x = self.local_x * 0.5;
        let local_y = self.local_y * 0.5;
        let (sx, sy) = quadrant.signs();
        Self {
            center: self.center + local_x * (sx * 0.5) + local_y * (sy * 0.5),
            local_x,
            local_y,
        }
    }

    /// The four corner points of the patch square, in quadrant order.
    #[must_use]
    pub fn corners(&self) -> [DVec3; 4] {
        let hx = self.local_x * 0.5;
        let hy = self.local_y * 0.5;
        [
            self.center - hx - hy,
            self.center - hx + hy,
            self.center + hx + hy,
            self.center + hx - hy,
        ]
    }

    /// Side length of the patch square (magnitude of either axis).
    #[must_use]
    pub fn side_length(&self) -> f64 {
        self.local_x.length()
    }
}
