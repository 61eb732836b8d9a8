//! The six faces of the base cube.

use glam::DVec3;

/// The six flat sides of the cube a planet surface is built from.
///
/// The cube is axis-aligned and centered at the origin: `Front` covers the
/// -Z side, `Back` +Z, `Left` -X, `Right` +X, `Top` +Y, `Bottom` -Y. A face
/// is assigned when a root patch is created and inherited unchanged by every
/// descendant patch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Face {
    /// -Z side
    Front = 0,
    /// +Z side
    Back = 1,
    /// -X side
    Left = 2,
    /// +X side
    Right = 3,
    /// +Y side
    Top = 4,
    /// -Y side
    Bottom = 5,
}

impl Face {
    /// All six faces in canonical order.
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
        Face::Top,
        Face::Bottom,
    ];

    /// The face on the opposite side of the cube.
    #[must_use]
    pub fn opposite(self) -> Face {
        match self {
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Top => Face::Bottom,
            Face::Bottom => Face::Top,
        }
    }

    /// Outward-pointing unit normal for this face.
    #[must_use]
    pub fn normal(self) -> DVec3 {
        match self {
            Face::Front => DVec3::NEG_Z,
            Face::Back => DVec3::Z,
            Face::Left => DVec3::NEG_X,
            Face::Right => DVec3::X,
            Face::Top => DVec3::Y,
            Face::Bottom => DVec3::NEG_Y,
        }
    }

    /// Human-readable face name, used in surface labels and log output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Face::Front => "Front",
            Face::Back => "Back",
            Face::Left => "Left",
            Face::Right => "Right",
            Face::Top => "Top",
            Face::Bottom => "Bottom",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_six_face_variants_exist() {
        assert_eq!(Face::ALL.len(), 6);
        let faces: Vec<Face> = Face::ALL.to_vec();
        assert!(faces.contains(&Face::Front));
        assert!(faces.contains(&Face::Back));
        assert!(faces.contains(&Face::Left));
        assert!(faces.contains(&Face::Right));
        assert!(faces.contains(&Face::Top));
        assert!(faces.contains(&Face::Bottom));
    }

    #[test]
    fn test_normals_are_unit_length() {
        for face in Face::ALL {
            let n = face.normal();
            assert!(
                (n.length() - 1.0).abs() < 1e-12,
                "Normal for {face:?} is not unit length: {}",
                n.length()
            );
        }
    }

    #[test]
    fn test_opposite_face_normals_are_antiparallel() {
        for face in Face::ALL {
            let n = face.normal();
            let opp_n = face.opposite().normal();
            assert!(
                (n + opp_n).length() < 1e-12,
                "Normals for {face:?} and {:?} are not antiparallel",
                face.opposite()
            );
        }
    }

    #[test]
    fn test_opposite_is_involution() {
        for face in Face::ALL {
            assert_eq!(face.opposite().opposite(), face);
        }
    }

    #[test]
    fn test_labels_are_unique() {
        let labels: Vec<&str> = Face::ALL.iter().map(|f| f.label()).collect();
        for (i, a) in labels.iter().enumerate() {
            for b in &labels[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
