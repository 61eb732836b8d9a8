//! The per-face patch quadtree and its recursive builder.

use orbis_cubesphere::{Face, PatchFrame, Projection, Quadrant};
use orbis_mesh::{MeshBuffer, mesh_grid};

/// A node in a face's patch quadtree.
///
/// A patch covers a square region of one cube face. `depth` counts down
/// toward the leaves: a depth-0 patch is a leaf and owns its generated mesh,
/// any deeper patch owns exactly four children, one per quadrant. Children
/// partition the parent square with no gap or overlap.
#[derive(Debug)]
pub struct Patch {
    face: Face,
    depth: u32,
    frame: PatchFrame,
    children: Option<Box<[Patch; 4]>>,
    mesh: Option<MeshBuffer>,
}

impl Patch {
    /// Build the root patch of `face` and recurse down to the leaves.
    ///
    /// Leaves are meshed as part of the build, so the returned tree is
    /// complete: every depth-0 patch already holds its mesh. Caller
    /// guarantees `size > 0` and `resolution > 0`.
    #[must_use]
    pub fn build_root(
        face: Face,
        depth: u32,
        size: f64,
        projection: Projection,
        resolution: u32,
    ) -> Self {
        Self::build(face, depth, PatchFrame::root(face, size), projection, resolution)
    }

    fn build(
        face: Face,
        depth: u32,
        frame: PatchFrame,
        projection: Projection,
        resolution: u32,
    ) -> Self {
        if depth == 0 {
            let mesh = mesh_grid(&frame, projection, resolution);
            return Self {
                face,
                depth,
                frame,
                children: None,
                mesh: Some(mesh),
            };
        }

        let children = Quadrant::ALL.map(|quadrant| {
            Self::build(face, depth - 1, frame.child(quadrant), projection, resolution)
        });

        Self {
            face,
            depth,
            frame,
            children: Some(Box::new(children)),
            mesh: None,
        }
    }

    /// The cube face this patch lies on.
    #[must_use]
    pub fn face(&self) -> Face {
        self.face
    }

    /// Remaining subdivision depth below this patch; 0 at leaves.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// This patch's local frame.
    #[must_use]
    pub fn frame(&self) -> &PatchFrame {
        &self.frame
    }

    /// True if this patch is a leaf (depth 0, holds a mesh).
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// The generated mesh; present only on leaves.
    #[must_use]
    pub fn mesh(&self) -> Option<&MeshBuffer> {
        self.mesh.as_ref()
    }

    /// The four children of an interior patch, in quadrant order.
    #[must_use]
    pub fn children(&self) -> Option<&[Patch; 4]> {
        self.children.as_deref()
    }

    /// Number of leaf patches in this subtree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match &self.children {
            None => 1,
            Some(children) => children.iter().map(Patch::leaf_count).sum(),
        }
    }

    /// Total number of patches in this subtree, this one included.
    #[must_use]
    pub fn patch_count(&self) -> usize {
        match &self.children {
            None => 1,
            Some(children) => 1 + children.iter().map(Patch::patch_count).sum::<usize>(),
        }
    }

    /// Visit every leaf patch of this subtree, depth-first.
    pub fn for_each_leaf<'a>(&'a self, visit: &mut impl FnMut(&'a Patch)) {
        match &self.children {
            None => visit(self),
            Some(children) => {
                for child in children.iter() {
                    child.for_each_leaf(visit);
                }
            }
        }
    }

    /// Collect references to all leaf patches, depth-first.
    #[must_use]
    pub fn leaves(&self) -> Vec<&Patch> {
        let mut result = Vec::with_capacity(self.leaf_count());
        self.for_each_leaf(&mut |leaf| result.push(leaf));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn build_test_root(depth: u32) -> Patch {
        Patch::build_root(Face::Front, depth, 4.0, Projection::Cubic, 2)
    }

    #[test]
    fn test_depth_zero_root_is_meshed_leaf() {
        let root = build_test_root(0);
        assert!(root.is_leaf());
        assert!(root.children().is_none());
        let mesh = root.mesh().expect("leaf must hold a mesh");
        assert_eq!(mesh.vertex_count(), 9);
        assert_eq!(mesh.triangle_count(), 8);
    }

    #[test]
    fn test_leaf_and_patch_counts_follow_quadtree_formulas() {
        for depth in 0..=4u32 {
            let root = build_test_root(depth);
            let expected_leaves = 4usize.pow(depth);
            let expected_total = (4usize.pow(depth + 1) - 1) / 3;
            assert_eq!(root.leaf_count(), expected_leaves, "depth {depth}");
            assert_eq!(root.patch_count(), expected_total, "depth {depth}");
        }
    }

    #[test]
    fn test_interior_patches_have_no_mesh() {
        let root = build_test_root(2);
        assert!(!root.is_leaf());
        assert!(root.mesh().is_none());
        for child in root.children().expect("interior patch has children") {
            assert!(child.mesh().is_none());
            assert_eq!(child.depth(), 1);
        }
    }

    #[test]
    fn test_every_leaf_has_depth_zero_and_a_mesh() {
        let root = build_test_root(3);
        let leaves = root.leaves();
        assert_eq!(leaves.len(), 64);
        for leaf in leaves {
            assert_eq!(leaf.depth(), 0);
            assert_eq!(leaf.face(), Face::Front);
            assert!(leaf.mesh().is_some());
        }
    }

    #[test]
    fn test_leaves_length_matches_leaf_count() {
        for depth in 0..=3u32 {
            let root = build_test_root(depth);
            assert_eq!(root.leaves().len(), root.leaf_count(), "depth {depth}");
        }
    }

    #[test]
    fn test_child_frames_shrink_by_half_each_level() {
        let root = build_test_root(2);
        let root_side = root.frame().side_length();
        for child in root.children().unwrap() {
            assert!((child.frame().side_length() - root_side / 2.0).abs() < EPSILON);
            for grandchild in child.children().unwrap() {
                assert!(
                    (grandchild.frame().side_length() - root_side / 4.0).abs() < EPSILON
                );
            }
        }
    }

    #[test]
    fn test_face_inherited_by_all_descendants() {
        let root = Patch::build_root(Face::Bottom, 2, 4.0, Projection::Cubic, 2);
        let mut count = 0;
        root.for_each_leaf(&mut |leaf| {
            assert_eq!(leaf.face(), Face::Bottom);
            count += 1;
        });
        assert_eq!(count, 16);
    }

    #[test]
    fn test_spherized_build_meshes_on_sphere() {
        let radius = 10.0;
        let root = Patch::build_root(
            Face::Top,
            1,
            6.0,
            Projection::Spherized { radius },
            4,
        );
        root.for_each_leaf(&mut |leaf| {
            for position in &leaf.mesh().unwrap().positions {
                assert!(
                    (position.length() - radius).abs() < 1e-10,
                    "Leaf vertex off the sphere at distance {}",
                    position.length()
                );
            }
        });
    }
}
