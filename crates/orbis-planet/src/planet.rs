//! The planet: validated configuration, derived subdivision depth, and
//! whole-surface generation across all six cube faces.

use std::f64::consts::PI;

use orbis_cubesphere::{Face, Projection};
use orbis_mesh::MeshBuffer;
use tracing::info;

use crate::{Patch, PlanetError};

/// Opaque material handle, passed through to the rendering host unmodified.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MaterialHandle(pub u64);

/// A cube-sphere planet surface.
///
/// The planet exclusively owns its six root patch trees; each patch owns its
/// children and, on leaves, its mesh. Replacing the tree on regeneration
/// drops every previous patch and mesh.
pub struct Planet {
    radius: f64,
    spherized: bool,
    grid_resolution: u32,
    material: MaterialHandle,
    auto_update: bool,
    roots: Option<[Patch; 6]>,
}

impl Planet {
    /// Validate the configuration and create an ungenerated planet.
    ///
    /// Fails fast on a non-positive or non-finite radius and on a zero grid
    /// resolution; no patch is built until [`Planet::generate`] is called.
    pub fn new(radius: f64, spherized: bool, grid_resolution: u32) -> Result<Self, PlanetError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(PlanetError::InvalidRadius(radius));
        }
        if grid_resolution == 0 {
            return Err(PlanetError::InvalidGridResolution);
        }
        Ok(Self {
            radius,
            spherized,
            grid_resolution,
            material: MaterialHandle::default(),
            auto_update: false,
            roots: None,
        })
    }

    /// Set the opaque material handle carried through to the host.
    #[must_use]
    pub fn with_material(mut self, material: MaterialHandle) -> Self {
        self.material = material;
        self
    }

    /// Set whether external configuration edits should trigger regeneration.
    /// The flag is host-side policy; this crate only stores it.
    #[must_use]
    pub fn with_auto_update(mut self, auto_update: bool) -> Self {
        self.auto_update = auto_update;
        self
    }

    /// Planet radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// True if leaf meshes are projected onto the sphere.
    #[must_use]
    pub fn spherized(&self) -> bool {
        self.spherized
    }

    /// Cells per row/column in each leaf's grid mesh.
    #[must_use]
    pub fn grid_resolution(&self) -> u32 {
        self.grid_resolution
    }

    /// The material handle, unmodified since construction.
    #[must_use]
    pub fn material(&self) -> MaterialHandle {
        self.material
    }

    /// Whether configuration edits should trigger regeneration.
    #[must_use]
    pub fn auto_update(&self) -> bool {
        self.auto_update
    }

    /// Subdivision depth derived from the radius:
    /// `floor(log2(2 pi r / 4))`, clamped at zero.
    ///
    /// A larger radius yields a deeper tree with more, smaller leaf patches,
    /// keeping world-space leaf size roughly constant.
    #[must_use]
    pub fn max_depth(&self) -> u32 {
        let quarter_circumference = 2.0 * PI * self.radius / 4.0;
        let depth = quarter_circumference.log2().floor();
        if depth > 0.0 { depth as u32 } else { 0 }
    }

    /// Side length of the base cube, derived from the max depth as
    /// `2 * max_depth`, floored at 2 so a depth-0 planet still spans a
    /// non-degenerate cube.
    #[must_use]
    pub fn cube_size(&self) -> f64 {
        f64::from(2 * self.max_depth().max(1))
    }

    /// True once [`Planet::generate`] has produced a patch tree.
    #[must_use]
    pub fn is_generated(&self) -> bool {
        self.roots.is_some()
    }

    /// The six root patches, in [`Face::ALL`] order, once generated.
    #[must_use]
    pub fn roots(&self) -> Option<&[Patch; 6]> {
        self.roots.as_ref()
    }

    /// Discard any existing patch tree and rebuild all six faces.
    ///
    /// The previous tree, including every leaf mesh, is dropped before the
    /// new one is built; root frame parameters may have changed since the
    /// last build. Repeated calls with unchanged configuration produce
    /// structurally identical trees. The build is synchronous and complete:
    /// no partial tree is ever observable.
    pub fn generate(&mut self) {
        self.roots = None;

        let depth = self.max_depth();
        let size = self.cube_size();
        let projection = if self.spherized {
            Projection::Spherized {
                radius: self.radius,
            }
        } else {
            Projection::Cubic
        };

        let roots =
            Face::ALL.map(|face| Patch::build_root(face, depth, size, projection, self.grid_resolution));

        let leaves: usize = roots.iter().map(Patch::leaf_count).sum();
        let mut vertices = 0usize;
        let mut triangles = 0usize;
        for root in &roots {
            root.for_each_leaf(&mut |leaf| {
                if let Some(mesh) = leaf.mesh() {
                    vertices += mesh.vertex_count();
                    triangles += mesh.triangle_count();
                }
            });
        }
        info!(
            radius = self.radius,
            spherized = self.spherized,
            depth,
            leaves,
            vertices,
            triangles,
            "planet surface generated"
        );

        self.roots = Some(roots);
    }

    /// Every generated leaf mesh with its owning face, in face-major,
    /// depth-first order. Empty before the first [`Planet::generate`].
    #[must_use]
    pub fn leaf_meshes(&self) -> Vec<(Face, &MeshBuffer)> {
        let mut result = Vec::new();
        if let Some(roots) = &self.roots {
            for root in roots {
                root.for_each_leaf(&mut |leaf| {
                    if let Some(mesh) = leaf.mesh() {
                        result.push((leaf.face(), mesh));
                    }
                });
            }
        }
        result
    }

    /// Total leaf count across all six faces; 0 before generation.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.roots
            .as_ref()
            .map_or(0, |roots| roots.iter().map(Patch::leaf_count).sum())
    }
}
