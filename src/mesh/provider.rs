use crate::math::{Matrix4, Point3};

/// Narrow boundary to the host's geometry API.
///
/// The merge pipeline consumes source objects exclusively through this
/// trait; it never depends on host-specific object models. Implementors
/// expose raw local-space geometry plus the transform that places it in
/// the world.
pub trait MeshProvider {
    /// Identifying name, used in diagnostics.
    fn name(&self) -> &str;

    /// Local-to-world transform applied at extraction time.
    fn world_transform(&self) -> Matrix4;

    /// Vertex positions in local space.
    fn vertex_positions(&self) -> &[Point3];

    /// Face loops as indices into [`Self::vertex_positions`].
    fn face_loops(&self) -> &[Vec<usize>];
}

/// An owned, index-based solid.
///
/// The plain [`MeshProvider`] used by tests and simple hosts that already
/// hold their geometry in flat buffers.
#[derive(Debug, Clone)]
pub struct IndexedSolid {
    name: String,
    transform: Matrix4,
    positions: Vec<Point3>,
    loops: Vec<Vec<usize>>,
}

impl IndexedSolid {
    /// Creates a solid from raw buffers.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        transform: Matrix4,
        positions: Vec<Point3>,
        loops: Vec<Vec<usize>>,
    ) -> Self {
        Self {
            name: name.into(),
            transform,
            positions,
            loops,
        }
    }

    /// Creates an axis-aligned box with six outward-wound quad faces.
    #[must_use]
    pub fn axis_aligned_box(name: impl Into<String>, min_corner: Point3, max_corner: Point3) -> Self {
        let (x0, y0, z0) = (min_corner.x, min_corner.y, min_corner.z);
        let (x1, y1, z1) = (max_corner.x, max_corner.y, max_corner.z);

        let positions = vec![
            Point3::new(x0, y0, z0),
            Point3::new(x1, y0, z0),
            Point3::new(x1, y1, z0),
            Point3::new(x0, y1, z0),
            Point3::new(x0, y0, z1),
            Point3::new(x1, y0, z1),
            Point3::new(x1, y1, z1),
            Point3::new(x0, y1, z1),
        ];
        let loops = vec![
            vec![0, 3, 2, 1], // -Z
            vec![4, 5, 6, 7], // +Z
            vec![0, 1, 5, 4], // -Y
            vec![2, 3, 7, 6], // +Y
            vec![0, 4, 7, 3], // -X
            vec![1, 2, 6, 5], // +X
        ];

        Self {
            name: name.into(),
            transform: Matrix4::identity(),
            positions,
            loops,
        }
    }

    /// Replaces the world transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Matrix4) -> Self {
        self.transform = transform;
        self
    }
}

impl MeshProvider for IndexedSolid {
    fn name(&self) -> &str {
        &self.name
    }

    fn world_transform(&self) -> Matrix4 {
        self.transform
    }

    fn vertex_positions(&self) -> &[Point3] {
        &self.positions
    }

    fn face_loops(&self) -> &[Vec<usize>] {
        &self.loops
    }
}
