pub mod face;
pub mod provider;
pub mod vertex;

pub use face::{FaceData, FaceId};
pub use provider::{IndexedSolid, MeshProvider};
pub use vertex::{VertexData, VertexId};

use std::collections::HashSet;

use slotmap::SlotMap;

use crate::error::SnapshotError;
use crate::math::Point3;

/// Immutable world-space capture of one source object's geometry.
///
/// Owns vertex and face arenas keyed by generational ids. Insertion order
/// is recorded separately so iteration is deterministic across runs. A
/// snapshot lives for one pipeline invocation and is discarded afterwards.
#[derive(Debug, Default)]
pub struct MeshSnapshot {
    vertices: SlotMap<VertexId, VertexData>,
    faces: SlotMap<FaceId, FaceData>,
    vertex_order: Vec<VertexId>,
    face_order: Vec<FaceId>,
}

impl MeshSnapshot {
    /// Creates a new, empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a vertex and returns its ID.
    pub fn add_vertex(&mut self, data: VertexData) -> VertexId {
        let id = self.vertices.insert(data);
        self.vertex_order.push(id);
        id
    }

    /// Inserts a face and returns its ID.
    pub fn add_face(&mut self, data: FaceData) -> FaceId {
        let id = self.faces.insert(data);
        self.face_order.push(id);
        id
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the snapshot.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, SnapshotError> {
        self.vertices
            .get(id)
            .ok_or(SnapshotError::EntityNotFound("vertex"))
    }

    /// Returns a reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the snapshot.
    pub fn face(&self, id: FaceId) -> Result<&FaceData, SnapshotError> {
        self.faces
            .get(id)
            .ok_or(SnapshotError::EntityNotFound("face"))
    }

    /// Vertex ids in insertion order.
    #[must_use]
    pub fn vertex_ids(&self) -> &[VertexId] {
        &self.vertex_order
    }

    /// Face ids in insertion order.
    #[must_use]
    pub fn face_ids(&self) -> &[FaceId] {
        &self.face_order
    }

    /// Number of vertices in the snapshot.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_order.len()
    }

    /// Number of faces in the snapshot.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.face_order.len()
    }

    /// World positions of a face loop, in loop order.
    ///
    /// # Errors
    ///
    /// Returns an error if the face or any of its vertices is not found.
    pub fn face_points(&self, id: FaceId) -> Result<Vec<Point3>, SnapshotError> {
        let face = self.face(id)?;
        face.vertices
            .iter()
            .map(|&v| Ok(self.vertex(v)?.point))
            .collect()
    }

    /// Undirected edges of all face loops, deduplicated, in first-seen order.
    #[must_use]
    pub fn edges(&self) -> Vec<(VertexId, VertexId)> {
        let mut seen: HashSet<(VertexId, VertexId)> = HashSet::new();
        let mut edges = Vec::new();
        for &face_id in &self.face_order {
            let Some(face) = self.faces.get(face_id) else {
                continue;
            };
            let n = face.vertices.len();
            for i in 0..n {
                let a = face.vertices[i];
                let b = face.vertices[(i + 1) % n];
                let key = if a <= b { (a, b) } else { (b, a) };
                if seen.insert(key) {
                    edges.push(key);
                }
            }
        }
        edges
    }
}

/// The assembled output of a successful merge.
///
/// Holds plain buffers ready for the host to commit as a new scene
/// object; the engine itself never mutates the host scene.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedMesh {
    /// Deterministic result name; disambiguation is the host's job.
    pub name: String,
    /// Canonical vertex positions.
    pub vertices: Vec<Point3>,
    /// Face loops as indices into `vertices`.
    pub faces: Vec<Vec<usize>>,
}
