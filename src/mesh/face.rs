use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for a face within one mesh snapshot.
    pub struct FaceId;
}

/// Data associated with a snapshot face.
///
/// A face is a planar loop of at least three vertices; its outward normal
/// is derived from the loop winding. No vertex id repeats within one loop.
#[derive(Debug, Clone)]
pub struct FaceData {
    /// The ordered vertex loop.
    pub vertices: Vec<VertexId>,
}

impl FaceData {
    /// Creates a face from an ordered vertex loop.
    #[must_use]
    pub fn new(vertices: Vec<VertexId>) -> Self {
        Self { vertices }
    }
}
