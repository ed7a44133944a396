use crate::math::Point3;

slotmap::new_key_type! {
    /// Unique identifier for a vertex within one mesh snapshot.
    pub struct VertexId;
}

/// Data associated with a snapshot vertex.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// World-space position, fixed at extraction time.
    pub point: Point3,
}

impl VertexData {
    /// Creates a new vertex at the given point.
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self { point }
    }
}
