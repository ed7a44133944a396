use std::collections::HashSet;

use crate::error::{ExtractionError, MeshError, Result};
use crate::mesh::{FaceData, MeshProvider, MeshSnapshot, VertexData};

/// Captures a world-space snapshot of one source object.
///
/// Positions are pre-multiplied by the object's world transform so the
/// rest of the pipeline never sees local coordinates. Face loops are
/// validated on the way in: each needs at least three in-range, distinct
/// vertex indices.
///
/// # Errors
///
/// Returns [`ExtractionError::NoGeometry`] if the object has no vertices
/// or no faces, and [`ExtractionError::InvalidFaceLoop`] for malformed
/// loops.
pub fn extract_snapshot(object: &dyn MeshProvider) -> Result<MeshSnapshot> {
    let positions = object.vertex_positions();
    let loops = object.face_loops();

    if positions.is_empty() || loops.is_empty() {
        return Err(ExtractionError::NoGeometry {
            name: object.name().to_owned(),
        }
        .into());
    }

    let transform = object.world_transform();
    let mut snapshot = MeshSnapshot::new();
    let ids: Vec<_> = positions
        .iter()
        .map(|p| snapshot.add_vertex(VertexData::new(transform.transform_point(p))))
        .collect();

    for (face_index, face_loop) in loops.iter().enumerate() {
        if face_loop.len() < 3 {
            return Err(invalid_loop(object, face_index, "fewer than 3 vertices"));
        }

        let mut seen = HashSet::with_capacity(face_loop.len());
        let mut vertices = Vec::with_capacity(face_loop.len());
        for &index in face_loop {
            let Some(&id) = ids.get(index) else {
                return Err(invalid_loop(
                    object,
                    face_index,
                    format!("vertex index {index} out of range"),
                ));
            };
            if !seen.insert(id) {
                return Err(invalid_loop(
                    object,
                    face_index,
                    format!("vertex index {index} repeats within the loop"),
                ));
            }
            vertices.push(id);
        }
        snapshot.add_face(FaceData::new(vertices));
    }

    Ok(snapshot)
}

fn invalid_loop(
    object: &dyn MeshProvider,
    face_index: usize,
    reason: impl Into<String>,
) -> MeshError {
    ExtractionError::InvalidFaceLoop {
        name: object.name().to_owned(),
        face_index,
        reason: reason.into(),
    }
    .into()
}
