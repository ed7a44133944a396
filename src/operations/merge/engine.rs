use log::{debug, info};

use crate::error::Result;
use crate::math::DEFAULT_EPSILON;
use crate::mesh::{MergedMesh, MeshProvider, MeshSnapshot};

use super::dedup::remove_internal_faces;
use super::snapshot::extract_snapshot;
use super::validate::{check_selection, require_face_contact};
use super::weld::{weld_vertices, WeldMap};

/// Name given to every merge result.
///
/// Disambiguation against existing scene objects is the host's job.
pub const MERGED_MESH_NAME: &str = "Merged";

/// Per-call merge configuration.
///
/// Immutable for the duration of one invocation; there is no process-wide
/// tolerance state.
#[derive(Debug, Clone, Copy)]
pub struct MergeParams {
    /// Tolerance for vertex coincidence, edge matching and plane-offset
    /// comparisons, in the same units as the input geometry.
    pub epsilon: f64,
}

impl Default for MergeParams {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

/// Merges face-contacting solids into one watertight mesh.
///
/// Runs the full pipeline: snapshot extraction, pairwise contact
/// classification, validation, vertex welding, internal-face removal and
/// assembly. The engine never mutates host state; the caller commits the
/// returned mesh or discards the error, so either the whole merge takes
/// effect or nothing does.
///
/// # Errors
///
/// Returns [`crate::error::MergeError::Selection`] for fewer than two
/// inputs, [`crate::error::ExtractionError`] variants for objects without
/// usable geometry, [`crate::error::MergeError::NoFaceContact`] when no
/// pair of inputs is in full-face contact, and
/// [`crate::error::MergeError::DegenerateGeometry`] for overlapping
/// duplicate faces.
pub fn merge_solids(objects: &[&dyn MeshProvider], params: &MergeParams) -> Result<MergedMesh> {
    check_selection(objects.len())?;

    let snapshots = objects
        .iter()
        .map(|object| extract_snapshot(*object))
        .collect::<Result<Vec<_>>>()?;

    require_face_contact(&snapshots, params.epsilon)?;

    let weld = weld_vertices(&snapshots, params.epsilon)?;
    let remapped = remap_faces(&snapshots, &weld)?;
    let faces = remove_internal_faces(remapped)?;

    info!(
        "merged {} objects into {MERGED_MESH_NAME:?}: {} vertices, {} faces",
        objects.len(),
        weld.canonical_count(),
        faces.len()
    );

    Ok(MergedMesh {
        name: MERGED_MESH_NAME.to_owned(),
        vertices: weld.into_positions(),
        faces,
    })
}

/// Rewrites all face loops to canonical vertex indices.
///
/// Welding can collapse loop neighbours onto the same canonical vertex;
/// consecutive duplicates are squeezed out, and loops left non-simple or
/// with fewer than three distinct vertices are zero-area slivers and are
/// dropped.
fn remap_faces(snapshots: &[MeshSnapshot], weld: &WeldMap) -> Result<Vec<Vec<usize>>> {
    let mut faces = Vec::new();
    for (snapshot_index, snapshot) in snapshots.iter().enumerate() {
        for &face_id in snapshot.face_ids() {
            let face = snapshot.face(face_id)?;

            let mut loop_: Vec<usize> = Vec::with_capacity(face.vertices.len());
            for &vertex_id in &face.vertices {
                let canonical = weld.canonical(snapshot_index, vertex_id)?;
                if loop_.last() != Some(&canonical) {
                    loop_.push(canonical);
                }
            }
            while loop_.len() > 1 && loop_.first() == loop_.last() {
                loop_.pop();
            }

            let mut distinct = loop_.clone();
            distinct.sort_unstable();
            distinct.dedup();
            if distinct.len() < 3 || distinct.len() < loop_.len() {
                debug!("dropping face collapsed by welding");
                continue;
            }

            faces.push(loop_);
        }
    }
    Ok(faces)
}
