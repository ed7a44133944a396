use std::fmt;

use crate::error::SnapshotError;
use crate::mesh::{FaceId, MeshSnapshot, VertexId};

use super::face_match::find_congruent_faces;

/// How strongly two snapshots touch, with classification evidence.
///
/// A closed tag: Face takes precedence over Edge, Edge over Corner. A
/// pair that shares a full face is never reported as edge- or
/// corner-touching even when both technically hold.
#[derive(Debug, Clone, PartialEq)]
pub enum ContactClass {
    /// No vertices within tolerance; carries the closest approach found.
    Gap {
        /// Minimum vertex-to-vertex distance across the pair.
        min_distance: f64,
    },
    /// One vertex of each snapshot coincides.
    Corner {
        vertex_a: VertexId,
        vertex_b: VertexId,
    },
    /// An undirected edge of each snapshot coincides endpoint-for-endpoint.
    Edge {
        edge_a: (VertexId, VertexId),
        edge_b: (VertexId, VertexId),
    },
    /// Two faces are congruent and coplanar: full-face contact.
    Face { face_a: FaceId, face_b: FaceId },
}

/// Classification outcome for one object pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactResult {
    /// Indices of the two objects within the input selection.
    pub pair: (usize, usize),
    /// The single strongest contact tag for the pair.
    pub class: ContactClass,
}

impl ContactResult {
    /// Returns `true` for full-face contact.
    #[must_use]
    pub fn is_face(&self) -> bool {
        matches!(self.class, ContactClass::Face { .. })
    }
}

impl fmt::Display for ContactClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gap { min_distance } => {
                write!(f, "gap between meshes (closest approach {min_distance:.6})")
            }
            Self::Corner { .. } => {
                write!(f, "touch only at a corner; full face contact required")
            }
            Self::Edge { .. } => {
                write!(f, "touch only at an edge; full face contact required")
            }
            Self::Face { .. } => write!(f, "full face contact"),
        }
    }
}

impl fmt::Display for ContactResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "objects {} and {}: {}", self.pair.0, self.pair.1, self.class)
    }
}

/// Classifies the contact between two snapshots.
///
/// Evaluates in priority order: congruent face pair, then coincident
/// edge, then coincident vertex, then gap with the minimum distance
/// found as diagnostic evidence.
///
/// # Errors
///
/// Returns an error if a stored id fails to resolve.
pub fn classify_contact(
    pair: (usize, usize),
    a: &MeshSnapshot,
    b: &MeshSnapshot,
    epsilon: f64,
) -> Result<ContactResult, SnapshotError> {
    if let Some((face_a, face_b)) = find_congruent_faces(a, b, epsilon)? {
        return Ok(ContactResult {
            pair,
            class: ContactClass::Face { face_a, face_b },
        });
    }

    if let Some((edge_a, edge_b)) = find_coincident_edge(a, b, epsilon)? {
        return Ok(ContactResult {
            pair,
            class: ContactClass::Edge { edge_a, edge_b },
        });
    }

    // Corner or gap: scan all vertex pairs, keeping the closest approach
    let mut min_distance = f64::INFINITY;
    let mut touching: Option<(VertexId, VertexId)> = None;
    for &vertex_a in a.vertex_ids() {
        let point_a = a.vertex(vertex_a)?.point;
        for &vertex_b in b.vertex_ids() {
            let distance = (point_a - b.vertex(vertex_b)?.point).norm();
            if distance < min_distance {
                min_distance = distance;
            }
            if distance < epsilon && touching.is_none() {
                touching = Some((vertex_a, vertex_b));
            }
        }
    }

    let class = match touching {
        Some((vertex_a, vertex_b)) => ContactClass::Corner { vertex_a, vertex_b },
        None => ContactClass::Gap { min_distance },
    };
    Ok(ContactResult { pair, class })
}

/// Finds an undirected edge of `a` coinciding with one of `b`.
///
/// Both endpoints must match within `epsilon`, in either orientation.
fn find_coincident_edge(
    a: &MeshSnapshot,
    b: &MeshSnapshot,
    epsilon: f64,
) -> Result<Option<((VertexId, VertexId), (VertexId, VertexId))>, SnapshotError> {
    let edges_b = b.edges();
    for (a0, a1) in a.edges() {
        let p0 = a.vertex(a0)?.point;
        let p1 = a.vertex(a1)?.point;
        for &(b0, b1) in &edges_b {
            let q0 = b.vertex(b0)?.point;
            let q1 = b.vertex(b1)?.point;
            let forward = (p0 - q0).norm() < epsilon && (p1 - q1).norm() < epsilon;
            let reversed = (p0 - q1).norm() < epsilon && (p1 - q0).norm() < epsilon;
            if forward || reversed {
                return Ok(Some(((a0, a1), (b0, b1))));
            }
        }
    }
    Ok(None)
}
