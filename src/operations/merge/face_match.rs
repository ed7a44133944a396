use crate::error::SnapshotError;
use crate::math::polygon_3d::{plane_offset, unit_newell_normal};
use crate::math::Point3;
use crate::mesh::{FaceId, MeshSnapshot};

/// Maximum deviation of the normal dot product from exact anti-parallel.
const NORMAL_ALIGN_TOL: f64 = 1e-6;

/// Finds the first pair of congruent faces across two snapshots.
///
/// Scans every face pair with equal vertex count; O(faces_a × faces_b × n),
/// acceptable for the simple solids this engine targets.
///
/// # Errors
///
/// Returns an error if a stored face or vertex id fails to resolve.
pub fn find_congruent_faces(
    a: &MeshSnapshot,
    b: &MeshSnapshot,
    epsilon: f64,
) -> Result<Option<(FaceId, FaceId)>, SnapshotError> {
    for &face_a in a.face_ids() {
        let points_a = a.face_points(face_a)?;
        for &face_b in b.face_ids() {
            let points_b = b.face_points(face_b)?;
            if faces_congruent(&points_a, &points_b, epsilon) {
                return Ok(Some((face_a, face_b)));
            }
        }
    }
    Ok(None)
}

/// Tests whether two face loops describe the same planar region.
///
/// True when some cyclic rotation of `b`, forward or reversed, pairs
/// every vertex within `epsilon` of `a`, and the face planes coincide.
/// The loops come from opposite sides of a contact, so their outward
/// windings oppose: plane coincidence requires anti-parallel normals.
#[must_use]
pub fn faces_congruent(a: &[Point3], b: &[Point3], epsilon: f64) -> bool {
    if a.len() != b.len() || a.len() < 3 {
        return false;
    }

    if !planes_coincide(a, b, epsilon) {
        return false;
    }

    if loops_match(a, b, epsilon) {
        return true;
    }
    let reversed: Vec<Point3> = b.iter().rev().copied().collect();
    loops_match(a, &reversed, epsilon)
}

/// Tries every cyclic rotation of `b` against `a`.
fn loops_match(a: &[Point3], b: &[Point3], epsilon: f64) -> bool {
    let n = a.len();
    (0..n).any(|offset| (0..n).all(|i| (a[i] - b[(i + offset) % n]).norm() < epsilon))
}

/// Anti-parallel unit normals and coincident plane offsets.
fn planes_coincide(a: &[Point3], b: &[Point3], epsilon: f64) -> bool {
    let Some(normal_a) = unit_newell_normal(a) else {
        return false;
    };
    let Some(normal_b) = unit_newell_normal(b) else {
        return false;
    };

    if normal_a.dot(&normal_b) > -(1.0 - NORMAL_ALIGN_TOL) {
        return false;
    }

    // With normal_b ≈ -normal_a, the signed offsets of coincident planes
    // cancel out.
    let offset_a = plane_offset(a, &normal_a);
    let offset_b = plane_offset(b, &normal_b);
    (offset_a + offset_b).abs() < epsilon
}
