use super::{Point3, Vector3, TOLERANCE};

/// Unit normal of a polygon loop via Newell's method.
///
/// The direction follows the loop winding (counter-clockwise when viewed
/// against the normal). Returns `None` for loops with fewer than three
/// points or whose accumulated normal is degenerate (collinear points,
/// zero area).
#[must_use]
pub fn unit_newell_normal(points: &[Point3]) -> Option<Vector3> {
    if points.len() < 3 {
        return None;
    }

    let n = points.len();
    let mut normal = Vector3::zeros();
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        normal.x += (p.y - q.y) * (p.z + q.z);
        normal.y += (p.z - q.z) * (p.x + q.x);
        normal.z += (p.x - q.x) * (p.y + q.y);
    }

    let len = normal.norm();
    if len < TOLERANCE {
        return None;
    }
    Some(normal / len)
}

/// Signed distance from the origin to the polygon's plane along `normal`.
#[must_use]
pub fn plane_offset(points: &[Point3], normal: &Vector3) -> f64 {
    points.first().map_or(0.0, |p| normal.dot(&p.coords))
}
