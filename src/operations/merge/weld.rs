use std::collections::HashMap;

use log::debug;

use crate::error::SnapshotError;
use crate::math::union_find::UnionFind;
use crate::math::Point3;
use crate::mesh::{MeshSnapshot, VertexId};

/// Canonical vertex assignment produced by welding.
///
/// Canonical positions keep the position of the first-seen member of each
/// weld group (snapshots in input order, vertices in insertion order).
/// First-seen rather than centroid keeps welding exactly idempotent:
/// re-welding canonical output reproduces the same positions bit for bit.
#[derive(Debug)]
pub struct WeldMap {
    positions: Vec<Point3>,
    remap: HashMap<(usize, VertexId), usize>,
}

impl WeldMap {
    /// Canonical output index for a snapshot vertex.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex was not part of the welded set.
    pub fn canonical(&self, snapshot: usize, vertex: VertexId) -> Result<usize, SnapshotError> {
        self.remap
            .get(&(snapshot, vertex))
            .copied()
            .ok_or(SnapshotError::EntityNotFound("weld group"))
    }

    /// Canonical positions in first-seen order.
    #[must_use]
    pub fn positions(&self) -> &[Point3] {
        &self.positions
    }

    /// Consumes the map, yielding the canonical vertex buffer.
    #[must_use]
    pub fn into_positions(self) -> Vec<Point3> {
        self.positions
    }

    /// Number of canonical vertices.
    #[must_use]
    pub fn canonical_count(&self) -> usize {
        self.positions.len()
    }
}

/// Groups near-coincident vertices across all snapshots.
///
/// Two vertices weld when their distance is below `epsilon`. Grouping is
/// transitive via union-find, so chains of close vertices collapse into
/// one group regardless of the order pairs are discovered in.
///
/// # Errors
///
/// Returns an error if a stored vertex id fails to resolve.
pub fn weld_vertices(snapshots: &[MeshSnapshot], epsilon: f64) -> crate::error::Result<WeldMap> {
    // Dense global index over all snapshot vertices, in input order
    let mut keys: Vec<(usize, VertexId)> = Vec::new();
    let mut points: Vec<Point3> = Vec::new();
    for (snapshot_index, snapshot) in snapshots.iter().enumerate() {
        for &vertex_id in snapshot.vertex_ids() {
            keys.push((snapshot_index, vertex_id));
            points.push(snapshot.vertex(vertex_id)?.point);
        }
    }

    let mut groups = UnionFind::new(points.len());
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            if (points[i] - points[j]).norm() < epsilon {
                groups.union(i, j);
            }
        }
    }

    // Number canonical vertices in first-seen order. The union-find
    // representative is the lowest member index, so `points[root]` is the
    // first-seen position of the group.
    let mut canonical_of_root: HashMap<usize, usize> = HashMap::new();
    let mut positions: Vec<Point3> = Vec::new();
    let mut remap = HashMap::with_capacity(keys.len());
    for (dense, &key) in keys.iter().enumerate() {
        let root = groups.find(dense);
        let canonical = *canonical_of_root.entry(root).or_insert_with(|| {
            positions.push(points[root]);
            positions.len() - 1
        });
        remap.insert(key, canonical);
    }

    debug!(
        "welded {} vertices into {} canonical vertices",
        keys.len(),
        positions.len()
    );
    Ok(WeldMap { positions, remap })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point3, DEFAULT_EPSILON};
    use crate::mesh::{IndexedSolid, VertexData};
    use crate::operations::merge::snapshot::extract_snapshot;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn point_snapshot(points: &[Point3]) -> MeshSnapshot {
        let mut snapshot = MeshSnapshot::new();
        for &point in points {
            snapshot.add_vertex(VertexData::new(point));
        }
        snapshot
    }

    #[test]
    fn distinct_vertices_stay_distinct() {
        let snapshot = point_snapshot(&[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)]);
        let weld = weld_vertices(&[snapshot], DEFAULT_EPSILON).unwrap();
        assert_eq!(weld.canonical_count(), 3);
    }

    #[test]
    fn coincident_vertices_across_snapshots_weld() {
        let a = point_snapshot(&[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)]);
        let b = point_snapshot(&[p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)]);
        let weld = weld_vertices(&[a, b], DEFAULT_EPSILON).unwrap();
        assert_eq!(weld.canonical_count(), 3);
    }

    #[test]
    fn welding_is_transitive_across_a_chain() {
        // Consecutive gaps are below epsilon, the ends are not; the whole
        // chain must still collapse into one group.
        let step = DEFAULT_EPSILON * 0.6;
        let snapshot = point_snapshot(&[
            p(0.0, 0.0, 0.0),
            p(step, 0.0, 0.0),
            p(2.0 * step, 0.0, 0.0),
        ]);
        let weld = weld_vertices(&[snapshot], DEFAULT_EPSILON).unwrap();
        assert_eq!(weld.canonical_count(), 1);
    }

    #[test]
    fn canonical_position_is_first_seen() {
        let a = point_snapshot(&[p(0.0, 0.0, 0.0)]);
        let b = point_snapshot(&[p(DEFAULT_EPSILON * 0.5, 0.0, 0.0)]);
        let weld = weld_vertices(&[a, b], DEFAULT_EPSILON).unwrap();
        assert_eq!(weld.canonical_count(), 1);
        assert_eq!(weld.positions()[0], p(0.0, 0.0, 0.0));
    }

    #[test]
    fn coincident_vertices_map_to_the_same_canonical_index() {
        let snapshots = vec![
            point_snapshot(&[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)]),
            point_snapshot(&[p(1.0, 0.0, 0.0)]),
        ];
        let weld = weld_vertices(&snapshots, DEFAULT_EPSILON).unwrap();
        let shared_a = weld.canonical(0, snapshots[0].vertex_ids()[1]).unwrap();
        let shared_b = weld.canonical(1, snapshots[1].vertex_ids()[0]).unwrap();
        assert_eq!(shared_a, shared_b);
        assert_ne!(
            weld.canonical(0, snapshots[0].vertex_ids()[0]).unwrap(),
            shared_a
        );
    }

    #[test]
    fn touching_cubes_weld_to_twelve_vertices() {
        let a = IndexedSolid::axis_aligned_box("a", p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0));
        let b = IndexedSolid::axis_aligned_box("b", p(1.0, 0.0, 0.0), p(2.0, 1.0, 1.0));
        let snapshots = vec![
            extract_snapshot(&a).unwrap(),
            extract_snapshot(&b).unwrap(),
        ];
        let weld = weld_vertices(&snapshots, DEFAULT_EPSILON).unwrap();
        assert_eq!(weld.canonical_count(), 12);
    }

    #[test]
    fn welding_is_idempotent() {
        let a = IndexedSolid::axis_aligned_box("a", p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0));
        let b = IndexedSolid::axis_aligned_box("b", p(1.0, 0.0, 0.0), p(2.0, 1.0, 1.0));
        let snapshots = vec![
            extract_snapshot(&a).unwrap(),
            extract_snapshot(&b).unwrap(),
        ];
        let first = weld_vertices(&snapshots, DEFAULT_EPSILON).unwrap();

        // Feed the canonical output back through the welder
        let canonical = point_snapshot(first.positions());
        let second = weld_vertices(&[canonical], DEFAULT_EPSILON).unwrap();

        assert_eq!(second.canonical_count(), first.canonical_count());
        assert_eq!(second.positions(), first.positions());
    }

    #[test]
    fn no_two_canonical_vertices_within_epsilon() {
        let a = point_snapshot(&[
            p(0.0, 0.0, 0.0),
            p(DEFAULT_EPSILON * 0.9, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
        ]);
        let weld = weld_vertices(&[a], DEFAULT_EPSILON).unwrap();
        let positions = weld.positions();
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                assert!((positions[i] - positions[j]).norm() >= DEFAULT_EPSILON);
            }
        }
    }
}
