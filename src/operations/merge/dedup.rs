use std::collections::HashMap;

use log::debug;

use crate::error::{MergeError, Result};

/// Removes canceled internal faces after welding.
///
/// Faces are compared by their order-independent canonical vertex-id set.
/// A set occurring exactly twice is the two outward copies of a face now
/// enclosed between two solids; both are dropped. A set occurring more
/// than twice means overlapping or duplicated input and aborts the merge
/// rather than being silently resolved. Singletons are external boundary
/// faces and are kept in input order.
///
/// # Errors
///
/// Returns [`MergeError::DegenerateGeometry`] when any vertex-id set
/// occurs more than twice.
pub fn remove_internal_faces(faces: Vec<Vec<usize>>) -> Result<Vec<Vec<usize>>> {
    let keys: Vec<Vec<usize>> = faces.iter().map(|face| sorted_key(face)).collect();

    let mut occurrences: HashMap<&[usize], usize> = HashMap::new();
    for key in &keys {
        *occurrences.entry(key.as_slice()).or_insert(0) += 1;
    }

    if let Some(&count) = occurrences.values().find(|&&count| count > 2) {
        return Err(MergeError::DegenerateGeometry { occurrences: count }.into());
    }

    let before = faces.len();
    let kept: Vec<Vec<usize>> = faces
        .into_iter()
        .zip(&keys)
        .filter(|(_, key)| occurrences[key.as_slice()] == 1)
        .map(|(face, _)| face)
        .collect();

    debug!("removed {} internal face(s)", before - kept.len());
    Ok(kept)
}

/// Order-independent identity of a face loop.
fn sorted_key(face: &[usize]) -> Vec<usize> {
    let mut key = face.to_vec();
    key.sort_unstable();
    key
}
