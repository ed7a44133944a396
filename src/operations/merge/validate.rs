use log::debug;

use crate::error::{MergeError, Result};
use crate::mesh::MeshSnapshot;

use super::contact::{classify_contact, ContactResult};

/// Rejects selections with fewer than two mesh objects.
///
/// # Errors
///
/// Returns [`MergeError::Selection`] with the supplied count.
pub fn check_selection(supplied: usize) -> Result<()> {
    if supplied < 2 {
        return Err(MergeError::Selection { supplied }.into());
    }
    Ok(())
}

/// Classifies every object pair and requires at least one Face contact.
///
/// This is the sole gate protecting mesh integrity downstream: welding
/// and internal-face removal only run on selections that pass. On
/// failure the error carries the complete per-pair classification list
/// so the caller can report gap vs. edge-touch vs. corner-touch.
///
/// # Errors
///
/// Returns [`MergeError::NoFaceContact`] when no pair is in full-face
/// contact, or a snapshot error if stored ids fail to resolve.
pub fn require_face_contact(
    snapshots: &[MeshSnapshot],
    epsilon: f64,
) -> Result<Vec<ContactResult>> {
    let mut contacts = Vec::new();
    for i in 0..snapshots.len() {
        for j in (i + 1)..snapshots.len() {
            let contact = classify_contact((i, j), &snapshots[i], &snapshots[j], epsilon)?;
            debug!("{contact}");
            contacts.push(contact);
        }
    }

    if contacts.iter().any(ContactResult::is_face) {
        Ok(contacts)
    } else {
        Err(MergeError::NoFaceContact { contacts }.into())
    }
}
