mod contact;
mod dedup;
mod engine;
mod face_match;
mod snapshot;
mod validate;
mod weld;

pub use contact::{classify_contact, ContactClass, ContactResult};
pub use dedup::remove_internal_faces;
pub use engine::{merge_solids, MergeParams, MERGED_MESH_NAME};
pub use face_match::{faces_congruent, find_congruent_faces};
pub use snapshot::extract_snapshot;
pub use validate::{check_selection, require_face_contact};
pub use weld::{weld_vertices, WeldMap};
