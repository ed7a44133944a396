pub mod error;
pub mod math;
pub mod mesh;
pub mod operations;

pub use error::{MeshError, Result};
pub use mesh::{IndexedSolid, MergedMesh, MeshProvider, MeshSnapshot};
pub use operations::merge::{merge_solids, ContactClass, ContactResult, MergeParams, MERGED_MESH_NAME};
