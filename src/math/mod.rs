pub mod polygon_3d;
pub mod union_find;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Default contact/weld tolerance in world units.
///
/// Applied uniformly to vertex coincidence, edge matching and plane-offset
/// comparisons unless the caller overrides it per invocation.
pub const DEFAULT_EPSILON: f64 = 1e-4;
