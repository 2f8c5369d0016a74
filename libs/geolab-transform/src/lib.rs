//! # Geolab Transform
//!
//! The planar transformation engine: immutable point sets plus pure
//! functions applying rotation, dilation, reflection, and translation about
//! the origin.
//!
//! ## Architecture
//!
//! ```text
//! TransformSpec → geolab-transform (PointSet) → geolab-scene (Scene)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use geolab_transform::{apply_transform, PointSet, TransformSpec};
//!
//! let square = PointSet::demo_square();
//! let spec = TransformSpec::Rotation { angle_deg: 90.0 };
//! let image = apply_transform(&square, &spec);
//! assert_eq!(image.len(), square.len());
//! ```

pub mod error;
pub mod point_set;
pub mod spec;
pub mod transform;

// Re-export public API
pub use error::TransformError;
pub use point_set::PointSet;
pub use spec::{ReflectionAxis, TransformSpec};
pub use transform::{
    apply_transform, dilate, dilation_matrix, reflect, reflection_matrix, rotate,
    rotation_matrix, translate,
};

#[cfg(test)]
mod tests;
