//! # Geolab Scene
//!
//! Scene composition for the transformation lab. Turns an original point
//! set, its transformed image, and the transform spec into a complete,
//! ordered list of drawable primitives.
//!
//! ## Architecture
//!
//! ```text
//! geolab-transform (PointSet) → geolab-scene (Scene) → renderer
//! ```
//!
//! Everything here is pure and deterministic: logical coordinates in, fully
//! resolved primitives out. The renderer draws the list in order and does no
//! computation of its own.
//!
//! ## Usage
//!
//! ```rust
//! use geolab_scene::render_demo;
//! use geolab_transform::TransformSpec;
//!
//! let scene = render_demo(&TransformSpec::Rotation { angle_deg: 90.0 });
//! assert_eq!(scene.title, "Rotation by 90\u{b0}");
//! ```

pub mod composer;
pub mod overlay;

pub use composer::compose_scene;
pub use overlay::reference_overlays;

use config::constants::VIEW_EXTENT;
use geolab_transform::{apply_transform, PointSet, TransformSpec};
use scene_types::{Bounds, Scene};

/// Runs the whole pipeline for the fixed demo polygon.
///
/// Applies `spec` to the demo square and composes the scene inside the
/// default symmetric viewport. This is the entry point the UI boundary
/// calls once per parameter change.
pub fn render_demo(spec: &TransformSpec) -> Scene {
    let original = PointSet::demo_square();
    let transformed = apply_transform(&original, spec);
    compose_scene(
        &original,
        &transformed,
        spec,
        Bounds::symmetric(VIEW_EXTENT),
    )
}
