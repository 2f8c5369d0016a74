//! # Transform Functions
//!
//! Pure functions building the matrix (or vector) for each transform kind
//! and applying it to a point set. Every function returns a new set of equal
//! cardinality and ordering, so vertices before and after can be paired
//! positionally.

use glam::{DMat2, DVec2};

use crate::point_set::PointSet;
use crate::spec::{ReflectionAxis, TransformSpec};

// =============================================================================
// MATRICES
// =============================================================================

/// The 2x2 rotation matrix for an angle in degrees.
///
/// Positive angles turn counter-clockwise in the standard mathematical
/// convention; a renderer must keep the Y-axis pointing up to preserve this.
/// Angles are not normalized, so 0° and 360° build equivalent matrices from
/// distinct inputs.
pub fn rotation_matrix(angle_deg: f64) -> DMat2 {
    DMat2::from_angle(angle_deg.to_radians())
}

/// The 2x2 scale matrix for a uniform dilation about the origin.
///
/// `factor = 1` is the identity; `factor = 0` collapses every point to the
/// origin; negative factors combine a point reflection with a scale. All are
/// valid inputs.
pub fn dilation_matrix(factor: f64) -> DMat2 {
    DMat2::from_diagonal(DVec2::splat(factor))
}

/// The 2x2 reflection matrix for one of the four supported mirror lines.
pub fn reflection_matrix(axis: ReflectionAxis) -> DMat2 {
    match axis {
        ReflectionAxis::XAxis => DMat2::from_cols(DVec2::new(1.0, 0.0), DVec2::new(0.0, -1.0)),
        ReflectionAxis::YAxis => DMat2::from_cols(DVec2::new(-1.0, 0.0), DVec2::new(0.0, 1.0)),
        ReflectionAxis::MainDiagonal => {
            DMat2::from_cols(DVec2::new(0.0, 1.0), DVec2::new(1.0, 0.0))
        }
        ReflectionAxis::AntiDiagonal => {
            DMat2::from_cols(DVec2::new(0.0, -1.0), DVec2::new(-1.0, 0.0))
        }
    }
}

// =============================================================================
// POINT-SET OPERATIONS
// =============================================================================

/// Rotates every point about the origin by an angle in degrees.
pub fn rotate(points: &PointSet, angle_deg: f64) -> PointSet {
    points.transformed(rotation_matrix(angle_deg))
}

/// Scales every point about the origin by a uniform factor.
pub fn dilate(points: &PointSet, factor: f64) -> PointSet {
    points.transformed(dilation_matrix(factor))
}

/// Mirrors every point across the given axis.
pub fn reflect(points: &PointSet, axis: ReflectionAxis) -> PointSet {
    points.transformed(reflection_matrix(axis))
}

/// Shifts every point by the vector `(dx, dy)`.
pub fn translate(points: &PointSet, dx: f64, dy: f64) -> PointSet {
    points.translated(DVec2::new(dx, dy))
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Applies a transformation spec to a point set.
///
/// This is the main entry point for the engine. It is total over well-typed
/// specs: the sum type makes an invalid reflection axis unrepresentable, so
/// the invalid-configuration failure lives at spec construction instead
/// (see [`ReflectionAxis::parse`]).
///
/// ## Example
///
/// ```rust
/// use geolab_transform::{apply_transform, PointSet, TransformSpec};
///
/// let image = apply_transform(
///     &PointSet::demo_square(),
///     &TransformSpec::Dilation { factor: 2.0 },
/// );
/// assert_eq!(image.point(0), glam::DVec2::new(2.0, 2.0));
/// ```
pub fn apply_transform(points: &PointSet, spec: &TransformSpec) -> PointSet {
    match spec {
        TransformSpec::Rotation { angle_deg } => rotate(points, *angle_deg),
        TransformSpec::Dilation { factor } => dilate(points, *factor),
        TransformSpec::Reflection { axis } => reflect(points, *axis),
        TransformSpec::Translation { offset } => points.translated(*offset),
    }
}

// =============================================================================
// TESTS
// =============================================================================
