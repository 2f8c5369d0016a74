//! # Reference Overlays
//!
//! Transform-specific guide geometry: the mirror line of a reflection and
//! the displacement arrow of a translation. Rotation and dilation need no
//! overlay; their fixed center is already implied by the axes.

use config::constants::{ARROW_WIDTH, MIRROR_COLOR, OVERLAY_WIDTH, VECTOR_COLOR};
use geolab_transform::{PointSet, ReflectionAxis, TransformSpec};
use scene_types::{Bounds, LineStyle, Primitive};

/// Legend label of the mirror line.
const MIRROR_LABEL: &str = "Mirror line";

/// Legend label of the displacement arrow.
const VECTOR_LABEL: &str = "Translation vector";

/// Resolves the overlay primitives for a transform.
///
/// Returns an empty list for rotation and dilation, one mirror line for a
/// reflection, and one displacement arrow for a translation. Never fails for
/// well-formed specs.
pub fn reference_overlays(
    spec: &TransformSpec,
    original: &PointSet,
    transformed: &PointSet,
    bounds: Bounds,
) -> Vec<Primitive> {
    match spec {
        TransformSpec::Rotation { .. } | TransformSpec::Dilation { .. } => Vec::new(),
        TransformSpec::Reflection { axis } => mirror_line(*axis, bounds).into_iter().collect(),
        TransformSpec::Translation { .. } => {
            displacement_arrow(original, transformed).into_iter().collect()
        }
    }
}

/// The mirror line of a reflection, clipped to `bounds`.
///
/// The two coordinate axes are drawn solid, the diagonals dashed. Returns
/// `None` when the line misses the window entirely.
fn mirror_line(axis: ReflectionAxis, bounds: Bounds) -> Option<Primitive> {
    let (from, to, style) = match axis {
        ReflectionAxis::XAxis => {
            if bounds.y_min > 0.0 || bounds.y_max < 0.0 {
                return None;
            }
            (
                [bounds.x_min, 0.0],
                [bounds.x_max, 0.0],
                LineStyle::Solid,
            )
        }
        ReflectionAxis::YAxis => {
            if bounds.x_min > 0.0 || bounds.x_max < 0.0 {
                return None;
            }
            (
                [0.0, bounds.y_min],
                [0.0, bounds.y_max],
                LineStyle::Solid,
            )
        }
        ReflectionAxis::MainDiagonal => {
            // y = x lives where both coordinates fit the window
            let start = bounds.x_min.max(bounds.y_min);
            let end = bounds.x_max.min(bounds.y_max);
            if start > end {
                return None;
            }
            ([start, start], [end, end], LineStyle::Dashed)
        }
        ReflectionAxis::AntiDiagonal => {
            // y = -x: x must fit the window and -x must fit its y range
            let start = bounds.x_min.max(-bounds.y_max);
            let end = bounds.x_max.min(-bounds.y_min);
            if start > end {
                return None;
            }
            ([start, -start], [end, -end], LineStyle::Dashed)
        }
    };
    Some(Primitive::ReferenceLine {
        from,
        to,
        color: MIRROR_COLOR,
        style,
        width: OVERLAY_WIDTH,
        label: Some(MIRROR_LABEL.to_string()),
    })
}

/// The displacement arrow from the first vertex to its image.
///
/// By construction the arrow geometry equals the translation vector exactly.
fn displacement_arrow(original: &PointSet, transformed: &PointSet) -> Option<Primitive> {
    let from = original.first()?;
    let to = transformed.first()?;
    Some(Primitive::Arrow {
        from: [from.x, from.y],
        to: [to.x, to.y],
        color: VECTOR_COLOR,
        width: ARROW_WIDTH,
        label: Some(VECTOR_LABEL.to_string()),
    })
}

// =============================================================================
// TESTS
// =============================================================================
