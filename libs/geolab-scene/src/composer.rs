//! # Scene Composer
//!
//! Builds the ordered primitive list for one render request. Emission order
//! is the z-order: grid, axes, original polygon, transformed polygon,
//! transform-specific overlays.

use config::constants::{
    AXIS_COLOR, GRID_COLOR, GRID_SPACING, GUIDE_WIDTH, IMAGE_COLOR, LABEL_DECIMALS, LABEL_OFFSET,
    MARKER_SIZE, ORIGINAL_COLOR, OUTLINE_WIDTH,
};
use geolab_transform::{PointSet, TransformSpec};
use scene_types::{Bounds, LineStyle, MarkerShape, Primitive, Scene};

use crate::overlay::reference_overlays;

/// Composes the complete scene for one render request.
///
/// Pure and total: well-formed inputs always yield a scene. `bounds` is a
/// logical coordinate window used to clip the grid, axes, and overlay
/// geometry; the composer never sees pixels.
pub fn compose_scene(
    original: &PointSet,
    transformed: &PointSet,
    spec: &TransformSpec,
    bounds: Bounds,
) -> Scene {
    let mut scene = Scene::new(spec.title(), bounds);

    emit_grid(&mut scene, bounds);
    emit_axes(&mut scene, bounds);
    emit_polygon(
        &mut scene,
        original,
        ORIGINAL_COLOR,
        MarkerShape::Circle,
        "Original object",
    );
    emit_polygon(
        &mut scene,
        transformed,
        IMAGE_COLOR,
        MarkerShape::Square,
        spec.image_label(),
    );
    for primitive in reference_overlays(spec, original, transformed, bounds) {
        scene.push(primitive);
    }

    scene
}

/// Emits dotted grid lines at every multiple of the grid spacing.
fn emit_grid(scene: &mut Scene, bounds: Bounds) {
    for x in grid_steps(bounds.x_min, bounds.x_max) {
        scene.push(Primitive::ReferenceLine {
            from: [x, bounds.y_min],
            to: [x, bounds.y_max],
            color: GRID_COLOR,
            style: LineStyle::Dotted,
            width: GUIDE_WIDTH,
            label: None,
        });
    }
    for y in grid_steps(bounds.y_min, bounds.y_max) {
        scene.push(Primitive::ReferenceLine {
            from: [bounds.x_min, y],
            to: [bounds.x_max, y],
            color: GRID_COLOR,
            style: LineStyle::Dotted,
            width: GUIDE_WIDTH,
            label: None,
        });
    }
}

/// Multiples of the grid spacing inside `[min, max]`.
fn grid_steps(min: f64, max: f64) -> impl Iterator<Item = f64> {
    let first = (min / GRID_SPACING).ceil() as i64;
    let last = (max / GRID_SPACING).floor() as i64;
    (first..=last).map(|step| step as f64 * GRID_SPACING)
}

/// Emits the dashed coordinate axes through the origin, clipped to `bounds`.
fn emit_axes(scene: &mut Scene, bounds: Bounds) {
    if bounds.y_min <= 0.0 && bounds.y_max >= 0.0 {
        scene.push(Primitive::ReferenceLine {
            from: [bounds.x_min, 0.0],
            to: [bounds.x_max, 0.0],
            color: AXIS_COLOR,
            style: LineStyle::Dashed,
            width: GUIDE_WIDTH,
            label: None,
        });
    }
    if bounds.x_min <= 0.0 && bounds.x_max >= 0.0 {
        scene.push(Primitive::ReferenceLine {
            from: [0.0, bounds.y_min],
            to: [0.0, bounds.y_max],
            color: AXIS_COLOR,
            style: LineStyle::Dashed,
            width: GUIDE_WIDTH,
            label: None,
        });
    }
}

/// Emits one polygon: closed outline, vertex markers, coordinate labels.
fn emit_polygon(
    scene: &mut Scene,
    points: &PointSet,
    color: [f32; 4],
    shape: MarkerShape,
    label: &str,
) {
    scene.push(Primitive::Polyline {
        points: points.closed().iter().map(|p| [p.x, p.y]).collect(),
        color,
        style: LineStyle::Solid,
        width: OUTLINE_WIDTH,
        label: Some(label.to_string()),
    });
    scene.push(Primitive::PointMarkers {
        points: points.to_coords(),
        color,
        shape,
        size: MARKER_SIZE,
    });
    for &p in points.points() {
        scene.push(Primitive::TextLabel {
            position: [p.x + LABEL_OFFSET, p.y + LABEL_OFFSET],
            text: format!(
                "({:.prec$}, {:.prec$})",
                p.x,
                p.y,
                prec = LABEL_DECIMALS
            ),
        });
    }
}

// =============================================================================
// TESTS
// =============================================================================
