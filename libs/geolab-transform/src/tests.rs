//! # Engine Tests
//!
//! Algebraic properties of the four transforms plus the reference scenarios
//! for the demo square.

use crate::{
    apply_transform, dilate, reflect, rotate, translate, PointSet, ReflectionAxis, TransformSpec,
};
use config::constants::EPSILON;
use glam::DVec2;

// =============================================================================
// ALGEBRAIC PROPERTIES
// =============================================================================

#[test]
fn test_rotations_compose_by_adding_angles() {
    let square = PointSet::demo_square();
    for (a, b) in [(30.0, 60.0), (-45.0, 180.0), (123.4, 567.8)] {
        let sequential = rotate(&rotate(&square, a), b);
        let combined = rotate(&square, a + b);
        assert!(sequential.approx_eq(&combined, EPSILON));
    }
}

#[test]
fn test_unnormalized_angles_wrap() {
    let square = PointSet::demo_square();
    // 450° is not canonicalized on input, but the image matches 90°
    let wrapped = rotate(&square, 450.0);
    let quarter = rotate(&square, 90.0);
    assert!(wrapped.approx_eq(&quarter, EPSILON));
}

#[test]
fn test_dilation_by_one_is_identity() {
    let square = PointSet::demo_square();
    assert!(dilate(&square, 1.0).approx_eq(&square, EPSILON));
}

#[test]
fn test_dilation_by_zero_collapses_to_origin() {
    let collapsed = dilate(&PointSet::demo_square(), 0.0);
    assert_eq!(collapsed.len(), 4);
    for &p in collapsed.points() {
        assert_eq!(p, DVec2::ZERO);
    }
}

#[test]
fn test_negative_dilation_is_scaled_point_reflection() {
    let square = PointSet::demo_square();
    let negative = dilate(&square, -2.0);
    let reflected = rotate(&dilate(&square, 2.0), 180.0);
    assert!(negative.approx_eq(&reflected, EPSILON));
}

#[test]
fn test_reflection_is_an_involution() {
    let square = PointSet::demo_square();
    for axis in ReflectionAxis::ALL {
        let twice = reflect(&reflect(&square, axis), axis);
        assert!(twice.approx_eq(&square, EPSILON), "axis {:?}", axis);
    }
}

#[test]
fn test_translations_compose_by_adding_vectors() {
    let square = PointSet::demo_square();
    let sequential = translate(&translate(&square, 1.5, -2.0), 0.5, 4.0);
    let combined = translate(&square, 2.0, 2.0);
    assert!(sequential.approx_eq(&combined, EPSILON));
}

#[test]
fn test_all_transforms_preserve_count_and_order() {
    let square = PointSet::demo_square();
    let specs = [
        TransformSpec::Rotation { angle_deg: 37.0 },
        TransformSpec::Dilation { factor: 0.5 },
        TransformSpec::Reflection {
            axis: ReflectionAxis::AntiDiagonal,
        },
        TransformSpec::Translation {
            offset: DVec2::new(-1.0, 2.0),
        },
    ];
    for spec in specs {
        let image = apply_transform(&square, &spec);
        assert_eq!(image.len(), square.len(), "{:?}", spec);
        // Ordering: vertex 0 of the image is the image of vertex 0
        let expected_first = apply_transform(
            &PointSet::new(vec![square.point(0)]),
            &spec,
        );
        assert!((image.point(0) - expected_first.point(0)).length() < EPSILON);
    }
}

// =============================================================================
// REFERENCE SCENARIOS (demo square (1,1), (4,1), (4,4), (1,4))
// =============================================================================

#[test]
fn test_scenario_rotation_90() {
    let image = rotate(&PointSet::demo_square(), 90.0);
    let expected =
        PointSet::from_coords(&[[-1.0, 1.0], [-1.0, 4.0], [-4.0, 4.0], [-4.0, 1.0]]);
    assert!(image.approx_eq(&expected, EPSILON));
}

#[test]
fn test_scenario_dilation_2() {
    let image = dilate(&PointSet::demo_square(), 2.0);
    let expected = PointSet::from_coords(&[[2.0, 2.0], [8.0, 2.0], [8.0, 8.0], [2.0, 8.0]]);
    assert!(image.approx_eq(&expected, EPSILON));
}

#[test]
fn test_scenario_reflection_x_axis() {
    let image = reflect(&PointSet::demo_square(), ReflectionAxis::XAxis);
    let expected =
        PointSet::from_coords(&[[1.0, -1.0], [4.0, -1.0], [4.0, -4.0], [1.0, -4.0]]);
    assert!(image.approx_eq(&expected, EPSILON));
}

#[test]
fn test_scenario_translation_2_3() {
    let image = translate(&PointSet::demo_square(), 2.0, 3.0);
    let expected = PointSet::from_coords(&[[3.0, 4.0], [6.0, 4.0], [6.0, 7.0], [3.0, 7.0]]);
    assert!(image.approx_eq(&expected, EPSILON));
}

#[test]
fn test_invalid_axis_rejected_before_any_matrix() {
    // The bad label never reaches reflection_matrix; parse rejects it first
    let result = ReflectionAxis::parse("the moon");
    assert!(result.is_err());
}
