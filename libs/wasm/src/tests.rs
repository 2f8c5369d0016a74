//! # Boundary Tests
//!
//! Native tests exercising the host-only helpers; no JS runtime involved.

use crate::{render_reflection_internal, render_scene_internal, SceneHandle};
use geolab_scene::render_demo;
use geolab_transform::{TransformError, TransformSpec};
use scene_types::Scene;

#[test]
fn test_reflection_internal_accepts_dropdown_labels() {
    let scene = render_reflection_internal("X-axis").unwrap();
    assert_eq!(scene.title, "Reflection over the X-axis");

    let scene = render_reflection_internal("y=-x").unwrap();
    assert_eq!(scene.title, "Reflection over the line y = -x");
}

#[test]
fn test_reflection_internal_rejects_unknown_axis() {
    let err = render_reflection_internal("diagonal-ish").unwrap_err();
    assert_eq!(
        err,
        TransformError::InvalidConfiguration("diagonal-ish".to_string())
    );
}

#[test]
fn test_render_scene_internal_parses_spec_json() {
    let scene = render_scene_internal(r#"{"Rotation":{"angle_deg":90.0}}"#).unwrap();
    assert_eq!(scene.title, "Rotation by 90\u{b0}");
    assert!(!scene.primitives.is_empty());
}

#[test]
fn test_render_scene_internal_rejects_malformed_json() {
    assert!(render_scene_internal("{not json").is_err());
    assert!(render_scene_internal(r#"{"Shear":{"amount":1.0}}"#).is_err());
}

#[test]
fn test_handle_exposes_scene_metadata() {
    let scene = render_demo(&TransformSpec::Dilation { factor: 2.0 });
    let expected_count = scene.primitives.len() as u32;
    let handle = SceneHandle::new(scene);
    assert_eq!(handle.title(), "Dilation with scale factor k = 2");
    assert_eq!(handle.primitive_count(), expected_count);
}

#[test]
fn test_handle_json_round_trips() {
    let scene = render_demo(&TransformSpec::Rotation { angle_deg: 45.0 });
    let handle = SceneHandle::new(scene.clone());
    let json = handle.to_json().unwrap();
    let back: Scene = serde_json::from_str(&json).unwrap();
    assert_eq!(back, scene);
}
