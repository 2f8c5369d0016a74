//! WASM-facing entry points for the transformation lab pipeline.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. One entry point exists per interactive control surface
//! (rotation, dilation, reflection, translation), plus a generic entry that
//! accepts a JSON-serialized spec. Native tests interact with the internal
//! `*_internal` helpers to avoid depending on a JS host.
//!
//! ```
//! let scene = geolab_wasm::render_reflection_internal("x-axis").unwrap();
//! assert_eq!(scene.title, "Reflection over the X-axis");
//! ```

use config::constants::VIEW_EXTENT;
use geolab_scene::render_demo;
use geolab_transform::{ReflectionAxis, TransformError, TransformSpec};
use glam::DVec2;
use scene_types::Scene;
use wasm_bindgen::prelude::*;

mod scene_handle;

pub use scene_handle::SceneHandle;

#[cfg(test)]
mod tests;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "geolab-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Returns the half-width of the logical viewport scenes are composed in.
///
/// The UI uses this to size its canvas mapping; it is a thin wrapper around
/// a shared constant.
///
/// # Examples
/// ```
/// let extent = geolab_wasm::view_extent();
/// assert!(extent > 0.0);
/// ```
#[wasm_bindgen]
pub fn view_extent() -> f64 {
    VIEW_EXTENT
}

/// Composes the scene for a rotation of the demo polygon.
///
/// Positive angles turn counter-clockwise; angles are not normalized, so any
/// real value is accepted.
#[wasm_bindgen]
pub fn render_rotation(angle_deg: f64) -> SceneHandle {
    SceneHandle::new(render_demo(&TransformSpec::Rotation { angle_deg }))
}

/// Composes the scene for a dilation of the demo polygon.
///
/// Degenerate factors (zero, negative) are valid inputs and produce a
/// degenerate image, not an error.
#[wasm_bindgen]
pub fn render_dilation(factor: f64) -> SceneHandle {
    SceneHandle::new(render_demo(&TransformSpec::Dilation { factor }))
}

/// Composes the scene for a reflection of the demo polygon.
///
/// `axis` is the string value of the UI dropdown, e.g. `"X-axis"` or
/// `"y=-x"`.
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message when
/// the axis label is outside the supported set.
#[wasm_bindgen]
pub fn render_reflection(axis: &str) -> Result<SceneHandle, JsValue> {
    render_reflection_internal(axis)
        .map(SceneHandle::new)
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Composes the scene for a translation of the demo polygon.
#[wasm_bindgen]
pub fn render_translation(dx: f64, dy: f64) -> SceneHandle {
    SceneHandle::new(render_demo(&TransformSpec::Translation {
        offset: DVec2::new(dx, dy),
    }))
}

/// Composes a scene from a JSON-serialized transform spec.
///
/// This is the generic entry point for hosts that keep the whole spec as
/// data, e.g. `{"Rotation":{"angle_deg":90.0}}`.
///
/// # Errors
/// Returns a JavaScript error value when the JSON does not describe a valid
/// spec (including an unknown reflection axis).
#[wasm_bindgen]
pub fn render_scene(spec_json: &str) -> Result<SceneHandle, JsValue> {
    render_scene_internal(spec_json)
        .map(SceneHandle::new)
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only helper that parses a dropdown axis label and runs the pipeline.
///
/// # Examples
/// ```
/// let scene = geolab_wasm::render_reflection_internal("y=x").unwrap();
/// assert_eq!(scene.title, "Reflection over the line y = x");
/// ```
pub fn render_reflection_internal(axis: &str) -> Result<Scene, TransformError> {
    let axis = ReflectionAxis::parse(axis)?;
    Ok(render_demo(&TransformSpec::Reflection { axis }))
}

/// Host-only helper that deserializes a spec and runs the pipeline.
///
/// # Examples
/// ```
/// let scene =
///     geolab_wasm::render_scene_internal(r#"{"Dilation":{"factor":2.0}}"#).unwrap();
/// assert_eq!(scene.title, "Dilation with scale factor k = 2");
/// ```
pub fn render_scene_internal(spec_json: &str) -> Result<Scene, serde_json::Error> {
    let spec: TransformSpec = serde_json::from_str(spec_json)?;
    Ok(render_demo(&spec))
}
