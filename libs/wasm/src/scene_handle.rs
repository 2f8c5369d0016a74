//! # Scene Handle
//!
//! WASM-friendly wrapper for a composed scene that can be handed to
//! JavaScript.

use scene_types::Scene;
use wasm_bindgen::prelude::*;

/// A handle to a composed scene that can be accessed from JavaScript.
///
/// Scalar metadata is exposed through getters; the full primitive list
/// crosses the boundary as JSON, which a canvas renderer walks in order.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const handle = render_rotation(90.0);
///
/// // Metadata
/// document.title = handle.title;
/// const [xMin, xMax, yMin, yMax] = handle.bounds();
///
/// // Draw list
/// const scene = JSON.parse(handle.to_json());
/// for (const primitive of scene.primitives) {
///     drawPrimitive(ctx, primitive);
/// }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct SceneHandle {
    scene: Scene,
}

impl SceneHandle {
    /// Wraps a composed scene.
    pub fn new(scene: Scene) -> Self {
        Self { scene }
    }

    /// Returns the wrapped scene for host-side (native) callers.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}

#[wasm_bindgen]
impl SceneHandle {
    /// Returns the human-readable scene title.
    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String {
        self.scene.title.clone()
    }

    /// Returns the number of primitives in the draw list.
    #[wasm_bindgen(getter)]
    pub fn primitive_count(&self) -> u32 {
        self.scene.primitives.len() as u32
    }

    /// Returns the logical coordinate window as a Float64Array.
    ///
    /// Format: [x_min, x_max, y_min, y_max]
    #[wasm_bindgen]
    pub fn bounds(&self) -> js_sys::Float64Array {
        let bounds = self.scene.bounds;
        js_sys::Float64Array::from(
            &[bounds.x_min, bounds.x_max, bounds.y_min, bounds.y_max][..],
        )
    }

    /// Returns the full scene as JSON.
    ///
    /// # Errors
    /// Returns a JavaScript error value if serialization fails.
    #[wasm_bindgen]
    pub fn to_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.scene).map_err(|err| JsValue::from_str(&err.to_string()))
    }
}
