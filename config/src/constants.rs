//! # Configuration Constants
//!
//! Centralized constants for the transformation lab pipeline. Precision
//! tolerances, the logical viewport, scene styling, and the demo polygon are
//! all defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Viewport**: Logical coordinate window and grid metrics
//! - **Styling**: Palette, stroke widths, and marker metrics for scenes
//! - **Demo Object**: The fixed polygon shown in the lab
//! - **Defaults**: Initial parameter values for interactive controls

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance. This value is chosen to balance precision with
/// robustness against floating-point errors.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// VIEWPORT CONSTANTS
// =============================================================================

/// Half-width of the symmetric logical viewport.
///
/// Scenes are composed inside the window `[-VIEW_EXTENT, VIEW_EXTENT]` on
/// both axes. Infinite reference lines (axes, mirror lines) are clipped to
/// this window; the renderer maps it to pixels however it likes.
///
/// # Example
///
/// ```rust
/// use config::constants::VIEW_EXTENT;
///
/// let x: f64 = 4.0;
/// assert!(x.abs() <= VIEW_EXTENT);
/// ```
pub const VIEW_EXTENT: f64 = 10.0;

/// Spacing between background grid lines, in logical units.
///
/// Grid lines are emitted at every integer multiple of this spacing inside
/// the viewport.
pub const GRID_SPACING: f64 = 1.0;

/// Offset of a coordinate label from its vertex, in logical units.
///
/// Labels are placed above and to the right of the vertex they annotate so
/// they do not overlap the marker.
pub const LABEL_OFFSET: f64 = 0.1;

/// Number of decimal places in vertex coordinate labels.
pub const LABEL_DECIMALS: usize = 1;

// =============================================================================
// STYLING CONSTANTS
// =============================================================================

/// Color of the original (untransformed) polygon. Blue, RGBA.
pub const ORIGINAL_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

/// Color of the transformed polygon. Red, RGBA.
pub const IMAGE_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

/// Color of the mirror line drawn for reflections. Purple, RGBA.
pub const MIRROR_COLOR: [f32; 4] = [0.5, 0.0, 0.5, 1.0];

/// Color of the displacement-vector arrow drawn for translations. Green, RGBA.
pub const VECTOR_COLOR: [f32; 4] = [0.0, 0.5, 0.0, 1.0];

/// Color of the coordinate axes through the origin. Gray, RGBA.
pub const AXIS_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];

/// Color of the background grid. Light gray, semi-transparent.
pub const GRID_COLOR: [f32; 4] = [0.7, 0.7, 0.7, 0.6];

/// Stroke width of polygon outlines, in renderer points.
pub const OUTLINE_WIDTH: f32 = 2.0;

/// Stroke width of mirror lines and other transform overlays.
pub const OVERLAY_WIDTH: f32 = 2.0;

/// Stroke width of axes and grid lines.
pub const GUIDE_WIDTH: f32 = 1.0;

/// Stroke width of the displacement-vector arrow.
pub const ARROW_WIDTH: f32 = 1.5;

/// Area of vertex markers, in renderer points squared.
pub const MARKER_SIZE: f32 = 50.0;

// =============================================================================
// DEMO OBJECT
// =============================================================================

/// Vertices of the fixed demo polygon, in winding order.
///
/// A square with corners (1,1), (4,1), (4,4), (1,4). Every transformation in
/// the lab is applied to this shape.
///
/// # Example
///
/// ```rust
/// use config::constants::DEMO_SQUARE;
///
/// assert_eq!(DEMO_SQUARE.len(), 4);
/// assert_eq!(DEMO_SQUARE[0], [1.0, 1.0]);
/// ```
pub const DEMO_SQUARE: [[f64; 2]; 4] = [[1.0, 1.0], [4.0, 1.0], [4.0, 4.0], [1.0, 4.0]];

// =============================================================================
// CONTROL DEFAULTS
// =============================================================================

/// Initial rotation angle offered by the UI, in degrees.
pub const DEFAULT_ANGLE_DEG: f64 = 90.0;

/// Initial dilation scale factor offered by the UI.
pub const DEFAULT_SCALE_FACTOR: f64 = 2.0;

/// Initial translation vector offered by the UI.
pub const DEFAULT_TRANSLATION: [f64; 2] = [2.0, 3.0];
