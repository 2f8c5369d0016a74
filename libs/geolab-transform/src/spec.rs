//! # Transformation Specs
//!
//! Pure-data descriptions of the four supported transformations. A spec
//! carries no behavior; the functions in [`crate::transform`] consume it.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::TransformError;

/// The mirror line of a reflection.
///
/// Only these four lines are supported; anything else is an
/// [`TransformError::InvalidConfiguration`] at construction time, so the
/// transform functions never see an invalid axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReflectionAxis {
    /// The horizontal axis, y = 0.
    XAxis,
    /// The vertical axis, x = 0.
    YAxis,
    /// The line y = x.
    MainDiagonal,
    /// The line y = -x.
    AntiDiagonal,
}

impl ReflectionAxis {
    /// All supported axes, in UI order.
    pub const ALL: [ReflectionAxis; 4] = [
        ReflectionAxis::XAxis,
        ReflectionAxis::YAxis,
        ReflectionAxis::MainDiagonal,
        ReflectionAxis::AntiDiagonal,
    ];

    /// Short label for legends and dropdowns.
    pub fn label(&self) -> &'static str {
        match self {
            ReflectionAxis::XAxis => "X-axis",
            ReflectionAxis::YAxis => "Y-axis",
            ReflectionAxis::MainDiagonal => "y = x",
            ReflectionAxis::AntiDiagonal => "y = -x",
        }
    }

    /// Phrase used in scene titles, e.g. "the X-axis" or "the line y = x".
    pub fn description(&self) -> &'static str {
        match self {
            ReflectionAxis::XAxis => "the X-axis",
            ReflectionAxis::YAxis => "the Y-axis",
            ReflectionAxis::MainDiagonal => "the line y = x",
            ReflectionAxis::AntiDiagonal => "the line y = -x",
        }
    }

    /// Parses a string-typed axis value from a UI control.
    ///
    /// Matching is case-insensitive and ignores whitespace, so `"X-axis"`,
    /// `"x"`, and `"Y = X"` are all accepted. This is the only fallible
    /// construction in the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidConfiguration`] for any label outside
    /// the supported set.
    pub fn parse(value: &str) -> Result<Self, TransformError> {
        let normalized: String = value
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "x" | "x-axis" | "xaxis" => Ok(ReflectionAxis::XAxis),
            "y" | "y-axis" | "yaxis" => Ok(ReflectionAxis::YAxis),
            "y=x" => Ok(ReflectionAxis::MainDiagonal),
            "y=-x" => Ok(ReflectionAxis::AntiDiagonal),
            _ => Err(TransformError::InvalidConfiguration(value.to_string())),
        }
    }
}

/// A fully specified planar transformation about the origin.
///
/// All numeric parameters are accepted over the full real domain: angles are
/// not normalized, a zero or negative dilation factor is a valid degenerate
/// input, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TransformSpec {
    /// Rigid rotation about the origin; positive angles turn counter-clockwise.
    Rotation { angle_deg: f64 },
    /// Uniform scaling about the origin by `factor`.
    Dilation { factor: f64 },
    /// Mirroring across one of the four supported lines.
    Reflection { axis: ReflectionAxis },
    /// Rigid shift by a constant vector.
    Translation { offset: DVec2 },
}

impl TransformSpec {
    /// Human-readable name of the transform kind.
    pub fn kind(&self) -> &'static str {
        match self {
            TransformSpec::Rotation { .. } => "Rotation",
            TransformSpec::Dilation { .. } => "Dilation",
            TransformSpec::Reflection { .. } => "Reflection",
            TransformSpec::Translation { .. } => "Translation",
        }
    }

    /// Scene title summarizing the transform and its parameters.
    pub fn title(&self) -> String {
        match self {
            TransformSpec::Rotation { angle_deg } => {
                format!("Rotation by {}\u{b0}", fmt_value(*angle_deg))
            }
            TransformSpec::Dilation { factor } => {
                format!("Dilation with scale factor k = {}", fmt_value(*factor))
            }
            TransformSpec::Reflection { axis } => {
                format!("Reflection over {}", axis.description())
            }
            TransformSpec::Translation { offset } => {
                format!(
                    "Translation by vector ({}, {})",
                    fmt_value(offset.x),
                    fmt_value(offset.y)
                )
            }
        }
    }

    /// Legend label of the transformed polygon.
    pub fn image_label(&self) -> &'static str {
        match self {
            TransformSpec::Rotation { .. } => "Rotated image",
            TransformSpec::Dilation { .. } => "Scaled image",
            TransformSpec::Reflection { .. } => "Reflected image",
            TransformSpec::Translation { .. } => "Translated image",
        }
    }
}

/// Formats a parameter without a trailing ".0" for whole numbers.
fn fmt_value(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

// =============================================================================
// TESTS
// =============================================================================
