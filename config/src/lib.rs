//! # Config Crate
//!
//! Centralized configuration constants for the planar transformation lab
//! pipeline. All magic numbers and tunable parameters are defined here to
//! ensure consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, VIEW_EXTENT};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! let is_zero = value.abs() < EPSILON;
//! assert!(is_zero);
//!
//! // The logical viewport is symmetric around the origin
//! assert_eq!(VIEW_EXTENT, 10.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Renderer-Agnostic**: Coordinates are logical units, never pixels
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
