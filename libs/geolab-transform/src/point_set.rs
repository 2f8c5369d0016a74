//! # Point Sets
//!
//! The polygon representation used throughout the pipeline: an immutable,
//! ordered sequence of 2D points.

use config::constants::DEMO_SQUARE;
use glam::{DMat2, DVec2};
use serde::{Deserialize, Serialize};

/// An ordered sequence of 2D points; insertion order is the polygon winding
/// order.
///
/// A point set is immutable once constructed: every transformation produces a
/// new `PointSet` and never aliases the input. To form a polygon a set needs
/// at least 3 points (the demo instance carries exactly 4), but the
/// operations here are defined for any cardinality.
///
/// All coordinates use f64; export to f32 only happens at the WASM boundary.
///
/// # Example
///
/// ```rust
/// use geolab_transform::PointSet;
///
/// let square = PointSet::demo_square();
/// assert_eq!(square.len(), 4);
/// // Closing the loop appends the first vertex again for outline drawing
/// assert_eq!(square.closed().len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSet {
    points: Vec<DVec2>,
}

impl PointSet {
    /// Creates a point set from a vector of points.
    pub fn new(points: Vec<DVec2>) -> Self {
        Self { points }
    }

    /// Creates a point set from coordinate pairs.
    pub fn from_coords(coords: &[[f64; 2]]) -> Self {
        Self {
            points: coords.iter().map(|&[x, y]| DVec2::new(x, y)).collect(),
        }
    }

    /// The fixed demo polygon: a square with corners (1,1), (4,1), (4,4), (1,4).
    pub fn demo_square() -> Self {
        Self::from_coords(&DEMO_SQUARE)
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the set has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns a reference to the points.
    #[inline]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Returns the point at the given index.
    #[inline]
    pub fn point(&self, index: usize) -> DVec2 {
        self.points[index]
    }

    /// Returns the first point, if any.
    #[inline]
    pub fn first(&self) -> Option<DVec2> {
        self.points.first().copied()
    }

    /// Returns the points with the first one appended again at the end.
    ///
    /// An outline renderer draws the result as a closed polygon. Defined for
    /// any input; an empty set stays empty.
    pub fn closed(&self) -> Vec<DVec2> {
        let mut closed = self.points.clone();
        if let Some(&first) = self.points.first() {
            closed.push(first);
        }
        closed
    }

    /// Returns a new set with `offset` added to every point.
    pub fn translated(&self, offset: DVec2) -> Self {
        Self {
            points: self.points.iter().map(|&p| p + offset).collect(),
        }
    }

    /// Returns a new set with `matrix` applied to every point.
    pub fn transformed(&self, matrix: DMat2) -> Self {
        Self {
            points: self.points.iter().map(|&p| matrix * p).collect(),
        }
    }

    /// Returns the points as coordinate pairs for the wire format.
    pub fn to_coords(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| [p.x, p.y]).collect()
    }

    /// Compares two sets point-by-point within a tolerance.
    ///
    /// Sets of different cardinality never compare equal.
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.points.len() == other.points.len()
            && self
                .points
                .iter()
                .zip(other.points.iter())
                .all(|(a, b)| (a.x - b.x).abs() < epsilon && (a.y - b.y).abs() < epsilon)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::EPSILON;

    #[test]
    fn test_demo_square_vertices() {
        let square = PointSet::demo_square();
        assert_eq!(square.len(), 4);
        assert_eq!(square.point(0), DVec2::new(1.0, 1.0));
        assert_eq!(square.point(2), DVec2::new(4.0, 4.0));
    }

    #[test]
    fn test_closed_appends_first_point() {
        let square = PointSet::demo_square();
        let closed = square.closed();
        assert_eq!(closed.len(), 5);
        assert_eq!(closed[0], closed[4]);
        // The input is untouched
        assert_eq!(square.len(), 4);
    }

    #[test]
    fn test_closed_of_empty_is_empty() {
        let empty = PointSet::new(Vec::new());
        assert!(empty.closed().is_empty());
    }

    #[test]
    fn test_translated_does_not_alias() {
        let square = PointSet::demo_square();
        let moved = square.translated(DVec2::new(2.0, 3.0));
        assert_eq!(moved.point(0), DVec2::new(3.0, 4.0));
        assert_eq!(square.point(0), DVec2::new(1.0, 1.0));
    }

    #[test]
    fn test_approx_eq_tolerance() {
        let a = PointSet::from_coords(&[[1.0, 1.0], [2.0, 2.0], [3.0, 1.0]]);
        let b = PointSet::from_coords(&[[1.0 + 1e-12, 1.0], [2.0, 2.0], [3.0, 1.0]]);
        assert!(a.approx_eq(&b, EPSILON));
        let c = PointSet::from_coords(&[[1.0, 1.0], [2.0, 2.0]]);
        assert!(!a.approx_eq(&c, EPSILON));
    }
}
