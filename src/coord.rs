//! Coordinate types of the ambient 2D plane.

/// A position in the plane.
pub type Coord = na::Point2<f64>;

/// A difference of two [`Coord`]s.
///
/// Subtracting two coords yields a tangent, never another coord.
pub type Tangent = na::Vector2<f64>;
