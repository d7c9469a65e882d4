//! Coordinate triangles and the change into barycentric coordinates.

use crate::{
  bary::{BaryCoords, PointLocation},
  coord::{Coord, Tangent},
};

use approx::abs_diff_eq;
use itertools::Itertools;
use thiserror::Error;
use tracing::trace;

/// Zero-area triangle. Barycentric coordinates are undefined on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("degenerate triangle with collinear vertices")]
pub struct DegenerateTriangleError;

/// Vertex winding of a nondegenerate triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
  /// Counterclockwise. Positive signed area.
  Ccw,
  /// Clockwise. Negative signed area.
  Cw,
}
impl Winding {
  pub fn from_det(det: f64) -> Option<Self> {
    if det == 0.0 || det.is_nan() {
      return None;
    }
    Some(if det > 0.0 { Self::Ccw } else { Self::Cw })
  }
  pub fn other(self) -> Self {
    match self {
      Self::Ccw => Self::Cw,
      Self::Cw => Self::Ccw,
    }
  }
}

/// An ordered vertex triple (a, b, c) with coordinates.
///
/// Construction never checks for degeneracy. Collinear vertices surface as
/// [`DegenerateTriangleError`] from the coordinate computations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleCoords {
  pub vertices: [Coord; 3],
}

impl TriangleCoords {
  pub fn new(a: Coord, b: Coord, c: Coord) -> Self {
    Self {
      vertices: [a, b, c],
    }
  }
  pub fn from_vertices(vertices: [Coord; 3]) -> Self {
    Self { vertices }
  }
  /// Reference triangle spanned by the origin and the two unit tangents.
  pub fn standard() -> Self {
    Self::new(
      Coord::origin(),
      Coord::new(1.0, 0.0),
      Coord::new(0.0, 1.0),
    )
  }

  pub fn coord(&self, ivertex: usize) -> Coord {
    self.vertices[ivertex]
  }
  pub fn base_vertex(&self) -> Coord {
    self.vertices[0]
  }

  pub fn spanning_vector(&self, i: usize) -> Tangent {
    assert!(i < 2);
    self.vertices[i + 1] - self.base_vertex()
  }
  pub fn spanning_vectors(&self) -> [Tangent; 2] {
    [
      self.vertices[1] - self.vertices[0],
      self.vertices[2] - self.vertices[0],
    ]
  }

  /// Signed area. Half the cross product of the spanning vectors.
  pub fn det(&self) -> f64 {
    let [e0, e1] = self.spanning_vectors();
    0.5 * e0.perp(&e1)
  }
  pub fn area(&self) -> f64 {
    self.det().abs()
  }
  pub fn is_degenerate(&self) -> bool {
    abs_diff_eq!(self.area(), 0.0, epsilon = 1e-12)
  }

  /// None for a degenerate triangle.
  pub fn winding(&self) -> Option<Winding> {
    if self.is_degenerate() {
      return None;
    }
    Winding::from_det(self.det())
  }
  pub fn swap_vertices(&mut self, ivertex: usize, jvertex: usize) {
    self.vertices.swap(ivertex, jvertex)
  }
  pub fn flip_winding(&mut self) {
    self.swap_vertices(0, 1)
  }
  pub fn flipped_winding(mut self) -> Self {
    self.flip_winding();
    self
  }

  pub fn barycenter(&self) -> Coord {
    let sum: Tangent = self.vertices.iter().map(|v| v.coords).sum();
    Coord::from(sum / 3.0)
  }

  /// The three directed edges (a, b), (b, c), (c, a).
  pub fn edges(&self) -> impl Iterator<Item = (Coord, Coord)> + '_ {
    self.vertices.iter().copied().circular_tuple_windows()
  }
  pub fn edge_lengths(&self) -> [f64; 3] {
    let mut lengths = [0.0; 3];
    for (i, (p, q)) in self.edges().enumerate() {
      lengths[i] = (q - p).norm();
    }
    lengths
  }

  pub fn global2bary(&self, coord: Coord) -> Result<BaryCoords, DegenerateTriangleError> {
    Ok(BaryTransform::new(self)?.global2bary(coord))
  }
  pub fn bary2global(&self, bary: BaryCoords) -> Coord {
    let combo: Tangent = self
      .vertices
      .iter()
      .zip(bary.weights())
      .map(|(vertex, weight)| weight * vertex.coords)
      .sum();
    Coord::from(combo)
  }

  /// Closed containment test. A degenerate triangle contains nothing.
  pub fn is_coord_inside(&self, coord: Coord) -> bool {
    self
      .global2bary(coord)
      .is_ok_and(|bary| bary.is_inside_closed())
  }
  pub fn classify(&self, coord: Coord) -> Result<PointLocation, DegenerateTriangleError> {
    Ok(self.global2bary(coord)?.classify())
  }
}

/// Barycentric coordinates of `coord` relative to the triangle (a, b, c).
pub fn global2bary(
  coord: Coord,
  a: Coord,
  b: Coord,
  c: Coord,
) -> Result<BaryCoords, DegenerateTriangleError> {
  TriangleCoords::new(a, b, c).global2bary(coord)
}

/// Precomputed change from global into barycentric coordinates.
///
/// Everything depending only on the triangle is solved once, so repeated
/// queries against the same triangle pay two dot products each.
#[derive(Debug, Clone, Copy)]
pub struct BaryTransform {
  base: Coord,
  v0: Tangent,
  v1: Tangent,
  d00: f64,
  d01: f64,
  d11: f64,
  inv_denom: f64,
}

impl BaryTransform {
  pub fn new(tri: &TriangleCoords) -> Result<Self, DegenerateTriangleError> {
    if tri.is_degenerate() {
      return Err(DegenerateTriangleError);
    }
    let [v0, v1] = tri.spanning_vectors();
    let d00 = v0.dot(&v0);
    let d01 = v0.dot(&v1);
    let d11 = v1.dot(&v1);
    // Gram determinant of the spanning vectors. Zero iff collinear.
    let denom = d00 * d11 - d01 * d01;
    Ok(Self {
      base: tri.base_vertex(),
      v0,
      v1,
      d00,
      d01,
      d11,
      inv_denom: 1.0 / denom,
    })
  }

  pub fn global2bary(&self, coord: Coord) -> BaryCoords {
    let v2 = coord - self.base;
    let d20 = v2.dot(&self.v0);
    let d21 = v2.dot(&self.v1);
    let v = (self.d11 * d20 - self.d01 * d21) * self.inv_denom;
    let w = (self.d00 * d21 - self.d01 * d20) * self.inv_denom;
    let u = 1.0 - v - w;
    trace!(u, v, w, "barycentric query");
    BaryCoords::new(u, v, w)
  }
}

#[cfg(test)]
mod test {
  use super::*;

  use approx::assert_relative_eq;

  #[test]
  fn standard_triangle() {
    let tri = TriangleCoords::standard();
    assert_relative_eq!(tri.det(), 0.5);
    assert_relative_eq!(tri.area(), 0.5);
    assert_eq!(tri.winding(), Some(Winding::Ccw));
    assert_relative_eq!(tri.barycenter(), Coord::new(1.0 / 3.0, 1.0 / 3.0));
    let lengths = tri.edge_lengths();
    assert_relative_eq!(lengths[0], 1.0);
    assert_relative_eq!(lengths[1], f64::sqrt(2.0));
    assert_relative_eq!(lengths[2], 1.0);
  }

  #[test]
  fn winding_flips_under_vertex_swap() {
    let tri = TriangleCoords::standard();
    let flipped = tri.flipped_winding();
    assert_eq!(flipped.winding(), Some(Winding::Cw));
    assert_eq!(flipped.winding(), tri.winding().map(Winding::other));
    assert_relative_eq!(flipped.det(), -tri.det());
  }

  #[test]
  fn degenerate_triangle_errors() {
    let tri = TriangleCoords::new(
      Coord::new(0.0, 0.0),
      Coord::new(1.0, 1.0),
      Coord::new(2.0, 2.0),
    );
    assert!(tri.is_degenerate());
    assert_eq!(tri.winding(), None);
    assert_eq!(
      tri.global2bary(Coord::new(0.5, 0.5)),
      Err(DegenerateTriangleError)
    );
    assert!(!tri.is_coord_inside(Coord::new(0.5, 0.5)));
  }

  #[test]
  fn bary_roundtrip() {
    let tri = TriangleCoords::new(
      Coord::new(-1.0, 2.0),
      Coord::new(4.0, 0.5),
      Coord::new(2.0, 5.0),
    );
    for coord in [
      Coord::new(1.0, 2.0),
      Coord::new(-3.0, 7.0),
      tri.barycenter(),
    ] {
      let bary = tri.global2bary(coord).unwrap();
      assert_relative_eq!(bary.sum(), 1.0, epsilon = 1e-12);
      assert_relative_eq!(tri.bary2global(bary), coord, epsilon = 1e-9);
    }
  }
}
