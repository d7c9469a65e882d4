//! Barycentric weights and their interpretation.

use tracing::warn;

/// Default tolerance for treating a weight as zero.
pub const TOLERANCE: f64 = 1e-9;

/// Barycentric coordinates relative to an ordered vertex triple (a, b, c).
///
/// Partition of unity: the weights always sum to one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaryCoords {
  pub u: f64,
  pub v: f64,
  pub w: f64,
}

impl BaryCoords {
  pub fn new(u: f64, v: f64, w: f64) -> Self {
    let scale = u.abs().max(v.abs()).max(w.abs()).max(1.0);
    debug_assert!(
      ((u + v + w) - 1.0).abs() <= 1e-6 * scale,
      "weights must sum to one"
    );
    Self { u, v, w }
  }
  pub fn from_weights([u, v, w]: [f64; 3]) -> Self {
    Self::new(u, v, w)
  }
  /// The unit coordinate of vertex `ivertex`.
  pub fn vertex(ivertex: usize) -> Self {
    assert!(ivertex < 3);
    let mut weights = [0.0; 3];
    weights[ivertex] = 1.0;
    Self::from_weights(weights)
  }

  pub fn weights(self) -> [f64; 3] {
    [self.u, self.v, self.w]
  }
  pub fn sum(self) -> f64 {
    self.u + self.v + self.w
  }
  pub fn min_weight(self) -> f64 {
    self.u.min(self.v).min(self.w)
  }

  /// Strict containment. Points on the boundary are not inside.
  pub fn is_inside(self) -> bool {
    self.weights().iter().all(|&w| w > 0.0)
  }
  /// Closed containment, boundary included.
  pub fn is_inside_closed(self) -> bool {
    self.weights().iter().all(|&w| w >= 0.0)
  }

  pub fn classify(self) -> PointLocation {
    self.classify_with(TOLERANCE)
  }
  /// Classification with a zero-band of width `eps` around the edges.
  pub fn classify_with(self, eps: f64) -> PointLocation {
    if self.weights().iter().any(|w| w.is_nan()) {
      warn!("NaN barycentric weight, classifying as outside");
      return PointLocation::Outside;
    }
    let min = self.min_weight();
    if min < -eps {
      PointLocation::Outside
    } else if min <= eps {
      PointLocation::OnEdge
    } else {
      PointLocation::Inside
    }
  }

  /// Weighted blend of per-vertex values, as rasterizers do for vertex attributes.
  pub fn interpolate(self, values: [f64; 3]) -> f64 {
    self
      .weights()
      .into_iter()
      .zip(values)
      .map(|(weight, value)| weight * value)
      .sum()
  }
}

/// Location of a point relative to a triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointLocation {
  Inside,
  OnEdge,
  Outside,
}

#[cfg(test)]
mod test {
  use super::*;

  use approx::assert_relative_eq;

  #[test]
  fn vertex_coords_are_unit() {
    assert_eq!(BaryCoords::vertex(0).weights(), [1.0, 0.0, 0.0]);
    assert_eq!(BaryCoords::vertex(1).weights(), [0.0, 1.0, 0.0]);
    assert_eq!(BaryCoords::vertex(2).weights(), [0.0, 0.0, 1.0]);
    assert_eq!(BaryCoords::vertex(1).classify(), PointLocation::OnEdge);
  }

  #[test]
  fn classification_bands() {
    assert_eq!(
      BaryCoords::new(0.2, 0.3, 0.5).classify(),
      PointLocation::Inside
    );
    assert_eq!(
      BaryCoords::new(-0.1, 0.55, 0.55).classify(),
      PointLocation::Outside
    );
    assert_eq!(
      BaryCoords::new(0.0, 0.4, 0.6).classify(),
      PointLocation::OnEdge
    );
    // A weight inside the band counts as zero.
    assert_eq!(
      BaryCoords::new(1e-12, 0.5, 0.5 - 1e-12).classify(),
      PointLocation::OnEdge
    );
    assert_eq!(
      BaryCoords::new(1e-12, 0.5, 0.5 - 1e-12).classify_with(1e-15),
      PointLocation::Inside
    );
  }

  #[test]
  fn nan_is_never_inside() {
    let bary = BaryCoords {
      u: f64::NAN,
      v: 0.5,
      w: 0.5,
    };
    assert_eq!(bary.classify(), PointLocation::Outside);
    assert!(!bary.is_inside());
  }

  #[test]
  fn interpolation_blends() {
    let bary = BaryCoords::new(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0);
    assert_relative_eq!(bary.interpolate([3.0, 6.0, 9.0]), 6.0);
    let vertex = BaryCoords::vertex(2);
    assert_relative_eq!(vertex.interpolate([3.0, 6.0, 9.0]), 9.0);
  }
}
