//! Batch point queries against a single triangle.
//!
//! The per-point kernel is pure and shares no state, so the queries run in
//! parallel without synchronization.

use crate::{
  bary::PointLocation,
  coord::Coord,
  triangle::{BaryTransform, DegenerateTriangleError, TriangleCoords},
};

use rayon::iter::{IntoParallelIterator, ParallelIterator};

/// Classify every query point relative to the triangle.
pub fn classify_all(
  tri: &TriangleCoords,
  coords: &[Coord],
) -> Result<Vec<PointLocation>, DegenerateTriangleError> {
  let transform = BaryTransform::new(tri)?;
  Ok(
    coords
      .into_par_iter()
      .map(|&coord| transform.global2bary(coord).classify())
      .collect(),
  )
}

/// The subset of query points the triangle contains, boundary included.
pub fn filter_inside(
  tri: &TriangleCoords,
  coords: &[Coord],
) -> Result<Vec<Coord>, DegenerateTriangleError> {
  let transform = BaryTransform::new(tri)?;
  Ok(
    coords
      .into_par_iter()
      .copied()
      .filter(|&coord| transform.global2bary(coord).is_inside_closed())
      .collect(),
  )
}
