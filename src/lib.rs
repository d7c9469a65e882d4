//! Barycentric coordinates on 2D triangles.
//!
//! - Coordinate computation for point queries (point-in-triangle)
//! - Inside/Outside/OnEdge classification with tolerance
//! - Triangle geometry (area, winding, barycenter, edges)
//! - Parallel batch queries

extern crate nalgebra as na;

pub mod bary;
pub mod coord;
pub mod query;
pub mod triangle;
