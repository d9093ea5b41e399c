//! Convex play-area borders in 2D.
//!
//! Purpose
//! - Build the convex hull of a sampled ground-plane point set once, then answer
//!   containment, squared boundary distance and center queries against it.
//! - Keep the value immutable after construction and the numerics explicit
//!   (exact formulas, no tolerances).
//!
//! Layout
//! - `hull`: monotone chain, ray-cast predicate, segment distance.
//! - `convex`: `ConvexHullBorder` and the `Border` trait.
//! - `rand`: reproducible point clouds for tests and benchmarks.
//! - Code cross-refs: `types::{Point, BorderCfg, DegenerateHull}`, `error::BorderError`

mod convex;
mod error;
mod hull;
pub mod rand;
mod types;

pub use convex::{Border, ConvexHullBorder};
pub use error::BorderError;
pub use hull::{convex_hull, cross, segment_distance_sq};
pub use types::{BorderCfg, DegenerateHull, Point};
