//! Curated internal API for workspace callers (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is the surface the CLI imports from.
//!   Breaking changes are allowed and expected.

// Borders
pub use crate::area::{
    convex_hull, cross, segment_distance_sq, Border, BorderCfg, BorderError, ConvexHullBorder,
    DegenerateHull, Point,
};
// Random point clouds
pub use crate::area::rand::{
    draw_cloud, draw_ring, CloudCfg, PointCount, ReplayToken as CloudReplay,
};
