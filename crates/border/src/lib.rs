//! Convex play-area borders: hull construction and geometric queries.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - Breaking changes are fine when they improve clarity; callers live in
//!   this workspace (see `crates/cli`, which imports through `api`).

pub mod api;
pub mod area;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use area::{Border, BorderCfg, BorderError, ConvexHullBorder, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::area::rand::{draw_cloud, draw_ring, CloudCfg, PointCount, ReplayToken};
    pub use crate::area::{
        convex_hull, cross, segment_distance_sq, Border, BorderCfg, BorderError,
        ConvexHullBorder, DegenerateHull, Point,
    };
    pub use nalgebra::Vector2 as Vec2;
}
