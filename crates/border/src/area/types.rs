//! Basic types shared by the `area` module.
//!
//! - `Point`: ground-plane coordinate (nalgebra column vector).
//! - `BorderCfg`: optional construction limits.
//! - `DegenerateHull`: non-fatal report for hulls with fewer than 3 vertices.

use nalgebra::Vector2;

/// 2D ground-plane point `(x, y)`.
pub type Point = Vector2<f64>;

/// Border construction configuration.
///
/// The default accepts any non-empty finite input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BorderCfg {
    /// Opt-in cap on the input size, for callers that query `center()`
    /// (quadratic in it). `0` means unbounded.
    pub max_points: usize,
}

impl BorderCfg {
    #[inline]
    pub(crate) fn admits(&self, len: usize) -> bool {
        self.max_points == 0 || len <= self.max_points
    }
}

/// Hull with fewer than three vertices (duplicate-only or collinear input).
///
/// Queries still follow their formulas: containment is always false and the
/// distance is measured to the point or segment that remains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DegenerateHull {
    pub hull_len: usize,
    pub input_len: usize,
}

impl std::fmt::Display for DegenerateHull {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "degenerate hull: {} vertices from {} input points",
            self.hull_len, self.input_len
        )
    }
}
