//! Convex play-area border (`ConvexHullBorder`) and the `Border` query trait.
//!
//! Purpose
//! - Confine entities to the convex hull of a sampled point set: containment,
//!   squared distance to the boundary, and a representative center.
//!
//! Invariants
//! - Hull and raw points are fixed at construction; there are no mutators.
//! - Every raw point lies inside or on the hull.
//! - Hull vertices are in monotone-chain order (lower chain, then upper chain).
//!
//! Notes
//! - `is_inside` on an edge or vertex is whatever the ray-cast formula yields;
//!   it is not stable across reordered but equivalent hulls.
//! - `min_distance` returns a squared distance.

use std::cmp::Ordering;

use super::error::BorderError;
use super::hull::{convex_hull, crosses_ray, segment_distance_sq};
use super::types::{BorderCfg, DegenerateHull, Point};

/// Query surface of a play-area border.
pub trait Border {
    /// Ray-cast containment test (odd crossing count = inside).
    fn is_inside(&self, p: Point) -> bool;
    /// Squared distance to the boundary; `0.0` when inside.
    fn min_distance(&self, p: Point) -> f64;
    /// Representative center, always one of the input points.
    fn center(&self) -> Point;
    /// Boundary vertices in traversal order.
    fn points(&self) -> &[Point];
}

/// Border backed by the convex hull of its input points.
#[derive(Clone, Debug)]
pub struct ConvexHullBorder {
    hull: Vec<Point>,
    raw: Vec<Point>,
}

impl ConvexHullBorder {
    /// Build with the default `BorderCfg` (no size cap).
    pub fn new(points: &[Point]) -> Result<Self, BorderError> {
        Self::with_cfg(points, BorderCfg::default())
    }

    /// Validate the input and compute the hull once.
    ///
    /// Fails on empty input, non-finite coordinates, or more points than a
    /// non-zero `cfg.max_points`. Degenerate hulls are accepted; see `degeneracy`.
    pub fn with_cfg(points: &[Point], cfg: BorderCfg) -> Result<Self, BorderError> {
        if points.is_empty() {
            return Err(BorderError::Empty);
        }
        if !cfg.admits(points.len()) {
            return Err(BorderError::TooManyPoints {
                len: points.len(),
                max: cfg.max_points,
            });
        }
        if let Some(index) = points
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(BorderError::NonFinite { index });
        }
        let border = Self {
            hull: convex_hull(points),
            raw: points.to_vec(),
        };
        tracing::debug!(
            input = border.raw.len(),
            hull = border.hull.len(),
            "border built"
        );
        if let Some(d) = border.degeneracy() {
            tracing::warn!(hull = d.hull_len, input = d.input_len, "{d}");
        }
        Ok(border)
    }

    /// Hull vertices (lower chain followed by upper chain).
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.hull
    }

    /// Input points in the order they were supplied.
    #[inline]
    pub fn raw_points(&self) -> &[Point] {
        &self.raw
    }

    /// `Some` when the hull has fewer than three vertices.
    pub fn degeneracy(&self) -> Option<DegenerateHull> {
        (self.hull.len() < 3).then_some(DegenerateHull {
            hull_len: self.hull.len(),
            input_len: self.raw.len(),
        })
    }

    pub fn is_inside(&self, p: Point) -> bool {
        let n = self.hull.len();
        let mut inside = false;
        let mut j = n.wrapping_sub(1);
        for i in 0..n {
            if crosses_ray(p, self.hull[i], self.hull[j]) {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Squared distance from `p` to the closest hull edge, `0.0` if inside.
    ///
    /// Squared, despite the name: compare against squared radii.
    pub fn min_distance(&self, p: Point) -> f64 {
        if self.is_inside(p) {
            return 0.0;
        }
        let n = self.hull.len();
        (0..n)
            .map(|i| segment_distance_sq(p, self.hull[i], self.hull[(i + 1) % n]))
            .fold(f64::INFINITY, f64::min)
    }

    /// Input point at the middle rank of total squared dispersion.
    ///
    /// Each raw point is scored by the sum of its squared distances to all raw
    /// points; the stable ascending order keeps input order on ties, and the
    /// element at `len / 2` is returned. This is not the centroid. O(n²).
    pub fn center(&self) -> Point {
        let scores: Vec<f64> = self
            .raw
            .iter()
            .map(|p| self.raw.iter().map(|q| (p - q).norm_squared()).sum::<f64>())
            .collect();
        let mut order: Vec<usize> = (0..self.raw.len()).collect();
        order.sort_by(|&a, &b| scores[a].partial_cmp(&scores[b]).unwrap_or(Ordering::Equal));
        self.raw[order[self.raw.len() / 2]]
    }
}

impl Border for ConvexHullBorder {
    #[inline]
    fn is_inside(&self, p: Point) -> bool {
        ConvexHullBorder::is_inside(self, p)
    }
    #[inline]
    fn min_distance(&self, p: Point) -> f64 {
        ConvexHullBorder::min_distance(self, p)
    }
    #[inline]
    fn center(&self) -> Point {
        ConvexHullBorder::center(self)
    }
    #[inline]
    fn points(&self) -> &[Point] {
        ConvexHullBorder::points(self)
    }
}
