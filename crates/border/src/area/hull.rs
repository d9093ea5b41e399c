//! Hull construction and the low-level predicates the border queries use.
//!
//! - `convex_hull`: Andrew's monotone chain, lower chain then upper chain.
//! - `crosses_ray`: parity rule for the horizontal ray cast.
//! - `segment_distance_sq`: squared distance to a closed segment.

use std::cmp::Ordering;

use super::types::Point;

/// Orientation of `o → a → b`: positive for a left turn, zero when collinear.
#[inline]
pub fn cross(o: Point, a: Point, b: Point) -> f64 {
    let oa = a - o;
    let ob = b - o;
    oa.x * ob.y - oa.y * ob.x
}

#[inline]
fn lexicographic(a: &Point, b: &Point) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

/// Append `p` to a monotone chain, evicting right turns and collinear middles.
#[inline]
fn push_convex(chain: &mut Vec<Point>, p: Point) {
    while chain.len() >= 2 && cross(chain[chain.len() - 2], chain[chain.len() - 1], p) <= 0.0 {
        chain.pop();
    }
    chain.push(p);
}

/// Andrew's monotone chain convex hull (CCW, implicitly closed).
///
/// Expects finite coordinates. Exact duplicates collapse to one vertex, so a
/// single distinct input point yields `[p]` and an empty input yields `[]`.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut pts: Vec<Point> = points.to_vec();
    // stable: equal keys keep input order
    pts.sort_by(lexicographic);
    pts.dedup();
    if pts.len() < 2 {
        return pts;
    }
    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for p in &pts {
        push_convex(&mut lower, *p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        push_convex(&mut upper, *p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}

/// Whether edge `(pj, pi)` toggles the inside flag for a ray cast from `p` towards +x.
#[inline]
pub(crate) fn crosses_ray(p: Point, pi: Point, pj: Point) -> bool {
    ((pi.y > p.y) != (pj.y > p.y)) && (p.x < (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x)
}

/// Squared distance from `p` to the closed segment `[v, w]`.
///
/// The projection parameter is clamped to `[0, 1]`; a zero-length segment
/// falls back to the point distance.
pub fn segment_distance_sq(p: Point, v: Point, w: Point) -> f64 {
    let vw = w - v;
    let l2 = vw.norm_squared();
    if l2 == 0.0 {
        return (p - v).norm_squared();
    }
    let t = ((p - v).dot(&vw) / l2).clamp(0.0, 1.0);
    let proj = v + vw * t;
    (p - proj).norm_squared()
}
