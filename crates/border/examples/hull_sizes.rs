//! Show hull sizes and centers for a few random clouds.
//!
//! Usage:
//!   cargo run -p border --example hull_sizes -- cloud
//!   cargo run -p border --example hull_sizes -- ring
//!
//! Prints one line per draw: input size, hull size, center, and the squared
//! distance from a probe outside the sampling square.

use border::area::rand::{draw_cloud, draw_ring, CloudCfg, PointCount, ReplayToken};
use border::ConvexHullBorder;
use nalgebra::Vector2;

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "cloud".to_string());
    let draw: fn(CloudCfg, ReplayToken) -> Vec<Vector2<f64>> = match mode.as_str() {
        "cloud" => draw_cloud,
        "ring" => draw_ring,
        _ => {
            eprintln!("usage: hull_sizes [cloud|ring]");
            return;
        }
    };
    let cfg = CloudCfg {
        count: PointCount::Uniform { min: 8, max: 64 },
        half_extent: 50.0,
        center: Vector2::zeros(),
    };
    let probe = Vector2::new(80.0, 0.0);
    for index in 0..5 {
        let pts = draw(cfg, ReplayToken { seed: 2025, index });
        let Ok(b) = ConvexHullBorder::new(&pts) else {
            continue;
        };
        let c = b.center();
        println!(
            "#{index}: n={} hull={} center=({:.2}, {:.2}) d2(probe)={:.2}",
            pts.len(),
            b.points().len(),
            c.x,
            c.y,
            b.min_distance(probe)
        );
    }
}
