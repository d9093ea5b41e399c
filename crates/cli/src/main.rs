use anyhow::{Context, Result};
use border::api::{
    draw_cloud, BorderCfg, CloudCfg, CloudReplay, ConvexHullBorder, Point, PointCount,
};
use clap::{Parser, Subcommand};
use nalgebra::Vector2;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod sidecar;

use input::{load_points, to_pairs};
use sidecar::Sidecar;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Build convex play-area borders and query them")]
struct Cmd {
    /// Largest accepted point count (0 = unbounded)
    #[arg(long, global = true, default_value_t = BorderCfg::default().max_points)]
    max_points: usize,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the hull of a point file; optionally write it with a provenance sidecar
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Containment and squared boundary distance for one position
    Query {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Representative center of the input points
    Center {
        #[arg(long)]
        input: PathBuf,
    },
    /// Write a reproducible random point cloud as JSON
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 32)]
        count: usize,
        #[arg(long, default_value_t = 1.0)]
        half_extent: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print the sidecar block for the current settings
    Report,
}

#[derive(Serialize)]
struct HullReport {
    input_len: usize,
    hull: Vec<[f64; 2]>,
    degenerate: bool,
}

#[derive(Debug, Serialize)]
struct QueryReport {
    x: f64,
    y: f64,
    inside: bool,
    min_distance_sq: f64,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = BorderCfg {
        max_points: cmd.max_points,
    };
    match cmd.action {
        Action::Hull { input, out } => hull(&input, out.as_deref(), cfg),
        Action::Query { input, x, y } => query(&input, x, y, cfg).map(drop),
        Action::Center { input } => center(&input, cfg).map(drop),
        Action::Sample {
            seed,
            index,
            count,
            half_extent,
            out,
        } => sample(seed, index, count, half_extent, &out),
        Action::Report => report(cfg),
    }
}

fn build(input: &Path, cfg: BorderCfg) -> Result<ConvexHullBorder> {
    let pts = load_points(input)?;
    ConvexHullBorder::with_cfg(&pts, cfg)
        .with_context(|| format!("building border from {}", input.display()))
}

fn hull_report(border: &ConvexHullBorder) -> HullReport {
    HullReport {
        input_len: border.raw_points().len(),
        hull: to_pairs(border.points()),
        degenerate: border.degeneracy().is_some(),
    }
}

fn hull(input: &Path, out: Option<&Path>, cfg: BorderCfg) -> Result<()> {
    let border = build(input, cfg)?;
    let report = hull_report(&border);
    tracing::info!(
        input = %input.display(),
        hull = report.hull.len(),
        degenerate = report.degenerate,
        "hull"
    );
    let text = serde_json::to_string_pretty(&report)?;
    match out {
        Some(out) => {
            write_creating_dirs(out, text.as_bytes())?;
            Sidecar::new(
                "hull",
                serde_json::json!({
                    "max_points": cfg.max_points,
                    "hull_len": report.hull.len(),
                    "degenerate": report.degenerate
                }),
            )
            .input(input)
            .write_next_to(out)?;
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn query(input: &Path, x: f64, y: f64, cfg: BorderCfg) -> Result<QueryReport> {
    let border = build(input, cfg)?;
    let p = Vector2::new(x, y);
    let report = QueryReport {
        x,
        y,
        inside: border.is_inside(p),
        min_distance_sq: border.min_distance(p),
    };
    tracing::info!(x, y, inside = report.inside, "query");
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(report)
}

fn center(input: &Path, cfg: BorderCfg) -> Result<Point> {
    let border = build(input, cfg)?;
    let c = border.center();
    tracing::info!(x = c.x, y = c.y, "center");
    println!("{}", serde_json::to_string(&[c.x, c.y])?);
    Ok(c)
}

fn sample(seed: u64, index: u64, count: usize, half_extent: f64, out: &Path) -> Result<()> {
    let cfg = CloudCfg {
        count: PointCount::Fixed(count),
        half_extent,
        center: Vector2::zeros(),
    };
    let pts = draw_cloud(cfg, CloudReplay { seed, index });
    tracing::info!(seed, index, points = pts.len(), out = %out.display(), "sample");
    write_creating_dirs(out, &serde_json::to_vec_pretty(&to_pairs(&pts))?)?;
    Sidecar::new(
        "sample",
        serde_json::json!({
            "seed": seed,
            "index": index,
            "count": count,
            "half_extent": half_extent
        }),
    )
    .write_next_to(out)?;
    Ok(())
}

fn report(cfg: BorderCfg) -> Result<()> {
    let block = Sidecar::new("report", serde_json::json!({ "max_points": cfg.max_points }));
    println!("{}", serde_json::to_string_pretty(&block)?);
    Ok(())
}

fn write_creating_dirs(out: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, bytes).with_context(|| format!("writing {}", out.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn hull_writes_output_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("arena.json");
        fs::write(&input, "[[0,0],[4,0],[4,4],[0,4],[2,2]]").unwrap();
        let out = dir.path().join("out").join("hull.json");
        hull(&input, Some(&out), BorderCfg::default()).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["input_len"], 5);
        assert_eq!(parsed["hull"].as_array().unwrap().len(), 4);
        assert_eq!(parsed["degenerate"], false);
        assert!(dir.path().join("out").join("hull.provenance.json").exists());
    }

    fn square_fixture(dir: &Path) -> PathBuf {
        let input = dir.join("square.csv");
        fs::write(&input, "x,y\n0,0\n4,0\n4,4\n0,4\n2,2\n").unwrap();
        input
    }

    #[test]
    fn query_reports_squared_distance() {
        let dir = tempdir().unwrap();
        let input = square_fixture(dir.path());
        let outside = query(&input, 5.0, 2.0, BorderCfg::default()).unwrap();
        assert!(!outside.inside);
        assert!((outside.min_distance_sq - 1.0).abs() < 1e-12);
        let corner = query(&input, 6.0, 6.0, BorderCfg::default()).unwrap();
        assert!((corner.min_distance_sq - 8.0).abs() < 1e-12);
        let inside = query(&input, 2.0, 2.0, BorderCfg::default()).unwrap();
        assert!(inside.inside);
        assert_eq!(inside.min_distance_sq, 0.0);
    }

    #[test]
    fn center_picks_middle_ranked_input_point() {
        let dir = tempdir().unwrap();
        let input = square_fixture(dir.path());
        let c = center(&input, BorderCfg::default()).unwrap();
        assert_eq!(c, Vector2::new(4.0, 0.0));
    }

    #[test]
    fn max_points_flag_caps_input() {
        let dir = tempdir().unwrap();
        let input = square_fixture(dir.path());
        assert!(query(&input, 0.0, 0.0, BorderCfg { max_points: 3 }).is_err());
    }

    #[test]
    fn sample_round_trips_through_loader() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("cloud.json");
        sample(7, 3, 20, 5.0, &out).unwrap();
        let pts = load_points(&out).unwrap();
        assert_eq!(pts.len(), 20);
        let border = ConvexHullBorder::new(&pts).unwrap();
        assert!(border.points().len() <= 20);
        assert!(dir.path().join("cloud.provenance.json").exists());
    }

    #[test]
    fn build_reports_library_errors() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("empty.json");
        fs::write(&input, "[]").unwrap();
        let err = build(&input, BorderCfg::default()).unwrap_err();
        assert!(err.chain().any(|e| e.to_string().contains("at least one point")));
    }

    #[test]
    fn cli_parses_query() {
        let cmd = Cmd::try_parse_from([
            "cli", "query", "--input", "a.csv", "--x", "-1.5", "--y", "2",
        ])
        .unwrap();
        assert_eq!(cmd.max_points, BorderCfg::default().max_points);
        match cmd.action {
            Action::Query { x, y, .. } => {
                assert_eq!(x, -1.5);
                assert_eq!(y, 2.0);
            }
            _ => panic!("expected query"),
        }
    }
}
