//! Point-file loading: `.csv` with an `x,y` header, or `.json` as `[[x, y], ...]`.

use anyhow::{anyhow, bail, Context, Result};
use border::Point;
use nalgebra::Vector2;
use polars::prelude::*;
use std::path::Path;

pub fn load_points(path: &Path) -> Result<Vec<Point>> {
    let pts = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => load_csv(path)?,
        Some("json") => load_json(path)?,
        _ => bail!(
            "unsupported point file {} (expected .csv or .json)",
            path.display()
        ),
    };
    tracing::info!(path = %path.display(), points = pts.len(), "points_loaded");
    Ok(pts)
}

fn load_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("reading {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("selecting x,y from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Vector2::new(x, y)),
            _ => Err(anyhow!("{}: row {row} is missing x or y", path.display())),
        })
        .collect()
}

fn load_json(path: &Path) -> Result<Vec<Point>> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let pairs: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))?;
    Ok(pairs.into_iter().map(|[x, y]| Vector2::new(x, y)).collect())
}

/// `[x, y]` pairs for JSON output.
pub fn to_pairs(points: &[Point]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}
