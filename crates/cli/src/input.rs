use anyhow::{anyhow, Context, Result};
use hull2d::geom2::rand::{draw_points, Bounds, Distribution, ReplayToken};
use hull2d::io::parse_points;
use hull2d::Point;
use polars::prelude::*;
use std::io::Read;
use std::path::Path;

/// Points generated when no input is given, or stdin is empty.
pub const DEFAULT_RANDOM_POINTS: usize = 100;

/// Where the point set comes from.
pub enum Source<'a> {
    /// `.csv` with `x`,`y` columns, otherwise the `N x1 y1 …` text format.
    File(&'a Path),
    Stdin,
    Random { n: usize, dist: Distribution },
}

/// Load the point set. Short text inputs are topped up with uniform random
/// points drawn from `seed`; empty stdin is replaced by
/// [`DEFAULT_RANDOM_POINTS`] of them.
pub fn load_points(source: Source<'_>, seed: u64) -> Result<Vec<Point>> {
    match source {
        Source::Random { n, dist } => Ok(draw_points(
            dist,
            n,
            Bounds::default(),
            ReplayToken::new(seed),
        )),
        Source::File(path) if is_csv(path) => read_csv_points(path),
        Source::File(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            from_text(&text, seed)
        }
        Source::Stdin => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            from_stdin_text(&text, seed)
        }
    }
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}

fn from_stdin_text(text: &str, seed: u64) -> Result<Vec<Point>> {
    if !text.trim().is_empty() {
        return from_text(text, seed);
    }
    tracing::warn!(n = DEFAULT_RANDOM_POINTS, seed, "stdin is empty; generating points");
    Ok(draw_points(
        Distribution::Uniform,
        DEFAULT_RANDOM_POINTS,
        Bounds::default(),
        ReplayToken::new(seed),
    ))
}

fn from_text(text: &str, seed: u64) -> Result<Vec<Point>> {
    let parsed = parse_points(text)?;
    let mut points = parsed.points;
    if parsed.missing > 0 {
        tracing::warn!(
            provided = points.len(),
            missing = parsed.missing,
            seed,
            "too few coordinates; generating the rest"
        );
        points.extend(draw_points(
            Distribution::Uniform,
            parsed.missing,
            Bounds::default(),
            ReplayToken::new(seed),
        ));
    }
    Ok(points)
}

fn read_csv_points(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(rows = df.height(), "input_csv_shape");
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => Err(anyhow!("{}: row {row} lacks a coordinate", path.display())),
        })
        .collect()
}
