//! JSON step log for an external renderer.
//!
//! Points are `[x, y]` pairs. One document holds the input and every run, so a
//! player can animate both algorithms over the same points.

use anyhow::{Context, Result};
use hull2d::{HullResult, HullShape, Point};
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Serialize)]
pub struct StepLogDoc {
    pub version: &'static str,
    pub points: Vec<[f64; 2]>,
    pub runs: Vec<RunDoc>,
}

#[derive(Serialize)]
pub struct RunDoc {
    pub algorithm: &'static str,
    pub shape: &'static str,
    pub hull: Vec<[f64; 2]>,
    pub steps: Vec<StepDoc>,
}

#[derive(Serialize)]
pub struct StepDoc {
    pub kind: &'static str,
    pub hull: Vec<[f64; 2]>,
    pub candidate: [f64; 2],
}

fn xy(p: &Point) -> [f64; 2] {
    [p.x, p.y]
}

fn shape_name(shape: HullShape) -> &'static str {
    match shape {
        HullShape::Empty => "empty",
        HullShape::Point => "point",
        HullShape::Segment => "segment",
        HullShape::Polygon => "polygon",
    }
}

impl StepLogDoc {
    pub fn new(points: &[Point], results: &[HullResult]) -> Self {
        Self {
            version: hull2d::VERSION,
            points: points.iter().map(xy).collect(),
            runs: results.iter().map(RunDoc::from).collect(),
        }
    }
}

impl From<&HullResult> for RunDoc {
    fn from(r: &HullResult) -> Self {
        Self {
            algorithm: r.algorithm().as_str(),
            shape: shape_name(r.shape()),
            hull: r.vertices().iter().map(xy).collect(),
            steps: r
                .steps()
                .iter()
                .map(|s| StepDoc {
                    kind: s.kind.as_str(),
                    hull: s.hull.iter().map(xy).collect(),
                    candidate: xy(&s.candidate),
                })
                .collect(),
        }
    }
}

/// Write the document as pretty JSON, creating parent directories.
pub fn write(path: &Path, doc: &StepLogDoc) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", path.display()))
}
