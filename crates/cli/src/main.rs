use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use hull2d::geom2::rand::Distribution;
use hull2d::io::{format_hull, MAX_POINTS};
use hull2d::{compute_hull_with, Algorithm, GeomCfg, HullResult, Point};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;
mod steplog;

use input::{Source, DEFAULT_RANDOM_POINTS};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hulls by gift wrapping and angular sweep, with replayable step logs")]
struct Cmd {
    /// Also show debug events from the hull core
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute hulls and print them as `<label>: <k> x1 y1 ...`
    Hull(HullArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Debug)]
struct HullArgs {
    /// gift-wrapping (jarvis), angular-sweep (graham), or both
    #[arg(long, default_value = "both")]
    algo: String,
    /// Point file: `.csv` with x,y columns, otherwise `N x1 y1 ...`; `-` reads stdin
    #[arg(long, conflicts_with = "random")]
    input: Option<PathBuf>,
    /// Generate this many points instead of reading them
    #[arg(long)]
    random: Option<usize>,
    /// Distribution for generated points: uniform, circle, clustered, grid
    #[arg(long, default_value = "uniform")]
    dist: String,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Also print input points lying on hull edges
    #[arg(long)]
    boundary: bool,
    /// Collinearity and duplicate tolerance
    #[arg(long)]
    eps: Option<f64>,
    /// Write the step log as JSON (plus a provenance sidecar)
    #[arg(long)]
    steps_out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Hull(args) => {
            for line in hull(&args)? {
                println!("{line}");
            }
            Ok(())
        }
        Action::Report => report(),
    }
}

fn algorithms(selector: &str) -> Result<Vec<Algorithm>> {
    if selector.eq_ignore_ascii_case("both") {
        return Ok(Algorithm::ALL.to_vec());
    }
    Ok(vec![selector.parse()?])
}

fn geom_cfg(eps: Option<f64>) -> Result<GeomCfg> {
    match eps {
        None => Ok(GeomCfg::default()),
        Some(e) if e.is_finite() && e >= 0.0 => Ok(GeomCfg::with_eps(e)),
        Some(e) => bail!("--eps must be a finite non-negative number, got {e}"),
    }
}

fn source(args: &HullArgs) -> Result<Source<'_>> {
    if let Some(path) = &args.input {
        return Ok(if path.as_os_str() == "-" {
            Source::Stdin
        } else {
            Source::File(path)
        });
    }
    let Some(dist) = Distribution::from_name(&args.dist) else {
        bail!(
            "unknown distribution {:?} (expected one of {})",
            args.dist,
            Distribution::NAMES.join(", ")
        );
    };
    let n = args.random.unwrap_or(DEFAULT_RANDOM_POINTS);
    if n > MAX_POINTS {
        bail!("--random {n} exceeds the limit of {MAX_POINTS} points");
    }
    Ok(Source::Random { n, dist })
}

/// Run the `hull` subcommand and return the lines to print.
fn hull(args: &HullArgs) -> Result<Vec<String>> {
    let algos = algorithms(&args.algo)?;
    let cfg = geom_cfg(args.eps)?;
    let points = input::load_points(source(args)?, args.seed)?;
    tracing::info!(
        algo = %args.algo,
        points = points.len(),
        seed = args.seed,
        eps = cfg.eps_orient,
        "hull"
    );

    let results = algos
        .iter()
        .map(|&a| compute_hull_with(&points, a, cfg))
        .collect::<hull2d::Result<Vec<HullResult>>>()?;
    if let [first, rest @ ..] = results.as_slice() {
        for other in rest {
            if !first.same_vertex_set(other, cfg) {
                tracing::warn!(
                    a = %first.algorithm(),
                    b = %other.algorithm(),
                    a_len = first.len(),
                    b_len = other.len(),
                    "algorithms disagree on the hull"
                );
            }
        }
    }

    let lines = results
        .iter()
        .map(|r| {
            let shown = if args.boundary {
                r.with_boundary_points(&points, cfg)
            } else {
                r.vertices().to_vec()
            };
            format_hull(r.algorithm().label(), &shown)
        })
        .collect();

    if let Some(out) = &args.steps_out {
        write_steps(out, &points, &results, args)?;
    }
    Ok(lines)
}

fn write_steps(
    out: &Path,
    points: &[Point],
    results: &[HullResult],
    args: &HullArgs,
) -> Result<()> {
    steplog::write(out, &steplog::StepLogDoc::new(points, results))?;
    let params = serde_json::json!({
        "algo": args.algo,
        "input": args.input.as_ref().map(|p| p.display().to_string()),
        "random": args.random,
        "dist": args.dist,
        "seed": args.seed,
        "eps": args.eps,
        "points": points.len(),
        "steps": results.iter().map(|r| r.steps().len()).collect::<Vec<_>>(),
    });
    let prov = provenance::write_sidecar(out, params)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "steps_written");
    Ok(())
}

fn report() -> Result<()> {
    let algos: Vec<&str> = Algorithm::ALL.iter().map(|a| a.as_str()).collect();
    let obj = provenance::block(serde_json::json!({ "algorithms": algos }), &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
