//! Replay a recorded hull construction as ASCII frames.
//!
//! Usage:
//!   cargo run -p hull2d --example replay_steps -- [gift-wrapping|angular-sweep] [n] [seed]
//!
//! Plays the part of the renderer: the hull is computed up front, then the
//! step log is drawn frame by frame on a small character grid. `*` marks the
//! partial hull, `@` the candidate, `.` the remaining input points.

use hull2d::prelude::*;

const W: usize = 48;
const H: usize = 20;

fn main() {
    let mut args = std::env::args().skip(1);
    let algo = args.next().unwrap_or_else(|| "angular-sweep".to_string());
    let n: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(24);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    let bounds = Bounds::default();
    let points = draw_points(Distribution::Uniform, n, bounds, ReplayToken::new(seed));
    let result = match compute_hull_named(&points, &algo) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    for (k, frame) in result.playback().enumerate() {
        let mut grid = vec![[' '; W]; H];
        for p in &points {
            plot(&mut grid, &bounds, *p, '.');
        }
        let header = match frame {
            Frame::Step(step) => {
                for v in &step.hull {
                    plot(&mut grid, &bounds, *v, '*');
                }
                plot(&mut grid, &bounds, step.candidate, '@');
                format!("frame {k}: {}", step.kind.as_str())
            }
            Frame::Final(hull) => {
                for v in hull {
                    plot(&mut grid, &bounds, *v, '*');
                }
                format!("final: {} vertices, area {:.2}", hull.len(), result.area())
            }
        };
        println!("{header}");
        for row in grid.iter().rev() {
            println!("|{}|", row.iter().collect::<String>());
        }
    }
}

fn plot(grid: &mut [[char; W]], b: &Bounds, p: Point, c: char) {
    let fx = (p.x - b.min.x) / (b.max.x - b.min.x);
    let fy = (p.y - b.min.y) / (b.max.y - b.min.y);
    let col = ((fx * (W - 1) as f64).round() as usize).min(W - 1);
    let row = ((fy * (H - 1) as f64).round() as usize).min(H - 1);
    grid[row][col] = c;
}
