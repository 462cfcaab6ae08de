//! 2D geometry kernel shared by both hull algorithms.
//!
//! Purpose
//! - One orientation predicate (`orientation`) that every turn and
//!   collinearity decision routes through, so both algorithms agree on
//!   near-degenerate inputs.
//! - Tolerances live in `GeomCfg` and are passed explicitly; no call site
//!   hardcodes its own epsilon.
//!
//! Code cross-refs: `hull::{gift_wrap, graham}`, `GeomCfg`, `Orientation`

mod predicates;
pub mod rand;
mod types;

pub use predicates::{
    cross, dedup_points, is_duplicate, orientation, point_in_convex_polygon, polygon_area,
    squared_distance,
};
pub use types::{GeomCfg, Orientation, Point};
