//! 2D convex hulls with recorded construction steps.
//!
//! Two classical algorithms (Gift Wrapping / Jarvis march and the angular
//! sweep / Graham scan) share one orientation predicate and one tolerance
//! config. Every run returns the final hull together with an immutable step
//! log that a presenter can replay; the core never draws anything itself.
//!
//! Layout
//! - `geom2`: points, tolerances, predicates, seeded point generators.
//! - `hull`: the two algorithms, step recording, result contract, entry point.
//! - `io`: the plain-text point format and hull printing.
//! - `error`: the error taxonomy for caller contract violations.

pub mod error;
pub mod geom2;
pub mod hull;
pub mod io;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{HullError, Result};
pub use geom2::{GeomCfg, Orientation, Point};
pub use hull::{
    compute_hull, compute_hull_named, compute_hull_with, Algorithm, Frame, HullResult,
    HullShape, HullStep, Playback, StepKind, StepLog,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_points, Bounds, Distribution, ReplayToken};
    pub use crate::geom2::{
        cross, dedup_points, is_duplicate, orientation, point_in_convex_polygon, polygon_area,
        squared_distance, GeomCfg, Orientation, Point,
    };
    pub use crate::hull::{
        compute_hull, compute_hull_named, compute_hull_with, Algorithm, Frame, HullResult,
        HullShape, HullStep, Playback, StepKind, StepLog,
    };
    pub use crate::{HullError, Result};
}
