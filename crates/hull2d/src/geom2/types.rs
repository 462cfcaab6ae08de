//! Basic 2D types and tolerances.
//!
//! - `Point`: a position in the plane; identity is position only.
//! - `GeomCfg`: centralizes epsilons for orientation and duplicate checks.
//! - `Orientation`: turn direction of an ordered point triple.

use nalgebra::Vector2;

/// A point in the plane. Two points are the same point iff their coordinates
/// agree (within `GeomCfg::eps_dup` where a tolerance applies).
pub type Point = Vector2<f64>;

/// Geometry configuration (tolerances).
///
/// The epsilon magnitudes are implementation parameters, not a contract.
/// `eps_orient` is relative (a sine bound), so orientation behaves the same at
/// every scale. `eps_dup` is absolute and should stay well below the smallest
/// meaningful point spacing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Triples whose turn angle has `|sin| <= eps_orient` are collinear.
    pub eps_orient: f64,
    /// Points whose coordinates both differ by at most `eps_dup` are duplicates.
    pub eps_dup: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_orient: 1e-12,
            eps_dup: 1e-12,
        }
    }
}

impl GeomCfg {
    /// Exact predicates. Appropriate for integral (or dyadic) coordinates.
    pub fn exact() -> Self {
        Self {
            eps_orient: 0.0,
            eps_dup: 0.0,
        }
    }

    /// Same epsilon for both checks.
    pub fn with_eps(eps: f64) -> Self {
        Self {
            eps_orient: eps,
            eps_dup: eps,
        }
    }
}

/// Turn direction of `a → b → c`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Counter-clockwise (positive cross product).
    LeftTurn,
    /// Clockwise (negative cross product).
    RightTurn,
    Collinear,
}

impl Orientation {
    #[inline]
    pub fn is_left(self) -> bool {
        matches!(self, Orientation::LeftTurn)
    }
    #[inline]
    pub fn is_right(self) -> bool {
        matches!(self, Orientation::RightTurn)
    }
    #[inline]
    pub fn is_collinear(self) -> bool {
        matches!(self, Orientation::Collinear)
    }
}
