//! Distributions sampled with the ziggurat method
//!
//! Densities are unnormalized: the scale cancels out of the sampler and only
//! `f(0) = 1` matters.

use log::debug;

use crate::constants::{EXP_R, EXP_V, NORM_R, NORM_V};
use crate::tables::{ZigTables, build_tables};

/// Parameters that fix a ziggurat partition for one density.
#[derive(Clone, Copy, Debug)]
pub struct Distribution {
    /// Upper-case name used in the emitted constants (`ZIG_<NAME>_X`).
    pub name: &'static str,
    /// Tail start.
    pub r: f64,
    /// Common layer area.
    pub v: f64,
    pub f: fn(f64) -> f64,
    pub f_inv: fn(f64) -> f64,
}

/// N(0, 1)
pub const NORMAL: Distribution = Distribution {
    name: "NORM",
    r: NORM_R,
    v: NORM_V,
    f: norm_f,
    f_inv: norm_f_inv,
};

/// Exp(1)
pub const EXPONENTIAL: Distribution = Distribution {
    name: "EXP",
    r: EXP_R,
    v: EXP_V,
    f: exp_f,
    f_inv: exp_f_inv,
};

impl Distribution {
    /// Every distribution, in the order they are emitted.
    pub const ALL: [Distribution; 2] = [NORMAL, EXPONENTIAL];

    /// Build this distribution's tables with `LEN` entries.
    pub fn tables<const LEN: usize>(&self) -> ZigTables<LEN> {
        debug!("building {} tables (r = {}, v = {})", self.name, self.r, self.v);
        build_tables(self.r, self.v, self.f, self.f_inv)
    }
}

#[inline]
pub fn norm_f(x: f64) -> f64 {
    (-x * x / 2.0).exp()
}

#[inline]
pub fn norm_f_inv(y: f64) -> f64 {
    (-2.0 * y.ln()).sqrt()
}

#[inline]
pub fn exp_f(x: f64) -> f64 {
    (-x).exp()
}

#[inline]
pub fn exp_f_inv(y: f64) -> f64 {
    -y.ln()
}
