//! Ziggurat partition tables
//!
//! The construction follows the ZIGNOR variant (Doornik 2005): starting at the
//! tail boundary `r`, every layer boundary is derived from the previous one by
//! requiring each rectangle to have the common area `v`.

use log::debug;

use crate::constants::ZIG_TABLE_SIZE;
use crate::error::{Result, TableError};

/// Partition abscissas `x` and the density `f` evaluated at each of them.
///
/// `x[0]` is the base strip's virtual width `v / f(r)`, `x[1]` is the tail
/// start `r`, and the last slot is padding that the recurrence never assigns.
#[derive(Clone, Debug, PartialEq)]
pub struct ZigTables<const LEN: usize> {
    pub x: [f64; LEN],
    pub f: [f64; LEN],
}

/// The table shape the sampler consumes.
pub type StandardTables = ZigTables<ZIG_TABLE_SIZE>;

/// Build the `X` and `F` tables for a monotone decreasing density.
///
/// `r` is the tail start, `v` the common layer area, `f` the (unnormalized)
/// density and `f_inv` its inverse over `(0, f(0)]`. Nothing is checked here:
/// NaN or infinite values from `f`/`f_inv` end up in the tables as-is. Use
/// [`ZigTables::validate`] before emitting them.
pub fn build_tables<const LEN: usize, F, G>(r: f64, v: f64, f: F, f_inv: G) -> ZigTables<LEN>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    const { assert!(LEN >= 3, "a ziggurat needs a base, a tail and a padding slot") };

    let mut x = [0.0f64; LEN];
    x[0] = v / f(r);
    x[1] = r;

    // x[LEN - 1] is padding and stays 0.0
    for i in 2..LEN - 1 {
        let last = x[i - 1];
        x[i] = f_inv(v / last + f(last));
    }

    let mut fx = [0.0f64; LEN];
    for (fi, &xi) in fx.iter_mut().zip(x.iter()) {
        *fi = f(xi);
    }

    debug!(
        "built {} layers: x[0] = {}, x[{}] = {}",
        LEN - 1,
        x[0],
        LEN - 2,
        x[LEN - 2]
    );

    ZigTables { x, f: fx }
}

impl<const LEN: usize> ZigTables<LEN> {
    /// Number of entries in each table, padding included.
    #[inline]
    pub const fn len(&self) -> usize {
        LEN
    }

    /// Tail start, as stored in `x[1]`.
    #[inline]
    pub fn tail_start(&self) -> f64 {
        self.x[1]
    }

    /// Reject tables whose recurrence left the density's domain.
    ///
    /// Only NaN and infinities are rejected: they are what `ln`/`sqrt` yield
    /// outside their domain. Finite but nonsensical values (a negative
    /// boundary from `-ln(y)` with `y > 1`, say) pass through.
    pub fn validate(&self, distribution: &'static str) -> Result<()> {
        if let Some((index, &value)) = self.x[..LEN - 1]
            .iter()
            .enumerate()
            .find(|&(_, xi)| !xi.is_finite())
        {
            return Err(TableError::Domain {
                distribution,
                index,
                value,
            });
        }

        if let Some((index, &value)) = self.f.iter().enumerate().find(|&(_, fi)| !fi.is_finite()) {
            return Err(TableError::Domain {
                distribution,
                index,
                value,
            });
        }

        Ok(())
    }
}
