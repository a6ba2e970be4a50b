//! # Ziggurat Tables: Lookup Tables for Normal and Exponential Ziggurat Samplers
//!
//! Computes the layer tables used by ziggurat samplers and renders them as Rust
//! source constants. The construction is the ZIGNOR variant from Doornik (2005),
//! "An Improved Ziggurat Method to Generate Normal Random Samples", generalised
//! to any monotone decreasing density given its inverse.
//!
//! ## Tables
//!
//! For each distribution three constants are emitted:
//!
//! - `ZIG_<NAME>_R`: the tail start `r`.
//! - `ZIG_<NAME>_X`: the layer boundaries, `X[0] = v / f(r)`, `X[1] = r` and
//!   `X[i] = f_inv(v / X[i-1] + f(X[i-1]))` up to `TABLE_LEN`.
//! - `ZIG_<NAME>_F`: `f(X[i])` for every entry, cached so the sampler never
//!   evaluates the density on its fast path.
//!
//! Both tables have `TABLE_LEN + 1` entries; the last one is padding so that the
//! sampler's `i + 1` lookups stay in bounds.
//!
//! ```
//! use ziggurat_tables::{NORMAL, StandardTables, constants::NORM_R};
//!
//! let tables: StandardTables = NORMAL.tables();
//! assert_eq!(tables.x[1], NORM_R);
//! assert!(tables.validate(NORMAL.name).is_ok());
//! ```

pub mod constants;
mod distribution;
mod error;
mod output;
mod render;
mod tables;

pub use distribution::{
    Distribution, EXPONENTIAL, NORMAL, exp_f, exp_f_inv, norm_f, norm_f_inv,
};
pub use error::{Result, TableError};
pub use output::{is_up_to_date, write_module};
pub use render::{
    render_distribution, render_module, render_static, render_table, render_table_type,
};
pub use tables::{StandardTables, ZigTables, build_tables};

use constants::ZIG_TABLE_SIZE;

/// Render the standard `NORM` and `EXP` tables as a Rust module.
pub fn generate() -> Result<String> {
    render_module::<ZIG_TABLE_SIZE>(&Distribution::ALL)
}
