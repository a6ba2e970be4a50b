//! Constants for the Ziggurat tables

/// Number of ziggurat layers. Must match the index mask used by the sampler.
pub const TABLE_LEN: usize = 256;

/// Length of every emitted table: one extra slot so the sampler's index
/// arithmetic never reads past the end.
pub const ZIG_TABLE_SIZE: usize = TABLE_LEN + 1;

// Normal distribution constants
pub const NORM_R: f64 = 3.6541528853610088;
pub const NORM_V: f64 = 0.00492867323399;

// Exponential distribution constants
pub const EXP_R: f64 = 7.69711747013104972;
pub const EXP_V: f64 = 0.0039496598225815571993;

// Rendering
pub const RENDER_PRECISION: usize = 18;
pub const VALUES_PER_ROW: usize = 4;

pub const DEFAULT_OUTPUT: &str = "ziggurat_tables.rs";
