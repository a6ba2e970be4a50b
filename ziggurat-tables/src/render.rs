//! Rust source rendering for the generated tables

use log::info;

use crate::constants::{RENDER_PRECISION, VALUES_PER_ROW};
use crate::distribution::Distribution;
use crate::error::Result;
use crate::tables::ZigTables;

const HEADER: &str = "\
// Tables for distributions which are sampled using the ziggurat
// algorithm. Autogenerated by `ziggurat-gen`; do not edit by hand.
";

// Continuation rows line up under the first value after `    &[`
const ROW_SEPARATOR: &str = ",\n      ";

#[inline]
fn render_value(value: f64) -> String {
    format!("{:.*}", RENDER_PRECISION, value)
}

/// `pub static <name>: <ty> = <value>;`
pub fn render_static(name: &str, ty: &str, value: &str) -> String {
    format!("pub static {}: {} = {};\n", name, ty, value)
}

/// Render `values` as a `ZigTable` static, four values per row.
pub fn render_table(name: &str, values: &[f64]) -> String {
    let rows: Vec<String> = values
        .chunks(VALUES_PER_ROW)
        .map(|row| {
            row.iter()
                .map(|&v| render_value(v))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect();

    format!(
        "pub static {}: ZigTable =\n    &[{}];\n",
        name,
        rows.join(ROW_SEPARATOR)
    )
}

/// The `ZigTable` alias for tables of `len` entries.
pub fn render_table_type(len: usize) -> String {
    format!("pub type ZigTable = &'static [f64; {}];\n", len)
}

/// Render the `R`, `X` and `F` constants of one distribution.
pub fn render_distribution<const LEN: usize>(name: &str, tables: &ZigTables<LEN>) -> String {
    let mut out = render_static(
        &format!("ZIG_{}_R", name),
        "f64",
        &render_value(tables.tail_start()),
    );
    out.push_str(&render_table(&format!("ZIG_{}_X", name), &tables.x));
    out.push_str(&render_table(&format!("ZIG_{}_F", name), &tables.f));
    out
}

/// Build, validate and render every distribution into one source file.
///
/// Output depends only on `distributions` and `LEN`, so repeated runs are
/// byte-identical.
pub fn render_module<const LEN: usize>(distributions: &[Distribution]) -> Result<String> {
    let mut out = String::from(HEADER);
    out.push('\n');
    out.push_str(&render_table_type(LEN));

    for d in distributions {
        let tables: ZigTables<LEN> = d.tables();
        tables.validate(d.name)?;
        out.push_str(&render_distribution(d.name, &tables));
        info!("rendered ZIG_{}_{{R,X,F}}", d.name);
    }

    Ok(out)
}
