//!
//! The tree versus simple case comparison.
//!

use std::collections::BTreeMap;

use crate::error::Error;
use crate::table::row::Row;
use crate::table::Table;

///
/// Computes `simple.time_nanos / tree.time_nanos` for every Threads value of the `xstreams`
/// partition, in the row order of the tree table.
///
/// Rows are joined on the Threads value, so both tables must contain the same Threads values
/// for the partition, each exactly once.
///
pub fn cross_ratios(tree: &Table, simple: &Table, xstreams: u32) -> Result<Vec<(u32, f64)>, Error> {
    let tree_rows = tree.partition(xstreams);
    let simple_rows = simple.partition(xstreams);
    let mismatch = |details: String| Error::RowAlignmentMismatch {
        reference: tree.name.clone(),
        candidate: simple.name.clone(),
        xstreams,
        details,
    };

    if tree_rows.len() != simple_rows.len() {
        return Err(mismatch(format!(
            "{} rows against {} rows",
            tree_rows.len(),
            simple_rows.len()
        )));
    }

    let mut simple_by_threads: BTreeMap<u32, &Row> = BTreeMap::new();
    for row in simple_rows.into_iter() {
        if simple_by_threads.insert(row.threads, row).is_some() {
            return Err(mismatch(format!(
                "Threads={} appears more than once in `{}`",
                row.threads, simple.name
            )));
        }
    }

    let mut ratios = Vec::with_capacity(tree_rows.len());
    for tree_row in tree_rows.into_iter() {
        let simple_row = simple_by_threads.remove(&tree_row.threads).ok_or_else(|| {
            mismatch(format!(
                "Threads={} is missing in `{}`",
                tree_row.threads, simple.name
            ))
        })?;
        if !tree_row.has_valid_timing() {
            return Err(tree.invalid_timing(tree_row));
        }
        if !simple_row.time_nanos.is_finite() || simple_row.time_nanos < 0.0 {
            return Err(simple.invalid_timing(simple_row));
        }
        ratios.push((tree_row.threads, simple_row.time_nanos / tree_row.time_nanos));
    }
    Ok(ratios)
}
