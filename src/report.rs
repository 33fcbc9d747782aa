use std::fmt::Write;

use crate::table::{Aggregate, StationTable};

/// Occupied entries sorted by raw name bytes: ordinal order, not
/// locale-aware, so "Saint John" sorts before "St. John's".
pub fn sorted_entries(table: &StationTable) -> Vec<(&[u8], &Aggregate)> {
    let mut entries: Vec<_> = table.entries().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    entries
}

/// Renders one `name=min/mean/max` line per station, each value with one
/// fractional digit. `{:.1}` rounds half to even.
pub fn format_output(table: &StationTable) -> String {
    let entries = sorted_entries(table);
    let mut out = String::with_capacity(entries.len() * 24);
    for (name, agg) in entries {
        // the input is trusted UTF-8
        let name = unsafe { std::str::from_utf8_unchecked(name) };
        let _ = writeln!(
            out,
            "{}={:.1}/{:.1}/{:.1}",
            name,
            agg.min_deg(),
            agg.mean_deg(),
            agg.max_deg()
        );
    }
    out
}
