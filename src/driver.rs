use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use crate::chunk::split_chunks;
use crate::table::StationTable;
use crate::worker::scan_chunk;

/// Aggregates the whole byte image with `workers` threads. Chunks are
/// claimed exactly once through a shared counter; each thread owns its table
/// until the join, so the record loop takes no locks. The fold after the
/// join merges the per-thread tables into one.
pub fn aggregate(data: &[u8], workers: usize) -> StationTable {
    let workers = workers.max(1);
    // two chunks per worker, per the chunker's contract
    let chunks = split_chunks(data, workers * 2);
    if chunks.is_empty() {
        return StationTable::new();
    }

    let next = AtomicUsize::new(0);
    let mut tables: Vec<StationTable> = thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                scope.spawn(|| {
                    let mut table = StationTable::new();
                    loop {
                        let i = next.fetch_add(1, Ordering::Relaxed);
                        let Some(range) = chunks.get(i) else { break };
                        scan_chunk(&data[range.clone()], &mut table);
                    }
                    table
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let mut merged = tables.pop().unwrap_or_default();
    for table in &tables {
        merged.merge(table);
    }
    merged
}
