// Summarizes a very large `<station>;<temperature>\n` measurements file:
// per-station min/mean/max in one pass, sorted by station name.
//
// Bytes flow: mapping -> chunker -> worker threads -> per-thread tables ->
// merge -> sorted render. Names are never copied out of the mapping; table
// keys are raw byte ranges into it, which is why the mapping must outlive
// every table (the borrow on `data` enforces this).

#![feature(portable_simd)]

pub mod check;
pub mod chunk;
pub mod driver;
pub mod name;
pub mod parse;
pub mod report;
pub mod scan;
pub mod table;
pub mod worker;

use std::thread;

/// Full pipeline over an in-memory or mapped byte image: aggregate with
/// `workers` threads, then render the sorted summary.
pub fn run(data: &[u8], workers: usize) -> String {
    let table = driver::aggregate(data, workers);
    report::format_output(&table)
}

/// `run` with one worker per hardware core.
pub fn run_parallel(data: &[u8]) -> String {
    run(data, default_workers())
}

pub fn default_workers() -> usize {
    thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}
