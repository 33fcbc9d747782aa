// # Input and output
//
// - Format of the measurements file:
//      - `<string: station name>;<double: measurement>`
//      - eg: "Hamburg;12.0"
//
// - Station name:
//      - non null UTF-8 string
//      - min length 1 character and max length 100 bytes
//      - containing neither ; nor \n characters
//
// - Temperature value:
//      - non null double between -99.9 (inclusive) and 99.9 (inclusive)
//      - always with one fractional digit
//      - bytes between the fractional digit and \n are skipped
//        (the weather_stations.csv variant carries trailing metadata)
//
// - Line endings in the file are \n characters on all platforms
//
// - Output format:
//      - `<station name>=<min>/<mean>/<max>`
//      - one station per line, sorted by name bytes
//      - every value rendered with one fractional digit
//
// - Running:
//      - `cargo run --release -- [measurements-file] [expected-output-file]`
//      - the second argument checks the summary against known-good output
//
//      - Profiling:
//          - `cargo build --profile profiling`
//          - `samply record ./target/profiling/onebrc`

use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Instant;

use memmap2::Mmap;

use onebrc::{check, run_parallel};

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

fn main() -> io::Result<ExitCode> {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    let mut args = env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "measurements.txt".to_string());
    let expected_path = args.next();

    let start = Instant::now();

    let file = File::open(&path)?;
    if file.metadata()?.len() == 0 {
        // zero-length files cannot be mapped; there is nothing to summarize
        return Ok(ExitCode::SUCCESS);
    }
    let mmap = unsafe { Mmap::map(&file)? };
    #[cfg(unix)]
    mmap.advise(memmap2::Advice::Sequential)?;

    let results = run_parallel(&mmap);

    eprintln!(
        "Run completed in: {:?} seconds",
        start.elapsed().as_secs_f32()
    );

    io::stdout().write_all(results.as_bytes())?;

    if let Some(expected_path) = expected_path {
        let correct = std::fs::read_to_string(expected_path)?;
        if !check::check_correct(&results, &correct) {
            return Ok(ExitCode::FAILURE);
        }
    }
    Ok(ExitCode::SUCCESS)
}
