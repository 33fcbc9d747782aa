use std::ops::Range;

use memchr::memchr;

// Boundary alignment can push a chunk past its target by at most one line,
// so the cap leaves headroom under i32::MAX.
const MAX_CHUNK: usize = i32::MAX as usize - 100_000;

/// Splits `data` into up to `want` line-aligned ranges that are pairwise
/// disjoint and cover the whole file. Every range but the last ends one past
/// a '\n'; the last ends at EOF.
pub fn split_chunks(data: &[u8], want: usize) -> Vec<Range<usize>> {
    if data.is_empty() {
        return Vec::new();
    }

    let mut count = want.max(1);
    while data.len() / count > MAX_CHUNK {
        count *= 2;
    }
    let size = data.len() / count;

    let mut chunks = Vec::with_capacity(count);
    let mut start = 0;
    for i in 1..count {
        let target = i * size;
        // alignment of the previous boundary may already have passed this one
        if target <= start {
            continue;
        }
        let end = match memchr(b'\n', &data[target..]) {
            Some(nl) => target + nl + 1,
            None => data.len(),
        };
        chunks.push(start..end);
        start = end;
        if start >= data.len() {
            break;
        }
    }
    if start < data.len() {
        chunks.push(start..data.len());
    }
    chunks
}
