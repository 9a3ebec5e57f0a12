// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use markup_ranges_engine::Range;

#[allow(dead_code)]
pub fn generate_text(size: usize) -> String {
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. ".repeat(size)
}

/// Ranges of a few chars each, every third one crossing its predecessor.
#[allow(dead_code)]
pub fn generate_crossing_ranges(count: usize) -> Vec<Range<u32>> {
    (0..count)
        .map(|i| {
            let offset = i * 7;
            let length = if i % 3 == 0 { 10 } else { 4 };
            Range::new(offset, length, i as u32)
        })
        .collect()
}

/// Sorted, disjoint ranges with one-char gaps.
#[allow(dead_code)]
pub fn generate_linear_ranges(count: usize) -> Vec<Range<u32>> {
    (0..count)
        .map(|i| Range::new(i * 6, 5, i as u32))
        .collect()
}
