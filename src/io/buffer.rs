//! Pattern buffer for the benchmark transfers

/// Number of distinct pattern bytes (`'a'` through `'z'`)
const PATTERN_PERIOD: usize = 26;

/// Fill `buf` with the repeating alphabet pattern: byte `i` becomes
/// `b'a' + (i % 26)`.
pub fn fill_pattern(buf: &mut [u8]) {
    for (i, byte) in buf.iter_mut().enumerate() {
        *byte = b'a' + (i % PATTERN_PERIOD) as u8;
    }
}

/// Allocate and fill the transfer buffer.
///
/// An allocation failure aborts the process; a benchmark that cannot hold
/// its buffer in memory cannot run.
pub fn pattern_buffer(size: usize) -> Vec<u8> {
    let mut buf = vec![0u8; size];
    fill_pattern(&mut buf);
    buf
}
