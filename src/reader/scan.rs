//! Backward delimiter scanning over a single chunk.
//!
//! Line bytes are collected in reverse while walking toward the start of the
//! file, then flipped once when the line is complete. Carriage returns are
//! dropped wherever they appear; only `\n` ends a line.

use memchr::memrchr;

pub(crate) const LINE_FEED: u8 = b'\n';
pub(crate) const CARRIAGE_RETURN: u8 = b'\r';

/// Scan `chunk` from its last byte toward its first
///
/// Every byte after the last line feed (all of them when there is none) is
/// appended to `reversed` in reverse order, carriage returns excluded.
///
/// # Returns
/// * `Some(index)` - position of the last line feed within `chunk`
/// * `None` - the chunk holds no line feed; the line continues further back
pub(crate) fn scan_chunk(chunk: &[u8], reversed: &mut Vec<u8>) -> Option<usize> {
    let delimiter = memrchr(LINE_FEED, chunk);
    let tail_start = delimiter.map_or(0, |pos| pos + 1);

    reversed.extend(
        chunk[tail_start..]
            .iter()
            .rev()
            .copied()
            .filter(|&byte| byte != CARRIAGE_RETURN),
    );

    delimiter
}

/// Turn a reverse-collected line back into file order
pub(crate) fn finish_line(mut reversed: Vec<u8>) -> Vec<u8> {
    reversed.reverse();
    reversed
}
