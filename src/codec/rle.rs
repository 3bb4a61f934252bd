//! Run-length encoded pattern bodies (`2o$obo!`), without the `x = .., y = ..` header.
//!
//! Every token is an optional decimal count followed by a directive:
//! `b` (dead cells), `o` (live cells), `$` (end of row). Anything else, including the `!`
//! terminator, is consumed and ignored, so text after `!` is still scanned.
//!
//! Positions saturate at `i32::MAX`, and a single `o` run places at most [`MAX_RUN`] cells.

use crate::core::cell_set::CellSet;
use crate::core::coord::Coord;

/// Most live cells one run can place; the rest of a longer run is skipped over.
pub const MAX_RUN: i32 = 1 << 16;

pub fn decode(encoded: &str) -> CellSet {
    let mut cells = CellSet::new();
    let bytes = encoded.as_bytes();
    let mut x = 0i32;
    let mut y = 0i32;
    let mut pos = 0usize;

    while pos < bytes.len() {
        let start = pos;
        let mut count = 0i32;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            count = count
                .saturating_mul(10)
                .saturating_add((bytes[pos] - b'0') as i32);
            pos += 1;
        }
        let n = if pos > start { count } else { 1 };

        match bytes.get(pos) {
            Some(b'$') => {
                y = y.saturating_add(n);
                x = 0;
            }
            Some(b'b') => x = x.saturating_add(n),
            Some(b'o') => {
                let end = x.saturating_add(n);
                for cx in x..end.min(x.saturating_add(MAX_RUN)) {
                    cells.insert(Coord::new(cx, y));
                }
                x = end;
            }
            _ => {}
        }

        pos += 1;
    }

    cells
}
