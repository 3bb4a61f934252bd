//! Extended Wechsler notation, the body format of apgcodes such as `xs4_33`.
//!
//! The body describes the pattern in horizontal bands of 5 rows. Each ordinary character is
//! a base-36 digit whose low 5 bits are one column of the band (bit `n` is row `n`). The
//! letters `w`, `x` and `y?` compress runs of empty columns and `z` starts the next band.

use crate::core::cell_set::CellSet;
use crate::core::coord::Coord;

/// Height of one band.
pub const BAND_HEIGHT: i32 = 5;

/// Splits `meta_body` at the first underscore and decodes the body.
///
/// Returns the meta tag (possibly empty) and the live cells. Never fails: unknown
/// characters are read as the digit 0. Codes that carry no body (see [`has_body`]) come
/// back whole as the tag, with no cells.
pub fn decode(code: &str) -> (String, CellSet) {
    if !has_body(code) {
        return (code.to_string(), CellSet::new());
    }
    let (meta, body) = code.split_once('_').unwrap_or((code, ""));
    (meta.to_string(), decode_body(body))
}

/// Only still lifes, oscillators and spaceships (`xs`, `xp`, `xq`) have a Wechsler body.
/// `yl…`, `ov_…`, `zz_…` and `PATHOLOGICAL` codes do not.
#[inline]
pub fn has_body(code: &str) -> bool {
    matches!(code.get(..2), Some("xs" | "xp" | "xq"))
}

/// Decodes a body without a meta prefix.
pub fn decode_body(body: &str) -> CellSet {
    let mut cells = CellSet::new();
    let mut x = 0i32;
    let mut y = 0i32;

    let mut chars = body.chars();
    while let Some(ch) = chars.next() {
        match ch {
            'w' => x = x.saturating_add(2),
            'x' => x = x.saturating_add(3),
            'y' => {
                // the run length digit is part of the same token
                let extra = chars.next().map(digit).unwrap_or(0);
                x = x.saturating_add(4 + extra as i32);
            }
            'z' => {
                x = 0;
                y = y.saturating_add(BAND_HEIGHT);
            }
            _ => {
                let column = digit(ch);
                for n in 0..BAND_HEIGHT {
                    if column & (1 << n) != 0 {
                        cells.insert(Coord::new(x, y.saturating_add(n)));
                    }
                }
                x = x.saturating_add(1);
            }
        }
    }

    cells
}

#[inline]
fn digit(ch: char) -> u32 {
    ch.to_digit(36).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(set: &CellSet) -> Vec<(i32, i32)> {
        set.sorted().into_iter().map(|c| (c.x, c.y)).collect()
    }

    #[test]
    fn block() {
        let (meta, cells) = decode("xs4_33");
        assert_eq!(meta, "xs4");
        assert_eq!(coords(&cells), vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn blinker() {
        let (meta, cells) = decode("xp2_7");
        assert_eq!(meta, "xp2");
        assert_eq!(coords(&cells), vec![(0, 0), (0, 1), (0, 2)]);
    }

    #[test]
    fn gaps_and_bands() {
        // 1 at x=0, skip 2, 1 at x=3, skip 3, 1 at x=7, skip 4+10, 1 at x=22
        let cells = decode_body("1w1x1ya1");
        assert_eq!(coords(&cells), vec![(0, 0), (3, 0), (7, 0), (22, 0)]);

        let cells = decode_body("1z1");
        assert_eq!(coords(&cells), vec![(0, 0), (0, 5)]);
    }

    #[test]
    fn high_digits_fill_the_band() {
        // v = 31 = all five rows
        let cells = decode_body("v");
        assert_eq!(cells.len(), 5);
        assert!(cells.contains(Coord::new(0, 4)));
        // uppercase reads the same as lowercase digits
        assert_eq!(decode_body("V"), cells);
    }

    #[test]
    fn pivot_is_first_cell_in_scan_order() {
        let cells = decode_body("6");
        // 6 = rows 1 and 2
        assert_eq!(cells.pivot(), Some(Coord::new(0, 1)));
    }

    #[test]
    fn codes_without_a_body() {
        for code in [
            "ov_p24",
            "yl144_1_16_afb5f3db909e60548f086e22ee3353ac",
            "zz_LINEAR",
            "PATHOLOGICAL",
        ] {
            let (meta, cells) = decode(code);
            assert_eq!(meta, code);
            assert!(cells.is_empty(), "{code}");
        }
        assert!(has_body("xq4_153"));
        assert!(!has_body("x"));
    }

    #[test]
    fn permissive_input() {
        let (meta, cells) = decode("");
        assert_eq!(meta, "");
        assert!(cells.is_empty());

        let (meta, cells) = decode("xs0");
        assert_eq!(meta, "xs0");
        assert!(cells.is_empty());

        // '#' is not a digit: value 0, but still one column wide
        let cells = decode_body("#1");
        assert_eq!(coords(&cells), vec![(1, 0)]);

        // a dangling 'y' still skips four columns
        assert!(decode_body("y").is_empty());
        let cells = decode_body("1_1");
        assert_eq!(coords(&cells), vec![(0, 0), (2, 0)]);
    }
}
