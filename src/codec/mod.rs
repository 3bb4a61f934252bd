//! Textual pattern encodings.
//!
//! Two formats are accepted: apgcodes (`meta_body`, body in extended Wechsler notation,
//! see [`wechsler`]) and bare RLE bodies (see [`rle`]). Both decoders are total.

pub mod rle;
pub mod wechsler;

use crate::core::cell_set::CellSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeFormat {
    Wechsler,
    Rle,
}

impl CodeFormat {
    /// RLE bodies always carry a row break or the terminator; apgcodes never do.
    pub fn detect(code: &str) -> CodeFormat {
        if code.contains(['$', '!']) {
            CodeFormat::Rle
        } else {
            CodeFormat::Wechsler
        }
    }
}

/// A decoded code: the meta tag (empty for RLE input) and the live cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub meta: String,
    pub cells: CellSet,
}

pub fn decode(code: &str) -> Decoded {
    decode_as(code, CodeFormat::detect(code))
}

pub fn decode_as(code: &str, format: CodeFormat) -> Decoded {
    match format {
        CodeFormat::Wechsler => {
            let (meta, cells) = wechsler::decode(code);
            Decoded { meta, cells }
        }
        CodeFormat::Rle => Decoded {
            meta: String::new(),
            cells: rle::decode(code),
        },
    }
}
