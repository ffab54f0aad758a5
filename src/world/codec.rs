use crate::world::brick::{BrickRecord, ColorId};
use crate::world::grid_index::GridIndex;
use crate::world::terrain::BrickTerrain;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;

/// The 36-symbol terrain alphabet: digits 1-9 and 0, then a-z. A
/// symbol's value is its position in this table, so `'1'` is 0, `'0'`
/// is 9 and `'a'` is 10.
pub const ALPHABET: [char; 36] = [
    '1', '2', '3', '4', '5', '6', '7', '8', '9', '0', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Symbols per encoded brick: x, y, z, then color index.
pub const RECORD_LEN: usize = 4;

static SYMBOL_VALUES: Lazy<HashMap<char, usize>> =
    Lazy::new(|| ALPHABET.iter().enumerate().map(|(i, &c)| (c, i)).collect());

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("record {record}: {text:?} is shorter than {RECORD_LEN} symbols")]
    Truncated { record: usize, text: String },

    #[error("record {record}: {symbol:?} is not a terrain symbol")]
    BadSymbol { record: usize, symbol: char },

    #[error("record {record}: cell ({x}, {y}, {z}) is outside the world")]
    OutOfWorld { record: usize, x: i32, y: i32, z: i32 },

    #[error("record {record}: color {index} has no palette entry")]
    BadColor { record: usize, index: usize },
}

/// What a decode pass did: how many bricks landed, and which records
/// were corrupt and skipped.
#[derive(Debug, Default)]
pub struct DecodeReport {
    pub loaded: usize,
    pub errors: Vec<CodecError>,
}

impl DecodeReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Encodes every occupied cell as a flat string, four symbols per
/// brick, in the terrain's deterministic cell order.
pub fn encode(terrain: &BrickTerrain) -> String {
    let mut data = String::with_capacity(terrain.len() * RECORD_LEN);
    for (index, record) in terrain.occupied() {
        data.push(ALPHABET[index.x() as usize]);
        data.push(ALPHABET[index.y() as usize]);
        data.push(ALPHABET[index.z() as usize]);
        data.push(ALPHABET[record.color.index()]);
    }
    data
}

/// Decodes a terrain string into `terrain`, skipping corrupt records.
///
/// Each record fails or lands on its own: a short tail, an unknown
/// symbol, an out-of-world cell or an unknown color corrupts only that
/// record, and the rest of the string still loads.
pub fn decode_into(terrain: &mut BrickTerrain, data: &str) -> DecodeReport {
    let mut report = DecodeReport::default();
    let symbols: Vec<char> = data.chars().collect();

    for (record, chunk) in symbols.chunks(RECORD_LEN).enumerate() {
        match decode_record(terrain, record, chunk) {
            Ok((index, brick)) => {
                terrain.set(index, brick);
                report.loaded += 1;
            }
            Err(err) => {
                log::warn!("corrupt terrain data: {err}");
                report.errors.push(err);
            }
        }
    }

    report
}

fn decode_record(
    terrain: &BrickTerrain,
    record: usize,
    chunk: &[char],
) -> Result<(GridIndex, BrickRecord), CodecError> {
    if chunk.len() < RECORD_LEN {
        return Err(CodecError::Truncated {
            record,
            text: chunk.iter().collect(),
        });
    }

    let mut values = [0usize; RECORD_LEN];
    for (value, &symbol) in values.iter_mut().zip(chunk) {
        *value = *SYMBOL_VALUES
            .get(&symbol)
            .ok_or(CodecError::BadSymbol { record, symbol })?;
    }
    let [x, y, z, color] = values.map(|v| v as i32);

    let index = GridIndex::new(x, y, z);
    if !terrain.in_bounds(index) {
        return Err(CodecError::OutOfWorld { record, x, y, z });
    }

    let color = ColorId::new(color as usize).ok_or(CodecError::BadColor {
        record,
        index: color as usize,
    })?;

    Ok((index, BrickRecord::new(color)))
}
