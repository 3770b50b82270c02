// src/core/feed.rs
//
// Tokenizer for the Flashscore feed wire format.
//
// A payload is a flat stream of records separated by `~`. Each record is a
// list of `key÷value` fields separated by `¬`. Keys are short opaque codes
// (2–3 chars) whose meaning is assigned per sport by convention, not by the
// format. Two reserved keys, RAA/RAB, repeat within a record and carry
// per-row result attributes as positionally paired lists (the i-th RAA value
// names the attribute, the i-th RAB value is its content).
//
// No semantics here: unknown keys are kept verbatim, tokens without `÷` are
// dropped, and the first one or two records of a payload are header/metadata
// the callers skip.

use std::collections::HashMap;

pub const RECORD_SEP: char = '~';
pub const FIELD_SEP: char = '¬';
pub const KV_SEP: char = '÷';

const LIST_KEY_A: &str = "RAA";
const LIST_KEY_B: &str = "RAB";

/// One tokenized record: scalar fields plus the two ordered side-lists.
#[derive(Debug, Default)]
pub struct Record {
    pub fields: HashMap<String, String>,
    pub raa: Vec<String>,
    pub rab: Vec<String>,
}

impl Record {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn has(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Scalar field parsed as integer; None for absent/empty/garbage.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(|v| v.trim().parse().ok())
    }

    /// Pair up the RAA/RAB side-lists into an attribute map.
    /// Alignment is positional; a trailing unpaired value is ignored.
    pub fn attrs(&self) -> HashMap<&str, &str> {
        self.raa
            .iter()
            .zip(self.rab.iter())
            .map(|(a, b)| (a.as_str(), b.as_str()))
            .collect()
    }
}

/// Split a raw payload into tokenized records.
pub fn tokenize(raw: &str) -> Vec<Record> {
    raw.split(RECORD_SEP).map(parse_record).collect()
}

/// Tokenize a single record segment.
pub fn parse_record(segment: &str) -> Record {
    let mut rec = Record::default();
    for token in segment.split(FIELD_SEP) {
        // First `÷` splits key from value; the value may contain more of them.
        let Some((key, value)) = token.split_once(KV_SEP) else {
            continue;
        };
        match key {
            LIST_KEY_A => rec.raa.push(s!(value)),
            LIST_KEY_B => rec.rab.push(s!(value)),
            _ => {
                rec.fields.insert(s!(key), s!(value));
            }
        }
    }
    rec
}
