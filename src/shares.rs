//! Share record sets as JSON documents.
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": "3" },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": 2, "value": "111" }
//! }
//! ```
//!
//! Integers may be JSON numbers or decimal strings. Entries are read for the
//! indices `1..=n` in ascending order; missing indices are skipped and any
//! other top-level keys are ignored.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use num_bigint::BigInt;
use serde::Deserialize;
use tracing::debug;

use crate::config::THRESHOLD_KEYS_FIELD;
use crate::error::ShamirRecoverError;
use crate::reconstruct::{self, ConsistencyReport, SharePoint};
use crate::utils::decode_base;

#[derive(Deserialize)]
#[serde(untagged)]
enum IntField {
    Number(u64),
    Text(String),
    Other(serde_json::Value),
}

impl IntField {
    fn parse(&self, field: &str) -> Result<u64, ShamirRecoverError> {
        match self {
            IntField::Number(v) => Ok(*v),
            IntField::Text(s) => s.trim().parse::<u64>().map_err(|_| {
                ShamirRecoverError::MalformedRecord(format!("{} is not an integer: {:?}", field, s))
            }),
            IntField::Other(v) => Err(ShamirRecoverError::MalformedRecord(format!(
                "{} must be a non-negative integer, got {}",
                field, v
            ))),
        }
    }
}

#[derive(Deserialize)]
struct RawKeys {
    n: IntField,
    k: IntField,
}

#[derive(Deserialize)]
struct RawShare {
    base: IntField,
    value: String,
}

/// A parsed share record set: the declared `n` and `k` plus the decoded
/// points in ascending index order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareSet {
    pub n: u64,
    pub k: usize,
    pub points: Vec<SharePoint>,
}

impl ShareSet {
    pub fn from_json_str(json: &str) -> Result<Self, ShamirRecoverError> {
        let doc: BTreeMap<String, serde_json::Value> = serde_json::from_str(json)?;
        Self::from_document(doc)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ShamirRecoverError> {
        let doc: BTreeMap<String, serde_json::Value> = serde_json::from_reader(reader)?;
        Self::from_document(doc)
    }

    /// Read and parse a share record file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ShamirRecoverError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    fn from_document(mut doc: BTreeMap<String, serde_json::Value>) -> Result<Self, ShamirRecoverError> {
        let keys = doc.remove(THRESHOLD_KEYS_FIELD).ok_or_else(|| {
            ShamirRecoverError::MalformedRecord(format!("missing \"{}\" object", THRESHOLD_KEYS_FIELD))
        })?;
        let keys: RawKeys = serde_json::from_value(keys)?;
        let n = keys.n.parse("n")?;
        let k = usize::try_from(keys.k.parse("k")?)
            .map_err(|_| ShamirRecoverError::MalformedRecord("k does not fit in usize".to_string()))?;

        // Only canonical decimal keys name a share; "01" or "+1" do not.
        let indexed: BTreeMap<u64, serde_json::Value> = doc
            .into_iter()
            .filter_map(|(key, value)| {
                let i = key.parse::<u64>().ok()?;
                (i.to_string() == key).then_some((i, value))
            })
            .collect();

        let mut points = Vec::new();
        if n == 0 {
            return Ok(Self { n, k, points });
        }
        for (&i, entry) in indexed.range(1..=n) {
            let share = RawShare::deserialize(entry).map_err(|e| {
                ShamirRecoverError::MalformedRecord(format!("share {}: {}", i, e))
            })?;
            let base = share.base.parse("base")?;
            let base = u32::try_from(base).map_err(|_| {
                ShamirRecoverError::MalformedRecord(format!("share {}: base {} out of range", i, base))
            })?;
            let y = decode_base(&share.value, base)?;
            debug!(x = i, y = %y, base, "decoded share");
            points.push(SharePoint { x: i, y });
        }

        Ok(Self { n, k, points })
    }

    /// Degree of the sharing polynomial, `k - 1`.
    pub fn degree(&self) -> usize {
        self.k.saturating_sub(1)
    }

    pub fn reconstruct(&self) -> Result<BigInt, ShamirRecoverError> {
        reconstruct::reconstruct_secret(&self.points, self.k)
    }

    pub fn check_consistency(&self) -> Result<ConsistencyReport, ShamirRecoverError> {
        reconstruct::check_consistency(&self.points, self.k)
    }
}
