use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use seqcommit_canonical::{Bytes, DecodeError};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Width of an [`Id`], in bytes.
pub const ID_LEN: usize = 32;

/// Opaque fixed-width identifier for blocks and state roots.
///
/// JSON form is 64 lowercase hex characters; decoding accepts either case.
/// This is not the checksummed base58 (CB58) text used by avalanchego
/// identifiers, so block JSON carrying CB58 ids does not decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id([u8; ID_LEN]);

impl Id {
    /// The all-zero identifier.
    pub const EMPTY: Id = Id([0u8; ID_LEN]);

    /// Wraps raw identifier bytes.
    pub const fn new(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw identifier bytes.
    pub fn as_bytes(&self) -> &[u8; ID_LEN] {
        &self.0
    }
}

impl From<[u8; ID_LEN]> for Id {
    fn from(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for Id {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut buf = [0u8; ID_LEN];
        hex::decode_to_slice(s, &mut buf).map_err(|_| DecodeError::PatternMismatch {
            field: "id",
            value: s.to_string(),
        })?;
        Ok(Id(buf))
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Transaction as carried inside a sequencer block.
///
/// Absent keys decode to zero values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeqTransaction {
    /// Namespace the transaction was submitted to.
    pub namespace: String,
    /// Transaction identifier assigned by the sequencer.
    pub tx_id: String,
    /// Position of the transaction within its namespace.
    #[serde(rename = "tx_index")]
    pub index: u64,
    /// Raw transaction payload.
    pub transaction: Bytes,
}

/// Block produced by the sequencer, with transactions grouped by namespace.
///
/// Decoding is lenient: absent keys decode to zero values and a `null`
/// transaction map decodes to an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequencerBlock {
    /// State root after applying the block.
    pub state_root: Id,
    /// Identifier of the parent block.
    pub parent: Id,
    /// Block timestamp.
    pub timestamp: i64,
    /// Block height.
    pub height: u64,
    /// Transactions keyed by namespace, in namespace order.
    #[serde(deserialize_with = "null_as_default")]
    pub transactions: BTreeMap<String, Vec<SeqTransaction>>,
}

impl SequencerBlock {
    /// Total number of transactions across all namespaces.
    pub fn transaction_count(&self) -> usize {
        self.transactions.values().map(Vec::len).sum()
    }

    /// Transactions submitted to `namespace`, empty when none were.
    pub fn namespace(&self, namespace: &str) -> &[SeqTransaction] {
        self.transactions
            .get(namespace)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
