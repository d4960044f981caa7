use seqcommit_canonical::strict::{present, require};
use seqcommit_canonical::{Commitment, Committable, DecodeError, RawCommitmentBuilder};
use serde::{Deserialize, Serialize};

use crate::nmt_root::NmtRoot;

/// Sequencer block header.
///
/// All four fields are mandatory on decode; zero values are accepted, absent
/// keys are not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawHeader")]
pub struct Header {
    /// Block height.
    pub height: u64,
    /// Block timestamp.
    pub timestamp: u64,
    /// Latest L1 block number observed by the sequencer.
    pub l1_head: u64,
    /// Root of the block's transactions.
    pub transactions_root: NmtRoot,
}

impl Header {
    /// Strictly decodes a header from JSON text.
    pub fn from_json(text: &str) -> Result<Self, DecodeError> {
        let raw: RawHeader = serde_json::from_str(text)?;
        Self::try_from(raw)
    }
}

impl Committable for Header {
    const TAG: &'static str = "BLOCK";

    /// Field order is fixed: height, timestamp, l1_head, transactions_root.
    fn commit(&self) -> Commitment {
        RawCommitmentBuilder::new(Self::TAG)
            .u64_field("height", self.height)
            .u64_field("timestamp", self.timestamp)
            .u64_field("l1_head", self.l1_head)
            .field("transactions_root", self.transactions_root.commit())
            .finalize()
    }
}

#[derive(Deserialize)]
struct RawHeader {
    #[serde(default, deserialize_with = "present")]
    height: Option<u64>,
    #[serde(default, deserialize_with = "present")]
    timestamp: Option<u64>,
    #[serde(default, deserialize_with = "present")]
    l1_head: Option<u64>,
    #[serde(default, deserialize_with = "present")]
    transactions_root: Option<NmtRoot>,
}

impl TryFrom<RawHeader> for Header {
    type Error = DecodeError;

    fn try_from(raw: RawHeader) -> Result<Self, Self::Error> {
        Ok(Header {
            height: require(raw.height, "height", "Header")?,
            timestamp: require(raw.timestamp, "timestamp", "Header")?,
            l1_head: require(raw.l1_head, "l1_head", "Header")?,
            transactions_root: require(raw.transactions_root, "transactions_root", "Header")?,
        })
    }
}
