use seqcommit_canonical::strict::{present, require};
use seqcommit_canonical::{Bytes, Commitment, Committable, DecodeError, RawCommitmentBuilder};
use serde::{Deserialize, Serialize};

/// Root of a namespaced Merkle tree over a block's transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawNmtRoot")]
pub struct NmtRoot {
    /// Root bytes as produced by the tree.
    pub root: Bytes,
}

impl NmtRoot {
    /// Wraps root bytes.
    pub fn new(root: impl Into<Bytes>) -> Self {
        Self { root: root.into() }
    }

    /// Strictly decodes an NMT root from JSON text.
    pub fn from_json(text: &str) -> Result<Self, DecodeError> {
        let raw: RawNmtRoot = serde_json::from_str(text)?;
        Self::try_from(raw)
    }
}

impl Committable for NmtRoot {
    const TAG: &'static str = "NMTROOT";

    fn commit(&self) -> Commitment {
        RawCommitmentBuilder::new(Self::TAG)
            .var_size_field("root", &self.root)
            .finalize()
    }
}

#[derive(Deserialize)]
struct RawNmtRoot {
    #[serde(default, deserialize_with = "present")]
    root: Option<Bytes>,
}

impl TryFrom<RawNmtRoot> for NmtRoot {
    type Error = DecodeError;

    fn try_from(raw: RawNmtRoot) -> Result<Self, Self::Error> {
        Ok(NmtRoot {
            root: require(raw.root, "root", "NmtRoot")?,
        })
    }
}
