//! Commitment computation with domain-separated hashing.
//!
//! A commitment is `sha256(stream)` where the stream is built field by field:
//!
//! ```text
//! stream := PREFIX || u64be(len(tag)) || tag || field*
//! field  := u64be(len(name)) || name || kind || payload
//! ```
//!
//! Field names and kind bytes are part of the hashed stream, so two records
//! only share a commitment when their tags, names, kinds and values all match
//! in the same order. The order of builder calls is part of the protocol.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest as Sha2Digest, Sha256};
use tracing::trace;

use crate::error::DecodeError;
use crate::u256::U256;

/// Protocol prefix written before every domain tag: `b"seqcommit:commitment:v1\0"`.
pub const COMMITMENT_DOMAIN_SEPARATOR: &[u8] = b"seqcommit:commitment:v1\0";

/// Size of a finalized commitment, in bytes.
pub const COMMITMENT_SIZE: usize = 32;

/// Fixed-size SHA-256 digest produced by [`RawCommitmentBuilder::finalize`].
///
/// Text and JSON form is 64 lowercase hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Commitment([u8; COMMITMENT_SIZE]);

impl Commitment {
    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; COMMITMENT_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for Commitment {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for Commitment {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut buf = [0u8; COMMITMENT_SIZE];
        hex::decode_to_slice(s, &mut buf).map_err(|_| DecodeError::PatternMismatch {
            field: "commitment",
            value: s.to_string(),
        })?;
        Ok(Commitment(buf))
    }
}

impl Serialize for Commitment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Commitment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Records that project themselves into a commitment.
pub trait Committable {
    /// Domain tag opened by [`Committable::commit`].
    const TAG: &'static str;

    /// Computes the commitment of this record.
    fn commit(&self) -> Commitment;
}

/// Encoded value of a single builder field.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    /// 8-byte big-endian integer.
    U64(u64),
    /// 32-byte big-endian integer.
    U256(&'a U256),
    /// Length-prefixed byte string.
    VarSize(&'a [u8]),
    /// Digest of a nested commitment.
    Nested(Commitment),
}

impl FieldValue<'_> {
    /// Kind byte written between the field name and its payload.
    pub fn kind(&self) -> u8 {
        match self {
            FieldValue::U64(_) => 0x01,
            FieldValue::U256(_) => 0x02,
            FieldValue::VarSize(_) => 0x03,
            FieldValue::Nested(_) => 0x04,
        }
    }
}

/// Accumulates named fields under a domain tag and hashes them once.
///
/// Every method consumes the builder; [`RawCommitmentBuilder::finalize`]
/// leaves nothing behind to append to.
#[derive(Debug, Clone)]
pub struct RawCommitmentBuilder {
    tag: String,
    buffer: Vec<u8>,
    field_count: usize,
}

impl RawCommitmentBuilder {
    /// Opens a builder for the given domain tag.
    pub fn new(tag: &str) -> Self {
        let mut buffer = Vec::with_capacity(COMMITMENT_DOMAIN_SEPARATOR.len() + 8 + tag.len());
        buffer.extend_from_slice(COMMITMENT_DOMAIN_SEPARATOR);
        write_prefixed(&mut buffer, tag.as_bytes());
        Self {
            tag: tag.to_string(),
            buffer,
            field_count: 0,
        }
    }

    /// Appends an unsigned 64-bit field.
    pub fn u64_field(self, name: &str, value: u64) -> Self {
        self.append(name, FieldValue::U64(value))
    }

    /// Appends a 256-bit integer field in fixed-width form.
    pub fn u256_field(self, name: &str, value: &U256) -> Self {
        self.append(name, FieldValue::U256(value))
    }

    /// Appends a variable-size byte field.
    pub fn var_size_field(self, name: &str, bytes: &[u8]) -> Self {
        self.append(name, FieldValue::VarSize(bytes))
    }

    /// Appends the digest of a nested commitment.
    pub fn field(self, name: &str, commitment: Commitment) -> Self {
        self.append(name, FieldValue::Nested(commitment))
    }

    /// Appends a field of any kind.
    pub fn append(mut self, name: &str, value: FieldValue<'_>) -> Self {
        write_prefixed(&mut self.buffer, name.as_bytes());
        self.buffer.push(value.kind());
        match value {
            FieldValue::U64(n) => self.buffer.extend_from_slice(&n.to_be_bytes()),
            FieldValue::U256(n) => self.buffer.extend_from_slice(&n.to_be_bytes()),
            FieldValue::VarSize(bytes) => write_prefixed(&mut self.buffer, bytes),
            FieldValue::Nested(commitment) => self.buffer.extend_from_slice(commitment.as_bytes()),
        }
        self.field_count += 1;
        self
    }

    /// Domain tag this builder was opened with.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Bytes accumulated so far, prefix and tag included.
    pub fn stream(&self) -> &[u8] {
        &self.buffer
    }

    /// Hashes the assembled stream into a [`Commitment`].
    pub fn finalize(self) -> Commitment {
        let mut hasher = Sha256::new();
        hasher.update(&self.buffer);
        let digest = Commitment(hasher.finalize().into());
        trace!(
            tag = %self.tag,
            fields = self.field_count,
            stream_len = self.buffer.len(),
            commitment = %digest,
            "finalized commitment"
        );
        digest
    }
}

fn write_prefixed(buffer: &mut Vec<u8>, bytes: &[u8]) {
    buffer.extend_from_slice(&(bytes.len() as u64).to_be_bytes());
    buffer.extend_from_slice(bytes);
}
