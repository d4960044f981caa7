//! Canonical encoding primitives for sequencer commitments.
//!
//! Every byte that participates in a commitment is produced in this crate:
//! the bounded integer [`U256`], the opaque [`Bytes`] blob, and the
//! domain-separated [`RawCommitmentBuilder`]. Records elsewhere only decide
//! which fields to append and in what order.
//!
#![deny(missing_docs)]

/// Opaque byte blobs.
pub mod bytes;
/// Commitment builder and digest type.
pub mod commitment;
/// Error types for decoding and encoding.
pub mod error;
/// Strict decoding helpers that separate absent keys from zero values.
pub mod strict;
/// 256-bit canonical integer.
pub mod u256;

pub use bytes::Bytes;
pub use commitment::{
    Commitment, Committable, FieldValue, RawCommitmentBuilder, COMMITMENT_DOMAIN_SEPARATOR,
    COMMITMENT_SIZE,
};
pub use error::{DecodeError, EncodeError};
pub use u256::{U256, U256_WIDTH};
