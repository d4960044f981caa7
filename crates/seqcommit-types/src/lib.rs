//! Committable sequencer records.
//!
//! This crate provides:
//! - [`Header`] and [`NmtRoot`], which commit through domain-tagged builders
//!   (`"BLOCK"` and `"NMTROOT"`)
//! - strict JSON decoding that rejects records with absent mandatory keys
//! - [`SequencerBlock`] and [`SeqTransaction`], the surrounding block shapes
//!
//! Core invariants:
//! - A header commits to its transactions root through the root's own
//!   commitment, never through the raw root bytes
//! - Field order inside each `commit` is part of the protocol
//!
#![deny(missing_docs)]

/// Sequencer blocks, transactions and identifiers.
pub mod block;
/// Block header.
pub mod header;
/// Namespaced Merkle tree root.
pub mod nmt_root;

pub use block::{Id, SeqTransaction, SequencerBlock, ID_LEN};
pub use header::Header;
pub use nmt_root::NmtRoot;
pub use seqcommit_canonical::{Commitment, Committable, DecodeError};
