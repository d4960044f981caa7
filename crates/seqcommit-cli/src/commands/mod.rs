//! Subcommand implementations.

use clap::ValueEnum;

pub mod canonicalize;
pub mod commit;
pub mod u256;

/// Records that have a commitment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CommitKind {
    /// Block header (tag `BLOCK`).
    Header,
    /// Namespaced Merkle tree root (tag `NMTROOT`).
    NmtRoot,
}

/// Records accepted by `canonicalize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordKind {
    /// Block header.
    Header,
    /// Namespaced Merkle tree root.
    NmtRoot,
    /// Full sequencer block.
    Block,
}
