//! Strict decoding helpers.
//!
//! Records decode into a shadow struct whose fields are all optional slots,
//! then convert with [`require`]. A slot is `None` only when the key was
//! absent; a key present with JSON `null` fills the slot with the type's
//! default value.
//!
//! ```rust
//! use seqcommit_canonical::strict::{present, require};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct RawPoint {
//!     #[serde(default, deserialize_with = "present")]
//!     x: Option<u64>,
//! }
//!
//! let raw: RawPoint = serde_json::from_str("{}")?;
//! let err = require(raw.x, "x", "Point").unwrap_err();
//! assert_eq!(err.to_string(), "field x of type Point is required");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::error::DecodeError;

/// Deserializes a key that is present, mapping JSON `null` to `T::default()`.
///
/// Pair with `#[serde(default)]` so that an absent key leaves `None`.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Some(Option::<T>::deserialize(deserializer)?.unwrap_or_default()))
}

/// Unwraps a decoded slot, failing with [`DecodeError::MissingField`] when absent.
pub fn require<T>(
    slot: Option<T>,
    field: &'static str,
    record: &'static str,
) -> Result<T, DecodeError> {
    slot.ok_or_else(|| {
        debug!(field, record, "rejecting record with missing field");
        DecodeError::MissingField { field, record }
    })
}
