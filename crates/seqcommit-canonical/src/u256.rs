use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DecodeError, EncodeError};

/// Width of the fixed commitment encoding, in bytes.
pub const U256_WIDTH: usize = 32;

fn hex_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^0x[0-9a-fA-F]+$").expect("invalid regex"))
}

/// Non-negative integer bounded to 256 bits.
///
/// Text form is `0x` followed by minimal lowercase hex (`0x0` for zero).
/// Parsing is lenient about case and leading zeros; printing is canonical.
/// Values are stored big-endian, so the derived ordering is numeric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U256([u8; U256_WIDTH]);

impl U256 {
    /// The zero value.
    pub const ZERO: U256 = U256([0u8; U256_WIDTH]);

    /// The largest representable value, `2^256 - 1`.
    pub const MAX: U256 = U256([0xff; U256_WIDTH]);

    /// Returns zero.
    pub fn new() -> Self {
        Self::ZERO
    }

    /// Replaces the value with a big-endian magnitude of any length.
    ///
    /// Leading zero bytes are ignored. Magnitudes that need more than 256
    /// bits are rejected and leave the value untouched.
    pub fn set_big_endian(&mut self, magnitude: &[u8]) -> Result<&mut Self, DecodeError> {
        let start = magnitude
            .iter()
            .position(|b| *b != 0)
            .unwrap_or(magnitude.len());
        let significant = &magnitude[start..];
        if significant.len() > U256_WIDTH {
            return Err(DecodeError::OutOfRange {
                field: "u256",
                value: format!("0x{}", hex::encode(significant)),
            });
        }
        let mut buf = [0u8; U256_WIDTH];
        buf[U256_WIDTH - significant.len()..].copy_from_slice(significant);
        self.0 = buf;
        Ok(self)
    }

    /// Replaces the value with a native 128-bit integer.
    pub fn set_u128(&mut self, n: u128) -> &mut Self {
        let mut buf = [0u8; U256_WIDTH];
        buf[U256_WIDTH - 16..].copy_from_slice(&n.to_be_bytes());
        self.0 = buf;
        self
    }

    /// Replaces the value with a native 64-bit integer.
    pub fn set_uint64(&mut self, n: u64) -> &mut Self {
        let mut buf = [0u8; U256_WIDTH];
        buf[U256_WIDTH - 8..].copy_from_slice(&n.to_be_bytes());
        self.0 = buf;
        self
    }

    /// Replaces the value with 32 bytes read as a big-endian integer.
    pub fn set_bytes(&mut self, buf: [u8; U256_WIDTH]) -> &mut Self {
        self.0 = buf;
        self
    }

    /// Fixed-width big-endian form used inside commitments.
    pub fn to_be_bytes(&self) -> [u8; U256_WIDTH] {
        self.0
    }

    /// Returns `true` for the zero value.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; U256_WIDTH]
    }

    /// Encodes the value as a JSON string literal, e.g. `"0xff"`.
    pub fn to_json(&self) -> Result<String, EncodeError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a JSON string literal such as `"0xFF"`.
    ///
    /// Non-string scalars fail with [`DecodeError::Json`].
    pub fn from_json(text: &str) -> Result<Self, DecodeError> {
        let s: String = serde_json::from_str(text)?;
        s.parse()
    }

    /// Minimal lowercase hex digits without prefix.
    fn hex_digits(&self) -> String {
        let full = hex::encode(self.0);
        match full.trim_start_matches('0') {
            "" => "0".to_string(),
            digits => digits.to_string(),
        }
    }
}

impl FromStr for U256 {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !hex_pattern().is_match(s) {
            return Err(DecodeError::PatternMismatch {
                field: "u256",
                value: s.to_string(),
            });
        }
        let digits = s[2..].trim_start_matches('0');
        if digits.len() > U256_WIDTH * 2 {
            return Err(DecodeError::OutOfRange {
                field: "u256",
                value: s.to_string(),
            });
        }
        let padded = format!("{:0>width$}", digits, width = U256_WIDTH * 2);
        let mut buf = [0u8; U256_WIDTH];
        hex::decode_to_slice(&padded, &mut buf).map_err(|_| DecodeError::PatternMismatch {
            field: "u256",
            value: s.to_string(),
        })?;
        Ok(U256(buf))
    }
}

impl fmt::Display for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.hex_digits())
    }
}

impl fmt::LowerHex for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.hex_digits())
    }
}

impl From<u64> for U256 {
    fn from(n: u64) -> Self {
        let mut value = U256::ZERO;
        value.set_uint64(n);
        value
    }
}

impl From<u128> for U256 {
    fn from(n: u128) -> Self {
        let mut value = U256::ZERO;
        value.set_u128(n);
        value
    }
}

impl From<[u8; U256_WIDTH]> for U256 {
    fn from(buf: [u8; U256_WIDTH]) -> Self {
        U256(buf)
    }
}

impl Serialize for U256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for U256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
