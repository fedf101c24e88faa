//! Address normalization into Starknet felt form.
//!
//! Source addresses are hex strings of any width and case. The claim
//! contract compares against the felt value, so every address is reduced to
//! the minimal lowercase hex of its integer value. Values that do not fit
//! the field are rejected instead of being reduced modulo the prime.

use crate::utils::config::STARK_FIELD_PRIME;
use crate::utils::error::AddressError;
use log::debug;
use primitive_types::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A 256-bit value holds at most 64 hex digits
const MAX_HEX_DIGITS: usize = 64;

/// Canonical felt representation of an address
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedAddress(U256);

impl NormalizedAddress {
    /// Integer value of the address
    pub fn value(&self) -> U256 {
        self.0
    }

    /// `0x` followed by the minimal lowercase hex digits
    pub fn to_hex(&self) -> String {
        crate::leaf::encoding::felt_hex(&self.0)
    }
}

impl fmt::Display for NormalizedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for NormalizedAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize_address(s)
    }
}

impl Serialize for NormalizedAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for NormalizedAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        normalize_address(&raw).map_err(serde::de::Error::custom)
    }
}

/// Normalize a hex address to its felt form
///
/// **Public** - main entry point for address handling
///
/// # Arguments
/// * `raw` - Address with or without `0x` prefix, any case
///
/// # Errors
/// * `AddressError::Invalid` - empty input or a non-hex character
/// * `AddressError::OutOfRange` - value is not below the field prime
pub fn normalize_address(raw: &str) -> Result<NormalizedAddress, AddressError> {
    let digits = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .unwrap_or(raw);

    if digits.is_empty() {
        return Err(AddressError::Invalid {
            address: raw.to_string(),
            reason: "no hex digits".to_string(),
        });
    }

    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(AddressError::Invalid {
            address: raw.to_string(),
            reason: format!("non-hex character {:?}", bad),
        });
    }

    let significant = digits.trim_start_matches('0');
    if significant.len() > MAX_HEX_DIGITS {
        return Err(AddressError::OutOfRange(raw.to_string()));
    }

    let value = parse_hex_digits(raw, significant)?;
    if value >= STARK_FIELD_PRIME {
        return Err(AddressError::OutOfRange(raw.to_string()));
    }

    let normalized = NormalizedAddress(value);
    debug!("Normalized address {} -> {}", raw, normalized);
    Ok(normalized)
}

/// Parse validated hex digits into a U256
///
/// **Private** - callers guarantee at most 64 hex digits
fn parse_hex_digits(raw: &str, digits: &str) -> Result<U256, AddressError> {
    if digits.is_empty() {
        return Ok(U256::zero());
    }
    U256::from_str_radix(digits, 16).map_err(|e| AddressError::Invalid {
        address: raw.to_string(),
        reason: e.to_string(),
    })
}
