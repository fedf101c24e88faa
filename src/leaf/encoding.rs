//! Felt encoding for leaf preimages and configuration calldata.
//!
//! Every value the claim contract hashes is a field element. Numbers are
//! encoded by value, tags as Cairo short strings, and u256 values as a
//! (low, high) pair of 128-bit halves.

use crate::utils::config::{MAX_SHORT_STRING_LEN, STARK_FIELD_PRIME};
use crate::utils::error::LeafError;
use primitive_types::U256;

/// `0x`-prefixed minimal lowercase hex of a felt
pub fn felt_hex(value: &U256) -> String {
    format!("0x{:x}", value)
}

/// Encode a decimal amount as a single felt
///
/// # Errors
/// * `LeafError::AmountOutOfRange` - not a decimal integer below the field prime
pub fn decimal_to_felt(amount: &str) -> Result<U256, LeafError> {
    if amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LeafError::AmountOutOfRange(amount.to_string()));
    }

    let value =
        U256::from_dec_str(amount).map_err(|_| LeafError::AmountOutOfRange(amount.to_string()))?;

    if value >= STARK_FIELD_PRIME {
        return Err(LeafError::AmountOutOfRange(amount.to_string()));
    }

    Ok(value)
}

/// Encode ASCII text the way Cairo stores a `felt252` short string
///
/// # Errors
/// * `LeafError::InvalidShortString` - non-ASCII input or longer than 31 bytes
pub fn encode_short_string(text: &str) -> Result<U256, LeafError> {
    if !text.is_ascii() || text.len() > MAX_SHORT_STRING_LEN {
        return Err(LeafError::InvalidShortString(text.to_string()));
    }

    Ok(U256::from_big_endian(text.as_bytes()))
}

/// Split a u256 into its (low, high) 128-bit halves
pub fn split_u256(value: U256) -> (U256, U256) {
    let low = U256::from(value.low_u128());
    let high = value >> 128usize;
    (low, high)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_felt_hex_is_minimal() {
        assert_eq!(felt_hex(&U256::zero()), "0x0");
        assert_eq!(felt_hex(&U256::from(255u64)), "0xff");
    }

    #[test]
    fn test_decimal_to_felt() {
        let value = decimal_to_felt("150000000000000000000").unwrap();
        assert_eq!(felt_hex(&value), "0x821ab0d4414980000");
        assert!(decimal_to_felt("").is_err());
        assert!(decimal_to_felt("12x").is_err());
    }

    #[test]
    fn test_amount_at_prime_is_rejected() {
        let prime = STARK_FIELD_PRIME.to_string();
        assert!(matches!(
            decimal_to_felt(&prime),
            Err(LeafError::AmountOutOfRange(_))
        ));
    }

    #[test]
    fn test_short_string_encoding() {
        assert_eq!(felt_hex(&encode_short_string("ERC_20").unwrap()), "0x4552435f3230");
        assert_eq!(felt_hex(&encode_short_string("MYSTERY").unwrap()), "0x4d595354455259");
        assert_eq!(encode_short_string("").unwrap(), U256::zero());
    }

    #[test]
    fn test_short_string_limits() {
        assert!(encode_short_string(&"A".repeat(31)).is_ok());
        assert!(matches!(
            encode_short_string(&"A".repeat(32)),
            Err(LeafError::InvalidShortString(_))
        ));
        assert!(encode_short_string("LÖRDS").is_err());
    }

    #[test]
    fn test_split_u256() {
        let value = decimal_to_felt("3000000000000000000000").unwrap();
        let (low, high) = split_u256(value);
        assert_eq!(low, value);
        assert_eq!(high, U256::zero());

        let big = (U256::from(5u64) << 128usize) + U256::from(7u64);
        assert_eq!(split_u256(big), (U256::from(7u64), U256::from(5u64)));
    }
}
