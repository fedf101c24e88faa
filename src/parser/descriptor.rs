//! Reward descriptor parsing.
//!
//! Descriptors look like `LORDS_75000000000000000000`: a token symbol, a
//! separator, and a base-10 amount. One reserved literal stands for the
//! randomized reward and carries no amount.

use super::schema::ParsedDescriptor;
use crate::config::TokenTable;
use crate::utils::config::DESCRIPTOR_SEPARATOR;
use crate::utils::error::DescriptorError;
use log::debug;
use primitive_types::U256;

/// Parse a reward descriptor against the configured token table
///
/// **Public** - main entry point for descriptor parsing
///
/// # Arguments
/// * `front` - Raw descriptor string from the card list
/// * `table` - Symbol table and reserved mystery literal for this run
///
/// # Returns
/// Parsed descriptor with the exact decimal amount
///
/// # Errors
/// * `DescriptorError::Malformed` - empty, no separator, whitespace, or bad amount
/// * `DescriptorError::UnknownSymbol` - symbol missing from the table
pub fn parse_descriptor(
    front: &str,
    table: &TokenTable,
) -> Result<ParsedDescriptor, DescriptorError> {
    if front == table.mystery_literal() {
        return Ok(ParsedDescriptor::mystery());
    }

    let (symbol, amount) = split_descriptor(front)?;

    let spec = table
        .get(symbol)
        .ok_or_else(|| DescriptorError::UnknownSymbol(symbol.to_string()))?;

    debug!("Parsed descriptor {} as {} {}", front, spec.category, amount);

    Ok(ParsedDescriptor {
        item_type: spec.category,
        token_symbol: Some(symbol.to_string()),
        amount: amount.to_string(),
    })
}

/// Split `<SYMBOL>_<DIGITS>` on the last separator
///
/// Amounts never contain the separator, so everything before the last one
/// belongs to the symbol.
pub fn split_descriptor(front: &str) -> Result<(&str, &str), DescriptorError> {
    let malformed = |reason: &str| DescriptorError::Malformed {
        front: front.to_string(),
        reason: reason.to_string(),
    };

    if front.is_empty() {
        return Err(malformed("empty descriptor"));
    }

    if front.chars().any(char::is_whitespace) {
        return Err(malformed("descriptor contains whitespace"));
    }

    let (symbol, amount) = front
        .rsplit_once(DESCRIPTOR_SEPARATOR)
        .ok_or_else(|| malformed("missing separator"))?;

    if symbol.is_empty() {
        return Err(malformed("empty token symbol"));
    }

    validate_amount(amount).map_err(|reason| malformed(&reason))?;

    Ok((symbol, amount))
}

/// Check that an amount is a base-10 integer literal that fits 256 bits
///
/// **Private** - the amount string itself is kept verbatim
fn validate_amount(amount: &str) -> Result<(), String> {
    if amount.is_empty() {
        return Err("empty amount".to_string());
    }

    if !amount.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("amount '{}' is not a decimal integer", amount));
    }

    U256::from_dec_str(amount)
        .map(|_| ())
        .map_err(|_| format!("amount '{}' exceeds 256 bits", amount))
}
