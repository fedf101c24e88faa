//! Mystery reward pool configuration.
//!
//! The claim contract resolves a mystery leaf to one of a fixed list of
//! token rewards. The list is configured on-chain through
//! `set_all_mystery_tokens(Array<MysteryTokenConfig>)` or one slot at a time
//! through `set_mystery_token_config(index, MysteryTokenConfig)`; this module
//! compiles that calldata offline. Submitting it is left to the operator's
//! wallet tooling.

use crate::leaf::encoding::{felt_hex, split_u256};
use crate::parser::address::{normalize_address, NormalizedAddress};
use crate::utils::error::ConfigError;
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Pool slot as written in the config file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MysteryPoolFile {
    pub name: String,
    pub token_address: String,

    /// Decimal amount in base units
    pub amount: String,
}

/// Validated pool slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MysteryPoolEntry {
    pub name: String,
    pub token_address: NormalizedAddress,
    pub amount: U256,
}

impl MysteryPoolEntry {
    /// Validate one slot from the config file
    pub fn from_file(raw: &MysteryPoolFile) -> Result<Self, ConfigError> {
        let token_address = normalize_address(&raw.token_address).map_err(|source| {
            ConfigError::InvalidTokenAddress {
                symbol: raw.name.clone(),
                source,
            }
        })?;

        let invalid_amount = || ConfigError::InvalidPoolAmount {
            name: raw.name.clone(),
            amount: raw.amount.clone(),
        };
        if raw.amount.is_empty() || !raw.amount.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid_amount());
        }
        let amount = U256::from_dec_str(&raw.amount).map_err(|_| invalid_amount())?;

        Ok(Self {
            name: raw.name.clone(),
            token_address,
            amount,
        })
    }

    /// `MysteryTokenConfig { token_address, amount: u256 }` as felts
    fn push_struct_felts(&self, out: &mut Vec<String>) {
        let (low, high) = split_u256(self.amount);
        out.push(self.token_address.to_hex());
        out.push(felt_hex(&low));
        out.push(felt_hex(&high));
    }
}

/// Calldata for `set_all_mystery_tokens`
///
/// Cairo arrays are encoded as their length followed by each element.
pub fn compile_pool_calldata(pool: &[MysteryPoolEntry]) -> Vec<String> {
    let mut out = Vec::with_capacity(1 + pool.len() * 3);
    out.push(felt_hex(&U256::from(pool.len())));
    for entry in pool {
        entry.push_struct_felts(&mut out);
    }
    out
}

/// Calldata for `set_mystery_token_config` on a single slot
pub fn compile_slot_calldata(index: usize, entry: &MysteryPoolEntry) -> Vec<String> {
    let mut out = vec![felt_hex(&U256::from(index))];
    entry.push_struct_felts(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn credits_slot() -> MysteryPoolFile {
        MysteryPoolFile {
            name: "CREDITS".to_string(),
            token_address: "0x00ABC".to_string(),
            amount: "150000000000000000000".to_string(),
        }
    }

    #[test]
    fn test_pool_entry_validation() {
        let entry = MysteryPoolEntry::from_file(&credits_slot()).unwrap();
        assert_eq!(entry.token_address.to_hex(), "0xabc");
        assert_eq!(entry.amount, U256::from_dec_str("150000000000000000000").unwrap());
    }

    #[test]
    fn test_pool_entry_rejects_bad_amount() {
        let mut raw = credits_slot();
        raw.amount = "1.5e20".to_string();
        assert!(matches!(
            MysteryPoolEntry::from_file(&raw),
            Err(ConfigError::InvalidPoolAmount { .. })
        ));
    }

    #[test]
    fn test_pool_entry_rejects_bad_address() {
        let mut raw = credits_slot();
        raw.token_address = String::new();
        assert!(matches!(
            MysteryPoolEntry::from_file(&raw),
            Err(ConfigError::InvalidTokenAddress { .. })
        ));
    }

    #[test]
    fn test_compile_pool_calldata() {
        let entry = MysteryPoolEntry::from_file(&credits_slot()).unwrap();
        let calldata = compile_pool_calldata(&[entry.clone(), entry]);

        assert_eq!(
            calldata,
            vec![
                "0x2", "0xabc", "0x821ab0d4414980000", "0x0", "0xabc", "0x821ab0d4414980000",
                "0x0",
            ]
        );
    }

    #[test]
    fn test_compile_slot_calldata() {
        let entry = MysteryPoolEntry::from_file(&credits_slot()).unwrap();
        assert_eq!(
            compile_slot_calldata(3, &entry),
            vec!["0x3", "0xabc", "0x821ab0d4414980000", "0x0"]
        );
    }
}
