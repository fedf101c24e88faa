//! Input schema and parsed descriptor types.
//!
//! The card list arrives as a YAML document with a `cards` key; each card
//! names a recipient and the reward descriptor ("front") it won.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::config::{ERC20_CONTRACT_TAG, MYSTERY_CONTRACT_TAG};

/// Top-level card list document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardsFile {
    /// Claimable entries, in leaf order
    #[serde(default)]
    pub cards: Vec<RawEntry>,
}

/// One claimable recipient as read from the card list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    /// Source-chain hex address
    pub address: String,

    /// Reward descriptor, e.g. `LORDS_75000000000000000000`
    pub front: String,
}

impl RawEntry {
    pub fn new(address: impl Into<String>, front: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            front: front.into(),
        }
    }
}

/// Reward category, which selects the claim entrypoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    #[default]
    Erc20,
    Mystery,
}

impl ItemType {
    /// Lowercase category name used in leaves and statistics
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Erc20 => "erc20",
            Self::Mystery => "mystery",
        }
    }

    /// Tag the claim contract stores for this category
    pub fn contract_tag(&self) -> &'static str {
        match self {
            Self::Erc20 => ERC20_CONTRACT_TAG,
            Self::Mystery => MYSTERY_CONTRACT_TAG,
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured form of a reward descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDescriptor {
    pub item_type: ItemType,

    /// Token symbol as written in the descriptor; `None` for the mystery reward
    pub token_symbol: Option<String>,

    /// Exact decimal amount from the descriptor
    pub amount: String,
}

impl ParsedDescriptor {
    pub fn mystery() -> Self {
        Self {
            item_type: ItemType::Mystery,
            token_symbol: None,
            amount: "0".to_string(),
        }
    }

    /// Rebuild the descriptor string this value was parsed from
    pub fn to_front(&self, mystery_literal: &str) -> String {
        match &self.token_symbol {
            Some(symbol) => format!(
                "{}{}{}",
                symbol,
                crate::utils::config::DESCRIPTOR_SEPARATOR,
                self.amount
            ),
            None => mystery_literal.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_type_names() {
        assert_eq!(ItemType::Erc20.as_str(), "erc20");
        assert_eq!(ItemType::Mystery.to_string(), "mystery");
        assert_eq!(ItemType::Erc20.contract_tag(), "ERC_20");
        assert_eq!(ItemType::Mystery.contract_tag(), "MYSTERY");
    }

    #[test]
    fn test_cards_file_missing_key_is_empty() {
        let file: CardsFile = serde_yaml::from_str("other: 1\n").unwrap();
        assert!(file.cards.is_empty());
    }
}
