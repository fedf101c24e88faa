//! Leaf layouts accepted by the claim contract.
//!
//! Each deployment verifies exactly one layout, so the layout is chosen once
//! per run and applies to every leaf in the tree.

use crate::parser::schema::{ItemType, ParsedDescriptor};
use crate::utils::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeafLayout {
    /// `item_type` is the token symbol; the contract looks the token address
    /// up in its own configuration
    SymbolQualified,

    /// `item_type` is the category and the token address travels in the leaf
    TypedTokenAddress,
}

impl LeafLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SymbolQualified => "symbol_qualified",
            Self::TypedTokenAddress => "typed_token_address",
        }
    }

    /// Whether leaves carry a `token_address` field
    pub fn embeds_token_address(&self) -> bool {
        matches!(self, Self::TypedTokenAddress)
    }

    /// Value written to the leaf's `item_type` field
    pub fn item_type(&self, descriptor: &ParsedDescriptor) -> String {
        match (self, &descriptor.token_symbol) {
            (Self::SymbolQualified, Some(symbol)) if descriptor.item_type == ItemType::Erc20 => {
                symbol.to_lowercase()
            }
            _ => descriptor.item_type.as_str().to_string(),
        }
    }

    /// Short string the contract hashes in place of the item type
    pub fn contract_tag(&self, descriptor: &ParsedDescriptor) -> String {
        match (self, &descriptor.token_symbol) {
            (Self::SymbolQualified, Some(symbol)) if descriptor.item_type == ItemType::Erc20 => {
                symbol.to_uppercase()
            }
            _ => descriptor.item_type.contract_tag().to_string(),
        }
    }
}

impl fmt::Display for LeafLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeafLayout {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "symbol_qualified" | "symbol" => Ok(Self::SymbolQualified),
            "typed_token_address" | "typed" => Ok(Self::TypedTokenAddress),
            _ => Err(ConfigError::UnknownLayout(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lords() -> ParsedDescriptor {
        ParsedDescriptor {
            item_type: ItemType::Erc20,
            token_symbol: Some("Lords".to_string()),
            amount: "75".to_string(),
        }
    }

    #[test]
    fn test_symbol_qualified_uses_symbol() {
        let layout = LeafLayout::SymbolQualified;
        assert_eq!(layout.item_type(&lords()), "lords");
        assert_eq!(layout.contract_tag(&lords()), "LORDS");
        assert!(!layout.embeds_token_address());
    }

    #[test]
    fn test_typed_layout_uses_category() {
        let layout = LeafLayout::TypedTokenAddress;
        assert_eq!(layout.item_type(&lords()), "erc20");
        assert_eq!(layout.contract_tag(&lords()), "ERC_20");
        assert!(layout.embeds_token_address());
    }

    #[test]
    fn test_mystery_is_same_in_both_layouts() {
        let mystery = ParsedDescriptor::mystery();
        for layout in [LeafLayout::SymbolQualified, LeafLayout::TypedTokenAddress] {
            assert_eq!(layout.item_type(&mystery), "mystery");
            assert_eq!(layout.contract_tag(&mystery), "MYSTERY");
        }
    }

    #[test]
    fn test_parse_layout_names() {
        assert_eq!(
            "symbol_qualified".parse::<LeafLayout>().unwrap(),
            LeafLayout::SymbolQualified
        );
        assert_eq!(
            "typed-token-address".parse::<LeafLayout>().unwrap(),
            LeafLayout::TypedTokenAddress
        );
        assert!("amount_only".parse::<LeafLayout>().is_err());
    }
}
