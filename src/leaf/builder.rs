//! Leaf record construction.
//!
//! Combines a normalized recipient, its position, and its parsed reward into
//! the leaf shape of the active layout, and derives the felt preimage the
//! claim contract verifies against.

use super::encoding::{decimal_to_felt, encode_short_string, felt_hex};
use super::layout::LeafLayout;
use super::record::{LeafEntry, LeafRecord};
use crate::config::TokenTable;
use crate::parser::address::NormalizedAddress;
use crate::parser::schema::{ItemType, ParsedDescriptor};
use crate::utils::error::LeafError;
use log::debug;
use primitive_types::U256;

/// Builds every leaf of one dataset with a single layout
///
/// **Public** - constructed once per run by the dataset assembler
#[derive(Debug, Clone)]
pub struct LeafBuilder<'a> {
    layout: LeafLayout,
    tokens: &'a TokenTable,
}

impl<'a> LeafBuilder<'a> {
    pub fn new(layout: LeafLayout, tokens: &'a TokenTable) -> Self {
        Self { layout, tokens }
    }

    pub fn layout(&self) -> LeafLayout {
        self.layout
    }

    pub fn tokens(&self) -> &'a TokenTable {
        self.tokens
    }

    /// Build one leaf and its preimage
    ///
    /// # Arguments
    /// * `recipient` - Normalized recipient address
    /// * `index` - Position of the entry in the card list
    /// * `descriptor` - Parsed reward
    ///
    /// # Errors
    /// * `LeafError::MissingTokenAddress` - typed layout and no address configured
    /// * `LeafError::AmountOutOfRange` - amount does not fit a felt
    /// * `LeafError::InvalidShortString` - tag cannot be a Cairo short string
    pub fn build(
        &self,
        recipient: NormalizedAddress,
        index: u64,
        descriptor: &ParsedDescriptor,
    ) -> Result<LeafEntry, LeafError> {
        let token_address = if self.layout.embeds_token_address() {
            Some(self.resolve_token_address(descriptor)?)
        } else {
            None
        };

        let amount = decimal_to_felt(&descriptor.amount)?;
        let tag = encode_short_string(&self.layout.contract_tag(descriptor))?;

        // recipient, index, amount, item tag, then the token address if embedded
        let mut preimage = vec![recipient.value(), U256::from(index), amount, tag];
        if let Some(address) = &token_address {
            preimage.push(address.value());
        }

        let record = LeafRecord {
            recipient: recipient.to_hex(),
            index,
            amount: descriptor.amount.clone(),
            item_type: self.layout.item_type(descriptor),
            token_address: token_address.map(|a| a.to_hex()),
        };

        debug!(
            "Leaf {}: {} {} {}",
            record.index, record.recipient, record.item_type, record.amount
        );

        Ok(LeafEntry {
            record,
            preimage: preimage.iter().map(felt_hex).collect(),
        })
    }

    /// Token contract for the typed layout; the mystery reward uses zero
    ///
    /// **Private** - internal helper for build
    fn resolve_token_address(
        &self,
        descriptor: &ParsedDescriptor,
    ) -> Result<NormalizedAddress, LeafError> {
        let symbol = match (&descriptor.item_type, &descriptor.token_symbol) {
            (ItemType::Mystery, _) => return Ok(NormalizedAddress::default()),
            (_, Some(symbol)) => symbol,
            (_, None) => return Err(LeafError::MissingTokenAddress(String::new())),
        };

        self.tokens
            .get(symbol)
            .and_then(|spec| spec.address)
            .ok_or_else(|| LeafError::MissingTokenAddress(symbol.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::address::normalize_address;
    use crate::utils::error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn credits() -> ParsedDescriptor {
        ParsedDescriptor {
            item_type: ItemType::Erc20,
            token_symbol: Some("CREDITS".to_string()),
            amount: "150000000000000000000".to_string(),
        }
    }

    fn lords() -> ParsedDescriptor {
        ParsedDescriptor {
            item_type: ItemType::Erc20,
            token_symbol: Some("LORDS".to_string()),
            amount: "75000000000000000000".to_string(),
        }
    }

    #[test]
    fn test_symbol_qualified_leaf() {
        let table = TokenTable::builtin();
        let builder = LeafBuilder::new(LeafLayout::SymbolQualified, &table);
        let recipient = normalize_address("0xAB").unwrap();

        let leaf = builder.build(recipient, 0, &credits()).unwrap();

        assert_eq!(
            leaf.record,
            LeafRecord {
                recipient: "0xab".to_string(),
                index: 0,
                amount: "150000000000000000000".to_string(),
                item_type: "credits".to_string(),
                token_address: None,
            }
        );
        assert_eq!(
            leaf.preimage,
            vec![
                "0xab".to_string(),
                "0x0".to_string(),
                "0x821ab0d4414980000".to_string(),
                "0x43524544495453".to_string(),
            ]
        );
    }

    #[test]
    fn test_typed_leaf_embeds_token_address() {
        let table = TokenTable::builtin();
        let builder = LeafBuilder::new(LeafLayout::TypedTokenAddress, &table);
        let recipient = normalize_address("0xCD").unwrap();

        let leaf = builder.build(recipient, 3, &lords()).unwrap();
        let lords_address = "0x124aeb495b947201f5fac96fd1138e326ad86195b98df6dec9009158a533b49";

        assert_eq!(leaf.record.item_type, "erc20");
        assert_eq!(leaf.record.token_address.as_deref(), Some(lords_address));
        assert_eq!(leaf.preimage.len(), 5);
        assert_eq!(leaf.preimage[1], "0x3");
        assert_eq!(leaf.preimage[3], "0x4552435f3230");
        assert_eq!(leaf.preimage[4], lords_address);
    }

    #[test]
    fn test_typed_mystery_leaf_uses_zero_address() {
        let table = TokenTable::builtin();
        let builder = LeafBuilder::new(LeafLayout::TypedTokenAddress, &table);
        let recipient = normalize_address("0x1").unwrap();

        let leaf = builder
            .build(recipient, 1, &ParsedDescriptor::mystery())
            .unwrap();

        assert_eq!(leaf.record.item_type, "mystery");
        assert_eq!(leaf.record.amount, "0");
        assert_eq!(leaf.record.token_address.as_deref(), Some("0x0"));
    }

    #[test]
    fn test_typed_leaf_without_address_fails() {
        let table = TokenTable::builtin();
        let builder = LeafBuilder::new(LeafLayout::TypedTokenAddress, &table);
        let recipient = normalize_address("0x1").unwrap();

        let err = builder.build(recipient, 0, &credits()).unwrap_err();
        assert_eq!(err, LeafError::MissingTokenAddress("CREDITS".to_string()));
        assert_eq!(err.kind(), ErrorKind::MissingTokenAddress);
    }

    #[test]
    fn test_serialized_field_order() {
        let table = TokenTable::builtin();
        let builder = LeafBuilder::new(LeafLayout::SymbolQualified, &table);
        let leaf = builder
            .build(normalize_address("0xAB").unwrap(), 0, &credits())
            .unwrap();

        let json = serde_json::to_string(&leaf).unwrap();
        assert!(json.starts_with(
            r#"{"recipient":"0xab","index":0,"amount":"150000000000000000000","item_type":"credits","preimage":["#
        ));
    }
}
