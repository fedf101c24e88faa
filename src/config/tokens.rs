//! Symbol table for reward descriptors.

use crate::parser::address::{normalize_address, NormalizedAddress};
use crate::parser::schema::ItemType;
use crate::utils::config::{BUILTIN_TOKENS, DEFAULT_MYSTERY_LITERAL};
use std::collections::BTreeMap;

/// What the pipeline knows about one token symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSpec {
    pub category: ItemType,

    /// Deployed token contract, required by the typed leaf layout
    pub address: Option<NormalizedAddress>,
}

/// Symbol table and reserved literal for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTable {
    mystery_literal: String,
    tokens: BTreeMap<String, TokenSpec>,
}

impl TokenTable {
    /// Empty table with the given mystery literal
    pub fn new(mystery_literal: impl Into<String>) -> Self {
        Self {
            mystery_literal: mystery_literal.into(),
            tokens: BTreeMap::new(),
        }
    }

    /// Table shipped with the tool
    pub fn builtin() -> Self {
        let mut table = Self::new(DEFAULT_MYSTERY_LITERAL);
        for (symbol, address) in BUILTIN_TOKENS {
            // Built-in addresses are constants checked by the unit tests below
            let address = address.and_then(|raw| normalize_address(raw).ok());
            table.insert(*symbol, ItemType::Erc20, address);
        }
        table
    }

    /// Same table with a different reserved literal
    pub fn with_mystery_literal(mut self, mystery_literal: impl Into<String>) -> Self {
        self.mystery_literal = mystery_literal.into();
        self
    }

    pub fn insert(
        &mut self,
        symbol: impl Into<String>,
        category: ItemType,
        address: Option<NormalizedAddress>,
    ) {
        self.tokens
            .insert(symbol.into(), TokenSpec { category, address });
    }

    pub fn get(&self, symbol: &str) -> Option<&TokenSpec> {
        self.tokens.get(symbol)
    }

    pub fn mystery_literal(&self) -> &str {
        &self.mystery_literal
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.tokens.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for TokenTable {
    fn default() -> Self {
        Self::builtin()
    }
}
