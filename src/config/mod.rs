//! Drop configuration.
//!
//! Loads the per-deployment settings from TOML: the active leaf layout, the
//! mystery literal, the token table and the mystery reward pool.
//!
//! # Example
//! ```toml
//! layout = "typed_token_address"
//! mystery_literal = "MYSTERY_ASSET"
//!
//! [tokens.LORDS]
//! address = "0x0124aeb495b947201f5faC96fD1138E326AD86195B98df6DEc9009158A533B49"
//!
//! [[mystery_pool]]
//! name = "LORDS"
//! token_address = "0x0124aeb495b947201f5faC96fD1138E326AD86195B98df6DEc9009158A533B49"
//! amount = "75000000000000000000"
//! ```

mod mystery;
mod tokens;

pub use mystery::{compile_pool_calldata, compile_slot_calldata, MysteryPoolEntry, MysteryPoolFile};
pub use tokens::{TokenSpec, TokenTable};

use crate::leaf::encoding::encode_short_string;
use crate::leaf::layout::LeafLayout;
use crate::parser::address::normalize_address;
use crate::parser::schema::ItemType;
use crate::utils::config::{DEFAULT_MYSTERY_LITERAL, DESCRIPTOR_SEPARATOR};
use crate::utils::error::ConfigError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Config file as written on disk
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DropConfigFile {
    /// Leaf layout verified by the deployed claim contract
    #[serde(default)]
    pub layout: Option<LeafLayout>,

    /// Descriptor that marks the randomized reward
    #[serde(default)]
    pub mystery_literal: Option<String>,

    /// Replaces the built-in token table when present
    #[serde(default)]
    pub tokens: Option<BTreeMap<String, TokenFileEntry>>,

    #[serde(default)]
    pub mystery_pool: Vec<MysteryPoolFile>,
}

/// Token table row as written on disk
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TokenFileEntry {
    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub category: ItemType,
}

/// Validated settings for one run
#[derive(Debug, Clone)]
pub struct DropConfig {
    pub layout: LeafLayout,
    pub tokens: TokenTable,
    pub mystery_pool: Vec<MysteryPoolEntry>,
}

impl DropConfig {
    /// Built-in token table with an explicitly chosen layout
    pub fn builtin(layout: LeafLayout) -> Self {
        Self {
            layout,
            tokens: TokenTable::builtin(),
            mystery_pool: Vec::new(),
        }
    }

    /// Validate a parsed config file
    ///
    /// # Arguments
    /// * `file` - Parsed config file
    /// * `layout_override` - Layout from the command line, wins over the file
    ///
    /// # Errors
    /// * `ConfigError::MissingLayout` - neither the file nor the override names a layout
    /// * `ConfigError::InvalidTokenAddress` - a token or pool address does not normalize
    /// * `ConfigError::Invalid` - bad symbol or mystery literal
    pub fn from_file(
        file: DropConfigFile,
        layout_override: Option<LeafLayout>,
    ) -> Result<Self, ConfigError> {
        let layout = layout_override
            .or(file.layout)
            .ok_or(ConfigError::MissingLayout)?;

        let tokens = token_table_from_file(&file)?;
        let mystery_pool = mystery_pool_from_file(&file)?;

        debug!(
            "Config resolved: layout {}, {} tokens, {} mystery slots",
            layout,
            tokens.len(),
            mystery_pool.len()
        );

        Ok(Self {
            layout,
            tokens,
            mystery_pool,
        })
    }
}

/// Token table described by a config file, or the built-in one
///
/// # Errors
/// * `ConfigError::InvalidTokenAddress` - a token address does not normalize
/// * `ConfigError::Invalid` - bad symbol or mystery literal
pub fn token_table_from_file(file: &DropConfigFile) -> Result<TokenTable, ConfigError> {
    let mystery_literal = file
        .mystery_literal
        .clone()
        .unwrap_or_else(|| DEFAULT_MYSTERY_LITERAL.to_string());
    if mystery_literal.is_empty() || mystery_literal.chars().any(char::is_whitespace) {
        return Err(ConfigError::Invalid(format!(
            "mystery literal {:?} must be non-empty without whitespace",
            mystery_literal
        )));
    }

    match &file.tokens {
        Some(rows) => build_token_table(&mystery_literal, rows),
        None => Ok(TokenTable::builtin().with_mystery_literal(mystery_literal)),
    }
}

/// Validated mystery pool slots of a config file
pub fn mystery_pool_from_file(file: &DropConfigFile) -> Result<Vec<MysteryPoolEntry>, ConfigError> {
    file.mystery_pool
        .iter()
        .map(MysteryPoolEntry::from_file)
        .collect()
}

/// Validate the token rows of a config file
///
/// **Private** - internal helper for DropConfig::from_file
fn build_token_table(
    mystery_literal: &str,
    rows: &BTreeMap<String, TokenFileEntry>,
) -> Result<TokenTable, ConfigError> {
    let mut table = TokenTable::new(mystery_literal);
    let mut seen = BTreeMap::new();

    for (symbol, row) in rows {
        validate_symbol(symbol)?;

        // Leaves carry the symbol case-folded, so these would collide
        if let Some(previous) = seen.insert(symbol.to_uppercase(), symbol) {
            return Err(ConfigError::Invalid(format!(
                "token symbols {:?} and {:?} differ only in case",
                previous, symbol
            )));
        }

        // Only the reserved literal stands for the randomized reward
        if row.category == ItemType::Mystery {
            return Err(ConfigError::Invalid(format!(
                "token {:?} cannot use category \"mystery\"; set mystery_literal instead",
                symbol
            )));
        }

        let address = row
            .address
            .as_deref()
            .map(normalize_address)
            .transpose()
            .map_err(|source| ConfigError::InvalidTokenAddress {
                symbol: symbol.clone(),
                source,
            })?;

        table.insert(symbol.as_str(), row.category, address);
    }

    Ok(table)
}

/// A symbol must survive the descriptor split and fit a short string tag
///
/// **Private** - internal validation
fn validate_symbol(symbol: &str) -> Result<(), ConfigError> {
    if symbol.is_empty() || symbol.chars().any(char::is_whitespace) {
        return Err(ConfigError::Invalid(format!(
            "token symbol {:?} must be non-empty without whitespace",
            symbol
        )));
    }

    if symbol.ends_with(DESCRIPTOR_SEPARATOR) {
        return Err(ConfigError::Invalid(format!(
            "token symbol {:?} cannot end with the descriptor separator",
            symbol
        )));
    }

    encode_short_string(&symbol.to_uppercase())
        .map(|_| ())
        .map_err(|e| ConfigError::Invalid(e.to_string()))
}

/// Parse a config file held in memory
pub fn parse_config_file(contents: &str) -> Result<DropConfigFile, ConfigError> {
    Ok(toml::from_str(contents)?)
}

/// Load a config file from disk
///
/// # Errors
/// * `ConfigError::Io` - file cannot be read
/// * `ConfigError::Parse` - invalid TOML or unknown keys
pub fn load_config_file(path: impl AsRef<Path>) -> Result<DropConfigFile, ConfigError> {
    let path = path.as_ref();
    info!("Loading drop config from: {}", path.display());
    let contents = fs::read_to_string(path)?;
    parse_config_file(&contents)
}

/// Resolve the run configuration from an optional file and CLI override
///
/// **Public** - used by every command that needs a token table
pub fn resolve_config(
    path: Option<&Path>,
    layout_override: Option<LeafLayout>,
) -> Result<DropConfig, ConfigError> {
    let file = match path {
        Some(path) => load_config_file(path)?,
        None => DropConfigFile::default(),
    };
    DropConfig::from_file(file, layout_override)
}

/// Token table for commands that never build leaves
pub fn resolve_token_table(path: Option<&Path>) -> Result<TokenTable, ConfigError> {
    match path {
        Some(path) => token_table_from_file(&load_config_file(path)?),
        None => Ok(TokenTable::builtin()),
    }
}

/// Mystery pool slots from a config file
pub fn load_mystery_pool(path: impl AsRef<Path>) -> Result<Vec<MysteryPoolEntry>, ConfigError> {
    mystery_pool_from_file(&load_config_file(path)?)
}
