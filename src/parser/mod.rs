//! Card list parsing and normalization.
//!
//! This module handles:
//! - Loading the YAML card list
//! - Parsing reward descriptors
//! - Normalizing recipient addresses to felts

pub mod address;
pub mod cards;
pub mod descriptor;
pub mod schema;

// Re-export main types
pub use address::{normalize_address, NormalizedAddress};
pub use cards::{load_cards, parse_cards};
pub use descriptor::{parse_descriptor, split_descriptor};
pub use schema::{CardsFile, ItemType, ParsedDescriptor, RawEntry};
