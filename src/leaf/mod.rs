//! Leaf construction for the claim merkle tree.
//!
//! This module turns parsed card entries into:
//! - Leaf records in the active layout
//! - Felt preimages matching the claim contract's hashing
//! - Felt encodings shared with configuration calldata

pub mod builder;
pub mod encoding;
pub mod layout;
pub mod record;

// Re-export main types and functions
pub use builder::LeafBuilder;
pub use encoding::{decimal_to_felt, encode_short_string, felt_hex, split_u256};
pub use layout::LeafLayout;
pub use record::{LeafEntry, LeafRecord};
