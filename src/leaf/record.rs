//! Leaf record shapes.
//!
//! Field order here is the order the records are serialized in. Changing it,
//! or the set of fields, changes the artifact every deployed root was built
//! from.

use serde::{Deserialize, Serialize};

/// One merkle leaf, one per claimable recipient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafRecord {
    /// Normalized recipient felt
    pub recipient: String,

    /// Zero-based position in the card list, and in the tree
    pub index: u64,

    /// Exact decimal amount, `"0"` for the mystery reward
    pub amount: String,

    /// Symbol (symbol-qualified layout) or category (typed layout)
    pub item_type: String,

    /// Token contract, present only in the typed layout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_address: Option<String>,
}

/// A leaf together with the felts the claim contract hashes for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafEntry {
    #[serde(flatten)]
    pub record: LeafRecord,

    /// Hash preimage as felt hex, in contract field order
    pub preimage: Vec<String>,
}
