//! Merkle Drop Prep
//!
//! Leaf dataset preparation for Starknet merkle-drop claim contracts.
//!
//! Reads a card list of recipients and reward descriptors, normalizes every
//! address into a field element, and emits one leaf per recipient in the
//! layout the deployed claim contract verifies, together with category
//! statistics for operator review.
//!
//! ## Getting Started
//!
//! ```bash
//! merkle-drop format --input cards.yaml --layout typed_token_address --output leaves.json
//! merkle-drop stats --input cards.yaml --exclude-malformed
//! ```

pub mod aggregator;
pub mod commands;
pub mod config;
pub mod dataset;
pub mod leaf;
pub mod output;
pub mod parser;
pub mod utils;

pub use dataset::{assemble, AssembledDataset};
