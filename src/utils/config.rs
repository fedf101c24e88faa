//! Configuration and constants for the leaf pipeline.

use primitive_types::U256;

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Characteristic of the Starknet field: 2^251 + 17 * 2^192 + 1.
///
/// Limbs are little-endian u64 words.
pub const STARK_FIELD_PRIME: U256 = U256([1, 0, 0, 0x0800_0000_0000_0011]);

/// Reserved descriptor for the randomized reward
pub const DEFAULT_MYSTERY_LITERAL: &str = "MYSTERY_ASSET";

/// Separates the token symbol from the amount in a descriptor
pub const DESCRIPTOR_SEPARATOR: char = '_';

/// Cairo short strings hold at most 31 ASCII bytes
pub const MAX_SHORT_STRING_LEN: usize = 31;

/// Contract tags used by the typed layout
pub const ERC20_CONTRACT_TAG: &str = "ERC_20";
pub const MYSTERY_CONTRACT_TAG: &str = "MYSTERY";

/// Number of leaves echoed to the terminal after a format run
pub const SAMPLE_LEAVES: usize = 5;

// Token table shipped with the tool. CREDITS has no deployed address yet,
// so the typed layout refuses it until a config file supplies one.
pub const BUILTIN_TOKENS: &[(&str, Option<&str>)] = &[
    (
        "LORDS",
        Some("0x0124aeb495b947201f5faC96fD1138E326AD86195B98df6DEc9009158A533B49"),
    ),
    (
        "SURVIVOR",
        Some("0x042DD777885AD2C116be96d4D634abC90A26A790ffB5871E037Dd5Ae7d2Ec86B"),
    ),
    (
        "NUMS",
        Some("0x042DD777885AD2C116be96d4D634abC90A26A790ffB5871E037Dd5Ae7d2Ec86B"),
    ),
    (
        "PAPER",
        Some("0x042DD777885AD2C116be96d4D634abC90A26A790ffB5871E037Dd5Ae7d2Ec86B"),
    ),
    ("CREDITS", None),
];
