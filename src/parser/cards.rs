//! Card list loading.

use super::schema::{CardsFile, RawEntry};
use crate::utils::error::InputError;
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Load the `cards` sequence from a YAML file
///
/// **Public** - used by the format and stats commands
///
/// # Errors
/// * `InputError::Io` - file cannot be read
/// * `InputError::Yaml` - document is not valid YAML or has the wrong shape
pub fn load_cards(path: impl AsRef<Path>) -> Result<Vec<RawEntry>, InputError> {
    let path = path.as_ref();
    info!("Loading cards from: {}", path.display());

    let contents = fs::read_to_string(path)?;
    let cards = parse_cards(&contents)?;

    info!("Loaded {} cards", cards.len());
    Ok(cards)
}

/// Parse a card list document held in memory
pub fn parse_cards(contents: &str) -> Result<Vec<RawEntry>, InputError> {
    let file: CardsFile = serde_yaml::from_str(contents)?;
    debug!("Card list parsed: {} entries", file.cards.len());
    Ok(file.cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_cards_preserves_order() {
        let yaml = r#"
cards:
  - address: "0xAB"
    front: CREDITS_150000000000000000000
  - address: "0xCD"
    front: MYSTERY_ASSET
    rarity: rare
"#;
        let cards = parse_cards(yaml).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0], RawEntry::new("0xAB", "CREDITS_150000000000000000000"));
        assert_eq!(cards[1], RawEntry::new("0xCD", "MYSTERY_ASSET"));
    }

    #[test]
    fn test_parse_cards_rejects_missing_front() {
        let yaml = "cards:\n  - address: \"0xAB\"\n";
        assert!(matches!(parse_cards(yaml), Err(InputError::Yaml(_))));
    }

    #[test]
    fn test_load_cards_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "cards:\n  - address: \"0x1\"\n    front: LORDS_5").unwrap();

        let cards = load_cards(file.path()).unwrap();
        assert_eq!(cards, vec![RawEntry::new("0x1", "LORDS_5")]);
    }

    #[test]
    fn test_load_cards_missing_file() {
        let result = load_cards("/definitely/not/here/cards.yaml");
        assert!(matches!(result, Err(InputError::Io(_))));
    }
}
