use merkle_drop_prep::aggregator::{survey_fronts, MalformedPolicy};
use merkle_drop_prep::commands::{execute_mystery_pool, execute_stats, MysteryPoolArgs, StatsArgs};
use merkle_drop_prep::config::TokenTable;
use merkle_drop_prep::output::StatisticsReport;
use merkle_drop_prep::parser::parse_cards;
use pretty_assertions::assert_eq;
use std::fs;

const CARDS: &str = r#"
cards:
  - address: "0x1"
    front: "LORDS_75000000000000000000"
  - address: "0x2"
    front: "LORDS_75000000000000000000"
  - address: "0x3"
    front: "MYSTERY_ASSET"
  - address: "0x4"
    front: "NOSEPARATOR"
"#;

#[test]
fn test_exclusion_is_reported() {
    let entries = parse_cards(CARDS).unwrap();
    let stats = survey_fronts(&entries, &TokenTable::builtin(), MalformedPolicy::Exclude).unwrap();

    assert_eq!(stats.total, 4);
    assert_eq!(stats.excluded, 1);
    assert_eq!(stats.by_category.values().sum::<u64>(), stats.total - stats.excluded);
}

#[test]
fn test_reject_is_default_for_stats() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cards.yaml");
    fs::write(&input, CARDS).unwrap();

    let args = StatsArgs {
        input,
        json_output: Some(dir.path().join("stats.json")),
        ..StatsArgs::default()
    };
    assert!(execute_stats(args).is_err());
    assert!(!dir.path().join("stats.json").exists());
}

#[test]
fn test_stats_writes_json_and_csv() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cards.yaml");
    fs::write(&input, CARDS).unwrap();

    let json_path = dir.path().join("stats.json");
    let csv_path = dir.path().join("fronts.csv");
    execute_stats(StatsArgs {
        input,
        policy: MalformedPolicy::Exclude,
        json_output: Some(json_path.clone()),
        csv_output: Some(csv_path.clone()),
        ..StatsArgs::default()
    })
    .unwrap();

    let report: StatisticsReport =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(report.total, 4);
    assert_eq!(report.excluded, 1);
    assert_eq!(report.unique_fronts, 2);
    assert_eq!(report.categories[0].key, "erc20");
    assert_eq!(report.categories[0].percentage, "50.00");

    let csv = fs::read_to_string(&csv_path).unwrap();
    assert_eq!(
        csv,
        "Front,Count,Percentage\nLORDS_75000000000000000000,2,50.00\nMYSTERY_ASSET,1,25.00\n"
    );
}

#[test]
fn test_mystery_pool_calldata_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("drop.toml");
    fs::write(
        &config,
        r#"
[[mystery_pool]]
name = "CREDITS"
token_address = "0x00abc"
amount = "150000000000000000000"

[[mystery_pool]]
name = "NUMS"
token_address = "0x42"
amount = "340282366920938463463374607431768211456"
"#,
    )
    .unwrap();

    let output = dir.path().join("calldata.json");
    execute_mystery_pool(MysteryPoolArgs {
        config,
        output: Some(output.clone()),
        slot: None,
    })
    .unwrap();

    let calldata: Vec<String> = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(
        calldata,
        vec!["0x2", "0xabc", "0x821ab0d4414980000", "0x0", "0x42", "0x0", "0x1"]
    );
}
