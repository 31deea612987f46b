use std::fs;
use std::path::PathBuf;

use duel_terminal::stats_fetch::parse_season_stats_json;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn parses_rows_with_grouped_and_flat_fields() {
    let raw = read_fixture("season_stats.json");
    let rows = parse_season_stats_json(&raw).expect("fixture should parse");
    assert_eq!(rows.len(), 2);

    let ozil = &rows[0];
    assert_eq!(ozil.player, "Mesut Özil");
    assert_eq!(ozil.team, "Arsenal");
    assert_eq!(ozil.season, "1718");
    assert_eq!(ozil.grouped("Performance", "Gls"), Some(4.0));
    assert_eq!(ozil.grouped("Playing Time", "90s"), Some(22.6));
    assert_eq!(ozil.flat("90s"), Some(22.6));
}

#[test]
fn string_cells_parse_with_percent_and_thousands() {
    let raw = read_fixture("season_stats.json");
    let rows = parse_season_stats_json(&raw).expect("fixture should parse");

    let ozil = &rows[0];
    assert_eq!(ozil.grouped("Expected", "xAG"), Some(6.9));
    assert_eq!(ozil.grouped("Total", "Cmp%"), Some(83.1));
    assert_eq!(ozil.grouped("Total", "Att"), Some(1248.0));
}

#[test]
fn dash_cells_carry_no_value() {
    let raw = read_fixture("season_stats.json");
    let rows = parse_season_stats_json(&raw).expect("fixture should parse");
    assert_eq!(rows[1].flat("Matches"), None);
}

#[test]
fn rows_without_stats_are_skipped() {
    let raw = read_fixture("season_stats.json");
    let rows = parse_season_stats_json(&raw).expect("fixture should parse");
    assert!(rows.iter().all(|row| row.player != "Ghost Row"));
}

#[test]
fn null_and_empty_bodies_are_empty_collections() {
    assert!(
        parse_season_stats_json("null")
            .expect("null should parse")
            .is_empty()
    );
    assert!(
        parse_season_stats_json("  ")
            .expect("blank should parse")
            .is_empty()
    );
    assert!(
        parse_season_stats_json("{}")
            .expect("no rows should parse")
            .is_empty()
    );
}

#[test]
fn garbage_body_is_an_error() {
    assert!(parse_season_stats_json("<html>rate limited</html>").is_err());
}
