use duel_terminal::league::{LeagueKey, normalize_league};
use duel_terminal::season::{SeasonCode, SeasonParse, normalize_season};

#[test]
fn four_digit_pairs_must_be_consecutive() {
    assert_eq!(
        normalize_season("2017/2018"),
        Some(SeasonParse::Validated(SeasonCode(2017)))
    );
    assert_eq!(
        normalize_season("1999/2000"),
        Some(SeasonParse::Validated(SeasonCode(1999)))
    );
    assert_eq!(normalize_season("2017/2019"), None);
    assert_eq!(normalize_season("2018/2017"), None);
}

#[test]
fn mixed_pairs_check_the_trailing_digits() {
    assert_eq!(
        normalize_season("2017/18"),
        Some(SeasonParse::Validated(SeasonCode(2017)))
    );
    assert_eq!(
        normalize_season("2009/10"),
        Some(SeasonParse::Validated(SeasonCode(2009)))
    );
    assert_eq!(normalize_season("2017/19"), None);
    // No century wraparound.
    assert_eq!(normalize_season("1999/00"), None);
}

#[test]
fn short_pairs_expand_through_the_pivot() {
    assert_eq!(
        normalize_season("17/18"),
        Some(SeasonParse::Validated(SeasonCode(2017)))
    );
    assert_eq!(
        normalize_season("80/81"),
        Some(SeasonParse::Validated(SeasonCode(1980)))
    );
    assert_eq!(
        normalize_season("79/80"),
        Some(SeasonParse::Validated(SeasonCode(2079)))
    );
    assert_eq!(normalize_season("17/19"), None);
    assert_eq!(normalize_season("99/00"), None);
}

#[test]
fn concatenated_tokens_split_into_adjacent_years() {
    assert_eq!(
        normalize_season("1718"),
        Some(SeasonParse::Validated(SeasonCode(2017)))
    );
    assert_eq!(
        normalize_season("8081"),
        Some(SeasonParse::Validated(SeasonCode(1980)))
    );
    assert_eq!(
        normalize_season("0910"),
        Some(SeasonParse::Validated(SeasonCode(2009)))
    );
}

#[test]
fn non_adjacent_four_digit_tokens_pass_through() {
    // Deliberate fallback: a lone year is carried as-is, but flagged as
    // unvalidated so callers can tell it apart from a checked season.
    assert_eq!(
        normalize_season("2023"),
        Some(SeasonParse::PassThrough(SeasonCode(2023)))
    );
    assert_ne!(
        normalize_season("2023"),
        Some(SeasonParse::Validated(SeasonCode(2023)))
    );
    assert_eq!(normalize_season("2023").unwrap().code(), SeasonCode(2023));
}

#[test]
fn everything_else_is_unparseable() {
    for input in ["", "abc", "seventeen/18", "20/2018", "123", "12345", "17-18", "17/181"] {
        assert_eq!(normalize_season(input), None, "accepted: {input:?}");
    }
}

#[test]
fn display_uses_the_canonical_year() {
    assert_eq!(SeasonCode(2017).display(), "17/18");
    assert_eq!(SeasonCode(1980).display(), "80/81");
    assert_eq!(SeasonCode(1999).display(), "99/00");
    assert_eq!(SeasonCode(2009).display(), "09/10");
}

#[test]
fn every_alias_of_a_league_converges() {
    let table: [(&[&str], LeagueKey); 5] = [
        (
            &["ENG", "England", "1", "Premier League"],
            LeagueKey::PremierLeague,
        ),
        (&["ESP", "Spain", "2", "La Liga"], LeagueKey::LaLiga),
        (&["ITA", "Italy", "3", "Serie A"], LeagueKey::SerieA),
        (&["GER", "Germany", "4", "Bundesliga"], LeagueKey::Bundesliga),
        (&["FRA", "France", "5", "Ligue 1"], LeagueKey::Ligue1),
    ];
    for (aliases, expected) in table {
        for alias in aliases {
            assert_eq!(normalize_league(alias), Some(expected), "alias: {alias}");
        }
    }
}

#[test]
fn unknown_leagues_have_no_default() {
    for input in ["", "eng", "premier league", "6", "0", "NED", "Eredivisie"] {
        assert_eq!(normalize_league(input), None, "accepted: {input:?}");
    }
}

#[test]
fn canonical_keys_are_stable() {
    assert_eq!(LeagueKey::PremierLeague.as_str(), "ENG-Premier League");
    assert_eq!(LeagueKey::Ligue1.as_str(), "FRA-Ligue 1");
}
