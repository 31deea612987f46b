//! League alias normalization over the closed set of supported leagues.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeagueKey {
    PremierLeague,
    LaLiga,
    SerieA,
    Bundesliga,
    Ligue1,
}

impl LeagueKey {
    pub const ALL: [LeagueKey; 5] = [
        LeagueKey::PremierLeague,
        LeagueKey::LaLiga,
        LeagueKey::SerieA,
        LeagueKey::Bundesliga,
        LeagueKey::Ligue1,
    ];

    /// Canonical provider key.
    pub fn as_str(self) -> &'static str {
        match self {
            LeagueKey::PremierLeague => "ENG-Premier League",
            LeagueKey::LaLiga => "ESP-La Liga",
            LeagueKey::SerieA => "ITA-Serie A",
            LeagueKey::Bundesliga => "GER-Bundesliga",
            LeagueKey::Ligue1 => "FRA-Ligue 1",
        }
    }

    /// Competition name for menus and titles.
    pub fn competition(self) -> &'static str {
        match self {
            LeagueKey::PremierLeague => "Premier League",
            LeagueKey::LaLiga => "La Liga",
            LeagueKey::SerieA => "Serie A",
            LeagueKey::Bundesliga => "Bundesliga",
            LeagueKey::Ligue1 => "Ligue 1",
        }
    }
}

impl fmt::Display for LeagueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a raw league input to its canonical key.
///
/// Exact, case-sensitive match over country code, country name, 1-based
/// menu index and competition name. Anything else is unknown; there is no
/// default league.
pub fn normalize_league(input: &str) -> Option<LeagueKey> {
    match input {
        "ENG" | "England" | "1" | "Premier League" => Some(LeagueKey::PremierLeague),
        "ESP" | "Spain" | "2" | "La Liga" => Some(LeagueKey::LaLiga),
        "ITA" | "Italy" | "3" | "Serie A" => Some(LeagueKey::SerieA),
        "GER" | "Germany" | "4" | "Bundesliga" => Some(LeagueKey::Bundesliga),
        "FRA" | "France" | "5" | "Ligue 1" => Some(LeagueKey::Ligue1),
        _ => None,
    }
}
