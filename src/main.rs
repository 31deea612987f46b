use std::io::{self, Write};

use duel_terminal::charts;
use duel_terminal::compare::{PlayerQuery, compare};
use duel_terminal::league::{LeagueKey, normalize_league};
use duel_terminal::record::{StatFamily, StatProvider, StatTable, find_player};
use duel_terminal::season::{SeasonParse, normalize_season};
use duel_terminal::stats_fetch::HttpStatsProvider;

const RULE: &str = "================================================================";

struct DemoPick {
    name: &'static str,
    league: &'static str,
    season: &'static str,
}

const DEMO_PICKS: [DemoPick; 2] = [
    DemoPick {
        name: "Mesut",
        league: "ENG",
        season: "2017/18",
    },
    DemoPick {
        name: "De Bruyne",
        league: "ENG",
        season: "2022/2023",
    },
];

fn main() {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let provider = HttpStatsProvider;

    println!("{RULE}");
    let q1 = select_player(&provider, 1, &DEMO_PICKS[0]);
    println!("{RULE}");
    let q2 = select_player(&provider, 2, &DEMO_PICKS[1]);
    println!("{RULE}");

    loop {
        print_menu();
        let choice = prompt("Scout: select a stat type (0-8): ");
        let Ok(index) = choice.parse::<usize>() else {
            println!("Scout: that is not a number, try again.");
            continue;
        };
        if index == 0 {
            println!("Scout: enjoy the football!");
            println!("{RULE}");
            break;
        }
        let Some(family) = StatFamily::ALL.get(index - 1).copied() else {
            println!("Scout: invalid index, try again.");
            continue;
        };

        println!(
            "Scout: loading '{}' for {} and {}.",
            family.menu_label(),
            q1.name,
            q2.name
        );
        match compare(&provider, family, &q1, &q2) {
            Ok(result) => {
                if let Err(err) = charts::show(&result) {
                    eprintln!("render error: {err}");
                }
            }
            Err(err) => println!("Scout: {err}"),
        }
        println!("{RULE}");
    }
}

fn select_player(provider: &dyn StatProvider, slot: usize, demo: &DemoPick) -> PlayerQuery {
    loop {
        println!("Scout: enter player {slot}!");
        let mut name = prompt(&format!("P{slot} - Name: "));
        let (league_raw, season_raw) = if name.is_empty() {
            name = demo.name.to_string();
            println!(
                "Scout: taking the demo pick '{}' ({}, {}).",
                demo.name, demo.league, demo.season
            );
            (demo.league.to_string(), demo.season.to_string())
        } else {
            print_league_menu();
            (
                prompt(&format!("P{slot} - League: ")),
                prompt(&format!("P{slot} - Season: ")),
            )
        };

        let Some(league) = normalize_league(&league_raw) else {
            println!("Scout: unknown league '{league_raw}', try again.");
            continue;
        };
        let Some(parsed) = normalize_season(&season_raw) else {
            println!("Scout: unreadable season '{season_raw}', try again.");
            continue;
        };
        if let SeasonParse::PassThrough(code) = parsed {
            println!("Scout: taking '{season_raw}' as the {code} season as-is.");
        }
        let season = parsed.code();

        println!("Scout: checking if the player exists...");
        match provider.fetch_season_stats(league, season, StatTable::Standard) {
            Ok(records) => match find_player(&records, &name) {
                Some(record) => {
                    println!("Scout: found '{}'!", record.player);
                    return PlayerQuery {
                        name,
                        league,
                        season,
                    };
                }
                None => println!(
                    "Scout: '{name}' who played in '{league_raw}' during '{season_raw}' does not exist, try again."
                ),
            },
            Err(err) => println!("Scout: lookup failed ({err}), try again."),
        }
    }
}

fn print_league_menu() {
    for (index, league) in LeagueKey::ALL.iter().enumerate() {
        println!("\t [{}] {}", index + 1, league.competition());
    }
}

fn print_menu() {
    println!("Scout: the following stat types are available:");
    println!("[0] Exit");
    for (index, family) in StatFamily::ALL.iter().enumerate() {
        println!("[{}] {}", index + 1, family.menu_label());
    }
}

fn prompt(label: &str) -> String {
    print!("{label}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_string()
}
