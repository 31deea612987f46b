//! Fetch collaborator: season stat tables from the FBref-style provider.
//!
//! Transport and parsing are kept apart so tests and benches can run the
//! parser against fixture bodies without a network.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;
use serde_json::Value;

use crate::error::EngineError;
use crate::http_cache::fetch_json_cached;
use crate::league::LeagueKey;
use crate::record::{PlayerStatRecord, StatProvider, StatTable};
use crate::season::SeasonCode;

const DEFAULT_API_BASE: &str = "https://api.fbdata.dev/v1";
const REQUEST_TIMEOUT_SECS: u64 = 15;

static CLIENT: OnceCell<Client> = OnceCell::new();

fn http_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent("duel-terminal/0.1")
            .build()
            .context("failed to build http client")
    })
}

fn api_base() -> String {
    env::var("STATS_API_BASE")
        .ok()
        .filter(|base| !base.trim().is_empty())
        .map(|base| base.trim().trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

/// Production provider: one HTTP GET per (league, season, table).
#[derive(Debug, Default)]
pub struct HttpStatsProvider;

impl StatProvider for HttpStatsProvider {
    fn fetch_season_stats(
        &self,
        league: LeagueKey,
        season: SeasonCode,
        table: StatTable,
    ) -> Result<Vec<PlayerStatRecord>, EngineError> {
        fetch_table(league, season, table).map_err(EngineError::Provider)
    }
}

fn fetch_table(
    league: LeagueKey,
    season: SeasonCode,
    table: StatTable,
) -> Result<Vec<PlayerStatRecord>> {
    let client = http_client()?;
    let url = format!(
        "{}/players?league={}&season={}&table={}",
        api_base(),
        encode_query(league.as_str()),
        season,
        table.as_str()
    );
    let body = fetch_json_cached(client, &url)
        .with_context(|| format!("fetching {table} table"))?;
    parse_season_stats_json(&body)
}

// League keys only ever contain spaces beyond URL-safe characters.
fn encode_query(raw: &str) -> String {
    raw.replace(' ', "%20")
}

/// Parse a provider body into records. Empty and `"null"` bodies are an
/// empty collection, not an error; rows without a stats object are skipped.
pub fn parse_season_stats_json(raw: &str) -> Result<Vec<PlayerStatRecord>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }

    let root: Value = serde_json::from_str(trimmed).context("invalid stats json")?;
    let Some(rows) = root.get("rows").and_then(|v| v.as_array()) else {
        return Ok(Vec::new());
    };

    let mut out = Vec::new();
    for row in rows {
        if let Some(record) = parse_row(row) {
            out.push(record);
        }
    }
    Ok(out)
}

fn parse_row(row: &Value) -> Option<PlayerStatRecord> {
    let player = pick_string(row, &["player", "name"])?;
    let team = pick_string(row, &["team", "squad"]).unwrap_or_default();
    let season = pick_string(row, &["season"]).unwrap_or_default();
    let stats = row.get("stats").and_then(|v| v.as_object())?;

    let mut record = PlayerStatRecord::new(player, team, season);
    for (key, value) in stats {
        match value {
            Value::Object(group) => {
                for (field, cell) in group {
                    if let Some(num) = as_f64(cell) {
                        record.insert_grouped(key, field, num);
                    }
                }
            }
            other => {
                if let Some(num) = as_f64(other) {
                    record.insert_flat(key, num);
                }
            }
        }
    }
    Some(record)
}

// Some columns arrive as strings ("62.5", "58%", "1,024"); dashes and
// blanks mean no value.
fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let s = s.trim().trim_end_matches('%');
            if s.is_empty() || s == "-" {
                return None;
            }
            s.replace(',', "").parse::<f64>().ok()
        }
        _ => None,
    }
}

fn pick_string(value: &Value, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(s) = value.get(*key).and_then(|v| v.as_str()) {
            let trimmed = s.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}
