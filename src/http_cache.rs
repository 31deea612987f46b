//! On-disk cache of provider JSON bodies.
//!
//! Season aggregate tables change at most once a day and the provider
//! rate-limits aggressively, so bodies are reused until a TTL expires
//! rather than revalidated per request. `STATS_CACHE_TTL_SECS=0` disables
//! caching entirely.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

const CACHE_VERSION: u32 = 1;
const CACHE_DIR: &str = "duel_terminal";
const CACHE_FILE: &str = "stats_cache.json";
const DEFAULT_TTL_SECS: u64 = 86_400;

static CACHE: Mutex<Option<CacheFile>> = Mutex::new(None);

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct CacheFile {
    version: u32,
    entries: HashMap<String, CacheEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheEntry {
    body: String,
    fetched_at: u64,
}

pub fn fetch_json_cached(client: &Client, url: &str) -> Result<String> {
    let ttl = cache_ttl_secs();
    let now = now_secs();

    if ttl > 0 {
        let mut guard = CACHE.lock().expect("stats cache lock poisoned");
        let cache = guard.get_or_insert_with(load_cache_file);
        if let Some(entry) = cache.entries.get(url) {
            if now.saturating_sub(entry.fetched_at) < ttl {
                return Ok(entry.body.clone());
            }
        }
    }

    let resp = client.get(url).send().context("request failed")?;
    let status = resp.status();
    let body = resp.text().context("failed reading body")?;
    if !status.is_success() {
        return Err(anyhow::anyhow!("http {}: {}", status, body));
    }

    if ttl > 0 {
        store_entry(
            url,
            CacheEntry {
                body: body.clone(),
                fetched_at: now,
            },
        );
    }
    Ok(body)
}

fn cache_ttl_secs() -> u64 {
    env::var("STATS_CACHE_TTL_SECS")
        .ok()
        .and_then(|val| val.parse::<u64>().ok())
        .unwrap_or(DEFAULT_TTL_SECS)
}

fn store_entry(key: &str, entry: CacheEntry) {
    let mut guard = CACHE.lock().expect("stats cache lock poisoned");
    let cache = guard.get_or_insert_with(load_cache_file);
    cache.version = CACHE_VERSION;
    cache.entries.insert(key.to_string(), entry);
    let _ = save_cache_file(cache);
}

fn load_cache_file() -> CacheFile {
    let Some(path) = cache_path() else {
        return CacheFile::default();
    };
    let Ok(raw) = fs::read_to_string(path) else {
        return CacheFile::default();
    };
    let cache = serde_json::from_str::<CacheFile>(&raw).unwrap_or_default();
    if cache.version != CACHE_VERSION {
        return CacheFile::default();
    }
    cache
}

fn save_cache_file(cache: &CacheFile) -> Result<()> {
    let Some(path) = cache_path() else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).ok();
    }
    let tmp = path.with_extension("json.tmp");
    let json = serde_json::to_string(cache).context("serialize stats cache")?;
    fs::write(&tmp, json).context("write stats cache")?;
    fs::rename(&tmp, &path).context("swap stats cache")?;
    Ok(())
}

fn cache_path() -> Option<PathBuf> {
    if let Ok(base) = env::var("XDG_CACHE_HOME") {
        if !base.trim().is_empty() {
            return Some(PathBuf::from(base).join(CACHE_DIR).join(CACHE_FILE));
        }
    }
    let home = env::var("HOME").ok()?;
    if home.trim().is_empty() {
        return None;
    }
    Some(
        PathBuf::from(home)
            .join(".cache")
            .join(CACHE_DIR)
            .join(CACHE_FILE),
    )
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
