//! Keyed Cache - lookup tool
//!
//! Reads one key per line from stdin, resolves each through a read-through
//! cache backed by files in `CACHE_DATA_DIR`, and prints one JSON report per
//! key followed by a summary line.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::Context;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use keyed_cache::cache::{LoadOutcome, MissReason, RemovalCause};
use keyed_cache::models::{LookupReport, SummaryReport};
use keyed_cache::{CacheListener, Config, FileLoader, KeyedCache};

/// Counts cache events for the closing summary.
#[derive(Debug, Default)]
struct LookupTally {
    hits: AtomicU64,
    misses: AtomicU64,
    loads: AtomicU64,
    absent: AtomicU64,
    failures: AtomicU64,
    evictions: AtomicU64,
}

impl CacheListener<String> for LookupTally {
    fn on_hit(&self, _key: &String) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    fn on_miss(&self, _key: &String, _reason: MissReason) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    fn on_load(&self, _key: &String, outcome: LoadOutcome) {
        let counter = match outcome {
            LoadOutcome::Stored => &self.loads,
            LoadOutcome::Absent => &self.absent,
            LoadOutcome::Failed => &self.failures,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn on_removal(&self, _key: &String, cause: RemovalCause) {
        if cause.is_eviction() {
            self.evictions.fetch_add(1, Ordering::Relaxed);
        }
    }
}

impl LookupTally {
    fn summary(&self, lookups: u64, entries: usize) -> SummaryReport {
        SummaryReport {
            lookups,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            loads: self.loads.load(Ordering::Relaxed),
            absent: self.absent.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            entries,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter, on stderr so stdout stays JSON.
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "keyed_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    config.validate().context("invalid cache configuration")?;
    info!(
        "Configuration loaded: max_size={}, ttl_seconds={}, data_dir={}",
        config.max_size,
        config.ttl_seconds,
        config.data_dir.display()
    );

    let tally = Arc::new(LookupTally::default());
    let cache = KeyedCache::<String, _>::from_config(&config, FileLoader::from_config(&config))
        .context("failed to build cache")?
        .with_listener(tally.clone());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut lookups = 0u64;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read key from stdin")?;
        let key = line.trim();
        if key.is_empty() {
            continue;
        }
        lookups += 1;

        let key = key.to_string();
        let report = match cache.get(&key) {
            Ok(Some(value)) => LookupReport::found(&key, value.contents.len()),
            Ok(None) => LookupReport::absent(&key),
            Err(err) => {
                warn!(key = %key, error = %err, "Failed to load value");
                LookupReport::failed(&key, err)
            }
        };
        write_json_line(&mut out, &report)?;
    }

    let summary = tally.summary(lookups, cache.len());
    write_json_line(&mut out, &summary)?;
    info!(
        "Input finished: {} lookups, hit rate {:.2}",
        summary.lookups,
        summary.hit_rate()
    );

    Ok(())
}

fn write_json_line(out: &mut impl Write, report: &impl Serialize) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, report).context("failed to encode report")?;
    writeln!(out).context("failed to write report")?;
    Ok(())
}
