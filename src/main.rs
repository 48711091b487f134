//! logtap demo driver
//!
//! Wires a logger to an in-memory store, replays a scripted mix of sourced
//! and unsourced calls, applies a couple of panel toggles, and prints the
//! resulting discovery list, statistics, and history. The panel renderer
//! itself is a separate consumer; this binary stands in for it.

use clap::Parser;
use logtap::cli::Cli;
use logtap::logging::{init_tracing, Level};
use logtap::{config, ControlPanel, DiscoveryTracker, Logger, MemoryStore, StateStore, StoreAction};
use std::sync::Arc;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut cfg = config::load();
    if let Some(level) = &cli.min_level {
        cfg.filter.min_level = Level::parse_or(level, cfg.filter.min_level);
    }
    if !cli.disabled_sources.is_empty() {
        cfg.filter.disabled_sources = cli.disabled_sources.clone();
    }
    cfg.filter.early_logging = cfg.filter.early_logging || cli.early_logging;

    let store = Arc::new(MemoryStore::new());

    // Deferred discovery notifications flow into the store through this
    // injected callback
    let notifier_store = store.clone();
    let discovery = Arc::new(DiscoveryTracker::with_notifier(Box::new(move |source| {
        notifier_store.dispatch(StoreAction::SourceDiscovered(source));
    })));

    let max_history = cfg.history.max_entries;
    let mut logger = Logger::new(cfg.filter.clone(), discovery.clone());
    if !cli.no_store {
        logger = logger.with_store(store.clone());
    }
    let logger = logger.with_max_history(max_history);

    let panel = ControlPanel::new(store, discovery, logger.history_handle());

    // Scripted traffic: three components plus an unsourced line
    logger.info("[Boot] configuration loaded");
    logger.debug("[Net] socket opened");
    logger.info("[Net] connected to peer");
    logger.warn("[Ui] frame budget exceeded");
    logger.info("no source on this one");

    // Mute the noisy component and log again
    panel.set_source_disabled("Net", true);
    logger.error("[Net] this line is muted");
    logger.error("[Boot] this line still shows");

    println!();
    println!("discovered sources (first seen): {:?}", panel.discovered_sources());
    let stats = panel.stats();
    println!(
        "sources: {} total, {} enabled, {} disabled, globally disabled: {}",
        stats.total_sources, stats.enabled, stats.disabled, stats.globally_disabled
    );
    println!("history ({} entries):", panel.history().len());
    for entry in panel.history() {
        println!("  {:5} {}", entry.level.as_str(), entry.message);
    }
}
