// src/runner.rs
//
// Top-level scrape run: walk the feed catalog sequentially with a fixed
// pause between requests, decode per declared kind, then reconcile the batch
// against the persisted state in one pass at the end.

use std::collections::HashSet;
use std::error::Error;
use std::thread;

use tracing::info;

use crate::core::{feed, net};
use crate::data::{event_key, Entity};
use crate::merge;
use crate::params::Params;
use crate::scrape::{individual, startlist, team};
use crate::specs::{FeedKind, FeedSpec, FEEDS};
use crate::store;

/// What one full pass over the catalog produced.
pub struct RunSummary {
    pub entities: Vec<Entity>,
    /// Derived keys whose feed was queried, decoded or not. Team pages are
    /// not tracked here: the HTML page is the full-history source and its
    /// matches are never retired.
    pub attempted: HashSet<String>,
}

/// Fetch and decode every catalog entry (honoring the sport filter).
pub fn scrape_all(client: &net::Client, params: &Params) -> RunSummary {
    let mut entities: Vec<Entity> = Vec::new();
    let mut attempted: HashSet<String> = HashSet::new();

    for spec in FEEDS {
        if let Some(filter) = &params.sport_filter {
            if !spec.sport.eq_ignore_ascii_case(filter) {
                continue;
            }
        }
        match spec.kind {
            FeedKind::Team => scrape_team_page(client, spec, params, &mut entities),
            FeedKind::Individual => {
                // Attempted even when the fetch fails: a key that keeps
                // yielding nothing is retired by the merge, while a total
                // outage is caught by its own guard there.
                attempted.insert(event_key(spec.sport, spec.event));
                scrape_individual_feed(client, spec, params, &mut entities);
            }
        }
        thread::sleep(params.feed_delay);
    }

    RunSummary { entities, attempted }
}

fn scrape_team_page(
    client: &net::Client,
    spec: &FeedSpec,
    params: &Params,
    entities: &mut Vec<Entity>,
) {
    let html = client.fetch_page(spec.feed);
    if html.is_empty() {
        info!("SKIP {} {}: no data", spec.sport, spec.event);
        return;
    }
    let matches = team::decode_page(&html, spec, params);
    info!("{} {}: {} finished matches", spec.sport, spec.event, matches.len());
    entities.extend(matches);
}

fn scrape_individual_feed(
    client: &net::Client,
    spec: &FeedSpec,
    params: &Params,
    entities: &mut Vec<Entity>,
) {
    let raw = client.fetch_feed(spec.feed);
    if raw.is_empty() {
        info!("SKIP {} {}: no data", spec.sport, spec.event);
        return;
    }
    let records = feed::tokenize(&raw);

    if let Some(e) = individual::decode(&records, spec, params) {
        if let Entity::Individual { results, .. } = &e {
            let n_home = results.iter().filter(|r| params.is_home_country(&r.country)).count();
            info!("{} {}: {} results ({} home)", spec.sport, spec.event, results.len(), n_home);
        }
        entities.push(e);
    } else if let Some(e) = startlist::decode(&records, spec, params) {
        if let Entity::Startlist { total, swe_athletes, .. } = &e {
            info!("{} {}: startlist {} athletes ({} home)",
                spec.sport, spec.event, total, swe_athletes.len());
        }
        entities.push(e);
    } else {
        info!("{} {}: no data", spec.sport, spec.event);
    }
}

/// One complete run: scrape, reconcile, persist on change.
/// Returns whether the state file was (or would have been) rewritten.
pub fn run(params: &Params) -> Result<bool, Box<dyn Error>> {
    let client = net::Client::new()?;
    let summary = scrape_all(&client, params);
    info!("scraped {} entities from {} attempted feeds",
        summary.entities.len(), summary.attempted.len());

    let previous = store::load(&params.out);
    let outcome = merge::reconcile(&previous.matches, summary.entities, &summary.attempted);

    if !outcome.changed {
        info!("no changes, not writing {}", params.out.display());
        return Ok(false);
    }
    if params.dry_run {
        info!("dry run: {} entities not written to {}",
            outcome.entities.len(), params.out.display());
        return Ok(true);
    }
    store::save(&params.out, &outcome.entities)?;
    info!("wrote {} entities to {}", outcome.entities.len(), params.out.display());
    Ok(true)
}
