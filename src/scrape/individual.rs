// src/scrape/individual.rs
//
// Individual-event decoder (alpine, cross-country, biathlon, ski jumping).
//
// Multi-round feeds (sprints with qualifying heats, two-run alpine events)
// interleave section-header records (ZAE) with row records. Only the totals
// round produces result rows; heat rounds contribute a per-athlete fallback
// time for rows the totals round leaves blank. Row attributes arrive as
// RAA/RAB pairs whose numeric attribute ids are a per-sport convention:
//
//   7 position · 5 time · 6 gap · 2 distance · 3 distance pts ·
//   4 style pts · 12/13 best single attempt · 9/10 penalties
//
// The emitted row set is the podium plus all home-federation athletes,
// de-duplicated by (name, country) with podium rows winning.

use std::collections::{HashMap, HashSet};

use tracing::info;

use crate::core::feed::Record;
use crate::core::name::full_name;
use crate::data::{AthleteRow, Entity, Status, UNRANKED};
use crate::params::{Params, TOTALS_ROUND};
use crate::specs::FeedSpec;

/// Decode a finished individual event. None when the event hasn't finished,
/// the payload has no usable rows, or the data is stale.
pub fn decode(records: &[Record], spec: &FeedSpec, params: &Params) -> Option<Entity> {
    if records.len() < 2 {
        return None;
    }

    // Rows keep their athlete identifier (WU slug) alongside for the
    // heat-time backfill; it is not part of the persisted row.
    let mut rows: Vec<(String, AthleteRow)> = Vec::new();
    let mut heat_times: HashMap<String, String> = HashMap::new();
    let mut has_finished = false;
    let mut event_ts: Option<i64> = None;
    let mut current_round: Option<String> = None;

    for rec in &records[1..] {
        if let Some(round) = rec.get("ZAE") {
            current_round = Some(s!(round));
            continue;
        }
        let Some(label) = rec.get("AE") else {
            continue;
        };

        if let Some(ad) = rec.get_int("AD") {
            if event_ts.is_none_or(|t| ad > t) {
                event_ts = Some(ad);
            }
        }

        let ra = rec.attrs();
        let wu = rec.get("WU").unwrap_or(label);

        // Heat/qualification rounds: collect fallback times only.
        if current_round.as_deref().is_some_and(|r| r != TOTALS_ROUND) {
            if let Some(t) = nonempty(&ra, "5") {
                if !heat_times.contains_key(wu) {
                    heat_times.insert(s!(wu), s!(t));
                }
            }
            continue;
        }

        if rec.get("AB") == Some("3") {
            has_finished = true;
        }

        let pos = nonempty(&ra, "7")
            .and_then(|p| p.parse().ok())
            .unwrap_or(UNRANKED);
        let mut row = AthleteRow::new(
            pos,
            full_name(label, rec.get("WU").unwrap_or("")),
            s!(rec.get("FU").unwrap_or("")),
        );
        row.time = nonempty(&ra, "5").map(str::to_string);
        row.diff = nonempty(&ra, "6").map(str::to_string);
        row.dist = nonempty(&ra, "2").map(str::to_string);
        row.dist_pts = nonempty(&ra, "3").map(str::to_string);
        row.style_pts = nonempty(&ra, "4").map(str::to_string);
        row.best_dist = nonempty(&ra, "12").map(str::to_string);
        row.best_pts = nonempty(&ra, "13").map(str::to_string);
        // Penalty count moves between attribute ids depending on the event.
        row.penalties = nonempty(&ra, "9")
            .or_else(|| nonempty(&ra, "10"))
            .and_then(|p| p.parse().ok());

        rows.push((s!(wu), row));
    }

    // Sprint events: totals rows often lack a time; take the heat time.
    if !heat_times.is_empty() {
        for (wu, row) in rows.iter_mut() {
            if row.time.is_none() {
                if let Some(t) = heat_times.get(wu) {
                    row.time = Some(t.clone());
                }
            }
        }
    }

    if !has_finished || rows.is_empty() {
        return None;
    }
    if let Some(ts) = event_ts {
        if ts < params.min_timestamp {
            info!("SKIP {} {}: old data (timestamp {} < {})",
                spec.sport, spec.event, ts, params.min_timestamp);
            return None;
        }
    }

    let mut athletes: Vec<AthleteRow> = rows.into_iter().map(|(_, r)| r).collect();
    athletes.sort_by_key(|a| a.pos);

    // Podium first, then home-federation rows; first occurrence of a
    // (name, country) pair wins.
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut filtered: Vec<AthleteRow> = Vec::new();
    let podium = athletes.iter().filter(|a| a.pos <= 3);
    let home = athletes.iter().filter(|a| params.is_home_country(&a.country));
    for a in podium.chain(home) {
        if seen.insert((a.name.clone(), a.country.clone())) {
            filtered.push(a.clone());
        }
    }
    filtered.sort_by_key(|a| a.pos);

    if filtered.is_empty() {
        return None;
    }

    Some(Entity::Individual {
        sport: s!(spec.sport),
        event: s!(spec.event),
        status: Status::Finished,
        timestamp: event_ts,
        results: filtered,
    })
}

fn nonempty<'a>(ra: &HashMap<&str, &'a str>, key: &str) -> Option<&'a str> {
    ra.get(key).copied().filter(|v| !v.is_empty())
}
