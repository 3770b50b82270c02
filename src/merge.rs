// src/merge.rs
//
// Stale-aware merge of one scrape run against the previously persisted
// entity set. Policy, per key:
//
//   attempted and decoded      → new data wins
//   attempted, nothing decoded → retire the old entry (the feed was queried
//                                again and yielded nothing; format/schedule
//                                changed upstream)
//   never attempted            → keep the old entry (feed not in scope this
//                                run)
//   whole run empty            → keep everything, no write (a total upstream
//                                outage must not read as "all retired")
//
// Runs once per full batch; decode order within the batch is irrelevant.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use crate::data::Entity;

pub struct Reconciled {
    pub entities: Vec<Entity>,
    pub changed: bool,
}

/// Combine this run's decoded entities with the previous set.
/// `attempted` holds the derived keys whose feed was queried this run,
/// whether or not decoding produced anything.
pub fn reconcile(previous: &[Entity], current: Vec<Entity>, attempted: &HashSet<String>) -> Reconciled {
    if current.is_empty() && !previous.is_empty() {
        info!("scrape produced no entities, keeping existing data");
        return Reconciled { entities: previous.to_vec(), changed: false };
    }

    let new_keys: HashSet<String> = current.iter().map(Entity::key).collect();

    // Previous entries first (minus retirements), then the overlay; keeps
    // the persisted file in a stable order across runs.
    let mut merged: Vec<(String, Entity)> = Vec::new();
    for e in previous {
        let key = e.key();
        if attempted.contains(&key) && !new_keys.contains(&key) {
            info!("REMOVE stale: {key}");
            continue;
        }
        merged.push((key, e.clone()));
    }
    for e in current {
        let key = e.key();
        match merged.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = e,
            None => merged.push((key, e)),
        }
    }

    let changed = !same_set(previous, &merged);
    if !changed {
        debug!("no changes");
    }
    Reconciled {
        entities: merged.into_iter().map(|(_, e)| e).collect(),
        changed,
    }
}

/// Order-insensitive comparison by derived key.
fn same_set(previous: &[Entity], merged: &[(String, Entity)]) -> bool {
    if previous.len() != merged.len() {
        return false;
    }
    let prev: HashMap<String, &Entity> = previous.iter().map(|e| (e.key(), e)).collect();
    merged
        .iter()
        .all(|(k, e)| prev.get(k).is_some_and(|p| *p == e))
}
