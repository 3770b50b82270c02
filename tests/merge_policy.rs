// tests/merge_policy.rs
//
// Reconciliation policy: a scheduled rerun against partially-failing feeds
// must never silently lose known-good data.

use std::collections::HashSet;

use fs_scrape::data::{AthleteRow, Entity, Status};
use fs_scrape::merge::reconcile;

fn individual(sport: &str, event: &str, winner: &str) -> Entity {
    Entity::Individual {
        sport: sport.into(),
        event: event.into(),
        status: Status::Finished,
        timestamp: Some(1_770_100_000),
        results: vec![AthleteRow::new(1, winner.into(), "Norge".into())],
    }
}

fn startlist(sport: &str, event: &str) -> Entity {
    Entity::Startlist {
        sport: sport.into(),
        event: event.into(),
        status: Status::Scheduled,
        total: 0,
        swe_athletes: vec![],
        athletes: vec![],
    }
}

fn keys(entities: &[Entity]) -> Vec<String> {
    entities.iter().map(Entity::key).collect()
}

fn attempted(list: &[&Entity]) -> HashSet<String> {
    list.iter().map(|e| e.key()).collect()
}

#[test]
fn attempted_but_empty_key_is_retired() {
    let a = individual("Alpint", "Slalom herrar", "X");
    let b = individual("Alpint", "Slalom damer", "Y");
    let previous = vec![a.clone(), b.clone()];

    let out = reconcile(&previous, vec![a.clone()], &attempted(&[&a, &b]));
    assert!(out.changed);
    assert_eq!(keys(&out.entities), vec![a.key()]);
}

#[test]
fn total_outage_keeps_everything_without_a_write() {
    let a = individual("Alpint", "Slalom herrar", "X");
    let b = individual("Alpint", "Slalom damer", "Y");
    let previous = vec![a.clone(), b.clone()];

    // Attempted set is irrelevant when the whole batch came back empty.
    let out = reconcile(&previous, vec![], &attempted(&[&a, &b]));
    assert!(!out.changed);
    assert_eq!(out.entities, previous);
}

#[test]
fn unattempted_keys_survive_partial_coverage() {
    let a = individual("Skidskytte", "Sprint herrar", "X");
    let b = individual("Skidskytte", "Sprint damer", "Y");
    let a_updated = individual("Skidskytte", "Sprint herrar", "Z");
    let previous = vec![a.clone(), b.clone()];

    let out = reconcile(&previous, vec![a_updated.clone()], &attempted(&[&a]));
    assert!(out.changed);
    assert_eq!(out.entities, vec![a_updated, b]);
}

#[test]
fn identical_rescrape_is_unchanged() {
    let a = individual("Backhoppning", "Storbacke herrar", "X");
    let previous = vec![a.clone()];

    let out = reconcile(&previous, vec![a.clone()], &attempted(&[&a]));
    assert!(!out.changed);
    assert_eq!(out.entities, previous);
}

#[test]
fn new_key_is_added() {
    let a = individual("Alpint", "Super-G herrar", "X");
    let c = individual("Alpint", "Super-G damer", "Y");

    let out = reconcile(&[a.clone()], vec![a.clone(), c.clone()], &attempted(&[&a, &c]));
    assert!(out.changed);
    assert_eq!(out.entities, vec![a, c]);
}

#[test]
fn result_replaces_start_list_under_the_same_key() {
    let sl = startlist("Längdskidor", "Sprint klassisk herrar");
    let res = individual("Längdskidor", "Sprint klassisk herrar", "X");
    assert_eq!(sl.key(), res.key());

    let out = reconcile(&[sl.clone()], vec![res.clone()], &attempted(&[&sl]));
    assert!(out.changed);
    assert_eq!(out.entities, vec![res]);
}

#[test]
fn first_run_with_nothing_at_all_is_a_no_op() {
    let out = reconcile(&[], vec![], &HashSet::new());
    assert!(!out.changed);
    assert!(out.entities.is_empty());
}
