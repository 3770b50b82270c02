// src/data.rs
//
// Decoded entities and their persisted JSON shape. Field names here are the
// boundary contract with the site backend that reads the state file; keep
// them stable (`type` tag, `swe_athletes`, `dist_pts`, …).

use serde::{Deserialize, Serialize};

/// Position assigned to rows the feed leaves unranked; sorts last.
pub const UNRANKED: i64 = 999;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Finished,
    Live,
    Scheduled,
}

/// One line of an individual-event result. Which metrics are present depends
/// on the sport: time/diff for the clock sports, dist/points for ski jumping,
/// penalties for biathlon.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AthleteRow {
    pub pos: i64,
    pub name: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dist_pts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_pts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_dist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_pts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalties: Option<i64>,
}

impl AthleteRow {
    pub fn new(pos: i64, name: String, country: String) -> Self {
        Self {
            pos,
            name,
            country,
            time: None,
            diff: None,
            dist: None,
            dist_pts: None,
            style_pts: None,
            best_dist: None,
            best_pts: None,
            penalties: None,
        }
    }
}

/// Start-list entry. Bib is optional; seeding feeds publish it late.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Starter {
    pub name: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bib: Option<i64>,
}

/// A decoded result of one feed entry for one run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Entity {
    #[serde(rename = "team")]
    Team {
        sport: String,
        event: String,
        event_id: String,
        home: String,
        away: String,
        home_score: Option<i64>,
        away_score: Option<i64>,
        status: Status,
        timestamp: Option<i64>,
        periods: String,
    },
    #[serde(rename = "individual")]
    Individual {
        sport: String,
        event: String,
        status: Status,
        timestamp: Option<i64>,
        results: Vec<AthleteRow>,
    },
    #[serde(rename = "startlist")]
    Startlist {
        sport: String,
        event: String,
        status: Status,
        total: usize,
        swe_athletes: Vec<Starter>,
        athletes: Vec<Starter>,
    },
}

impl Entity {
    /// Stable identifier used to merge an entity across runs.
    /// Team matches key on the pairing as well; result/start lists are
    /// one-per-event and share a key so a start list is replaced by the
    /// result once the event finishes.
    pub fn key(&self) -> String {
        match self {
            Entity::Team {
                sport, event, home, away, ..
            } => format!("{}:{}:{}-{}", sport, event, home, away),
            Entity::Individual { sport, event, .. }
            | Entity::Startlist { sport, event, .. } => format!("{}:{}", sport, event),
        }
    }
}

/// Derived key for a feed entry before any decode has happened (used to mark
/// attempted feeds whose decode produced nothing).
pub fn event_key(sport: &str, event: &str) -> String {
    format!("{}:{}", sport, event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_follow_sport_event_shape() {
        let ind = Entity::Individual {
            sport: s!("Alpint"),
            event: s!("Slalom herrar"),
            status: Status::Finished,
            timestamp: Some(1_770_000_000),
            results: vec![],
        };
        assert_eq!(ind.key(), "Alpint:Slalom herrar");

        let team = Entity::Team {
            sport: s!("Ishockey"),
            event: s!("Herrar"),
            event_id: s!("xyz"),
            home: s!("Finland"),
            away: s!("Sverige"),
            home_score: Some(2),
            away_score: Some(1),
            status: Status::Finished,
            timestamp: Some(1_770_000_000),
            periods: s!("1-0, 1-1, 0-0"),
        };
        assert_eq!(team.key(), "Ishockey:Herrar:Finland-Sverige");
    }

    #[test]
    fn serialized_shape_keeps_boundary_names() {
        let e = Entity::Startlist {
            sport: s!("Skidskytte"),
            event: s!("Sprint damer"),
            status: Status::Scheduled,
            total: 1,
            swe_athletes: vec![],
            athletes: vec![Starter {
                name: s!("Elvira Öberg"),
                country: s!("Sverige"),
                bib: None,
            }],
        };
        let v = serde_json::to_value(&e).unwrap();
        assert_eq!(v["type"], "startlist");
        assert_eq!(v["total"], 1);
        assert!(v["athletes"][0].get("bib").is_none());
        assert!(v.get("swe_athletes").is_some());
    }

    #[test]
    fn absent_metrics_are_omitted() {
        let row = AthleteRow::new(1, s!("A"), s!("Norge"));
        let v = serde_json::to_value(&row).unwrap();
        assert!(v.get("time").is_none());
        assert!(v.get("penalties").is_none());
        assert_eq!(v["pos"], 1);
    }
}
