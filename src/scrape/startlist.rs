// src/scrape/startlist.rs
//
// Start-list decoder for events that haven't run yet. Tried by the runner
// when the individual decoder yields nothing: the same payload then usually
// holds scheduled rows (status code 1) carrying name, country and start bib
// (attribute id 7 doubles as the bib before the event has a result).

use crate::core::feed::Record;
use crate::core::name::full_name;
use crate::data::{Entity, Starter, Status};
use crate::params::{Params, TOTALS_ROUND};
use crate::specs::FeedSpec;

/// Decode a start list. None unless at least one scheduled row exists.
pub fn decode(records: &[Record], spec: &FeedSpec, params: &Params) -> Option<Entity> {
    if records.len() < 2 {
        return None;
    }

    let mut athletes: Vec<Starter> = Vec::new();
    let mut has_scheduled = false;
    let mut current_round: Option<String> = None;

    for rec in &records[1..] {
        if let Some(round) = rec.get("ZAE") {
            current_round = Some(s!(round));
            continue;
        }
        let Some(label) = rec.get("AE") else {
            continue;
        };
        // Sub-rounds of multi-round events never hold the start list.
        if current_round.as_deref().is_some_and(|r| r != TOTALS_ROUND) {
            continue;
        }

        if rec.get("AB") == Some("1") {
            has_scheduled = true;
        }

        let ra = rec.attrs();
        let bib = ra
            .get("7")
            .filter(|v| !v.is_empty())
            .and_then(|v| v.parse().ok());
        athletes.push(Starter {
            name: full_name(label, rec.get("WU").unwrap_or("")),
            country: s!(rec.get("FU").unwrap_or("")),
            bib,
        });
    }

    if !has_scheduled || athletes.is_empty() {
        return None;
    }

    let home: Vec<Starter> = athletes
        .iter()
        .filter(|a| params.is_home_country(&a.country))
        .cloned()
        .collect();

    Some(Entity::Startlist {
        sport: s!(spec.sport),
        event: s!(spec.event),
        status: Status::Scheduled,
        total: athletes.len(),
        swe_athletes: home,
        athletes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::feed::tokenize;
    use crate::specs::FeedKind;

    fn spec() -> FeedSpec {
        FeedSpec {
            feed: "t_41_x",
            sport: "Skidskytte",
            event: "Sprint damer",
            kind: FeedKind::Individual,
        }
    }

    fn decode_raw(raw: &str) -> Option<Entity> {
        decode(&tokenize(raw), &spec(), &Params::new())
    }

    #[test]
    fn scheduled_rows_become_a_start_list() {
        let raw = "SA÷1\
            ~AE÷Oeberg E.¬WU÷oeberg-elvira¬FU÷Sverige¬AB÷1¬RAA÷7¬RAB÷12\
            ~AE÷Simon J.¬WU÷simon-julia¬FU÷Frankrike¬AB÷1¬RAA÷7¬RAB÷3";
        let e = decode_raw(raw).expect("decodes");
        let Entity::Startlist { status, total, swe_athletes, athletes, .. } = &e else {
            panic!("expected start list");
        };
        assert_eq!(*status, Status::Scheduled);
        assert_eq!(*total, 2);
        assert_eq!(athletes[0].name, "Elvira Öberg");
        assert_eq!(athletes[0].bib, Some(12));
        assert_eq!(swe_athletes.len(), 1);
        assert_eq!(swe_athletes[0].name, "Elvira Öberg");
    }

    #[test]
    fn missing_bib_is_none() {
        let raw = "SA÷1~AE÷Braisaz J.¬WU÷braisaz-justine¬FU÷Frankrike¬AB÷1";
        let e = decode_raw(raw).expect("decodes");
        let Entity::Startlist { athletes, .. } = &e else { panic!() };
        assert_eq!(athletes[0].bib, None);
    }

    #[test]
    fn nothing_without_a_scheduled_row() {
        // Finished rows only: this payload belongs to the result decoder.
        let raw = "SA÷1~AE÷Oeberg E.¬WU÷oeberg-elvira¬FU÷Sverige¬AB÷3¬RAA÷7¬RAB÷1";
        assert!(decode_raw(raw).is_none());
    }

    #[test]
    fn sub_round_rows_are_ignored() {
        let raw = "SA÷1\
            ~ZAE÷Kvartsfinal 1\
            ~AE÷A¬WU÷a-b¬FU÷Norge¬AB÷1\
            ~ZAE÷Totalt\
            ~AE÷B¬WU÷b-c¬FU÷Norge¬AB÷1";
        let e = decode_raw(raw).expect("decodes");
        let Entity::Startlist { total, .. } = &e else { panic!() };
        assert_eq!(*total, 1);
    }
}
