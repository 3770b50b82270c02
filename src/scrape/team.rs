// src/scrape/team.rs
//
// Team-match decoder (hockey). A match record is any record carrying the
// match-id key AA. Status code AB: 3 = finished, 2 = live, anything else
// scheduled. Only finished matches are emitted.
//
// Format quirk: some feeds put the away side in a sibling record instead of
// AF/FK on the match record itself, so a missing away team falls through to
// the *next* record's name fields. There is no validating marker for that
// pairing; if the away side still can't be found the match is dropped rather
// than guessed at.

use tracing::debug;

use crate::core::feed::{self, Record};
use crate::data::{Entity, Status};
use crate::params::Params;
use crate::specs::FeedSpec;

/// Period-score key pairs (home, away) in period order.
const PERIOD_KEYS: [(&str, &str); 3] = [("BA", "BB"), ("BC", "BD"), ("BE", "BF")];

/// Decode a team-sport payload into finished matches.
pub fn decode(records: &[Record], spec: &FeedSpec, params: &Params) -> Vec<Entity> {
    let mut matches = Vec::new();

    for (i, rec) in records.iter().enumerate() {
        if !rec.has("AA") {
            continue; // header/metadata or other non-match record
        }

        let status = match rec.get("AB") {
            Some("3") => Status::Finished,
            Some("2") => Status::Live,
            _ => Status::Scheduled,
        };
        if status != Status::Finished {
            continue;
        }

        let timestamp = rec.get_int("AD");
        if let Some(ts) = timestamp {
            if ts < params.min_timestamp {
                continue; // previous edition's result still cached upstream
            }
        }

        let home = clean_team(rec.get("CX").or(rec.get("AE")).unwrap_or(""));
        let mut away = clean_team(rec.get("AF").or(rec.get("FK")).unwrap_or(""));
        if away.is_empty() {
            // Away side lives in the sibling record for some feeds.
            if let Some(next) = records.get(i + 1) {
                away = clean_team(next.get("CX").or(next.get("AE")).unwrap_or(""));
            }
        }
        if away.is_empty() {
            debug!("{} {}: match {} has no away side, dropped",
                spec.sport, spec.event, rec.get("AA").unwrap_or("?"));
            continue;
        }

        matches.push(Entity::Team {
            sport: s!(spec.sport),
            event: s!(spec.event),
            event_id: s!(rec.get("AA").unwrap_or("")),
            home,
            away,
            home_score: rec.get_int("AG"),
            away_score: rec.get_int("AH"),
            status,
            timestamp,
            periods: periods(rec),
        });
    }

    matches
}

/// Decode the record stream embedded in an HTML results page.
pub fn decode_page(html: &str, spec: &FeedSpec, params: &Params) -> Vec<Entity> {
    match extract_embedded(html) {
        Some(blob) => decode(&feed::tokenize(blob), spec, params),
        None => {
            debug!("{} {}: no embedded results data in page", spec.sport, spec.event);
            Vec::new()
        }
    }
}

/// Locate the backtick-quoted record stream in
/// `cjs.initialFeeds['results'] = { data: `...` }`.
fn extract_embedded(html: &str) -> Option<&str> {
    let anchor = html.find("cjs.initialFeeds['results']")?;
    let rest = &html[anchor..];
    let data = rest.find("data:")?;
    let rest = &rest[data + "data:".len()..];
    let open = rest.find('`')?;
    let rest = &rest[open + 1..];
    let close = rest.find('`')?;
    Some(&rest[..close])
}

/// Comma-joined "h-a" period summary. A missing half of a pair reads as 0;
/// a pair with both halves missing is omitted.
fn periods(rec: &Record) -> String {
    let mut parts = Vec::new();
    for (h_key, a_key) in PERIOD_KEYS {
        let h = rec.get(h_key).unwrap_or("");
        let a = rec.get(a_key).unwrap_or("");
        if !h.is_empty() || !a.is_empty() {
            parts.push(format!(
                "{}-{}",
                if h.is_empty() { "0" } else { h },
                if a.is_empty() { "0" } else { a }
            ));
        }
    }
    parts.join(", ")
}

/// Strip the gender suffix ("Finland D" → "Finland").
fn clean_team(name: &str) -> String {
    match name.strip_suffix(" D") {
        Some(base) => s!(base),
        None => s!(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::FeedKind;

    fn spec() -> FeedSpec {
        FeedSpec { feed: "/x/", sport: "Ishockey", event: "Herrar", kind: FeedKind::Team }
    }

    fn decode_raw(raw: &str) -> Vec<Entity> {
        decode(&feed::tokenize(raw), &spec(), &Params::new())
    }

    #[test]
    fn finished_match_with_inline_away_side() {
        let raw = "SA÷1¬~ZA÷OS~\
            AA÷m1¬AB÷3¬AD÷1770000000¬CX÷Finland D¬AF÷Sverige D¬AG÷2¬AH÷1¬\
            BA÷1¬BB÷0¬BC÷1¬BD÷1¬BE÷0¬BF÷0";
        let out = decode_raw(raw);
        assert_eq!(out.len(), 1);
        let Entity::Team { home, away, home_score, away_score, status, periods, .. } = &out[0]
        else { panic!("expected team match") };
        assert_eq!(home, "Finland");
        assert_eq!(away, "Sverige");
        assert_eq!(*home_score, Some(2));
        assert_eq!(*away_score, Some(1));
        assert_eq!(*status, Status::Finished);
        assert_eq!(periods, "1-0, 1-1, 0-0");
    }

    #[test]
    fn away_side_from_sibling_record() {
        let raw = "SA÷1~AA÷m2¬AB÷3¬AD÷1770000000¬CX÷Tjeckien¬AG÷4¬AH÷3~AE÷Schweiz";
        let out = decode_raw(raw);
        assert_eq!(out.len(), 1);
        let Entity::Team { away, .. } = &out[0] else { panic!() };
        assert_eq!(away, "Schweiz");
    }

    #[test]
    fn missing_away_side_drops_the_match() {
        // Truncated payload ending mid-pair: no sibling record to read from.
        let raw = "SA÷1~AA÷m3¬AB÷3¬AD÷1770000000¬CX÷Kanada¬AG÷5¬AH÷0";
        assert!(decode_raw(raw).is_empty());
    }

    #[test]
    fn only_finished_matches_are_emitted() {
        let raw = "AA÷m4¬AB÷2¬AD÷1770000000¬CX÷USA¬AF÷Lettland~\
            AA÷m5¬AB÷1¬AD÷1770000000¬CX÷Norge¬AF÷Danmark";
        assert!(decode_raw(raw).is_empty());
    }

    #[test]
    fn stale_timestamp_is_skipped() {
        // 2022-02-10, a previous-edition result
        let raw = "AA÷m6¬AB÷3¬AD÷1644500000¬CX÷Finland¬AF÷ROC¬AG÷2¬AH÷1";
        assert!(decode_raw(raw).is_empty());
    }

    #[test]
    fn partial_period_pair_reads_missing_half_as_zero() {
        let raw = "AA÷m7¬AB÷3¬AD÷1770000000¬CX÷Norge¬AF÷Danmark¬BA÷2¬BC÷1¬BD÷1";
        let out = decode_raw(raw);
        let Entity::Team { periods, .. } = &out[0] else { panic!() };
        assert_eq!(periods, "2-0, 1-1");
    }

    #[test]
    fn extracts_embedded_page_data() {
        let html = "<html><script>\
            cjs.initialFeeds['results'] = { data: `SA÷1~AA÷m8¬AB÷3¬AD÷1770000000¬\
            CX÷Finland D¬AF÷Sverige D¬AG÷3¬AH÷2` };\
            </script></html>";
        let out = decode_page(html, &spec(), &Params::new());
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn page_without_embedded_data_yields_nothing() {
        assert!(decode_page("<html></html>", &spec(), &Params::new()).is_empty());
    }
}
