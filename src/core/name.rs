// src/core/name.rs
//
// Athlete name reconstruction.
//
// Feeds abbreviate names ("Klaebo J. H.") but also carry a URL slug with the
// full name transliterated to ASCII ("klaebo-johannes-hoesflot"). Combining
// the two recovers a display name with diacritics, but both halves are lossy:
// the slug strips diacritics to digraphs and the label tells us only *how
// many* given names there are. Best-effort only, never authoritative.

/// Restore common Nordic/European diacritics from ASCII digraphs.
/// `hagstroem` → `hagström`, `Aeregaard` → `Äregaard`.
pub fn fix_diacritics(s: &str) -> String {
    let mut out = s!(s);
    for (ascii, ch, ascii_cap, ch_cap) in [
        ("oe", "ö", "Oe", "Ö"),
        ("ae", "ä", "Ae", "Ä"),
        ("ue", "ü", "Ue", "Ü"),
    ] {
        out = out.replace(ascii, ch).replace(ascii_cap, ch_cap);
    }
    out
}

/// Title-case one slug segment: uppercase every letter that follows a
/// non-letter, lowercase the rest (`o'brien` → `O'Brien`).
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

/// Reconstruct a full display name from the abbreviated label plus the slug.
///
/// `full_name("Klaebo J. H.", "klaebo-johannes-hoesflot")`
/// → `"Johannes Hösflot Kläbo"`
///
/// The number of initial-looking tokens in the label (length ≤ 3, trailing
/// period) decides how many trailing slug segments are given names; the rest
/// is the surname. When that count is zero, or the slug is unusable, the
/// label itself (diacritics restored) is returned unchanged.
pub fn full_name(label: &str, slug: &str) -> String {
    if label.is_empty() {
        return s!(label);
    }
    if slug.is_empty() {
        return fix_diacritics(label);
    }
    let parts: Vec<&str> = slug.split('-').collect();
    if parts.len() < 2 {
        return fix_diacritics(label);
    }

    let initials = label
        .split_whitespace()
        .filter(|w| w.len() <= 3 && w.ends_with('.'))
        .count();
    if initials == 0 {
        return fix_diacritics(label);
    }

    let n_given = initials.min(parts.len() - 1);
    let split_at = parts.len() - n_given;
    let restore = |segs: &[&str]| {
        segs.iter()
            .map(|p| title_case(&fix_diacritics(p)))
            .collect::<Vec<_>>()
            .join(" ")
    };
    let surname = restore(&parts[..split_at]);
    let given = restore(&parts[split_at..]);
    if given.is_empty() {
        surname
    } else {
        format!("{} {}", given, surname)
    }
}
