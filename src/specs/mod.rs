// src/specs/mod.rs
//! # Feed specs
//!
//! Static catalog of the Flashscore targets we scrape. Each entry names one
//! (sport, event) pair, where its raw data lives, and which decoder family
//! handles it:
//!
//! - `FeedKind::Individual`: feed-API targets. `feed` is an id under
//!   `/x/feed/` yielding the delimiter-based record stream decoded by
//!   `scrape::individual` (falling back to `scrape::startlist` for events
//!   that haven't run yet).
//! - `FeedKind::Team`: HTML results pages. The feed API only exposes
//!   same-day matches, so full tournament history comes from the record
//!   stream embedded in the results page (`cjs.initialFeeds['results']`),
//!   decoded by `scrape::team`. Here `feed` is the page path.
//!
//! Specs are data, not behavior: decoder selection is driven by the declared
//! kind, never by sniffing payload content. Feed ids were collected by hand
//! from the site and are the one part of this table that goes stale between
//! editions.

/// Which decoder family a feed entry belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedKind {
    Team,
    Individual,
}

/// One scrape target: feed id (or page path), sport/event labels, kind.
pub struct FeedSpec {
    pub feed: &'static str,
    pub sport: &'static str,
    pub event: &'static str,
    pub kind: FeedKind,
}

pub static FEEDS: &[FeedSpec] = &[
    // ── Ishockey (HTML results pages) ──
    FeedSpec { feed: "/ishockey/varld/olympiska-spelen/resultat/", sport: "Ishockey", event: "Herrar", kind: FeedKind::Team },
    FeedSpec { feed: "/ishockey/varld/olympiska-spelen-damer/resultat/", sport: "Ishockey", event: "Damer", kind: FeedKind::Team },
    // ── Alpint ──
    FeedSpec { feed: "t_39_8401_OfheouK0_1_sv_1", sport: "Alpint", event: "Störtlopp herrar", kind: FeedKind::Individual },
    FeedSpec { feed: "t_39_8402_IyKiEbl0_1_sv_1", sport: "Alpint", event: "Störtlopp damer", kind: FeedKind::Individual },
    FeedSpec { feed: "t_39_8403_pAt4qJlD_1_sv_1", sport: "Alpint", event: "Super-G herrar", kind: FeedKind::Individual },
    FeedSpec { feed: "t_39_8404_M5UQDvZg_1_sv_1", sport: "Alpint", event: "Super-G damer", kind: FeedKind::Individual },
    FeedSpec { feed: "t_39_8405_KjH282RD_1_sv_1", sport: "Alpint", event: "Storslalom herrar", kind: FeedKind::Individual },
    FeedSpec { feed: "t_39_8406_IRdw204s_1_sv_1", sport: "Alpint", event: "Storslalom damer", kind: FeedKind::Individual },
    FeedSpec { feed: "t_39_8407_bsG67MtK_1_sv_1", sport: "Alpint", event: "Slalom herrar", kind: FeedKind::Individual },
    FeedSpec { feed: "t_39_8408_vc7EEKJm_1_sv_1", sport: "Alpint", event: "Slalom damer", kind: FeedKind::Individual },
    FeedSpec { feed: "t_39_28273_I3qVGY4S_1_sv_1", sport: "Alpint", event: "Lagkombination herrar", kind: FeedKind::Individual },
    FeedSpec { feed: "t_39_28275_xGt40CSk_1_sv_1", sport: "Alpint", event: "Lagkombination damer", kind: FeedKind::Individual },
    // ── Längdskidor ──
    FeedSpec { feed: "t_40_8462_tvqeUbWm_1_sv_1", sport: "Längdskidor", event: "Sprint klassisk herrar", kind: FeedKind::Individual },
    FeedSpec { feed: "t_40_8463_On67TIof_1_sv_1", sport: "Längdskidor", event: "Sprint klassisk damer", kind: FeedKind::Individual },
    FeedSpec { feed: "t_40_8535_2HOS5urr_1_sv_1", sport: "Längdskidor", event: "Sprint fristil herrar", kind: FeedKind::Individual },
    FeedSpec { feed: "t_40_8536_WUyu9LZQ_1_sv_1", sport: "Längdskidor", event: "Sprint fristil damer", kind: FeedKind::Individual },
    FeedSpec { feed: "t_40_8466_v9kUjyhL_1_sv_1", sport: "Längdskidor", event: "Skiathlon herrar", kind: FeedKind::Individual },
    FeedSpec { feed: "t_40_8467_zuueie7R_1_sv_1", sport: "Längdskidor", event: "Skiathlon damer", kind: FeedKind::Individual },
    FeedSpec { feed: "t_40_8527_8E020FFr_1_sv_1", sport: "Längdskidor", event: "Individuell fristil herrar", kind: FeedKind::Individual },
    FeedSpec { feed: "t_40_8528_2y06aZUl_1_sv_1", sport: "Längdskidor", event: "Individuell fristil damer", kind: FeedKind::Individual },
    FeedSpec { feed: "t_40_8460_Slyp4JCf_1_sv_1", sport: "Längdskidor", event: "Individuell klassisk herrar", kind: FeedKind::Individual },
    FeedSpec { feed: "t_40_8461_pQou5acl_1_sv_1", sport: "Längdskidor", event: "Individuell klassisk damer", kind: FeedKind::Individual },
    FeedSpec { feed: "t_40_8468_Gv4Abgpe_1_sv_1", sport: "Längdskidor", event: "Masstart klassisk herrar", kind: FeedKind::Individual },
    FeedSpec { feed: "t_40_8469_b3gFcDa1_1_sv_1", sport: "Längdskidor", event: "Masstart klassisk damer", kind: FeedKind::Individual },
    FeedSpec { feed: "t_40_8472_0Sc2elMN_1_sv_1", sport: "Längdskidor", event: "Stafett herrar", kind: FeedKind::Individual },
    FeedSpec { feed: "t_40_8473_KY9Le8yU_1_sv_1", sport: "Längdskidor", event: "Stafett damer", kind: FeedKind::Individual },
    // ── Skidskytte ──
    FeedSpec { feed: "t_41_8456_bRNPS2EC_1_sv_1", sport: "Skidskytte", event: "Mixedstafett", kind: FeedKind::Individual },
    FeedSpec { feed: "t_41_8446_tUJuI4Ug_1_sv_1", sport: "Skidskytte", event: "Individuell herrar", kind: FeedKind::Individual },
    FeedSpec { feed: "t_41_8447_bLdTIpFm_1_sv_1", sport: "Skidskytte", event: "Individuell damer", kind: FeedKind::Individual },
    FeedSpec { feed: "t_41_8448_AVOlmZF8_1_sv_1", sport: "Skidskytte", event: "Sprint herrar", kind: FeedKind::Individual },
    FeedSpec { feed: "t_41_8449_dSKplF02_1_sv_1", sport: "Skidskytte", event: "Sprint damer", kind: FeedKind::Individual },
    FeedSpec { feed: "t_41_8450_tIoMUQas_1_sv_1", sport: "Skidskytte", event: "Jaktstart herrar", kind: FeedKind::Individual },
    FeedSpec { feed: "t_41_8451_4hOhngVE_1_sv_1", sport: "Skidskytte", event: "Jaktstart damer", kind: FeedKind::Individual },
    FeedSpec { feed: "t_41_8452_G2YKTra6_1_sv_1", sport: "Skidskytte", event: "Masstart herrar", kind: FeedKind::Individual },
    FeedSpec { feed: "t_41_8453_2aUGUOq0_1_sv_1", sport: "Skidskytte", event: "Masstart damer", kind: FeedKind::Individual },
    FeedSpec { feed: "t_41_8454_8pZuh66J_1_sv_1", sport: "Skidskytte", event: "Stafett herrar", kind: FeedKind::Individual },
    FeedSpec { feed: "t_41_8455_xIMTRMTI_1_sv_1", sport: "Skidskytte", event: "Stafett damer", kind: FeedKind::Individual },
    // ── Backhoppning ──
    FeedSpec { feed: "t_38_8416_nVMa9LU8_1_sv_1", sport: "Backhoppning", event: "Normalbacke herrar", kind: FeedKind::Individual },
    FeedSpec { feed: "t_38_8417_ljWf8gPM_1_sv_1", sport: "Backhoppning", event: "Normalbacke damer", kind: FeedKind::Individual },
    FeedSpec { feed: "t_38_13911_WELa7DvT_1_sv_1", sport: "Backhoppning", event: "Normalbacke mixed", kind: FeedKind::Individual },
    FeedSpec { feed: "t_38_8418_thM38upF_1_sv_1", sport: "Backhoppning", event: "Storbacke herrar", kind: FeedKind::Individual },
    FeedSpec { feed: "t_38_8419_0th0i9wQ_1_sv_1", sport: "Backhoppning", event: "Storbacke damer", kind: FeedKind::Individual },
    FeedSpec { feed: "t_38_8544_KrL77aaL_1_sv_1", sport: "Backhoppning", event: "Storbacke lag", kind: FeedKind::Individual },
];
