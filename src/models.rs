use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Competitions the digest is bucketed by. Declaration order is the
/// order divisions appear in the digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Division {
    PremierLeague,
    Championship,
    LeagueOne,
    LeagueTwo,
    WorldCup,
}

impl Division {
    pub const ALL: [Division; 5] = [
        Division::PremierLeague,
        Division::Championship,
        Division::LeagueOne,
        Division::LeagueTwo,
        Division::WorldCup,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Division::PremierLeague => "Premier League",
            Division::Championship => "Championship",
            Division::LeagueOne => "League One",
            Division::LeagueTwo => "League Two",
            Division::WorldCup => "World Cup",
        }
    }
}

/// One feed item as fetched, before classification.
#[derive(Debug, Clone)]
pub struct RawEntry {
    pub title: String,
    pub link: String,
    pub published: DateTime<Utc>,
    pub summary: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    pub title: String,
    pub link: String,
    pub published: NaiveDate,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip)]
    pub division: Division,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightLink {
    pub title: String,
    pub search_url: String,
    pub embed_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivisionBucket {
    pub name: String,
    pub articles: Vec<Article>,
    pub highlights: Vec<HighlightLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandoutMoment {
    pub moment: String,
    pub link: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Digest {
    pub generated_date: String,
    pub week_ending: String,
    pub divisions: BTreeMap<Division, DivisionBucket>,
    pub standout_moments: Vec<StandoutMoment>,
}

/// An item that was dropped without aborting the run.
#[derive(Debug, Clone, PartialEq)]
pub struct Skipped {
    pub source: String,
    pub reason: String,
}
