use std::collections::{BTreeMap, HashMap};

use anyhow::Result;
use chrono::{DateTime, Local};
use url::Url;

use crate::models::{Article, Digest, Division, DivisionBucket, HighlightLink, StandoutMoment};

const HIGHLIGHT_SEARCH_URL: &str = "https://www.youtube.com/results";

/// Static YouTube search link for a division. Nothing is fetched.
pub fn highlight_links(division: Division) -> Result<Vec<HighlightLink>> {
    let query = format!("{} highlights this week", division.name());
    let search_url = Url::parse_with_params(HIGHLIGHT_SEARCH_URL, &[("search_query", &query)])?;

    Ok(vec![HighlightLink {
        title: format!("{} - Week Highlights", query),
        search_url: search_url.to_string(),
        embed_id: None,
    }])
}

pub fn all_highlight_links() -> Result<HashMap<Division, Vec<HighlightLink>>> {
    Division::ALL
        .iter()
        .map(|&division| Ok((division, highlight_links(division)?)))
        .collect()
}

/// Compose the final digest. Every division gets a bucket, even when no
/// articles or highlights were supplied for it.
pub fn assemble(
    mut ranked: HashMap<Division, Vec<Article>>,
    standouts: Vec<StandoutMoment>,
    mut highlights: HashMap<Division, Vec<HighlightLink>>,
    generated_at: DateTime<Local>,
) -> Digest {
    let divisions: BTreeMap<Division, DivisionBucket> = Division::ALL
        .iter()
        .map(|&division| {
            let bucket = DivisionBucket {
                name: division.name().to_string(),
                articles: ranked.remove(&division).unwrap_or_default(),
                highlights: highlights.remove(&division).unwrap_or_default(),
            };
            (division, bucket)
        })
        .collect();

    Digest {
        generated_date: generated_at.format("%Y-%m-%d").to_string(),
        week_ending: generated_at.format("%B %d, %Y").to_string(),
        divisions,
        standout_moments: standouts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use serde_json::json;

    fn sample_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 17, 9, 0, 0).unwrap()
    }

    #[test]
    fn highlight_link_uses_form_encoded_query() {
        let links = highlight_links(Division::LeagueOne).unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].title, "League One highlights this week - Week Highlights");
        assert_eq!(
            links[0].search_url,
            "https://www.youtube.com/results?search_query=League+One+highlights+this+week"
        );
        assert_eq!(links[0].embed_id, None);
    }

    #[test]
    fn empty_division_still_present_with_highlights() {
        let digest = assemble(
            HashMap::new(),
            Vec::new(),
            all_highlight_links().unwrap(),
            sample_time(),
        );

        assert_eq!(digest.divisions.len(), Division::ALL.len());
        for division in Division::ALL {
            let bucket = &digest.divisions[&division];
            assert_eq!(bucket.name, division.name());
            assert!(bucket.articles.is_empty());
            assert_eq!(bucket.highlights.len(), 1);
        }
    }

    #[test]
    fn dates_and_json_shape() {
        let mut ranked = HashMap::new();
        ranked.insert(
            Division::LeagueTwo,
            vec![Article {
                title: "Grimsby stun leaders".to_string(),
                link: "https://example.com/grimsby".to_string(),
                published: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
                summary: "Shock win.".to_string(),
                image: None,
                division: Division::LeagueTwo,
            }],
        );
        let standouts = vec![StandoutMoment {
            moment: "Grimsby stun leaders".to_string(),
            link: "https://example.com/grimsby".to_string(),
        }];

        let digest = assemble(ranked, standouts, HashMap::new(), sample_time());
        assert_eq!(digest.generated_date, "2026-10-17");
        assert_eq!(digest.week_ending, "October 17, 2026");

        let value = serde_json::to_value(&digest).unwrap();
        let keys: Vec<&String> = value["divisions"].as_object().unwrap().keys().collect();
        assert_eq!(
            keys.len(),
            5,
            "all five division keys serialized: {keys:?}"
        );
        assert_eq!(
            value["divisions"]["league_two"]["articles"][0],
            json!({
                "title": "Grimsby stun leaders",
                "link": "https://example.com/grimsby",
                "published": "2026-10-16",
                "summary": "Shock win.",
            })
        );
        assert_eq!(
            value["standout_moments"][0]["moment"],
            json!("Grimsby stun leaders")
        );
    }
}
