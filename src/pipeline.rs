use std::collections::HashMap;

use anyhow::Result;
use chrono::{DateTime, Local};
use log::{debug, info};

use crate::classifier::accept;
use crate::config::Config;
use crate::digest::{all_highlight_links, assemble};
use crate::models::{Article, Digest, Division, RawEntry, Skipped};
use crate::ranker::rank;
use crate::standouts::extract_standouts;

pub struct DigestRun {
    pub digest: Digest,
    /// Entries classified as not football news.
    pub rejected: usize,
    pub skipped: Vec<Skipped>,
}

/// Classify, bucket and rank fetched entries, then assemble the digest.
///
/// `skipped` carries diagnostics from earlier stages so they end up in a
/// single report.
pub fn build_digest(
    entries: Vec<RawEntry>,
    skipped: Vec<Skipped>,
    config: &Config,
    generated_at: DateTime<Local>,
) -> Result<DigestRun> {
    let limits = &config.limits;
    let vocab = &config.vocabulary;

    let mut buckets: HashMap<Division, Vec<Article>> = HashMap::new();
    let mut rejected = 0;

    for entry in &entries {
        match accept(entry, vocab, limits.summary_chars) {
            Some(article) => {
                debug!("{:?} <- {}", article.division, article.title);
                buckets.entry(article.division).or_default().push(article);
            }
            None => {
                debug!("Rejected as off-topic: {}", entry.title);
                rejected += 1;
            }
        }
    }

    info!(
        "Classified {} entries: {} accepted, {} rejected",
        entries.len(),
        entries.len() - rejected,
        rejected
    );

    // Rank deep enough for the standout scan, then cut each bucket to size.
    let depth = limits.standout_scan_depth.max(limits.articles_per_division);
    let mut ranked: HashMap<Division, Vec<Article>> = HashMap::new();
    let mut standout_pool: Vec<Article> = Vec::new();

    for division in Division::ALL {
        let mut articles = rank(buckets.remove(&division).unwrap_or_default(), depth);
        standout_pool.extend(articles.iter().take(limits.standout_scan_depth).cloned());
        articles.truncate(limits.articles_per_division);
        info!("{}: {} articles", division.name(), articles.len());
        ranked.insert(division, articles);
    }

    let standouts = extract_standouts(&standout_pool, &vocab.standout, limits.standouts);
    info!("Found {} standout moments", standouts.len());

    let digest = assemble(ranked, standouts, all_highlight_links()?, generated_at);

    Ok(DigestRun {
        digest,
        rejected,
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn entry(title: &str, summary: &str, link: &str, day: u32) -> RawEntry {
        RawEntry {
            title: title.to_string(),
            link: link.to_string(),
            published: Utc.with_ymd_and_hms(2026, 10, day, 12, 0, 0).unwrap(),
            summary: summary.to_string(),
            image: None,
        }
    }

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 17, 9, 0, 0).unwrap()
    }

    #[test]
    fn end_to_end_buckets_ranks_and_flags_standouts() {
        let entries = vec![
            entry("Arsenal sign striker in record transfer", "", "https://a/1", 14),
            entry("England beat Australia in Ashes thriller", "cricket highlights", "https://a/2", 15),
            entry("Club X wins 3-0", "Grimsby match report", "https://a/3", 13),
            entry("Club X wins 3-0", "Grimsby match report", "https://a/4", 16),
            entry("Chelsea edge Spurs", "A London derby as the league leaders win", "https://a/5", 16),
        ];
        let skipped = vec![Skipped {
            source: "https://feed.example/rss".to_string(),
            reason: "HTTP error".to_string(),
        }];

        let run = build_digest(entries, skipped, &Config::default(), now()).unwrap();
        assert_eq!(run.rejected, 1);
        assert_eq!(run.skipped.len(), 1);

        let premier = &run.digest.divisions[&Division::PremierLeague].articles;
        let titles: Vec<&str> = premier.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Chelsea edge Spurs", "Arsenal sign striker in record transfer"]);

        let league_two = &run.digest.divisions[&Division::LeagueTwo].articles;
        assert_eq!(league_two.len(), 1);
        assert_eq!(league_two[0].link, "https://a/3");
        assert_eq!(league_two[0].published, NaiveDate::from_ymd_opt(2026, 10, 13).unwrap());

        assert!(run.digest.divisions[&Division::WorldCup].articles.is_empty());
        assert_eq!(run.digest.divisions[&Division::WorldCup].highlights.len(), 1);

        let moments: Vec<&str> = run
            .digest
            .standout_moments
            .iter()
            .map(|m| m.moment.as_str())
            .collect();
        assert_eq!(
            moments,
            vec!["Chelsea edge Spurs", "Arsenal sign striker in record transfer"]
        );
    }

    #[test]
    fn bucket_limit_and_standout_scan_depth_are_independent() {
        let entries: Vec<RawEntry> = (1..=25)
            .map(|i| {
                entry(
                    &format!("Liverpool shock result {i}"),
                    "Premier League match report",
                    &format!("https://a/{i}"),
                    1 + (i % 16),
                )
            })
            .collect();

        let mut config = Config::default();
        config.limits.articles_per_division = 5;
        config.limits.standout_scan_depth = 8;
        config.limits.standouts = 100;

        let run = build_digest(entries, Vec::new(), &config, now()).unwrap();
        assert_eq!(run.digest.divisions[&Division::PremierLeague].articles.len(), 5);
        assert_eq!(run.digest.standout_moments.len(), 8);
    }
}
