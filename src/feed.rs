use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use feed_rs::model::Entry;
use log::{debug, error, info, warn};
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use crate::config::Limits;
use crate::models::{RawEntry, Skipped};

/// Usable entries from one feed plus the ones that had to be dropped.
#[derive(Debug, Default)]
pub struct FeedEntries {
    pub entries: Vec<RawEntry>,
    pub skipped: Vec<Skipped>,
}

impl FeedEntries {
    pub fn extend(&mut self, other: FeedEntries) {
        self.entries.extend(other.entries);
        self.skipped.extend(other.skipped);
    }
}

pub async fn fetch_feed(
    client: &Client,
    url: &str,
    now: DateTime<Utc>,
    limits: &Limits,
) -> Result<FeedEntries> {
    let url = Url::parse(url).with_context(|| format!("Invalid feed URL {url}"))?;

    let res = client
        .get(url.clone())
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;

    let parsed = parse_feed(&res, url.as_str(), now, limits)?;
    info!(
        "Fetched {} entries from {} ({} skipped)",
        parsed.entries.len(),
        url,
        parsed.skipped.len()
    );
    Ok(parsed)
}

/// Fetch every feed in order. A feed that fails contributes nothing but a
/// diagnostic; the rest still run.
pub async fn fetch_all(
    client: &Client,
    feeds: &[String],
    now: DateTime<Utc>,
    limits: &Limits,
) -> FeedEntries {
    let mut all = FeedEntries::default();

    for url in feeds {
        match fetch_feed(client, url, now, limits).await {
            Ok(parsed) => all.extend(parsed),
            Err(err) => {
                error!("Failed to fetch feed {}: {:?}", url, err);
                all.skipped.push(Skipped {
                    source: url.clone(),
                    reason: format!("{err:#}"),
                });
            }
        }
    }

    all
}

/// Stands in for a date the feed supplied but nobody could read, so it
/// can be told apart from a date that is simply missing.
const UNREADABLE_DATE: DateTime<Utc> = DateTime::<Utc>::MIN_UTC;

fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    let parsed = DateTime::parse_from_rfc2822(text)
        .or_else(|_| DateTime::parse_from_rfc3339(text))
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
                .map(|naive| naive.and_utc())
        });

    Some(parsed.unwrap_or(UNREADABLE_DATE))
}

pub fn parse_feed(bytes: &[u8], source: &str, now: DateTime<Utc>, limits: &Limits) -> Result<FeedEntries> {
    let parser = feed_rs::parser::Builder::new()
        .timestamp_parser(parse_timestamp)
        .build();
    let feed = parser
        .parse(bytes)
        .map_err(|e| anyhow!("Failed to parse feed: {e}"))?;
    let cutoff = now
        .checked_sub_signed(limits.max_age()?)
        .unwrap_or(DateTime::<Utc>::MIN_UTC);

    let mut parsed = FeedEntries::default();

    for entry in feed.entries.into_iter().take(limits.entries_per_feed) {
        match to_raw_entry(entry, now) {
            Ok(raw) if raw.published < cutoff => {
                debug!("Too old, ignoring: {}", raw.title);
            }
            Ok(raw) => parsed.entries.push(raw),
            Err(reason) => {
                warn!("Skipping entry from {}: {}", source, reason);
                parsed.skipped.push(Skipped {
                    source: source.to_string(),
                    reason,
                });
            }
        }
    }

    Ok(parsed)
}

fn to_raw_entry(entry: Entry, now: DateTime<Utc>) -> Result<RawEntry, String> {
    let title = entry
        .title
        .as_ref()
        .map(|t| t.content.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| format!("entry {} has no title", entry.id))?;

    // Atom entries may list enclosure or self links before the page itself.
    let link = entry
        .links
        .iter()
        .find(|l| matches!(l.rel.as_deref(), None | Some("alternate")))
        .or_else(|| entry.links.first())
        .map(|l| l.href.trim().to_string())
        .filter(|l| !l.is_empty())
        .ok_or_else(|| format!("\"{title}\" has no link"))?;

    let published = match entry.published.or(entry.updated) {
        Some(published) if published == UNREADABLE_DATE => {
            return Err(format!("\"{title}\" has an unreadable date"));
        }
        Some(published) => published,
        None => now,
    };

    let summary = entry
        .summary
        .as_ref()
        .map(|s| s.content.clone())
        .or_else(|| entry.content.as_ref().and_then(|c| c.body.clone()))
        .unwrap_or_default();

    let image = image_hint(&entry, &summary);

    Ok(RawEntry {
        title,
        link,
        published,
        summary,
        image,
    })
}

/// Best-effort image lookup: media thumbnails, then image media content,
/// then the first `<img>` in the summary markup.
fn image_hint(entry: &Entry, summary_html: &str) -> Option<String> {
    let thumbnail = entry
        .media
        .iter()
        .flat_map(|m| &m.thumbnails)
        .map(|t| t.image.uri.clone())
        .find(|uri| !uri.is_empty());
    if thumbnail.is_some() {
        return thumbnail;
    }

    let content = entry
        .media
        .iter()
        .flat_map(|m| &m.content)
        .filter(|c| {
            c.content_type
                .as_ref()
                .is_some_and(|ct| ct.ty() == "image")
        })
        .find_map(|c| c.url.as_ref().map(|u| u.to_string()));
    if content.is_some() {
        return content;
    }

    first_img_src(summary_html)
}

fn first_img_src(html: &str) -> Option<String> {
    if !html.contains("<img") {
        return None;
    }
    let fragment = Html::parse_fragment(html);
    let img_selector = Selector::parse("img[src]").ok()?;

    fragment
        .select(&img_selector)
        .filter_map(|img| img.value().attr("src"))
        .map(|src| src.trim().to_string())
        .find(|src| !src.is_empty())
}
