use crate::keywords::Vocabulary;
use crate::models::{Article, Division, RawEntry};
use crate::utils::{clean_html_tags, truncate_summary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub in_domain: bool,
    pub division: Division,
}

fn contains_any(haystack: &str, terms: &[String]) -> bool {
    terms.iter().any(|term| haystack.contains(term.as_str()))
}

/// Lowercased title and summary joined with a space, so a keyword can't
/// match across the seam.
pub fn combined_text(title: &str, summary: &str) -> String {
    format!("{} {}", title, summary).to_lowercase()
}

/// Decides whether a story is about football and which division it belongs to.
///
/// Exclusion is checked before inclusion, so a story mentioning another
/// sport is rejected even when it also uses football vocabulary. Division
/// keywords are tried in the order of `vocab.divisions`; the first hit wins
/// and `vocab.fallback` covers the no-match case.
pub fn classify(title: &str, summary: &str, vocab: &Vocabulary) -> Classification {
    let text = combined_text(title, summary);

    let in_domain = !contains_any(&text, &vocab.exclude) && contains_any(&text, &vocab.include);

    let division = vocab
        .divisions
        .iter()
        .find(|entry| contains_any(&text, &entry.keywords))
        .map(|entry| entry.division)
        .unwrap_or(vocab.fallback);

    Classification { in_domain, division }
}

/// Turns a fetched entry into an [`Article`], or `None` when it is not
/// football news.
pub fn accept(entry: &RawEntry, vocab: &Vocabulary, summary_chars: usize) -> Option<Article> {
    let summary = clean_html_tags(&entry.summary);
    let verdict = classify(&entry.title, &summary, vocab);
    if !verdict.in_domain {
        return None;
    }

    Some(Article {
        title: entry.title.clone(),
        link: entry.link.clone(),
        published: entry.published.date_naive(),
        summary: truncate_summary(&summary, summary_chars),
        image: entry.image.clone(),
        division: verdict.division,
    })
}
