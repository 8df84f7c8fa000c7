use crate::classifier::combined_text;
use crate::models::{Article, StandoutMoment};

/// Collect articles whose title or summary mentions a dramatic event,
/// in input order, capped at `limit` across the whole input.
pub fn extract_standouts<'a, I>(articles: I, keywords: &[String], limit: usize) -> Vec<StandoutMoment>
where
    I: IntoIterator<Item = &'a Article>,
{
    articles
        .into_iter()
        .filter(|article| {
            let text = combined_text(&article.title, &article.summary);
            keywords.iter().any(|keyword| text.contains(keyword.as_str()))
        })
        .take(limit)
        .map(|article| StandoutMoment {
            moment: article.title.clone(),
            link: article.link.clone(),
        })
        .collect()
}
