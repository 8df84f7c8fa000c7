use std::collections::HashSet;

use crate::models::Article;

/// Drop repeated titles (first occurrence wins), order newest first and
/// keep at most `limit` articles.
///
/// Titles are compared exactly, case included. The sort is stable, so
/// articles published on the same day keep their input order.
pub fn rank(articles: Vec<Article>, limit: usize) -> Vec<Article> {
    let mut ranked = dedup_by_title(articles);
    ranked.sort_by(|a, b| b.published.cmp(&a.published));
    ranked.truncate(limit);
    ranked
}

pub fn dedup_by_title(articles: Vec<Article>) -> Vec<Article> {
    let mut seen: HashSet<String> = HashSet::new();
    articles
        .into_iter()
        .filter(|article| seen.insert(article.title.clone()))
        .collect()
}
