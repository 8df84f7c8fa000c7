use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::app::RunReport;

static DANGLING_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[a-zA-Z/!][^>]*$").unwrap());
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</?[a-zA-Z!][^>]*>").unwrap());
static NUMERIC_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#(x[0-9a-fA-F]+|[0-9]+);").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

const NAMED_ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&apos;", "'"),
    ("&lsquo;", "'"),
    ("&rsquo;", "'"),
    ("&ldquo;", "\""),
    ("&rdquo;", "\""),
    ("&mdash;", "—"),
    ("&ndash;", "–"),
    ("&hellip;", "…"),
    ("&pound;", "£"),
    ("&euro;", "€"),
    // last, so "&amp;lt;" stays "&lt;"
    ("&amp;", "&"),
];

/// Strip markup from a feed summary and flatten it to a single line.
///
/// Handles complete and self-closing tags, a tag cut off at the end of the
/// text, the common named entities and decimal/hex numeric entities.
pub fn clean_html_tags(text: &str) -> String {
    let cleaned = DANGLING_TAG.replace_all(text, "");
    let cleaned = TAG.replace_all(&cleaned, " ");

    let cleaned = NUMERIC_ENTITY.replace_all(&cleaned, |caps: &Captures| {
        let code = &caps[1];
        let parsed = match code.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => code.parse::<u32>().ok(),
        };
        parsed
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_default()
    });

    let mut cleaned = cleaned.into_owned();
    for (entity, replacement) in NAMED_ENTITIES {
        cleaned = cleaned.replace(entity, replacement);
    }

    WHITESPACE.replace_all(&cleaned, " ").trim().to_string()
}

/// Keep at most `max_chars` characters, appending `...` only when
/// something was cut.
pub fn truncate_summary(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

pub fn format_run_summary(report: &RunReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Digest generated successfully: {}\n",
        report.output_path.display()
    ));
    output.push_str(&format!("Total divisions: {}\n", report.digest.divisions.len()));

    for bucket in report.digest.divisions.values() {
        output.push_str(&format!("  {}: {} articles\n", bucket.name, bucket.articles.len()));
    }

    output.push_str(&format!(
        "Standout moments: {}\n",
        report.digest.standout_moments.len()
    ));
    output.push_str(&format!("Rejected as off-topic: {}\n", report.rejected));
    output.push_str(&format!("Skipped: {}\n", report.skipped.len()));

    for skipped in &report.skipped {
        output.push_str(&format!("  - {}: {}\n", skipped.source, skipped.reason));
    }

    output.trim_end().to_string()
}
