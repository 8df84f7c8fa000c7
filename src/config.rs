use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, bail, Context, Result};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use serde_yaml::Deserializer;

use crate::keywords::Vocabulary;

const APP_NAME: &str = "football_digest";
const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub feeds: Vec<String>,
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    #[serde(default)]
    pub limits: Limits,
    #[serde(default)]
    pub vocabulary: Vocabulary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub articles_per_division: usize,
    pub standouts: usize,
    /// How many ranked articles per division are scanned for standouts.
    pub standout_scan_depth: usize,
    pub entries_per_feed: usize,
    pub max_age_days: i64,
    pub summary_chars: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            articles_per_division: 15,
            standouts: 15,
            standout_scan_depth: 20,
            entries_per_feed: 20,
            max_age_days: 7,
            summary_chars: 200,
        }
    }
}

impl Limits {
    /// Oldest entry age kept, as a duration. Rejects negative or
    /// unrepresentable day counts.
    pub fn max_age(&self) -> Result<Duration> {
        if self.max_age_days < 0 {
            bail!("limits.max_age_days must not be negative (got {})", self.max_age_days);
        }
        Duration::try_days(self.max_age_days)
            .ok_or_else(|| anyhow!("limits.max_age_days is too large (got {})", self.max_age_days))
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("digest_data.json")
}

impl Default for Config {
    fn default() -> Self {
        Config {
            feeds: vec![
                "https://www.bbc.com/sport/football/premier-league/rss".to_string(),
                "http://www.skysports.com/rss/12040".to_string(),
                "https://www.bbc.com/sport/football/championship/rss".to_string(),
                "https://www.bbc.com/sport/football/league-one/rss".to_string(),
                "https://www.bbc.com/sport/football/league-two/rss".to_string(),
                "https://www.bbc.com/sport/football/world-cup/rss".to_string(),
            ],
            output_path: default_output_path(),
            limits: Limits::default(),
            vocabulary: Vocabulary::default(),
        }
    }
}

pub struct EnsureOutcome {
    pub path: PathBuf,
    pub created: bool,
}

impl Config {
    /// Find the user config, writing the defaults out if there is none yet.
    pub fn ensure_user_config() -> Result<EnsureOutcome> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_NAME);

        if let Some(path) = xdg_dirs.find_config_file(CONFIG_FILE) {
            return Ok(EnsureOutcome {
                path,
                created: false,
            });
        }

        let config_path = xdg_dirs
            .place_config_file(CONFIG_FILE)
            .context("Could not create configuration directory")?;
        Config::default().write_to(&config_path)?;

        Ok(EnsureOutcome {
            path: config_path,
            created: true,
        })
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        let body = serde_yaml::to_string(self).context("Failed to serialize default config")?;
        let mut config_file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;

        write!(
            &mut config_file,
            "# Football digest config (YAML)\n\
             # Only `feeds` is required; every other section falls back to these defaults.\n\
             # Keyword lists are matched as lowercase substrings of title + summary.\n\
             # Divisions are tried top to bottom and the first match wins.\n\n\
             {body}"
        )?;

        Ok(())
    }

    pub fn load(path: &Path) -> Result<Config> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Config::from_yaml(&raw).map_err(|e| anyhow!("Invalid YAML in {}: {}", path.display(), e))
    }

    pub fn from_yaml(raw: &str) -> Result<Config> {
        let deserialized = Deserializer::from_str(raw);
        let config: Config = serde_path_to_error::deserialize(deserialized)
            .map_err(|e| anyhow!("at `{}`: {}", e.path(), e.inner()))?;
        config.limits.max_age()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Division;

    #[test]
    fn feeds_only_config_uses_defaults() {
        let config = Config::from_yaml("feeds:\n  - https://example.com/rss\n").unwrap();
        assert_eq!(config.feeds, vec!["https://example.com/rss".to_string()]);
        assert_eq!(config.output_path, PathBuf::from("digest_data.json"));
        assert_eq!(config.limits, Limits::default());
        assert_eq!(config.vocabulary, Vocabulary::default());
    }

    #[test]
    fn partial_sections_are_filled_in() {
        let raw = r#"
feeds: []
output_path: out/digest.json
limits:
  articles_per_division: 10
vocabulary:
  fallback: world_cup
  standout: ["penalty"]
"#;
        let config = Config::from_yaml(raw).unwrap();
        assert_eq!(config.output_path, PathBuf::from("out/digest.json"));
        assert_eq!(config.limits.articles_per_division, 10);
        assert_eq!(config.limits.standouts, 15);
        assert_eq!(config.vocabulary.fallback, Division::WorldCup);
        assert_eq!(config.vocabulary.standout, vec!["penalty".to_string()]);
        assert_eq!(config.vocabulary.include, Vocabulary::default().include);
    }

    #[test]
    fn errors_name_the_failing_key() {
        let raw = "feeds: []\nlimits:\n  standouts: lots\n";
        let err = Config::from_yaml(raw).unwrap_err().to_string();
        assert!(err.contains("limits.standouts"), "unexpected error: {err}");
    }

    #[test]
    fn max_age_out_of_range_is_a_config_error() {
        let err = Config::from_yaml("feeds: []\nlimits:\n  max_age_days: -3\n")
            .unwrap_err()
            .to_string();
        assert!(err.contains("max_age_days"), "unexpected error: {err}");

        let huge = format!("feeds: []\nlimits:\n  max_age_days: {}\n", i64::MAX);
        assert!(Config::from_yaml(&huge).is_err());

        assert_eq!(Limits::default().max_age().unwrap(), Duration::days(7));
    }

    #[test]
    fn unknown_division_is_rejected() {
        let raw = "feeds: []\nvocabulary:\n  fallback: serie_a\n";
        assert!(Config::from_yaml(raw).is_err());
    }

    #[test]
    fn written_defaults_load_back() {
        let path = std::env::temp_dir().join(format!("{APP_NAME}-{}.yaml", std::process::id()));
        Config::default().write_to(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.feeds, Config::default().feeds);
        assert_eq!(loaded.vocabulary, Vocabulary::default());

        fs::remove_file(&path).unwrap();
    }
}
