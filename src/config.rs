use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use serde_json::{Map, Value};
use serde_yaml::Deserializer;
use url::Url;

use crate::models::AffiliateLink;

const APP_NAME: &str = "trendpost";
const CONFIG_FILE: &str = "account.yaml";

pub const DEFAULT_RECOMMENDED_TITLE: &str = "まだまだ為になる！🙇‍♂️他のおすすめ記事🙆‍♂️";
pub const DEFAULT_RECOMMENDED_URLS: [&str; 4] = [
    "https://note.com/hakushiki_san/n/n507729ba2148",
    "https://note.com/hakushiki_san/n/nc9099ebd3e76",
    "https://note.com/hakushiki_san/n/n198c5b08783b",
    "https://note.com/hakushiki_san/n/nd5c37bbc7e15",
];
const DEFAULT_ASSOCIATE_TEXT: &str =
    "Amazon のアソシエイトとして、「何でも知ってる博識さん」は適格販売により収入を得ています。";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub core_endpoint: Url,
    pub api_token: Option<String>,
    #[serde(default)]
    pub background: bool,
    #[serde(default)]
    pub enable_affiliate_links: bool,
    #[serde(default)]
    pub affiliate: AffiliateSettings,
    #[serde(default)]
    pub recommended_articles: RecommendedArticles,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AffiliateSettings {
    #[serde(default = "default_associate_text")]
    pub amazon_associate_text: String,
    #[serde(default)]
    pub links: Vec<AffiliateLink>,
    #[serde(default)]
    pub config: Map<String, Value>,
}

impl Default for AffiliateSettings {
    fn default() -> Self {
        Self {
            amazon_associate_text: default_associate_text(),
            links: Vec::new(),
            config: Map::new(),
        }
    }
}

fn default_associate_text() -> String {
    DEFAULT_ASSOCIATE_TEXT.to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendedArticles {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub urls: Vec<Url>,
}

impl RecommendedArticles {
    /// The configured section, or the built-in one wherever the file left a gap.
    pub fn resolved(&self) -> Result<(String, Vec<Url>)> {
        let title = if self.title.trim().is_empty() {
            DEFAULT_RECOMMENDED_TITLE.to_string()
        } else {
            self.title.clone()
        };

        let urls = if self.urls.is_empty() {
            DEFAULT_RECOMMENDED_URLS
                .iter()
                .map(|u| Url::parse(u).with_context(|| format!("Bad built-in URL {u}")))
                .collect::<Result<Vec<_>>>()?
        } else {
            self.urls.clone()
        };

        Ok((title, urls))
    }
}

pub struct EnsureOutcome {
    pub path: PathBuf,
    pub created: bool,
}

impl Config {
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
            .context("Cannot create configuration directory")?;
        let mut config_file = File::create(&config_path)
            .with_context(|| format!("Failed to create {}", config_path.display()))?;

        write!(
            &mut config_file,
            r#"# trendpost account config (YAML)
# Only core_endpoint is required.

# Base URL of the core service that finds trends, writes and publishes
core_endpoint: "http://127.0.0.1:8787/"

# Optional bearer token for the core service
# api_token: "<token>"

# Let the core run its publishing session without a visible browser
background: false

# Append affiliate links and the associate disclosure to each article
enable_affiliate_links: false

affiliate:
  amazon_associate_text: "{DEFAULT_ASSOCIATE_TEXT}"
  links: []
  #  - title: "Some product"
  #    url: "https://amzn.to/xxxx"
  #    description: "Short blurb"
  config: {{}}

# Cross-promotion section; omitted keys fall back to the built-in list
recommended_articles:
  title: "{DEFAULT_RECOMMENDED_TITLE}"
  urls: []
"#
        )?;

        Ok(EnsureOutcome {
            path: config_path,
            created: true,
        })
    }

    pub fn get_user_config() -> Result<Config> {
        let existing_config = xdg::BaseDirectories::with_prefix(APP_NAME)
            .find_config_file(CONFIG_FILE)
            .ok_or_else(|| anyhow!("Could not find {CONFIG_FILE} in the {APP_NAME} config dir"))?;

        Self::from_path(&existing_config)
    }

    pub fn from_path(path: &Path) -> Result<Config> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml_str(&raw, &path.display().to_string())
    }

    pub fn from_yaml_str(raw: &str, origin: &str) -> Result<Config> {
        let deserialized = Deserializer::from_str(raw);
        serde_path_to_error::deserialize(deserialized).map_err(|e| {
            anyhow!(
                "Invalid YAML in {} at `{}`: {}",
                origin,
                e.path(),
                e.inner()
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let cfg = Config::from_yaml_str("core_endpoint: \"http://localhost:8787/\"\n", "test")
            .unwrap();

        assert!(!cfg.enable_affiliate_links);
        assert!(!cfg.background);
        assert!(cfg.api_token.is_none());
        assert_eq!(cfg.affiliate.amazon_associate_text, DEFAULT_ASSOCIATE_TEXT);
        assert!(cfg.affiliate.links.is_empty());

        let (title, urls) = cfg.recommended_articles.resolved().unwrap();
        assert_eq!(title, DEFAULT_RECOMMENDED_TITLE);
        assert_eq!(urls.len(), DEFAULT_RECOMMENDED_URLS.len());
    }

    #[test]
    fn test_full_config() {
        let raw = r#"
core_endpoint: "https://core.example.com/api/"
api_token: "secret"
background: true
enable_affiliate_links: true
affiliate:
  amazon_associate_text: "disclosure"
  links:
    - title: "Kettle"
      url: "https://amzn.to/kettle"
      description: "Boils water"
    - title: "Mug"
      url: "https://amzn.to/mug"
  config:
    placement: "end"
    max_links: 2
recommended_articles:
  title: "More reading"
  urls:
    - "https://note.com/someone/n/abc"
"#;
        let cfg = Config::from_yaml_str(raw, "test").unwrap();

        assert!(cfg.enable_affiliate_links);
        assert!(cfg.background);
        assert_eq!(cfg.api_token.as_deref(), Some("secret"));
        assert_eq!(cfg.affiliate.links.len(), 2);
        assert_eq!(cfg.affiliate.links[1].description, None);
        assert_eq!(cfg.affiliate.config["max_links"], Value::from(2));

        let (title, urls) = cfg.recommended_articles.resolved().unwrap();
        assert_eq!(title, "More reading");
        assert_eq!(urls[0].as_str(), "https://note.com/someone/n/abc");
    }

    #[test]
    fn test_invalid_yaml_reports_path() {
        let raw = "core_endpoint: \"http://localhost/\"\nenable_affiliate_links: \"maybe\"\n";
        let err = Config::from_yaml_str(raw, "account.yaml").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("account.yaml"));
        assert!(message.contains("enable_affiliate_links"));
    }

    #[test]
    fn test_missing_endpoint_is_an_error() {
        assert!(Config::from_yaml_str("background: true\n", "test").is_err());
    }
}
