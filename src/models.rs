use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

/// Everything the core service needs to generate (and optionally publish)
/// one trend article. Serialized with the core service's camelCase names.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Always `None`: the core service picks the trending keyword itself.
    pub keyword: Option<String>,
    pub skip_publish: bool,
    pub initial_row_index: usize,
    #[serde(flatten)]
    pub affiliate: AffiliateContent,
    pub recommended_articles_title: String,
    pub recommended_articles_urls: Vec<Url>,
    pub ai_options: AiOptions,
    pub publish_options: PublishOptions,
}

/// Affiliate links, their settings and the associate disclosure travel
/// together so they are never partially disabled.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AffiliateContent {
    pub affiliate_links: Vec<AffiliateLink>,
    pub affiliate_config: Map<String, Value>,
    pub amazon_associate_text: String,
}

impl AffiliateContent {
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_disabled(&self) -> bool {
        self.affiliate_links.is_empty()
            && self.affiliate_config.is_empty()
            && self.amazon_associate_text.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffiliateLink {
    pub title: String,
    pub url: Url,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiOptions {
    pub system_message: String,
    pub user_prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishOptions {
    pub title_emojis: Vec<String>,
}

/// What the core service reports back once the article is done.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendArticle {
    pub keyword: String,
    pub title: String,
    /// Some core builds publish without echoing the source URL back.
    #[serde(default)]
    pub news_url: Option<String>,
}
