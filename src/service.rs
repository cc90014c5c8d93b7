use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result, anyhow};
use log::debug;
use reqwest::Client;
use url::Url;

use crate::config::Config;
use crate::models::{GenerationRequest, TrendArticle};

/// The external core that finds the trend, writes the article and publishes it.
pub trait TrendArticleService {
    fn generate_and_publish_trend_article(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = Result<TrendArticle>> + Send;

    /// Releases whatever the core holds for this run (browser session, drafts).
    fn cleanup(&self) -> impl Future<Output = Result<()>> + Send;
}

/// Talks to the core service over its HTTP API.
pub struct HttpTrendArticleService {
    client: Client,
    base: Url,
    api_token: Option<String>,
    cleaned_up: AtomicBool,
}

impl HttpTrendArticleService {
    pub fn new(cfg: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base: cfg.core_endpoint.clone(),
            api_token: cfg.api_token.clone(),
            cleaned_up: AtomicBool::new(false),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .with_context(|| format!("Invalid core endpoint {} for `{}`", self.base, path))
    }

    fn post(&self, url: Url) -> reqwest::RequestBuilder {
        let builder = self.client.post(url);
        match &self.api_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

impl TrendArticleService for HttpTrendArticleService {
    async fn generate_and_publish_trend_article(
        &self,
        request: &GenerationRequest,
    ) -> Result<TrendArticle> {
        let url = self.endpoint("trend-articles")?;
        debug!(
            "POST {} (row {}, skip publish: {})",
            url, request.initial_row_index, request.skip_publish
        );

        let res = self
            .post(url)
            .json(request)
            .send()
            .await
            .context("Core service unreachable")?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(anyhow!("Core service returned {}: {}", status, body.trim()));
        }

        let article: TrendArticle = res
            .json()
            .await
            .context("Failed to parse core service response")?;
        debug!("Core service answered with keyword `{}`", article.keyword);
        Ok(article)
    }

    async fn cleanup(&self) -> Result<()> {
        if self.cleaned_up.swap(true, Ordering::SeqCst) {
            debug!("Core session already released");
            return Ok(());
        }

        let url = self.endpoint("cleanup")?;
        debug!("POST {}", url);
        let res = self.post(url).send().await.context("Core cleanup unreachable")?;

        let status = res.status();
        if !status.is_success() {
            return Err(anyhow!("Core cleanup returned {}", status));
        }
        Ok(())
    }
}
