use std::time::Instant;

use anyhow::Result;
use log::{debug, error, info, warn};

use crate::args::parse_run_options;
use crate::lifecycle::{Core, run_with_core};
use crate::models::{GenerationRequest, TrendArticle};
use crate::request::build_generation_request;
use crate::service::{HttpTrendArticleService, TrendArticleService};

const RULE: &str = "========================================";

pub async fn run(args: Vec<String>) -> Result<()> {
    run_with_core(|core| run_trend_article(core, args)).await
}

async fn run_trend_article(core: Core, args: Vec<String>) -> Result<()> {
    info!("{RULE}");
    info!("🔥 Trend article generation and publishing");
    info!("{RULE}");
    info!("");
    info!("Keyword: auto-detected (top of the trend list)");
    info!("");

    let (options, warnings) = parse_run_options(args.as_slice());
    for warning in &warnings {
        warn!("{warning}");
    }

    if options.skip_publish {
        info!("⏭️  Publishing skipped (--skip-publish)");
    }
    if options.initial_row_index > 0 {
        info!("Starting from trend row {}", options.initial_row_index + 1);
    }

    let request = build_generation_request(&options, &core.config)?;
    let service = HttpTrendArticleService::new(&core.config)?;

    let started = Instant::now();
    let article = generate_with_cleanup(&service, &request).await?;
    debug!("Core service finished in {:?}", started.elapsed());

    for line in completion_banner(&article) {
        info!("{line}");
    }

    Ok(())
}

/// One generate call, then cleanup no matter how the call went. A failed
/// cleanup is only logged so it never hides the generation outcome.
pub async fn generate_with_cleanup<S: TrendArticleService>(
    service: &S,
    request: &GenerationRequest,
) -> Result<TrendArticle> {
    let outcome = service.generate_and_publish_trend_article(request).await;

    if let Err(e) = &outcome {
        error!("❌ Generation failed: {e:?}");
    }

    if let Err(e) = service.cleanup().await {
        warn!("Core cleanup failed: {e:#}");
    }

    outcome
}

pub fn completion_banner(article: &TrendArticle) -> Vec<String> {
    vec![
        String::new(),
        RULE.to_string(),
        "✅ Done".to_string(),
        RULE.to_string(),
        format!("Keyword: {}", article.keyword),
        format!("Title: {}", article.title),
        format!(
            "News URL: {}",
            article.news_url.as_deref().unwrap_or("(not reported)")
        ),
        String::new(),
    ]
}
