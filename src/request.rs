use anyhow::Result;
use log::debug;

use crate::args::RunOptions;
use crate::config::Config;
use crate::models::{AffiliateContent, AiOptions, GenerationRequest, PublishOptions};
use crate::prompts;

pub fn build_generation_request(options: &RunOptions, cfg: &Config) -> Result<GenerationRequest> {
    let affiliate = if cfg.enable_affiliate_links {
        AffiliateContent {
            affiliate_links: cfg.affiliate.links.clone(),
            affiliate_config: cfg.affiliate.config.clone(),
            amazon_associate_text: cfg.affiliate.amazon_associate_text.clone(),
        }
    } else {
        AffiliateContent::disabled()
    };
    if affiliate.is_disabled() {
        debug!("Affiliate content disabled");
    } else {
        debug!("Affiliate content enabled ({} links)", affiliate.affiliate_links.len());
    }

    let (recommended_articles_title, recommended_articles_urls) =
        cfg.recommended_articles.resolved()?;

    Ok(GenerationRequest {
        keyword: None,
        skip_publish: options.skip_publish,
        initial_row_index: options.initial_row_index,
        affiliate,
        recommended_articles_title,
        recommended_articles_urls,
        ai_options: AiOptions {
            system_message: prompts::system_message(),
            user_prompt: prompts::user_prompt(),
            max_tokens: prompts::MAX_TOKENS,
            temperature: prompts::TEMPERATURE,
        },
        publish_options: PublishOptions {
            title_emojis: prompts::title_emojis(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    const AFFILIATE_YAML: &str = r#"
core_endpoint: "http://localhost:8787/"
enable_affiliate_links: ENABLED
affiliate:
  amazon_associate_text: "disclosure"
  links:
    - title: "Kettle"
      url: "https://amzn.to/kettle"
  config:
    placement: "end"
"#;

    fn config(enabled: bool) -> Config {
        let raw = AFFILIATE_YAML.replace("ENABLED", if enabled { "true" } else { "false" });
        Config::from_yaml_str(&raw, "test").unwrap()
    }

    #[test]
    fn test_run_options_flow_through() {
        let options = RunOptions {
            skip_publish: true,
            initial_row_index: 2,
        };
        let request = build_generation_request(&options, &config(false)).unwrap();

        assert!(request.skip_publish);
        assert_eq!(request.initial_row_index, 2);
        assert_eq!(request.keyword, None);
    }

    #[test]
    fn test_disabled_affiliate_is_neutral() {
        let request = build_generation_request(&RunOptions::default(), &config(false)).unwrap();

        assert!(request.affiliate.is_disabled());
        assert!(request.affiliate.affiliate_links.is_empty());
        assert!(request.affiliate.affiliate_config.is_empty());
        assert_eq!(request.affiliate.amazon_associate_text, "");
    }

    #[test]
    fn test_enabled_affiliate_is_populated() {
        let request = build_generation_request(&RunOptions::default(), &config(true)).unwrap();

        assert_eq!(request.affiliate.affiliate_links.len(), 1);
        assert_eq!(request.affiliate.affiliate_config["placement"], json!("end"));
        assert_eq!(request.affiliate.amazon_associate_text, "disclosure");
    }

    #[test]
    fn test_recommended_articles_always_present() {
        for enabled in [true, false] {
            let request =
                build_generation_request(&RunOptions::default(), &config(enabled)).unwrap();
            assert!(!request.recommended_articles_title.is_empty());
            assert!(!request.recommended_articles_urls.is_empty());
        }
    }

    #[test]
    fn test_wire_format() {
        let options = RunOptions {
            skip_publish: false,
            initial_row_index: 1,
        };
        let request = build_generation_request(&options, &config(false)).unwrap();
        let wire: Value = serde_json::to_value(&request).unwrap();

        assert_eq!(wire["keyword"], Value::Null);
        assert_eq!(wire["skipPublish"], json!(false));
        assert_eq!(wire["initialRowIndex"], json!(1));
        assert_eq!(wire["affiliateLinks"], json!([]));
        assert_eq!(wire["affiliateConfig"], json!({}));
        assert_eq!(wire["amazonAssociateText"], json!(""));
        assert_eq!(wire["aiOptions"]["maxTokens"], json!(4000));
        assert_eq!(wire["publishOptions"]["titleEmojis"].as_array().unwrap().len(), 7);
        assert!(wire["recommendedArticlesUrls"][0].is_string());
    }
}
