mod app;
mod args;
mod config;
mod lifecycle;
mod logger;
mod models;
mod prompts;
mod request;
mod service;

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "trendpost", version)]
#[command(about = "Generate and publish an article about today's trending keyword")]
#[command(after_help = "Run flags:\n  \
    --skip-publish, --no-publish  Generate the article but do not publish it\n  \
    --row<N>                      Start from the N-th trend (1-based, e.g. --row2)")]
struct Cli {
    /// Run flags, scanned as-is; anything unrecognised is ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    args: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    app::run(cli.args).await
}
