use std::future::Future;

use anyhow::Result;
use log::{debug, info};

use crate::config::{Config, EnsureOutcome};
use crate::logger::init_logger;

/// Shared context handed to a run: the account config plus how the core
/// service should drive its publishing session.
#[derive(Debug, Clone)]
pub struct Core {
    pub config: Config,
    pub wants_background: bool,
}

impl Core {
    pub fn new(config: Config) -> Self {
        let wants_background = config.background;
        Self {
            config,
            wants_background,
        }
    }
}

/// Sets up logging and configuration, then runs `job`. Errors escaping the
/// job go back to `main`, which prints them and sets the exit code.
pub async fn run_with_core<F, Fut>(job: F) -> Result<()>
where
    F: FnOnce(Core) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    init_logger()?;

    let config_outcome: EnsureOutcome = Config::ensure_user_config()?;
    if config_outcome.created {
        info!(
            "Config file created at {}. Please edit it and restart the app.",
            config_outcome.path.display()
        );
        return Ok(());
    }

    let cfg = Config::get_user_config()?;
    debug!("Account config loaded from {}", config_outcome.path.display());

    let core = Core::new(cfg);
    debug!("Core ready (background: {})", core.wants_background);

    run_job(core, job).await
}

async fn run_job<F, Fut>(core: Core, job: F) -> Result<()>
where
    F: FnOnce(Core) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    job(core).await
}
