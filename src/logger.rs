use anyhow::Result;
use anyhow::anyhow;
use ftail::Ftail;
use log::LevelFilter;
use log::debug;
use std::env;
use std::fs;

const LOGS_DIR: &str = ".logs";
const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Console gets the run banners, the file under `~/.logs/trendpost` keeps
/// debug detail across runs.
pub fn init_logger() -> Result<()> {
    let home_folder = env::home_dir().ok_or_else(|| anyhow!("Could not determine $HOME"))?;

    let logs_path = home_folder.join(LOGS_DIR).join(PKG_NAME);
    let logs_file = logs_path.join(format!("{}.log", PKG_NAME));

    fs::create_dir_all(&logs_path)
        .map_err(|e| anyhow!("Could not create logs dir at {:#?}: {}", &logs_path, e))?;

    Ftail::new()
        .console(LevelFilter::Info)
        .single_file(&logs_file, true, LevelFilter::Debug)
        .init()
        .map_err(|e| anyhow!("Could not initialize logger: {}", e))?;

    debug!("Logger initialized, writing to {}", logs_file.display());
    Ok(())
}
