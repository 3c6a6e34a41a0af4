//! `ftpgrid config` – show config path or effective config.

use anyhow::Result;
use ftpgrid_core::config::{self as core_config, ListerConfig};
use std::path::Path;

use crate::cli::ConfigAction;

pub fn run_config(config_file: Option<&Path>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => {
            let path = match config_file {
                Some(p) => p.to_path_buf(),
                None => core_config::config_path()?,
            };
            println!("{}", path.display());
        }
        ConfigAction::Show => {
            let cfg = super::load_config(config_file)?;
            print!("{}", show_toml(&cfg)?);
        }
    }
    Ok(())
}

fn show_toml(cfg: &ListerConfig) -> Result<String> {
    let mut shown = cfg.clone();
    if !shown.password.is_empty() {
        shown.password = "***".to_string();
    }
    core_config::to_toml(&shown)
}
