//! CLI command handlers, one per file.

mod completions;
mod config;
mod list;

pub use completions::run_completions;
pub use config::run_config;
pub use list::{run_list, ListOverrides};

use anyhow::Result;
use ftpgrid_core::config::{self as core_config, ListerConfig};
use std::path::Path;

/// Config from `--config` if given, otherwise the XDG default (created on first use).
pub(crate) fn load_config(config_file: Option<&Path>) -> Result<ListerConfig> {
    let cfg = match config_file {
        Some(path) => core_config::load_from(path)?,
        None => core_config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}
