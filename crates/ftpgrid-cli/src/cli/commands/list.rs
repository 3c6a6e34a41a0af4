//! `ftpgrid list` – list the image directory and render the URLs.

use anyhow::{Context, Result};
use ftpgrid_core::config::ListerConfig;
use ftpgrid_core::filter::normalize_extension;
use ftpgrid_core::lister;
use ftpgrid_core::present::{self, OutputFormat};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Command-line overrides layered over the loaded config.
#[derive(Debug, Default, Clone)]
pub struct ListOverrides {
    pub location: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub directory: Option<String>,
    pub extensions: Vec<String>,
    pub ignore_case: bool,
}

impl ListOverrides {
    /// Applies `--location` first, then the individual flags.
    pub fn apply(&self, mut cfg: ListerConfig) -> Result<ListerConfig> {
        if let Some(location) = &self.location {
            cfg.apply_location(location)?;
        }
        if let Some(host) = &self.host {
            cfg.host = host.clone();
        }
        if let Some(port) = self.port {
            cfg.port = port;
        }
        if let Some(user) = &self.user {
            cfg.user = user.clone();
        }
        if let Some(password) = &self.password {
            cfg.password = password.clone();
        }
        if let Some(directory) = &self.directory {
            cfg.directory = directory.clone();
        }
        let extensions: Vec<String> = self
            .extensions
            .iter()
            .map(|e| normalize_extension(e))
            .filter(|e| !e.is_empty())
            .collect();
        if !extensions.is_empty() {
            cfg.extensions = extensions;
        }
        if self.ignore_case {
            cfg.case_sensitive = false;
        }
        Ok(cfg)
    }
}

pub fn run_list(
    config_file: Option<&Path>,
    overrides: &ListOverrides,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let cfg = overrides.apply(super::load_config(config_file)?)?;
    tracing::info!(host = %cfg.host, port = cfg.port, directory = %cfg.directory, "list");

    let urls = lister::list_image_urls(&cfg).with_context(|| {
        format!(
            "listing ftp://{}:{}/{}",
            cfg.host, cfg.port, cfg.directory
        )
    })?;
    let rendered = present::render(&urls, format)?;
    write_output(&rendered, urls.len(), output)
}

/// Writes rendered output to `output`, or to stdout when none is given.
fn write_output(rendered: &str, count: usize, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("write {}", path.display()))?;
            eprintln!("{} image(s) written to {}", count, path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
