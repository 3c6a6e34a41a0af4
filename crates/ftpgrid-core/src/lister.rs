//! The lister pipeline: connect, change directory, name-list, filter, build URLs, close.

use crate::config::ListerConfig;
use crate::error::ListerError;
use crate::filter::{filter_images, ExtensionFilter};
use crate::image_url::{image_url, ImageUrl};
use crate::session::{FtpSession, RemoteDirectory};

/// Opens a session to `cfg.host` and returns the URLs of the image files in `cfg.directory`.
pub fn list_image_urls(cfg: &ListerConfig) -> Result<Vec<ImageUrl>, ListerError> {
    let mut session = FtpSession::open(cfg)?;
    list_image_urls_with(&mut session, cfg)
}

/// Runs the pipeline over an already-open session, then closes it.
///
/// The session is closed whether or not listing succeeded. A failing close
/// after a successful listing is logged, not returned.
pub fn list_image_urls_with<S: RemoteDirectory>(
    session: &mut S,
    cfg: &ListerConfig,
) -> Result<Vec<ImageUrl>, ListerError> {
    let result = collect(session, cfg);
    if let Err(e) = session.close() {
        tracing::warn!("closing FTP session: {}", e);
    }
    result
}

fn collect<S: RemoteDirectory>(
    session: &mut S,
    cfg: &ListerConfig,
) -> Result<Vec<ImageUrl>, ListerError> {
    session.change_dir(&cfg.directory)?;
    let names = session.name_list()?;
    let total = names.len();

    let filter = ExtensionFilter::new(&cfg.extensions, cfg.case_sensitive);
    let urls: Vec<ImageUrl> = filter_images(names, &filter)
        .iter()
        .map(|name| image_url(&cfg.host, name))
        .collect();

    tracing::info!(
        directory = %cfg.directory,
        listed = total,
        images = urls.len(),
        "listed directory"
    );
    Ok(urls)
}
