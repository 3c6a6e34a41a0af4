//! Error type for the lister pipeline.
//!
//! One variant per step that can fail, so callers (and tests) can tell a
//! refused connection from a bad password or a missing directory.

use suppaftp::FtpError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListerError {
    /// Host name did not resolve to any socket address.
    #[error("cannot resolve {host}:{port}")]
    Resolve {
        host: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },

    /// TCP connect or FTP greeting failed.
    #[error("connect to {addr} failed")]
    Connect {
        addr: String,
        #[source]
        source: FtpError,
    },

    /// Server rejected USER/PASS.
    #[error("login as {user:?} failed")]
    Login {
        user: String,
        #[source]
        source: FtpError,
    },

    /// CWD was refused (typically directory not found).
    #[error("cannot change directory to {dir:?}")]
    ChangeDir {
        dir: String,
        #[source]
        source: FtpError,
    },

    /// NLST failed.
    #[error("name list failed")]
    NameList {
        #[source]
        source: FtpError,
    },

    /// QUIT failed.
    #[error("closing session failed")]
    Close {
        #[source]
        source: FtpError,
    },

    /// Session used after it was closed.
    #[error("session already closed")]
    Closed,

    /// `--location` was not a usable `ftp://` URL.
    #[error("invalid location {location:?}: {reason}")]
    InvalidLocation { location: String, reason: String },
}
