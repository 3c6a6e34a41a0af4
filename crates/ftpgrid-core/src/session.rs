//! FTP session with guaranteed release.
//!
//! `FtpSession` wraps a `suppaftp` control connection. The session sends
//! `QUIT` exactly once: either through `close()` or, if an earlier step
//! failed, when it is dropped.

use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

use suppaftp::{FtpError, FtpStream};

use crate::config::ListerConfig;
use crate::error::ListerError;

/// The three remote operations the lister needs.
pub trait RemoteDirectory {
    fn change_dir(&mut self, dir: &str) -> Result<(), ListerError>;

    /// Flat name list of the current directory (`NLST`).
    fn name_list(&mut self) -> Result<Vec<String>, ListerError>;

    /// Ends the session. A second call returns `ListerError::Closed`.
    fn close(&mut self) -> Result<(), ListerError>;
}

pub struct FtpSession {
    stream: Option<FtpStream>,
}

impl FtpSession {
    /// Connects and logs in with the configured credentials.
    pub fn open(cfg: &ListerConfig) -> Result<Self, ListerError> {
        let addrs = resolve(&cfg.host, cfg.port)?;
        let stream = connect_any(addrs, cfg.connect_timeout())?;

        // Wrap before login so a rejected login still gets QUIT on drop.
        let mut session = Self {
            stream: Some(stream),
        };
        session.login(&cfg.user, &cfg.password)?;
        tracing::info!(host = %cfg.host, user = %cfg.user, "logged in");
        Ok(session)
    }

    fn login(&mut self, user: &str, password: &str) -> Result<(), ListerError> {
        self.stream_mut()?
            .login(user, password)
            .map_err(|source| ListerError::Login {
                user: user.to_string(),
                source,
            })
    }

    fn stream_mut(&mut self) -> Result<&mut FtpStream, ListerError> {
        self.stream.as_mut().ok_or(ListerError::Closed)
    }
}

impl RemoteDirectory for FtpSession {
    fn change_dir(&mut self, dir: &str) -> Result<(), ListerError> {
        self.stream_mut()?
            .cwd(dir)
            .map_err(|source| ListerError::ChangeDir {
                dir: dir.to_string(),
                source,
            })
    }

    fn name_list(&mut self) -> Result<Vec<String>, ListerError> {
        self.stream_mut()?
            .nlst(None)
            .map_err(|source| ListerError::NameList { source })
    }

    fn close(&mut self) -> Result<(), ListerError> {
        let mut stream = self.stream.take().ok_or(ListerError::Closed)?;
        stream.quit().map_err(|source| ListerError::Close { source })
    }
}

impl Drop for FtpSession {
    fn drop(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            if let Err(e) = stream.quit() {
                tracing::debug!("QUIT on drop failed: {}", e);
            }
        }
    }
}

fn resolve(host: &str, port: u16) -> Result<Vec<SocketAddr>, ListerError> {
    let resolve_err = |source| ListerError::Resolve {
        host: host.to_string(),
        port,
        source,
    };
    let addrs: Vec<SocketAddr> = (host, port)
        .to_socket_addrs()
        .map_err(resolve_err)?
        .collect();
    if addrs.is_empty() {
        return Err(resolve_err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no addresses",
        )));
    }
    Ok(addrs)
}

/// Tries each address in order and returns the first stream that connects
/// and greets. Fails with the last address's error.
fn connect_any<I>(addrs: I, timeout: Duration) -> Result<FtpStream, ListerError>
where
    I: IntoIterator<Item = SocketAddr>,
{
    let mut last_err: Option<ListerError> = None;
    for addr in addrs {
        tracing::debug!(%addr, "connecting");
        match FtpStream::connect_timeout(addr, timeout) {
            Ok(stream) => return Ok(stream),
            Err(source) => {
                tracing::debug!(%addr, "connect failed: {}", source);
                last_err = Some(ListerError::Connect {
                    addr: addr.to_string(),
                    source,
                });
            }
        }
    }
    Err(last_err.unwrap_or_else(|| ListerError::Connect {
        addr: String::new(),
        source: FtpError::ConnectionError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no addresses to connect to",
        )),
    }))
}
