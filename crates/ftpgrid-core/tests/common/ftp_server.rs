//! Minimal FTP server for integration tests.
//!
//! Supports USER, PASS, CWD, PASV, NLST and QUIT on one control connection at
//! a time. Directories are a flat map from name to listing. Counts QUIT
//! commands so tests can check that sessions are always released.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct FtpServerOptions {
    pub user: String,
    pub password: String,
    pub dirs: HashMap<String, Vec<String>>,
}

impl FtpServerOptions {
    pub fn with_dir(dir: &str, names: &[&str]) -> Self {
        let mut dirs = HashMap::new();
        dirs.insert(
            dir.to_string(),
            names.iter().map(|s| s.to_string()).collect(),
        );
        Self {
            user: "tester".to_string(),
            password: "pw".to_string(),
            dirs,
        }
    }
}

pub struct FtpServer {
    pub port: u16,
    quits: Arc<AtomicUsize>,
}

impl FtpServer {
    pub fn quits(&self) -> usize {
        self.quits.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread. Runs until the process exits.
pub fn start(opts: FtpServerOptions) -> FtpServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let quits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&quits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let opts = opts.clone();
            let counter = Arc::clone(&counter);
            thread::spawn(move || {
                let _ = handle(stream, &opts, &counter);
            });
        }
    });
    FtpServer { port, quits }
}

fn reply(stream: &mut TcpStream, line: &str) -> std::io::Result<()> {
    stream.write_all(line.as_bytes())?;
    stream.write_all(b"\r\n")?;
    stream.flush()
}

fn handle(
    stream: TcpStream,
    opts: &FtpServerOptions,
    quits: &AtomicUsize,
) -> std::io::Result<()> {
    stream.set_read_timeout(Some(Duration::from_secs(5)))?;
    let mut out = stream.try_clone()?;
    let mut reader = BufReader::new(stream);

    let mut user: Option<String> = None;
    let mut logged_in = false;
    let mut cwd: Option<String> = None;
    let mut pasv: Option<TcpListener> = None;

    reply(&mut out, "220 test server ready")?;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim_end();
        let (cmd, arg) = match line.split_once(' ') {
            Some((c, a)) => (c.to_ascii_uppercase(), a.to_string()),
            None => (line.to_ascii_uppercase(), String::new()),
        };

        match cmd.as_str() {
            "USER" => {
                user = Some(arg);
                reply(&mut out, "331 password required")?;
            }
            "PASS" => {
                if user.as_deref() == Some(opts.user.as_str()) && arg == opts.password {
                    logged_in = true;
                    reply(&mut out, "230 logged in")?;
                } else {
                    reply(&mut out, "530 login incorrect")?;
                }
            }
            "QUIT" => {
                quits.fetch_add(1, Ordering::SeqCst);
                reply(&mut out, "221 bye")?;
                return Ok(());
            }
            _ if !logged_in => reply(&mut out, "530 not logged in")?,
            "CWD" => {
                let dir = arg.trim_matches('/').to_string();
                if opts.dirs.contains_key(&dir) {
                    cwd = Some(dir);
                    reply(&mut out, "250 directory changed")?;
                } else {
                    reply(&mut out, "550 no such directory")?;
                }
            }
            "TYPE" => reply(&mut out, "200 type set")?,
            "PASV" => {
                let data = TcpListener::bind("127.0.0.1:0")?;
                let p = data.local_addr()?.port();
                pasv = Some(data);
                reply(
                    &mut out,
                    &format!(
                        "227 Entering Passive Mode (127,0,0,1,{},{})",
                        p / 256,
                        p % 256
                    ),
                )?;
            }
            "NLST" => {
                let Some(data) = pasv.take() else {
                    reply(&mut out, "425 use PASV first")?;
                    continue;
                };
                let names = cwd
                    .as_ref()
                    .and_then(|d| opts.dirs.get(d))
                    .cloned()
                    .unwrap_or_default();
                let (mut conn, _) = data.accept()?;
                reply(&mut out, "150 opening data connection")?;
                for n in &names {
                    conn.write_all(n.as_bytes())?;
                    conn.write_all(b"\r\n")?;
                }
                conn.flush()?;
                drop(conn);
                reply(&mut out, "226 transfer complete")?;
            }
            _ => reply(&mut out, "502 not implemented")?,
        }
    }
}
