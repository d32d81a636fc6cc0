//! Throwaway local CKAN action API for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// A request the fake catalog received.
#[derive(Debug, Clone)]
pub struct Recorded {
    /// Request target, e.g. `/api/action/dataset_show?id=abc123`.
    pub target: String,
    /// Headers with lowercased names.
    pub headers: HashMap<String, String>,
}

/// Serves canned responses keyed by request target on an ephemeral port.
pub struct FakeCatalog {
    pub base: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl FakeCatalog {
    /// Start a server answering `target` with `(status, body)`; unknown
    /// targets get 404.
    pub fn start(routes: &[(&str, u16, &str)]) -> Self {
        let routes: HashMap<String, (u16, String)> = routes
            .iter()
            .map(|(t, s, b)| (t.to_string(), (*s, b.to_string())))
            .collect();
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                let _ = serve(stream, &routes, &recorded);
            }
        });
        Self { base, requests }
    }

    /// Start a server that accepts connections and never answers.
    pub fn silent() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        thread::spawn(move || {
            let mut held = Vec::new();
            for stream in listener.incoming().flatten() {
                held.push(stream);
                thread::sleep(Duration::from_millis(10));
            }
        });
        Self {
            base,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    /// Dataset link on this catalog.
    pub fn link(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }
}

/// Base URL of a port nothing listens on.
pub fn closed_base() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Routes for a dataset `abc123` created by `u1`, whose username is `owner`.
pub fn owned_routes(owner: &str) -> Vec<(&'static str, u16, String)> {
    vec![
        (
            "/api/action/dataset_show?id=abc123",
            200,
            r#"{"success": true, "result": {"id": "abc123", "creator_user_id": "u1"}}"#
                .to_string(),
        ),
        (
            "/api/action/user_show?id=u1",
            200,
            format!(r#"{{"success": true, "result": {{"id": "u1", "name": "{owner}"}}}}"#),
        ),
    ]
}

/// Start a server from owned routes.
pub fn start_owned_by(owner: &str) -> FakeCatalog {
    let routes = owned_routes(owner);
    let borrowed: Vec<(&str, u16, &str)> =
        routes.iter().map(|(t, s, b)| (*t, *s, b.as_str())).collect();
    FakeCatalog::start(&borrowed)
}

fn serve(
    stream: TcpStream,
    routes: &HashMap<String, (u16, String)>,
    recorded: &Mutex<Vec<Recorded>>,
) -> std::io::Result<()> {
    let mut reader = BufReader::new(stream.try_clone()?);
    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;
    let target = request_line
        .split_whitespace()
        .nth(1)
        .unwrap_or_default()
        .to_string();

    let mut headers = HashMap::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.insert(name.trim().to_lowercase(), value.trim().to_string());
        }
    }
    recorded.lock().unwrap().push(Recorded {
        target: target.clone(),
        headers,
    });

    let (status, body) = routes
        .get(&target)
        .cloned()
        .unwrap_or((404, r#"{"success": false}"#.to_string()));
    let mut stream = stream;
    write!(
        stream,
        "HTTP/1.1 {status} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        reason(status),
        body.len()
    )?;
    stream.flush()
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
