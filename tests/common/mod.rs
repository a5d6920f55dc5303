// Shared test helpers: a minimal single-threaded HTTP stub that serves
// canned Grafana responses and records every request it handles. The
// tool under test is strictly sequential, so one connection at a time is
// all the stub ever sees.

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

/// One canned route, matched on exact method and path (query included).
pub struct Route {
    pub method: &'static str,
    pub path: String,
    pub status: u16,
    pub body: String,
}

impl Route {
    pub fn get(path: &str, body: serde_json::Value) -> Self {
        Route {
            method: "GET",
            path: path.to_string(),
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn post(path: &str, body: serde_json::Value) -> Self {
        Route {
            method: "POST",
            path: path.to_string(),
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn error(method: &'static str, path: &str, status: u16) -> Self {
        Route {
            method,
            path: path.to_string(),
            status,
            body: r#"{"message":"error"}"#.to_string(),
        }
    }
}

/// A request the stub handled.
#[derive(Clone, Debug)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub body: String,
    pub authorization: Option<String>,
}

pub struct GrafanaStub {
    base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl GrafanaStub {
    /// Bind an ephemeral port and serve `routes` on a background thread
    /// for the rest of the test process.
    pub fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
        let base_url = format!("http://{}", listener.local_addr().expect("stub addr"));
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming() {
                match stream {
                    Ok(stream) => handle(stream, &routes, &recorded),
                    Err(_) => continue,
                }
            }
        });
        GrafanaStub { base_url, requests }
    }

    pub fn url(&self) -> &str {
        &self.base_url
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    /// Bodies of every POST the stub received on `path`, in order.
    pub fn posts_to(&self, path: &str) -> Vec<serde_json::Value> {
        self.requests()
            .iter()
            .filter(|r| r.method == "POST" && r.path == path)
            .map(|r| serde_json::from_str(&r.body).expect("posted body is json"))
            .collect()
    }
}

fn handle(stream: TcpStream, routes: &[Route], recorded: &Arc<Mutex<Vec<Recorded>>>) {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() || request_line.is_empty() {
        return;
    }
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("").to_string();
    let path = parts.next().unwrap_or("").to_string();

    let mut content_length = 0usize;
    let mut authorization = None;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).is_err() {
            return;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.parse().unwrap_or(0);
            } else if name.eq_ignore_ascii_case("authorization") {
                authorization = Some(value.to_string());
            }
        }
    }

    let mut body = vec![0u8; content_length];
    if content_length > 0 && reader.read_exact(&mut body).is_err() {
        return;
    }
    let body = String::from_utf8_lossy(&body).into_owned();

    recorded.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        body,
        authorization,
    });

    let (status, reply) = match routes.iter().find(|r| r.method == method && r.path == path) {
        Some(route) => (route.status, route.body.clone()),
        None => (404, r#"{"message":"not found"}"#.to_string()),
    };
    let reason = if status < 400 { "OK" } else { "Error" };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        reply.len(),
        reply
    );
    let mut stream = reader.into_inner();
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}
