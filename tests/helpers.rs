// Shared test helpers: tiny HTTP servers on ephemeral localhost ports.
//
// Each server answers with raw bytes so tests control the exact wire format
// (chunked bodies, missing headers, silence) without a real HTTP stack.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// A running test server. Threads are detached and die with the test process.
#[allow(dead_code)] // Not every test file uses every field
pub struct TestServer {
    /// `http://127.0.0.1:<port>`, no trailing slash
    pub base_url: String,
    /// Number of requests answered so far
    pub hits: Arc<AtomicUsize>,
    /// Raw request heads in arrival order
    pub requests: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn hit_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn first_request(&self) -> String {
        self.requests
            .lock()
            .expect("request log poisoned")
            .first()
            .cloned()
            .expect("server received no request")
    }
}

/// Starts a server that answers every request with `handler(path)` and then
/// closes the connection.
#[allow(dead_code)]
pub fn spawn_server<F>(handler: F) -> TestServer
where
    F: Fn(&str) -> Vec<u8> + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test server");
    let port = listener.local_addr().expect("local addr").port();
    let hits = Arc::new(AtomicUsize::new(0));
    let requests = Arc::new(Mutex::new(Vec::new()));
    let handler = Arc::new(handler);

    let server_hits = Arc::clone(&hits);
    let server_requests = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            let handler = Arc::clone(&handler);
            let hits = Arc::clone(&server_hits);
            let requests = Arc::clone(&server_requests);
            thread::spawn(move || {
                let head = read_request_head(&mut stream);
                let path = request_path(&head);
                requests.lock().expect("request log poisoned").push(head);
                hits.fetch_add(1, Ordering::SeqCst);
                let response = handler(&path);
                let _ = stream.write_all(&response);
                let _ = stream.flush();
            });
        }
    });

    TestServer {
        base_url: format!("http://127.0.0.1:{port}"),
        hits,
        requests,
    }
}

/// Starts a server that sends `response` (possibly empty) and then holds the
/// connection open for `hold` without closing it.
#[allow(dead_code)]
pub fn spawn_stalling_server(response: &'static [u8], hold: Duration) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test server");
    let port = listener.local_addr().expect("local addr").port();
    let hits = Arc::new(AtomicUsize::new(0));
    let requests = Arc::new(Mutex::new(Vec::new()));

    let server_hits = Arc::clone(&hits);
    let server_requests = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            let hits = Arc::clone(&server_hits);
            let requests = Arc::clone(&server_requests);
            thread::spawn(move || {
                let head = read_request_head(&mut stream);
                requests.lock().expect("request log poisoned").push(head);
                hits.fetch_add(1, Ordering::SeqCst);
                let _ = stream.write_all(response);
                let _ = stream.flush();
                thread::sleep(hold);
            });
        }
    });

    TestServer {
        base_url: format!("http://127.0.0.1:{port}"),
        hits,
        requests,
    }
}

/// A URL on a port nothing is listening on.
#[allow(dead_code)]
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}/")
}

/// Builds a `Connection: close` response with the given status and HTML body.
#[allow(dead_code)]
pub fn html_response(status: &str, body: &str) -> Vec<u8> {
    format!(
        "HTTP/1.1 {status}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
    .into_bytes()
}

/// Builds a redirect response pointing at `location`.
#[allow(dead_code)]
pub fn redirect_response(status: &str, location: &str) -> Vec<u8> {
    format!("HTTP/1.1 {status}\r\nLocation: {location}\r\nContent-Length: 0\r\n\r\n").into_bytes()
}

fn read_request_head(stream: &mut TcpStream) -> String {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }
    String::from_utf8_lossy(&head).into_owned()
}

fn request_path(head: &str) -> String {
    head.lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string()
}
