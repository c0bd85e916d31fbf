//! Throwaway HTTP server for exercising the adapters end to end.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// Server answering exactly one request.
pub struct OneShotServer {
    /// Base URL including the path the adapter should target.
    pub url: String,
    handle: JoinHandle<String>,
}

impl OneShotServer {
    /// Bind to an ephemeral port and answer the first request with `status`
    /// and a JSON `body`.
    pub fn respond(path: &str, status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local address");
        let body = body.to_owned();
        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().expect("accept connection");
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
            let mut head = String::new();
            loop {
                let mut line = String::new();
                let read = reader.read_line(&mut line).expect("read request line");
                if read == 0 || line == "\r\n" {
                    break;
                }
                head.push_str(&line);
            }
            let mut stream = stream;
            write!(
                stream,
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {len}\r\nConnection: close\r\n\r\n{body}",
                reason = reason_phrase(status),
                len = body.len(),
            )
            .expect("write response");
            stream.flush().expect("flush response");
            head
        });
        Self {
            url: format!("http://{addr}{path}"),
            handle,
        }
    }

    /// Wait for the request to be served and return its head.
    pub fn request_head(self) -> String {
        self.handle.join().expect("server thread panicked")
    }
}

/// URL of a local port nothing listens on.
pub fn unreachable_url(path: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local address");
    drop(listener);
    format!("http://{addr}{path}")
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        504 => "Gateway Timeout",
        _ => "Unknown",
    }
}
