use std::{
    io::Read,
    net::SocketAddr,
    sync::{Arc, Mutex},
    thread,
};

use tiny_http::Response;

/// A request seen by the mock login endpoint.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub body: serde_json::Value,
}

/// Mock login endpoint answering every request with a canned response.
pub struct Server {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl Server {
    pub fn respond_with(status: u16, body: &str) -> Self {
        let http = tiny_http::Server::http("127.0.0.1:0").expect("failed to bind mock server");
        let addr = http.server_addr().to_ip().expect("mock server is not on tcp");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let seen = Arc::clone(&requests);
        let body = body.to_string();
        thread::spawn(move || {
            for mut request in http.incoming_requests() {
                let mut content = String::new();
                request
                    .as_reader()
                    .read_to_string(&mut content)
                    .expect("failed to read request body");
                seen.lock().unwrap().push(Recorded {
                    path: request.url().to_string(),
                    body: serde_json::from_str(&content).unwrap_or(serde_json::Value::Null),
                });
                let response = Response::from_string(body.clone()).with_status_code(status);
                let _ = request.respond(response);
            }
        });

        Self { addr, requests }
    }

    pub fn ok(body: &str) -> Self {
        Self::respond_with(200, body)
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}
