// Test Server - Local HTTP server for integration tests
//
// Serves deterministic test HTML pages so capture tests run offline.

// Note: Functions appear "unused" because each test binary compiles separately,
// but they ARE used across multiple test files. Suppress false-positive warnings.
#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Response, StatusCode},
    routing::get,
};
use std::net::SocketAddr;
use tokio::task::JoinHandle;

/// Test server handle
pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start the test server on a random available port
    pub async fn start() -> Self {
        let app = Router::new()
            .route("/", get(index_page))
            .route("/tall.html", get(tall_page))
            .route("/assets.html", get(assets_page))
            .route("/style.css", get(stylesheet))
            .route("/app.js", get(script));

        // Bind to port 0 to get any available port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test server");

        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server failed");
        });

        TestServer { addr, handle }
    }

    /// Get the base URL of the test server
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Shutdown the test server
    pub fn shutdown(self) {
        self.handle.abort();
    }
}

// Test HTML pages

async fn index_page() -> Response<Body> {
    html(r#"<!DOCTYPE html>
<html>
<head><title>Capture Index</title></head>
<body>
  <h1>Capture Test Page</h1>
  <p>Static content, no subresources.</p>
</body>
</html>"#)
}

async fn tall_page() -> Response<Body> {
    html(r#"<!DOCTYPE html>
<html>
<head><title>Tall Page</title></head>
<body style="margin:0">
  <div style="height:3000px;background:linear-gradient(red,blue)">
    <h1>Top of the page</h1>
  </div>
  <p id="bottom">Bottom of the page</p>
</body>
</html>"#)
}

async fn assets_page() -> Response<Body> {
    html(r#"<!DOCTYPE html>
<html>
<head>
  <title>Assets Page</title>
  <link rel="stylesheet" href="/style.css">
  <script src="/app.js" defer></script>
</head>
<body>
  <h1>Page with subresources</h1>
</body>
</html>"#)
}

async fn stylesheet() -> Response<Body> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "text/css")
        .body(Body::from("h1 { color: rebeccapurple; }"))
        .unwrap()
}

async fn script() -> Response<Body> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/javascript")
        .body(Body::from("document.title = document.title + ' (scripted)';"))
        .unwrap()
}

fn html(body: &'static str) -> Response<Body> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "text/html")
        .body(Body::from(body))
        .unwrap()
}
