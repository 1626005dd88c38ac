//! In-process stand-in for the NASA photo service.

use axum::http::{header, StatusCode, Uri};
use axum::Router;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub struct MockUpstream {
    /// Base URL shaped like the real API root.
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockUpstream {
    /// Serve `body` with `status` for every request on an ephemeral port.
    pub async fn start(status: u16, body: &'static str) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = requests.clone();

        let app = Router::new().fallback(move |uri: Uri| {
            let seen = seen.clone();
            async move {
                seen.lock().unwrap().push(uri.to_string());
                (
                    StatusCode::from_u16(status).unwrap(),
                    [(header::CONTENT_TYPE, "application/json")],
                    body,
                )
            }
        });

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/mars-photos/api/v1", addr),
            requests,
        }
    }

    /// Request targets received so far, path plus query.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}
