#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use reqwest::Client;
use serde_json::Value;

use novavista::config::Config;

/// What the stand-in sheet script answers with.
#[derive(Clone)]
pub enum ScriptReply {
    Json(Value),
    Html(&'static str),
    Status(u16, &'static str),
    /// Accept the request and never answer.
    Stall,
}

/// A request captured by the stub script.
#[derive(Clone, Debug)]
pub struct Received {
    pub content_type: String,
    pub body: String,
}

impl Received {
    /// Decoded form pairs, in wire order.
    pub fn pairs(&self) -> Vec<(String, String)> {
        form_urlencoded::parse(self.body.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    pub fn field(&self, key: &str) -> Option<String> {
        self.pairs().into_iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

#[derive(Clone)]
struct ScriptState {
    reply: ScriptReply,
    received: Arc<Mutex<Vec<Received>>>,
}

/// Local stand-in for the Google Apps Script endpoint.
pub struct StubScript {
    pub addr: SocketAddr,
    received: Arc<Mutex<Vec<Received>>>,
}

impl StubScript {
    pub fn url(&self) -> String {
        format!("http://{}/exec", self.addr)
    }

    pub fn received(&self) -> Vec<Received> {
        self.received.lock().unwrap().clone()
    }
}

async fn script_handler(
    State(state): State<ScriptState>,
    headers: HeaderMap,
    body: String,
) -> axum::response::Response {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    state
        .received
        .lock()
        .unwrap()
        .push(Received { content_type, body });

    match state.reply {
        ScriptReply::Json(v) => axum::Json(v).into_response(),
        ScriptReply::Html(html) => axum::response::Html(html).into_response(),
        ScriptReply::Status(code, text) => {
            (StatusCode::from_u16(code).unwrap(), text).into_response()
        }
        ScriptReply::Stall => {
            tokio::time::sleep(std::time::Duration::from_secs(60)).await;
            StatusCode::OK.into_response()
        }
    }
}

pub async fn spawn_script(reply: ScriptReply) -> StubScript {
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = ScriptState {
        reply,
        received: received.clone(),
    };
    let app = Router::new()
        .route("/exec", post(script_handler))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub script");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Stub script failed");
    });

    StubScript { addr, received }
}

/// A URL nothing is listening on.
pub async fn dead_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/exec")
}

/// A running site instance.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed")
    }

    pub async fn get_with_cookie(&self, path: &str, cookie: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .header("cookie", cookie)
            .send()
            .await
            .expect("get request failed")
    }

    /// Submit to the JSON contact API, return (body, status).
    pub async fn submit_contact(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/v1/contact"))
            .json(data)
            .send()
            .await
            .expect("submit contact failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(Value::Null);
        (body, status)
    }

    /// Submit a page form the way htmx does, return (html, status).
    pub async fn submit_form(&self, variant: &str, data: &[(&str, &str)]) -> (String, StatusCode) {
        let resp = self
            .client
            .post(self.url(&format!("/forms/{variant}")))
            .header("hx-request", "true")
            .form(data)
            .send()
            .await
            .expect("submit form failed");
        let status = resp.status();
        (resp.text().await.unwrap_or_default(), status)
    }
}

pub fn test_config(relay_url: String) -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        relay_url,
        log_level: "warn".to_string(),
        ..Config::default()
    }
}

/// Spawn the site with its relay pointed at `relay_url`.
pub async fn spawn_app(relay_url: String) -> TestApp {
    let app = novavista::build_app(test_config(relay_url)).expect("Failed to build app");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp { addr, client }
}
