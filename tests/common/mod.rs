#![allow(dead_code)]

use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    routing::{on, MethodFilter, MethodRouter},
    Router,
};
use postos::{Config, Gateway};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// A canned reply for one method and path. Paths use axum syntax, so captures like
/// `/api/postos/proximidade/:latitude/:longitude` match any values.
#[derive(Clone, Debug)]
pub struct Route {
    method: Method,
    path: &'static str,
    status: u16,
    body: String,
}

impl Route {
    pub fn new(
        method: &'static str,
        path: &'static str,
        status: u16,
        body: impl Into<String>,
    ) -> Route {
        Route {
            method: Method::from_bytes(method.as_bytes()).unwrap(),
            path,
            status,
            body: body.into(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Recorded {
    pub method: String,
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<Recorded>>>);

impl Recorder {
    fn push(&self, method: Method, uri: Uri, headers: HeaderMap, body: String) {
        let target = uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| uri.path().to_string());
        let headers = headers
            .iter()
            .map(|(k, v)| {
                let value = v.to_str().unwrap_or_default().to_string();
                (k.as_str().to_lowercase(), value)
            })
            .collect();
        self.0.lock().unwrap().push(Recorded {
            method: method.to_string(),
            target,
            headers,
            body,
        });
    }
}

/// Axum server on an ephemeral port answering with canned replies and recording every request.
pub struct StubServer {
    pub base_url: String,
    recorder: Recorder,
}

impl StubServer {
    pub async fn start(routes: Vec<Route>) -> StubServer {
        let _ = env_logger::builder().is_test(true).try_init();

        let recorder = Recorder::default();
        let app = router(routes).with_state(recorder.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        StubServer {
            base_url: format!("http://{}", addr),
            recorder,
        }
    }

    pub fn gateway(&self) -> Gateway {
        Gateway::new(&Config::new(&self.base_url)).unwrap()
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.recorder.0.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path_prefix: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.target.starts_with(path_prefix))
            .collect()
    }
}

fn router(routes: Vec<Route>) -> Router<Recorder> {
    // Routes sharing a path are merged into one method router.
    let mut paths: Vec<(&'static str, MethodRouter<Recorder>)> = vec![];
    for route in routes {
        let filter = MethodFilter::try_from(route.method.clone()).unwrap();
        let status = StatusCode::from_u16(route.status).unwrap();
        let reply = route.body;
        let handler = move |State(recorder): State<Recorder>,
                            method: Method,
                            uri: Uri,
                            headers: HeaderMap,
                            body: String| {
            let reply = reply.clone();
            async move {
                recorder.push(method, uri, headers, body);
                (status, [(header::CONTENT_TYPE, "application/json")], reply)
            }
        };

        match paths.iter().position(|(path, _)| *path == route.path) {
            Some(i) => {
                let (path, existing) = paths.remove(i);
                paths.insert(i, (path, existing.on(filter, handler)));
            }
            None => paths.push((route.path, on(filter, handler))),
        }
    }

    let mut router = Router::new();
    for (path, methods) in paths {
        router = router.route(path, methods);
    }
    router.fallback(
        |State(recorder): State<Recorder>,
         method: Method,
         uri: Uri,
         headers: HeaderMap,
         body: String| async move {
            recorder.push(method, uri, headers, body);
            (StatusCode::NOT_FOUND, r#"{"message": "not found"}"#)
        },
    )
}

pub fn station_json(id: &str, name: &str, latitude: f64, longitude: f64, prices: &str) -> String {
    let prices: serde_json::Value = serde_json::from_str(prices).unwrap();
    serde_json::json!({
        "_id": id,
        "nome": name,
        "latitude": latitude,
        "longitude": longitude,
        "endereco": format!("Rua {}", id),
        "precosCombustiveis": prices,
    })
    .to_string()
}
