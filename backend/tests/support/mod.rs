#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use backend::api_utils::http_utils::ApiClient;
use serde_json::{Value, json};

#[derive(Clone)]
struct MockState {
    search_bodies: Arc<Mutex<Vec<Value>>>,
    search_status: StatusCode,
    search_reply: Arc<String>,
}

/// Stand-in for the external backend, bound to an ephemeral local port.
pub struct MockBackend {
    pub base_url: String,
    search_bodies: Arc<Mutex<Vec<Value>>>,
}

impl MockBackend {
    pub async fn start(search_status: StatusCode, search_reply: impl Into<String>) -> Self {
        let search_bodies = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            search_bodies: search_bodies.clone(),
            search_status,
            search_reply: Arc::new(search_reply.into()),
        };
        let app = Router::new()
            .route("/api/branches/services/search", post(search))
            .route("/api/brands", get(brands))
            .route("/api/services", get(services))
            .route("/api/cities", get(cities))
            .route("/api/brand-models/by-brand/{id}", get(brand_models))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind mock backend");
        let addr: SocketAddr = listener.local_addr().expect("mock backend address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock backend crashed");
        });
        Self { base_url: format!("http://{addr}"), search_bodies }
    }

    pub async fn with_results(results: Value) -> Self {
        Self::start(StatusCode::OK, results.to_string()).await
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.base_url.clone(), Duration::from_secs(5)).expect("api client")
    }

    /// Bodies of every search POST received so far, in arrival order.
    pub fn search_bodies(&self) -> Vec<Value> {
        self.search_bodies.lock().expect("search bodies lock").clone()
    }
}

async fn search(State(state): State<MockState>, Json(body): Json<Value>) -> (StatusCode, String) {
    state.search_bodies.lock().expect("search bodies lock").push(body);
    (state.search_status, state.search_reply.as_ref().clone())
}

async fn brands() -> Json<Value> {
    Json(json!([{"id": 1, "brandName": "BMW"}, {"id": 2, "name": "Audi"}]))
}

async fn services() -> Json<Value> {
    Json(json!([{"id": "oil-change", "serviceName": "Oil change"}, {"id": "tyres", "title": "Tyre fitting"}]))
}

async fn cities() -> Json<Value> {
    Json(json!([{"id": 1, "cityName": "Sofia"}, {"id": 2, "cityName": "Plovdiv"}]))
}

async fn brand_models(Path(id): Path<String>) -> Json<Value> {
    Json(json!([{"id": 10, "modelName": format!("{id} series")}]))
}

/// Base URL of a local port nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind unused port");
    let addr = listener.local_addr().expect("unused port address");
    drop(listener);
    format!("http://{addr}")
}

pub fn sample_results() -> Value {
    json!([
        {"id": 1, "name": "North Garage", "address": "Vitosha 12", "city": "Sofia",
         "rating": 4.8, "distance": 1.2, "availableSlots": ["09:00", "11:00"], "price": 60.0},
        {"id": 2, "name": "Quick Fix", "rating": 4.1}
    ])
}
