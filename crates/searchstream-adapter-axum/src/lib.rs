use std::sync::{Arc, Mutex, PoisonError};

use axum::{
    body::{Body, Bytes},
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware,
    response::Response,
    routing::{get, post},
    Router,
};
use rand::{rngs::StdRng, SeedableRng};

/// Shared per-process state. The generator is seeded once and reused by
/// every request.
#[derive(Clone)]
pub struct AppState {
    rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

async fn cors(mut res: Response) -> Response {
    let headers = res.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("*, content-type"),
    );
    res
}

async fn handle_root() -> &'static str {
    "searchstream mock up"
}

async fn handle_preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn handle_search_stream(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    // Guard must not live across an await.
    let res = {
        let mut rng = state.rng.lock().unwrap_or_else(PoisonError::into_inner);
        searchstream_core::handle_search_stream(&customer_id, &headers, &body, &mut *rng)
    };
    let (parts, body) = res.into_parts();
    Response::from_parts(parts, Body::from(body))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_root).options(handle_preflight))
        .route(
            "/customers/{id}/googleAds:searchStream",
            post(handle_search_stream).options(handle_preflight),
        )
        .layer(middleware::map_response(cors))
        .with_state(state)
}
