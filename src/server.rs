//! HTTP API for the name-matching service.
//!
//! A hyper http1 server with one `service_fn` per connection. All endpoints
//! speak JSON and carry CORS headers so a browser frontend can call them
//! directly. Handlers are pure over store snapshots; the only mutation is
//! `POST /init-database`, which swaps the seed tables in atomically.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use bytes::Bytes;
use http::{Method, Request, Response, StatusCode};
use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

use crate::data;
use crate::era::{classify, KOREAN_GENERATIONS};
use crate::error::ServiceError;
use crate::recommend::{recommendations, Recommendation};
use crate::romaji::{hiragana_to_romaji, romaji_to_hiragana};
use crate::search::search_japanese;
use crate::similarity::{similar_names, SimilarName};
use crate::store::{NameRecord, NameStore, JAPANESE_KEY, KOREAN_KEY};
use crate::trend::{self, TrendStats};

/// Server configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (default: 127.0.0.1:8080)
    pub listen_addr: SocketAddr,

    /// Bearer token for write/query access (None = no auth)
    pub api_token: Option<String>,

    /// Maximum request body size in bytes (default: 1MB)
    pub max_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: ([127, 0, 0, 1], 8080).into(),
            api_token: None,
            max_body_size: 1024 * 1024,
        }
    }
}

impl ServerConfig {
    /// Build a config from `LISTEN_ADDR` and `API_TOKEN` environment
    /// variables, falling back to defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(addr) = std::env::var("LISTEN_ADDR") {
            match addr.parse() {
                Ok(parsed) => config.listen_addr = parsed,
                Err(e) => warn!(addr = %addr, error = %e, "Ignoring invalid LISTEN_ADDR"),
            }
        }
        if let Ok(token) = std::env::var("API_TOKEN") {
            if !token.is_empty() {
                config.api_token = Some(token);
            }
        }
        config
    }
}

/// Shared state for the API server.
pub struct AppState {
    pub config: ServerConfig,
    pub store: NameStore,
}

/// The API HTTP server.
pub struct ApiServer {
    state: Arc<AppState>,
}

impl ApiServer {
    pub fn new(state: AppState) -> Self {
        Self {
            state: Arc::new(state),
        }
    }

    /// Bind the listen address and serve connections until the process exits.
    pub async fn run(&self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.state.config.listen_addr).await?;

        info!(addr = %self.state.config.listen_addr, "API server listening");

        loop {
            let (stream, peer_addr) = listener.accept().await?;
            let io = TokioIo::new(stream);
            let state = Arc::clone(&self.state);

            tokio::spawn(async move {
                let service = service_fn(move |req| {
                    let state = Arc::clone(&state);
                    async move { handle_request(state, req).await }
                });

                if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                    warn!(peer = %peer_addr, error = %e, "Connection error");
                }
            });
        }
    }
}

/// Top-level request handler: auth, routing, and error-to-JSON mapping.
async fn handle_request(
    state: Arc<AppState>,
    req: Request<Incoming>,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    if method == Method::OPTIONS {
        return Ok(cors_preflight_response());
    }

    // Check bearer token if configured
    if let Some(ref expected) = state.config.api_token {
        let provided = req
            .headers()
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));

        if provided != Some(expected.as_str()) {
            let err = ServiceError::Unauthorized;
            return Ok(error_response(err.status_code(), &err.to_string()));
        }
    }

    let result = route(state, req).await;

    match result {
        Ok(response) => Ok(response),
        Err(e) => {
            error!(method = %method, path = %path, error = %e, "Request failed");
            Ok(error_response(e.status_code(), &e.to_string()))
        }
    }
}

async fn route(
    state: Arc<AppState>,
    req: Request<Incoming>,
) -> Result<Response<Full<Bytes>>, ServiceError> {
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(str::to_string);

    match (req.method().clone(), path.as_str()) {
        (Method::GET, "/health") => handle_health(&state),
        (Method::POST, "/init-database") => handle_init_database(&state),
        (Method::GET, "/japanese-names") => handle_japanese_names(&state),
        (Method::GET, "/search-japanese-names") => {
            handle_search(&state, query_param(query.as_deref(), "q"))
        }
        (Method::GET, "/debug-search") => {
            handle_debug_search(&state, query_param(query.as_deref(), "q"))
        }
        (Method::GET, "/name-stats") => {
            handle_name_stats(&state, query_param(query.as_deref(), "name"))
        }
        (Method::POST, "/korean-recommendations") => {
            let body = read_body(&state, req).await?;
            handle_korean_recommendations(&state, &body)
        }
        (Method::POST, "/similar-japanese-names") => {
            let body = read_body(&state, req).await?;
            handle_similar_names(&state, &body)
        }
        _ => Ok(error_response(StatusCode::NOT_FOUND, "Not found")),
    }
}

/// Collect a request body, aborting once the configured size cap is hit.
async fn read_body<B>(state: &AppState, req: Request<B>) -> Result<Bytes, ServiceError>
where
    B: hyper::body::Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let limited = Limited::new(req.into_body(), state.config.max_body_size);
    let collected = limited.collect().await.map_err(|e| {
        if e.is::<LengthLimitError>() {
            ServiceError::BadRequest(format!(
                "Request body exceeds {} bytes",
                state.config.max_body_size
            ))
        } else {
            ServiceError::Body(e.to_string())
        }
    })?;
    Ok(collected.to_bytes())
}

// ============================================================================
// Endpoint handlers
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthStatus {
    status: &'static str,
    timestamp: u64,
    store_ok: bool,
    server_ok: bool,
}

fn handle_health(state: &AppState) -> Result<Response<Full<Bytes>>, ServiceError> {
    debug!("Health check requested");
    let store_ok = state.store.self_test();
    let status = HealthStatus {
        status: if store_ok { "healthy" } else { "degraded" },
        timestamp: unix_now(),
        store_ok,
        server_ok: true,
    };
    json_response(StatusCode::OK, &serde_json::to_string(&status)?)
}

#[derive(Serialize)]
struct InitResult {
    success: bool,
    counts: InitCounts,
}

#[derive(Serialize)]
struct InitCounts {
    japanese: usize,
    korean: usize,
}

fn handle_init_database(state: &AppState) -> Result<Response<Full<Bytes>>, ServiceError> {
    let japanese = data::japanese_seed();
    let korean = data::korean_seed();
    let counts = InitCounts {
        japanese: japanese.len(),
        korean: korean.len(),
    };

    state.store.set(JAPANESE_KEY, japanese);
    state.store.set(KOREAN_KEY, korean);

    info!(
        japanese = counts.japanese,
        korean = counts.korean,
        version = state.store.version(),
        "Database initialized"
    );

    let result = InitResult {
        success: true,
        counts,
    };
    json_response(StatusCode::OK, &serde_json::to_string(&result)?)
}

#[derive(Serialize)]
struct NameList<'a> {
    names: &'a [NameRecord],
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
}

fn handle_japanese_names(state: &AppState) -> Result<Response<Full<Bytes>>, ServiceError> {
    let names = state.store.get(JAPANESE_KEY).unwrap_or_default();
    let list = NameList {
        names: &names,
        error: None,
    };
    json_response(StatusCode::OK, &serde_json::to_string(&list)?)
}

fn handle_search(
    state: &AppState,
    query: Option<String>,
) -> Result<Response<Full<Bytes>>, ServiceError> {
    let query = query.unwrap_or_default();
    debug!(query = %query, "Search request");

    if query.trim().is_empty() {
        return json_response(
            StatusCode::OK,
            &serde_json::to_string(&NameList {
                names: &[],
                error: None,
            })?,
        );
    }

    let pool = state.store.get(JAPANESE_KEY).unwrap_or_default();
    if pool.is_empty() {
        warn!("Search against an uninitialized store");
        return json_response(
            StatusCode::OK,
            &serde_json::to_string(&NameList {
                names: &[],
                error: Some("Database not initialized"),
            })?,
        );
    }

    let results = search_japanese(&pool, &query);
    info!(query = %query, results = results.len(), "Search completed");
    json_response(
        StatusCode::OK,
        &serde_json::to_string(&NameList {
            names: &results,
            error: None,
        })?,
    )
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecommendationRequest {
    japanese_name: Option<NameRecord>,
}

#[derive(Serialize)]
struct RecommendationList {
    recommendations: Vec<Recommendation>,
}

fn handle_korean_recommendations(
    state: &AppState,
    body: &Bytes,
) -> Result<Response<Full<Bytes>>, ServiceError> {
    let request: RecommendationRequest = serde_json::from_slice(body)?;

    let Some(source) = request.japanese_name else {
        return json_response(
            StatusCode::OK,
            &serde_json::to_string(&RecommendationList {
                recommendations: Vec::new(),
            })?,
        );
    };

    let pool = state.store.get(KOREAN_KEY).unwrap_or_default();
    let recommendations = recommendations(&source, &pool);
    info!(
        name = %source.display,
        results = recommendations.len(),
        "Korean recommendations computed"
    );

    json_response(
        StatusCode::OK,
        &serde_json::to_string(&RecommendationList { recommendations })?,
    )
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SimilarNamesRequest {
    target_name: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SimilarNameList {
    similar_names: Vec<SimilarName>,
}

fn handle_similar_names(
    state: &AppState,
    body: &Bytes,
) -> Result<Response<Full<Bytes>>, ServiceError> {
    let request: SimilarNamesRequest = serde_json::from_slice(body)?;
    let pool = state.store.get(JAPANESE_KEY).unwrap_or_default();

    let target = request
        .target_name
        .and_then(|wanted| pool.iter().find(|n| n.display == wanted).cloned());

    let similar_names = match target {
        Some(ref target) => {
            let results = similar_names(target, &pool);
            info!(
                name = %target.display,
                results = results.len(),
                "Similar names computed"
            );
            results
        }
        None => Vec::new(),
    };

    json_response(
        StatusCode::OK,
        &serde_json::to_string(&SimilarNameList { similar_names })?,
    )
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NameStats {
    name: NameRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    peak_year: Option<i32>,
    era: &'static str,
    stats: TrendStats,
}

/// Trend/era breakdown for a single stored name, looked up by display form
/// across both tables.
fn handle_name_stats(
    state: &AppState,
    name: Option<String>,
) -> Result<Response<Full<Bytes>>, ServiceError> {
    let wanted = name.ok_or_else(|| ServiceError::BadRequest("Missing name parameter".into()))?;

    let record = [JAPANESE_KEY, KOREAN_KEY].iter().find_map(|key| {
        state
            .store
            .get(key)
            .and_then(|pool| pool.iter().find(|n| n.display == wanted).cloned())
    });

    let Some(record) = record else {
        return Ok(error_response(StatusCode::NOT_FOUND, "Unknown name"));
    };

    let peak = trend::peak_year(&record.yearly_ranks);
    let stats = NameStats {
        peak_year: peak,
        era: peak.map_or("", |year| classify(KOREAN_GENERATIONS, year).name),
        stats: trend::calculate(&record.yearly_ranks),
        name: record,
    };
    json_response(StatusCode::OK, &serde_json::to_string(&stats)?)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DebugSample {
    display: String,
    reading: String,
    romaji: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DebugReport {
    original_query: String,
    search_query: String,
    hiragana_query: String,
    romaji_query: String,
    database_count: usize,
    sample_names: Vec<DebugSample>,
    matches: Vec<DebugSample>,
}

/// Diagnostic endpoint showing every derived form of a query and which
/// records it reaches.
fn handle_debug_search(
    state: &AppState,
    query: Option<String>,
) -> Result<Response<Full<Bytes>>, ServiceError> {
    let original = query.unwrap_or_else(|| "haruto".to_string());
    let search_query = original.to_lowercase().trim().to_string();
    let hiragana_query = romaji_to_hiragana(&search_query);

    let pool = state.store.get(JAPANESE_KEY).unwrap_or_default();
    let sample = |n: &NameRecord| DebugSample {
        display: n.display.clone(),
        reading: n.phonetic().to_string(),
        romaji: hiragana_to_romaji(n.phonetic()),
    };

    let report = DebugReport {
        original_query: original.clone(),
        search_query: search_query.clone(),
        hiragana_query,
        romaji_query: search_query,
        database_count: pool.len(),
        sample_names: pool.iter().take(5).map(sample).collect(),
        matches: search_japanese(&pool, &original).iter().map(sample).collect(),
    };

    json_response(StatusCode::OK, &serde_json::to_string(&report)?)
}

// ============================================================================
// Helpers
// ============================================================================

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Pull a single query parameter out of a raw query string, percent-decoded.
fn query_param(query: Option<&str>, key: &str) -> Option<String> {
    let query = query?;
    for pair in query.split('&') {
        let mut parts = pair.splitn(2, '=');
        if parts.next() == Some(key) {
            return Some(percent_decode(parts.next().unwrap_or("")));
        }
    }
    None
}

/// Minimal percent-decoding: `%XX` escapes and `+` as space. Invalid escapes
/// pass through untouched.
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                let hex = bytes.get(i + 1..i + 3).and_then(|h| {
                    std::str::from_utf8(h)
                        .ok()
                        .and_then(|s| u8::from_str_radix(s, 16).ok())
                });
                match hex {
                    Some(byte) => {
                        out.push(byte);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            other => {
                out.push(other);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn json_response(status: StatusCode, body: &str) -> Result<Response<Full<Bytes>>, ServiceError> {
    let response = Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type, Authorization")
        .body(Full::new(Bytes::from(body.to_owned())))?;
    Ok(response)
}

/// Error responses never fail to build: the fallback is a plain 500.
fn error_response(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    let body = serde_json::json!({ "error": message }).to_string();
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|_| {
            let mut fallback = Response::new(Full::new(Bytes::new()));
            *fallback.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        })
}

fn cors_preflight_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type, Authorization")
        .header("Access-Control-Max-Age", "600")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::new())))
}
