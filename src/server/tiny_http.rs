//! tiny_http server adapter
//!
//! Handles routing, body parsing, and response conversion for tiny_http.
//! Requests are served one at a time on the calling thread, which owns the
//! [`AppState`] for the life of the server.

use std::borrow::Cow;
use std::io::{Cursor, Read as _};

use anyhow::Context as _;
use serde::{Serialize, de::DeserializeOwned};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

use crate::api::{
    self, AlertsQuery, ApiError, ApiErrorData, ApiResponse, AppState, AssignTaskRequest,
    CreateTaskRequest, CreateUserRequest,
};
use crate::core::models::BehaviorUpdate;

/// A fully rendered JSON response: status code and body
pub type JsonReply = (u16, String);

// =============================================================================
// SERVER LOOP
// =============================================================================

/// Bind `addr` and serve requests until the listener shuts down
pub fn serve(mut state: AppState, addr: &str) -> anyhow::Result<()> {
    let server = Server::http(addr)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("binding {addr}"))?;
    log::info!("Listening on http://{addr}");

    for mut request in server.incoming_requests() {
        log::debug!("{} {}", request.method(), request.url());
        let response = handle_api_request(&mut state, &mut request);
        if let Err(e) = request.respond(response) {
            log::warn!("Failed to send response: {e}");
        }
    }
    Ok(())
}

// =============================================================================
// REQUEST HANDLING
// =============================================================================

/// Handle an API request and return a response
pub fn handle_api_request(state: &mut AppState, request: &mut Request) -> Response<Cursor<Vec<u8>>> {
    let method = request.method().clone();
    let url = request.url().to_string();

    let body = if method == Method::Post {
        match read_body(request) {
            Ok(body) => body,
            Err(e) => {
                let (status, json) = error_reply(&e);
                return json_response(json, status);
            },
        }
    } else {
        String::new()
    };

    let (status, json) = route(state, &method, &url, &body);
    json_response(json, status)
}

/// Map a method, URL (path plus optional query) and body to a JSON reply
///
/// This is the main routing function; it never touches the socket, so it can
/// be driven directly.
pub fn route(state: &mut AppState, method: &Method, url: &str, body: &str) -> JsonReply {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));
    let path = path.trim_end_matches('/');

    match (method, path) {
        (&Method::Get, "" | "/health") => handle_result(api::health(state)),

        // Tasks
        (&Method::Get, "/tasks") => handle_result(api::list_tasks(state)),
        (&Method::Post, "/tasks/create") => match parse_json::<CreateTaskRequest>(body) {
            Ok(req) => handle_result(api::create_task(state, &req)),
            Err(e) => error_reply(&e),
        },
        (&Method::Post, "/tasks/assign") => match parse_json::<AssignTaskRequest>(body) {
            Ok(req) => handle_result(api::assign_task(state, &req)),
            Err(e) => error_reply(&e),
        },

        // Users
        (&Method::Get, "/users") => handle_result(api::list_users(state)),
        (&Method::Post, "/users/create") => match parse_json::<CreateUserRequest>(body) {
            Ok(req) => handle_result(api::create_user(state, &req)),
            Err(e) => error_reply(&e),
        },

        // Behavior
        (&Method::Get, "/leaderboard") => handle_result(api::get_leaderboard(state)),

        // Task detail: GET /tasks/{id}
        _ if *method == Method::Get && path.starts_with("/tasks/") => {
            match single_segment(path, "/tasks/") {
                Some(id) => handle_result(api::get_task(state, &id)),
                None => not_found_reply(method, path),
            }
        },

        // Metrics: GET /behavior/{userId}?taskStatus=
        _ if *method == Method::Get && path.starts_with("/behavior/") => {
            match single_segment(path, "/behavior/") {
                Some(user_id) => {
                    let status = query_param(query, "taskStatus");
                    handle_result(api::get_metrics(state, &user_id, status.as_deref()))
                },
                None => not_found_reply(method, path),
            }
        },

        // Alerts: GET /alerts/{userId}?taskStatus=&deadlineHours=
        _ if *method == Method::Get && path.starts_with("/alerts/") => {
            match single_segment(path, "/alerts/") {
                Some(user_id) => match alerts_query(query) {
                    Ok(q) => handle_result(api::get_alerts(state, &user_id, &q)),
                    Err(e) => error_reply(&e),
                },
                None => not_found_reply(method, path),
            }
        },

        // Record update: POST /git/update/{userId}
        _ if *method == Method::Post && path.starts_with("/git/update/") => {
            match single_segment(path, "/git/update/") {
                Some(user_id) => match parse_json::<BehaviorUpdate>(body) {
                    Ok(update) => handle_result(api::update_behavior(state, &user_id, &update)),
                    Err(e) => error_reply(&e),
                },
                None => not_found_reply(method, path),
            }
        },

        _ => not_found_reply(method, path),
    }
}

/// The remainder of `path` after `prefix`, percent-decoded, if it is one
/// non-empty segment
fn single_segment(path: &str, prefix: &str) -> Option<String> {
    path.strip_prefix(prefix)
        .filter(|rest| !rest.is_empty() && !rest.contains('/'))
        .and_then(|raw| urlencoding::decode(raw).ok())
        .map(Cow::into_owned)
        .filter(|segment| !segment.is_empty())
}

// =============================================================================
// QUERY AND BODY PARSING
// =============================================================================

/// First decoded value for `key` in a `a=1&b=2` query string
///
/// Keys and values are form-decoded (`+` is a space, `%XX` escapes). A value
/// that does not decode to UTF-8 is kept as sent.
fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| form_decode(k) == key)
        .map(|(_, v)| form_decode(v))
        .filter(|v| !v.is_empty())
}

fn form_decode(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    match urlencoding::decode(&raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw,
    }
}

fn alerts_query(query: &str) -> Result<AlertsQuery, ApiError> {
    let deadline_hours = query_param(query, "deadlineHours")
        .map(|raw| {
            raw.parse::<f64>()
                .map_err(|_| ApiError::bad_request(format!("Invalid deadlineHours: {raw}")))
        })
        .transpose()?;

    Ok(AlertsQuery {
        task_status: query_param(query, "taskStatus"),
        deadline_hours,
    })
}

/// Read the raw request body
fn read_body(request: &mut Request) -> Result<String, ApiError> {
    let mut body = String::new();
    request
        .as_reader()
        .read_to_string(&mut body)
        .map_err(|e| ApiError::bad_request(format!("Failed to read request body: {e}")))?;
    Ok(body)
}

/// Parse a JSON body; an empty body is treated as `{}`
fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "{}" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::bad_request(format!("Invalid JSON: {e}")))
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

/// Convert a handler result to a JSON reply
fn handle_result<T: Serialize>(result: Result<T, ApiError>) -> JsonReply {
    match result {
        Ok(data) => (200, to_json(&ApiResponse::success(data))),
        Err(e) => error_reply(&e),
    }
}

/// Error reply with the status code the error maps to
fn error_reply(error: &ApiError) -> JsonReply {
    if error.status_code() >= 500 {
        log::warn!("{error}");
    }
    let response = ApiResponse::<()>::error(ApiErrorData::from(error));
    (error.status_code(), to_json(&response))
}

fn not_found_reply(method: &Method, path: &str) -> JsonReply {
    error_reply(&ApiError::not_found(format!(
        "API endpoint not found: {method} {path}"
    )))
}

fn to_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string(data).unwrap_or_else(|_| r#"{"success":false}"#.to_string())
}

/// Wrap a JSON string into a tiny_http response
fn json_response(json: String, status: u16) -> Response<Cursor<Vec<u8>>> {
    let response = Response::from_data(json.into_bytes()).with_status_code(StatusCode(status));
    match Header::from_bytes("Content-Type", "application/json") {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}
