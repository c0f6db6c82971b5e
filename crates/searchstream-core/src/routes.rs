use http::{header, HeaderMap, HeaderValue, Response, StatusCode};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::dates::parse_date_range;
use crate::error::SearchStreamError;
use crate::googleads::{SearchStreamRequest, SearchStreamResponse};
use crate::report::build_report;

pub const DEVELOPER_TOKEN: &str = "developer-token";
pub const LOGIN_CUSTOMER_ID: &str = "login-customer-id";
pub const AUTHORIZATION: &str = "authorization";

/// Headers the real API insists on. Only presence is checked.
pub const REQUIRED_HEADERS: [&str; 3] = [DEVELOPER_TOKEN, LOGIN_CUSTOMER_ID, AUTHORIZATION];

fn header_present(headers: &HeaderMap, name: &str) -> bool {
    headers
        .get(name)
        .is_some_and(|v| !v.as_bytes().is_empty())
}

pub fn validate_headers(headers: &HeaderMap) -> Result<(), SearchStreamError> {
    if REQUIRED_HEADERS
        .iter()
        .all(|name| header_present(headers, name))
    {
        Ok(())
    } else {
        Err(SearchStreamError::MissingHeaders)
    }
}

/// Decodes the first JSON value in `body`; anything after it is ignored.
pub fn decode_request(body: &[u8]) -> Result<SearchStreamRequest, SearchStreamError> {
    let mut de = serde_json::Deserializer::from_slice(body);
    SearchStreamRequest::deserialize(&mut de).map_err(SearchStreamError::MalformedBody)
}

/// Runs validation, date extraction and report generation in that order,
/// stopping at the first failure.
pub fn search_stream<R: Rng + ?Sized>(
    customer_id: &str,
    headers: &HeaderMap,
    body: &[u8],
    rng: &mut R,
) -> Result<SearchStreamResponse, SearchStreamError> {
    validate_headers(headers)?;
    let req = decode_request(body)?;
    let range = parse_date_range(&req.query)?;
    log::info!(
        "searchStream customer={}, range={}..{}",
        customer_id,
        range.start,
        range.end
    );
    Ok(build_report(customer_id, &range, rng))
}

pub fn handle_search_stream<R: Rng + ?Sized>(
    customer_id: &str,
    headers: &HeaderMap,
    body: &[u8],
    rng: &mut R,
) -> Response<Vec<u8>> {
    match search_stream(customer_id, headers, body, rng) {
        Ok(report) => respond_with_json(StatusCode::OK, &report),
        Err(e) => respond_with_error(&e),
    }
}

pub fn respond_with_error(err: &SearchStreamError) -> Response<Vec<u8>> {
    match err {
        SearchStreamError::MalformedBody(source) => {
            log::warn!("rejecting request ({}): {}: {}", err.status_tag(), err, source);
        }
        _ => log::warn!("rejecting request ({}): {}", err.status_tag(), err),
    }
    respond_with_json(err.status_code(), &err.to_response())
}

/// Serializes `payload` as the response body. A payload that fails to
/// serialize becomes a bare 500.
pub fn respond_with_json<T: Serialize + ?Sized>(
    status: StatusCode,
    payload: &T,
) -> Response<Vec<u8>> {
    let mut res = Response::new(Vec::new());
    match serde_json::to_vec(payload) {
        Ok(body) => {
            *res.status_mut() = status;
            res.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
            *res.body_mut() = body;
        }
        Err(e) => {
            log::error!("failed to serialize response: {}", e);
            *res.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
        }
    }
    res
}
