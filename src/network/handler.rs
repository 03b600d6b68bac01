//! Request Handler
//!
//! Decodes an HTTP request into a command, runs it against the store and
//! encodes the reply.

use std::convert::Infallible;
use std::sync::Arc;

use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::{Body, Method, Request, Response, StatusCode};

use crate::error::KvError;
use crate::protocol::{decode_command, encode_reply, Command, CommandType};
use crate::store::Store;

const CONTENT_TYPE_JSON: &str = "application/json";
const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";

const NOT_FOUND_MESSAGE: &str = "404 page not found";
const METHOD_NOT_ALLOWED_MESSAGE: &str = "Invalid request method";
const BAD_REQUEST_MESSAGE: &str = "Invalid request";

/// Handle a single HTTP request
///
/// Never fails at the HTTP level: every outcome, including store errors,
/// is turned into a response with a matching status code.
pub async fn handle_request(
    store: Arc<Store>,
    request: Request<Body>,
) -> Result<Response<Body>, Infallible> {
    let path = request.uri().path().to_string();

    let command_type = match CommandType::from_path(&path) {
        Some(command_type) => command_type,
        None => {
            tracing::debug!("No route for {}", path);
            return Ok(text_response(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE));
        }
    };

    if command_type.requires_post() && *request.method() != Method::POST {
        tracing::warn!("Rejected {} {}", request.method(), path);
        return Ok(text_response(
            StatusCode::METHOD_NOT_ALLOWED,
            METHOD_NOT_ALLOWED_MESSAGE,
        ));
    }

    let body = match hyper::body::to_bytes(request.into_body()).await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("Failed to read body for {}: {}", path, e);
            return Ok(text_response(StatusCode::BAD_REQUEST, BAD_REQUEST_MESSAGE));
        }
    };

    let command = match decode_command(command_type, &body) {
        Ok(command) => command,
        Err(e) => {
            tracing::warn!("Bad request body for {}: {}", path, e);
            return Ok(text_response(StatusCode::BAD_REQUEST, BAD_REQUEST_MESSAGE));
        }
    };

    tracing::trace!("Received command: {:?}", command);

    Ok(execute_command(&store, command))
}

/// Execute a command and build the HTTP response
fn execute_command(store: &Store, command: Command) -> Response<Body> {
    match store.execute(command).and_then(|reply| encode_reply(&reply)) {
        Ok(body) => json_response(body),
        Err(
            e @ (KvError::KeyNotFound(_)
            | KvError::InvalidRank { .. }
            | KvError::RankOutOfRange { .. }),
        ) => {
            tracing::debug!("{}", e);
            text_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
        Err(e) => {
            tracing::error!("Command failed: {}", e);
            text_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

fn json_response(body: Vec<u8>) -> Response<Body> {
    let mut response = Response::new(Body::from(body));
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
    response
}

/// Plain-text error body, newline terminated
fn text_response(status: StatusCode, message: &str) -> Response<Body> {
    let mut response = Response::new(Body::from(format!("{}\n", message)));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_TEXT));
    response
}
