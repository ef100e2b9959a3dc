//! Request Extractors

use axum::extract::FromRequest;

use crate::error::AuthError;

/// JSON request body
///
/// Same as `axum::Json`, but a missing content type, a truncated body or a
/// wrongly typed field is answered as `AuthError::InvalidArgument` with the
/// usual problem-details body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AuthError))]
pub struct AuthJson<T>(pub T);
