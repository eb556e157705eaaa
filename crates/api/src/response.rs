//! Shared response envelope types for API handlers.
//!
//! Every API response uses a `{ "data": ..., "error": ... }` envelope.
//! Successful responses carry `"error": null`; failures are produced by
//! [`AppError`](crate::error::AppError) with `"data": null`.

use serde::Serialize;

/// Standard success envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse::new(items)))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
    pub error: Option<String>,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data, error: None }
    }
}
