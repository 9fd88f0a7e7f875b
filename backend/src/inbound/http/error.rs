//! HTTP mapping for domain errors.
//!
//! The JSON API answers with the serialised [`Error`]; HTML views wrap the same
//! error in [`PageError`] and answer with an error page. Both use the same
//! status codes and both echo the trace id header.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, HttpResponseBuilder, ResponseError};

use super::html;
use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Result alias for JSON handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Result alias for HTML handlers.
pub type PageResult<T> = Result<T, PageError>;

/// Status code for an error category.
#[must_use]
pub const fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::UpstreamUnavailable => StatusCode::BAD_GATEWAY,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn builder_for(error: &Error) -> HttpResponseBuilder {
    let mut builder = HttpResponse::build(status_for(error.code()));
    if let Some(id) = error.trace_id() {
        builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
    }
    builder
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        builder_for(self).json(self.redacted())
    }
}

/// Domain error rendered as an HTML page.
#[derive(Debug)]
pub struct PageError(pub Error);

impl From<Error> for PageError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl std::fmt::Display for PageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl ResponseError for PageError {
    fn status_code(&self) -> StatusCode {
        status_for(self.0.code())
    }

    fn error_response(&self) -> HttpResponse {
        builder_for(&self.0)
            .content_type(actix_web::http::header::ContentType::html())
            .body(html::error_page(&self.0))
    }
}
