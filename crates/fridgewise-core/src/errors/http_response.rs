// ABOUTME: Renders AppError as an HTTP response with the mapped status and JSON body
// ABOUTME: Compiled only with the http-response feature
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

use super::{AppError, ErrorResponse};
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use tracing::{debug, error};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(code = ?self.code, error = %self, "Request failed");
        } else {
            debug!(code = ?self.code, error = %self, "Request rejected");
        }

        (status, Json(ErrorResponse::from(self))).into_response()
    }
}
