// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Paldex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Paldex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Maps store failures onto HTTP status codes and JSON error bodies.

use std::fmt;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::store::{RecordKind, StoreError};

#[derive(Debug)]
pub enum ApiError {
    Store(StoreError),
    /// A request body the `Json` extractor refused, or one that parsed as
    /// JSON but not as the operation's input shape.
    BadRequest { message: String },
    /// Miss on the case-folded element lookup. Unlike the exact-key element
    /// routes, this 404 body carries no `message` field.
    ElementLookupMiss,
}

impl ApiError {
    pub(crate) fn bad_request(err: impl fmt::Display) -> Self {
        Self::BadRequest {
            message: err.to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // Every rejection flavor flattens to 400, including the extractor's
        // native 415 for a missing JSON content type.
        Self::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Store(StoreError::MissingFields { required }) => {
                let error = if required.len() == 1 {
                    "Missing required field"
                } else {
                    "Missing required fields"
                };
                (
                    StatusCode::BAD_REQUEST,
                    json!({ "error": error, "required": required }),
                )
            }
            Self::Store(StoreError::NotFound {
                kind: RecordKind::Pal,
                key,
            }) => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "Pal not found",
                    "message": format!("No pal found with ID: {key}")
                }),
            ),
            Self::Store(StoreError::NotFound {
                kind: RecordKind::Element,
                key,
            }) => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "Element not found",
                    "message": format!("No element found with name: {key}")
                }),
            ),
            Self::Store(StoreError::AlreadyExists { name }) => (
                StatusCode::CONFLICT,
                json!({
                    "error": "Element already exists",
                    "message": format!("Element '{name}' already exists")
                }),
            ),
            Self::Store(
                err @ (StoreError::NonNumericId { .. }
                | StoreError::Io { .. }
                | StoreError::Json { .. }),
            ) => {
                tracing::error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": err.to_string() }),
                )
            }
            Self::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, json!({ "error": message }))
            }
            Self::ElementLookupMiss => {
                (StatusCode::NOT_FOUND, json!({ "error": "Element not found" }))
            }
        };

        (status, Json(body)).into_response()
    }
}
