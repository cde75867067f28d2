// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Paldex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Paldex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Handlers for the `/api/elements` routes.
//!
//! Reads fold case; create, update, and delete match the stored name
//! exactly. The list response is the flat name-to-url object itself rather
//! than a wrapped envelope.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{Map, Value};

use crate::model::{Element, ElementDraft, ElementPatch};
use crate::store::StoreError;

use super::error::ApiError;
use super::server::AppState;
use super::types::ElementMessageResponse;

/// `GET /api/elements`
pub async fn list_elements(State(state): State<Arc<AppState>>) -> Json<Map<String, Value>> {
    let store = state.elements.lock().await;
    Json(store.to_document())
}

/// `GET /api/elements/{name}`
pub async fn get_element(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Element>, ApiError> {
    let store = state.elements.lock().await;
    match store.get(&name) {
        Ok(element) => Ok(Json(element.clone())),
        Err(StoreError::NotFound { .. }) => Err(ApiError::ElementLookupMiss),
        Err(err) => Err(err.into()),
    }
}

/// `POST /api/elements`
pub async fn create_element(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ElementMessageResponse>), ApiError> {
    let Json(body) = body?;
    let draft: ElementDraft = serde_json::from_value(body).map_err(ApiError::bad_request)?;

    let mut store = state.elements.lock().await;
    let element = store.create(draft)?;
    tracing::info!(name = %element.name, "element created");

    Ok((
        StatusCode::CREATED,
        Json(ElementMessageResponse {
            message: "Element created successfully".to_owned(),
            element,
        }),
    ))
}

/// `PUT /api/elements/{name}`
pub async fn update_element(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ElementMessageResponse>, ApiError> {
    let Json(body) = body?;
    let patch: ElementPatch = serde_json::from_value(body).map_err(ApiError::bad_request)?;

    let mut store = state.elements.lock().await;
    let element = store.update(&name, patch)?;
    tracing::info!(name = %element.name, "element updated");

    Ok(Json(ElementMessageResponse {
        message: "Element updated successfully".to_owned(),
        element,
    }))
}

/// `DELETE /api/elements/{name}`
pub async fn delete_element(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<ElementMessageResponse>, ApiError> {
    let mut store = state.elements.lock().await;
    let element = store.delete(&name)?;
    tracing::info!(name = %element.name, "element deleted");

    Ok(Json(ElementMessageResponse {
        message: "Element deleted successfully".to_owned(),
        element,
    }))
}
