// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Paldex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Paldex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Handlers for the `/api/pals` routes.
//!
//! Every handler acquires the pal store lock for its whole body, so a
//! mutation's read-modify-write-persist sequence never interleaves with
//! another pal request.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::model::{PalDraft, PalPatch, PalsDoc};

use super::error::ApiError;
use super::server::AppState;
use super::types::{PalMessageResponse, PalResponse};

/// `GET /api/pals`
pub async fn list_pals(State(state): State<Arc<AppState>>) -> Json<PalsDoc> {
    let store = state.pals.lock().await;
    Json(store.doc().clone())
}

/// `GET /api/pals/{id}`
pub async fn get_pal(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PalResponse>, ApiError> {
    let store = state.pals.lock().await;
    let pal = store.get(&id)?.clone();
    Ok(Json(PalResponse { pal }))
}

/// `POST /api/pals`
pub async fn create_pal(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<PalMessageResponse>), ApiError> {
    let Json(body) = body?;
    let draft: PalDraft = serde_json::from_value(body).map_err(ApiError::bad_request)?;

    let mut store = state.pals.lock().await;
    let pal = store.create(draft)?;
    tracing::info!(id = %pal.id, "pal created");

    Ok((
        StatusCode::CREATED,
        Json(PalMessageResponse {
            message: "Pal created successfully".to_owned(),
            pal,
        }),
    ))
}

/// `PUT /api/pals/{id}`
pub async fn update_pal(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PalMessageResponse>, ApiError> {
    let Json(body) = body?;
    let patch: PalPatch = serde_json::from_value(body).map_err(ApiError::bad_request)?;

    let mut store = state.pals.lock().await;
    let pal = store.update(&id, patch)?;
    tracing::info!(id = %pal.id, "pal updated");

    Ok(Json(PalMessageResponse {
        message: "Pal updated successfully".to_owned(),
        pal,
    }))
}

/// `DELETE /api/pals/{id}`
pub async fn delete_pal(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PalMessageResponse>, ApiError> {
    let mut store = state.pals.lock().await;
    let pal = store.delete(&id)?;
    tracing::info!(id = %pal.id, "pal deleted");

    Ok(Json(PalMessageResponse {
        message: "Pal deleted successfully".to_owned(),
        pal,
    }))
}
