// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Paldex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Paldex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Route table, shared state, and the serve loop.

use std::future::Future;
use std::io;
use std::sync::Arc;

use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use schemars::schema_for;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use crate::model::{Element, Pal};
use crate::store::{ElementStore, PalStore};

use super::elements;
use super::pals;
use super::types::HealthResponse;

/// Shared handler state: one async lock per store.
///
/// A handler holds its store's lock for the whole
/// read-modify-write-persist sequence, so requests against one collection
/// serialize while the two collections stay independent.
#[derive(Debug)]
pub struct AppState {
    pub pals: Mutex<PalStore>,
    pub elements: Mutex<ElementStore>,
}

impl AppState {
    pub fn new(pals: PalStore, elements: ElementStore) -> Self {
        Self {
            pals: Mutex::new(pals),
            elements: Mutex::new(elements),
        }
    }
}

/// Builds the full route table over the shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health))
        .route("/api-docs", get(api_docs))
        .route("/api/openapi.json", get(openapi_spec))
        .route("/api/pals", get(pals::list_pals).post(pals::create_pal))
        .route(
            "/api/pals/{id}",
            get(pals::get_pal)
                .put(pals::update_pal)
                .delete(pals::delete_pal),
        )
        .route(
            "/api/elements",
            get(elements::list_elements).post(elements::create_element),
        )
        .route(
            "/api/elements/{name}",
            get(elements::get_element)
                .put(elements::update_element)
                .delete(elements::delete_element),
        )
        .with_state(state)
}

/// Serves the API on `listener` until `shutdown` resolves, then drains
/// in-flight requests before returning.
pub async fn serve(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> io::Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

/// `GET /`: service banner with the route inventory.
async fn service_info() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Paldex API",
        "status": "Server is running",
        "availableRoutes": {
            "pals": [
                "GET /api/pals - Get all pals",
                "GET /api/pals/{id} - Get pal by ID",
                "POST /api/pals - Create a new pal",
                "PUT /api/pals/{id} - Update pal by ID",
                "DELETE /api/pals/{id} - Delete pal by ID"
            ],
            "elements": [
                "GET /api/elements - Get all elements",
                "GET /api/elements/{name} - Get element by name",
                "POST /api/elements - Create a new element",
                "PUT /api/elements/{name} - Update element by name",
                "DELETE /api/elements/{name} - Delete element by name"
            ],
            "other": [
                "GET /health - Health check"
            ]
        }
    }))
}

/// `GET /health`
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_owned(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// `GET /api-docs`: Swagger UI shell over the served OpenAPI document.
async fn api_docs() -> Html<&'static str> {
    Html(API_DOCS_HTML)
}

const API_DOCS_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Pals &amp; Elements API Documentation</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui.css" />
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = function() {
            SwaggerUIBundle({
                url: '/api/openapi.json',
                dom_id: '#swagger-ui',
                deepLinking: true,
                presets: [
                    SwaggerUIBundle.presets.apis,
                    SwaggerUIStandalonePreset
                ]
            });
        };
    </script>
</body>
</html>
"#;

/// `GET /api/openapi.json`
async fn openapi_spec() -> Json<Value> {
    let pal_id_param = json!({
        "name": "id",
        "in": "path",
        "required": true,
        "schema": { "type": "string" },
        "description": "Zero-padded pal id, e.g. 001"
    });
    let element_name_param = json!({
        "name": "name",
        "in": "path",
        "required": true,
        "schema": { "type": "string" },
        "description": "Element name"
    });

    Json(json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Pals & Elements API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "A CRUD API for managing Pals and Elements"
        },
        "servers": [
            { "url": "/", "description": "Current server" }
        ],
        "tags": [
            { "name": "Pals", "description": "Pal collection operations" },
            { "name": "Elements", "description": "Element collection operations" },
            { "name": "Other", "description": "Service endpoints" }
        ],
        "paths": {
            "/api/pals": {
                "get": {
                    "tags": ["Pals"],
                    "summary": "Get all pals",
                    "responses": {
                        "200": {
                            "description": "The whole pals document",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": {
                                            "pals": {
                                                "type": "array",
                                                "items": { "$ref": "#/components/schemas/Pal" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                "post": {
                    "tags": ["Pals"],
                    "summary": "Create a new pal",
                    "description": "Assigns the next sequential id; any id in the body is ignored",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": {
                                    "type": "object",
                                    "required": ["name", "elements"],
                                    "properties": {
                                        "name": { "type": "string" },
                                        "elements": {
                                            "type": "array",
                                            "items": { "type": "string" }
                                        }
                                    },
                                    "additionalProperties": true
                                }
                            }
                        }
                    },
                    "responses": {
                        "201": {
                            "description": "Pal created",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": {
                                            "message": { "type": "string" },
                                            "pal": { "$ref": "#/components/schemas/Pal" }
                                        }
                                    }
                                }
                            }
                        },
                        "400": { "description": "Missing required fields" }
                    }
                }
            },
            "/api/pals/{id}": {
                "get": {
                    "tags": ["Pals"],
                    "summary": "Get pal by ID",
                    "parameters": [pal_id_param],
                    "responses": {
                        "200": {
                            "description": "The pal under this id",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": {
                                            "pal": { "$ref": "#/components/schemas/Pal" }
                                        }
                                    }
                                }
                            }
                        },
                        "404": { "description": "Pal not found" }
                    }
                },
                "put": {
                    "tags": ["Pals"],
                    "summary": "Update pal by ID",
                    "description": "Shallow merge; the id itself never changes",
                    "parameters": [pal_id_param],
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "type": "object", "additionalProperties": true }
                            }
                        }
                    },
                    "responses": {
                        "200": { "description": "Pal updated" },
                        "404": { "description": "Pal not found" }
                    }
                },
                "delete": {
                    "tags": ["Pals"],
                    "summary": "Delete pal by ID",
                    "description": "The freed id is never reassigned",
                    "parameters": [pal_id_param],
                    "responses": {
                        "200": { "description": "Pal deleted" },
                        "404": { "description": "Pal not found" }
                    }
                }
            },
            "/api/elements": {
                "get": {
                    "tags": ["Elements"],
                    "summary": "Get all elements",
                    "responses": {
                        "200": {
                            "description": "Flat object mapping element name to url",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "additionalProperties": { "type": "string" }
                                    }
                                }
                            }
                        }
                    }
                },
                "post": {
                    "tags": ["Elements"],
                    "summary": "Create a new element",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/Element" }
                            }
                        }
                    },
                    "responses": {
                        "201": { "description": "Element created" },
                        "400": { "description": "Missing required fields" },
                        "409": { "description": "Element already exists" }
                    }
                }
            },
            "/api/elements/{name}": {
                "get": {
                    "tags": ["Elements"],
                    "summary": "Get element by name",
                    "description": "Case-insensitive lookup; the stored casing is returned",
                    "parameters": [element_name_param],
                    "responses": {
                        "200": {
                            "description": "The stored name/url pair",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/Element" }
                                }
                            }
                        },
                        "404": { "description": "Element not found" }
                    }
                },
                "put": {
                    "tags": ["Elements"],
                    "summary": "Update element by name",
                    "description": "Exact-name match, unlike the read",
                    "parameters": [element_name_param],
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": {
                                    "type": "object",
                                    "required": ["url"],
                                    "properties": { "url": { "type": "string" } }
                                }
                            }
                        }
                    },
                    "responses": {
                        "200": { "description": "Element updated" },
                        "400": { "description": "Missing url" },
                        "404": { "description": "Element not found" }
                    }
                },
                "delete": {
                    "tags": ["Elements"],
                    "summary": "Delete element by name",
                    "description": "Exact-name match, unlike the read",
                    "parameters": [element_name_param],
                    "responses": {
                        "200": { "description": "Element deleted" },
                        "404": { "description": "Element not found" }
                    }
                }
            },
            "/health": {
                "get": {
                    "tags": ["Other"],
                    "summary": "Health check",
                    "responses": {
                        "200": {
                            "description": "Service is up",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": {
                                            "status": { "type": "string" },
                                            "timestamp": { "type": "string" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Pal": schema_for!(Pal),
                "Element": schema_for!(Element)
            }
        }
    }))
}
