//! Router for the events API

use std::sync::{Arc, RwLock};

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde_json::{Value, json};
use uuid::Uuid;

use super::public;
use crate::api::routes::events::db as events_db;
use crate::api::state::AppState;

type SharedState = Arc<RwLock<AppState>>;

/// List all stored events
async fn list_events(
    State(state): State<SharedState>,
) -> Result<Json<Vec<public::Event>>, crate::api::public::ApiError> {
    let db = state.read().expect("Unable to read shared state").db.clone();
    let events = events_db::find_all_events(&db).await?;
    Ok(Json(events))
}

/// Create an event with a store-assigned identifier
async fn create_event(
    State(state): State<SharedState>,
    Json(attrs): Json<public::EventAttrs>,
) -> Result<(StatusCode, Json<public::Event>), crate::api::public::ApiError> {
    let db = state.read().expect("Unable to read shared state").db.clone();
    let id = Uuid::new_v4().to_string();
    let event = events_db::insert_event(&db, id, attrs).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// Apply the provided fields to an existing event
async fn update_event(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(patch): Json<public::EventPatch>,
) -> Result<Json<public::Event>, crate::api::public::ApiError> {
    let db = state.read().expect("Unable to read shared state").db.clone();
    let event = events_db::update_event(&db, id, patch).await?;
    Ok(Json(event))
}

/// Delete an event by ID
async fn delete_event(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, crate::api::public::ApiError> {
    let db = state.read().expect("Unable to read shared state").db.clone();
    events_db::delete_event(&db, id).await?;
    Ok(Json(json!({ "message": "Event deleted" })))
}

/// Create the events router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(list_events).post(create_event))
        .route(
            "/{id}",
            axum::routing::put(update_event).delete(delete_event),
        )
}
