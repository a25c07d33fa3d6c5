use axum::{body::Bytes, extract::State, response::Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::extract::PathId;
use crate::api::helper;
use crate::app::AppState;
use crate::domain::thing::{Thing, ThingFilter};

/// Request body for creating or replacing a thing
#[derive(Debug, Deserialize)]
pub struct ThingRequest {
    pub name: String,
    pub description: Option<String>,
}

/// Thing as returned to clients
#[derive(Debug, Serialize)]
pub struct ThingResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Thing> for ThingResponse {
    fn from(thing: Thing) -> Self {
        Self {
            id: thing.id(),
            name: thing.name().to_string(),
            description: thing.description().map(str::to_string),
            created_at: thing.created_at(),
            updated_at: thing.updated_at(),
        }
    }
}

/// Create a new thing
///
/// POST /api/things
pub async fn create_thing(State(state): State<AppState>, body: Bytes) -> Response {
    helper::create(body, |req: ThingRequest| async move {
        state
            .things
            .create(req.name, req.description)
            .await
            .map(ThingResponse::from)
    })
    .await
}

/// Replace a thing's name and description
///
/// PUT /api/things/:id
pub async fn update_thing(
    State(state): State<AppState>,
    PathId(id): PathId,
    body: Bytes,
) -> Response {
    helper::update(id, body, |id, req: ThingRequest| async move {
        state
            .things
            .update(id, req.name, req.description)
            .await
            .map(ThingResponse::from)
    })
    .await
}

/// Delete a thing
///
/// DELETE /api/things/:id
pub async fn delete_thing(State(state): State<AppState>, PathId(id): PathId) -> Response {
    helper::delete(id, |id| async move { state.things.delete(id).await }).await
}

/// Get a thing by ID
///
/// GET /api/things/:id
pub async fn get_thing(State(state): State<AppState>, PathId(id): PathId) -> Response {
    helper::get_by_id(id, |id| async move {
        state.things.get(id).await.map(ThingResponse::from)
    })
    .await
}

/// List things matching a filter body
///
/// POST /api/things/filter
pub async fn filter_things(State(state): State<AppState>, body: Bytes) -> Response {
    helper::get_by_filter(body, |filter: ThingFilter| async move {
        state
            .things
            .filter(&filter)
            .await
            .map(|things| things.into_iter().map(ThingResponse::from).collect::<Vec<_>>())
    })
    .await
}
