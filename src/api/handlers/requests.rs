//! Food request API handlers
//!
//! Submission and deletion are public; the per-requester history and the
//! per-listing management view sit behind the session gate and the
//! ownership guard.

use crate::api::handlers::foods::OwnerQuery;
use crate::auth::middleware::{authorize, SessionUser};
use crate::types::{
    AppError, DeleteOutcome, FoodRequest, InsertOutcome, Result, UpdateOutcome,
};
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

// ============= Request/Response Types =============

/// Query parameters for the per-listing request management view
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRequestsQuery {
    pub email: String,
    pub food_id: String,
}

/// Body of the deliver call: which request to close and which listing it
/// empties out
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliverRequest {
    pub request_id: String,
    pub food_id: String,
}

/// Combined outcome of the deliver call
#[derive(Debug, Serialize)]
pub struct DeliverOutcome {
    pub request: UpdateOutcome,
    pub listing: DeleteOutcome,
}

// ============= Handlers =============

/// Requests made by the caller
///
/// GET /api/v1/food-requests?email=
pub async fn my_requests(
    State(state): State<AppState>,
    session: SessionUser,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<Vec<FoodRequest>>> {
    authorize(&session.claims.email, &query.email)?;

    let requests = state.store.find_requests_by_requester(&query.email).await?;
    Ok(Json(requests))
}

/// Submit a request against a listing
///
/// POST /api/v1/food-requests
///
/// Rejects with 409 when the same (listing, requester) pair already has a
/// request. Check-then-insert: concurrent identical submissions can race
/// past the check; there is no unique index backing it.
pub async fn create_request(
    State(state): State<AppState>,
    Json(request): Json<FoodRequest>,
) -> Result<Json<InsertOutcome>> {
    let existing = state
        .store
        .find_request_by_food_and_requester(&request.food_id, &request.requester_email)
        .await?;

    if existing.is_some() {
        return Err(AppError::Conflict(
            "Request already placed for this listing".to_string(),
        ));
    }

    let outcome = state.store.insert_request(request).await?;
    Ok(Json(outcome))
}

/// Withdraw a request
///
/// DELETE /api/v1/food-requests/{id}
pub async fn delete_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteOutcome>> {
    let outcome = state.store.delete_request(&id).await?;
    Ok(Json(outcome))
}

/// Requests made against one of the caller's listings
///
/// GET /api/v1/manage-food-requests?email=&foodId=
pub async fn requests_for_listing(
    State(state): State<AppState>,
    session: SessionUser,
    Query(query): Query<ListingRequestsQuery>,
) -> Result<Json<Vec<FoodRequest>>> {
    authorize(&session.claims.email, &query.email)?;

    let requests = state.store.find_requests_for_food(&query.food_id).await?;
    Ok(Json(requests))
}

/// Close a request as delivered and remove the emptied listing
///
/// PATCH /api/v1/manage-food-requests
pub async fn deliver_request(
    State(state): State<AppState>,
    Json(payload): Json<DeliverRequest>,
) -> Result<Json<DeliverOutcome>> {
    let request = state
        .store
        .mark_request_delivered(&payload.request_id)
        .await?;
    let listing = state.store.delete_food(&payload.food_id).await?;

    Ok(Json(DeliverOutcome { request, listing }))
}
