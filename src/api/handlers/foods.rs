//! Food listing API handlers
//!
//! Browse, detail fetch, and listing intake are public; per-donor listing
//! management sits behind the session gate and the ownership guard.

use crate::auth::middleware::{authorize, SessionUser};
use crate::types::{
    DeleteOutcome, Food, FoodFilter, FoodPatch, FoodSort, InsertOutcome, Result, SortOrder,
    UpdateOutcome,
};
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

// ============= Query Types =============

/// Query parameters for the public listing browse
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFoodsQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<FoodSort>,
    pub order: Option<SortOrder>,
}

/// Query parameter naming the identity an owner-scoped route is called for
#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub email: String,
}

/// Clients flatten `&` out of category names in query strings
/// (`MeatAndVeg`); restore it before filtering. Names that merely start
/// with `And` are left alone.
fn normalize_category(raw: &str) -> String {
    match raw.find("And") {
        Some(pos) if pos > 0 => raw.replacen("And", "&", 1),
        _ => raw.to_string(),
    }
}

// ============= Handlers =============

/// Browse food listings with optional category/search/sort
///
/// GET /api/v1/foods
pub async fn list_foods(
    State(state): State<AppState>,
    Query(query): Query<ListFoodsQuery>,
) -> Result<Json<Vec<Food>>> {
    let filter = FoodFilter {
        category: query.category.as_deref().map(normalize_category),
        search: query.search,
        sort: query
            .sort_by
            .map(|field| (field, query.order.unwrap_or(SortOrder::Asc))),
    };

    let foods = state.store.find_foods(&filter).await?;
    Ok(Json(foods))
}

/// Fetch one listing by id
///
/// GET /api/v1/foods/{id}
///
/// An absent listing is a `null` body, not a 404.
pub async fn get_food(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Food>>> {
    let food = state.store.find_food_by_id(&id).await?;
    Ok(Json(food))
}

/// Create a listing
///
/// POST /api/v1/add-food
pub async fn add_food(
    State(state): State<AppState>,
    Json(food): Json<Food>,
) -> Result<Json<InsertOutcome>> {
    let outcome = state.store.insert_food(food).await?;
    Ok(Json(outcome))
}

/// Partially update a listing
///
/// PATCH /api/v1/update-food/{id}
pub async fn update_food(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<FoodPatch>,
) -> Result<Json<UpdateOutcome>> {
    let outcome = state.store.update_food(&id, &patch).await?;
    Ok(Json(outcome))
}

/// Delete a listing
///
/// DELETE /api/v1/foods/{id}
pub async fn delete_food(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteOutcome>> {
    let outcome = state.store.delete_food(&id).await?;
    Ok(Json(outcome))
}

/// Listings owned by the caller
///
/// GET /api/v1/manage-food?email=
pub async fn manage_food(
    State(state): State<AppState>,
    session: SessionUser,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<Vec<Food>>> {
    authorize(&session.claims.email, &query.email)?;

    let foods = state.store.find_foods_by_donor(&query.email).await?;
    Ok(Json(foods))
}
