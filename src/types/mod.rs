//! Core types (domain records, store outcomes, errors).

#![allow(missing_docs)]

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

// ============= Domain Records =============

/// A food listing offered by a donor.
///
/// Wire and storage shape are the same camelCase document, `donarEmail`
/// spelled the way the upstream clients spell it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub food_name: String,
    pub food_image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub food_quantity: i64,
    pub pickup_location: String,
    /// ISO-8601 timestamp; listings sort lexicographically by this field.
    pub expired_date_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
    pub donar_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donar_image: Option<String>,
    pub donar_email: String,
    #[serde(default = "default_food_status")]
    pub food_status: String,
}

fn default_food_status() -> String {
    "available".to_string()
}

/// Partial update of a food listing. Only the fields present in the
/// request body are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_status: Option<String>,
}

/// A request made against a food listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRequest {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Hex id of the listing this request targets.
    pub food_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donar_email: Option<String>,
    pub requester_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_location: Option<String>,
    #[serde(default)]
    pub status: RequestStatus,
}

/// Lifecycle of a food request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    #[default]
    Requested,
    Delivered,
}

// ============= Listing Queries =============

/// Server-side filter over the public food listing browse.
#[derive(Debug, Clone, Default)]
pub struct FoodFilter {
    /// Exact category match, already normalized by the handler.
    pub category: Option<String>,
    /// Case-insensitive substring match on the listing name.
    pub search: Option<String>,
    pub sort: Option<(FoodSort, SortOrder)>,
}

/// Sortable listing fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodSort {
    Expiry,
    Quantity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

// ============= Store Outcomes =============

// These mirror the document driver's result documents so existing clients
// keep parsing responses unchanged.

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOutcome {
    pub acknowledged: bool,
    pub inserted_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutcome {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

// ============= Authentication Types =============

/// Claims carried by the session token: the asserted identity plus the
/// issuance/expiry pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    pub iat: usize,
    pub exp: usize,
}

// ============= Error Types =============

/// Application error, mapped to an HTTP status at the response boundary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unauthenticated")]
    Unauthenticated,

    #[error("Forbidden")]
    Forbidden,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Unauthenticated => (
                axum::http::StatusCode::UNAUTHORIZED,
                "Unauthorized".to_string(),
            ),
            AppError::Forbidden => (axum::http::StatusCode::FORBIDDEN, "Forbidden".to_string()),
            AppError::Conflict(msg) => (axum::http::StatusCode::CONFLICT, msg),
            AppError::Database(msg) | AppError::Internal(msg) => {
                // Detail stays in the server log; the client gets a generic body.
                tracing::error!(error = %msg, "internal server error");
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
