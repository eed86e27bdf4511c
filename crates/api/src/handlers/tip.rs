//! Handlers for the `/tips` resource.
//!
//! Reading tips requires any authenticated user; writes require `ROLE_ADMIN`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ecogarden_core::error::CoreError;
use ecogarden_core::months::{current_month, parse_month_list, validate_month_number};
use ecogarden_core::types::DbId;
use ecogarden_db::models::tip::{CreateTip, TipWithMonths, UpdateTip};
use ecogarden_db::repositories::{MonthRepo, TipRepo};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireUser};
use crate::state::AppState;

/// Request body for `POST /tips`.
#[derive(Debug, Deserialize)]
pub struct CreateTipRequest {
    #[serde(default)]
    pub content: String,
    /// Month numbers, as integers or numeric strings.
    pub months: Option<Value>,
}

/// Request body for `PUT /tips/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateTipRequest {
    pub content: Option<String>,
    pub months: Option<Value>,
}

/// GET /api/tips
///
/// Tips for the current month. 204 No Content when there are none.
pub async fn list_current(
    State(state): State<AppState>,
    RequireUser(_user): RequireUser,
) -> AppResult<Response> {
    tips_for_month(&state, current_month()).await
}

/// GET /api/tips/{month}
///
/// Tips for the given month number (1-12). 204 No Content when there are none.
pub async fn list_for_month(
    State(state): State<AppState>,
    RequireUser(_user): RequireUser,
    Path(month): Path<i32>,
) -> AppResult<Response> {
    let month = validate_month_number(month)?;
    tips_for_month(&state, month).await
}

/// POST /api/tips
///
/// Create a tip linked to one or more months. Returns 201 Created.
pub async fn create_tip(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateTipRequest>,
) -> AppResult<(StatusCode, Json<TipWithMonths>)> {
    let content = input.content.trim();
    if content.is_empty() {
        return Err(AppError::BadRequest("\"content\" is required".into()));
    }
    let months = input
        .months
        .ok_or_else(|| AppError::BadRequest("\"months\" is required".into()))?;
    let month_ids = resolve_month_ids(&state, &months).await?;

    let create_dto = CreateTip {
        content: content.to_string(),
        month_ids,
    };
    let tip = TipRepo::create(&state.pool, &create_dto).await?;
    let created = TipRepo::find_with_months(&state.pool, tip.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tip",
            id: tip.id,
        }))?;

    tracing::info!(tip_id = tip.id, admin_id = admin.user_id, "Tip created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/tips/{id}
///
/// Partially update a tip. A provided month list replaces the existing one.
pub async fn update_tip(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTipRequest>,
) -> AppResult<Json<TipWithMonths>> {
    if TipRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound { entity: "Tip", id }));
    }

    let content = match input.content {
        Some(c) if c.trim().is_empty() => {
            return Err(AppError::BadRequest("\"content\" must not be blank".into()));
        }
        Some(c) => Some(c.trim().to_string()),
        None => None,
    };
    let month_ids = match input.months {
        Some(ref months) => Some(resolve_month_ids(&state, months).await?),
        None => None,
    };

    let update_dto = UpdateTip { content, month_ids };
    TipRepo::update(&state.pool, id, &update_dto)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Tip", id }))?;

    let updated = TipRepo::find_with_months(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Tip", id }))?;

    tracing::info!(tip_id = id, admin_id = admin.user_id, "Tip updated");
    Ok(Json(updated))
}

/// DELETE /api/tips/{id}
pub async fn delete_tip(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TipRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(tip_id = id, admin_id = admin.user_id, "Tip deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Tip", id }))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Tips for one month, each carrying only that month.
async fn tips_for_month(state: &AppState, number: i32) -> AppResult<Response> {
    let month = MonthRepo::find_by_number(&state.pool, number)
        .await?
        .ok_or_else(|| AppError::InternalError(format!("Month {number} is not seeded")))?;

    let tips = TipRepo::list_by_month(&state.pool, number).await?;
    if tips.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let body: Vec<TipWithMonths> = tips
        .into_iter()
        .map(|tip| TipWithMonths {
            tip,
            months: vec![month.clone()],
        })
        .collect();
    Ok(Json(body).into_response())
}

/// Turn a JSON month list into month row ids.
async fn resolve_month_ids(state: &AppState, months: &Value) -> AppResult<Vec<DbId>> {
    let values = months.as_array().ok_or_else(|| {
        AppError::BadRequest("\"months\" must be a list of month numbers".into())
    })?;
    let numbers = parse_month_list(values)?;

    let rows = MonthRepo::find_by_numbers(&state.pool, &numbers).await?;
    if rows.len() != numbers.len() {
        return Err(AppError::BadRequest(
            "\"months\" references an unknown month".into(),
        ));
    }
    Ok(rows.into_iter().map(|m| m.id).collect())
}
