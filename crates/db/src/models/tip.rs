//! Gardening tip model and DTOs.
//!
//! A tip can apply to several months through the `tip_months` junction
//! table, so the same advice is reused across a season.

use ecogarden_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use super::month::Month;

/// A row from the `tips` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tip {
    pub id: DbId,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A tip together with the months it is shown in.
#[derive(Debug, Clone, Serialize)]
pub struct TipWithMonths {
    #[serde(flatten)]
    pub tip: Tip,
    pub months: Vec<Month>,
}

/// DTO for creating a tip. `month_ids` are `months.id` values, not numbers.
#[derive(Debug, Clone)]
pub struct CreateTip {
    pub content: String,
    pub month_ids: Vec<DbId>,
}

/// DTO for updating a tip. All fields are optional.
///
/// When `month_ids` is `Some`, it replaces the whole month set.
#[derive(Debug, Clone, Default)]
pub struct UpdateTip {
    pub content: Option<String>,
    pub month_ids: Option<Vec<DbId>>,
}
