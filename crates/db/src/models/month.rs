use ecogarden_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `months` lookup table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Month {
    pub id: DbId,
    /// 1 = January .. 12 = December.
    pub number: i32,
    pub name: String,
}
