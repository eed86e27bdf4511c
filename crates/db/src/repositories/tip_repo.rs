//! Repository for the `tips` and `tip_months` tables.

use ecogarden_core::types::DbId;
use sqlx::PgPool;

use crate::models::month::Month;
use crate::models::tip::{CreateTip, Tip, TipWithMonths, UpdateTip};

/// Column list for the `tips` table.
const COLUMNS: &str = "id, content, created_at, updated_at";

/// Column list for `tips` aliased as `t` (used in JOIN queries).
const JOINED_COLUMNS: &str = "t.id, t.content, t.created_at, t.updated_at";

/// Column list for `months` aliased as `m` (used in JOIN queries).
const MONTH_COLUMNS: &str = "m.id, m.number, m.name";

/// Provides CRUD operations for tips and their month associations.
pub struct TipRepo;

impl TipRepo {
    /// Insert a new tip and link it to `month_ids` in one transaction.
    pub async fn create(pool: &PgPool, input: &CreateTip) -> Result<Tip, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO tips (content) \
             VALUES ($1) \
             RETURNING {COLUMNS}"
        );
        let tip = sqlx::query_as::<_, Tip>(&insert_query)
            .bind(&input.content)
            .fetch_one(&mut *tx)
            .await?;

        Self::set_months_inner(&mut tx, tip.id, &input.month_ids).await?;

        tx.commit().await?;
        Ok(tip)
    }

    /// Find a tip by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tip>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tips WHERE id = $1");
        sqlx::query_as::<_, Tip>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a tip by ID, enriched with all of its months.
    pub async fn find_with_months(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TipWithMonths>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(tip) => {
                let months = Self::months_for_tip(pool, tip.id).await?;
                Ok(Some(TipWithMonths { tip, months }))
            }
            None => Ok(None),
        }
    }

    /// All tips linked to the month with the given number, oldest first.
    pub async fn list_by_month(pool: &PgPool, month_number: i32) -> Result<Vec<Tip>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} \
             FROM tips t \
             JOIN tip_months tm ON tm.tip_id = t.id \
             JOIN months m ON m.id = tm.month_id \
             WHERE m.number = $1 \
             ORDER BY t.id ASC"
        );
        sqlx::query_as::<_, Tip>(&query)
            .bind(month_number)
            .fetch_all(pool)
            .await
    }

    /// Months linked to a tip, in calendar order.
    pub async fn months_for_tip(pool: &PgPool, tip_id: DbId) -> Result<Vec<Month>, sqlx::Error> {
        let query = format!(
            "SELECT {MONTH_COLUMNS} \
             FROM months m \
             JOIN tip_months tm ON tm.month_id = m.id \
             WHERE tm.tip_id = $1 \
             ORDER BY m.number ASC"
        );
        sqlx::query_as::<_, Month>(&query)
            .bind(tip_id)
            .fetch_all(pool)
            .await
    }

    /// Update a tip. Only non-`None` fields are applied; `updated_at` is
    /// always bumped.
    ///
    /// If `month_ids` is `Some`, replaces all month associations.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTip,
    ) -> Result<Option<Tip>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let update_query = format!(
            "UPDATE tips SET \
                content = COALESCE($2, content), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let tip = sqlx::query_as::<_, Tip>(&update_query)
            .bind(id)
            .bind(&input.content)
            .fetch_optional(&mut *tx)
            .await?;

        if let Some(ref tip) = tip {
            if let Some(ref month_ids) = input.month_ids {
                Self::set_months_inner(&mut tx, tip.id, month_ids).await?;
            }
        }

        tx.commit().await?;
        Ok(tip)
    }

    /// Delete a tip. Month links go with it (ON DELETE CASCADE).
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tips WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Replace month associations within an existing transaction.
    async fn set_months_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        tip_id: DbId,
        month_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM tip_months WHERE tip_id = $1")
            .bind(tip_id)
            .execute(&mut **tx)
            .await?;

        if !month_ids.is_empty() {
            sqlx::query(
                "INSERT INTO tip_months (tip_id, month_id) \
                 SELECT $1, UNNEST($2::BIGINT[]) \
                 ON CONFLICT DO NOTHING",
            )
            .bind(tip_id)
            .bind(month_ids)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }
}
