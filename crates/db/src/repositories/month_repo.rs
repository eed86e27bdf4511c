//! Repository for the `months` lookup table.

use sqlx::PgPool;

use crate::models::month::Month;

const COLUMNS: &str = "id, number, name";

/// Read-only access to the seeded months.
pub struct MonthRepo;

impl MonthRepo {
    /// All twelve months in calendar order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Month>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM months ORDER BY number ASC");
        sqlx::query_as::<_, Month>(&query).fetch_all(pool).await
    }

    /// Find a month by its number (1-12).
    pub async fn find_by_number(pool: &PgPool, number: i32) -> Result<Option<Month>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM months WHERE number = $1");
        sqlx::query_as::<_, Month>(&query)
            .bind(number)
            .fetch_optional(pool)
            .await
    }

    /// Find every month whose number is in `numbers`, in calendar order.
    ///
    /// Numbers with no matching row are simply absent from the result.
    pub async fn find_by_numbers(pool: &PgPool, numbers: &[i32]) -> Result<Vec<Month>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM months WHERE number = ANY($1) ORDER BY number ASC");
        sqlx::query_as::<_, Month>(&query)
            .bind(numbers)
            .fetch_all(pool)
            .await
    }
}
