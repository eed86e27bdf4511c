use ecogarden_core::months::month_name;
use ecogarden_db::repositories::{MonthRepo, RoleRepo};
use sqlx::PgPool;

/// Full bootstrap: connect, migrate, verify seed data.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    ecogarden_db::health_check(&pool).await.unwrap();

    let roles = RoleRepo::list(&pool).await.unwrap();
    let names: Vec<&str> = roles.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["ROLE_USER", "ROLE_ADMIN"]);

    let months = MonthRepo::list(&pool).await.unwrap();
    assert_eq!(months.len(), 12);
    assert_eq!(months[0].number, 1);
    for month in &months {
        assert_eq!(Some(month.name.as_str()), month_name(month.number));
    }
}

/// Seeded tips are attached to their months.
#[sqlx::test(migrations = "./migrations")]
async fn test_seed_tips_linked_to_months(pool: PgPool) {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tips")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 2);

    let (links,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tip_months")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(links, 5);
}
