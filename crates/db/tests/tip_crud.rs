use ecogarden_db::models::tip::{CreateTip, UpdateTip};
use ecogarden_db::repositories::{MonthRepo, TipRepo};
use sqlx::PgPool;

async fn month_ids(pool: &PgPool, numbers: &[i32]) -> Vec<i64> {
    MonthRepo::find_by_numbers(pool, numbers)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.id)
        .collect()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_tip_with_months(pool: PgPool) {
    let input = CreateTip {
        content: "Paillez le potager avant les gelées.".to_string(),
        month_ids: month_ids(&pool, &[11, 10]).await,
    };
    let tip = TipRepo::create(&pool, &input).await.unwrap();

    let with_months = TipRepo::find_with_months(&pool, tip.id)
        .await
        .unwrap()
        .expect("tip exists");
    let numbers: Vec<i32> = with_months.months.iter().map(|m| m.number).collect();
    assert_eq!(numbers, vec![10, 11]);
    assert_eq!(with_months.months[0].name, "Octobre");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_by_month(pool: PgPool) {
    let july = TipRepo::list_by_month(&pool, 7).await.unwrap();
    assert_eq!(july.len(), 1);
    assert!(july[0].content.starts_with("Arrosez"));

    let january = TipRepo::list_by_month(&pool, 1).await.unwrap();
    assert!(january.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_replaces_month_set(pool: PgPool) {
    let tip = TipRepo::create(
        &pool,
        &CreateTip {
            content: "Semez les radis.".to_string(),
            month_ids: month_ids(&pool, &[3, 4]).await,
        },
    )
    .await
    .unwrap();

    let update = UpdateTip {
        content: None,
        month_ids: Some(month_ids(&pool, &[9]).await),
    };
    let updated = TipRepo::update(&pool, tip.id, &update)
        .await
        .unwrap()
        .expect("tip exists");

    assert_eq!(updated.content, "Semez les radis.");
    assert!(updated.updated_at >= tip.updated_at);

    let months = TipRepo::months_for_tip(&pool, tip.id).await.unwrap();
    let numbers: Vec<i32> = months.iter().map(|m| m.number).collect();
    assert_eq!(numbers, vec![9]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_tip_returns_none(pool: PgPool) {
    let update = UpdateTip {
        content: Some("anything".to_string()),
        month_ids: None,
    };
    assert!(TipRepo::update(&pool, 999_999, &update).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_tip(pool: PgPool) {
    let march = TipRepo::list_by_month(&pool, 3).await.unwrap();
    let tip_id = march[0].id;

    assert!(TipRepo::delete(&pool, tip_id).await.unwrap());
    assert!(TipRepo::find_by_id(&pool, tip_id).await.unwrap().is_none());
    assert!(TipRepo::list_by_month(&pool, 3).await.unwrap().is_empty());
    assert!(!TipRepo::delete(&pool, tip_id).await.unwrap());
}
