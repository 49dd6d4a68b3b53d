mod common;

use link_tracker::domain::click_filter::ClickFilter;
use link_tracker::domain::entities::{CountryCount, NewClick};
use link_tracker::domain::repositories::ClickRepository;
use link_tracker::error::AppError;
use link_tracker::infrastructure::persistence::PgClickRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_record_click(pool: PgPool) {
    let link_id = common::insert_pg_link(&pool, "rec001").await;
    let repo = PgClickRepository::new(Arc::new(pool));

    let click = repo
        .record(NewClick {
            link_id,
            ip: "203.0.113.9".to_string(),
            user_agent: "curl/8.0".to_string(),
            country: "NL".to_string(),
            is_bot: true,
        })
        .await
        .unwrap();

    assert_eq!(click.link_id, link_id);
    assert_eq!(click.country, "NL");
    assert!(click.is_bot);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_record_click_for_missing_link(pool: PgPool) {
    let repo = PgClickRepository::new(Arc::new(pool));

    let result = repo
        .record(NewClick {
            link_id: 4242,
            ..Default::default()
        })
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_filtered_list_and_count_agree(pool: PgPool) {
    let first = common::insert_pg_link(&pool, "flt001").await;
    let second = common::insert_pg_link(&pool, "flt002").await;
    common::insert_pg_click(&pool, first, "FR", true).await;
    common::insert_pg_click(&pool, first, "FR", false).await;
    common::insert_pg_click(&pool, second, "FR", true).await;
    common::insert_pg_click(&pool, second, "US", true).await;
    let repo = PgClickRepository::new(Arc::new(pool));

    let filter = ClickFilter::new()
        .with_country(Some("FR".to_string()))
        .with_is_bot(Some(true));

    let clicks = repo.list(&filter, 0, 10).await.unwrap();
    assert_eq!(clicks.len(), 2);
    assert!(clicks[0].id > clicks[1].id);
    assert_eq!(repo.count(&filter).await.unwrap(), 2);

    let for_first = ClickFilter::for_link(first).with_is_bot(Some(true));
    assert_eq!(repo.count(&for_first).await.unwrap(), 1);
    assert_eq!(repo.count(&ClickFilter::new()).await.unwrap(), 4);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_distinct_countries(pool: PgPool) {
    let link_id = common::insert_pg_link(&pool, "cty001").await;
    for country in ["US", "FR", "US", "DE"] {
        common::insert_pg_click(&pool, link_id, country, false).await;
    }
    let repo = PgClickRepository::new(Arc::new(pool));

    assert_eq!(
        repo.distinct_countries().await.unwrap(),
        vec!["DE".to_string(), "FR".to_string(), "US".to_string()]
    );
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_count_by_country(pool: PgPool) {
    let link_id = common::insert_pg_link(&pool, "grp001").await;
    let other = common::insert_pg_link(&pool, "grp002").await;
    for country in ["US", "FR", "US", "DE", "US"] {
        common::insert_pg_click(&pool, link_id, country, false).await;
    }
    common::insert_pg_click(&pool, other, "FR", false).await;
    let repo = PgClickRepository::new(Arc::new(pool));

    assert_eq!(
        repo.count_by_country(link_id).await.unwrap(),
        vec![
            CountryCount::new("US", 3),
            CountryCount::new("DE", 1),
            CountryCount::new("FR", 1),
        ]
    );
}
