mod common;

use linkblog::domain::entities::{LinkChange, NewLink};
use linkblog::domain::repositories::LinkRepository;
use linkblog::infrastructure::persistence::PgLinkRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_create_assigns_fresh_id(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let first = repo
        .create(NewLink {
            url: "https://example.com/1".to_string(),
            commentary: "first".to_string(),
        })
        .await
        .unwrap();

    let second = repo
        .create(NewLink {
            url: "https://example.com/2".to_string(),
            commentary: "second".to_string(),
        })
        .await
        .unwrap();

    assert!(second > first);
}

#[sqlx::test]
async fn test_create_then_find_round_trip(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let id = repo
        .create(NewLink {
            url: "https://example.com".to_string(),
            commentary: "stored".to_string(),
        })
        .await
        .unwrap();

    let link = repo.find_by_id(id).await.unwrap().unwrap();

    assert_eq!(link.id, id);
    assert_eq!(link.url, "https://example.com");
    assert_eq!(link.commentary, "stored");
}

#[sqlx::test]
async fn test_find_by_id_not_found(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let result = repo.find_by_id(12345).await.unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
async fn test_list_returns_insertion_order(pool: PgPool) {
    let first = common::seed_link(&pool, "https://a.example.com", "first").await;
    let second = common::seed_link(&pool, "https://b.example.com", "second").await;

    let repo = PgLinkRepository::new(Arc::new(pool));
    let links = repo.list().await.unwrap();

    assert_eq!(links.len(), 2);
    assert_eq!(links[0].id, first);
    assert_eq!(links[1].id, second);
}

#[sqlx::test]
async fn test_list_empty(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let links = repo.list().await.unwrap();

    assert!(links.is_empty());
}

#[sqlx::test]
async fn test_update_replaces_fields_in_place(pool: PgPool) {
    let id = common::seed_link(&pool, "https://old.example.com", "old").await;

    let repo = PgLinkRepository::new(Arc::new(pool));

    repo.update(
        id,
        LinkChange {
            url: "https://new.example.com".to_string(),
            commentary: "new".to_string(),
        },
    )
    .await
    .unwrap();

    let link = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(link.id, id);
    assert_eq!(link.url, "https://new.example.com");
    assert_eq!(link.commentary, "new");
}

#[sqlx::test]
async fn test_update_does_not_touch_other_rows(pool: PgPool) {
    let target = common::seed_link(&pool, "https://a.example.com", "a").await;
    let other = common::seed_link(&pool, "https://b.example.com", "b").await;

    let repo = PgLinkRepository::new(Arc::new(pool));

    repo.update(
        target,
        LinkChange {
            url: "https://changed.example.com".to_string(),
            commentary: "changed".to_string(),
        },
    )
    .await
    .unwrap();

    let untouched = repo.find_by_id(other).await.unwrap().unwrap();
    assert_eq!(untouched.url, "https://b.example.com");
    assert_eq!(untouched.commentary, "b");
}
