//! Integration tests for the PostgreSQL repositories and `PgStore`.
//!
//! Exercises the repository layer against a real database:
//! - Timestamps on create and the `modified` bump on update
//! - Listing by author, ordered by id
//! - The staleness filter used by the purge
//! - Comments surviving the deletion of their script

use chrono::{Duration, Utc};
use sqlx::PgPool;
use scriptpad_core::types::{DbId, Timestamp};
use scriptpad_db::models::comment::CreateComment;
use scriptpad_db::models::script::{CreateScript, UpdateScript};
use scriptpad_db::repositories::{CommentRepo, ScriptRepo};
use scriptpad_db::{PgStore, ScriptStore};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_script(author: Option<&str>, name: &str) -> CreateScript {
    CreateScript {
        author_id: author.map(str::to_string),
        author_nickname: author.map(str::to_string),
        content: format!("// {name}"),
        name: name.to_string(),
        example: false,
    }
}

async fn backdate(pool: &PgPool, id: DbId, modified: Timestamp) {
    sqlx::query("UPDATE scripts SET modified = $1 WHERE id = $2")
        .bind(modified)
        .bind(id)
        .execute(pool)
        .await
        .unwrap();
}

// ---------------------------------------------------------------------------
// Test: create sets both timestamps, update bumps only `modified`
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn update_bumps_modified_and_keeps_created(pool: PgPool) {
    let created = ScriptRepo::create(&pool, &new_script(Some("alice-id"), "doc"))
        .await
        .unwrap();
    assert_eq!(created.created, created.modified);
    assert_eq!(created.author_nickname.as_deref(), Some("alice-id"));

    let long_ago = Utc::now() - Duration::days(3);
    backdate(&pool, created.id, long_ago).await;

    let updated = ScriptRepo::update(
        &pool,
        created.id,
        &UpdateScript {
            content: "v2".to_string(),
            name: "doc v2".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.content, "v2");
    assert_eq!(updated.name, "doc v2");
    assert_eq!(updated.created, created.created);
    assert!(updated.modified > long_ago);
}

#[sqlx::test(migrations = "./migrations")]
async fn update_of_missing_script_is_row_not_found(pool: PgPool) {
    let store = PgStore::new(pool);

    let err = store
        .update_script(
            999,
            &UpdateScript {
                content: String::new(),
                name: "ghost".to_string(),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, sqlx::Error::RowNotFound));
}

// ---------------------------------------------------------------------------
// Test: listing by author
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn list_by_author_returns_own_scripts_in_id_order(pool: PgPool) {
    let first = ScriptRepo::create(&pool, &new_script(Some("alice-id"), "one"))
        .await
        .unwrap();
    ScriptRepo::create(&pool, &new_script(Some("bob-id"), "bob's"))
        .await
        .unwrap();
    ScriptRepo::create(&pool, &new_script(None, "anonymous"))
        .await
        .unwrap();
    let second = ScriptRepo::create(&pool, &new_script(Some("alice-id"), "two"))
        .await
        .unwrap();

    let listed = ScriptRepo::list_by_author(&pool, "alice-id").await.unwrap();

    let ids: Vec<DbId> = listed.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(listed[0].name, "one");
}

// ---------------------------------------------------------------------------
// Test: staleness filter
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn list_stale_anonymous_ignores_fresh_and_authored(pool: PgPool) {
    let old_anon = ScriptRepo::create(&pool, &new_script(None, "old anonymous"))
        .await
        .unwrap();
    let fresh_anon = ScriptRepo::create(&pool, &new_script(None, "fresh anonymous"))
        .await
        .unwrap();
    let old_owned = ScriptRepo::create(&pool, &new_script(Some("alice-id"), "old owned"))
        .await
        .unwrap();
    let long_ago = Utc::now() - Duration::days(91);
    backdate(&pool, old_anon.id, long_ago).await;
    backdate(&pool, old_owned.id, long_ago).await;

    let cutoff = Utc::now() - Duration::days(90);
    let stale = ScriptRepo::list_stale_anonymous(&pool, cutoff).await.unwrap();

    let ids: Vec<DbId> = stale.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![old_anon.id]);
    assert!(!ids.contains(&fresh_anon.id));
}

// ---------------------------------------------------------------------------
// Test: deleting a script leaves its comments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn delete_script_leaves_comment_rows(pool: PgPool) {
    let script = ScriptRepo::create(&pool, &new_script(None, "doomed"))
        .await
        .unwrap();
    let comment = CommentRepo::create(
        &pool,
        &CreateComment {
            script_id: script.id,
            author_id: "alice-id".to_string(),
            author_nickname: "alice".to_string(),
            content: "still here".to_string(),
        },
    )
    .await
    .unwrap();

    assert!(ScriptRepo::delete(&pool, script.id).await.unwrap());
    assert!(!ScriptRepo::delete(&pool, script.id).await.unwrap());
    assert!(ScriptRepo::find_by_id(&pool, script.id).await.unwrap().is_none());

    let remaining = CommentRepo::list_for_script(&pool, script.id).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, comment.id);
    assert_eq!(remaining[0].content, "still here");
}
