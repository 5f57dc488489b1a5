use sqlx::PgPool;

/// Secondary indexes exist only where a query filters on the column.
#[sqlx::test(migrations = "./migrations")]
async fn indexes_match_query_filters(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT tablename, indexname
         FROM pg_indexes
         WHERE schemaname = 'public'
           AND tablename IN ('scripts', 'comments')
           AND indexname NOT LIKE '%_pkey'
         ORDER BY tablename, indexname",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    let indexes: Vec<(&str, &str)> = rows
        .iter()
        .map(|(table, index)| (table.as_str(), index.as_str()))
        .collect();
    assert_eq!(
        indexes,
        vec![
            ("comments", "idx_comments_script_id"),
            ("scripts", "idx_scripts_author_id"),
            ("scripts", "idx_scripts_modified"),
        ]
    );
}

/// Purging a script must not cascade to, or be blocked by, its comments.
#[sqlx::test(migrations = "./migrations")]
async fn comments_have_no_foreign_key_to_scripts(pool: PgPool) {
    let (count,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*)
         FROM information_schema.table_constraints
         WHERE table_schema = 'public'
           AND table_name = 'comments'
           AND constraint_type = 'FOREIGN KEY'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(count, 0);
}
