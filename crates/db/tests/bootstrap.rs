use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    launchpad_db::health_check(&pool).await.unwrap();

    for table in ["categories", "sub_categories", "apps"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Blank names are rejected by the schema, not only by the API.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_category_name_rejected(pool: PgPool) {
    let result = sqlx::query("INSERT INTO categories (name, created_at) VALUES ('   ', 0)")
        .execute(&pool)
        .await;
    assert!(result.is_err());
}
