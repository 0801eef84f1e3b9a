use recruitment_db::schema::migrator::Migrator;
use recruitment_db::seeds;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

async fn table_exists(pool: &PgPool, name: &str) -> bool {
    sqlx::query(
        "SELECT EXISTS (
            SELECT 1 FROM information_schema.tables
            WHERE table_schema = 'public' AND table_name = $1
        )",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .expect("existence check")
    .get(0)
}

async fn count(pool: &PgPool, table: &str) -> i64 {
    sqlx::query(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .expect("count")
        .get(0)
}

// Exercises the schema and seed layers against a real database. The whole
// flow runs in one test because the steps share (and drop) the same tables.
#[tokio::test]
async fn schema_and_seed_round_trip() {
    dotenvy::dotenv().ok();
    let url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("DATABASE_URL not set, skipping database round trip");
            return;
        }
    };
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await
        .expect("connect");

    let migrator = Migrator::new(pool.clone());

    // Clean slate in case an earlier run left tables behind.
    migrator.rollback(usize::MAX).await.expect("clean rollback");

    let applied = migrator.run().await.expect("migrate up");
    assert!(applied > 0);
    for table in ["roles", "candidates", "departments", "monthly_analytics"] {
        assert!(table_exists(&pool, table).await, "{} missing", table);
    }

    // Running again applies nothing further.
    assert_eq!(migrator.run().await.expect("rerun"), 0);

    // Seeding twice leaves the same fixed row set.
    seeds::run_all(&pool).await.expect("first seed");
    let first_counts = (
        count(&pool, "roles").await,
        count(&pool, "role_permissions").await,
        count(&pool, "candidates").await,
        count(&pool, "system_settings").await,
    );
    seeds::run_all(&pool).await.expect("second seed");
    let second_counts = (
        count(&pool, "roles").await,
        count(&pool, "role_permissions").await,
        count(&pool, "candidates").await,
        count(&pool, "system_settings").await,
    );
    assert_eq!(first_counts, second_counts);

    // Deleting a role cascades into role_permissions.
    let viewer_grants: i64 = sqlx::query(
        "SELECT COUNT(*) FROM role_permissions
         WHERE role_id = (SELECT id FROM roles WHERE name = 'viewer')",
    )
    .fetch_one(&pool)
    .await
    .expect("viewer grants")
    .get(0);
    assert!(viewer_grants > 0);
    sqlx::query("DELETE FROM roles WHERE name = 'viewer'")
        .execute(&pool)
        .await
        .expect("delete viewer role");
    let remaining: i64 = count(&pool, "role_permissions").await;
    assert_eq!(remaining, first_counts.1 - viewer_grants);

    // Deleting a user referenced by departments.created_by is rejected.
    let restricted = sqlx::query("DELETE FROM users WHERE id = 1")
        .execute(&pool)
        .await;
    assert!(restricted.is_err(), "restrict FK should reject the delete");

    // Down leaves the store without the tables.
    migrator.rollback(usize::MAX).await.expect("rollback all");
    for table in ["roles", "candidates", "departments", "monthly_analytics"] {
        assert!(!table_exists(&pool, table).await, "{} still present", table);
    }
}
