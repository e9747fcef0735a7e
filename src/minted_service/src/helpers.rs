use sqlx::{PgPool, postgres::PgPoolOptions};

/// Create a PostgreSQL connection pool.
pub async fn get_postgres_pool(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
}
