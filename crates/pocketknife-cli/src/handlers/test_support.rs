//! Shared fixtures for handler tests.

use pocketknife_db::TestDb;

use crate::bootstrap::CliContext;

/// In-memory database plus a context over it.
///
/// Keep the `TestDb` alive for as long as the context is used.
pub async fn context() -> (TestDb, CliContext) {
    let db = TestDb::new().await.unwrap();
    let ctx = CliContext::from_pool(db.pool().clone());
    (db, ctx)
}

/// Store a product through the service.
pub async fn seed(ctx: &CliContext, name: &str, price: &str) {
    ctx.products().create(name, price).await.unwrap();
}
