use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;

use gqlcrud::db;
use gqlcrud::gql::Context;

/// Context over a fresh in-memory database with the schema applied. A single
/// pooled connection, since every :memory: connection is its own database.
pub fn context() -> Context {
    let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
    let pool = Pool::builder()
        .max_size(1)
        .build(manager)
        .expect("in-memory pool");
    db::run_migrations(&pool.get().expect("connection")).expect("migrations");
    Context { pool }
}
