use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::embed_migrations;

embed_migrations!("migrations");

pub type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;
pub type SqlitePooledConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// # Errors
///
/// Will return Err for any problem in connection to database
pub fn create_pool(config: &config::Config) -> Result<SqlitePool, Box<dyn std::error::Error>> {
    let database_url = config.get_str("database_url")?;
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Ok(Pool::builder().build(manager)?)
}

/// # Errors
///
/// Will return Err for any problem in connection to database
pub fn connect(config: &config::Config) -> Result<SqliteConnection, Box<dyn std::error::Error>> {
    let database_url = &config.get_str("database_url")?;
    Ok(SqliteConnection::establish(&database_url)?)
}

/// Connects and applies pending embedded migrations.
///
/// # Errors
///
/// Will return Err for any problem in connection to database
pub fn setup(config: &config::Config) -> Result<SqliteConnection, Box<dyn std::error::Error>> {
    let debug = config.get_bool("debug")?;
    let conn = connect(config)?;
    if debug {
        embedded_migrations::run_with_output(&conn, &mut std::io::stdout())?;
    } else {
        embedded_migrations::run(&conn)?;
    }
    Ok(conn)
}

/// # Errors
///
/// Will return Err if a migration fails to apply
pub fn run_migrations(
    conn: &SqliteConnection,
) -> Result<(), diesel_migrations::RunMigrationsError> {
    embedded_migrations::run(conn)
}
