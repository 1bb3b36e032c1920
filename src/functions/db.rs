use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::models::{Function, NewFunction};

pub fn insert_function(
    conn: &SqliteConnection,
    new: &NewFunction,
) -> Result<Function, diesel::result::Error> {
    use crate::schema::functions::dsl::{functions, id};

    log::trace!("Function new {}", &new.name);
    // sqlite has no INSERT .. RETURNING, so re-read the row just written.
    // The transaction keeps a concurrent insert on another connection from
    // landing between the write and the re-read.
    conn.transaction(|| {
        diesel::insert_into(functions).values(new).execute(conn)?;
        functions.order(id.desc()).first::<Function>(conn)
    })
}

pub fn list_functions(conn: &SqliteConnection) -> Result<Vec<Function>, diesel::result::Error> {
    use crate::schema::functions::dsl::{functions, id};

    functions.order(id.asc()).load::<Function>(conn)
}
