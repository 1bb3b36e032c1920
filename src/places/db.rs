use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::models::{NewPlace, Place};

pub fn insert_place(
    conn: &SqliteConnection,
    new: &NewPlace,
) -> Result<Place, diesel::result::Error> {
    use crate::schema::places::dsl::{id, places};

    log::trace!("Place new {}", &new.name);
    // sqlite has no INSERT .. RETURNING, so re-read the row just written.
    // The transaction keeps a concurrent insert on another connection from
    // landing between the write and the re-read.
    conn.transaction(|| {
        diesel::insert_into(places).values(new).execute(conn)?;
        places.order(id.desc()).first::<Place>(conn)
    })
}

pub fn list_places(conn: &SqliteConnection) -> Result<Vec<Place>, diesel::result::Error> {
    use crate::schema::places::dsl::{id, places};

    places.order(id.asc()).load::<Place>(conn)
}
