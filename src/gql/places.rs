use juniper::{graphql_object, FieldResult};

use super::Context;
use crate::models;
use crate::places::db;

#[allow(clippy::module_name_repetitions)]
pub struct PlacesQuery;

#[graphql_object(name = "Query", context = Context)]
impl PlacesQuery {
    fn places(context: &Context) -> FieldResult<Vec<models::Place>> {
        let conn = context.pool.get()?;
        Ok(db::list_places(&conn)?)
    }
}

#[allow(clippy::module_name_repetitions)]
pub struct PlacesMutation;

#[graphql_object(name = "Mutation", context = Context)]
impl PlacesMutation {
    #[graphql(name = "add_place")]
    fn add_place(
        context: &Context,
        name: String,
        description: String,
        country: String,
    ) -> FieldResult<models::Place> {
        let conn = context.pool.get()?;
        let new = models::NewPlace {
            name: &name,
            description: &description,
            country: &country,
        };
        Ok(db::insert_place(&conn, &new)?)
    }
}

#[graphql_object(
    name = "Place",
    description = "A place in the directory",
    context = Context,
)]
impl models::Place {
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn country(&self) -> &str {
        &self.country
    }
}
