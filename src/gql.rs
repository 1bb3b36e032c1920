use juniper::EmptySubscription;

pub mod functions;
pub mod places;

use crate::db::SqlitePool;

/// Request-scoped state handed to every resolver. Holds the connection pool
/// instead of a process-global database session.
pub struct Context {
    pub pool: SqlitePool,
}

impl juniper::Context for Context {}

// A root schema consists of a query, a mutation, and a subscription.
// Request queries can be executed against a RootNode.
pub type Schema<Q, M> = juniper::RootNode<'static, Q, M, EmptySubscription<Context>>;

pub type FunctionsSchema = Schema<functions::FunctionsQuery, functions::FunctionsMutation>;
pub type PlacesSchema = Schema<places::PlacesQuery, places::PlacesMutation>;

#[must_use]
pub fn functions_schema() -> FunctionsSchema {
    FunctionsSchema::new(
        functions::FunctionsQuery,
        functions::FunctionsMutation,
        EmptySubscription::new(),
    )
}

#[must_use]
pub fn places_schema() -> PlacesSchema {
    PlacesSchema::new(
        places::PlacesQuery,
        places::PlacesMutation,
        EmptySubscription::new(),
    )
}
