use juniper::{graphql_object, FieldResult};

use super::Context;
use crate::functions::{db, DEFAULT_RUNTIME};
use crate::models;

#[allow(clippy::module_name_repetitions)]
pub struct FunctionsQuery;

#[graphql_object(name = "Query", context = Context)]
impl FunctionsQuery {
    fn functions(context: &Context) -> FieldResult<Vec<models::Function>> {
        let conn = context.pool.get()?;
        Ok(db::list_functions(&conn)?)
    }
}

#[allow(clippy::module_name_repetitions)]
pub struct FunctionsMutation;

#[graphql_object(name = "Mutation", context = Context)]
impl FunctionsMutation {
    #[graphql(name = "add_function")]
    fn add_function(context: &Context, name: String) -> FieldResult<models::Function> {
        let conn = context.pool.get()?;
        let new = models::NewFunction {
            name: &name,
            runtime: DEFAULT_RUNTIME,
        };
        Ok(db::insert_function(&conn, &new)?)
    }
}

#[graphql_object(
    name = "Function",
    description = "A registered function",
    context = Context,
)]
impl models::Function {
    fn name(&self) -> &str {
        &self.name
    }
    fn runtime(&self) -> &str {
        &self.runtime
    }
}
