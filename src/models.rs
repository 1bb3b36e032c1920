use super::schema::{functions, places};

#[derive(Queryable)]
pub struct Function {
    pub id: i32,
    pub name: String,
    pub runtime: String,
}

#[derive(Insertable)]
#[table_name = "functions"]
pub struct NewFunction<'a> {
    pub name: &'a str,
    pub runtime: &'a str,
}

#[derive(Queryable)]
pub struct Place {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub country: String,
}

#[derive(Insertable)]
#[table_name = "places"]
pub struct NewPlace<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub country: &'a str,
}
