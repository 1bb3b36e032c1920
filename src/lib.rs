#[macro_use]
extern crate diesel;

#[macro_use]
extern crate diesel_migrations;

pub mod db;
pub mod functions;
pub mod gql;
pub mod http;
pub mod models;
pub mod places;
pub mod schema;
