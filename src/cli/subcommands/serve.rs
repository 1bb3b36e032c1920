use clap::{App, Arg, ArgMatches};
use gqlcrud::{db, gql, http};
use std::error::Error;
use std::net::SocketAddr;

pub const NAME: &str = "serve";

pub fn app() -> App<'static> {
    App::new(NAME).about("Start a GraphQL API server").arg(
        Arg::new("service")
            .about("Which service to serve")
            .required(true)
            .possible_values(&["functions", "places"]),
    )
}

pub async fn execute(matches: &ArgMatches, config: &config::Config) -> Result<(), Box<dyn Error>> {
    let pool = db::create_pool(config)?;
    let ctx = gql::Context { pool };
    let addr: SocketAddr = config.get::<String>("http_server_address")?.parse()?;

    match matches.value_of("service") {
        Some("places") => {
            log::info!("Serving places at http://{}/graphql", addr);
            http::serve(addr, gql::places_schema(), ctx).await
        }
        _ => {
            log::info!("Serving functions at http://{}/graphql", addr);
            http::serve(addr, gql::functions_schema(), ctx).await
        }
    }
}
