use clap::{App, ArgMatches};
use gqlcrud::db;
use std::error::Error;

pub const NAME: &str = "migrate";

pub fn app() -> App<'static> {
    App::new(NAME).about("Apply pending database migrations")
}

pub fn execute(_matches: &ArgMatches, config: &config::Config) -> Result<(), Box<dyn Error>> {
    db::setup(config)?;
    log::info!("Database migrations applied");
    Ok(())
}
