use clap::ArgMatches;
use config::Config;
use std::error::Error;

pub fn setup(app_m: &ArgMatches) -> Result<config::Config, Box<dyn Error>> {
    let mut config_default = Config::default();
    let config = config_default
        .set_default("debug", false)?
        .set_default("log_level", "info")?
        .set_default("database_url", "gqlcrud.sqlite")?
        .set_default("http_server_address", "0.0.0.0:3010")?
        .merge(config::File::with_name("config").required(false))?
        .merge(config::Environment::with_prefix("APP"))?;

    if app_m.is_present("debug") {
        config.set("debug", true)?;
        config.set("log_level", "debug")?;
    }

    Ok(config.clone())
}
