extern crate clap;
extern crate config;

mod cli;
use cli::subcommands;

#[tokio::main]
async fn main() {
    let app = cli::setup();
    let app_m = app.get_matches();
    let config = cli::config::setup(&app_m).unwrap();
    cli::logging::setup(&config).unwrap();
    match app_m.subcommand() {
        Some((subcommands::serve::NAME, sub_m)) => {
            subcommands::serve::execute(&sub_m, &config).await
        }
        Some((subcommands::migrate::NAME, sub_m)) => {
            subcommands::migrate::execute(&sub_m, &config)
        }
        _ => Ok(()),
    }
    .unwrap()
}
