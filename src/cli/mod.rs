use clap::{crate_description, crate_name, crate_version, App, AppSettings, Arg};

pub mod config;
pub mod logging;
pub mod subcommands;

pub fn setup() -> App<'static> {
    App::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .setting(AppSettings::ArgRequiredElseHelp)
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .about("Turn debugging information on"),
        )
        .subcommand(subcommands::serve::app())
        .subcommand(subcommands::migrate::app())
}
