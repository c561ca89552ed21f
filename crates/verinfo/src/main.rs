use crate::prelude::*;
use clap::Parser;

mod check;
mod error;
mod parse;
mod prelude;
mod properties;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Parse free-form version strings (tags, build properties) into major, minor, patch, build number and qualifier"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "VERINFO_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Parse version strings and show their parts
    Parse(crate::parse::ParseOptions),

    /// Print a version as build-tool properties
    Properties(crate::properties::PropertiesOptions),

    /// Check whether a version is at least as new as another one
    Check(crate::check::CheckOptions),
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();
    log::debug!("{app:?}");

    match app.command {
        SubCommands::Parse(options) => crate::parse::run(options, app.global),
        SubCommands::Properties(options) => crate::properties::run(options, app.global),
        SubCommands::Check(options) => crate::check::run(options, app.global),
    }
}
