use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod host;
mod output;

mod commands {
    pub mod check_page;
    pub mod login;
    pub mod logout;
    pub mod users;
    pub mod whoami;
}

use cli::{Cli, Commands};
use output::OutputFormat;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("shiftgate=warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::from_json_flag(cli.json);

    match &cli.command {
        Commands::Login(args) => commands::login::run(&cli.context, args, format),
        Commands::Logout => commands::logout::run(&cli.context, format),
        Commands::Whoami => commands::whoami::run(&cli.context, format),
        Commands::CheckPage(args) => commands::check_page::run(&cli.context, args, format),
        Commands::Users => commands::users::run(&cli.context, format),
    }
}
