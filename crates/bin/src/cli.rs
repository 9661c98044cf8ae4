//! CLI argument definitions for the shiftgate binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// shiftgate: turnos session and permission tool
#[derive(Parser, Debug)]
#[command(name = "shiftgate")]
#[command(about = "Log in against a turnos user directory and check page permissions")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub context: ContextArgs,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the directory, the session and the configuration live
#[derive(clap::Args, Debug, Clone)]
pub struct ContextArgs {
    /// User directory export (JSON with `usuarios` and `casillas`)
    #[arg(
        short,
        long,
        global = true,
        default_value = "usuarios.json",
        env = "SHIFTGATE_DIRECTORY"
    )]
    pub directory: PathBuf,

    /// Directory holding the session file (plays the part of a browser tab)
    #[arg(
        short = 'S',
        long,
        global = true,
        default_value = ".shiftgate",
        env = "SHIFTGATE_STATE_DIR"
    )]
    pub state_dir: PathBuf,

    /// Optional JSON configuration overriding page lists, messages and the storage key
    #[arg(short, long, global = true, env = "SHIFTGATE_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the session
    Login(LoginArgs),
    /// Clear the stored session
    Logout,
    /// Show the current session and its rendered info fields
    Whoami,
    /// Run the page access gate for a path
    CheckPage(CheckPageArgs),
    /// List the users of the directory
    Users,
}

/// Arguments for the login command
#[derive(clap::Args, Debug)]
pub struct LoginArgs {
    /// Account email (matched case-insensitively)
    #[arg(short, long)]
    pub email: String,

    /// Account password
    #[arg(short, long, env = "SHIFTGATE_PASSWORD", hide_env_values = true)]
    pub password: String,
}

/// Arguments for the check-page command
#[derive(clap::Args, Debug)]
pub struct CheckPageArgs {
    /// Page path, e.g. /pages/configuracion.html
    pub path: String,
}
