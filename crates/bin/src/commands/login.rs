//! Login command - checks credentials and stores the session.

use crate::cli::{ContextArgs, LoginArgs};
use crate::host::open_service;
use crate::output::OutputFormat;

/// Run the login command
pub fn run(
    context: &ContextArgs,
    args: &LoginArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let (mut service, _) = open_service(context, "/")?;

    let session = match service.login(&args.email, &args.password) {
        Ok(session) => session,
        Err(e) if e.is_invalid_credentials() => {
            eprintln!("login failed: {e}");
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    match format {
        OutputFormat::Human => {
            println!(
                "Logged in as {} <{}> ({})",
                session.display_name,
                session.email,
                session.permission_level.label()
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&session)?);
        }
    }

    Ok(())
}
