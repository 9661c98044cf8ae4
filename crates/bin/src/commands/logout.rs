//! Logout command - clears the stored session.

use crate::cli::ContextArgs;
use crate::host::open_service;
use crate::output::OutputFormat;

/// Run the logout command
pub fn run(context: &ContextArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let (mut service, _) = open_service(context, "/")?;
    let was_logged_in = service.is_authenticated();

    service.logout()?;

    match format {
        OutputFormat::Human if was_logged_in => println!("Logged out"),
        OutputFormat::Human => println!("No active session"),
        OutputFormat::Json => {
            let value = serde_json::json!({ "logged_out": was_logged_in });
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}
