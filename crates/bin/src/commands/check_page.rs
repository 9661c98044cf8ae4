//! Check-page command - runs the page gate for a path.

use shiftgate::auth::PageRequirement;

use crate::cli::{CheckPageArgs, ContextArgs};
use crate::host::open_service;
use crate::output::OutputFormat;

fn requirement_label(requirement: PageRequirement) -> &'static str {
    match requirement {
        PageRequirement::Public => "public",
        PageRequirement::Authenticated => "authenticated",
        PageRequirement::Admin => "admin",
    }
}

/// Run the check-page command
///
/// Exits with status 1 when the gate refuses the page.
pub fn run(
    context: &ContextArgs,
    args: &CheckPageArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let (service, navigator) = open_service(context, &args.path)?;

    let requirement = service.page_requirement(&args.path);
    let granted = service.check_page_access();
    let redirect = navigator.redirect_target();

    match format {
        OutputFormat::Human => match &redirect {
            None => println!("{}: granted ({})", args.path, requirement_label(requirement)),
            Some(target) => println!(
                "{}: refused ({}), redirect to {target}",
                args.path,
                requirement_label(requirement)
            ),
        },
        OutputFormat::Json => {
            let value = serde_json::json!({
                "path": args.path,
                "requirement": requirement_label(requirement),
                "granted": granted,
                "redirect": redirect,
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    if !granted {
        std::process::exit(1);
    }
    Ok(())
}
