//! Whoami command - shows the session as the pages would render it.

use shiftgate::constants::{ADMIN_ONLY_ATTRIBUTE, USER_INFO_ATTRIBUTE};
use shiftgate::page::{InfoField, MemoryDocument, MemoryElement};

use crate::cli::ContextArgs;
use crate::host::open_service;
use crate::output::{OutputFormat, print_fields};

/// Run the whoami command
pub fn run(context: &ContextArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let (service, _) = open_service(context, "/")?;

    let Some(session) = service.current_user() else {
        eprintln!("Not logged in");
        std::process::exit(1);
    };

    // Render through the same bindings a page uses
    let mut document = MemoryDocument::new();
    let admin_marker = document.push(MemoryElement::new().with_attribute(ADMIN_ONLY_ATTRIBUTE, ""));
    let bindings: Vec<(InfoField, MemoryElement)> = InfoField::ALL
        .into_iter()
        .map(|field| {
            let element = MemoryElement::new().with_attribute(USER_INFO_ATTRIBUTE, field.key());
            (field, document.push(element))
        })
        .collect();
    service.update_ui(&document);

    let yes_no = |flag: bool| if flag { "yes" } else { "no" }.to_string();

    match format {
        OutputFormat::Human => {
            let mut fields = vec![("id", session.id.to_string())];
            fields.extend(bindings.iter().map(|(field, element)| (field.key(), element.text())));
            fields.push(("admin", yes_no(admin_marker.is_visible())));
            fields.push(("coordinador", yes_no(service.is_coordinator())));
            fields.push(("desarrollador", yes_no(service.is_developer())));
            print_fields(&fields);
        }
        OutputFormat::Json => {
            let info: serde_json::Map<String, serde_json::Value> = bindings
                .iter()
                .map(|(field, element)| (field.key().to_string(), element.text().into()))
                .collect();
            let value = serde_json::json!({
                "session": session,
                "info": info,
                "admin": service.is_admin(),
                "coordinator": service.is_coordinator(),
                "developer": service.is_developer(),
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}
