//! Users command - lists the directory without passwords.

use crate::cli::ContextArgs;
use crate::host::open_service;
use crate::output::{OutputFormat, print_table};

/// Run the users command
pub fn run(context: &ContextArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let (service, _) = open_service(context, "/")?;
    let users = service.directory().users()?;

    match format {
        OutputFormat::Human => {
            if users.is_empty() {
                println!("No users found.");
                return Ok(());
            }

            let rows: Vec<Vec<String>> = users
                .iter()
                .map(|u| {
                    vec![
                        u.id.to_string(),
                        u.display_name.clone(),
                        u.email.clone(),
                        u.permission_level.to_string(),
                        if u.blocked { "yes" } else { "no" }.to_string(),
                    ]
                })
                .collect();
            print_table(&["ID", "NAME", "EMAIL", "LEVEL", "BLOCKED"], &rows);
        }
        OutputFormat::Json => {
            let entries: Vec<_> = users
                .iter()
                .map(|u| {
                    serde_json::json!({
                        "id": u.id,
                        "nombre": u.display_name,
                        "correo": u.email,
                        "permisos": u.permission_level,
                        "bloqueado": u.blocked,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string(&entries)?);
        }
    }

    Ok(())
}
