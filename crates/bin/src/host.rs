//! Builds an AuthService for one CLI invocation.
//!
//! The terminal stands in for the browser tab: the state directory is the
//! tab's session storage, redirects and alerts are printed.

use std::cell::RefCell;
use std::rc::Rc;

use shiftgate::{
    AuthConfig, AuthService, directory::InMemoryDirectory, page::Navigator, storage::FileStorage,
};

use crate::cli::ContextArgs;

#[derive(Debug, Default)]
struct ConsoleState {
    path: String,
    redirect: Option<String>,
}

/// Navigator printing alerts to stderr and remembering the last redirect.
#[derive(Clone, Debug, Default)]
pub struct ConsoleNavigator {
    state: Rc<RefCell<ConsoleState>>,
}

impl ConsoleNavigator {
    pub fn new(path: &str) -> Self {
        let navigator = Self::default();
        navigator.state.borrow_mut().path = path.to_string();
        navigator
    }

    /// Target of the last redirect, if the service asked for one.
    pub fn redirect_target(&self) -> Option<String> {
        self.state.borrow().redirect.clone()
    }
}

impl Navigator for ConsoleNavigator {
    fn current_path(&self) -> String {
        self.state.borrow().path.clone()
    }

    fn redirect(&self, target: &str) {
        tracing::debug!(target_page = target, "Redirect requested");
        self.state.borrow_mut().redirect = Some(target.to_string());
    }

    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Load the configuration, the directory and the session storage.
pub fn open_service(
    args: &ContextArgs,
    path: &str,
) -> Result<(AuthService, ConsoleNavigator), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(config_path) => {
            tracing::info!("Using configuration from {}", config_path.display());
            AuthConfig::load_from_file(config_path)?
        }
        None => AuthConfig::default(),
    };

    let directory = InMemoryDirectory::load_from_file(&args.directory).map_err(|e| {
        format!(
            "Failed to load user directory {}: {e}",
            args.directory.display()
        )
    })?;
    let storage = FileStorage::open(&args.state_dir)?;
    tracing::debug!("Session storage at {}", storage.dir().display());

    let navigator = ConsoleNavigator::new(path);
    let service = AuthService::new(
        config,
        Box::new(directory),
        Box::new(storage),
        Box::new(navigator.clone()),
    );
    Ok((service, navigator))
}
