//! Browser bindings
//!
//! Implementations of every shiftgate seam over `web-sys`, plus [`WebAuth`],
//! the object page scripts receive instead of a global `auth` singleton:
//!
//! ```js
//! import init, { WebAuth } from "./shiftgate.js";
//! await init();
//! const auth = new WebAuth(db);
//! document.addEventListener("DOMContentLoaded", () => auth.onPageLoad());
//! ```

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::HtmlElement;

use crate::{
    AuthConfig, AuthService, Result, Session,
    directory::{Casilla, DirectoryError, UserDirectory, UserRecord},
    page::{Document, Element, Navigator},
    session::UserId,
    storage::{SessionStorage, StorageError},
};

/// Best-effort text for a thrown JavaScript value.
fn js_reason(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::JSON::stringify(value)
                .ok()
                .and_then(|s| JsValue::from(s).as_string())
        })
        .unwrap_or_else(|| "unknown JavaScript error".to_string())
}

// === Storage ===

/// `window.sessionStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStorage;

impl BrowserSessionStorage {
    fn area(&self) -> Result<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable {
            reason: "no window".to_string(),
        })?;
        let storage = window
            .session_storage()
            .map_err(|e| StorageError::Unavailable {
                reason: js_reason(&e),
            })?
            .ok_or_else(|| StorageError::Unavailable {
                reason: "sessionStorage is disabled".to_string(),
            })?;
        Ok(storage)
    }
}

impl SessionStorage for BrowserSessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .area()?
            .get_item(key)
            .map_err(|e| StorageError::ReadFailed {
                key: key.to_string(),
                reason: js_reason(&e),
            })?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.area()?
            .set_item(key, value)
            .map_err(|e| StorageError::WriteFailed {
                key: key.to_string(),
                reason: js_reason(&e),
            })?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.area()?
            .remove_item(key)
            .map_err(|e| StorageError::WriteFailed {
                key: key.to_string(),
                reason: js_reason(&e),
            })?;
        Ok(())
    }
}

// === Navigation ===

/// `window.location` and `window.alert`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default()
    }

    fn redirect(&self, target: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().set_href(target) {
            tracing::error!(href = target, "Redirect failed: {}", js_reason(&e));
        }
    }

    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            tracing::error!("Alert failed: {}", js_reason(&e));
        }
    }
}

// === DOM ===

/// An element of the live page.
#[derive(Clone, Debug)]
pub struct BrowserElement(HtmlElement);

impl Element for BrowserElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_visible(&self, visible: bool) {
        let display = if visible { "" } else { "none" };
        if let Err(e) = self.0.style().set_property("display", display) {
            tracing::error!("Failed to set display: {}", js_reason(&e));
        }
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

/// The live page document.
#[derive(Clone, Debug)]
pub struct BrowserDocument(web_sys::Document);

impl BrowserDocument {
    /// The document of the current window, if there is one.
    pub fn current() -> Option<Self> {
        web_sys::window()?.document().map(Self)
    }
}

impl Document for BrowserDocument {
    type Element = BrowserElement;

    fn query_all(&self, selector: &str) -> Vec<BrowserElement> {
        let list = match self.0.query_selector_all(selector) {
            Ok(list) => list,
            Err(e) => {
                tracing::error!(selector, "querySelectorAll failed: {}", js_reason(&e));
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(BrowserElement)
            .collect()
    }
}

// === Directory ===

/// The page's `db` object.
///
/// Expected methods: `getUsuarios()`, `verificarPermisos(id, level)` and
/// `obtenerCasillasDeUsuario(id)`.
#[derive(Clone, Debug)]
pub struct JsDirectory {
    db: JsValue,
}

impl JsDirectory {
    pub fn new(db: JsValue) -> Self {
        Self { db }
    }

    fn call(&self, method: &str, args: &[JsValue]) -> Result<JsValue> {
        let failed = |reason: String| DirectoryError::CallFailed {
            method: method.to_string(),
            reason,
        };
        let function = js_sys::Reflect::get(&self.db, &JsValue::from_str(method))
            .map_err(|e| failed(js_reason(&e)))?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| failed("not a function".to_string()))?;
        let args: js_sys::Array = args.iter().collect();
        let value = function
            .apply(&self.db, &args)
            .map_err(|e| failed(js_reason(&e)))?;
        Ok(value)
    }

    fn decode<T: DeserializeOwned>(method: &str, value: &JsValue) -> Result<T> {
        let json = js_sys::JSON::stringify(value)
            .ok()
            .and_then(|s| JsValue::from(s).as_string())
            .ok_or_else(|| DirectoryError::CallFailed {
                method: method.to_string(),
                reason: "returned a value that is not JSON".to_string(),
            })?;
        let decoded =
            serde_json::from_str(&json).map_err(|e| DirectoryError::Malformed { source: e })?;
        Ok(decoded)
    }
}

fn user_id_to_js(user_id: &UserId) -> JsValue {
    match user_id {
        UserId::Number(n) => JsValue::from_f64(*n as f64),
        UserId::Text(s) => JsValue::from_str(s),
    }
}

impl UserDirectory for JsDirectory {
    fn users(&self) -> Result<Vec<UserRecord>> {
        let value = self.call("getUsuarios", &[])?;
        let raw: serde_json::Value = Self::decode("getUsuarios", &value)?;
        let users =
            UserRecord::decode_list(raw).map_err(|e| DirectoryError::Malformed { source: e })?;
        Ok(users)
    }

    fn check_permission(&self, user_id: &UserId, level: &str) -> Result<bool> {
        let value = self.call(
            "verificarPermisos",
            &[user_id_to_js(user_id), JsValue::from_str(level)],
        )?;
        Ok(value.is_truthy())
    }

    fn assigned_casillas(&self, user_id: &UserId) -> Result<Vec<Casilla>> {
        let value = self.call("obtenerCasillasDeUsuario", &[user_id_to_js(user_id)])?;
        Self::decode("obtenerCasillasDeUsuario", &value)
    }
}

// === Page-script facing object ===

fn to_js_error(err: crate::Error) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn session_to_js(session: &Session) -> std::result::Result<JsValue, JsValue> {
    let json = serde_json::to_string(session).map_err(|e| to_js_error(e.into()))?;
    js_sys::JSON::parse(&json)
}

/// An [`AuthService`] wired to the browser, exported to JavaScript.
///
/// Method names follow the ones the turnos page scripts already call.
#[wasm_bindgen]
pub struct WebAuth {
    service: AuthService,
}

#[wasm_bindgen]
impl WebAuth {
    /// Build the service over `sessionStorage`, `window.location` and `db`.
    #[wasm_bindgen(constructor)]
    pub fn new(db: JsValue) -> WebAuth {
        let service = AuthService::new(
            AuthConfig::default(),
            Box::new(JsDirectory::new(db)),
            Box::new(BrowserSessionStorage),
            Box::new(BrowserNavigator),
        );
        WebAuth { service }
    }

    /// Log in; returns the new session or throws.
    pub fn login(&mut self, email: &str, password: &str) -> std::result::Result<JsValue, JsValue> {
        let session = self.service.login(email, password).map_err(to_js_error)?;
        session_to_js(&session)
    }

    pub fn logout(&mut self) -> std::result::Result<(), JsValue> {
        self.service.logout().map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = isAuthenticated)]
    pub fn is_authenticated(&self) -> bool {
        self.service.is_authenticated()
    }

    #[wasm_bindgen(js_name = hasPermission)]
    pub fn has_permission(&self, level: &str) -> bool {
        self.service.has_permission(level)
    }

    #[wasm_bindgen(js_name = isAdmin)]
    pub fn is_admin(&self) -> bool {
        self.service.is_admin()
    }

    #[wasm_bindgen(js_name = isCoordinador)]
    pub fn is_coordinator(&self) -> bool {
        self.service.is_coordinator()
    }

    #[wasm_bindgen(js_name = isDesarrollador)]
    pub fn is_developer(&self) -> bool {
        self.service.is_developer()
    }

    /// The current session as a plain object, or `null`.
    #[wasm_bindgen(js_name = getCurrentUser)]
    pub fn current_user(&self) -> std::result::Result<JsValue, JsValue> {
        match self.service.current_user() {
            Some(session) => session_to_js(session),
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen(js_name = checkPageAccess)]
    pub fn check_page_access(&self) -> bool {
        self.service.check_page_access()
    }

    #[wasm_bindgen(js_name = updateUIByPermissions)]
    pub fn update_ui(&self) {
        match BrowserDocument::current() {
            Some(document) => self.service.update_ui(&document),
            None => tracing::warn!("No document to update"),
        }
    }

    /// Gate the page and refresh the UI; meant for `DOMContentLoaded`.
    #[wasm_bindgen(js_name = onPageLoad)]
    pub fn on_page_load(&self) -> bool {
        match BrowserDocument::current() {
            Some(document) => self.service.on_page_load(&document),
            None => self.service.check_page_access(),
        }
    }
}
