//! Page host abstractions
//!
//! The pieces of the browser page shiftgate touches: the location (to read
//! the current path and redirect), `alert`, and the DOM elements tagged with
//! `data-admin-only` or `data-user-info`.

pub mod info;
pub mod memory;

pub use info::InfoField;
pub use memory::{MemoryDocument, MemoryElement, RecordingNavigator};

/// Location and dialogs of the current page.
pub trait Navigator {
    /// Path of the current page, e.g. `/pages/admin.html`.
    fn current_path(&self) -> String;

    /// Navigate to `target`, a path relative to the current page.
    fn redirect(&self, target: &str);

    /// Show a blocking message to the user.
    fn alert(&self, message: &str);
}

/// A DOM element shiftgate may show, hide or fill in.
pub trait Element {
    /// Value of the attribute `name`, if present.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Show the element (clear the inline `display`) or hide it (`display: none`).
    fn set_visible(&self, visible: bool);

    /// Replace the element's text content.
    fn set_text(&self, text: &str);
}

/// The document of the current page.
pub trait Document {
    type Element: Element;

    /// All elements matching an attribute selector such as `[data-admin-only]`.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;
}

/// Build the attribute-presence selector for `attribute`.
pub fn attribute_selector(attribute: &str) -> String {
    format!("[{attribute}]")
}
