//! In-memory page host
//!
//! A tiny stand-in for the browser: elements with attributes, a visibility
//! flag and text, plus a navigator that records redirects and alerts. Handles
//! are cheap clones sharing state, so callers can keep one and inspect it
//! after handing the other to shiftgate.

use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use super::{Document, Element, Navigator};

#[derive(Debug)]
struct ElementState {
    attributes: BTreeMap<String, String>,
    visible: bool,
    text: String,
}

/// An element of a [`MemoryDocument`].
#[derive(Clone, Debug)]
pub struct MemoryElement {
    state: Rc<RefCell<ElementState>>,
}

impl MemoryElement {
    /// A visible element without attributes or text.
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(ElementState {
                attributes: BTreeMap::new(),
                visible: true,
                text: String::new(),
            })),
        }
    }

    /// Set an attribute, builder style.
    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.state
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Set the text, builder style.
    pub fn with_text(self, text: &str) -> Self {
        self.state.borrow_mut().text = text.to_string();
        self
    }

    /// Whether the element is currently shown.
    pub fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }

    /// Current text content.
    pub fn text(&self) -> String {
        self.state.borrow().text.clone()
    }

    fn matches(&self, selector: &str) -> bool {
        let Some(inner) = selector
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
        else {
            return false;
        };
        let state = self.state.borrow();
        match inner.split_once('=') {
            Some((name, value)) => {
                let value = value.trim_matches(|c| c == '"' || c == '\'');
                state.attributes.get(name).is_some_and(|v| v == value)
            }
            None => state.attributes.contains_key(inner),
        }
    }
}

impl Default for MemoryElement {
    fn default() -> Self {
        Self::new()
    }
}

impl Element for MemoryElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().attributes.get(name).cloned()
    }

    fn set_visible(&self, visible: bool) {
        self.state.borrow_mut().visible = visible;
    }

    fn set_text(&self, text: &str) {
        self.state.borrow_mut().text = text.to_string();
    }
}

/// A document made of [`MemoryElement`]s.
///
/// Only attribute selectors (`[name]` and `[name="value"]`) are supported.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    elements: Vec<MemoryElement>,
}

impl MemoryDocument {
    /// An empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element and return a handle to it.
    pub fn push(&mut self, element: MemoryElement) -> MemoryElement {
        self.elements.push(element.clone());
        element
    }

    /// All elements in document order.
    pub fn elements(&self) -> &[MemoryElement] {
        &self.elements
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn query_all(&self, selector: &str) -> Vec<MemoryElement> {
        self.elements
            .iter()
            .filter(|e| e.matches(selector))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Default)]
struct NavigatorState {
    path: String,
    redirects: Vec<String>,
    alerts: Vec<String>,
}

/// A navigator that records instead of navigating.
#[derive(Clone, Debug, Default)]
pub struct RecordingNavigator {
    state: Rc<RefCell<NavigatorState>>,
}

impl RecordingNavigator {
    /// A navigator sitting on `path`.
    pub fn new(path: &str) -> Self {
        let navigator = Self::default();
        navigator.set_path(path);
        navigator
    }

    /// Move to another page without recording a redirect.
    pub fn set_path(&self, path: &str) {
        self.state.borrow_mut().path = path.to_string();
    }

    /// Every redirect target, oldest first.
    pub fn redirects(&self) -> Vec<String> {
        self.state.borrow().redirects.clone()
    }

    /// The most recent redirect target.
    pub fn last_redirect(&self) -> Option<String> {
        self.state.borrow().redirects.last().cloned()
    }

    /// Every alert message, oldest first.
    pub fn alerts(&self) -> Vec<String> {
        self.state.borrow().alerts.clone()
    }

    /// Forget recorded redirects and alerts.
    pub fn clear(&self) {
        let mut state = self.state.borrow_mut();
        state.redirects.clear();
        state.alerts.clear();
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.state.borrow().path.clone()
    }

    fn redirect(&self, target: &str) {
        self.state.borrow_mut().redirects.push(target.to_string());
    }

    fn alert(&self, message: &str) {
        self.state.borrow_mut().alerts.push(message.to_string());
    }
}
