#![allow(missing_docs)]

pub mod prelude;
pub mod signal;
pub mod transform;

pub use wasm_bindgen;
pub use web_sys;

pub use signal::Signal;
pub use transform::{TitleCase, Transform};

/// Trait that defines the view layer for components
///
/// Components must implement this trait to provide their HTML rendering logic
pub trait View {
    /// Render the component to Html
    ///
    /// This method should return the complete HTML representation of the component
    fn render(&self) -> Html;
}

/// Represents rendered HTML content
///
/// Holds the markup a component produced, ready to be written into a DOM
/// element. Rendering to a `String` works on every target; mounting needs a
/// live document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Html {
    content: String,
}

impl Html {
    /// Create Html from already-rendered markup
    pub fn new(content: impl Into<String>) -> Self {
        Html {
            content: content.into(),
        }
    }

    /// Mount the HTML into a DOM element
    ///
    /// # Arguments
    /// * `target` - Optional target element (defaults to document body)
    ///
    /// # Returns
    /// * `Result<(), wasm_bindgen::JsValue>` - Ok if successful, Err with JS error if failed
    pub fn mount(&self, target: Option<&web_sys::Element>) -> Result<(), wasm_bindgen::JsValue> {
        use web_sys::{Element, window};

        let target_element: Element = if let Some(element) = target {
            element.clone()
        } else {
            let window = window().ok_or("No global window object")?;
            let document = window.document().ok_or("No document object")?;
            document.body().ok_or("No body element")?.into()
        };

        target_element.set_inner_html(&self.content);

        Ok(())
    }
}

impl From<String> for Html {
    fn from(content: String) -> Self {
        Html { content }
    }
}

impl From<&str> for Html {
    fn from(content: &str) -> Self {
        Html {
            content: content.to_owned(),
        }
    }
}

impl std::fmt::Display for Html {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

/// Universal tint application that works wherever a DOM is present
#[derive(Default)]
pub struct Tint {}

impl Tint {
    /// Create a new tint application
    pub fn new() -> Self {
        Self {}
    }

    /// Hydrate the client-side application with a component
    pub fn hydrate<T: View>(self, component: T) -> Result<(), wasm_bindgen::JsValue> {
        use web_sys::window;

        let window = window().ok_or("No global window object")?;
        let document = window.document().ok_or("No document object")?;

        let body = document.body().ok_or("No body element")?;

        let html = component.render();
        html.mount(Some(&body))?;

        Ok(())
    }
}
