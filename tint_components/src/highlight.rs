use tint::Signal;
use tint::effect;
use tint::wasm_bindgen::{JsCast, JsValue};
use tint::web_sys;

/// Background used when the bound color is empty (lightgray)
pub const DEFAULT_COLOR: &str = "rgb(211, 211, 211)";

/// Pick the effective background: a non-empty override wins over the default
pub fn resolve_color(color: &str) -> &str {
    if color.is_empty() { DEFAULT_COLOR } else { color }
}

/// Write `color` onto `element` as its background and stamp the element as
/// highlighted.
///
/// This is the entire DOM surface of the directive: one style write plus a
/// `data-highlight` marker attribute, fed by an already-resolved color
/// string. Resolution and reactivity happen elsewhere.
pub fn apply(element: &web_sys::Element, color: &str) -> Result<(), JsValue> {
    let styled: &web_sys::HtmlElement = element
        .dyn_ref()
        .ok_or("highlight target is not an HTML element")?;

    styled.style().set_property("background-color", color)?;
    element.set_attribute("data-highlight", "true")?;

    Ok(())
}

/// An element whose background follows a color signal.
#[derive(Debug)]
pub struct Highlight {
    element: web_sys::Element,
    color: Signal<String>,
}

impl Highlight {
    /// Bind `element`'s background to `color`.
    ///
    /// The element is colored immediately and recolored every time the
    /// signal changes; an empty string falls back to [`DEFAULT_COLOR`].
    pub fn bind(element: web_sys::Element, color: impl Into<Signal<String>>) -> Self {
        let color = color.into();

        {
            let element = element.clone();
            let color = color.clone();
            effect!({
                let bound = color.get();
                if let Err(err) = apply(&element, resolve_color(&bound)) {
                    web_sys::console::error_1(&err);
                }
            });
        }

        Highlight { element, color }
    }

    /// The bound color signal; setting it recolors the element.
    pub fn color(&self) -> &Signal<String> {
        &self.color
    }

    /// The element being highlighted.
    pub fn element(&self) -> &web_sys::Element {
        &self.element
    }
}
