//! Tint Showcase Demo
//!
//! One page exercising both toolkit extension points: headings colored
//! through the highlight binding and a caption run through the title-case
//! transform.

#![allow(missing_docs)]

use tint::wasm_bindgen::{JsCast, JsValue};
use tint::web_sys;
use tint::{Html, Signal, View};
use tint_components::{Caption, Highlight};

/// The sample page: a title-cased about caption, two headings that get
/// highlighted after mounting, one bare heading, and an input whose value
/// drives its own highlight color.
#[derive(Debug)]
pub struct Showcase {
    pub about_text: Signal<String>,
}

impl View for Showcase {
    fn render(&self) -> Html {
        let about = Caption::new(self.about_text.clone()).render();

        Html::new(format!(
            "<section id=\"about\">{about}</section>\
             <h2 id=\"explicit\">Something Yellow</h2>\
             <h2 id=\"defaulted\">The Default (Gray)</h2>\
             <h2>No Highlight</h2>\
             <input id=\"box\" value=\"cyan\" />"
        ))
    }
}

/// Bind the highlight behaviors onto the mounted page.
///
/// The about caption turns skyblue, the explicit heading yellow, the empty
/// binding falls back to the default gray, and the input is rewired so that
/// typing a color name recolors the input itself.
pub fn decorate(document: &web_sys::Document) -> Result<Vec<Highlight>, JsValue> {
    let about = document
        .get_element_by_id("about")
        .ok_or("missing #about section")?;
    let explicit = document
        .get_element_by_id("explicit")
        .ok_or("missing #explicit heading")?;
    let defaulted = document
        .get_element_by_id("defaulted")
        .ok_or("missing #defaulted heading")?;
    let input: web_sys::HtmlInputElement = document
        .get_element_by_id("box")
        .ok_or("missing #box input")?
        .dyn_into()
        .map_err(|_| "#box is not an input")?;

    let bound = Highlight::bind(input.clone().into(), input.value());

    // Every input event pushes the current value back into the color signal
    let color = bound.color().clone();
    let listener = {
        let input = input.clone();
        tint::wasm_bindgen::closure::Closure::<dyn Fn(web_sys::Event)>::new(
            move |_event: web_sys::Event| {
                let value = input.value();
                web_sys::console::log_1(&format!("Recoloring input: {value}").into());
                color.set(value);
            },
        )
    };
    input.add_event_listener_with_callback("input", listener.as_ref().unchecked_ref())?;
    listener.forget();

    Ok(vec![
        Highlight::bind(about, "skyblue"),
        Highlight::bind(explicit, "yellow"),
        Highlight::bind(defaulted, ""),
        bound,
    ])
}
