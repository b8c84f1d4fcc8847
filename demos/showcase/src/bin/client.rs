#![allow(missing_docs)]

use showcase::{Showcase, decorate};
use tint::Tint;
use tint::web_sys;

fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let page = Showcase {
        about_text: "about this sample".into(),
    };

    Tint::new().hydrate(page).unwrap();

    let document = web_sys::window().unwrap().document().unwrap();
    let highlights = decorate(&document).unwrap();

    web_sys::console::log_1(&format!("Bound {} highlights", highlights.len()).into());
}
