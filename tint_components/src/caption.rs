use tint::{Html, Signal, TitleCase, Transform, View};

/// Heading that renders its text in title case.
///
/// The raw text lives in a signal so callers can retarget it; casing is
/// applied at render time through the [`Transform`] seam.
#[derive(Debug, Clone)]
pub struct Caption {
    pub text: Signal<String>,
}

impl Caption {
    pub fn new(text: impl Into<Signal<String>>) -> Self {
        Caption { text: text.into() }
    }
}

impl View for Caption {
    fn render(&self) -> Html {
        let cased = TitleCase.transform(&self.text.get());
        Html::new(format!("<h2>{cased}</h2>"))
    }
}
