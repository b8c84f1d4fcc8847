use crate::signal::Signal;

/// A pure string-to-string transform, usable as a rendering "pipe".
///
/// Implementations must be pure: same input, same output, no side effects.
/// Purity is what allows [`pipe`] to cache the result in a derived signal
/// and recompute it only when the source value actually changes.
pub trait Transform {
    /// Apply the transform to `input`.
    fn transform(&self, input: &str) -> String;
}

/// Title-cases its input; see [`tint_text::title_case`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleCase;

impl Transform for TitleCase {
    fn transform(&self, input: &str) -> String {
        tint_text::title_case(input)
    }
}

/// Derive a signal carrying the transformed value of `source`.
///
/// The returned signal follows `source`: whenever the source changes, the
/// transform runs once and subscribers of the derived signal see the new
/// output.
pub fn pipe<T: Transform + 'static>(source: &Signal<String>, transform: T) -> Signal<String> {
    source.derive(move |value| transform.transform(value))
}
