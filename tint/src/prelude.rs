pub use crate::{
    Html, Tint, View, derive, effect, signal, signal::Signal,
    transform::{TitleCase, Transform},
};
pub use wasm_bindgen::JsCast;
