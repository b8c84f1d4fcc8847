#![allow(missing_docs)]

pub mod caption;
pub mod highlight;

pub use caption::Caption;
pub use highlight::Highlight;
