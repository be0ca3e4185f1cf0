//! Output side of the transform: rendering grouped bindings as import
//! statements and prepending them to the original text.

pub mod synthesize;
pub use synthesize::{render_module, synthesize_imports};
#[cfg(test)]
#[path = "tests/synthesize_tests.rs"]
mod synthesize_tests;

pub mod edit;
pub use edit::{TransformResult, prepend_imports};
#[cfg(test)]
#[path = "tests/edit_tests.rs"]
mod edit_tests;
