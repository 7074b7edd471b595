//! Classification and resolution of raw `src`/`href` reference values.
//!
//! Splitting the two concerns keeps them independently testable: filters decide
//! whether a reference names a local file at all, resolution maps the survivors
//! onto absolute filesystem paths.

mod filters;
mod resolve;

pub use filters::normalize_reference;
pub use resolve::{canonicalize_lenient, resolve_reference};
