//! CatalogDesk core logic.
//!
//! Everything a catalog page decides without touching the DOM: wire
//! models, form validation, pagination arithmetic, the API error
//! taxonomy, and the small string plumbing (query strings, cookies).
//! The wasm frontend in `ui/catalog-wasm` is a thin shell over this
//! crate, which keeps all of it testable on the host.

pub mod cookie;
pub mod error;
pub mod model;
pub mod pagination;
pub mod query;
pub mod validate;
