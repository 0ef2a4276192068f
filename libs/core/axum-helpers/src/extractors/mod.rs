//! Custom extractors for Axum handlers.
//!
//! Both reject with 422 and a `{"detail": ...}` body, so handlers only ever
//! see well-formed input.

pub mod id_path;
pub mod validated_json;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
