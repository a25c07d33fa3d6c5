// Domain layer module exports
// Domain is independent of the HTTP adapters and of storage

pub mod repositories;
pub mod thing;

pub use thing::{Thing, ThingFilter};
