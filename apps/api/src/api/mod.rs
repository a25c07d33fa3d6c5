// API layer module (adapters between HTTP and the services)

pub mod errors;
pub mod extract;
pub mod handlers;
pub mod helper;
pub mod response;
