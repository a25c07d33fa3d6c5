// Application services invoked by the request adapters

pub mod thing_service;

pub use thing_service::ThingService;
